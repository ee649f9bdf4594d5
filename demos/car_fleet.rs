use chrono::NaiveDate;
use impozit::cartax::*;
use impozit::core::*;

fn main() {
    let rules = FiscalRules::default();
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let calc = CarTaxCalculator::new(&rules);

    // ── 1. One vehicle ────────────────────────────────────────────────
    println!("=== Single vehicle ===");
    let input = CarTaxInput::new(1998).location("Craiova").registration_year(2008);
    let r = calc.calculate(&input, today).unwrap();
    for step in &r.breakdown {
        println!("  {step}");
    }

    // ── 2. Same car, different localities ─────────────────────────────
    println!("\n=== By locality ===");
    let cmp = calc.compare_locations(1600, VehicleType::Car, today).unwrap();
    for row in &cmp.results {
        println!("  {:<12} {:>4} RON", row.location, row.tax);
    }
    println!("  savings: {} RON", cmp.savings);

    // ── 3. Company fleet ──────────────────────────────────────────────
    println!("\n=== Fleet ===");
    let fleet = [
        CarTaxInput::new(1461).location("Cluj-Napoca").company(true),
        CarTaxInput::new(2143)
            .vehicle_type(VehicleType::Utility)
            .location("Cluj-Napoca")
            .registration_year(2012)
            .company(true),
        CarTaxInput::new(0).vehicle_type(VehicleType::Electric).company(true),
    ];
    let f = calc.calculate_fleet(&fleet, today).unwrap();
    for v in &f.vehicles {
        println!("  #{} {:<16} {:>4} RON", v.index, v.result.vehicle_type_name, v.tax);
    }
    println!("  total {} RON, average {}, per quarter {}", f.total_tax, f.average_tax, f.quarterly_total);

    // ── 4. Cost of ownership ──────────────────────────────────────────
    println!("\n=== Yearly cost of ownership ===");
    let tco = calc
        .estimate_tco(&TcoInput::new(CarTaxInput::new(1600)), today)
        .unwrap();
    println!(
        "  {} RON/year without CASCO, {} with ({} RON/km)",
        tco.total_without_casco, tco.total_with_casco, tco.cost_per_km
    );
}
