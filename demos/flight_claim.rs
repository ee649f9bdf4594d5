use chrono::NaiveDate;
use impozit::core::*;
use impozit::flight::*;
use rust_decimal_macros::dec;

fn main() {
    let rules = FiscalRules::default();
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let flown = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();

    let distance = route_distance("București", "Londra").unwrap_or(2100);
    let claim = FlightClaim::new(distance, flown).delay_hours(dec!(4.5));
    let r = calculate_compensation(&claim, today, &rules).unwrap();

    println!("=== București → Londra, 4.5 h late ===");
    println!("  {}", r.reason);
    println!("  compensation: {} EUR", r.compensation);
    if let Some(p) = &r.prescription {
        println!("  claim before {} ({} years left)", p.prescription_date, p.years_remaining);
    }
    for (i, step) in r.next_steps.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }

    println!("\n=== Family of three, cancelled ===");
    let family: Vec<FlightClaim> = (0..3)
        .map(|_| FlightClaim::new(650, flown).cancelled(true))
        .collect();
    let g = calculate_group(&family, today, &rules).unwrap();
    println!(
        "  {} of {} eligible, total {} EUR",
        g.eligible_flights, g.total_flights, g.total_compensation
    );
}
