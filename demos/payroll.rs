use impozit::core::*;
use impozit::salary::*;
use rust_decimal_macros::dec;

fn main() {
    let rules = FiscalRules::default();

    // ── 1. Gross → net ────────────────────────────────────────────────
    println!("=== Gross to net ===");
    for gross in [dec!(4050), dec!(5000), dec!(10000)] {
        match calculate_salary(SalaryDirection::GrossToNet, gross, &rules) {
            Ok(p) => println!(
                "  brut {:>9} → net {:>9}  (CAS {}, CASS {}, impozit {}, cost angajator {})",
                p.gross, p.net, p.cas, p.cass, p.income_tax, p.employer_cost
            ),
            Err(e) => println!("  {gross}: {e}"),
        }
    }

    // ── 2. Net → gross ────────────────────────────────────────────────
    println!("\n=== Net to gross ===");
    let p = calculate_salary(SalaryDirection::NetToGross, dec!(3000), &rules).unwrap();
    println!("  net dorit 3000 → brut {} (net calculat {})", p.gross, p.net);

    // ── 3. Invalid input ──────────────────────────────────────────────
    println!("\n=== Error ===");
    if let Err(e) = calculate_salary(SalaryDirection::GrossToNet, dec!(0), &rules) {
        println!("  {e}");
    }
}
