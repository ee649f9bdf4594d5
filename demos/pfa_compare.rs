use impozit::core::*;
use impozit::pfa::*;
use rust_decimal_macros::dec;

fn main() {
    let rules = FiscalRules::default();

    let cases = [
        ("IT services", dec!(100000), dec!(20000), dec!(30000)),
        ("Small trade", dec!(40000), dec!(0), dec!(100000)),
        ("Over the norm ceiling", dec!(150000), dec!(40000), dec!(30000)),
    ];

    for (label, revenue, expenses, norm) in cases {
        println!("=== {label} ===");
        let c = compare(revenue, expenses, norm, &rules).unwrap();
        for r in [&c.real, &c.norm] {
            println!(
                "  {:<16} taxes {:>9}  net {:>9}  rate {:>6}%  CAS: {}",
                r.system.display_name(),
                r.total_taxes,
                r.net_remaining,
                r.effective_rate,
                r.cas_status.description()
            );
        }
        println!("  → {} (difference {} RON)", c.recommended.display_name(), c.savings);
        if let Some(note) = &c.note {
            println!("  note: {note}");
        }
        println!();
    }
}
