use chrono::NaiveDate;
use impozit::core::*;
use impozit::efactura::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() {
    let rules = FiscalRules::default();
    let calendar = rules.calendar();
    let today = date(2026, 4, 16);

    println!("=== Deadlines ===");
    let batch = [
        InvoiceRef::numbered("F-2026-101", date(2026, 4, 2)),
        InvoiceRef::numbered("F-2026-102", date(2026, 4, 9)),
        InvoiceRef::new(date(2026, 4, 15)),
    ];
    let check = check_invoices(&batch, today, &rules, &calendar);
    for inv in &check.invoices {
        println!(
            "  {:<12} issued {}  due {}  {}",
            inv.number,
            inv.deadline.invoice_date,
            inv.deadline.deadline,
            inv.deadline.status.label()
        );
    }
    println!("  {}", check.message);

    println!("\n=== Possible fines ===");
    for size in CompanySize::ALL {
        let p = calculate_penalty(size, check.summary.overdue.max(1) as u32, &rules).unwrap();
        println!(
            "  {:<48} {} - {} RON",
            size.description(),
            p.total_estimated_fine.min,
            p.total_estimated_fine.max
        );
    }
}
