//! Property-based tests for the calculators.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "all")]

use chrono::NaiveDate;
use impozit::cartax::*;
use impozit::core::*;
use impozit::flight::*;
use impozit::medical::*;
use impozit::pfa::*;
use impozit::salary::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amounts in bani between `lo` and `hi` RON.
fn ron(lo: i64, hi: i64) -> impl Strategy<Value = Decimal> {
    (lo * 100..hi * 100).prop_map(|bani| Decimal::new(bani, 2))
}

/// Any `Decimal`, across the whole range and every scale.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, neg, scale)| Decimal::from_parts(lo, mid, hi, neg, scale))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

proptest! {
    #[test]
    fn salary_components_reconcile(gross in ron(1, 100_000)) {
        let p = gross_to_net(gross, &SalaryRules::default()).unwrap();
        prop_assert_eq!(p.cas + p.cass + p.income_tax + p.net, p.gross);
        prop_assert!(p.net > Decimal::ZERO);
        prop_assert!(p.net < p.gross);
        prop_assert!(p.taxable_income >= Decimal::ZERO);
    }

    #[test]
    fn net_to_gross_reaches_target(net in ron(100, 50_000)) {
        let p = net_to_gross(net, &SalaryRules::default()).unwrap();
        prop_assert!(p.net >= net, "net {} below target {}", p.net, net);
        prop_assert!(p.net - net <= dec!(0.02), "net {} overshoots {}", p.net, net);
    }

    #[test]
    fn gross_to_net_is_monotone(a in ron(1, 50_000), step in ron(1, 1_000)) {
        let rules = SalaryRules::default();
        let low = gross_to_net(a, &rules).unwrap();
        let high = gross_to_net(a + step, &rules).unwrap();
        prop_assert!(high.net >= low.net);
    }

    #[test]
    fn pfa_totals_are_sums(revenue in ron(1_000, 500_000), expenses in ron(0, 400_000)) {
        let rules = FiscalRules::default();
        let r = calculate_real(revenue, expenses, &rules).unwrap();
        prop_assert_eq!(r.total_taxes, r.income_tax + r.cass + r.cas);
        prop_assert!(r.cass_base >= r.thresholds.cass_min);
        prop_assert!(r.cass_base <= r.thresholds.cass_max);
    }

    #[test]
    fn recommendation_matches_net(
        revenue in ron(1_000, 120_000),
        expenses in ron(0, 60_000),
        norm in ron(5_000, 100_000),
    ) {
        let c = compare(revenue, expenses, norm, &FiscalRules::default()).unwrap();
        prop_assert!(!c.norm.over_limit);
        let winner = match c.recommended {
            TaxSystem::Real => &c.real,
            TaxSystem::Norm => &c.norm,
        };
        prop_assert_eq!(winner.net_remaining, c.real.net_remaining.max(c.norm.net_remaining));
        prop_assert_eq!(c.savings, (c.real.net_remaining - c.norm.net_remaining).abs());
    }

    #[test]
    fn car_tax_grows_with_engine(cc in 1u32..6000, extra in 0u32..2000) {
        let rules = FiscalRules::default();
        let calc = CarTaxCalculator::new(&rules);
        let small = calc.calculate(&CarTaxInput::new(cc), today()).unwrap();
        let large = calc.calculate(&CarTaxInput::new(cc + extra), today()).unwrap();
        prop_assert!(large.final_tax >= small.final_tax);
        prop_assert!(small.final_tax >= Decimal::ZERO);
        prop_assert_eq!(small.final_tax.scale(), 0);
    }

    #[test]
    fn month_days_partition(year in 2025i32..=2027, month in 1u32..=12) {
        let m = working_days(year, month, &HolidayCalendar::romania()).unwrap();
        prop_assert_eq!(m.working_days + m.weekend_days + m.holiday_days, m.total_days);
    }

    #[test]
    fn business_days_land_on_working_days(offset in 0i64..1000, days in 1u32..30) {
        let cal = HolidayCalendar::romania();
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset);
        let end = add_business_days(start, days, &cal);
        prop_assert!(end > start);
        prop_assert!(cal.is_working_day(end));
    }

    #[test]
    fn compensation_is_a_known_amount(
        km in 100u32..10_000,
        delay_tenths in 0i64..100,
        cancelled in any::<bool>(),
    ) {
        let claim = FlightClaim::new(km, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            .delay_hours(Decimal::new(delay_tenths, 1))
            .cancelled(cancelled);
        let r = calculate_compensation(&claim, today(), &FiscalRules::default()).unwrap();
        let allowed = [dec!(0), dec!(125), dec!(250), dec!(400), dec!(600)];
        prop_assert!(allowed.contains(&r.compensation));
        prop_assert_eq!(r.eligible, r.compensation > Decimal::ZERO);
    }

    #[test]
    fn calculators_reject_rather_than_overflow(amount in any_amount()) {
        let rules = FiscalRules::default();
        for direction in [SalaryDirection::GrossToNet, SalaryDirection::NetToGross] {
            if calculate_salary(direction, amount, &rules).is_ok() {
                prop_assert!(round_money(amount) <= MAX_AMOUNT);
            }
        }
        let _ = calculate_real(amount, dec!(0), &rules);
        let _ = calculate_real(dec!(100_000), amount, &rules);
        let _ = compare(amount, dec!(0), amount, &rules);
        let salaries: Vec<_> = (0..6).map(|_| MonthlySalary::new(amount)).collect();
        let _ = calculate_indemnity(MedicalCode::Ordinary, 10, &salaries, &rules);
        let tco = TcoInput::new(CarTaxInput::new(1600))
            .annual_km(amount)
            .fuel_price(amount)
            .consumption(amount);
        let _ = CarTaxCalculator::new(&rules).estimate_tco(&tco, today());
        let claim = FlightClaim::new(1000, today()).delay_hours(amount);
        let _ = calculate_compensation(&claim, today(), &rules);
    }
}

#[test]
fn extreme_amounts_are_input_errors() {
    let rules = FiscalRules::default();
    let huge = dec!(10_000_000_000_000_000_000_000_000_000);
    for direction in [SalaryDirection::GrossToNet, SalaryDirection::NetToGross] {
        assert!(matches!(
            calculate_salary(direction, huge, &rules),
            Err(FiscalError::InvalidInput(_))
        ));
    }
    assert!(calculate_real(huge, dec!(0), &rules).is_err());
    assert!(calculate_real(dec!(100_000), huge, &rules).is_err());
    assert!(calculate_norm(dec!(100_000), huge, &rules).is_err());
    assert!(compare(huge, dec!(0), dec!(50_000), &rules).is_err());
    let salaries: Vec<_> = (0..6).map(|_| MonthlySalary::new(huge)).collect();
    assert!(calculate_indemnity(MedicalCode::Ordinary, 10, &salaries, &rules).is_err());
    let tco = TcoInput::new(CarTaxInput::new(1600)).annual_km(huge);
    assert!(CarTaxCalculator::new(&rules).estimate_tco(&tco, today()).is_err());
}
