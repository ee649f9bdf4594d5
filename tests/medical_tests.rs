#![cfg(feature = "medical")]

use impozit::core::*;
use impozit::medical::*;
use rust_decimal_macros::dec;

fn months(gross: &[i64]) -> Vec<MonthlySalary> {
    gross.iter().map(|&g| MonthlySalary::new(g.into())).collect()
}

#[test]
fn ordinary_illness() {
    let r = calculate_indemnity(
        MedicalCode::Ordinary,
        10,
        &months(&[6000; 6]),
        &FiscalRules::default(),
    )
    .unwrap();
    assert_eq!(r.rate, dec!(75));
    assert_eq!(r.contribution_months, 6);
    assert_eq!(r.total_gross, dec!(2045.46));
    assert_eq!(r.net_amount, dec!(1431.68));
    assert_eq!(r.total_gross, r.employer_amount + r.state_amount);
    assert_eq!(r.net_amount, r.total_gross - r.cas - r.cass - r.income_tax);
}

#[test]
fn worked_days_change_daily_average() {
    let salaries: Vec<MonthlySalary> = (0..6)
        .map(|_| MonthlySalary::with_days(dec!(4400), 20))
        .collect();
    let r = calculate_indemnity(MedicalCode::Emergency, 5, &salaries, &FiscalRules::default())
        .unwrap();
    assert_eq!(r.daily_average, dec!(220));
    assert_eq!(r.daily_benefit, dec!(220));
    assert_eq!(r.employer_amount, dec!(1100));
    assert_eq!(r.state_days, 0);
}

#[test]
fn zero_worked_days_fall_back_to_default() {
    let salaries: Vec<MonthlySalary> = (0..6)
        .map(|_| MonthlySalary::with_days(dec!(4400), 0))
        .collect();
    let r = calculate_indemnity(MedicalCode::Emergency, 1, &salaries, &FiscalRules::default())
        .unwrap();
    assert_eq!(r.daily_average, dec!(200));
}

#[test]
fn rate_overrides_from_rules() {
    let rules = FiscalRules::from_toml_str("[medical_leave.code_rates]\n\"08\" = 90\n").unwrap();
    assert_eq!(MedicalCode::Maternity.rate(&rules.medical_leave), dec!(90));
    assert_eq!(MedicalCode::Ordinary.rate(&rules.medical_leave), dec!(75));
}

#[test]
fn too_few_months() {
    let err = calculate_indemnity(
        MedicalCode::Ordinary,
        5,
        &months(&[5000, 5000, 5000]),
        &FiscalRules::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        FiscalError::InsufficientContributions {
            required: 6,
            found: 3
        }
    ));
}

#[test]
fn codes_parse() {
    assert_eq!("1".parse::<MedicalCode>().unwrap(), MedicalCode::Ordinary);
    assert_eq!("15".parse::<MedicalCode>().unwrap(), MedicalCode::ChildCare);
    assert!("99".parse::<MedicalCode>().is_err());
    assert_eq!(MedicalCode::ALL.len(), 6);
}
