//! Loading rates tables from disk.

use std::io::Write;

use impozit::core::*;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_rules(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn full_rates_file() {
    let file = write_rules(
        r#"
year = 2027

[salary]
minimum_salary = 4325
personal_deduction = 0

[pfa]
minimum_salary = 4325
eur_ron = 5.05

[car_tax]
hybrid_reduction = 50
default_location_coefficient = 0.85

[efactura]
business_days = 5

[flight]
prescription_years = 3

[[holidays]]
date = "2027-03-08"
name = "Ziua Femeii"
kind = "other"
"#,
    );
    let r = FiscalRules::from_toml_file(file.path()).unwrap();
    assert_eq!(r.year, 2027);
    assert_eq!(r.salary.minimum_salary, dec!(4325));
    assert_eq!(r.salary.cas_rate, dec!(25));
    assert_eq!(r.pfa.eur_ron, dec!(5.05));
    assert_eq!(r.car_tax.hybrid_reduction, Some(dec!(50)));
    assert_eq!(r.car_tax.default_location_coefficient, dec!(0.85));
    assert_eq!(r.holidays.len(), 1);

    let cal = r.calendar();
    assert!(cal.is_holiday(chrono::NaiveDate::from_ymd_opt(2027, 3, 8).unwrap()));
}

#[test]
fn empty_file_gives_defaults() {
    let file = write_rules("");
    let r = FiscalRules::from_toml_file(file.path()).unwrap();
    assert_eq!(r.year, DEFAULT_YEAR);
    assert_eq!(r.car_tax, CarTaxRules::default());
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FiscalRules::from_toml_file(&dir.path().join("absent.toml")).unwrap_err();
    match err {
        FiscalError::Config(msg) => assert!(msg.contains("absent.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_values_in_file_are_rules_error() {
    let file = write_rules("[car_tax]\ndefault_location_coefficient = 3\n");
    assert!(matches!(
        FiscalRules::from_toml_file(file.path()),
        Err(FiscalError::Rules(_))
    ));
}

#[test]
fn unquoted_holiday_date_is_rejected() {
    let file = write_rules("[[holidays]]\ndate = 2027-03-08\nname = \"x\"\n");
    assert!(matches!(
        FiscalRules::from_toml_file(file.path()),
        Err(FiscalError::Config(_))
    ));
}
