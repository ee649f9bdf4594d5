use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::rules::*;

/// Validate a rates table.
/// Returns all validation errors found (not just the first).
pub fn validate_rules(rules: &FiscalRules) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !(1990..=2100).contains(&rules.year) {
        errors.push(ValidationError::new(
            "year",
            format!("fiscal year {} is out of range", rules.year),
        ));
    }

    validate_salary(&rules.salary, &mut errors);
    validate_pfa(&rules.pfa, &mut errors);
    validate_medical(&rules.medical_leave, &mut errors);
    validate_car_tax(&rules.car_tax, &mut errors);
    validate_efactura(&rules.efactura, &mut errors);
    validate_flight(&rules.flight, &mut errors);

    errors
}

fn validate_salary(s: &SalaryRules, errors: &mut Vec<ValidationError>) {
    positive("salary.minimum_salary", s.minimum_salary, errors);
    percent("salary.cas_rate", s.cas_rate, errors);
    percent("salary.cass_rate", s.cass_rate, errors);
    percent("salary.income_tax_rate", s.income_tax_rate, errors);
    percent("salary.cam_rate", s.cam_rate, errors);
    non_negative("salary.personal_deduction", s.personal_deduction, errors);

    // Gross → net only makes sense while contributions leave something to tax.
    if s.cas_rate + s.cass_rate >= dec!(100) {
        errors.push(ValidationError::new(
            "salary",
            "cas_rate + cass_rate must be below 100",
        ));
    }
}

fn validate_pfa(p: &PfaRules, errors: &mut Vec<ValidationError>) {
    positive("pfa.minimum_salary", p.minimum_salary, errors);
    percent("pfa.income_tax_rate", p.income_tax_rate, errors);
    percent("pfa.cass_rate", p.cass_rate, errors);
    percent("pfa.cas_rate", p.cas_rate, errors);
    positive("pfa.cass_min_threshold", p.cass_min_threshold, errors);
    positive("pfa.cass_max_threshold", p.cass_max_threshold, errors);
    positive("pfa.cas_min_optional", p.cas_min_optional, errors);
    positive("pfa.cas_obligatory_24", p.cas_obligatory_24, errors);
    positive("pfa.norm_limit_eur", p.norm_limit_eur, errors);
    positive("pfa.eur_ron", p.eur_ron, errors);

    if p.cass_min_threshold > p.cass_max_threshold {
        errors.push(ValidationError::new(
            "pfa.cass_min_threshold",
            "CASS floor must not exceed the CASS ceiling",
        ));
    }
    if p.cas_min_optional > p.cas_obligatory_24 {
        errors.push(ValidationError::new(
            "pfa.cas_min_optional",
            "12-salary CAS threshold must not exceed the 24-salary threshold",
        ));
    }
}

fn validate_medical(m: &MedicalLeaveRules, errors: &mut Vec<ValidationError>) {
    if m.minimum_months == 0 || m.minimum_months > 6 {
        errors.push(ValidationError::new(
            "medical_leave.minimum_months",
            "must be between 1 and 6 (the reference period is six months)",
        ));
    }
    if m.default_days_per_month == 0 || m.default_days_per_month > 31 {
        errors.push(ValidationError::new(
            "medical_leave.default_days_per_month",
            "must be between 1 and 31",
        ));
    }
    positive("medical_leave.max_base_salaries", m.max_base_salaries, errors);
    percent("medical_leave.cas_rate", m.cas_rate, errors);
    percent("medical_leave.cass_rate", m.cass_rate, errors);
    percent("medical_leave.income_tax_rate", m.income_tax_rate, errors);
    non_negative("medical_leave.personal_deduction", m.personal_deduction, errors);
    for (code, rate) in &m.code_rates {
        percent(&format!("medical_leave.code_rates.{code}"), *rate, errors);
    }
}

fn validate_car_tax(c: &CarTaxRules, errors: &mut Vec<ValidationError>) {
    let bands = [
        ("car_tax.under_1600", c.under_1600),
        ("car_tax.from_1601_to_2000", c.from_1601_to_2000),
        ("car_tax.from_2001_to_2600", c.from_2001_to_2600),
        ("car_tax.from_2601_to_3000", c.from_2601_to_3000),
        ("car_tax.over_3000", c.over_3000),
    ];
    for (field, value) in bands {
        non_negative(field, value, errors);
    }
    for pair in bands.windows(2) {
        if pair[1].1 < pair[0].1 {
            errors.push(ValidationError::new(
                pair[1].0,
                format!("band must not be lower than {}", pair[0].0),
            ));
        }
    }
    non_negative("car_tax.motorcycle_under_1600", c.motorcycle_under_1600, errors);
    non_negative("car_tax.motorcycle_over_1600", c.motorcycle_over_1600, errors);
    if let Some(reduction) = c.hybrid_reduction {
        percent("car_tax.hybrid_reduction", reduction, errors);
    }
    if c.default_location_coefficient < Decimal::ZERO || c.default_location_coefficient > dec!(2)
    {
        errors.push(ValidationError::new(
            "car_tax.default_location_coefficient",
            "must be between 0 and 2",
        ));
    }
}

fn validate_efactura(e: &EfacturaRules, errors: &mut Vec<ValidationError>) {
    if e.business_days == 0 {
        errors.push(ValidationError::new(
            "efactura.business_days",
            "must be at least 1",
        ));
    }
    let ranges = [
        ("micro", e.fine_min_micro, e.fine_max_micro),
        ("medium", e.fine_min_medium, e.fine_max_medium),
        ("large", e.fine_min_large, e.fine_max_large),
    ];
    for (size, min, max) in ranges {
        non_negative(&format!("efactura.fine_min_{size}"), min, errors);
        if min > max {
            errors.push(ValidationError::new(
                format!("efactura.fine_max_{size}"),
                "maximum fine must not be lower than the minimum",
            ));
        }
    }
}

fn validate_flight(f: &FlightRules, errors: &mut Vec<ValidationError>) {
    non_negative("flight.minimum_delay_hours", f.minimum_delay_hours, errors);
    non_negative("flight.under_1500km", f.under_1500km, errors);
    non_negative("flight.from_1500_to_3500km", f.from_1500_to_3500km, errors);
    non_negative("flight.over_3500km", f.over_3500km, errors);
    if f.prescription_years == 0 {
        errors.push(ValidationError::new(
            "flight.prescription_years",
            "must be at least 1",
        ));
    }
}

fn percent(field: &str, value: Decimal, errors: &mut Vec<ValidationError>) {
    if value < Decimal::ZERO || value > dec!(100) {
        errors.push(ValidationError::new(
            field,
            format!("rate {value} must be between 0 and 100"),
        ));
    }
}

fn positive(field: &str, value: Decimal, errors: &mut Vec<ValidationError>) {
    if value <= Decimal::ZERO {
        errors.push(ValidationError::new(field, "must be positive"));
    }
}

fn non_negative(field: &str, value: Decimal, errors: &mut Vec<ValidationError>) {
    if value < Decimal::ZERO {
        errors.push(ValidationError::new(field, "must not be negative"));
    }
}
