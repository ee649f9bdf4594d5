//! The rates table ("fiscal rules") that drives every calculator.
//!
//! All percentages are stored as percent values (`25` means 25 %).
//! Every section and field may be omitted in a TOML rates file; missing
//! values fall back to the defaults below.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::calendar::{Holiday, HolidayCalendar};
use super::error::FiscalError;

/// Fiscal year used when no year is given.
pub const DEFAULT_YEAR: i32 = 2026;

/// Complete rates table for one fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiscalRules {
    /// Fiscal year these rates apply to.
    pub year: i32,
    pub salary: SalaryRules,
    pub pfa: PfaRules,
    pub medical_leave: MedicalLeaveRules,
    pub car_tax: CarTaxRules,
    pub efactura: EfacturaRules,
    pub flight: FlightRules,
    /// Extra holidays on top of the built-in Romanian legal holidays.
    /// An entry on an existing date replaces the built-in one.
    pub holidays: Vec<Holiday>,
}

impl Default for FiscalRules {
    fn default() -> Self {
        Self::for_year(DEFAULT_YEAR)
    }
}

impl FiscalRules {
    /// Default rates stamped with the given fiscal year.
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            salary: SalaryRules::default(),
            pfa: PfaRules::default(),
            medical_leave: MedicalLeaveRules::default(),
            car_tax: CarTaxRules::default(),
            efactura: EfacturaRules::default(),
            flight: FlightRules::default(),
            holidays: Vec::new(),
        }
    }

    /// Parse a rates table from TOML and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, FiscalError> {
        let rules: FiscalRules = toml::from_str(input)
            .map_err(|e| FiscalError::Config(format!("failed to parse rates: {e}")))?;
        let errors = super::validation::validate_rules(&rules);
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FiscalError::Rules(joined));
        }
        tracing::debug!(year = rules.year, "loaded fiscal rules");
        Ok(rules)
    }

    /// Read and parse a rates table from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, FiscalError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FiscalError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// The Romanian legal-holiday calendar extended with [`FiscalRules::holidays`].
    pub fn calendar(&self) -> HolidayCalendar {
        HolidayCalendar::romania().with_holidays(self.holidays.iter().cloned())
    }
}

/// Payroll (salariu) rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalaryRules {
    /// Gross national minimum wage (RON / month).
    pub minimum_salary: Decimal,
    /// Pension contribution paid by the employee.
    pub cas_rate: Decimal,
    /// Health contribution paid by the employee.
    pub cass_rate: Decimal,
    pub income_tax_rate: Decimal,
    /// Personal deduction subtracted from the income tax base (RON / month).
    pub personal_deduction: Decimal,
    /// Employer work-insurance contribution.
    pub cam_rate: Decimal,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            minimum_salary: dec!(4050),
            cas_rate: dec!(25),
            cass_rate: dec!(10),
            income_tax_rate: dec!(10),
            personal_deduction: dec!(510),
            cam_rate: dec!(2.25),
        }
    }
}

/// PFA (sole proprietor) rates and contribution thresholds.
///
/// Thresholds are expressed as a number of gross minimum salaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PfaRules {
    pub minimum_salary: Decimal,
    pub income_tax_rate: Decimal,
    pub cass_rate: Decimal,
    pub cas_rate: Decimal,
    /// Floor of the CASS base.
    pub cass_min_threshold: Decimal,
    /// Ceiling of the CASS base.
    pub cass_max_threshold: Decimal,
    /// Below this income CAS is optional; above it CAS is due on 12 salaries.
    pub cas_min_optional: Decimal,
    /// Above this income CAS is due on 24 salaries.
    pub cas_obligatory_24: Decimal,
    /// Revenue ceiling (EUR) for staying on norma de venit.
    pub norm_limit_eur: Decimal,
    /// EUR → RON rate used to convert the norm limit.
    pub eur_ron: Decimal,
}

impl Default for PfaRules {
    fn default() -> Self {
        Self {
            minimum_salary: dec!(4050),
            income_tax_rate: dec!(10),
            cass_rate: dec!(10),
            cas_rate: dec!(25),
            cass_min_threshold: dec!(6),
            cass_max_threshold: dec!(60),
            cas_min_optional: dec!(12),
            cas_obligatory_24: dec!(24),
            norm_limit_eur: dec!(25000),
            eur_ron: dec!(4.98),
        }
    }
}

/// Medical leave (concediu medical) rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MedicalLeaveRules {
    /// Months with income required in the reference period.
    pub minimum_months: u32,
    /// Ceiling of the calculation base, in minimum salaries.
    pub max_base_salaries: Decimal,
    /// Leading leave days paid by the employer; the rest is paid by FNUASS.
    pub employer_days: u32,
    /// Worked days assumed for a month that does not state them.
    pub default_days_per_month: u32,
    /// Whether CASS is withheld from the indemnity.
    pub apply_cass: bool,
    pub cas_rate: Decimal,
    pub cass_rate: Decimal,
    pub income_tax_rate: Decimal,
    pub personal_deduction: Decimal,
    /// Per-code overrides of the indemnity percent, keyed by certificate code ("01", "08", ...).
    pub code_rates: BTreeMap<String, Decimal>,
}

impl Default for MedicalLeaveRules {
    fn default() -> Self {
        Self {
            minimum_months: 6,
            max_base_salaries: dec!(12),
            employer_days: 5,
            default_days_per_month: 22,
            apply_cass: false,
            cas_rate: dec!(25),
            cass_rate: dec!(10),
            income_tax_rate: dec!(10),
            personal_deduction: dec!(510),
            code_rates: BTreeMap::new(),
        }
    }
}

/// Car tax (impozit auto) bands, in RON per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarTaxRules {
    pub under_1600: Decimal,
    pub from_1601_to_2000: Decimal,
    pub from_2001_to_2600: Decimal,
    pub from_2601_to_3000: Decimal,
    pub over_3000: Decimal,
    pub motorcycle_under_1600: Decimal,
    pub motorcycle_over_1600: Decimal,
    /// Electric vehicles pay no car tax.
    pub electric_exempt: bool,
    /// Percent reduction for hybrids; when unset the hybrid multiplier (0.5) applies.
    pub hybrid_reduction: Option<Decimal>,
    /// Coefficient for locations missing from the built-in table.
    pub default_location_coefficient: Decimal,
}

impl Default for CarTaxRules {
    fn default() -> Self {
        Self {
            under_1600: dec!(72),
            from_1601_to_2000: dec!(144),
            from_2001_to_2600: dec!(288),
            from_2601_to_3000: dec!(432),
            over_3000: dec!(576),
            motorcycle_under_1600: dec!(25),
            motorcycle_over_1600: dec!(50),
            electric_exempt: true,
            hybrid_reduction: None,
            default_location_coefficient: dec!(0.9),
        }
    }
}

/// e-Factura transmission deadline and fine ranges (RON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EfacturaRules {
    /// Working days after the invoice date by which it must be uploaded.
    pub business_days: u32,
    pub fine_min_micro: Decimal,
    pub fine_max_micro: Decimal,
    pub fine_min_medium: Decimal,
    pub fine_max_medium: Decimal,
    pub fine_min_large: Decimal,
    pub fine_max_large: Decimal,
}

impl Default for EfacturaRules {
    fn default() -> Self {
        Self {
            business_days: 5,
            fine_min_micro: dec!(1000),
            fine_max_micro: dec!(5000),
            fine_min_medium: dec!(5000),
            fine_max_medium: dec!(10000),
            fine_min_large: dec!(10000),
            fine_max_large: dec!(25000),
        }
    }
}

/// EU261 compensation amounts (EUR) and claim limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlightRules {
    pub minimum_delay_hours: Decimal,
    pub under_1500km: Decimal,
    pub from_1500_to_3500km: Decimal,
    pub over_3500km: Decimal,
    /// Years after the flight during which a claim can be filed in Romania.
    pub prescription_years: u32,
}

impl Default for FlightRules {
    fn default() -> Self {
        Self {
            minimum_delay_hours: dec!(3),
            under_1500km: dec!(250),
            from_1500_to_3500km: dec!(400),
            over_3500km: dec!(600),
            prescription_years: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_rates() {
        let r = FiscalRules::default();
        assert_eq!(r.year, 2026);
        assert_eq!(r.salary.cas_rate, dec!(25));
        assert_eq!(r.pfa.cass_max_threshold, dec!(60));
        assert_eq!(r.car_tax.over_3000, dec!(576));
        assert_eq!(r.efactura.business_days, 5);
        assert_eq!(r.flight.over_3500km, dec!(600));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let r = FiscalRules::from_toml_str(
            r#"
year = 2025

[salary]
personal_deduction = 600
"#,
        )
        .unwrap();
        assert_eq!(r.year, 2025);
        assert_eq!(r.salary.personal_deduction, dec!(600));
        assert_eq!(r.salary.cas_rate, dec!(25));
        assert_eq!(r.pfa, PfaRules::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let err = FiscalRules::from_toml_str("[salary]\ncas_rat = 25\n").unwrap_err();
        assert!(matches!(err, FiscalError::Config(_)));
    }

    #[test]
    fn invalid_rates_rejected() {
        let err = FiscalRules::from_toml_str("[salary]\ncas_rate = 125\n").unwrap_err();
        match err {
            FiscalError::Rules(msg) => assert!(msg.contains("salary.cas_rate")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn code_rate_overrides_parse() {
        let r = FiscalRules::from_toml_str("[medical_leave.code_rates]\n\"01\" = 80\n").unwrap();
        assert_eq!(r.medical_leave.code_rates.get("01"), Some(&dec!(80)));
    }
}
