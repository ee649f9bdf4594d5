use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::vehicle::{VehicleType, location_coefficient};
use crate::core::{CarTaxRules, FiscalError, FiscalRules, round_money, round_ron};

/// Earliest registration year accepted.
pub const MIN_REGISTRATION_YEAR: i32 = 1900;

/// Localities used by [`CarTaxCalculator::compare_locations`].
pub const COMPARED_LOCATIONS: [&str; 5] = ["București", "Cluj-Napoca", "rural", "oraș mic", "municipiu"];

/// A vehicle to tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarTaxInput {
    /// Engine capacity in cm³.
    pub engine_cc: u32,
    pub vehicle_type: VehicleType,
    pub location: String,
    /// First registration year; `None` means a new vehicle.
    #[serde(default)]
    pub registration_year: Option<i32>,
    #[serde(default)]
    pub is_company: bool,
}

impl CarTaxInput {
    /// A new passenger car registered in București.
    pub fn new(engine_cc: u32) -> Self {
        Self {
            engine_cc,
            vehicle_type: VehicleType::Car,
            location: "București".to_string(),
            registration_year: None,
            is_company: false,
        }
    }

    pub fn vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = vehicle_type;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn registration_year(mut self, year: i32) -> Self {
        self.registration_year = Some(year);
        self
    }

    pub fn company(mut self, is_company: bool) -> Self {
        self.is_company = is_company;
        self
    }
}

/// Annual car tax for one vehicle. Amounts in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarTaxResult {
    pub engine_cc: u32,
    pub vehicle_type: VehicleType,
    pub vehicle_type_name: String,
    pub location: String,
    pub registration_year: i32,
    pub vehicle_age: i32,
    pub is_company: bool,
    /// Amount of the engine-capacity band.
    pub base_tax: Decimal,
    pub type_multiplier: Decimal,
    /// Fraction removed for old vehicles (0.10 above 15 years, 0.15 above 20).
    pub age_reduction: Decimal,
    pub location_coefficient: Decimal,
    pub tax_before_location: Decimal,
    pub final_tax: Decimal,
    pub quarterly: Decimal,
    pub monthly: Decimal,
    pub tax_exempt: bool,
    pub exempt_reason: Option<String>,
    /// Human-readable calculation steps.
    pub breakdown: Vec<String>,
}

/// One row of a location comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationTax {
    pub location: String,
    pub tax: Decimal,
    pub coefficient: Decimal,
}

/// Same vehicle taxed in several localities, cheapest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationComparison {
    pub engine_cc: u32,
    pub vehicle_type: VehicleType,
    pub results: Vec<LocationTax>,
    pub cheapest: LocationTax,
    pub most_expensive: LocationTax,
    pub savings: Decimal,
}

/// One vehicle of a fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetEntry {
    /// 1-based position in the fleet.
    pub index: usize,
    pub tax: Decimal,
    pub result: CarTaxResult,
}

/// Car tax totals for a fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetResult {
    pub vehicles: Vec<FleetEntry>,
    pub total_tax: Decimal,
    pub average_tax: Decimal,
    pub quarterly_total: Decimal,
}

/// Car tax engine bound to one rates table.
#[derive(Debug, Clone, Copy)]
pub struct CarTaxCalculator<'a> {
    rules: &'a CarTaxRules,
}

impl<'a> CarTaxCalculator<'a> {
    pub fn new(rules: &'a FiscalRules) -> Self {
        Self {
            rules: &rules.car_tax,
        }
    }

    /// Band amount for a car of the given capacity.
    pub fn base_tax(&self, engine_cc: u32) -> Decimal {
        let r = self.rules;
        match engine_cc {
            0..=1600 => r.under_1600,
            1601..=2000 => r.from_1601_to_2000,
            2001..=2600 => r.from_2001_to_2600,
            2601..=3000 => r.from_2601_to_3000,
            _ => r.over_3000,
        }
    }

    /// Band amount for a motorcycle of the given capacity.
    pub fn motorcycle_tax(&self, engine_cc: u32) -> Decimal {
        if engine_cc <= 1600 {
            self.rules.motorcycle_under_1600
        } else {
            self.rules.motorcycle_over_1600
        }
    }

    /// Coefficient for a locality, falling back to the configured default.
    pub fn location_coefficient(&self, location: &str) -> Decimal {
        location_coefficient(location).unwrap_or_else(|| {
            tracing::warn!(
                location,
                default = %self.rules.default_location_coefficient,
                "unknown location, using default coefficient"
            );
            self.rules.default_location_coefficient
        })
    }

    /// Annual tax for one vehicle as of `today`.
    pub fn calculate(
        &self,
        input: &CarTaxInput,
        today: NaiveDate,
    ) -> Result<CarTaxResult, FiscalError> {
        let vt = input.vehicle_type;
        if input.engine_cc == 0 && !matches!(vt, VehicleType::Trailer | VehicleType::Electric) {
            return Err(FiscalError::InvalidInput(
                "engine capacity must be positive".into(),
            ));
        }
        let registration_year = input.registration_year.unwrap_or(today.year());
        if registration_year > today.year() {
            return Err(FiscalError::InvalidInput(format!(
                "registration year {registration_year} is in the future"
            )));
        }
        if registration_year < MIN_REGISTRATION_YEAR {
            return Err(FiscalError::InvalidInput(format!(
                "registration year {registration_year} is before {MIN_REGISTRATION_YEAR}"
            )));
        }
        let vehicle_age = today.year() - registration_year;

        if vt == VehicleType::Electric && self.rules.electric_exempt {
            tracing::debug!(engine_cc = input.engine_cc, "electric vehicle, exempt");
            return Ok(CarTaxResult {
                engine_cc: input.engine_cc,
                vehicle_type: vt,
                vehicle_type_name: vt.name().to_string(),
                location: input.location.clone(),
                registration_year,
                vehicle_age,
                is_company: input.is_company,
                base_tax: Decimal::ZERO,
                type_multiplier: Decimal::ZERO,
                age_reduction: Decimal::ZERO,
                location_coefficient: Decimal::ZERO,
                tax_before_location: Decimal::ZERO,
                final_tax: Decimal::ZERO,
                quarterly: Decimal::ZERO,
                monthly: Decimal::ZERO,
                tax_exempt: true,
                exempt_reason: Some("electric vehicle: exempt from car tax".into()),
                breakdown: vec!["electric vehicle: exempt from car tax".into()],
            });
        }

        let base_tax = if vt == VehicleType::Motorcycle {
            self.motorcycle_tax(input.engine_cc)
        } else {
            self.base_tax(input.engine_cc)
        };

        let type_multiplier = match (vt, self.rules.hybrid_reduction) {
            (VehicleType::Hybrid, Some(reduction)) => (dec!(100) - reduction) / dec!(100),
            _ => vt.multiplier(),
        };

        let age_reduction = if vehicle_age > 20 {
            dec!(0.15)
        } else if vehicle_age > 15 {
            dec!(0.10)
        } else {
            Decimal::ZERO
        };

        let coefficient = self.location_coefficient(&input.location);
        let tax_before_location = base_tax * type_multiplier * (Decimal::ONE - age_reduction);
        let final_tax = round_ron(tax_before_location * coefficient);

        let mut breakdown = vec![
            format!("base: {base_tax} RON (engine {} cc)", input.engine_cc),
            format!("× vehicle type: {type_multiplier:.2}"),
        ];
        if age_reduction > Decimal::ZERO {
            breakdown.push(format!(
                "× age factor: {:.0}%",
                (Decimal::ONE - age_reduction) * dec!(100)
            ));
        }
        breakdown.push(format!("× location coefficient: {coefficient:.2}"));
        breakdown.push(format!("= annual tax: {final_tax} RON"));

        tracing::debug!(
            engine_cc = input.engine_cc,
            vehicle = vt.code(),
            location = %input.location,
            %final_tax,
            "car tax"
        );

        Ok(CarTaxResult {
            engine_cc: input.engine_cc,
            vehicle_type: vt,
            vehicle_type_name: vt.name().to_string(),
            location: input.location.clone(),
            registration_year,
            vehicle_age,
            is_company: input.is_company,
            base_tax,
            type_multiplier,
            age_reduction,
            location_coefficient: coefficient,
            tax_before_location: round_money(tax_before_location),
            final_tax,
            quarterly: round_ron(final_tax / dec!(4)),
            monthly: round_ron(final_tax / dec!(12)),
            tax_exempt: false,
            exempt_reason: None,
            breakdown,
        })
    }

    /// Tax the same new vehicle in [`COMPARED_LOCATIONS`], cheapest first.
    pub fn compare_locations(
        &self,
        engine_cc: u32,
        vehicle_type: VehicleType,
        today: NaiveDate,
    ) -> Result<LocationComparison, FiscalError> {
        let mut results = COMPARED_LOCATIONS
            .iter()
            .map(|&location| {
                let input = CarTaxInput::new(engine_cc)
                    .vehicle_type(vehicle_type)
                    .location(location);
                self.calculate(&input, today).map(|r| LocationTax {
                    location: location.to_string(),
                    tax: r.final_tax,
                    coefficient: r.location_coefficient,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: equal taxes keep table order.
        results.sort_by(|a, b| a.tax.cmp(&b.tax));

        let (Some(cheapest), Some(most_expensive)) = (results.first(), results.last()) else {
            return Err(FiscalError::InvalidInput("no locations to compare".into()));
        };
        let (cheapest, most_expensive) = (cheapest.clone(), most_expensive.clone());
        let savings = most_expensive.tax - cheapest.tax;

        Ok(LocationComparison {
            engine_cc,
            vehicle_type,
            results,
            cheapest,
            most_expensive,
            savings,
        })
    }

    /// Total tax for a fleet of vehicles.
    pub fn calculate_fleet(
        &self,
        vehicles: &[CarTaxInput],
        today: NaiveDate,
    ) -> Result<FleetResult, FiscalError> {
        if vehicles.is_empty() {
            return Err(FiscalError::InvalidInput("fleet must not be empty".into()));
        }

        let entries = vehicles
            .iter()
            .enumerate()
            .map(|(i, v)| {
                self.calculate(v, today).map(|result| FleetEntry {
                    index: i + 1,
                    tax: result.final_tax,
                    result,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_tax: Decimal = entries.iter().map(|e| e.tax).sum();
        tracing::debug!(vehicles = entries.len(), %total_tax, "fleet car tax");

        Ok(FleetResult {
            average_tax: round_money(total_tax / Decimal::from(entries.len())),
            quarterly_total: round_ron(total_tax / dec!(4)),
            total_tax,
            vehicles: entries,
        })
    }
}
