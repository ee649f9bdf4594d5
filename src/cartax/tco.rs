use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::calculator::{CarTaxCalculator, CarTaxInput};
use crate::core::{FiscalError, ensure_non_negative, round_money, round_ron};

const MAINTENANCE_PER_KM: Decimal = dec!(0.15);
const TYRES_PER_YEAR: Decimal = dec!(1500);
const PARKING_PER_YEAR: Decimal = dec!(1200);

/// Usage assumptions for a total-cost-of-ownership estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcoInput {
    pub vehicle: CarTaxInput,
    pub annual_km: Decimal,
    /// RON per litre.
    pub fuel_price: Decimal,
    /// Litres per 100 km.
    pub consumption: Decimal,
}

impl TcoInput {
    /// 15 000 km a year at 8 l/100 km and 7 RON/l.
    pub fn new(vehicle: CarTaxInput) -> Self {
        Self {
            vehicle,
            annual_km: dec!(15000),
            fuel_price: dec!(7),
            consumption: dec!(8),
        }
    }

    pub fn annual_km(mut self, km: Decimal) -> Self {
        self.annual_km = km;
        self
    }

    pub fn fuel_price(mut self, price: Decimal) -> Self {
        self.fuel_price = price;
        self
    }

    pub fn consumption(mut self, litres_per_100km: Decimal) -> Self {
        self.consumption = litres_per_100km;
        self
    }
}

/// Yearly running costs. Amounts in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcoResult {
    pub car_tax: Decimal,
    pub fuel: Decimal,
    /// Mandatory third-party insurance.
    pub rca: Decimal,
    /// Optional comprehensive insurance.
    pub casco: Decimal,
    /// Periodic technical inspection.
    pub itp: Decimal,
    pub maintenance: Decimal,
    pub tyres: Decimal,
    pub parking: Decimal,
    pub total_without_casco: Decimal,
    pub total_with_casco: Decimal,
    pub monthly_without_casco: Decimal,
    pub monthly_with_casco: Decimal,
    /// Cost per km without CASCO; zero when no distance is driven.
    pub cost_per_km: Decimal,
}

fn insurance(engine_cc: u32) -> (Decimal, Decimal) {
    match engine_cc {
        0..=1600 => (dec!(800), dec!(1200)),
        1601..=2000 => (dec!(1200), dec!(2000)),
        _ => (dec!(1500), dec!(3000)),
    }
}

impl CarTaxCalculator<'_> {
    /// Estimate the yearly cost of owning the vehicle described by `input`.
    pub fn estimate_tco(&self, input: &TcoInput, today: NaiveDate) -> Result<TcoResult, FiscalError> {
        ensure_non_negative("annual km", input.annual_km)?;
        ensure_non_negative("fuel price", input.fuel_price)?;
        ensure_non_negative("consumption", input.consumption)?;

        let car_tax = self.calculate(&input.vehicle, today)?.final_tax;
        let engine_cc = input.vehicle.engine_cc;

        let fuel = round_money(input.annual_km / dec!(100) * input.consumption * input.fuel_price);
        let (rca, casco) = insurance(engine_cc);
        let itp = if engine_cc > 2000 { dec!(200) } else { dec!(150) };
        let maintenance = round_money(input.annual_km * MAINTENANCE_PER_KM);

        let total_without_casco =
            car_tax + fuel + rca + itp + maintenance + TYRES_PER_YEAR + PARKING_PER_YEAR;
        let total_with_casco = total_without_casco + casco;
        let cost_per_km = if input.annual_km > Decimal::ZERO {
            total_without_casco
                .checked_div(input.annual_km)
                .map(round_money)
                .ok_or_else(|| {
                    FiscalError::InvalidInput(format!(
                        "annual km {} is too small to spread costs over",
                        input.annual_km
                    ))
                })?
        } else {
            Decimal::ZERO
        };

        tracing::debug!(engine_cc, %total_without_casco, %total_with_casco, "car TCO");

        Ok(TcoResult {
            car_tax,
            fuel,
            rca,
            casco,
            itp,
            maintenance,
            tyres: TYRES_PER_YEAR,
            parking: PARKING_PER_YEAR,
            total_without_casco,
            total_with_casco,
            monthly_without_casco: round_ron(total_without_casco / dec!(12)),
            monthly_with_casco: round_ron(total_with_casco / dec!(12)),
            cost_per_km,
        })
    }
}
