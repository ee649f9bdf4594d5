use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{FiscalError, FiscalRules, FlightRules, ensure_non_negative};

/// Distance below which a 3 to 4 hour delay halves the compensation.
const SHORT_HAUL_KM: u32 = 1500;
const MEDIUM_HAUL_KM: u32 = 3500;

/// One disrupted flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightClaim {
    pub distance_km: u32,
    /// Arrival delay in hours.
    #[serde(default)]
    pub delay_hours: Decimal,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub denied_boarding: bool,
    pub eu_departure: bool,
    pub eu_carrier: bool,
    pub flight_date: NaiveDate,
}

impl FlightClaim {
    /// An on-time flight departing the EU with an EU carrier.
    pub fn new(distance_km: u32, flight_date: NaiveDate) -> Self {
        Self {
            distance_km,
            delay_hours: Decimal::ZERO,
            cancelled: false,
            denied_boarding: false,
            eu_departure: true,
            eu_carrier: true,
            flight_date,
        }
    }

    pub fn delay_hours(mut self, hours: Decimal) -> Self {
        self.delay_hours = hours;
        self
    }

    pub fn cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    pub fn denied_boarding(mut self, denied: bool) -> Self {
        self.denied_boarding = denied;
        self
    }

    pub fn eu_departure(mut self, eu: bool) -> Self {
        self.eu_departure = eu;
        self
    }

    pub fn eu_carrier(mut self, eu: bool) -> Self {
        self.eu_carrier = eu;
        self
    }
}

/// Limitation period of a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub flight_date: NaiveDate,
    pub prescription_date: NaiveDate,
    pub is_prescribed: bool,
    /// Zero once prescribed.
    pub days_until_prescription: i64,
    pub years_remaining: Decimal,
}

/// Compensation due for one flight. Amounts in EUR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    pub eligible: bool,
    /// The flight falls under the regulation at all.
    pub covered: bool,
    pub compensation: Decimal,
    pub reduction_applied: bool,
    pub prescription: Option<Prescription>,
    pub reason: String,
    pub next_steps: Vec<String>,
}

impl CompensationResult {
    fn rejected(covered: bool, reason: String) -> Self {
        Self {
            eligible: false,
            covered,
            compensation: Decimal::ZERO,
            reduction_applied: false,
            prescription: None,
            reason,
            next_steps: Vec::new(),
        }
    }
}

fn base_amount(distance_km: u32, rules: &FlightRules) -> Decimal {
    if distance_km < SHORT_HAUL_KM {
        rules.under_1500km
    } else if distance_km <= MEDIUM_HAUL_KM {
        rules.from_1500_to_3500km
    } else {
        rules.over_3500km
    }
}

fn next_steps() -> Vec<String> {
    [
        "Keep the boarding pass and booking confirmation",
        "Ask the airline for written confirmation of the delay or cancellation",
        "Send a written claim to the airline",
        "If refused, file a complaint with AACR or take the airline to court",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Assess a claim as of `today`.
pub fn calculate_compensation(
    claim: &FlightClaim,
    today: NaiveDate,
    rules: &FiscalRules,
) -> Result<CompensationResult, FiscalError> {
    let r = &rules.flight;
    ensure_non_negative("delay hours", claim.delay_hours)?;

    if !claim.eu_departure && !claim.eu_carrier {
        return Ok(CompensationResult::rejected(
            false,
            "not covered: neither departing from the EU nor operated by an EU carrier".into(),
        ));
    }

    let disrupted = claim.cancelled || claim.denied_boarding;
    if !disrupted && claim.delay_hours < r.minimum_delay_hours {
        return Ok(CompensationResult::rejected(
            true,
            format!(
                "delay of {} h is below the {} h minimum",
                claim.delay_hours, r.minimum_delay_hours
            ),
        ));
    }

    let mut compensation = base_amount(claim.distance_km, r);
    let reduction_applied = !disrupted
        && claim.delay_hours >= dec!(3)
        && claim.delay_hours < dec!(4)
        && claim.distance_km < SHORT_HAUL_KM;
    if reduction_applied {
        compensation *= dec!(0.5);
    }

    let prescription_date = claim
        .flight_date
        .checked_add_months(Months::new(r.prescription_years * 12))
        .ok_or_else(|| FiscalError::InvalidInput("flight date out of range".into()))?;
    let is_prescribed = today > prescription_date;
    let days_until_prescription = if is_prescribed {
        0
    } else {
        (prescription_date - today).num_days()
    };
    let years_remaining =
        (Decimal::from(days_until_prescription) / dec!(365)).round_dp(1);

    let reason = if claim.cancelled {
        "flight cancelled: compensation is due".to_string()
    } else if claim.denied_boarding {
        "denied boarding: compensation is due".to_string()
    } else {
        format!("delay of {} h: compensation is due", claim.delay_hours)
    };

    tracing::debug!(
        distance_km = claim.distance_km,
        %compensation,
        is_prescribed,
        "EU261 compensation"
    );

    Ok(CompensationResult {
        eligible: !is_prescribed,
        covered: true,
        compensation,
        reduction_applied,
        prescription: Some(Prescription {
            flight_date: claim.flight_date,
            prescription_date,
            is_prescribed,
            days_until_prescription,
            years_remaining,
        }),
        reason,
        next_steps: next_steps(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    /// 1-based position in the group.
    pub index: usize,
    pub claim: FlightClaim,
    pub result: CompensationResult,
}

/// Compensation for several flights, e.g. a family or a multi-leg trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCompensation {
    pub flights: Vec<GroupEntry>,
    pub total_flights: usize,
    pub eligible_flights: usize,
    pub total_compensation: Decimal,
}

pub fn calculate_group(
    claims: &[FlightClaim],
    today: NaiveDate,
    rules: &FiscalRules,
) -> Result<GroupCompensation, FiscalError> {
    let flights = claims
        .iter()
        .enumerate()
        .map(|(i, claim)| {
            calculate_compensation(claim, today, rules).map(|result| GroupEntry {
                index: i + 1,
                claim: claim.clone(),
                result,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let eligible = flights.iter().filter(|f| f.result.eligible);
    let eligible_flights = eligible.clone().count();
    let total_compensation: Decimal = eligible.map(|f| f.result.compensation).sum();

    Ok(GroupCompensation {
        total_flights: flights.len(),
        flights,
        eligible_flights,
        total_compensation,
    })
}
