use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::system::{PfaResult, TaxSystem, calculate_norm, calculate_real};
use crate::core::{FiscalError, FiscalRules};

/// Side-by-side real system vs. norma de venit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfaComparison {
    pub real: PfaResult,
    pub norm: PfaResult,
    /// The regime that leaves more money after taxes.
    pub recommended: TaxSystem,
    /// Absolute difference in net remaining between the two regimes.
    pub savings: Decimal,
    /// Why the recommendation was forced, if it was.
    pub note: Option<String>,
}

/// Compute both regimes for the same revenue and recommend one.
///
/// The regime with the larger net remaining wins; on a tie the norm is
/// recommended. A revenue above the norm ceiling forces the real system.
pub fn compare(
    revenue: Decimal,
    expenses: Decimal,
    norm_value: Decimal,
    rules: &FiscalRules,
) -> Result<PfaComparison, FiscalError> {
    let real = calculate_real(revenue, expenses, rules)?;
    let norm = calculate_norm(revenue, norm_value, rules)?;

    let savings = (real.net_remaining - norm.net_remaining).abs();
    let (recommended, note) = if norm.over_limit {
        (
            TaxSystem::Real,
            Some(format!(
                "revenue exceeds the norma de venit ceiling of {} RON",
                norm.norm_limit_ron.unwrap_or_default()
            )),
        )
    } else if real.net_remaining > norm.net_remaining {
        (TaxSystem::Real, None)
    } else {
        (TaxSystem::Norm, None)
    };

    tracing::debug!(?recommended, %savings, "pfa comparison");
    Ok(PfaComparison {
        real,
        norm,
        recommended,
        savings,
        note,
    })
}
