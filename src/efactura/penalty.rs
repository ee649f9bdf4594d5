use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::company::CompanySize;
use crate::core::{EfacturaRules, FiscalError, FiscalRules};

/// Fines above this many untransmitted invoices get a cumulation warning.
const CUMULATION_WARNING_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Estimated fines for invoices not transmitted on time. Amounts in RON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyResult {
    pub company_size: CompanySize,
    pub invoice_count: u32,
    /// Fine for one invoice.
    pub fine_range: FineRange,
    pub total_estimated_fine: FineRange,
    pub warning: Option<String>,
}

fn fine_range(size: CompanySize, rules: &EfacturaRules) -> FineRange {
    match size {
        CompanySize::Micro => FineRange {
            min: rules.fine_min_micro,
            max: rules.fine_max_micro,
        },
        CompanySize::Medium => FineRange {
            min: rules.fine_min_medium,
            max: rules.fine_max_medium,
        },
        CompanySize::Large => FineRange {
            min: rules.fine_min_large,
            max: rules.fine_max_large,
        },
    }
}

/// Fine range for `invoice_count` late invoices of a company of `size`.
pub fn calculate_penalty(
    size: CompanySize,
    invoice_count: u32,
    rules: &FiscalRules,
) -> Result<PenaltyResult, FiscalError> {
    if invoice_count == 0 {
        return Err(FiscalError::InvalidInput(
            "invoice count must be positive".into(),
        ));
    }

    let range = fine_range(size, &rules.efactura);
    let count = Decimal::from(invoice_count);
    let warning = (invoice_count > CUMULATION_WARNING_COUNT)
        .then(|| "fines can cumulate for every invoice not transmitted".to_string());

    tracing::debug!(size = size.code(), invoice_count, "e-Factura penalty");

    Ok(PenaltyResult {
        company_size: size,
        invoice_count,
        fine_range: range,
        total_estimated_fine: FineRange {
            min: range.min * count,
            max: range.max * count,
        },
        warning,
    })
}
