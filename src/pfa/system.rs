use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{
    FiscalError, FiscalRules, PfaRules, ensure_non_negative, ensure_positive, percent, round_money,
};

/// Taxation regime of a PFA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxSystem {
    /// Sistem real.
    Real,
    /// Normă de venit.
    Norm,
}

impl TaxSystem {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Real => "Sistem Real",
            Self::Norm => "Normă de Venit",
        }
    }
}

/// Whether, and on which base, CAS is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasStatus {
    /// Income below 12 minimum salaries: CAS may be paid voluntarily.
    Optional,
    /// Due on a base of 12 minimum salaries.
    Mandatory12,
    /// Due on a base of 24 minimum salaries.
    Mandatory24,
}

impl CasStatus {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Optional => "optional (below 12 minimum salaries)",
            Self::Mandatory12 => "mandatory on 12 minimum salaries",
            Self::Mandatory24 => "mandatory on 24 minimum salaries",
        }
    }
}

/// Contribution thresholds in RON, derived from the minimum salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfaThresholds {
    pub cass_min: Decimal,
    pub cass_max: Decimal,
    pub cas_12: Decimal,
    pub cas_24: Decimal,
}

impl PfaThresholds {
    pub fn from_rules(rules: &PfaRules) -> Self {
        Self {
            cass_min: rules.minimum_salary * rules.cass_min_threshold,
            cass_max: rules.minimum_salary * rules.cass_max_threshold,
            cas_12: rules.minimum_salary * rules.cas_min_optional,
            cas_24: rules.minimum_salary * rules.cas_obligatory_24,
        }
    }
}

/// Annual PFA tax result for one regime. Amounts in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfaResult {
    pub system: TaxSystem,
    pub revenue: Decimal,
    /// Deductible expenses (real system only).
    pub expenses: Option<Decimal>,
    /// Revenue minus expenses (real system only); may be negative.
    pub net_income: Option<Decimal>,
    /// Presumed income (norm only).
    pub norm_value: Option<Decimal>,
    pub income_tax: Decimal,
    pub cass_base: Decimal,
    pub cass: Decimal,
    pub cas_base: Decimal,
    pub cas: Decimal,
    pub cas_status: CasStatus,
    pub total_taxes: Decimal,
    pub net_remaining: Decimal,
    /// Total taxes as a percent of revenue.
    pub effective_rate: Decimal,
    /// Norm revenue ceiling converted to RON (norm only).
    pub norm_limit_ron: Option<Decimal>,
    /// Revenue exceeds the norm ceiling; the PFA must move to the real system.
    pub over_limit: bool,
    pub thresholds: PfaThresholds,
}

/// Sistem real: tax on revenue minus expenses.
pub fn calculate_real(
    revenue: Decimal,
    expenses: Decimal,
    rules: &FiscalRules,
) -> Result<PfaResult, FiscalError> {
    let revenue = ensure_positive("revenue", revenue)?;
    let expenses = ensure_non_negative("expenses", expenses)?;
    let p = &rules.pfa;
    let thresholds = PfaThresholds::from_rules(p);

    let net_income = revenue - expenses;
    let income_tax = round_money(percent(net_income.max(Decimal::ZERO), p.income_tax_rate));
    let cass_base = clamp_cass_base(net_income, &thresholds);
    let cass = round_money(percent(cass_base, p.cass_rate));

    let (cas_status, cas_base) = if net_income < thresholds.cas_12 {
        (CasStatus::Optional, Decimal::ZERO)
    } else if net_income < thresholds.cas_24 {
        (CasStatus::Mandatory12, thresholds.cas_12)
    } else {
        (CasStatus::Mandatory24, thresholds.cas_24)
    };
    let cas = round_money(percent(cas_base, p.cas_rate));

    let total_taxes = income_tax + cass + cas;
    let result = PfaResult {
        system: TaxSystem::Real,
        revenue,
        expenses: Some(expenses),
        net_income: Some(net_income),
        norm_value: None,
        income_tax,
        cass_base,
        cass,
        cas_base,
        cas,
        cas_status,
        total_taxes,
        net_remaining: net_income - total_taxes,
        effective_rate: effective_rate(total_taxes, revenue),
        norm_limit_ron: None,
        over_limit: false,
        thresholds,
    };
    tracing::debug!(%revenue, %expenses, total = %result.total_taxes, "pfa real system");
    Ok(result)
}

/// Normă de venit: tax on the presumed income, whatever the actual revenue.
pub fn calculate_norm(
    revenue: Decimal,
    norm_value: Decimal,
    rules: &FiscalRules,
) -> Result<PfaResult, FiscalError> {
    let revenue = ensure_positive("revenue", revenue)?;
    let norm_value = ensure_positive("norm value", norm_value)?;
    let p = &rules.pfa;
    let thresholds = PfaThresholds::from_rules(p);

    let income_tax = round_money(percent(norm_value, p.income_tax_rate));
    let cass_base = clamp_cass_base(norm_value, &thresholds);
    let cass = round_money(percent(cass_base, p.cass_rate));

    // A norm never reaches the 24-salary tier.
    let (cas_status, cas_base) = if norm_value < thresholds.cas_12 {
        (CasStatus::Optional, Decimal::ZERO)
    } else {
        (CasStatus::Mandatory12, thresholds.cas_12)
    };
    let cas = round_money(percent(cas_base, p.cas_rate));

    let total_taxes = income_tax + cass + cas;
    let norm_limit_ron = p.norm_limit_eur * p.eur_ron;
    let over_limit = revenue > norm_limit_ron;
    if over_limit {
        tracing::warn!(%revenue, %norm_limit_ron, "revenue exceeds the norma de venit ceiling");
    }

    let result = PfaResult {
        system: TaxSystem::Norm,
        revenue,
        expenses: None,
        net_income: None,
        norm_value: Some(norm_value),
        income_tax,
        cass_base,
        cass,
        cas_base,
        cas,
        cas_status,
        total_taxes,
        net_remaining: revenue - total_taxes,
        effective_rate: effective_rate(total_taxes, revenue),
        norm_limit_ron: Some(norm_limit_ron),
        over_limit,
        thresholds,
    };
    tracing::debug!(%revenue, %norm_value, total = %result.total_taxes, "pfa norma de venit");
    Ok(result)
}

fn clamp_cass_base(income: Decimal, t: &PfaThresholds) -> Decimal {
    income.max(t.cass_min).min(t.cass_max)
}

fn effective_rate(total: Decimal, revenue: Decimal) -> Decimal {
    round_money(total / revenue * dec!(100))
}
