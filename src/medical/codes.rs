use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{FiscalError, MedicalLeaveRules};

/// Medical certificate code (cod indemnizație).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MedicalCode {
    /// 01: Ordinary illness.
    Ordinary,
    /// 05: Infectious disease / quarantine.
    Infectious,
    /// 06: Medical-surgical emergency.
    Emergency,
    /// 08: Maternity.
    Maternity,
    /// 09: Maternal risk.
    MaternalRisk,
    /// 15: Care of a sick child.
    ChildCare,
}

impl MedicalCode {
    pub const ALL: [MedicalCode; 6] = [
        Self::Ordinary,
        Self::Infectious,
        Self::Emergency,
        Self::Maternity,
        Self::MaternalRisk,
        Self::ChildCare,
    ];

    /// Two-digit certificate code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ordinary => "01",
            Self::Infectious => "05",
            Self::Emergency => "06",
            Self::Maternity => "08",
            Self::MaternalRisk => "09",
            Self::ChildCare => "15",
        }
    }

    /// Parse a certificate code; a single digit is accepted ("1" = "01").
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let padded = if code.len() == 1 {
            format!("0{code}")
        } else {
            code.to_string()
        };
        Self::ALL.into_iter().find(|c| c.code() == padded)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ordinary => "Boală obișnuită",
            Self::Infectious => "Boală infectocontagioasă / carantină",
            Self::Emergency => "Urgență medico-chirurgicală",
            Self::Maternity => "Maternitate",
            Self::MaternalRisk => "Risc maternal",
            Self::ChildCare => "Îngrijire copil bolnav",
        }
    }

    /// Statutory indemnity percent for this code.
    pub fn default_rate(&self) -> Decimal {
        match self {
            Self::Ordinary => dec!(75),
            Self::Infectious | Self::Emergency => dec!(100),
            Self::Maternity | Self::MaternalRisk | Self::ChildCare => dec!(85),
        }
    }

    /// Indemnity percent, honouring a `code_rates` override.
    pub fn rate(&self, rules: &MedicalLeaveRules) -> Decimal {
        rules
            .code_rates
            .get(self.code())
            .copied()
            .unwrap_or_else(|| self.default_rate())
    }
}

impl fmt::Display for MedicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.description())
    }
}

impl FromStr for MedicalCode {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| FiscalError::UnknownCode {
            kind: "medical certificate",
            code: s.to_string(),
        })
    }
}

impl TryFrom<String> for MedicalCode {
    type Error = FiscalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MedicalCode> for String {
    fn from(code: MedicalCode) -> Self {
        code.code().to_string()
    }
}
