use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{FiscalError, fold_key};

/// Company size class used for e-Factura fines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    /// Microîntreprindere.
    #[default]
    Micro,
    /// Întreprindere mică sau mijlocie.
    Medium,
    /// Contribuabil mare.
    Large,
}

impl CompanySize {
    pub const ALL: [CompanySize; 3] = [Self::Micro, Self::Medium, Self::Large];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Micro => "Microîntreprindere (< 500.000 EUR)",
            Self::Medium => "Întreprindere medie (500.000 - 1.000.000 EUR)",
            Self::Large => "Întreprindere mare (> 1.000.000 EUR)",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for CompanySize {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s).as_str() {
            "micro" | "mica" => Ok(Self::Micro),
            "medium" | "medie" | "mijlocie" => Ok(Self::Medium),
            "large" | "mare" => Ok(Self::Large),
            _ => Err(FiscalError::UnknownCode {
                kind: "company size",
                code: s.to_string(),
            }),
        }
    }
}
