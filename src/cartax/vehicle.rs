use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{FiscalError, fold_key};

/// Vehicle category as used by local tax offices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VehicleType {
    /// Autoturism.
    Car,
    /// SUV / crossover.
    Suv,
    /// Autoutilitară.
    Utility,
    /// Motocicletă.
    Motorcycle,
    Atv,
    /// Remorcă.
    Trailer,
    Electric,
    /// Hibrid.
    Hybrid,
}

impl VehicleType {
    pub const ALL: [VehicleType; 8] = [
        Self::Car,
        Self::Suv,
        Self::Utility,
        Self::Motorcycle,
        Self::Atv,
        Self::Trailer,
        Self::Electric,
        Self::Hybrid,
    ];

    /// Romanian code used in rates files and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Car => "autoturism",
            Self::Suv => "suv",
            Self::Utility => "autoutilitar",
            Self::Motorcycle => "motocicletă",
            Self::Atv => "atv",
            Self::Trailer => "remorcă",
            Self::Electric => "electric",
            Self::Hybrid => "hibrid",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Car => "Autoturism",
            Self::Suv => "SUV / Crossover",
            Self::Utility => "Autoutilitară",
            Self::Motorcycle => "Motocicletă",
            Self::Atv => "ATV",
            Self::Trailer => "Remorcă",
            Self::Electric => "Electric",
            Self::Hybrid => "Hibrid",
        }
    }

    /// Multiplier applied to the engine-capacity band.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Car => dec!(1.0),
            Self::Suv => dec!(1.1),
            Self::Utility => dec!(0.8),
            Self::Motorcycle => dec!(0.5),
            Self::Atv => dec!(0.6),
            Self::Trailer => dec!(0.3),
            Self::Electric => dec!(0.0),
            Self::Hybrid => dec!(0.5),
        }
    }

    /// Parse a Romanian code or English alias, ignoring case and diacritics.
    pub fn from_code(code: &str) -> Option<Self> {
        let key = fold_key(code);
        let alias = match key.as_str() {
            "car" | "autoturism" => Self::Car,
            "suv" | "crossover" => Self::Suv,
            "utility" | "van" | "autoutilitar" | "autoutilitara" => Self::Utility,
            "motorcycle" | "motocicleta" => Self::Motorcycle,
            "atv" => Self::Atv,
            "trailer" | "remorca" => Self::Trailer,
            "electric" | "ev" => Self::Electric,
            "hybrid" | "hibrid" => Self::Hybrid,
            _ => return None,
        };
        Some(alias)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleType {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| FiscalError::UnknownCode {
            kind: "vehicle type",
            code: s.to_string(),
        })
    }
}

impl TryFrom<String> for VehicleType {
    type Error = FiscalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VehicleType> for String {
    fn from(v: VehicleType) -> Self {
        v.code().to_string()
    }
}

/// Local-tax coefficients by locality or locality class.
pub const LOCATION_COEFFICIENTS: &[(&str, Decimal)] = &[
    ("București", dec!(1.0)),
    ("Cluj-Napoca", dec!(1.0)),
    ("Timișoara", dec!(1.0)),
    ("Iași", dec!(0.95)),
    ("Constanța", dec!(1.0)),
    ("Craiova", dec!(0.90)),
    ("Brașov", dec!(1.0)),
    ("Galați", dec!(0.85)),
    ("Ploiești", dec!(0.90)),
    ("Oradea", dec!(0.90)),
    ("Brăila", dec!(0.85)),
    ("Arad", dec!(0.90)),
    ("Pitești", dec!(0.90)),
    ("Sibiu", dec!(0.95)),
    ("Bacău", dec!(0.85)),
    ("Târgu Mureș", dec!(0.90)),
    ("Baia Mare", dec!(0.85)),
    ("Buzău", dec!(0.85)),
    ("Botoșani", dec!(0.80)),
    ("Satu Mare", dec!(0.85)),
    ("rural", dec!(0.70)),
    ("oraș mic", dec!(0.80)),
    ("municipiu", dec!(0.90)),
    ("reședință", dec!(1.0)),
];

/// Coefficient for a locality, ignoring case and diacritics.
pub fn location_coefficient(location: &str) -> Option<Decimal> {
    let key = fold_key(location);
    LOCATION_COEFFICIENTS
        .iter()
        .find(|(name, _)| fold_key(name) == key)
        .map(|&(_, coefficient)| coefficient)
}
