//! Wallet form factors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FeatureError;

/// A wallet form factor. Exemption is decided per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Browser,
    Desktop,
    Mobile,
    Embedded,
    Hardware,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Browser,
        Variant::Desktop,
        Variant::Mobile,
        Variant::Embedded,
        Variant::Hardware,
    ];

    /// Software variants talk to chains directly; hardware variants sign only.
    pub const SOFTWARE: [Variant; 4] = [
        Variant::Browser,
        Variant::Desktop,
        Variant::Mobile,
        Variant::Embedded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Browser => "browser",
            Variant::Desktop => "desktop",
            Variant::Mobile => "mobile",
            Variant::Embedded => "embedded",
            Variant::Hardware => "hardware",
        }
    }

    pub fn is_hardware(self) -> bool {
        self == Variant::Hardware
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| FeatureError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
        }
        assert!("watch".parse::<Variant>().is_err());
    }
}
