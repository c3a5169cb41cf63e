use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four fixed roles a roster (and the budget) is partitioned into.
///
/// Records carry the Italian role names on the wire; the English names are
/// accepted as input aliases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Role {
    #[serde(rename = "portiere", alias = "goalkeeper")]
    Goalkeeper,
    #[serde(rename = "difensore", alias = "defender")]
    Defender,
    #[serde(rename = "centrocampista", alias = "midfielder")]
    Midfielder,
    #[serde(rename = "attaccante", alias = "forward")]
    Forward,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Goalkeeper,
        Role::Defender,
        Role::Midfielder,
        Role::Forward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "portiere",
            Self::Defender => "difensore",
            Self::Midfielder => "centrocampista",
            Self::Forward => "attaccante",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portiere" | "goalkeeper" => Ok(Self::Goalkeeper),
            "difensore" | "defender" => Ok(Self::Defender),
            "centrocampista" | "midfielder" => Ok(Self::Midfielder),
            "attaccante" | "forward" => Ok(Self::Forward),
            other => Err(format!(
                "unknown role '{}', expected one of: portiere, difensore, centrocampista, attaccante",
                other
            )),
        }
    }
}
