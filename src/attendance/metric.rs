//! Attendance metric modes.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What an attendance rate counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetricMode {
    /// Characters whose actor is present, out of the scene's characters.
    #[default]
    #[serde(rename = "by_chrs")]
    ByCharacters,
    /// Present actors, out of the distinct actors cast in the scene.
    #[serde(rename = "by_actrs")]
    ByActors,
    /// Lines of present characters, out of all lines in the scene.
    #[serde(rename = "by_lines")]
    ByLines,
}

impl MetricMode {
    /// Every mode, in menu order.
    pub const ALL: [MetricMode; 3] = [Self::ByCharacters, Self::ByActors, Self::ByLines];

    /// Menu key of this mode.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ByCharacters => "by_chrs",
            Self::ByActors => "by_actrs",
            Self::ByLines => "by_lines",
        }
    }
}

impl FromStr for MetricMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by_chrs" => Ok(Self::ByCharacters),
            "by_actrs" => Ok(Self::ByActors),
            "by_lines" => Ok(Self::ByLines),
            _ => Err("The only supported metric modes are 'by_chrs', 'by_actrs' and 'by_lines'"),
        }
    }
}

impl Display for MetricMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
