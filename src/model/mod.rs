pub mod snapshot;

pub use snapshot::{DeviceSnapshot, DirectionStats};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    /// Label prefix of the direction's "current rate" stat line.
    pub fn current_label(self) -> &'static str {
        match self {
            Self::Inbound => "CurIn:",
            Self::Outbound => "CurOut:",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inbound => write!(f, "inbound"),
            Self::Outbound => write!(f, "outbound"),
        }
    }
}
