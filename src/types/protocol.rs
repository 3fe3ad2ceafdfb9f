use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfError;

/// Communication protocol a device service speaks
///
/// Each protocol appears at most once per device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Protocol {
    /// Media Remote Protocol (tvOS devices)
    #[serde(rename = "MRP")]
    Mrp,
    /// Digital Media Access Protocol (legacy devices)
    #[serde(rename = "DMAP")]
    Dmap,
    /// `AirPlay` streaming
    #[serde(rename = "AirPlay")]
    AirPlay,
}

impl Protocol {
    /// All known protocols, in identifier priority order
    pub const ALL: [Protocol; 3] = [Protocol::Mrp, Protocol::Dmap, Protocol::AirPlay];

    /// Protocols that can establish a primary connection, in preference order
    pub const CONNECTABLE: [Protocol; 2] = [Protocol::Mrp, Protocol::Dmap];

    /// Port used when discovery did not provide one
    ///
    /// MRP has no well-known port and returns `None`.
    #[must_use]
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Mrp => None,
            Self::Dmap => Some(3689),
            Self::AirPlay => Some(7000),
        }
    }

    /// Whether a connection can be established over this protocol alone
    #[must_use]
    pub fn is_connectable(self) -> bool {
        matches!(self, Self::Mrp | Self::Dmap)
    }

    /// Canonical tag for this protocol
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mrp => "MRP",
            Self::Dmap => "DMAP",
            Self::AirPlay => "AirPlay",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfError::UnknownProtocol(s.to_string()))
    }
}
