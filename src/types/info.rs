use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating system family a device runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperatingSystem {
    /// Could not be determined
    #[default]
    Unknown,
    /// Pre-tvOS software (DMAP only)
    Legacy,
    /// tvOS
    TvOS,
}

impl OperatingSystem {
    /// Short name used in device summaries
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown OS",
            Self::Legacy => "ATV SW",
            Self::TvOS => "tvOS",
        }
    }
}

/// General information about a device, aggregated from all of its services
///
/// This is a derived snapshot; it is recomputed from the current services
/// on every request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Operating system family
    pub os_type: OperatingSystem,
    /// Human-readable software version (e.g. "14.0")
    pub version: Option<String>,
    /// Raw build number (e.g. "18J386")
    pub build: Option<String>,
    /// Human-readable model name
    pub model: Option<String>,
    /// MAC address, upper-cased
    pub mac: Option<String>,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.model.as_deref().unwrap_or("Unknown Model"),
            self.os_type.label()
        )?;
        if let Some(version) = &self.version {
            write!(f, " {version}")?;
        }
        if let Some(build) = &self.build {
            write!(f, " build {build}")?;
        }
        Ok(())
    }
}
