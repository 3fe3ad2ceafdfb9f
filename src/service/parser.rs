//! Parser for service TXT record data

use super::Properties;

/// Parse `key=value` TXT strings from a discovery response into a property map
///
/// A record without `=` maps its key to an empty value. Empty records are skipped.
#[must_use]
pub fn parse_txt_records(records: &[String]) -> Properties {
    records
        .iter()
        .filter_map(|record| {
            let mut parts = record.splitn(2, '=');
            let key = parts.next().filter(|k| !k.is_empty())?.to_string();
            let value = parts.next().unwrap_or("").to_string();
            Some((key, value))
        })
        .collect()
}

/// Property keys consulted when aggregating device information
pub mod property_keys {
    /// Build number published by MRP (e.g. "18J386")
    pub const SYSTEM_BUILD_VERSION: &str = "SystemBuildVersion";
    /// Raw model identifier (e.g. "AppleTV6,2")
    pub const MODEL: &str = "model";
    /// Operating system version published by `AirPlay`
    pub const OS_VERSION: &str = "osvers";
    /// MAC address published by MRP
    pub const MAC_ADDRESS: &str = "macAddress";
    /// Device ID (MAC address format) published by `AirPlay`
    pub const DEVICE_ID: &str = "deviceid";
}
