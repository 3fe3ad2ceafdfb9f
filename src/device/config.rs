use std::fmt;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use super::lookup::{DeviceInfoResolver, KnownDevices};
use crate::error::{ConfError, Result};
use crate::service::{Properties, ServiceRecord, property_keys};
use crate::types::{DeviceInfo, OperatingSystem, Protocol};

/// Configuration describing a single device and every service it offers
///
/// Holds at most one [`ServiceRecord`] per [`Protocol`]. Adding a service
/// for a protocol that is already present merges into the existing record.
///
/// Identity is derived from [`identifier`](Self::identifier), not from the
/// address, name or services; compare devices with
/// [`is_same_device`](Self::is_same_device).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredConfiguration")]
pub struct DeviceConfiguration {
    address: Ipv4Addr,
    name: String,
    services: Vec<ServiceRecord>,
}

/// Serialized form; services are re-added on load so duplicates merge
#[derive(Deserialize)]
struct StoredConfiguration {
    address: Ipv4Addr,
    name: String,
    #[serde(default)]
    services: Vec<ServiceRecord>,
}

impl From<StoredConfiguration> for DeviceConfiguration {
    fn from(stored: StoredConfiguration) -> Self {
        let mut config = Self::new(stored.address, stored.name);
        for service in stored.services {
            config.add_service(service);
        }
        config
    }
}

impl DeviceConfiguration {
    /// Create an empty configuration for a device
    #[must_use]
    pub fn new(address: Ipv4Addr, name: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
            services: Vec::new(),
        }
    }

    /// Create an empty configuration from a textual IPv4 address
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::InvalidAddress`] if `address` is not a valid IPv4 address.
    pub fn parse(address: &str, name: impl Into<String>) -> Result<Self> {
        let parsed = address
            .parse::<Ipv4Addr>()
            .map_err(|source| ConfError::InvalidAddress {
                address: address.to_string(),
                source,
            })?;
        Ok(Self::new(parsed, name))
    }

    /// Start building a configuration
    #[must_use]
    pub fn builder(address: Ipv4Addr, name: impl Into<String>) -> DeviceConfigurationBuilder {
        DeviceConfigurationBuilder {
            config: Self::new(address, name),
            credentials: Vec::new(),
        }
    }

    /// Device address
    #[must_use]
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a service, merging it into an existing service of the same protocol
    pub fn add_service(&mut self, service: ServiceRecord) {
        let protocol = service.protocol();
        if let Some(existing) = self.get_service_mut(protocol) {
            existing.absorb(service);
            tracing::debug!(name = %self.name, %protocol, "Merged service into existing");
        } else {
            tracing::debug!(
                name = %self.name,
                %protocol,
                identifier = ?service.identifier(),
                "Added service"
            );
            self.services.push(service);
        }
    }

    /// Look up the service for a protocol
    #[must_use]
    pub fn get_service(&self, protocol: Protocol) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.protocol() == protocol)
    }

    /// Look up the service for a protocol for modification
    pub fn get_service_mut(&mut self, protocol: Protocol) -> Option<&mut ServiceRecord> {
        self.services.iter_mut().find(|s| s.protocol() == protocol)
    }

    /// Check if a service for a protocol is registered
    #[must_use]
    pub fn has_service(&self, protocol: Protocol) -> bool {
        self.get_service(protocol).is_some()
    }

    /// All registered services, in registration order
    #[must_use]
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    /// Check if a connection can be established, i.e. an MRP or DMAP service exists
    ///
    /// A device that only offers `AirPlay` is never ready.
    #[must_use]
    pub fn ready(&self) -> bool {
        Protocol::CONNECTABLE.into_iter().any(|p| self.has_service(p))
    }

    /// Main identifier of the device
    ///
    /// Taken from the first service with an identifier, checking MRP, then
    /// DMAP, then `AirPlay`.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        Protocol::ALL
            .into_iter()
            .find_map(|p| self.get_service(p).and_then(ServiceRecord::identifier))
    }

    /// Every identifier known for this device, in registration order
    #[must_use]
    pub fn all_identifiers(&self) -> Vec<&str> {
        self.services
            .iter()
            .filter_map(ServiceRecord::identifier)
            .collect()
    }

    /// Service that should be used to establish a connection
    ///
    /// With an explicit `protocol`, only that protocol is considered.
    /// Otherwise MRP is preferred over DMAP. `AirPlay` is never chosen
    /// as a fallback.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::NoService`] if no candidate service is registered.
    pub fn main_service(&self, protocol: Option<Protocol>) -> Result<&ServiceRecord> {
        let candidates: &[Protocol] = match &protocol {
            Some(requested) => std::slice::from_ref(requested),
            None => &Protocol::CONNECTABLE,
        };

        let service = candidates
            .iter()
            .find_map(|p| self.get_service(*p))
            .ok_or(ConfError::NoService { protocol })?;

        tracing::trace!(name = %self.name, protocol = %service.protocol(), "Selected main service");
        Ok(service)
    }

    /// Set credentials for a protocol
    ///
    /// Returns `false` and leaves the configuration unchanged if no service
    /// for `protocol` is registered.
    pub fn set_credentials(&mut self, protocol: Protocol, credentials: impl Into<String>) -> bool {
        if let Some(service) = self.get_service_mut(protocol) {
            service.set_credentials(Some(credentials.into()));
            tracing::debug!(name = %self.name, %protocol, "Credentials set");
            true
        } else {
            tracing::debug!(name = %self.name, %protocol, "No service to set credentials for");
            false
        }
    }

    /// Check if `other` describes the same physical device
    ///
    /// Two configurations match when both resolve to the same identifier.
    /// Configurations without an identifier never match.
    #[must_use]
    pub fn is_same_device(&self, other: &Self) -> bool {
        match (self.identifier(), other.identifier()) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }

    /// General device information using the built-in device tables
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        self.device_info_with(&KnownDevices)
    }

    /// General device information using a custom resolver
    #[must_use]
    pub fn device_info_with<R: DeviceInfoResolver + ?Sized>(&self, resolver: &R) -> DeviceInfo {
        let properties = self.all_properties();
        let get = |key: &str| properties.get(key).cloned();

        let os_type = if self.has_service(Protocol::Mrp) {
            OperatingSystem::TvOS
        } else if self.has_service(Protocol::Dmap) {
            OperatingSystem::Legacy
        } else {
            OperatingSystem::Unknown
        };

        let build = get(property_keys::SYSTEM_BUILD_VERSION);
        let model = resolver.lookup_model(properties.get(property_keys::MODEL).map(String::as_str));
        let version = get(property_keys::OS_VERSION)
            .or_else(|| resolver.lookup_version(build.as_deref()));
        let mac = get(property_keys::MAC_ADDRESS)
            .or_else(|| get(property_keys::DEVICE_ID))
            .map(|mac| mac.to_uppercase());

        DeviceInfo {
            os_type,
            version,
            build,
            model,
            mac,
        }
    }

    /// Properties of all services combined; later services win on conflict
    fn all_properties(&self) -> Properties {
        let mut properties = Properties::new();
        for service in &self.services {
            properties.extend(service.properties().clone());
        }
        properties
    }
}

impl fmt::Display for DeviceConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.device_info();
        writeln!(f, "       Name: {}", self.name)?;
        writeln!(f, "   Model/SW: {info}")?;
        writeln!(f, "    Address: {}", self.address)?;
        writeln!(f, "        MAC: {}", info.mac.as_deref().unwrap_or("None"))?;
        writeln!(f, "Identifiers:")?;
        for identifier in self.all_identifiers() {
            writeln!(f, " - {identifier}")?;
        }
        write!(f, "Services:")?;
        for service in &self.services {
            write!(f, "\n - {service}")?;
        }
        Ok(())
    }
}

/// Builder for [`DeviceConfiguration`]
#[derive(Debug, Clone)]
pub struct DeviceConfigurationBuilder {
    config: DeviceConfiguration,
    credentials: Vec<(Protocol, String)>,
}

impl DeviceConfigurationBuilder {
    /// Add a service; services for the same protocol are merged
    #[must_use]
    pub fn service(mut self, service: ServiceRecord) -> Self {
        self.config.add_service(service);
        self
    }

    /// Set credentials for a protocol once all services are added
    ///
    /// Ignored if no service for `protocol` is added.
    #[must_use]
    pub fn credentials(mut self, protocol: Protocol, credentials: impl Into<String>) -> Self {
        self.credentials.push((protocol, credentials.into()));
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> DeviceConfiguration {
        let mut config = self.config;
        for (protocol, credentials) in self.credentials {
            if !config.set_credentials(protocol, credentials) {
                tracing::debug!(name = %config.name, %protocol, "Ignoring credentials for missing service");
            }
        }
        config
    }
}
