use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfError, Result};
use crate::types::Protocol;

/// Free-form metadata attached to a service by discovery
pub type Properties = HashMap<String, String>;

/// A single protocol service offered by a device
///
/// Protocol and identifier are fixed at construction; credentials and
/// properties may change as more discovery data arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    identifier: Option<String>,
    protocol: Protocol,
    port: Option<u16>,
    #[serde(default)]
    properties: Properties,
    #[serde(default)]
    credentials: Option<String>,
}

impl ServiceRecord {
    /// Create a service using the protocol's default port
    #[must_use]
    pub fn new(protocol: Protocol, identifier: Option<String>) -> Self {
        Self {
            identifier,
            protocol,
            port: protocol.default_port(),
            properties: Properties::new(),
            credentials: None,
        }
    }

    /// Create a DMAP service (default port 3689)
    #[must_use]
    pub fn dmap(identifier: impl Into<String>, credentials: Option<String>) -> Self {
        let mut service = Self::new(Protocol::Dmap, Some(identifier.into()));
        service.credentials = credentials;
        service
    }

    /// Create an MRP service; MRP has no default port
    #[must_use]
    pub fn mrp(identifier: impl Into<String>, port: u16) -> Self {
        Self::new(Protocol::Mrp, Some(identifier.into())).with_port(port)
    }

    /// Create an `AirPlay` service (default port 7000)
    #[must_use]
    pub fn airplay(identifier: impl Into<String>) -> Self {
        Self::new(Protocol::AirPlay, Some(identifier.into()))
    }

    /// Set the service port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: impl Into<String>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    /// Add a single property
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Add all properties from an iterator, overwriting existing keys
    #[must_use]
    pub fn with_properties<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties
            .extend(properties.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add properties parsed from raw `key=value` TXT records
    #[must_use]
    pub fn with_txt_records(self, records: &[String]) -> Self {
        self.with_properties(super::parse_txt_records(records))
    }

    /// Protocol-specific device identifier
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Protocol of this service
    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Port the service listens on, if known
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Service metadata
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Mutable access to service metadata
    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Credentials used when connecting, if any
    #[must_use]
    pub fn credentials(&self) -> Option<&str> {
        self.credentials.as_deref()
    }

    /// Replace credentials
    pub fn set_credentials(&mut self, credentials: Option<String>) {
        self.credentials = credentials;
    }

    /// Merge another service of the same protocol into this one
    ///
    /// Incoming properties are layered over the existing ones and non-empty
    /// incoming credentials replace the current credentials. Identifier and
    /// port are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::ProtocolMismatch`] if `other` uses a different
    /// protocol. `self` is left untouched in that case.
    pub fn merge(&mut self, other: ServiceRecord) -> Result<()> {
        if other.protocol != self.protocol {
            return Err(ConfError::ProtocolMismatch {
                expected: self.protocol,
                actual: other.protocol,
            });
        }

        self.absorb(other);
        Ok(())
    }

    /// Merge without the protocol check; callers guarantee a match
    pub(crate) fn absorb(&mut self, other: ServiceRecord) {
        debug_assert_eq!(self.protocol, other.protocol);

        let replace_credentials = other.credentials.as_deref().is_some_and(|c| !c.is_empty());
        if replace_credentials {
            self.credentials = other.credentials;
        }
        self.properties.extend(other.properties);

        tracing::trace!(
            protocol = %self.protocol,
            properties = self.properties.len(),
            replace_credentials,
            "Merged service"
        );
    }
}

impl fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Protocol: {}, Port: ", self.protocol)?;
        match self.port {
            Some(port) => write!(f, "{port}")?,
            None => f.write_str("None")?,
        }
        write!(
            f,
            ", Credentials: {}",
            self.credentials.as_deref().unwrap_or("None")
        )
    }
}
