use std::net::AddrParseError;
use thiserror::Error;

use crate::types::Protocol;

/// Errors that can occur while building or querying a device configuration
#[derive(Debug, Error)]
pub enum ConfError {
    /// No connectable service is registered
    #[error("no service to connect to{}", requested(.protocol))]
    NoService {
        /// The protocol that was explicitly requested, if any
        protocol: Option<Protocol>,
    },

    /// Attempted to merge two services of different protocols
    #[error("cannot merge {actual} service into {expected} service")]
    ProtocolMismatch {
        /// Protocol of the existing service
        expected: Protocol,
        /// Protocol of the incoming service
        actual: Protocol,
    },

    /// Address could not be parsed as an IPv4 address
    #[error("invalid address: {address}")]
    InvalidAddress {
        /// The rejected input
        address: String,
        /// The underlying parse error
        #[source]
        source: AddrParseError,
    },

    /// Protocol tag was not recognized
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),
}

impl ConfError {
    /// Check if this error means no usable service was found
    #[must_use]
    pub fn is_no_service(&self) -> bool {
        matches!(self, Self::NoService { .. })
    }

    /// Check if this error is the result of a caller contract breach
    /// rather than missing discovery data
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Self::ProtocolMismatch { .. })
    }
}

fn requested(protocol: &Option<Protocol>) -> String {
    protocol.map(|p| format!(" (requested {p})")).unwrap_or_default()
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfError>;
