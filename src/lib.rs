//! # atvconf
//!
//! Device configurations for media devices reachable over several protocols.
//!
//! A device discovered on the network may offer more than one service
//! (MRP, DMAP, `AirPlay`). This crate collects those services under a single
//! [`DeviceConfiguration`] and answers the questions a connection layer
//! needs answered:
//!
//! - Is the device ready to be connected to?
//! - Which service should be used for the connection?
//! - What is the stable identifier of the device?
//! - What model, software version and MAC address does it report?
//!
//! The crate performs no I/O. Discovery and connection live elsewhere and
//! exchange data with this crate through [`ServiceRecord`].
//!
//! ## Example
//!
//! ```rust
//! use std::net::Ipv4Addr;
//!
//! use atvconf::{DeviceConfiguration, OperatingSystem, Protocol, ServiceRecord};
//!
//! # fn example() -> Result<(), atvconf::ConfError> {
//! let mut config = DeviceConfiguration::new(Ipv4Addr::new(10, 0, 0, 2), "Living Room");
//! config.add_service(
//!     ServiceRecord::mrp("ABC", 49152).with_property("SystemBuildVersion", "18J386"),
//! );
//! config.add_service(ServiceRecord::dmap("XYZ", None));
//!
//! assert!(config.ready());
//! assert_eq!(config.identifier(), Some("ABC"));
//! assert_eq!(config.main_service(None)?.protocol(), Protocol::Mrp);
//! assert_eq!(config.device_info().os_type, OperatingSystem::TvOS);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Device configurations and device info resolution
pub mod device;
/// Error types
pub mod error;
/// Protocol services
pub mod service;
/// Core types
pub mod types;

// Re-exports
pub use device::{DeviceConfiguration, DeviceConfigurationBuilder, DeviceInfoResolver, KnownDevices};
pub use error::{ConfError, Result};
pub use service::{Properties, ServiceRecord};
pub use types::{DeviceInfo, OperatingSystem, Protocol};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ConfError, DeviceConfiguration, DeviceInfo, DeviceInfoResolver, OperatingSystem, Protocol,
        ServiceRecord,
    };
}
