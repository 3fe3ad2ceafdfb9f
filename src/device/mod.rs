//! Device configurations unifying several protocol services

mod config;
mod lookup;
#[cfg(test)]
mod policy_proptest;

pub use config::{DeviceConfiguration, DeviceConfigurationBuilder};
pub use lookup::{DeviceInfoResolver, KnownDevices};
