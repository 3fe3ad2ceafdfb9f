//! Core value types shared by services and device configurations

mod info;
mod protocol;

pub use info::{DeviceInfo, OperatingSystem};
pub use protocol::Protocol;
