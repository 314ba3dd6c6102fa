//!Strings used in device error messages.

pub const DEVICE_ERROR: &str = "DeviceError";
pub const ALREADY_LOADED_ERROR: &str = "device already loaded";
pub const NOT_LOADED_ERROR: &str = "device not loaded";
pub const INVALID_CAPABILITIES_ERROR: &str = "invalid router capabilities";
