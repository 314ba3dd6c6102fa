use crate::device::device_const::device_err_const::{
    ALREADY_LOADED_ERROR, DEVICE_ERROR, INVALID_CAPABILITIES_ERROR, NOT_LOADED_ERROR,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("{}: {}", DEVICE_ERROR, ALREADY_LOADED_ERROR)]
    AlreadyLoaded,
    #[error("{}: {}", DEVICE_ERROR, NOT_LOADED_ERROR)]
    NotLoaded,
    #[error("{}: {} {source}", DEVICE_ERROR, INVALID_CAPABILITIES_ERROR)]
    InvalidCapabilities {
        #[from]
        source: serde_json::Error,
    },
}
