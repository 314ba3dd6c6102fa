//! Entry point used by a client joining an SFU room.

pub mod device_const;
pub mod device_err;
pub mod sfu_device;
