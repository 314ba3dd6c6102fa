//! Strings used in H.264 profile-level-id error messages.

pub const PROFILE_LEVEL_ERROR: &str = "H264ProfileError";
pub const NO_PROFILE_LEVEL_ID: &str = "no profile-level-id";
pub const INVALID_PROFILE_LEVEL_ID: &str = "invalid profile-level-id";
pub const PROFILE_MISMATCH: &str = "profile mismatch";
