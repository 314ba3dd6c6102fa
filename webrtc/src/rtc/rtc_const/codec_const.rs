//! Codec names and fmtp parameter keys used during negotiation.

pub const RTX_MIME_SUFFIX: &str = "/rtx";
pub const RTX_CODEC: &str = "rtx";

pub const H264_MIME_TYPE: &str = "video/h264";
pub const VP9_MIME_TYPE: &str = "video/vp9";

pub const APT: &str = "apt";
pub const PACKETIZATION_MODE: &str = "packetization-mode";
pub const PROFILE_LEVEL_ID: &str = "profile-level-id";
pub const LEVEL_ASYMMETRY_ALLOWED: &str = "level-asymmetry-allowed";
pub const PROFILE_ID: &str = "profile-id";
pub const DEFAULT_VP9_PROFILE_ID: &str = "0";

pub const DEFAULT_AUDIO_CHANNELS: u8 = 1;
