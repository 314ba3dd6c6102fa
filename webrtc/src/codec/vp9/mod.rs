//! VP9 `profile-id` rules.

use crate::rtc::rtc_const::codec_const::{DEFAULT_VP9_PROFILE_ID, PROFILE_ID};
use crate::rtc::rtp_capabilities::CodecParameters;

/// `profile-id` as text, `"0"` when absent.
pub fn profile_id(params: &CodecParameters) -> String {
    params
        .get(PROFILE_ID)
        .map(ToString::to_string)
        .unwrap_or_else(|| DEFAULT_VP9_PROFILE_ID.to_string())
}

pub fn is_same_profile(local: &CodecParameters, remote: &CodecParameters) -> bool {
    profile_id(local) == profile_id(remote)
}
