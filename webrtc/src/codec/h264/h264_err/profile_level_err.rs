use crate::codec::h264::h264_const::profile_level_const::{
    INVALID_PROFILE_LEVEL_ID, NO_PROFILE_LEVEL_ID, PROFILE_LEVEL_ERROR, PROFILE_MISMATCH,
};
use crate::codec::h264::profile_level_id::H264Profile;
use thiserror::Error;

/// Failures while computing the `profile-level-id` of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum H264ProfileError {
    #[error("{}: {}", PROFILE_LEVEL_ERROR, NO_PROFILE_LEVEL_ID)]
    NoProfileLevelId,
    #[error("{}: {} \"{value}\"", PROFILE_LEVEL_ERROR, INVALID_PROFILE_LEVEL_ID)]
    InvalidProfileLevelId { value: String },
    #[error("{}: {} {local:?} != {remote:?}", PROFILE_LEVEL_ERROR, PROFILE_MISMATCH)]
    ProfileMismatch {
        local: H264Profile,
        remote: H264Profile,
    },
}
