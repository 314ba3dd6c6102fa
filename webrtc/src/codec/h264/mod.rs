pub mod h264_const;
pub mod h264_err;
pub mod profile_level_id;
