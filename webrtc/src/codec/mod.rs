pub mod h264;
pub mod vp9;
