//! Session description grammar, parser, writer and model.

pub mod fmtp_params;
pub mod grammar;
pub mod parser;
pub mod sdp_consts;
pub mod sdp_error;
pub mod sdp_value;
pub mod session_model;
pub mod writer;
