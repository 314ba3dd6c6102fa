pub mod error_consts;
pub mod general_consts;
