//! RTP capability extraction, negotiation and the views derived from it.

pub mod capability_extractor;
pub mod capability_negotiator;
pub mod extended_capabilities;
pub mod recv_capabilities;
pub mod rtc_const;
pub mod rtp_capabilities;
pub mod sending_parameters;
