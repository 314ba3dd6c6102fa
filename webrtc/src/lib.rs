pub mod protocols;
pub mod rtc;

pub mod codec;
pub mod config;
pub mod device;
pub mod logger;

pub use config::NegotiationConfig;
pub use device::sfu_device::Device;
pub use protocols::sdp::parser::parse;
pub use protocols::sdp::session_model::{MediaSection, SessionModel};
pub use protocols::sdp::writer::write;
pub use rtc::capability_extractor::extract;
pub use rtc::capability_negotiator::{can_send, negotiate, negotiate_with_config};
pub use rtc::extended_capabilities::ExtendedRtpCapabilities;
pub use rtc::recv_capabilities::to_receive_capabilities;
pub use rtc::rtp_capabilities::{MediaKind, RtpCapabilities};
