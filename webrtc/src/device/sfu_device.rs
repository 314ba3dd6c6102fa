use crate::config::NegotiationConfig;
use crate::device::device_err::DeviceError;
use crate::protocols::sdp::parser::parse;
use crate::rtc::capability_extractor::extract;
use crate::rtc::capability_negotiator::{can_send, negotiate_with_config};
use crate::rtc::extended_capabilities::ExtendedRtpCapabilities;
use crate::rtc::recv_capabilities::to_receive_capabilities;
use crate::rtc::rtp_capabilities::{MediaKind, RtpCapabilities};
use crate::rtc::sending_parameters::{
    sending_remote_rtp_parameters, sending_rtp_parameters, RtpParameters,
};
use tracing::info;

#[derive(Debug, Clone)]
struct LoadedCapabilities {
    extended: ExtendedRtpCapabilities,
    recv: RtpCapabilities,
    can_produce_audio: bool,
    can_produce_video: bool,
}

/// Negotiation state of one client against an SFU router.
///
/// A device is loaded once with the router capabilities and the offer the
/// local media engine produces; everything else is derived from that.
#[derive(Debug, Clone, Default)]
pub struct Device {
    config: NegotiationConfig,
    loaded: Option<LoadedCapabilities>,
}

impl Device {
    pub fn new() -> Self {
        Device::default()
    }

    pub fn with_config(config: NegotiationConfig) -> Self {
        Device {
            config,
            loaded: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Negotiates `router_capabilities` against the capabilities found in
    /// `native_offer`, the description the local engine generated.
    pub fn load(
        &mut self,
        router_capabilities: &RtpCapabilities,
        native_offer: &str,
    ) -> Result<(), DeviceError> {
        if self.loaded.is_some() {
            return Err(DeviceError::AlreadyLoaded);
        }

        let native_capabilities = extract(&parse(native_offer));
        let extended = negotiate_with_config(&native_capabilities, router_capabilities, &self.config);
        let recv = to_receive_capabilities(&extended);
        let can_produce_audio = can_send(MediaKind::Audio, &extended);
        let can_produce_video = can_send(MediaKind::Video, &extended);

        info!(
            "Device loaded: {} codecs, {} header extensions, audio={}, video={}",
            extended.codecs.len(),
            extended.header_extensions.len(),
            can_produce_audio,
            can_produce_video
        );

        self.loaded = Some(LoadedCapabilities {
            extended,
            recv,
            can_produce_audio,
            can_produce_video,
        });
        Ok(())
    }

    /// Like [`Device::load`] with the router capabilities as received over
    /// signaling.
    pub fn load_from_payload(
        &mut self,
        router_payload: &serde_json::Value,
        native_offer: &str,
    ) -> Result<(), DeviceError> {
        if self.loaded.is_some() {
            return Err(DeviceError::AlreadyLoaded);
        }
        let router_capabilities = RtpCapabilities::from_payload(router_payload)?;
        self.load(&router_capabilities, native_offer)
    }

    fn loaded(&self) -> Result<&LoadedCapabilities, DeviceError> {
        self.loaded.as_ref().ok_or(DeviceError::NotLoaded)
    }

    pub fn extended_rtp_capabilities(&self) -> Result<&ExtendedRtpCapabilities, DeviceError> {
        Ok(&self.loaded()?.extended)
    }

    pub fn recv_rtp_capabilities(&self) -> Result<&RtpCapabilities, DeviceError> {
        Ok(&self.loaded()?.recv)
    }

    pub fn can_produce(&self, kind: MediaKind) -> Result<bool, DeviceError> {
        let loaded = self.loaded()?;
        Ok(match kind {
            MediaKind::Audio => loaded.can_produce_audio,
            MediaKind::Video => loaded.can_produce_video,
        })
    }

    pub fn sending_rtp_parameters(&self, kind: MediaKind) -> Result<RtpParameters, DeviceError> {
        Ok(sending_rtp_parameters(kind, &self.loaded()?.extended))
    }

    pub fn sending_remote_rtp_parameters(
        &self,
        kind: MediaKind,
    ) -> Result<RtpParameters, DeviceError> {
        Ok(sending_remote_rtp_parameters(kind, &self.loaded()?.extended))
    }
}
