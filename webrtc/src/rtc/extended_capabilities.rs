//! Negotiated intersection of local and remote capabilities.

use crate::rtc::rtp_capabilities::{CodecParameters, Direction, MediaKind, RtcpFeedback};
use serde::{Deserialize, Serialize};

/// A codec both sides support, with each side's payload types and
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedRtpCodec {
    pub kind: MediaKind,
    pub mime_type: String,
    pub clock_rate: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u8>,
    pub local_payload_type: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_rtx_payload_type: Option<u8>,
    pub remote_payload_type: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_rtx_payload_type: Option<u8>,
    #[serde(default)]
    pub local_parameters: CodecParameters,
    #[serde(default)]
    pub remote_parameters: CodecParameters,
    #[serde(default)]
    pub rtcp_feedback: Vec<RtcpFeedback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedHeaderExtension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
    pub uri: String,
    pub send_id: u16,
    pub recv_id: u16,
    #[serde(default)]
    pub encrypt: bool,
    /// Inverse of the remote's declared direction; unset when it declared
    /// none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedRtpCapabilities {
    #[serde(default)]
    pub codecs: Vec<ExtendedRtpCodec>,
    #[serde(default)]
    pub header_extensions: Vec<ExtendedHeaderExtension>,
}

impl ExtendedRtpCapabilities {
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, serde_json::Error> {
        ExtendedRtpCapabilities::deserialize(payload)
    }

    pub fn to_payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn codecs_of(&self, kind: MediaKind) -> impl Iterator<Item = &ExtendedRtpCodec> {
        self.codecs.iter().filter(move |codec| codec.kind == kind)
    }

    /// Header extensions usable for `kind`; kind-less ones apply to both.
    pub fn header_extensions_of(
        &self,
        kind: MediaKind,
    ) -> impl Iterator<Item = &ExtendedHeaderExtension> {
        self.header_extensions
            .iter()
            .filter(move |ext| ext.kind.map_or(true, |ext_kind| ext_kind == kind))
    }
}
