//! RTP parameters handed to the media engine for an outgoing stream.

use crate::rtc::extended_capabilities::{ExtendedRtpCapabilities, ExtendedRtpCodec};
use crate::rtc::rtc_const::codec_const::{APT, RTX_CODEC};
use crate::rtc::rtp_capabilities::{
    CodecParameters, Direction, MediaKind, ParameterValue, RtcpFeedback,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpCodecParameters {
    pub mime_type: String,
    pub payload_type: u8,
    pub clock_rate: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u8>,
    #[serde(default)]
    pub parameters: CodecParameters,
    #[serde(default)]
    pub rtcp_feedback: Vec<RtcpFeedback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpHeaderExtensionParameters {
    pub uri: String,
    pub id: u16,
    #[serde(default)]
    pub encrypt: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpParameters {
    pub codecs: Vec<RtpCodecParameters>,
    #[serde(default)]
    pub header_extensions: Vec<RtpHeaderExtensionParameters>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Local,
    Remote,
}

/// Parameters the local engine sends with: local payload types and local
/// codec parameters.
pub fn sending_rtp_parameters(kind: MediaKind, extended: &ExtendedRtpCapabilities) -> RtpParameters {
    sending_parameters(kind, extended, Side::Local)
}

/// The same stream as the remote side expects to receive it: remote payload
/// types and remote codec parameters.
pub fn sending_remote_rtp_parameters(
    kind: MediaKind,
    extended: &ExtendedRtpCapabilities,
) -> RtpParameters {
    sending_parameters(kind, extended, Side::Remote)
}

fn sending_parameters(kind: MediaKind, extended: &ExtendedRtpCapabilities, side: Side) -> RtpParameters {
    let mut parameters = RtpParameters::default();

    for codec in extended.codecs_of(kind) {
        let (payload_type, rtx_payload_type, codec_parameters) = side_view(codec, side);
        parameters.codecs.push(RtpCodecParameters {
            mime_type: codec.mime_type.clone(),
            payload_type,
            clock_rate: codec.clock_rate,
            channels: codec.channels,
            parameters: codec_parameters.clone(),
            rtcp_feedback: codec.rtcp_feedback.clone(),
        });

        if let Some(rtx_payload_type) = rtx_payload_type {
            let mut rtx_parameters = CodecParameters::new();
            rtx_parameters.insert(APT.to_string(), ParameterValue::Int(i64::from(payload_type)));
            parameters.codecs.push(RtpCodecParameters {
                mime_type: format!("{}/{}", kind, RTX_CODEC),
                payload_type: rtx_payload_type,
                clock_rate: codec.clock_rate,
                channels: None,
                parameters: rtx_parameters,
                rtcp_feedback: Vec::new(),
            });
        }
    }

    parameters.header_extensions = extended
        .header_extensions_of(kind)
        .filter(|ext| ext.direction.map_or(false, Direction::can_send))
        .map(|ext| RtpHeaderExtensionParameters {
            uri: ext.uri.clone(),
            id: ext.send_id,
            encrypt: ext.encrypt,
        })
        .collect();

    parameters
}

fn side_view(codec: &ExtendedRtpCodec, side: Side) -> (u8, Option<u8>, &CodecParameters) {
    match side {
        Side::Local => (
            codec.local_payload_type,
            codec.local_rtx_payload_type,
            &codec.local_parameters,
        ),
        Side::Remote => (
            codec.remote_payload_type,
            codec.remote_rtx_payload_type,
            &codec.remote_parameters,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtc::extended_capabilities::ExtendedHeaderExtension;

    fn extended() -> ExtendedRtpCapabilities {
        let mut remote_parameters = CodecParameters::new();
        remote_parameters.insert("x-google-start-bitrate".to_string(), ParameterValue::Int(1000));
        let ext = |kind, id: u16, direction| ExtendedHeaderExtension {
            kind,
            uri: format!("urn:example:{}", id),
            send_id: id,
            recv_id: id + 10,
            encrypt: false,
            direction,
        };
        ExtendedRtpCapabilities {
            codecs: vec![
                ExtendedRtpCodec {
                    kind: MediaKind::Video,
                    mime_type: "video/VP8".to_string(),
                    clock_rate: 90000,
                    channels: None,
                    local_payload_type: 96,
                    local_rtx_payload_type: Some(97),
                    remote_payload_type: 101,
                    remote_rtx_payload_type: Some(102),
                    local_parameters: CodecParameters::new(),
                    remote_parameters,
                    rtcp_feedback: Vec::new(),
                },
                ExtendedRtpCodec {
                    kind: MediaKind::Audio,
                    mime_type: "audio/opus".to_string(),
                    clock_rate: 48000,
                    channels: Some(2),
                    local_payload_type: 111,
                    local_rtx_payload_type: None,
                    remote_payload_type: 100,
                    remote_rtx_payload_type: None,
                    local_parameters: CodecParameters::new(),
                    remote_parameters: CodecParameters::new(),
                    rtcp_feedback: Vec::new(),
                },
            ],
            header_extensions: vec![
                ext(Some(MediaKind::Video), 1, Some(Direction::SendOnly)),
                ext(Some(MediaKind::Video), 2, Some(Direction::RecvOnly)),
                ext(Some(MediaKind::Audio), 3, Some(Direction::SendRecv)),
                ext(None, 4, Some(Direction::SendRecv)),
                ext(Some(MediaKind::Video), 5, None),
            ],
        }
    }

    #[test]
    fn test_local_view() {
        let params = sending_rtp_parameters(MediaKind::Video, &extended());
        let pts: Vec<u8> = params.codecs.iter().map(|c| c.payload_type).collect();
        assert_eq!(pts, vec![96, 97]);
        assert_eq!(params.codecs[1].mime_type, "video/rtx");
        assert_eq!(params.codecs[1].parameters.get("apt"), Some(&ParameterValue::Int(96)));
        assert!(params.codecs[0].parameters.is_empty());

        let ids: Vec<u16> = params.header_extensions.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_remote_view() {
        let params = sending_remote_rtp_parameters(MediaKind::Video, &extended());
        let pts: Vec<u8> = params.codecs.iter().map(|c| c.payload_type).collect();
        assert_eq!(pts, vec![101, 102]);
        assert_eq!(params.codecs[1].parameters.get("apt"), Some(&ParameterValue::Int(101)));
        assert_eq!(
            params.codecs[0].parameters.get("x-google-start-bitrate"),
            Some(&ParameterValue::Int(1000))
        );
    }

    #[test]
    fn test_audio_view() {
        let params = sending_rtp_parameters(MediaKind::Audio, &extended());
        assert_eq!(params.codecs.len(), 1);
        assert_eq!(params.codecs[0].channels, Some(2));
        let ids: Vec<u16> = params.header_extensions.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_serialized_fields() {
        let params = sending_rtp_parameters(MediaKind::Audio, &extended());
        let json = serde_json::to_value(&params).unwrap();
        let mut keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["codecs", "headerExtensions"]);
        assert_eq!(json["codecs"][0]["payloadType"], 111);
    }
}
