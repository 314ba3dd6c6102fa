use crate::rtc::extended_capabilities::ExtendedRtpCapabilities;
use crate::rtc::rtc_const::codec_const::{APT, RTX_CODEC};
use crate::rtc::rtp_capabilities::{
    CodecParameters, Direction, ParameterValue, RtpCapabilities, RtpCodecCapability,
    RtpHeaderExtension,
};

/// What this side is able to receive, expressed with the remote payload
/// types and extension ids.
pub fn to_receive_capabilities(extended: &ExtendedRtpCapabilities) -> RtpCapabilities {
    let mut capabilities = RtpCapabilities::default();

    for codec in &extended.codecs {
        capabilities.codecs.push(RtpCodecCapability {
            kind: codec.kind,
            mime_type: codec.mime_type.clone(),
            preferred_payload_type: codec.remote_payload_type,
            clock_rate: codec.clock_rate,
            channels: codec.channels,
            parameters: codec.local_parameters.clone(),
            rtcp_feedback: codec.rtcp_feedback.clone(),
        });

        if let Some(rtx_payload_type) = codec.remote_rtx_payload_type {
            let mut parameters = CodecParameters::new();
            parameters.insert(
                APT.to_string(),
                ParameterValue::Int(i64::from(codec.remote_payload_type)),
            );
            capabilities.codecs.push(RtpCodecCapability {
                kind: codec.kind,
                mime_type: format!("{}/{}", codec.kind, RTX_CODEC),
                preferred_payload_type: rtx_payload_type,
                clock_rate: codec.clock_rate,
                channels: None,
                parameters,
                rtcp_feedback: Vec::new(),
            });
        }
    }

    capabilities.header_extensions = extended
        .header_extensions
        .iter()
        .filter(|ext| ext.direction.map_or(false, Direction::can_receive))
        .map(|ext| RtpHeaderExtension {
            kind: ext.kind,
            uri: ext.uri.clone(),
            preferred_id: ext.recv_id,
            preferred_encrypt: ext.encrypt,
            direction: ext.direction,
        })
        .collect();

    capabilities
}
