//! Intersects local and remote RTP capabilities.

use crate::codec::h264::profile_level_id::{generate_profile_level_id_for_answer, is_same_profile};
use crate::codec::vp9;
use crate::config::NegotiationConfig;
use crate::rtc::extended_capabilities::{
    ExtendedHeaderExtension, ExtendedRtpCapabilities, ExtendedRtpCodec,
};
use crate::rtc::rtc_const::codec_const::{
    H264_MIME_TYPE, PACKETIZATION_MODE, PROFILE_LEVEL_ID, VP9_MIME_TYPE,
};
use crate::rtc::rtp_capabilities::{
    CodecParameters, Direction, MediaKind, ParameterValue, RtcpFeedback, RtpCapabilities,
    RtpCodecCapability, RtpHeaderExtension,
};
use tracing::debug;

/// Negotiates with the default [`NegotiationConfig`].
pub fn negotiate(local: &RtpCapabilities, remote: &RtpCapabilities) -> ExtendedRtpCapabilities {
    negotiate_with_config(local, remote, &NegotiationConfig::default())
}

/// Computes the capabilities both sides share.
///
/// Extended codecs follow the remote codec order. Codecs without a local
/// match are left out; this never fails.
pub fn negotiate_with_config(
    local: &RtpCapabilities,
    remote: &RtpCapabilities,
    config: &NegotiationConfig,
) -> ExtendedRtpCapabilities {
    let mut extended = ExtendedRtpCapabilities::default();

    for remote_codec in remote.codecs.iter().filter(|codec| !codec.is_rtx()) {
        let matched = local
            .codecs
            .iter()
            .filter(|codec| !codec.is_rtx())
            .find_map(|local_codec| {
                match_codecs(local_codec, remote_codec, config).map(|params| (local_codec, params))
            });
        let Some((local_codec, params)) = matched else {
            debug!(
                "No local codec for remote {} (pt {})",
                remote_codec.mime_type, remote_codec.preferred_payload_type
            );
            continue;
        };

        let (local_rtx_payload_type, remote_rtx_payload_type) = match (
            rtx_payload_type(local, local_codec.preferred_payload_type),
            rtx_payload_type(remote, remote_codec.preferred_payload_type),
        ) {
            (Some(local_rtx), Some(remote_rtx)) => (Some(local_rtx), Some(remote_rtx)),
            _ => (None, None),
        };

        extended.codecs.push(ExtendedRtpCodec {
            kind: local_codec.kind,
            mime_type: local_codec.mime_type.clone(),
            clock_rate: local_codec.clock_rate,
            channels: local_codec.channels,
            local_payload_type: local_codec.preferred_payload_type,
            local_rtx_payload_type,
            remote_payload_type: remote_codec.preferred_payload_type,
            remote_rtx_payload_type,
            local_parameters: params.local,
            remote_parameters: params.remote,
            rtcp_feedback: reduce_rtcp_feedback(&local_codec.rtcp_feedback, &remote_codec.rtcp_feedback),
        });
    }

    for remote_ext in &remote.header_extensions {
        let Some(local_ext) = local
            .header_extensions
            .iter()
            .find(|local_ext| match_header_extensions(local_ext, remote_ext))
        else {
            continue;
        };
        extended.header_extensions.push(ExtendedHeaderExtension {
            kind: remote_ext.kind.or(local_ext.kind),
            uri: remote_ext.uri.clone(),
            send_id: local_ext.preferred_id,
            recv_id: remote_ext.preferred_id,
            encrypt: local_ext.preferred_encrypt,
            direction: remote_ext.direction.map(Direction::invert),
        });
    }

    extended
}

/// Parameter sets of a matched pair, possibly rewritten by the match.
#[derive(Debug)]
struct MatchedParameters {
    local: CodecParameters,
    remote: CodecParameters,
}

fn match_codecs(
    local: &RtpCodecCapability,
    remote: &RtpCodecCapability,
    config: &NegotiationConfig,
) -> Option<MatchedParameters> {
    let mime_type = local.mime_type.to_ascii_lowercase();
    if mime_type != remote.mime_type.to_ascii_lowercase()
        || local.clock_rate != remote.clock_rate
        || local.channels != remote.channels
    {
        return None;
    }

    let mut params = MatchedParameters {
        local: local.parameters.clone(),
        remote: remote.parameters.clone(),
    };
    if !config.strict_codec_matching {
        return Some(params);
    }

    match mime_type.as_str() {
        H264_MIME_TYPE => {
            if packetization_mode(&params.local) != packetization_mode(&params.remote)
                || !is_same_profile(&params.local, &params.remote)
            {
                return None;
            }
            if config.rewrite_h264_profile_level_id {
                match generate_profile_level_id_for_answer(&params.local, &params.remote) {
                    Ok(profile_level_id) => {
                        params.local.insert(
                            PROFILE_LEVEL_ID.to_string(),
                            ParameterValue::Text(profile_level_id.clone()),
                        );
                        params
                            .remote
                            .insert(PROFILE_LEVEL_ID.to_string(), ParameterValue::Text(profile_level_id));
                    }
                    Err(err) => {
                        debug!("H264 pt {} rejected: {}", remote.preferred_payload_type, err);
                        return None;
                    }
                }
            }
        }
        VP9_MIME_TYPE => {
            if !vp9::is_same_profile(&params.local, &params.remote) {
                return None;
            }
        }
        _ => {}
    }

    Some(params)
}

fn packetization_mode(params: &CodecParameters) -> i64 {
    params
        .get(PACKETIZATION_MODE)
        .and_then(ParameterValue::as_i64)
        .unwrap_or(0)
}

/// Payload type of the RTX codec whose `apt` points at `payload_type`.
fn rtx_payload_type(capabilities: &RtpCapabilities, payload_type: u8) -> Option<u8> {
    capabilities
        .codecs
        .iter()
        .find(|codec| codec.is_rtx() && codec.apt() == Some(i64::from(payload_type)))
        .map(|codec| codec.preferred_payload_type)
}

/// Feedback present on both sides, in local order.
fn reduce_rtcp_feedback(local: &[RtcpFeedback], remote: &[RtcpFeedback]) -> Vec<RtcpFeedback> {
    local
        .iter()
        .filter(|feedback| remote.contains(feedback))
        .cloned()
        .collect()
}

fn match_header_extensions(local: &RtpHeaderExtension, remote: &RtpHeaderExtension) -> bool {
    let kinds_agree = match (local.kind, remote.kind) {
        (Some(local_kind), Some(remote_kind)) => local_kind == remote_kind,
        _ => true,
    };
    kinds_agree && local.uri == remote.uri
}

/// True when at least one codec of `kind` was negotiated.
pub fn can_send(kind: MediaKind, extended: &ExtendedRtpCapabilities) -> bool {
    extended.codecs_of(kind).next().is_some()
}
