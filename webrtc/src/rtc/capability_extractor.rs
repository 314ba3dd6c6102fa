//! Builds [`RtpCapabilities`] out of a parsed session description.

use crate::protocols::sdp::fmtp_params::parse_params;
use crate::protocols::sdp::session_model::{MediaSection, SessionModel};
use crate::rtc::rtc_const::codec_const::DEFAULT_AUDIO_CHANNELS;
use crate::rtc::rtp_capabilities::{
    MediaKind, RtcpFeedback, RtpCapabilities, RtpCodecCapability, RtpHeaderExtension,
};
use std::collections::HashMap;
use tracing::debug;

/// Extracts the codecs and header extensions a description offers.
///
/// Only the first audio and the first video section contribute. Codecs keep
/// the order of their first `rtpmap` and are unique per payload type.
pub fn extract(model: &SessionModel) -> RtpCapabilities {
    let mut capabilities = RtpCapabilities::default();
    let mut by_payload_type: HashMap<u8, usize> = HashMap::new();
    let mut seen_kinds: Vec<MediaKind> = Vec::new();

    for section in model.media() {
        let Some(kind) = section.kind().and_then(|kind| kind.parse::<MediaKind>().ok()) else {
            continue;
        };
        if seen_kinds.contains(&kind) {
            debug!("Ignoring additional {} section", kind);
            continue;
        }
        seen_kinds.push(kind);

        add_codecs(section, kind, &mut capabilities.codecs, &mut by_payload_type);
        add_parameters(section, kind, &mut capabilities.codecs, &by_payload_type);
        add_rtcp_feedback(section, kind, &mut capabilities.codecs, &by_payload_type);
        add_header_extensions(section, kind, &mut capabilities.header_extensions);
    }

    capabilities
}

fn add_codecs(
    section: &MediaSection,
    kind: MediaKind,
    codecs: &mut Vec<RtpCodecCapability>,
    by_payload_type: &mut HashMap<u8, usize>,
) {
    for rtp in section.rtp_maps() {
        let Ok(payload_type) = u8::try_from(rtp.payload) else {
            debug!("Dropping rtpmap with payload type {}", rtp.payload);
            continue;
        };
        // First rtpmap for a payload type wins.
        if by_payload_type.contains_key(&payload_type) {
            continue;
        }
        let channels = match kind {
            MediaKind::Audio => Some(rtp.channels().unwrap_or(DEFAULT_AUDIO_CHANNELS)),
            MediaKind::Video => None,
        };
        by_payload_type.insert(payload_type, codecs.len());
        codecs.push(RtpCodecCapability {
            kind,
            mime_type: format!("{}/{}", kind, rtp.codec),
            preferred_payload_type: payload_type,
            clock_rate: rtp.rate.and_then(|rate| u32::try_from(rate).ok()).unwrap_or(0),
            channels,
            parameters: Default::default(),
            rtcp_feedback: Vec::new(),
        });
    }
}

fn codec_index(
    codecs: &[RtpCodecCapability],
    by_payload_type: &HashMap<u8, usize>,
    kind: MediaKind,
    payload: i64,
) -> Option<usize> {
    let payload_type = u8::try_from(payload).ok()?;
    by_payload_type
        .get(&payload_type)
        .copied()
        .filter(|index| codecs[*index].kind == kind)
}

fn add_parameters(
    section: &MediaSection,
    kind: MediaKind,
    codecs: &mut [RtpCodecCapability],
    by_payload_type: &HashMap<u8, usize>,
) {
    for fmtp in section.fmtps() {
        match codec_index(codecs, by_payload_type, kind, fmtp.payload) {
            Some(index) => codecs[index].parameters.extend(parse_params(fmtp.config)),
            None => debug!("Dropping fmtp for unknown payload type {}", fmtp.payload),
        }
    }
}

fn add_rtcp_feedback(
    section: &MediaSection,
    kind: MediaKind,
    codecs: &mut [RtpCodecCapability],
    by_payload_type: &HashMap<u8, usize>,
) {
    for feedback in section.rtcp_feedback() {
        // `*` applies to every codec and is not carried per codec.
        let Some(payload) = feedback.payload_type() else {
            continue;
        };
        match codec_index(codecs, by_payload_type, kind, payload) {
            Some(index) => codecs[index]
                .rtcp_feedback
                .push(RtcpFeedback::new(feedback.feedback_type, feedback.subtype)),
            None => debug!("Dropping rtcp-fb for unknown payload type {}", payload),
        }
    }
}

fn add_header_extensions(
    section: &MediaSection,
    kind: MediaKind,
    header_extensions: &mut Vec<RtpHeaderExtension>,
) {
    for ext in section.extmaps() {
        let Ok(preferred_id) = u16::try_from(ext.id) else {
            debug!("Dropping extmap with id {}", ext.id);
            continue;
        };
        header_extensions.push(RtpHeaderExtension {
            kind: Some(kind),
            uri: ext.uri.to_string(),
            preferred_id,
            preferred_encrypt: ext.encrypted,
            direction: ext.direction.and_then(|direction| direction.parse().ok()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::sdp::parser::parse;
    use crate::rtc::rtp_capabilities::{Direction, ParameterValue};

    const OFFER: &str = "v=0\r\n\
o=- 1 2 IN IP4 127.0.0.1\r\n\
s=-\r\n\
t=0 0\r\n\
m=audio 9 UDP/TLS/RTP/SAVPF 111 0\r\n\
a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r\n\
a=rtpmap:111 opus/48000/2\r\n\
a=rtcp-fb:111 transport-cc\r\n\
a=rtcp-fb:* nack\r\n\
a=fmtp:111 minptime=10;useinbandfec=1\r\n\
a=rtpmap:0 PCMU/8000\r\n\
a=fmtp:55 apt=0\r\n\
m=audio 9 UDP/TLS/RTP/SAVPF 8\r\n\
a=rtpmap:8 PCMA/8000\r\n\
m=video 9 UDP/TLS/RTP/SAVPF 96 97\r\n\
a=extmap:3/recvonly urn:3gpp:video-orientation\r\n\
a=rtpmap:96 VP8/90000\r\n\
a=rtpmap:96 H264/90000\r\n\
a=rtcp-fb:96 nack pli\r\n\
a=rtpmap:97 rtx/90000\r\n\
a=fmtp:97 apt=96\r\n\
m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\n";

    #[test]
    fn test_only_first_section_per_kind() {
        let caps = extract(&parse(OFFER));
        let mimes: Vec<&str> = caps.codecs.iter().map(|c| c.mime_type.as_str()).collect();
        assert_eq!(mimes, vec!["audio/opus", "audio/PCMU", "video/VP8", "video/rtx"]);
    }

    #[test]
    fn test_audio_channels() {
        let caps = extract(&parse(OFFER));
        assert_eq!(caps.codecs[0].channels, Some(2));
        assert_eq!(caps.codecs[1].channels, Some(1));
        assert_eq!(caps.codecs[2].channels, None);
    }

    #[test]
    fn test_parameters_and_feedback_join_by_payload_type() {
        let caps = extract(&parse(OFFER));
        let opus = &caps.codecs[0];
        assert_eq!(opus.parameters.get("useinbandfec"), Some(&ParameterValue::Int(1)));
        assert_eq!(opus.rtcp_feedback, vec![RtcpFeedback::new("transport-cc", None)]);

        assert!(caps.codecs[1].parameters.is_empty());

        let vp8 = &caps.codecs[2];
        assert_eq!(vp8.rtcp_feedback, vec![RtcpFeedback::new("nack", Some("pli"))]);
        assert_eq!(caps.codecs[3].apt(), Some(96));
    }

    #[test]
    fn test_header_extensions() {
        let caps = extract(&parse(OFFER));
        assert_eq!(caps.header_extensions.len(), 2);
        assert_eq!(caps.header_extensions[0].kind, Some(MediaKind::Audio));
        assert_eq!(caps.header_extensions[0].direction, None);
        assert_eq!(caps.header_extensions[1].preferred_id, 3);
        assert_eq!(caps.header_extensions[1].direction, Some(Direction::RecvOnly));
    }

    #[test]
    fn test_empty_model() {
        assert_eq!(extract(&SessionModel::new()), RtpCapabilities::default());
    }
}
