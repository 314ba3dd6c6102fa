//! Structured form of a session description.
//!
//! [`SessionModel`] is what [`crate::protocols::sdp::parser::parse`] returns
//! and what [`crate::protocols::sdp::writer::write`] consumes. Storage is the
//! loosely typed [`SdpRecord`]; the accessors below give typed read views
//! over the collections the negotiation code needs.

use crate::protocols::sdp::sdp_consts::general_consts::{
    CODEC, CONFIG, DEFAULT_SESSION_NAME, DIRECTION, ENCODING, ENCRYPT_URI, EXT, EXT_DIRECTION,
    EXT_ENCRYPT_URI, EXT_ID, EXT_URI, FEEDBACK_SUBTYPE, FEEDBACK_TYPE, FMTP, MEDIA_TYPE, MID,
    ORIGIN, PAYLOAD, PAYLOADS, PORT, PROTOCOL, RATE, RTCP_FEEDBACK, RTP, SESSION_NAME, TIMING,
    VERSION, WILDCARD_PAYLOAD,
};
use crate::protocols::sdp::sdp_value::{SdpRecord, SdpValue};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionModel {
    #[serde(flatten)]
    session: SdpRecord,
    #[serde(default)]
    media: Vec<MediaSection>,
}

impl SessionModel {
    pub fn new() -> Self {
        SessionModel::default()
    }

    /// Fresh model for a locally generated description: version 0, a random
    /// origin session id, anonymous session name and unbounded timing.
    pub fn new_local() -> Self {
        let session_id: u64 = rand::thread_rng().gen_range(1..i64::MAX as u64);

        let mut origin = SdpRecord::new();
        origin
            .insert("username", "-")
            .insert("sessionId", session_id)
            .insert("sessionVersion", 2u64)
            .insert("netType", "IN")
            .insert("ipVer", 4i64)
            .insert("address", "127.0.0.1");

        let mut timing = SdpRecord::new();
        timing.insert("start", 0i64).insert("stop", 0i64);

        let mut session = SdpRecord::new();
        session
            .insert(VERSION, 0i64)
            .insert(ORIGIN, origin)
            .insert(SESSION_NAME, DEFAULT_SESSION_NAME)
            .insert(TIMING, timing);

        SessionModel {
            session,
            media: Vec::new(),
        }
    }

    pub fn session(&self) -> &SdpRecord {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SdpRecord {
        &mut self.session
    }

    pub fn media(&self) -> &[MediaSection] {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut Vec<MediaSection> {
        &mut self.media
    }

    pub fn push_media(&mut self, section: MediaSection) {
        self.media.push(section);
    }

    /// Record that lines currently apply to: the latest media section, or
    /// the session when no `m=` line has been seen yet.
    pub(crate) fn current_scope_mut(&mut self) -> &mut SdpRecord {
        match self.media.last_mut() {
            Some(section) => &mut section.0,
            None => &mut self.session,
        }
    }

    pub fn version(&self) -> i64 {
        self.session.get_i64(VERSION).unwrap_or(0)
    }

    pub fn origin(&self) -> Option<&SdpRecord> {
        self.session.get_record(ORIGIN)
    }

    pub fn name(&self) -> &str {
        self.session
            .get_str(SESSION_NAME)
            .unwrap_or(DEFAULT_SESSION_NAME)
    }
}

/// One `m=` section and every line that followed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaSection(SdpRecord);

impl MediaSection {
    /// Section as the parser starts it: empty `rtp` and `fmtp` lists.
    pub fn empty() -> Self {
        let mut record = SdpRecord::new();
        record.ensure_list(RTP);
        record.ensure_list(FMTP);
        MediaSection(record)
    }

    pub fn new(kind: &str, port: u64, protocol: &str, payloads: &str) -> Self {
        let mut section = MediaSection::empty();
        section
            .0
            .insert(MEDIA_TYPE, kind)
            .insert(PORT, port)
            .insert(PROTOCOL, protocol)
            .insert(PAYLOADS, payloads);
        section
    }

    pub fn record(&self) -> &SdpRecord {
        &self.0
    }

    pub fn record_mut(&mut self) -> &mut SdpRecord {
        &mut self.0
    }

    pub fn kind(&self) -> Option<&str> {
        self.0.get_str(MEDIA_TYPE)
    }

    pub fn port(&self) -> Option<u64> {
        self.0.get_u64(PORT)
    }

    pub fn protocol(&self) -> Option<&str> {
        self.0.get_str(PROTOCOL)
    }

    pub fn payloads(&self) -> &str {
        self.0.get_str(PAYLOADS).unwrap_or("")
    }

    pub fn mid(&self) -> Option<&str> {
        self.0.get_str(MID)
    }

    pub fn direction(&self) -> Option<&str> {
        self.0.get_str(DIRECTION)
    }

    fn entries(&self, key: &str) -> &[SdpRecord] {
        self.0.get_list(key).unwrap_or(&[])
    }

    pub fn rtp_maps(&self) -> Vec<RtpMapEntry<'_>> {
        self.entries(RTP)
            .iter()
            .filter_map(|entry| {
                Some(RtpMapEntry {
                    payload: entry.get_i64(PAYLOAD)?,
                    codec: entry.get_str(CODEC)?,
                    rate: entry.get_i64(RATE),
                    encoding: entry.get(ENCODING),
                })
            })
            .collect()
    }

    pub fn fmtps(&self) -> Vec<FmtpEntry<'_>> {
        self.entries(FMTP)
            .iter()
            .filter_map(|entry| {
                Some(FmtpEntry {
                    payload: entry.get_i64(PAYLOAD)?,
                    config: entry.get_str(CONFIG).unwrap_or(""),
                })
            })
            .collect()
    }

    pub fn rtcp_feedback(&self) -> Vec<RtcpFeedbackEntry<'_>> {
        self.entries(RTCP_FEEDBACK)
            .iter()
            .filter_map(|entry| {
                Some(RtcpFeedbackEntry {
                    payload: entry.get(PAYLOAD)?,
                    feedback_type: entry.get_str(FEEDBACK_TYPE)?,
                    subtype: entry.get_str(FEEDBACK_SUBTYPE),
                })
            })
            .collect()
    }

    pub fn extmaps(&self) -> Vec<ExtMapEntry<'_>> {
        self.entries(EXT)
            .iter()
            .filter_map(|entry| {
                Some(ExtMapEntry {
                    id: entry.get_i64(EXT_ID)?,
                    uri: entry.get_str(EXT_URI)?,
                    direction: entry.get_str(EXT_DIRECTION),
                    encrypted: entry.get_str(EXT_ENCRYPT_URI) == Some(ENCRYPT_URI),
                })
            })
            .collect()
    }
}

/// `a=rtpmap:<payload> <codec>[/<rate>[/<encoding>]]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtpMapEntry<'a> {
    pub payload: i64,
    pub codec: &'a str,
    pub rate: Option<i64>,
    pub encoding: Option<&'a SdpValue>,
}

impl RtpMapEntry<'_> {
    /// Channel count carried in the encoding field, when numeric.
    pub fn channels(&self) -> Option<u8> {
        match self.encoding? {
            SdpValue::Text(text) => text.parse().ok(),
            other => other.as_u64().and_then(|value| u8::try_from(value).ok()),
        }
    }
}

/// `a=fmtp:<payload> <config>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtpEntry<'a> {
    pub payload: i64,
    pub config: &'a str,
}

/// `a=rtcp-fb:<payload|*> <type>[ <subtype>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtcpFeedbackEntry<'a> {
    pub payload: &'a SdpValue,
    pub feedback_type: &'a str,
    pub subtype: Option<&'a str>,
}

impl RtcpFeedbackEntry<'_> {
    /// Numeric payload type; `None` for the `*` wildcard.
    pub fn payload_type(&self) -> Option<i64> {
        match self.payload {
            SdpValue::Text(text) if text == WILDCARD_PAYLOAD => None,
            SdpValue::Text(text) => text.parse().ok(),
            other => other.as_i64(),
        }
    }
}

/// `a=extmap:<id>[/<direction>][ <encrypt uri>] <uri>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtMapEntry<'a> {
    pub id: i64,
    pub uri: &'a str,
    pub direction: Option<&'a str>,
    pub encrypted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_section() -> MediaSection {
        let mut section = MediaSection::new("video", 9, "UDP/TLS/RTP/SAVPF", "96 97");
        let mut rtp = SdpRecord::new();
        rtp.insert(PAYLOAD, 96i64).insert(CODEC, "H264").insert(RATE, 90000i64);
        section.record_mut().push_to_list(RTP, rtp);

        let mut feedback = SdpRecord::new();
        feedback.insert(PAYLOAD, WILDCARD_PAYLOAD).insert(FEEDBACK_TYPE, "nack");
        section.record_mut().push_to_list(RTCP_FEEDBACK, feedback);

        let mut ext = SdpRecord::new();
        ext.insert(EXT_ID, 3i64)
            .insert(EXT_DIRECTION, "recvonly")
            .insert(EXT_URI, "urn:3gpp:video-orientation");
        section.record_mut().push_to_list(EXT, ext);
        section
    }

    #[test]
    fn test_new_local_has_session_defaults() {
        let model = SessionModel::new_local();
        assert_eq!(model.version(), 0);
        assert_eq!(model.name(), "-");
        let session_id = model.origin().and_then(|o| o.get_u64("sessionId")).unwrap();
        assert!(session_id >= 1);
        assert!(model.media().is_empty());
    }

    #[test]
    fn test_typed_views() {
        let section = video_section();
        assert_eq!(section.kind(), Some("video"));
        assert_eq!(section.port(), Some(9));

        let maps = section.rtp_maps();
        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0].codec, "H264");
        assert_eq!(maps[0].rate, Some(90000));
        assert_eq!(maps[0].channels(), None);

        let feedback = section.rtcp_feedback();
        assert_eq!(feedback[0].payload_type(), None);

        let ext = section.extmaps();
        assert_eq!(ext[0].id, 3);
        assert_eq!(ext[0].direction, Some("recvonly"));
        assert!(!ext[0].encrypted);

        let mut section = section;
        let mut encrypted = SdpRecord::new();
        encrypted
            .insert(EXT_ID, 4i64)
            .insert(EXT_ENCRYPT_URI, ENCRYPT_URI)
            .insert(EXT_URI, "urn:ietf:params:rtp-hdrext:ssrc-audio-level");
        section.record_mut().push_to_list(EXT, encrypted);
        assert!(section.extmaps()[1].encrypted);
    }

    #[test]
    fn test_empty_section_has_rtp_and_fmtp() {
        let section = MediaSection::empty();
        assert_eq!(section.record().get_list(RTP), Some(&[][..]));
        assert_eq!(section.record().get_list(FMTP), Some(&[][..]));
        assert!(section.fmtps().is_empty());
    }

    #[test]
    fn test_json_shape_has_media_array() {
        let mut model = SessionModel::new_local();
        model.push_media(video_section());
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["version"], 0);
        assert_eq!(json["media"][0]["type"], "video");
        assert_eq!(json["media"][0]["rtp"][0]["codec"], "H264");

        let back: SessionModel = serde_json::from_value(json).unwrap();
        assert_eq!(back.media()[0].rtp_maps()[0].payload, 96);
    }
}
