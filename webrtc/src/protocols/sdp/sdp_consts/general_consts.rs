//! Line tags, line endings and model keys shared by the parser, the writer
//! and the typed session views.

pub const LINE_END: &str = "\r\n";
pub const EQUAL_SYMBOL: char = '=';

pub const VERSION_KEY: char = 'v';
pub const ORIGIN_KEY: char = 'o';
pub const SESSION_NAME_KEY: char = 's';
pub const INFORMATION_KEY: char = 'i';
pub const URI_KEY: char = 'u';
pub const EMAIL_KEY: char = 'e';
pub const PHONE_KEY: char = 'p';
pub const CONNECTION_KEY: char = 'c';
pub const BANDWIDTH_KEY: char = 'b';
pub const TIMING_KEY: char = 't';
pub const REPEAT_KEY: char = 'r';
pub const TIMEZONE_KEY: char = 'z';
pub const MEDIA_DESCRIPTION_KEY: char = 'm';
pub const ATTRIBUTE_KEY: char = 'a';

/// Session-level tags in the order the writer emits them.
pub const SESSION_WRITE_ORDER: [char; 13] = [
    VERSION_KEY,
    ORIGIN_KEY,
    SESSION_NAME_KEY,
    INFORMATION_KEY,
    URI_KEY,
    EMAIL_KEY,
    PHONE_KEY,
    CONNECTION_KEY,
    BANDWIDTH_KEY,
    TIMING_KEY,
    REPEAT_KEY,
    TIMEZONE_KEY,
    ATTRIBUTE_KEY,
];

/// Tags allowed inside a media section, after its `m=` line.
pub const MEDIA_WRITE_ORDER: [char; 4] = [INFORMATION_KEY, CONNECTION_KEY, BANDWIDTH_KEY, ATTRIBUTE_KEY];

// Session root
pub const VERSION: &str = "version";
pub const SESSION_NAME: &str = "name";
pub const DEFAULT_SESSION_NAME: &str = "-";
pub const ORIGIN: &str = "origin";
pub const TIMING: &str = "timing";

// Media section
pub const MEDIA_TYPE: &str = "type";
pub const PORT: &str = "port";
pub const PROTOCOL: &str = "protocol";
pub const PAYLOADS: &str = "payloads";
pub const MID: &str = "mid";
pub const DIRECTION: &str = "direction";

// Collections
pub const RTP: &str = "rtp";
pub const FMTP: &str = "fmtp";
pub const RTCP_FEEDBACK: &str = "rtcpFeedback";
pub const EXT: &str = "ext";
pub const SSRCS: &str = "ssrcs";
pub const SSRC_GROUPS: &str = "ssrcGroups";
pub const CANDIDATES: &str = "candidates";

// Collection entry fields
pub const PAYLOAD: &str = "payload";
pub const CODEC: &str = "codec";
pub const RATE: &str = "rate";
pub const ENCODING: &str = "encoding";
pub const CONFIG: &str = "config";
pub const FEEDBACK_TYPE: &str = "type";
pub const FEEDBACK_SUBTYPE: &str = "subtype";
pub const EXT_ID: &str = "value";
pub const EXT_URI: &str = "uri";
pub const EXT_ENCRYPT_URI: &str = "encrypt-uri";
pub const EXT_DIRECTION: &str = "direction";

pub const WILDCARD_PAYLOAD: &str = "*";
pub const ENCRYPT_URI: &str = "urn:ietf:params:rtp-hdrext:encrypt";
