//! Rule definitions for the WebRTC dialect of SDP.
//!
//! Attribute rules are tried in order and the first match wins, so more
//! specific patterns (`rtcp-fb:* trr-int`) must come before generic ones
//! (`rtcp-fb:*`). Attribute lines that match no rule are dropped.

use super::FieldType::{Int, Text, UInt};
use super::Placement::{Collection, Inline, Singleton};
use super::Render::{Dynamic, Static};
use super::RuleDef;
use crate::protocols::sdp::sdp_consts::general_consts::*;
use crate::protocols::sdp::sdp_value::SdpRecord;

const VERSION_RULES: &[RuleDef] = &[RuleDef {
    pattern: r"^(\d*)$",
    placement: Singleton(VERSION),
    fields: &[],
    types: &[Int],
    render: Static("%d"),
}];

const ORIGIN_RULES: &[RuleDef] = &[RuleDef {
    pattern: r"^(\S*) (\d*) (\d*) (\S*) IP(\d) (\S*)",
    placement: Singleton(ORIGIN),
    fields: &[
        "username",
        "sessionId",
        "sessionVersion",
        "netType",
        "ipVer",
        "address",
    ],
    types: &[Text, UInt, UInt, Text, Int, Text],
    render: Static("%s %u %u %s IP%d %s"),
}];

const fn free_text(name: &'static str) -> RuleDef {
    RuleDef {
        pattern: r"(.*)",
        placement: Singleton(name),
        fields: &[],
        types: &[Text],
        render: Static("%s"),
    }
}

const SESSION_NAME_RULES: &[RuleDef] = &[free_text(SESSION_NAME)];
const INFORMATION_RULES: &[RuleDef] = &[free_text("description")];
const URI_RULES: &[RuleDef] = &[free_text("uri")];
const EMAIL_RULES: &[RuleDef] = &[free_text("email")];
const PHONE_RULES: &[RuleDef] = &[free_text("phone")];
const TIMEZONE_RULES: &[RuleDef] = &[free_text("timezones")];
const REPEAT_RULES: &[RuleDef] = &[free_text("repeats")];

const TIMING_RULES: &[RuleDef] = &[RuleDef {
    pattern: r"^(\d*) (\d*)",
    placement: Singleton(TIMING),
    fields: &["start", "stop"],
    types: &[Int, Int],
    render: Static("%d %d"),
}];

const CONNECTION_RULES: &[RuleDef] = &[RuleDef {
    pattern: r"^IN IP(\d) ([^\s/]*)(?:/(\d*))?",
    placement: Singleton("connection"),
    fields: &["version", "ip", "ttl"],
    types: &[Int, Text, Int],
    render: Dynamic(connection_template),
}];

const BANDWIDTH_RULES: &[RuleDef] = &[RuleDef {
    pattern: r"^(TIAS|AS|CT|RR|RS):(\d*)",
    placement: Collection("bandwidth"),
    fields: &["type", "limit"],
    types: &[Text, Int],
    render: Static("%s:%d"),
}];

const MEDIA_RULES: &[RuleDef] = &[RuleDef {
    pattern: r"^(\w*) (\d*) ([\w/]*)(?: (.*))?",
    placement: Inline,
    fields: &[MEDIA_TYPE, PORT, PROTOCOL, PAYLOADS],
    types: &[Text, UInt, Text, Text],
    render: Static("%s %u %s %s"),
}];

const fn flag(name: &'static str, pattern: &'static str) -> RuleDef {
    RuleDef {
        pattern,
        placement: Singleton(name),
        fields: &[],
        types: &[Text],
        render: Static("%s"),
    }
}

const fn text_attribute(name: &'static str, pattern: &'static str, render: &'static str) -> RuleDef {
    RuleDef {
        pattern,
        placement: Singleton(name),
        fields: &[],
        types: &[Text],
        render: Static(render),
    }
}

const fn int_attribute(name: &'static str, pattern: &'static str, render: &'static str) -> RuleDef {
    RuleDef {
        pattern,
        placement: Singleton(name),
        fields: &[],
        types: &[Int],
        render: Static(render),
    }
}

const ATTRIBUTE_RULES: &[RuleDef] = &[
    RuleDef {
        pattern: r"^group:(\w*) (.*)",
        placement: Collection("groups"),
        fields: &["type", "mids"],
        types: &[Text, Text],
        render: Static("group:%s %s"),
    },
    flag("extmapAllowMixed", r"^(extmap-allow-mixed)"),
    RuleDef {
        pattern: r"^msid-semantic:\s?(\w*)(?: (\S*))?",
        placement: Singleton("msidSemantic"),
        fields: &["semantic", "token"],
        types: &[Text, Text],
        render: Dynamic(msid_semantic_template),
    },
    flag("icelite", r"^(ice-lite)"),
    RuleDef {
        pattern: r"^rtcp:(\d*)(?: (\S*) IP(\d) (\S*))?",
        placement: Singleton("rtcp"),
        fields: &["port", "netType", "ipVer", "address"],
        types: &[Int, Text, Int, Text],
        render: Dynamic(rtcp_template),
    },
    text_attribute("iceUfrag", r"^ice-ufrag:(\S*)", "ice-ufrag:%s"),
    text_attribute("icePwd", r"^ice-pwd:(\S*)", "ice-pwd:%s"),
    text_attribute("iceOptions", r"^ice-options:(.*)", "ice-options:%s"),
    RuleDef {
        pattern: r"^fingerprint:(\S*) (\S*)",
        placement: Singleton("fingerprint"),
        fields: &["type", "hash"],
        types: &[Text, Text],
        render: Static("fingerprint:%s %s"),
    },
    text_attribute("setup", r"^setup:(\w*)", "setup:%s"),
    text_attribute(MID, r"^mid:(\S*)", "mid:%s"),
    text_attribute("control", r"^control:(.*)", "control:%s"),
    RuleDef {
        pattern: r"^extmap:(\d+)(?:/(\w+))?(?: (urn:ietf:params:rtp-hdrext:encrypt))? (\S*)(?: (\S*))?",
        placement: Collection(EXT),
        fields: &[EXT_ID, EXT_DIRECTION, EXT_ENCRYPT_URI, EXT_URI, CONFIG],
        types: &[Int, Text, Text, Text, Text],
        render: Dynamic(extmap_template),
    },
    flag(DIRECTION, r"^(sendrecv|recvonly|sendonly|inactive)"),
    text_attribute("msid", r"^msid:(.*)", "msid:%s"),
    flag("rtcpMux", r"^(rtcp-mux)"),
    flag("rtcpRsize", r"^(rtcp-rsize)"),
    RuleDef {
        pattern: r"^rtpmap:(\d*) ([^/]*)(?:/(\d*)(?:/(\S*))?)?",
        placement: Collection(RTP),
        fields: &[PAYLOAD, CODEC, RATE, ENCODING],
        types: &[Int, Text, Int, Text],
        render: Dynamic(rtpmap_template),
    },
    RuleDef {
        pattern: r"^rtcp-fb:(\*|\d*) trr-int (\d*)",
        placement: Collection("rtcpFbTrrInt"),
        fields: &[PAYLOAD, "value"],
        types: &[Text, Int],
        render: Static("rtcp-fb:%s trr-int %d"),
    },
    RuleDef {
        pattern: r"^rtcp-fb:(\*|\d*) ([\w\-_]*)(?: ([\w\-_]*))?",
        placement: Collection(RTCP_FEEDBACK),
        fields: &[PAYLOAD, FEEDBACK_TYPE, FEEDBACK_SUBTYPE],
        types: &[Text, Text, Text],
        render: Dynamic(rtcp_fb_template),
    },
    RuleDef {
        pattern: r"^fmtp:(\d*) ([\S| ]*)",
        placement: Collection(FMTP),
        fields: &[PAYLOAD, CONFIG],
        types: &[Int, Text],
        render: Static("fmtp:%d %s"),
    },
    int_attribute("ptime", r"^ptime:(\d*)", "ptime:%d"),
    int_attribute("maxptime", r"^maxptime:(\d*)", "maxptime:%d"),
    RuleDef {
        pattern: r"^crypto:(\d*) ([\w_]*) (\S*)(?: (\S*))?",
        placement: Collection("crypto"),
        fields: &["id", "suite", "config", "sessionConfig"],
        types: &[Int, Text, Text, Text],
        render: Dynamic(crypto_template),
    },
    RuleDef {
        pattern: r"^candidate:(\S*) (\d*) (\S*) (\d*) (\S*) (\d*) typ (\S*)(?: raddr (\S*) rport (\d*))?(?: tcptype (\S*))?(?: generation (\d*))?",
        placement: Collection(CANDIDATES),
        fields: &[
            "foundation",
            "component",
            "transport",
            "priority",
            "ip",
            "port",
            "type",
            "raddr",
            "rport",
            "tcptype",
            "generation",
        ],
        types: &[Text, UInt, Text, UInt, Text, UInt, Text, Text, UInt, Text, UInt],
        render: Dynamic(candidate_template),
    },
    flag("endOfCandidates", r"^(end-of-candidates)"),
    RuleDef {
        pattern: r"^ssrc-group:(\S*) (.*)",
        placement: Collection(SSRC_GROUPS),
        fields: &["semantics", "ssrcs"],
        types: &[Text, Text],
        render: Static("ssrc-group:%s %s"),
    },
    RuleDef {
        pattern: r"^ssrc:(\d*) ([^:]*)(?::(.*))?",
        placement: Collection(SSRCS),
        fields: &["id", "attribute", "value"],
        types: &[UInt, Text, Text],
        render: Dynamic(ssrc_template),
    },
    RuleDef {
        pattern: r"^rid:(\w+) (\w+)(?: (.*))?",
        placement: Collection("rids"),
        fields: &["id", "direction", "params"],
        types: &[Text, Text, Text],
        render: Dynamic(rid_template),
    },
    RuleDef {
        pattern: r"^simulcast:(send|recv) (\S+)(?: (send|recv) (\S+))?",
        placement: Singleton("simulcast"),
        fields: &["dir1", "list1", "dir2", "list2"],
        types: &[Text, Text, Text, Text],
        render: Dynamic(simulcast_template),
    },
    int_attribute("sctpPort", r"^sctp-port:(\d+)", "sctp-port:%d"),
    int_attribute("maxMessageSize", r"^max-message-size:(\d+)", "max-message-size:%d"),
];

/// Every line tag with its ordered rules.
pub const WEBRTC_RULES: &[(char, &[RuleDef])] = &[
    (VERSION_KEY, VERSION_RULES),
    (ORIGIN_KEY, ORIGIN_RULES),
    (SESSION_NAME_KEY, SESSION_NAME_RULES),
    (INFORMATION_KEY, INFORMATION_RULES),
    (URI_KEY, URI_RULES),
    (EMAIL_KEY, EMAIL_RULES),
    (PHONE_KEY, PHONE_RULES),
    (TIMEZONE_KEY, TIMEZONE_RULES),
    (REPEAT_KEY, REPEAT_RULES),
    (TIMING_KEY, TIMING_RULES),
    (CONNECTION_KEY, CONNECTION_RULES),
    (BANDWIDTH_KEY, BANDWIDTH_RULES),
    (MEDIA_DESCRIPTION_KEY, MEDIA_RULES),
    (ATTRIBUTE_KEY, ATTRIBUTE_RULES),
];

fn connection_template(values: &SdpRecord) -> &'static str {
    if values.contains_key("ttl") {
        "IN IP%d %s/%d"
    } else {
        "IN IP%d %s"
    }
}

fn msid_semantic_template(values: &SdpRecord) -> &'static str {
    if values.contains_key("token") {
        "msid-semantic: %s %s"
    } else {
        "msid-semantic: %s"
    }
}

fn rtcp_template(values: &SdpRecord) -> &'static str {
    if values.contains_key("address") {
        "rtcp:%d %s IP%d %s"
    } else {
        "rtcp:%d"
    }
}

fn extmap_template(values: &SdpRecord) -> &'static str {
    match (
        values.contains_key(EXT_DIRECTION),
        values.contains_key(EXT_ENCRYPT_URI),
        values.contains_key(CONFIG),
    ) {
        (false, false, false) => "extmap:%d%v%v %s",
        (false, false, true) => "extmap:%d%v%v %s %s",
        (false, true, false) => "extmap:%d%v %s %s",
        (false, true, true) => "extmap:%d%v %s %s %s",
        (true, false, false) => "extmap:%d/%s%v %s",
        (true, false, true) => "extmap:%d/%s%v %s %s",
        (true, true, false) => "extmap:%d/%s %s %s",
        (true, true, true) => "extmap:%d/%s %s %s %s",
    }
}

fn rtpmap_template(values: &SdpRecord) -> &'static str {
    if values.contains_key(ENCODING) {
        "rtpmap:%d %s/%d/%s"
    } else if values.contains_key(RATE) {
        "rtpmap:%d %s/%d"
    } else {
        "rtpmap:%d %s"
    }
}

fn rtcp_fb_template(values: &SdpRecord) -> &'static str {
    if values.contains_key(FEEDBACK_SUBTYPE) {
        "rtcp-fb:%s %s %s"
    } else {
        "rtcp-fb:%s %s"
    }
}

fn crypto_template(values: &SdpRecord) -> &'static str {
    if values.contains_key("sessionConfig") {
        "crypto:%d %s %s %s"
    } else {
        "crypto:%d %s %s"
    }
}

fn candidate_template(values: &SdpRecord) -> &'static str {
    match (
        values.contains_key("raddr"),
        values.contains_key("tcptype"),
        values.contains_key("generation"),
    ) {
        (false, false, false) => "candidate:%s %u %s %u %s %u typ %s",
        (false, false, true) => "candidate:%s %u %s %u %s %u typ %s%v%v%v generation %u",
        (false, true, false) => "candidate:%s %u %s %u %s %u typ %s%v%v tcptype %s",
        (false, true, true) => "candidate:%s %u %s %u %s %u typ %s%v%v tcptype %s generation %u",
        (true, false, false) => "candidate:%s %u %s %u %s %u typ %s raddr %s rport %u",
        (true, false, true) => "candidate:%s %u %s %u %s %u typ %s raddr %s rport %u%v generation %u",
        (true, true, false) => "candidate:%s %u %s %u %s %u typ %s raddr %s rport %u tcptype %s",
        (true, true, true) => {
            "candidate:%s %u %s %u %s %u typ %s raddr %s rport %u tcptype %s generation %u"
        }
    }
}

fn ssrc_template(values: &SdpRecord) -> &'static str {
    if values.contains_key("value") {
        "ssrc:%u %s:%s"
    } else {
        "ssrc:%u %s"
    }
}

fn rid_template(values: &SdpRecord) -> &'static str {
    if values.contains_key("params") {
        "rid:%s %s %s"
    } else {
        "rid:%s %s"
    }
}

fn simulcast_template(values: &SdpRecord) -> &'static str {
    if values.contains_key("dir2") {
        "simulcast:%s %s %s %s"
    } else {
        "simulcast:%s %s"
    }
}
