//! H.264 `profile-level-id` handling (RFC 6184 section 8.1).
//!
//! A `profile-level-id` is three hex-encoded bytes: `profile_idc`,
//! `profile_iop` (constraint flags) and `level_idc`.

use crate::codec::h264::h264_err::profile_level_err::H264ProfileError;
use crate::rtc::rtc_const::codec_const::{LEVEL_ASYMMETRY_ALLOWED, PROFILE_LEVEL_ID};
use crate::rtc::rtp_capabilities::{CodecParameters, ParameterValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum H264Profile {
    ConstrainedBaseline,
    Baseline,
    Main,
    ConstrainedHigh,
    High,
    PredictiveHigh444,
}

/// Levels ordered by their numeric value; 1b sorts lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum H264Level {
    L1b = 0,
    L1 = 10,
    L1_1 = 11,
    L1_2 = 12,
    L1_3 = 13,
    L2 = 20,
    L2_1 = 21,
    L2_2 = 22,
    L3 = 30,
    L3_1 = 31,
    L3_2 = 32,
    L4 = 40,
    L4_1 = 41,
    L4_2 = 42,
    L5 = 50,
    L5_1 = 51,
    L5_2 = 52,
}

impl H264Level {
    pub fn from_idc(level_idc: u8) -> Option<Self> {
        let level = match level_idc {
            0 => H264Level::L1b,
            10 => H264Level::L1,
            11 => H264Level::L1_1,
            12 => H264Level::L1_2,
            13 => H264Level::L1_3,
            20 => H264Level::L2,
            21 => H264Level::L2_1,
            22 => H264Level::L2_2,
            30 => H264Level::L3,
            31 => H264Level::L3_1,
            32 => H264Level::L3_2,
            40 => H264Level::L4,
            41 => H264Level::L4_1,
            42 => H264Level::L4_2,
            50 => H264Level::L5,
            51 => H264Level::L5_1,
            52 => H264Level::L5_2,
            _ => return None,
        };
        Some(level)
    }

    pub fn idc(self) -> u8 {
        self as u8
    }
}

const CONSTRAINT_SET3_FLAG: u8 = 0x10;

/// Byte pattern over `0`, `1` and `x` (don't care), most significant bit
/// first.
#[derive(Debug, Clone, Copy)]
struct BitPattern {
    mask: u8,
    masked_value: u8,
}

impl BitPattern {
    const fn new(pattern: &[u8; 8]) -> Self {
        BitPattern {
            mask: !byte_mask(pattern, b'x'),
            masked_value: byte_mask(pattern, b'1'),
        }
    }

    fn is_match(&self, value: u8) -> bool {
        self.masked_value == value & self.mask
    }
}

const fn byte_mask(pattern: &[u8; 8], c: u8) -> u8 {
    let mut result = 0u8;
    let mut i = 0;
    while i < 8 {
        if pattern[i] == c {
            result |= 1 << (7 - i);
        }
        i += 1;
    }
    result
}

struct ProfilePattern {
    profile_idc: u8,
    profile_iop: BitPattern,
    profile: H264Profile,
}

const fn pattern(profile_idc: u8, profile_iop: &[u8; 8], profile: H264Profile) -> ProfilePattern {
    ProfilePattern {
        profile_idc,
        profile_iop: BitPattern::new(profile_iop),
        profile,
    }
}

// Order matters: constrained variants must be tried before the general ones.
const PROFILE_PATTERNS: [ProfilePattern; 9] = [
    pattern(0x42, b"x1xx0000", H264Profile::ConstrainedBaseline),
    pattern(0x4D, b"1xxx0000", H264Profile::ConstrainedBaseline),
    pattern(0x58, b"11xx0000", H264Profile::ConstrainedBaseline),
    pattern(0x42, b"x0xx0000", H264Profile::Baseline),
    pattern(0x58, b"10xx0000", H264Profile::Baseline),
    pattern(0x4D, b"0x0x0000", H264Profile::Main),
    pattern(0x64, b"00000000", H264Profile::High),
    pattern(0x64, b"00001100", H264Profile::ConstrainedHigh),
    pattern(0xF4, b"00000000", H264Profile::PredictiveHigh444),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileLevelId {
    pub profile: H264Profile,
    pub level: H264Level,
}

/// Used wherever a codec does not carry a usable `profile-level-id`.
pub const DEFAULT_PROFILE_LEVEL_ID: ProfileLevelId = ProfileLevelId {
    profile: H264Profile::ConstrainedBaseline,
    level: H264Level::L3_1,
};

impl ProfileLevelId {
    pub fn new(profile: H264Profile, level: H264Level) -> Self {
        ProfileLevelId { profile, level }
    }

    /// Parses a 6 hex digit string. Returns `None` for malformed or all-zero
    /// input and for byte combinations no known profile matches.
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() != 6 {
            return None;
        }
        let bytes = hex::decode(value).ok()?;
        let [profile_idc, profile_iop, level_idc] = <[u8; 3]>::try_from(bytes).ok()?;
        if profile_idc == 0 && profile_iop == 0 && level_idc == 0 {
            return None;
        }

        let level = if level_idc == H264Level::L1_1.idc() && profile_iop & CONSTRAINT_SET3_FLAG != 0 {
            H264Level::L1b
        } else {
            H264Level::from_idc(level_idc)?
        };

        PROFILE_PATTERNS
            .iter()
            .find(|pattern| {
                pattern.profile_idc == profile_idc && pattern.profile_iop.is_match(profile_iop)
            })
            .map(|pattern| ProfileLevelId::new(pattern.profile, level))
    }

    /// Hex form of this id: a fixed `profile_idc`/`profile_iop` pair per
    /// profile followed by the level byte.
    pub fn encode(&self) -> String {
        let profile_idc_iop = match self.profile {
            H264Profile::ConstrainedBaseline => "42e0",
            H264Profile::Baseline => "4200",
            H264Profile::Main => "4d00",
            H264Profile::ConstrainedHigh => "640c",
            H264Profile::High => "6400",
            H264Profile::PredictiveHigh444 => "f400",
        };
        format!("{}{:02x}", profile_idc_iop, self.level.idc())
    }
}

fn profile_level_id_param(params: &CodecParameters) -> Option<String> {
    params.get(PROFILE_LEVEL_ID).map(ParameterValue::to_string)
}

/// `profile-level-id` of a codec, falling back to the default when the
/// parameter is missing or malformed.
pub fn parse_sdp_profile_level_id(params: &CodecParameters) -> ProfileLevelId {
    profile_level_id_param(params)
        .and_then(|value| ProfileLevelId::parse(&value))
        .unwrap_or(DEFAULT_PROFILE_LEVEL_ID)
}

pub fn is_same_profile(local: &CodecParameters, remote: &CodecParameters) -> bool {
    parse_sdp_profile_level_id(local).profile == parse_sdp_profile_level_id(remote).profile
}

fn level_asymmetry_allowed(params: &CodecParameters) -> bool {
    params
        .get(LEVEL_ASYMMETRY_ALLOWED)
        .map_or(false, ParameterValue::is_truthy)
}

/// `profile-level-id` to put in an answer to `remote`.
///
/// Unlike [`parse_sdp_profile_level_id`], a value that is present but
/// malformed is an error here. A missing one on a single side still falls
/// back to the default.
pub fn generate_profile_level_id_for_answer(
    local: &CodecParameters,
    remote: &CodecParameters,
) -> Result<String, H264ProfileError> {
    let local_value = profile_level_id_param(local);
    let remote_value = profile_level_id_param(remote);
    if local_value.is_none() && remote_value.is_none() {
        return Err(H264ProfileError::NoProfileLevelId);
    }

    let local_id = resolve(local_value)?;
    let remote_id = resolve(remote_value)?;
    if local_id.profile != remote_id.profile {
        return Err(H264ProfileError::ProfileMismatch {
            local: local_id.profile,
            remote: remote_id.profile,
        });
    }

    let level = if level_asymmetry_allowed(local) && level_asymmetry_allowed(remote) {
        local_id.level
    } else {
        local_id.level.min(remote_id.level)
    };

    Ok(ProfileLevelId::new(local_id.profile, level).encode())
}

fn resolve(value: Option<String>) -> Result<ProfileLevelId, H264ProfileError> {
    match value {
        None => Ok(DEFAULT_PROFILE_LEVEL_ID),
        Some(value) => ProfileLevelId::parse(&value)
            .ok_or(H264ProfileError::InvalidProfileLevelId { value }),
    }
}
