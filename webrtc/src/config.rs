use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Knobs of the capability negotiator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NegotiationConfig {
    /// Apply the H.264 and VP9 family checks when matching codecs.
    pub strict_codec_matching: bool,
    /// Write the negotiated H.264 `profile-level-id` into both parameter sets.
    pub rewrite_h264_profile_level_id: bool,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            strict_codec_matching: true,
            rewrite_h264_profile_level_id: true,
        }
    }
}

impl NegotiationConfig {
    /// Reads a `key = value` file. A missing file yields the defaults;
    /// unknown keys are ignored and unparseable values keep the default.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let mut cfg = NegotiationConfig::default();
        if !path.exists() {
            return Ok(cfg);
        }

        let content = fs::read_to_string(path)?;
        let entries = parse_kv(&content);

        if let Some(strict) = parse_bool(&entries, "strict_codec_matching") {
            cfg.strict_codec_matching = strict;
        }
        if let Some(rewrite) = parse_bool(&entries, "rewrite_h264_profile_level_id") {
            cfg.rewrite_h264_profile_level_id = rewrite;
        }

        Ok(cfg)
    }
}

fn parse_bool(entries: &HashMap<String, String>, key: &str) -> Option<bool> {
    let value = entries.get(key)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {} = {:?}: expected true or false", key, value);
            None
        }
    }
}

fn parse_kv(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            map.insert(k.trim().to_string(), v.trim().to_string());
        }
    }
    map
}
