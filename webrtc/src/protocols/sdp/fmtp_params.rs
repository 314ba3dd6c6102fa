//! Conversion between `a=fmtp` config text and codec parameters.

use crate::rtc::rtp_capabilities::{CodecParameters, ParameterValue};

/// Parses `key=value;key=value` text. Values whose integer rendering is
/// exactly the text become integers; pairs without `=` are skipped.
pub fn parse_params(config: &str) -> CodecParameters {
    config
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), parse_value(value.trim())))
        })
        .collect()
}

fn parse_value(value: &str) -> ParameterValue {
    match value.parse::<i64>() {
        Ok(number) if number.to_string() == value => ParameterValue::Int(number),
        _ => ParameterValue::Text(value.to_string()),
    }
}

/// Renders parameters as fmtp config text, keys in sorted order.
pub fn write_params(params: &CodecParameters) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(";")
}
