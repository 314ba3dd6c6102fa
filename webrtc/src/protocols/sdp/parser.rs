use crate::protocols::sdp::grammar::{grammar, GrammarRule, Placement};
use crate::protocols::sdp::sdp_consts::general_consts::MEDIA_DESCRIPTION_KEY;
use crate::protocols::sdp::sdp_value::SdpRecord;
use crate::protocols::sdp::session_model::{MediaSection, SessionModel};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

static VALID_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z])=(.*)").unwrap_or_else(|err| panic!("invalid line pattern: {}", err))
});

/// Parses session-description text into a [`SessionModel`].
///
/// Never fails: lines that are not `<letter>=<value>` and lines no rule
/// recognises are skipped.
pub fn parse(text: &str) -> SessionModel {
    let table = grammar();
    let mut model = SessionModel::new();

    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let Some(line_captures) = VALID_LINE.captures(line) else {
            if !line.is_empty() {
                trace!("Skipping malformed line {:?}", line);
            }
            continue;
        };
        let tag = line_captures[1].chars().next().unwrap_or_default();
        let content = line_captures.get(2).map_or("", |m| m.as_str());

        if tag == MEDIA_DESCRIPTION_KEY {
            model.push_media(MediaSection::empty());
        }

        let matched = table
            .rules_for(tag)
            .iter()
            .find_map(|rule| rule.captures(content).map(|captures| (rule, captures)));

        match matched {
            Some((rule, captures)) => apply_rule(rule, &captures, model.current_scope_mut()),
            None => trace!("No rule for line {:?}", line),
        }
    }

    model
}

fn apply_rule(rule: &GrammarRule, captures: &Captures, scope: &mut SdpRecord) {
    match rule.placement() {
        Placement::Singleton(name) if rule.is_scalar() => {
            let raw = captures.get(1).map_or("", |m| m.as_str());
            if let Some(field_type) = rule.types().first() {
                scope.insert(name, field_type.coerce(raw));
            }
        }
        Placement::Singleton(name) => scope.merge_into_record(name, captured_fields(rule, captures)),
        Placement::Collection(key) => scope.push_to_list(key, captured_fields(rule, captures)),
        Placement::Inline => scope.extend(captured_fields(rule, captures)),
    }
}

/// Named captures that participated and are not empty, coerced to their
/// declared types.
fn captured_fields(rule: &GrammarRule, captures: &Captures) -> SdpRecord {
    rule.fields()
        .iter()
        .zip(rule.types())
        .enumerate()
        .filter_map(|(index, (field, field_type))| {
            let raw = captures.get(index + 1)?.as_str();
            if raw.is_empty() {
                return None;
            }
            Some((*field, field_type.coerce(raw)))
        })
        .collect()
}
