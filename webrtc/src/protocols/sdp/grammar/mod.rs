//! Table-driven session-description grammar.
//!
//! Every line tag (`v`, `o`, `m`, `a`, ...) maps to an ordered list of
//! [`GrammarRule`]s. A rule knows how to recognise its line (a regular
//! expression), what the capture groups are called and typed, where the
//! captured values live in the model ([`Placement`]) and how to print the
//! line again ([`Render`]). The parser and the writer are generic over this
//! table.

pub mod grammar_table;

use crate::protocols::sdp::sdp_error::grammar_error::GrammarError;
use crate::protocols::sdp::sdp_value::{SdpRecord, SdpValue};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Primitive type of a captured field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    UInt,
    Text,
}

impl FieldType {
    /// Permissive coercion: numbers that fail to parse become 0.
    pub fn coerce(self, raw: &str) -> SdpValue {
        match self {
            FieldType::Int => SdpValue::Int(raw.trim().parse().unwrap_or(0)),
            FieldType::UInt => SdpValue::UInt(raw.trim().parse().unwrap_or(0)),
            FieldType::Text => SdpValue::Text(raw.to_string()),
        }
    }
}

/// Where the values captured by a rule are stored in the current scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A scalar rule stores its single capture under the name; a rule with
    /// fields stores them in a nested record under the name.
    Singleton(&'static str),
    /// Each match appends a new record to the named list.
    Collection(&'static str),
    /// Fields are written straight onto the scope (the `m=` line).
    Inline,
}

/// How a rule prints its line. Templates use `%s`, `%d` and `%u` for
/// values, `%v` to consume a value without printing it and `%%` for a
/// literal percent sign.
#[derive(Clone, Copy)]
pub enum Render {
    Static(&'static str),
    /// Template chosen from the fields that are present.
    Dynamic(fn(&SdpRecord) -> &'static str),
}

impl fmt::Debug for Render {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Render::Static(template) => write!(f, "Static({:?})", template),
            Render::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

/// Declarative, uncompiled description of a rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub pattern: &'static str,
    pub placement: Placement,
    pub fields: &'static [&'static str],
    pub types: &'static [FieldType],
    pub render: Render,
}

#[derive(Debug)]
pub struct GrammarRule {
    tag: char,
    pattern: Regex,
    placement: Placement,
    fields: &'static [&'static str],
    types: &'static [FieldType],
    render: Render,
}

impl GrammarRule {
    fn compile(tag: char, def: &RuleDef) -> Result<Self, GrammarError> {
        let pattern = Regex::new(def.pattern).map_err(|source| GrammarError::InvalidPattern {
            tag,
            pattern: def.pattern,
            source,
        })?;

        let captures = pattern.captures_len() - 1;
        let expected_captures = def.fields.len().max(1);
        if captures != expected_captures {
            return Err(GrammarError::CaptureCountMismatch {
                tag,
                pattern: def.pattern,
                captures,
                fields: def.fields.len(),
            });
        }
        if def.types.len() != expected_captures {
            return Err(GrammarError::FieldTypeCountMismatch {
                tag,
                pattern: def.pattern,
                types: def.types.len(),
                fields: def.fields.len(),
            });
        }
        if def.fields.is_empty() && !matches!(def.placement, Placement::Singleton(_)) {
            return Err(GrammarError::UnnamedScalar {
                tag,
                pattern: def.pattern,
            });
        }
        let mut seen = HashSet::new();
        for field in def.fields {
            if !seen.insert(*field) {
                return Err(GrammarError::DuplicateField {
                    tag,
                    pattern: def.pattern,
                    field,
                });
            }
        }

        Ok(GrammarRule {
            tag,
            pattern,
            placement: def.placement,
            fields: def.fields,
            types: def.types,
            render: def.render,
        })
    }

    pub fn tag(&self) -> char {
        self.tag
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn types(&self) -> &'static [FieldType] {
        self.types
    }

    pub fn is_scalar(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn captures<'t>(&self, content: &'t str) -> Option<Captures<'t>> {
        self.pattern.captures(content)
    }

    /// Template for a line rendered from `values`.
    pub fn template(&self, values: &SdpRecord) -> &'static str {
        match self.render {
            Render::Static(template) => template,
            Render::Dynamic(choose) => choose(values),
        }
    }
}

/// Ordered rules per line tag; the first matching rule wins.
#[derive(Debug)]
pub struct GrammarTable {
    rules: HashMap<char, Vec<GrammarRule>>,
}

impl GrammarTable {
    pub fn new(defs: &[(char, &[RuleDef])]) -> Result<Self, GrammarError> {
        let mut rules: HashMap<char, Vec<GrammarRule>> = HashMap::new();
        for (tag, tag_defs) in defs {
            let compiled = tag_defs
                .iter()
                .map(|def| GrammarRule::compile(*tag, def))
                .collect::<Result<Vec<_>, _>>()?;
            rules.entry(*tag).or_default().extend(compiled);
        }
        Ok(GrammarTable { rules })
    }

    pub fn rules_for(&self, tag: char) -> &[GrammarRule] {
        self.rules.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }
}

static WEBRTC_GRAMMAR: Lazy<GrammarTable> = Lazy::new(|| {
    match GrammarTable::new(grammar_table::WEBRTC_RULES) {
        Ok(table) => table,
        Err(err) => panic!("built-in session description grammar is malformed: {}", err),
    }
});

/// The process-wide grammar used by [`crate::protocols::sdp::parser`] and
/// [`crate::protocols::sdp::writer`].
pub fn grammar() -> &'static GrammarTable {
    &WEBRTC_GRAMMAR
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &[RuleDef] = &[RuleDef {
        pattern: r"^mid:(\S*)",
        placement: Placement::Singleton("mid"),
        fields: &[],
        types: &[FieldType::Text],
        render: Render::Static("mid:%s"),
    }];

    #[test]
    fn test_builtin_grammar_is_valid() {
        assert!(GrammarTable::new(grammar_table::WEBRTC_RULES).is_ok());
        assert!(!grammar().rules_for('a').is_empty());
        assert!(grammar().rules_for('x').is_empty());
    }

    #[test]
    fn test_capture_count_mismatch() {
        const BAD: &[RuleDef] = &[RuleDef {
            pattern: r"^rtpmap:(\d*) (\S*)",
            placement: Placement::Collection("rtp"),
            fields: &["payload"],
            types: &[FieldType::Int],
            render: Render::Static("rtpmap:%d"),
        }];
        let err = GrammarTable::new(&[('a', BAD)]).unwrap_err();
        assert!(matches!(
            err,
            GrammarError::CaptureCountMismatch {
                captures: 2,
                fields: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        const BAD: &[RuleDef] = &[RuleDef {
            pattern: r"^(\d*) (\d*)",
            placement: Placement::Singleton("timing"),
            fields: &["start", "start"],
            types: &[FieldType::Int, FieldType::Int],
            render: Render::Static("%d %d"),
        }];
        let err = GrammarTable::new(&[('t', BAD)]).unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateField { field: "start", .. }));
    }

    #[test]
    fn test_type_count_mismatch() {
        const BAD: &[RuleDef] = &[RuleDef {
            pattern: r"^(\d*) (\d*)",
            placement: Placement::Singleton("timing"),
            fields: &["start", "stop"],
            types: &[FieldType::Int],
            render: Render::Static("%d %d"),
        }];
        let err = GrammarTable::new(&[('t', BAD)]).unwrap_err();
        assert!(matches!(err, GrammarError::FieldTypeCountMismatch { types: 1, .. }));
    }

    #[test]
    fn test_scalar_collection_rejected() {
        const BAD: &[RuleDef] = &[RuleDef {
            pattern: r"^(.*)",
            placement: Placement::Collection("lines"),
            fields: &[],
            types: &[FieldType::Text],
            render: Render::Static("%s"),
        }];
        let err = GrammarTable::new(&[('a', BAD)]).unwrap_err();
        assert!(matches!(err, GrammarError::UnnamedScalar { tag: 'a', .. }));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        const BAD: &[RuleDef] = &[RuleDef {
            pattern: r"^mid:((\S*)",
            placement: Placement::Singleton("mid"),
            fields: &[],
            types: &[FieldType::Text],
            render: Render::Static("mid:%s"),
        }];
        let err = GrammarTable::new(&[('a', BAD)]).unwrap_err();
        assert!(err.to_string().starts_with("GrammarError"));
    }

    #[test]
    fn test_coerce_is_permissive() {
        assert_eq!(FieldType::Int.coerce("abc"), SdpValue::Int(0));
        assert_eq!(FieldType::UInt.coerce("42"), SdpValue::UInt(42));
        assert_eq!(FieldType::Text.coerce("42"), SdpValue::Text("42".to_string()));
    }

    #[test]
    fn test_rules_for_tag_keep_order() {
        let table = GrammarTable::new(&[('a', GOOD), ('a', GOOD)]).unwrap();
        assert_eq!(table.rules_for('a').len(), 2);
        assert_eq!(table.rules_for('a')[0].tag(), 'a');
    }
}
