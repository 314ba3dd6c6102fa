use crate::protocols::sdp::grammar::{grammar, GrammarRule, GrammarTable, Placement};
use crate::protocols::sdp::sdp_consts::general_consts::{
    DEFAULT_SESSION_NAME, EQUAL_SYMBOL, LINE_END, MEDIA_DESCRIPTION_KEY, MEDIA_WRITE_ORDER,
    PAYLOADS, SESSION_NAME, SESSION_WRITE_ORDER, VERSION,
};
use crate::protocols::sdp::sdp_value::SdpRecord;
use crate::protocols::sdp::session_model::SessionModel;

/// Serializes a [`SessionModel`] to session-description text.
///
/// Session lines are emitted in `v o s i u e p c b t r z a` order, then each
/// media section as its `m=` line followed by `i c b a`. Every line ends
/// with CRLF.
pub fn write(model: &SessionModel) -> String {
    let table = grammar();
    let mut out = String::new();

    let mut session = model.session().clone();
    if !session.contains_key(VERSION) {
        session.insert(VERSION, 0i64);
    }
    if !session.contains_key(SESSION_NAME) {
        session.insert(SESSION_NAME, DEFAULT_SESSION_NAME);
    }
    for tag in SESSION_WRITE_ORDER {
        write_tag(&mut out, table, tag, &session);
    }

    for section in model.media() {
        let mut scope = section.record().clone();
        if !scope.contains_key(PAYLOADS) {
            scope.insert(PAYLOADS, "");
        }
        write_tag(&mut out, table, MEDIA_DESCRIPTION_KEY, &scope);
        for tag in MEDIA_WRITE_ORDER {
            write_tag(&mut out, table, tag, &scope);
        }
    }

    out
}

fn write_tag(out: &mut String, table: &GrammarTable, tag: char, scope: &SdpRecord) {
    for rule in table.rules_for(tag) {
        match rule.placement() {
            Placement::Singleton(name) if rule.is_scalar() => {
                if let Some(value) = scope.get(name) {
                    push_line(out, tag, &format_template(rule.template(scope), &[value.to_string()]));
                }
            }
            Placement::Singleton(name) => {
                if let Some(nested) = scope.get_record(name) {
                    push_line(out, tag, &render_fields(rule, nested));
                }
            }
            Placement::Collection(key) => {
                for entry in scope.get_list(key).unwrap_or(&[]) {
                    push_line(out, tag, &render_fields(rule, entry));
                }
            }
            Placement::Inline => push_line(out, tag, &render_fields(rule, scope)),
        }
    }
}

fn render_fields(rule: &GrammarRule, values: &SdpRecord) -> String {
    let args: Vec<String> = rule
        .fields()
        .iter()
        .map(|field| values.get(field).map(ToString::to_string).unwrap_or_default())
        .collect();
    format_template(rule.template(values), &args)
}

fn push_line(out: &mut String, tag: char, content: &str) {
    out.push(tag);
    out.push(EQUAL_SYMBOL);
    out.push_str(content);
    out.push_str(LINE_END);
}

/// Substitutes `args` into a printf-like template.
///
/// `%s`, `%d` and `%u` take the next argument, `%v` skips one and `%%` is a
/// literal percent. Missing arguments render as nothing.
pub fn format_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(String::len).sum::<usize>());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s') | Some('d') | Some('u') => {
                chars.next();
                if let Some(arg) = args.next() {
                    out.push_str(arg);
                }
            }
            Some('v') => {
                chars.next();
                args.next();
            }
            _ => out.push('%'),
        }
    }

    out
}
