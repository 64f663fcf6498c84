//! Query string tokenizer and value parsers.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use super::{Declaration, ParseWarning, PolicyKind};

/// Parse a sizing query string into a Declaration + warnings.
pub(super) fn parse_query(query: &str) -> (Declaration, Vec<ParseWarning>) {
    let mut decl = Declaration::default();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(&key, &value, &mut decl, &mut warnings);
    }

    (decl, warnings)
}

fn dispatch_key(key: &str, value: &str, decl: &mut Declaration, warnings: &mut Vec<ParseWarning>) {
    let (field, canonical) = match key {
        "policy" => {
            match parse_policy(value) {
                Some(p) => set_or_warn(&mut decl.policy, p, key, value, warnings),
                None => warnings.push(ParseWarning::ValueInvalid {
                    key: "policy",
                    value: String::from(value),
                    reason: "expected ratio|padding|constant|ratio-padding|ratio-constant|padding-constant",
                }),
            }
            return;
        }
        "react" => {
            match parse_bool(value) {
                Some(b) => set_or_warn(&mut decl.react, b, key, value, warnings),
                None => warnings.push(ParseWarning::ValueInvalid {
                    key: "react",
                    value: String::from(value),
                    reason: "expected true|false|1|0|yes|no|on|off",
                }),
            }
            return;
        }
        "long_ratio" | "long_side_ratio" => (&mut decl.long_ratio, "long_ratio"),
        "short_ratio" | "short_side_ratio" => (&mut decl.short_ratio, "short_ratio"),
        "long_padding" | "long_side_padding" => (&mut decl.long_padding, "long_padding"),
        "short_padding" | "short_side_padding" => (&mut decl.short_padding, "short_padding"),
        "long_constant" | "long_side_constant" => (&mut decl.long_constant, "long_constant"),
        _ => {
            warnings.push(ParseWarning::KeyNotRecognized {
                key: String::from(key),
                value: String::from(value),
            });
            return;
        }
    };
    match parse_f32(value) {
        Some(v) => set_or_warn(field, v, key, value, warnings),
        None => warnings.push(ParseWarning::ValueInvalid {
            key: canonical,
            value: String::from(value),
            reason: "expected a finite number",
        }),
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(field: &mut Option<T>, parsed: T, key: &str, value: &str, warnings: &mut Vec<ParseWarning>) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

// ---- Value parsers ----

fn parse_f32(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Policy names are case-insensitive and accept `_` for `-`.
fn parse_policy(s: &str) -> Option<PolicyKind> {
    let name = s.trim().to_ascii_lowercase().replace('_', "-");
    PolicyKind::ALL.into_iter().find(|k| k.name() == name)
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    if !s.contains(['%', '+']) {
        return s.to_owned();
    }
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(q: &str) -> (Declaration, Vec<ParseWarning>) {
        parse_query(q)
    }

    #[test]
    fn parse_all_keys() {
        let (d, w) = decl(
            "?policy=ratio&long_ratio=0.5&short_ratio=0.25&long_padding=1&short_padding=2&long_constant=3&react=off",
        );
        assert!(w.is_empty());
        assert_eq!(d.policy, Some(PolicyKind::Ratio));
        assert_eq!(d.long_ratio, Some(0.5));
        assert_eq!(d.short_ratio, Some(0.25));
        assert_eq!(d.long_padding, Some(1.0));
        assert_eq!(d.short_padding, Some(2.0));
        assert_eq!(d.long_constant, Some(3.0));
        assert_eq!(d.react, Some(false));
    }

    #[test]
    fn policy_names_are_lenient() {
        for (text, kind) in [
            ("RATIO_PADDING", PolicyKind::RatioPadding),
            ("Ratio-Constant", PolicyKind::RatioConstant),
            (" padding_constant ", PolicyKind::PaddingConstant),
            ("constant", PolicyKind::Constant),
        ] {
            assert_eq!(parse_policy(text), Some(kind), "{text}");
        }
        assert_eq!(parse_policy("ratiopadding"), None);
    }

    #[test]
    fn keys_are_case_insensitive_with_long_aliases() {
        let (d, w) = decl("LONG_SIDE_RATIO=0.4&Short_Side_Padding=8");
        assert!(w.is_empty());
        assert_eq!(d.long_ratio, Some(0.4));
        assert_eq!(d.short_padding, Some(8.0));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let (d, w) = decl("long_ratio=0.4&long_side_ratio=0.6");
        assert_eq!(d.long_ratio, Some(0.6));
        assert_eq!(
            w,
            [ParseWarning::DuplicateKey {
                key: String::from("long_side_ratio"),
                value: String::from("0.6"),
            }]
        );
    }

    #[test]
    fn invalid_values_warn_and_leave_field_unset() {
        let (d, w) = decl("long_ratio=half&short_padding=inf&react=maybe&policy=grid");
        assert_eq!(d, Declaration::default());
        let keys: Vec<_> = w
            .iter()
            .map(|w| match w {
                ParseWarning::ValueInvalid { key, .. } => *key,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(keys, ["long_ratio", "short_padding", "react", "policy"]);
    }

    #[test]
    fn unknown_keys_warn() {
        let (_, w) = decl("width=300");
        assert_eq!(
            w,
            [ParseWarning::KeyNotRecognized {
                key: String::from("width"),
                value: String::from("300"),
            }]
        );
    }

    #[test]
    fn empty_pairs_are_skipped() {
        let (d, w) = decl("&&long_constant=10&");
        assert!(w.is_empty());
        assert_eq!(d.long_constant, Some(10.0));
    }

    #[test]
    fn percent_decoding() {
        assert_eq!(percent_decode("ratio%2Dpadding"), "ratio-padding");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%C3%A9"), "é");
        let (d, _) = decl("policy=ratio%5Fpadding&long%5Fratio=0.5");
        assert_eq!(d.policy, Some(PolicyKind::RatioPadding));
        assert_eq!(d.long_ratio, Some(0.5));
    }
}
