//! Key listing projection.
//!
//! The workflow publishes a JSON document describing the generated keys.
//! Only a shallow shape check is applied: `keys` must be an array for the
//! table to exist at all. Every other field is tolerated when absent or
//! malformed and rendered as an empty string.

use serde_json::Value;

/// One rendered table row. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    pub index: usize,
    pub key: String,
    pub expires_pht: String,
    pub expires_unix: String,
    pub tag: String,
}

/// Project a key listing document into table rows.
///
/// Returns `None` when the document has no `keys` array, which hides the
/// table. An empty `keys` array yields `Some(vec![])`: a visible, empty
/// table. The expiry and tag columns repeat the document-level values on
/// every row.
pub fn project_rows(doc: &Value) -> Option<Vec<KeyRow>> {
    let keys = doc.get("keys")?.as_array()?;

    let expires_pht = field_text(doc, "expires_at_pht");
    let expires_unix = field_text(doc, "expires_at_unix");
    let tag = field_text(doc, "tag");

    let rows = keys
        .iter()
        .enumerate()
        .map(|(i, key)| KeyRow {
            index: i + 1,
            key: escape_text(&value_text(key)),
            expires_pht: escape_text(&expires_pht),
            expires_unix: escape_text(&expires_unix),
            tag: escape_text(&tag),
        })
        .collect();

    Some(rows)
}

/// Document field as display text. Strings pass through, numbers are
/// formatted, anything else (or a missing field) renders empty.
pub fn field_text(doc: &Value, field: &str) -> String {
    match doc.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// A single key element as display text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape remote-controlled text for terminal display.
///
/// Control characters (including the ESC that starts ANSI sequences) are
/// replaced with their escape notation so a hostile document cannot
/// rewrite the terminal. The browser original interpolated these values
/// into markup unescaped; here the escaping is mandatory.
pub fn escape_text(s: &str) -> String {
    if !s.chars().any(char::is_control) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projects_one_row_per_key_with_repeated_columns() {
        let doc = json!({
            "keys": ["AAA", "BBB"],
            "expires_at_pht": "2024-01-01 12:00 PHT",
            "expires_at_unix": 1704085200,
            "tag": "v1",
        });

        let rows = project_rows(&doc).expect("keys array present");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            KeyRow {
                index: 1,
                key: "AAA".into(),
                expires_pht: "2024-01-01 12:00 PHT".into(),
                expires_unix: "1704085200".into(),
                tag: "v1".into(),
            }
        );
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].key, "BBB");
        assert_eq!(rows[1].expires_pht, rows[0].expires_pht);
        assert_eq!(rows[1].expires_unix, rows[0].expires_unix);
        assert_eq!(rows[1].tag, "v1");
    }

    #[test]
    fn document_without_keys_hides_table() {
        assert!(project_rows(&json!({})).is_none());
        assert!(project_rows(&json!({ "keys": "not-a-list" })).is_none());
        assert!(project_rows(&json!(null)).is_none());
    }

    #[test]
    fn empty_keys_array_is_a_visible_empty_table() {
        let rows = project_rows(&json!({ "keys": [] }));
        assert_eq!(rows, Some(Vec::new()));
    }

    #[test]
    fn missing_or_malformed_fields_render_empty() {
        let doc = json!({ "keys": ["K"], "expires_at_pht": ["wrong"] });
        let rows = project_rows(&doc).unwrap();
        assert_eq!(rows[0].expires_pht, "");
        assert_eq!(rows[0].expires_unix, "");
        assert_eq!(rows[0].tag, "");
    }

    #[test]
    fn expires_at_unix_accepts_string_or_number() {
        let doc = json!({ "keys": ["K"], "expires_at_unix": "1704085200" });
        assert_eq!(project_rows(&doc).unwrap()[0].expires_unix, "1704085200");

        let doc = json!({ "keys": ["K"], "expires_at_unix": 1704085200 });
        assert_eq!(project_rows(&doc).unwrap()[0].expires_unix, "1704085200");
    }

    #[test]
    fn non_string_key_elements_are_stringified() {
        let doc = json!({ "keys": [42, true] });
        let rows = project_rows(&doc).unwrap();
        assert_eq!(rows[0].key, "42");
        assert_eq!(rows[1].key, "true");
    }

    #[test]
    fn control_characters_never_pass_through_raw() {
        let doc = json!({
            "keys": ["KEY-\u{1b}[31mred"],
            "tag": "a\nb",
        });
        let rows = project_rows(&doc).unwrap();
        assert!(!rows[0].key.contains('\u{1b}'));
        assert!(rows[0].key.contains("\\u{1b}"));
        assert_eq!(rows[0].tag, "a\\nb");
    }

    #[test]
    fn escape_text_leaves_plain_strings_alone() {
        assert_eq!(escape_text("KEY-abc_123"), "KEY-abc_123");
    }
}
