//! Output document model and its YAML rendering.

use serde::{Deserialize, Serialize};

/// String quoting style for the rendered document. A pure formatting knob with
/// no semantic effect on the document contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

/// One consolidated secret: display name plus an opaque JSON blob of the
/// projected credential fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRecord {
    pub name: String,
    pub kvpairs: String,
}

/// The sole output artifact: one record per included sensor document, in input
/// order. Skipped documents leave no gap.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Output {
    pub secrets: Vec<SecretRecord>,
}

impl Output {
    pub fn push(&mut self, record: SecretRecord) {
        self.secrets.push(record);
    }
}

/// Renders the output collection as YAML text.
///
/// serde_yaml exposes no control over scalar quoting, and the document shape is
/// fixed (a `secrets` sequence of two string fields), so the emitter writes the
/// document itself and quotes each string in the requested style.
pub fn render(output: &Output, style: QuoteStyle) -> String {
    if output.secrets.is_empty() {
        return "secrets: []\n".to_string();
    }

    let mut text = String::from("secrets:\n");
    for record in &output.secrets {
        text.push_str("- name: ");
        text.push_str(&quote(&record.name, style));
        text.push_str("\n  kvpairs: ");
        text.push_str(&quote(&record.kvpairs, style));
        text.push('\n');
    }
    text
}

fn quote(s: &str, style: QuoteStyle) -> String {
    match style {
        // Single-quoted YAML escapes a quote by doubling it.
        QuoteStyle::Single => format!("'{}'", s.replace('\'', "''")),
        QuoteStyle::Double => {
            let mut quoted = String::with_capacity(s.len() + 2);
            quoted.push('"');
            for c in s.chars() {
                match c {
                    '"' => quoted.push_str("\\\""),
                    '\\' => quoted.push_str("\\\\"),
                    '\n' => quoted.push_str("\\n"),
                    '\t' => quoted.push_str("\\t"),
                    c => quoted.push(c),
                }
            }
            quoted.push('"');
            quoted
        }
    }
}
