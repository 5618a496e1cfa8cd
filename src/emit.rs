// src/emit.rs

// Serialization of pools into the two output dialects.
//
// json: bracketed list, one pair per line, no comma on the last element.
// js:   the same list assigned to a `const` (or, for the bundle,
//       a `window.` global so the browser script can pick it up).

use crate::config::options::{EnumKind, OutputFormat};
use crate::specs::enums::EnumPair;

/// Plain data array:
/// ```text
/// [
///   [1, "THE_SAD_ONION"],
///   [4, "SAD_ONION"]
/// ]
/// ```
pub fn to_json_array(pairs: &[EnumPair]) -> String {
    let mut lines = vec![String::from("[")];
    for (i, (id, name)) in pairs.iter().enumerate() {
        let comma = if i + 1 < pairs.len() { "," } else { "" };
        lines.push(format!("  [{id}, {}]{comma}", quote(name)));
    }
    lines.push(String::from("]"));
    lines.join("\n")
}

/// `const VAR = [...];` with a trailing comma on every element.
pub fn to_js_array(pairs: &[EnumPair], var_name: &str) -> String {
    assign(&format!("const {var_name}"), pairs)
}

/// `window.VAR = [...];` plus a trailing newline, so bundle sections
/// joined with `\n` come out separated by a blank line.
pub fn to_window_array(pairs: &[EnumPair], var_name: &str) -> String {
    let mut s = assign(&format!("window.{var_name}"), pairs);
    s.push('\n');
    s
}

/// Dispatch on format. For js, the variable name is the override when
/// given, else the kind's default.
pub fn render(
    kind: EnumKind,
    pairs: &[EnumPair],
    format: OutputFormat,
    var_override: Option<&str>,
) -> String {
    match format {
        OutputFormat::Json => to_json_array(pairs),
        OutputFormat::Js => {
            let var = var_override.unwrap_or(kind.pool_var());
            to_js_array(pairs, var)
        }
    }
}

fn assign(head: &str, pairs: &[EnumPair]) -> String {
    let mut lines = vec![format!("{head} = [")];
    for (id, name) in pairs {
        lines.push(format!("  [{id}, {}],", quote(name)));
    }
    lines.push(String::from("];"));
    lines.join("\n")
}

/// JSON string literal for a name: quotes/backslashes/control characters
/// escaped, non-ASCII preserved as-is. Valid in both dialects.
fn quote(name: &str) -> String {
    serde_json::to_string(name).expect("string serialization is infallible")
}
