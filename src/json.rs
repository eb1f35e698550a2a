//! Purpose: Human-readable JSON rendering for logs and debugging.
//! Exports: `pretty`.
//! Role: Small, pure formatter; tab-indented counterpart to compact encoding.
//! Invariants: Encoding failures degrade to an empty string, never an error.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Render `value` as tab-indented JSON text.
///
/// Returns the empty string when the value cannot be encoded; callers use
/// this in log statements where a formatting error is not worth propagating.
pub fn pretty<T: Serialize>(value: &T) -> String {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    if value.serialize(&mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(out).unwrap_or_default()
}
