/// Canonical JSON serialization
///
/// Object keys are sorted by codepoint at every depth and the output is
/// compact (`:` and `,` only, no whitespace). Anything outside printable
/// ASCII is written as a lowercase `\uXXXX` escape, surrogate pairs above
/// U+FFFF. Identical field values always give byte-identical output.
use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};

use crate::error::SubmitError;

/// Serialize `payload` to canonical UTF-8 JSON bytes
pub fn canonicalize_json<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, SubmitError> {
    let value = sort_keys(serde_json::to_value(payload)?);

    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// Compact formatter that keeps the output pure printable ASCII
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;

            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Rebuild every object with its entries inserted in sorted key order
///
/// Sorting explicitly keeps the output stable even when serde_json is built
/// with `preserve_order`.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            // UTF-8 byte order matches codepoint order
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_keys(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
