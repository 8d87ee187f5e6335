//! Deterministic JSON rendering of IR values.
//!
//! The output is compact JSON in which every object's keys are sorted
//! lexicographically (at every depth) and arrays keep their order. Two
//! values that differ only in the insertion order of their object keys
//! therefore render identically, which makes the output suitable both for
//! structural equality checks and as hash input.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Render `value` as canonical JSON.
///
/// Fails only if `value`'s [`Serialize`] impl fails (e.g. a map with
/// non-string keys).
pub fn to_canonical_json<T: Serialize + ?Sized>(
    value: &T,
) -> Result<String, serde_json::Error> {
    let json = serde_json::to_value(value)?;
    let mut out = String::new();
    write_canonical(&json, &mut out)?;
    Ok(out)
}

/// Structural equality under canonical serialization.
pub fn canonical_eq<A, B>(a: &A, b: &B) -> Result<bool, serde_json::Error>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    Ok(to_canonical_json(a)? == to_canonical_json(b)?)
}

fn write_canonical(
    value: &JsonValue,
    out: &mut String,
) -> Result<(), serde_json::Error> {
    match value {
        JsonValue::Null
            | JsonValue::Bool(_)
            | JsonValue::Number(_)
            | JsonValue::String(_)
            => out.push_str(serde_json::to_string(value)?.as_str()),

        JsonValue::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_canonical(item, out)?;
            }
            out.push(']');
        },

        JsonValue::Object(entries) => {
            // Sort explicitly rather than relying on serde_json's map type,
            // which preserves insertion order when `preserve_order` is on.
            let mut entries: Vec<(&String, &JsonValue)> = entries.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

            out.push('{');
            for (idx, (key, entry_value)) in entries.into_iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                out.push_str(serde_json::to_string(key)?.as_str());
                out.push(':');
                write_canonical(entry_value, out)?;
            }
            out.push('}');
        },
    }
    Ok(())
}
