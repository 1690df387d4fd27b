//! Array helper functions.
//!
//! These operate on the order-preserving `(ArrayKey, Value)` pair
//! representation from [`crate::value`]. Whether an array is read as a list
//! or as a map is decided per function by its key convention.

use crate::value::{ArrayKey, Value};

/// array_element - Returns the stored value for a key, or a default when the
/// key is missing or holds the empty string.
pub fn array_element(needle: &ArrayKey, haystack: &[(ArrayKey, Value)], default: Value) -> Value {
    for (key, value) in haystack {
        if key == needle {
            if let Value::String(s) = value {
                if s.is_empty() {
                    return default;
                }
            }
            if value.is_null() {
                return default;
            }
            return value.clone();
        }
    }
    default
}

/// array_random - Returns a uniformly random element of an array.
///
/// Non-array input passes through unchanged; an empty array yields `Null`.
pub fn array_random(haystack: &Value) -> Value {
    match haystack {
        Value::Array(arr) => {
            if arr.is_empty() {
                return Value::Null;
            }
            let idx = fastrand::usize(0..arr.len());
            arr[idx].1.clone()
        }
        other => other.clone(),
    }
}

/// is_assoc - True when the keys are not the sequential `0..n` integer run.
pub fn is_assoc(array: &[(ArrayKey, Value)]) -> bool {
    array
        .iter()
        .enumerate()
        .any(|(i, (key, _))| *key != ArrayKey::Integer(i as i64))
}

/// is_array_array - True when any element is itself an array.
pub fn is_array_array(array: &[(ArrayKey, Value)]) -> bool {
    array.iter().any(|(_, element)| element.is_array())
}

/// object_to_array - Flattens an object into an array of its public
/// properties.
///
/// An object carrying the [`crate::value::ArraySerialize`] capability is
/// serialized through it. Otherwise the public properties are walked and
/// nested objects are flattened recursively; a nested object equal to its
/// container is skipped to cut self-references short.
pub fn object_to_array(source: &Value) -> Value {
    let obj = match source {
        Value::Object(obj) => obj,
        other => return other.clone(),
    };

    if let Some(serializer) = obj.serializer() {
        return Value::Array(serializer.serialize_to_array());
    }

    let mut ret: Vec<(ArrayKey, Value)> = Vec::with_capacity(obj.properties.len());
    for (name, value) in &obj.properties {
        match value {
            Value::Object(nested) => {
                if nested == obj {
                    continue;
                }
                ret.push((ArrayKey::String(name.clone()), object_to_array(value)));
            }
            other => {
                ret.push((ArrayKey::String(name.clone()), other.clone()));
            }
        }
    }
    Value::Array(ret)
}

/// array_levels - Returns how many levels of nesting an array has.
///
/// An empty array has 0 levels, a flat array 1, and so on.
pub fn array_levels(array: &[(ArrayKey, Value)]) -> i64 {
    fn walk(array: &[(ArrayKey, Value)], level: i64) -> i64 {
        if array.is_empty() {
            return 0;
        }
        let mut max = level + 1;
        for (_, element) in array {
            if let Value::Array(inner) = element {
                let depth = walk(inner, level + 1);
                if depth > max {
                    max = depth;
                }
            }
        }
        max
    }
    walk(array, 0)
}

/// array_untrim - Adds a string as prefix and suffix to each element.
pub fn array_untrim(array: &[(ArrayKey, Value)], chars: &str) -> Vec<(ArrayKey, Value)> {
    array
        .iter()
        .map(|(key, value)| {
            (
                key.clone(),
                Value::String(format!("{}{}{}", chars, value.to_string_val(), chars)),
            )
        })
        .collect()
}

fn trim_value(value: &Value, chars: Option<&str>, left: bool, right: bool) -> Value {
    let s = value.to_string_val();
    let trimmed = match chars {
        None => match (left, right) {
            (true, true) => s.trim(),
            (true, false) => s.trim_start(),
            (false, true) => s.trim_end(),
            (false, false) => s.as_str(),
        },
        Some(set) => {
            let pat = |c: char| set.contains(c);
            match (left, right) {
                (true, true) => s.trim_matches(pat),
                (true, false) => s.trim_start_matches(pat),
                (false, true) => s.trim_end_matches(pat),
                (false, false) => s.as_str(),
            }
        }
    };
    Value::String(trimmed.to_string())
}

/// array_trim - Trims each element's value on both sides.
///
/// `chars` is an explicit set of characters to strip; `None` means
/// whitespace. Elements are stringified first, as PHP's `trim` would.
pub fn array_trim(array: &[(ArrayKey, Value)], chars: Option<&str>) -> Vec<(ArrayKey, Value)> {
    array
        .iter()
        .map(|(key, value)| (key.clone(), trim_value(value, chars, true, true)))
        .collect()
}

/// array_ltrim - Left-trims each element's value.
pub fn array_ltrim(array: &[(ArrayKey, Value)], chars: Option<&str>) -> Vec<(ArrayKey, Value)> {
    array
        .iter()
        .map(|(key, value)| (key.clone(), trim_value(value, chars, true, false)))
        .collect()
}

/// array_rtrim - Right-trims each element's value.
pub fn array_rtrim(array: &[(ArrayKey, Value)], chars: Option<&str>) -> Vec<(ArrayKey, Value)> {
    array
        .iter()
        .map(|(key, value)| (key.clone(), trim_value(value, chars, false, true)))
        .collect()
}

/// array_key_from_value - Rebuilds an array of records using an inner value
/// as the new key.
///
/// For each record, the value at `key` becomes the record's key in the
/// result. With `remove` the field is deleted from the record; with `old_to`
/// the record's original key is saved under that field name. A later record
/// producing the same key overwrites the earlier one.
pub fn array_key_from_value(
    source: &[(ArrayKey, Value)],
    key: &ArrayKey,
    remove: bool,
    old_to: Option<&ArrayKey>,
) -> Vec<(ArrayKey, Value)> {
    let mut data: Vec<(ArrayKey, Value)> = Vec::with_capacity(source.len());
    for (old, record) in source {
        let mut pairs = match record {
            Value::Array(pairs) => pairs.clone(),
            _ => continue,
        };

        let val = pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or(Value::Null);

        if remove {
            pairs.retain(|(k, _)| k != key);
        }

        if let Some(old_to) = old_to {
            match pairs.iter_mut().find(|(k, _)| k == old_to) {
                Some(entry) => entry.1 = old.to_value(),
                None => pairs.push((old_to.clone(), old.to_value())),
            }
        }

        let new_key = ArrayKey::from_value(&val);
        match data.iter_mut().find(|(k, _)| *k == new_key) {
            Some(entry) => entry.1 = Value::Array(pairs),
            None => data.push((new_key, Value::Array(pairs))),
        }
    }
    data
}

/// array_remove_empty - Removes entries whose value is null or the empty
/// string.
///
/// Non-recursive and strict: `0`, `"0"`, `false` and empty nested arrays all
/// survive. See [`array_remove_empty_recursive`] for the loose variant.
pub fn array_remove_empty(source: &[(ArrayKey, Value)]) -> Vec<(ArrayKey, Value)> {
    source
        .iter()
        .filter(|(_, value)| {
            !value.is_null() && !matches!(value, Value::String(s) if s.is_empty())
        })
        .cloned()
        .collect()
}

/// array_remove_empty_recursive - Recursively removes entries with falsy
/// values.
///
/// Descends into nested arrays first, then drops every entry whose value is
/// falsy under PHP loose truthiness, so `0`, `"0"`, `false` and arrays that
/// became empty are removed as well.
pub fn array_remove_empty_recursive(source: &[(ArrayKey, Value)]) -> Vec<(ArrayKey, Value)> {
    let mut data: Vec<(ArrayKey, Value)> = Vec::with_capacity(source.len());
    for (key, value) in source {
        let value = match value {
            Value::Array(inner) => Value::Array(array_remove_empty_recursive(inner)),
            other => other.clone(),
        };
        if value.to_bool() {
            data.push((key.clone(), value));
        }
    }
    data
}
