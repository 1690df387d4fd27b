//! Array-tree to XML document conversion and back.
//!
//! The mapping mirrors the array shape: string keys become child elements,
//! numeric keys become repeated elements named after their parent, and the
//! reserved `@attributes` key holds the element's attribute bag. On the way
//! back, repeated sibling tags collapse into a `0..n` list and a leaf element
//! with no attributes collapses to its plain text value.

use crate::value::{ArrayKey, Value};
use lazy_static::lazy_static;
use regex::Regex;

/// Reserved key naming an element's attribute bag.
pub const ATTRIBUTES_KEY: &str = "@attributes";

/// Reserved key carrying the text content of an element that also has
/// attributes, so the attribute bag round-trips.
pub const TEXT_KEY: &str = "@value";

lazy_static! {
    static ref INVALID_NAME_CHARS: Regex = Regex::new(r"(?i)[^a-z0-9\-_.:]").unwrap();
}

fn sanitize_element_name(name: &str) -> String {
    INVALID_NAME_CHARS.replace_all(name, "").to_string()
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn is_key(key: &ArrayKey, name: &str) -> bool {
    matches!(key, ArrayKey::String(s) if s == name)
}

/// array_to_xml - Serializes an array tree into an XML fragment rooted at
/// `root`.
pub fn array_to_xml(value: &Value, root: &str) -> String {
    let mut out = String::new();
    write_element(&mut out, root, value);
    out
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    let name = sanitize_element_name(name);

    let pairs = match value {
        Value::Array(pairs) => pairs,
        scalar => {
            out.push('<');
            out.push_str(&name);
            out.push('>');
            out.push_str(&escape_text(&scalar.to_string_val()));
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
            return;
        }
    };

    let attributes: Vec<&(ArrayKey, Value)> = pairs
        .iter()
        .filter(|(k, _)| is_key(k, ATTRIBUTES_KEY))
        .collect();
    let text = pairs
        .iter()
        .find(|(k, _)| is_key(k, TEXT_KEY))
        .map(|(_, v)| v.to_string_val());
    let children: Vec<&(ArrayKey, Value)> = pairs
        .iter()
        .filter(|(k, _)| !is_key(k, ATTRIBUTES_KEY) && !is_key(k, TEXT_KEY))
        .collect();

    let all_numeric =
        !children.is_empty() && children.iter().all(|(k, _)| matches!(k, ArrayKey::Integer(_)));

    // A plain list emits one element per item, each named after the parent
    // key, with no wrapper of its own.
    if all_numeric && attributes.is_empty() && text.is_none() {
        for (_, child) in children {
            write_element(out, &name, child);
        }
        return;
    }

    out.push('<');
    out.push_str(&name);
    for (_, bag) in &attributes {
        if let Value::Array(attrs) = bag {
            for (attr_name, attr_value) in attrs {
                let attr_name = sanitize_element_name(&attr_name.to_string());
                out.push(' ');
                out.push_str(&attr_name);
                out.push_str("=\"");
                out.push_str(&escape_text(&attr_value.to_string_val()));
                out.push('"');
            }
        }
    }
    out.push('>');

    if let Some(text) = text {
        out.push_str(&escape_text(&text));
    }
    for (key, child) in children {
        match key {
            ArrayKey::Integer(_) => write_element(out, &name, child),
            ArrayKey::String(child_name) => write_element(out, child_name, child),
        }
    }

    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

/// xml_to_array - Parses an XML document back into the array-tree shape.
///
/// Returns the root element's value; the root tag name itself is dropped so
/// that `array_to_xml` followed by `xml_to_array` reproduces the original
/// mapping. Malformed input yields an `Err` with a short parse message.
pub fn xml_to_array(input: &str) -> Result<Value, String> {
    let rest = skip_misc(input);
    if rest.is_empty() {
        return Err("Empty XML document".to_string());
    }
    let ((_, value), rest) = parse_element(rest)?;
    let rest = skip_misc(rest);
    if !rest.is_empty() {
        return Err("Extra content after document element".to_string());
    }
    Ok(value)
}

/// Skips whitespace, the XML prolog and comments between elements.
fn skip_misc(mut input: &str) -> &str {
    loop {
        input = input.trim_start();
        if let Some(rest) = input.strip_prefix("<?") {
            match rest.find("?>") {
                Some(pos) => input = &rest[pos + 2..],
                None => return input,
            }
        } else if let Some(rest) = input.strip_prefix("<!--") {
            match rest.find("-->") {
                Some(pos) => input = &rest[pos + 3..],
                None => return input,
            }
        } else {
            return input;
        }
    }
}

fn parse_name(input: &str) -> Result<(&str, &str), String> {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')))
        .unwrap_or(input.len());
    if end == 0 {
        return Err("Expected element name".to_string());
    }
    Ok((&input[..end], &input[end..]))
}

fn parse_attributes(mut input: &str) -> Result<(Vec<(ArrayKey, Value)>, &str), String> {
    let mut attrs: Vec<(ArrayKey, Value)> = Vec::new();
    loop {
        input = input.trim_start();
        match input.chars().next() {
            Some('>') | Some('/') => return Ok((attrs, input)),
            None => return Err("Unterminated element tag".to_string()),
            _ => {}
        }
        let (name, rest) = parse_name(input)?;
        let rest = rest.trim_start();
        let rest = rest
            .strip_prefix('=')
            .ok_or_else(|| format!("Expected '=' after attribute '{}'", name))?;
        let rest = rest.trim_start();
        let quote = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(format!("Expected quoted value for attribute '{}'", name)),
        };
        let rest = &rest[1..];
        let end = rest
            .find(quote)
            .ok_or_else(|| format!("Unterminated value for attribute '{}'", name))?;
        attrs.push((
            ArrayKey::String(name.to_string()),
            Value::String(decode_entities(&rest[..end])),
        ));
        input = &rest[end + 1..];
    }
}

fn parse_element(input: &str) -> Result<((String, Value), &str), String> {
    let rest = input
        .strip_prefix('<')
        .ok_or_else(|| "Expected '<'".to_string())?;
    let (name, rest) = parse_name(rest)?;
    let name = name.to_string();
    let (attrs, rest) = parse_attributes(rest)?;

    if let Some(rest) = rest.strip_prefix("/>") {
        return Ok(((name, assemble(attrs, Vec::new(), String::new())), rest));
    }
    let mut rest = rest
        .strip_prefix('>')
        .ok_or_else(|| format!("Malformed start tag for element '{}'", name))?;

    let mut children: Vec<(String, Value)> = Vec::new();
    let mut text = String::new();

    loop {
        if let Some(after) = rest.strip_prefix("</") {
            let (close_name, after) = parse_name(after)?;
            if close_name != name {
                return Err(format!(
                    "Mismatched closing tag: expected '{}', found '{}'",
                    name, close_name
                ));
            }
            let after = after.trim_start();
            rest = after
                .strip_prefix('>')
                .ok_or_else(|| format!("Malformed closing tag for element '{}'", name))?;
            break;
        }
        if let Some(after) = rest.strip_prefix("<!--") {
            let pos = after
                .find("-->")
                .ok_or_else(|| "Unterminated comment".to_string())?;
            rest = &after[pos + 3..];
            continue;
        }
        if rest.starts_with('<') {
            let (child, after) = parse_element(rest)?;
            children.push(child);
            rest = after;
            continue;
        }
        if rest.is_empty() {
            return Err(format!("Unterminated element '{}'", name));
        }
        let chunk_end = rest.find('<').unwrap_or(rest.len());
        text.push_str(&rest[..chunk_end]);
        rest = &rest[chunk_end..];
    }

    Ok(((name, assemble(attrs, children, text)), rest))
}

/// Builds the array value for an element out of its attributes, child
/// elements and text content.
fn assemble(
    attrs: Vec<(ArrayKey, Value)>,
    children: Vec<(String, Value)>,
    text: String,
) -> Value {
    let text = decode_entities(text.trim());

    if attrs.is_empty() && children.is_empty() {
        // Leaf with no attributes collapses to its plain text value.
        return Value::String(text);
    }

    let mut pairs: Vec<(ArrayKey, Value)> = Vec::new();
    if !attrs.is_empty() {
        pairs.push((ArrayKey::String(ATTRIBUTES_KEY.to_string()), Value::Array(attrs)));
    }
    if children.is_empty() && !text.is_empty() {
        pairs.push((ArrayKey::String(TEXT_KEY.to_string()), Value::String(text)));
        return Value::Array(pairs);
    }

    // Group repeated sibling tags into lists, preserving first-seen order.
    let mut grouped: Vec<(String, Vec<Value>)> = Vec::new();
    for (child_name, child_value) in children {
        match grouped.iter_mut().find(|(n, _)| *n == child_name) {
            Some((_, values)) => values.push(child_value),
            None => grouped.push((child_name, vec![child_value])),
        }
    }
    for (child_name, mut values) in grouped {
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::list(values)
        };
        pairs.push((ArrayKey::String(child_name), value));
    }

    Value::Array(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, Value)]) -> Vec<(ArrayKey, Value)> {
        pairs
            .iter()
            .map(|(k, v)| (ArrayKey::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn test_encode_scalar_leaves() {
        let tree = Value::Array(map(&[
            ("name", Value::from("mario")),
            ("age", Value::from(42)),
        ]));
        assert_eq!(
            array_to_xml(&tree, "person"),
            "<person><name>mario</name><age>42</age></person>"
        );
    }

    #[test]
    fn test_encode_repeated_elements_from_list() {
        let tree = Value::Array(map(&[(
            "book",
            Value::list(vec![Value::from("a"), Value::from("b")]),
        )]));
        assert_eq!(
            array_to_xml(&tree, "library"),
            "<library><book>a</book><book>b</book></library>"
        );
    }

    #[test]
    fn test_encode_attributes_and_text() {
        let tree = Value::Array(map(&[
            (
                ATTRIBUTES_KEY,
                Value::Array(map(&[("id", Value::from("3"))])),
            ),
            (TEXT_KEY, Value::from("body")),
        ]));
        assert_eq!(array_to_xml(&tree, "note"), "<note id=\"3\">body</note>");
    }

    #[test]
    fn test_encode_sanitizes_names_and_escapes_text() {
        let tree = Value::Array(map(&[("bad key!", Value::from("a < b & c"))]));
        assert_eq!(
            array_to_xml(&tree, "root"),
            "<root><badkey>a &lt; b &amp; c</badkey></root>"
        );
    }

    #[test]
    fn test_encode_preserves_name_case() {
        // Sanitization strips invalid characters only; letter case survives
        // so uppercase keys round-trip.
        let tree = Value::Array(map(&[("Title", Value::from("x"))]));
        let xml = array_to_xml(&tree, "Root");
        assert_eq!(xml, "<Root><Title>x</Title></Root>");
        assert_eq!(xml_to_array(&xml).unwrap(), tree);
    }

    #[test]
    fn test_decode_collapses_leaves() {
        let parsed = xml_to_array("<person><name>mario</name><age>42</age></person>").unwrap();
        assert_eq!(
            parsed,
            Value::Array(map(&[
                ("name", Value::from("mario")),
                ("age", Value::from("42")),
            ]))
        );
    }

    #[test]
    fn test_decode_groups_repeated_siblings() {
        let parsed =
            xml_to_array("<library><book>a</book><book>b</book><shelf>1</shelf></library>")
                .unwrap();
        assert_eq!(
            parsed,
            Value::Array(map(&[
                ("book", Value::list(vec![Value::from("a"), Value::from("b")])),
                ("shelf", Value::from("1")),
            ]))
        );
    }

    #[test]
    fn test_decode_attributes_and_entities() {
        let parsed = xml_to_array("<note id=\"3\">a &lt; b &amp; c</note>").unwrap();
        assert_eq!(
            parsed,
            Value::Array(map(&[
                (
                    ATTRIBUTES_KEY,
                    Value::Array(map(&[("id", Value::from("3"))])),
                ),
                (TEXT_KEY, Value::from("a < b & c")),
            ]))
        );
    }

    #[test]
    fn test_decode_skips_prolog_and_comments() {
        let parsed = xml_to_array(
            "<?xml version=\"1.0\"?><!-- header --><a><!-- inner --><b>1</b></a>",
        )
        .unwrap();
        assert_eq!(parsed, Value::Array(map(&[("b", Value::from("1"))])));
    }

    #[test]
    fn test_decode_self_closing() {
        let parsed = xml_to_array("<a><b/><c key=\"v\"/></a>").unwrap();
        assert_eq!(
            parsed,
            Value::Array(map(&[
                ("b", Value::from("")),
                (
                    "c",
                    Value::Array(map(&[(
                        ATTRIBUTES_KEY,
                        Value::Array(map(&[("key", Value::from("v"))])),
                    )])),
                ),
            ]))
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(xml_to_array("").is_err());
        assert!(xml_to_array("<a><b></a>").is_err());
        assert!(xml_to_array("<a>unclosed").is_err());
        assert!(xml_to_array("<a></a><b></b>").is_err());
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let tree = Value::Array(map(&[
            (
                ATTRIBUTES_KEY,
                Value::Array(map(&[("version", Value::from("1"))])),
            ),
            ("title", Value::from("catalogo")),
            (
                "book",
                Value::list(vec![Value::from("primo"), Value::from("secondo & terzo")]),
            ),
        ]));
        let xml = array_to_xml(&tree, "library");
        let back = xml_to_array(&xml).unwrap();
        assert_eq!(back, tree);
    }
}
