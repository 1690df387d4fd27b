//! Dynamic value representation shared by the array and XML helpers.
//!
//! Arrays preserve insertion order and carry either integer or string keys,
//! so the same structure serves as both an ordered list and an associative
//! map. Which reading applies is decided per helper by key convention.

use std::fmt;
use std::rc::Rc;

pub mod array_key;
mod conversions;

pub use array_key::ArrayKey;

/// Capability for objects that expose an explicit serialize-to-map operation.
///
/// `object_to_array` prefers this over walking public properties. Presence of
/// the trait object on an [`ObjectValue`] is the capability check; there is
/// no runtime reflection.
pub trait ArraySerialize {
    fn serialize_to_array(&self) -> Vec<(ArrayKey, Value)>;
}

/// An object value: a class name plus its public properties in declaration
/// order, and an optional [`ArraySerialize`] capability.
#[derive(Clone)]
pub struct ObjectValue {
    pub class_name: String,
    pub properties: Vec<(String, Value)>,
    serializer: Option<Rc<dyn ArraySerialize>>,
}

impl ObjectValue {
    pub fn with_properties(
        class_name: impl Into<String>,
        properties: Vec<(String, Value)>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            properties,
            serializer: None,
        }
    }

    /// Attach the explicit serialize-to-map capability.
    pub fn with_serializer(mut self, serializer: Rc<dyn ArraySerialize>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    pub fn serializer(&self) -> Option<&Rc<dyn ArraySerialize>> {
        self.serializer.as_ref()
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("class_name", &self.class_name)
            .field("properties", &self.properties)
            .field("has_serializer", &self.serializer.is_some())
            .finish()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name && self.properties == other.properties
    }
}

/// Runtime value representation.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<(ArrayKey, Value)>),
    Object(ObjectValue),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.type_equals(other)
    }
}

impl Value {
    /// Build a sequential list, keys running 0..n.
    pub fn list(values: Vec<Value>) -> Value {
        Value::Array(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Integer(i as i64), v))
                .collect(),
        )
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
