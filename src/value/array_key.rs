use std::fmt;

#[derive(Debug, Clone)]
pub enum ArrayKey {
    Integer(i64),
    String(String),
}

impl PartialEq for ArrayKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ArrayKey::Integer(a), ArrayKey::Integer(b)) => a == b,
            (ArrayKey::String(a), ArrayKey::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ArrayKey {}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Integer(n) => write!(f, "{}", n),
            ArrayKey::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(n: i64) -> Self {
        ArrayKey::Integer(n)
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        ArrayKey::String(s.to_string())
    }
}

impl ArrayKey {
    /// PHP key coercion: numeric strings become integer keys.
    pub fn from_value(value: &super::Value) -> ArrayKey {
        match value {
            super::Value::Integer(n) => ArrayKey::Integer(*n),
            super::Value::Float(n) => ArrayKey::Integer(*n as i64),
            super::Value::Bool(b) => ArrayKey::Integer(if *b { 1 } else { 0 }),
            super::Value::Null => ArrayKey::String(String::new()),
            super::Value::String(s) => {
                if let Ok(n) = s.parse::<i64>() {
                    ArrayKey::Integer(n)
                } else {
                    ArrayKey::String(s.clone())
                }
            }
            super::Value::Array(_) => ArrayKey::String("Array".to_string()),
            super::Value::Object(obj) => ArrayKey::String(format!("Object({})", obj.class_name)),
        }
    }

    pub fn to_value(&self) -> super::Value {
        match self {
            ArrayKey::Integer(n) => super::Value::Integer(*n),
            ArrayKey::String(s) => super::Value::String(s.clone()),
        }
    }
}
