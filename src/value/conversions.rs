impl super::Value {
    /// PHP loose truthiness. This is the predicate behind the recursive
    /// empty-pruning variant.
    pub fn to_bool(&self) -> bool {
        match self {
            super::Value::Null => false,
            super::Value::Bool(b) => *b,
            super::Value::Integer(n) => *n != 0,
            super::Value::Float(n) => *n != 0.0,
            super::Value::String(s) => !s.is_empty() && s != "0",
            super::Value::Array(arr) => !arr.is_empty(),
            super::Value::Object(_) => true,
        }
    }

    pub fn to_int(&self) -> i64 {
        match self {
            super::Value::Null => 0,
            super::Value::Bool(b) => {
                if *b {
                    1
                } else {
                    0
                }
            }
            super::Value::Integer(n) => *n,
            super::Value::Float(n) => *n as i64,
            super::Value::String(s) => s.parse().unwrap_or(0),
            super::Value::Array(arr) => {
                if arr.is_empty() {
                    0
                } else {
                    1
                }
            }
            super::Value::Object(_) => 1,
        }
    }

    pub fn to_float(&self) -> f64 {
        match self {
            super::Value::Null => 0.0,
            super::Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            super::Value::Integer(n) => *n as f64,
            super::Value::Float(n) => *n,
            super::Value::String(s) => s.parse().unwrap_or(0.0),
            super::Value::Array(arr) => {
                if arr.is_empty() {
                    0.0
                } else {
                    1.0
                }
            }
            super::Value::Object(_) => 1.0,
        }
    }

    pub fn to_string_val(&self) -> String {
        match self {
            super::Value::Null => String::new(),
            super::Value::Bool(b) => {
                if *b {
                    "1".to_string()
                } else {
                    String::new()
                }
            }
            super::Value::Integer(n) => n.to_string(),
            super::Value::Float(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    n.to_string()
                }
            }
            super::Value::String(s) => s.clone(),
            super::Value::Array(_) => "Array".to_string(),
            super::Value::Object(obj) => format!("Object({})", obj.class_name),
        }
    }

    pub fn type_equals(&self, other: &super::Value) -> bool {
        match (self, other) {
            (super::Value::Null, super::Value::Null) => true,
            (super::Value::Bool(a), super::Value::Bool(b)) => a == b,
            (super::Value::Integer(a), super::Value::Integer(b)) => a == b,
            (super::Value::Float(a), super::Value::Float(b)) => a == b,
            (super::Value::String(a), super::Value::String(b)) => a == b,
            (super::Value::Array(a), super::Value::Array(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                for ((k1, v1), (k2, v2)) in a.iter().zip(b.iter()) {
                    if k1 != k2 || !v1.type_equals(v2) {
                        return false;
                    }
                }
                true
            }
            (super::Value::Object(a), super::Value::Object(b)) => a == b,
            _ => false,
        }
    }

}

#[cfg(test)]
mod tests {
    use crate::value::{ArrayKey, Value};

    #[test]
    fn test_to_bool_loose_truthiness() {
        assert!(!Value::Null.to_bool());
        assert!(!Value::from(0).to_bool());
        assert!(!Value::from("").to_bool());
        assert!(!Value::from("0").to_bool());
        assert!(!Value::Array(vec![]).to_bool());
        assert!(Value::from("00").to_bool());
        assert!(Value::from(-1).to_bool());
        assert!(Value::Array(vec![(ArrayKey::Integer(0), Value::Null)]).to_bool());
    }

    #[test]
    fn test_to_int() {
        assert_eq!(Value::Null.to_int(), 0);
        assert_eq!(Value::Bool(true).to_int(), 1);
        assert_eq!(Value::from(3.9).to_int(), 3);
        assert_eq!(Value::from("42").to_int(), 42);
        assert_eq!(Value::from("not a number").to_int(), 0);
        assert_eq!(Value::Array(vec![]).to_int(), 0);
        assert_eq!(Value::Array(vec![(ArrayKey::Integer(0), Value::Null)]).to_int(), 1);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(Value::from(3).to_float(), 3.0);
        assert_eq!(Value::from("2.5").to_float(), 2.5);
        assert_eq!(Value::from("x").to_float(), 0.0);
        assert_eq!(Value::Bool(false).to_float(), 0.0);
    }

    #[test]
    fn test_to_string_val() {
        assert_eq!(Value::Null.to_string_val(), "");
        assert_eq!(Value::Bool(true).to_string_val(), "1");
        assert_eq!(Value::Bool(false).to_string_val(), "");
        assert_eq!(Value::from(7).to_string_val(), "7");
        assert_eq!(Value::from(2.0).to_string_val(), "2");
        assert_eq!(Value::from(2.5).to_string_val(), "2.5");
        assert_eq!(Value::Array(vec![]).to_string_val(), "Array");
    }
}
