use std::borrow::Cow;
use std::collections::BTreeMap;

/// A structured value that can be turned into an ordered byte key.
///
/// The universe is JSON-shaped with two additions: the [`Min`](Value::Min)
/// and [`Max`](Value::Max) sentinels used as inclusive range bounds, and
/// [`Extension`](Value::Extension) for application-defined variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The neutral value; decoding a sentinel also yields it.
    Null,
    /// A boolean; `false` orders before `true`.
    Bool(bool),
    /// A double-precision number. NaN is refused at encode time.
    Number(f64),
    /// A UTF-8 string, ordered by its raw bytes.
    String(String),
    /// A sequence of values, ordered component-wise with shorter-is-less.
    Array(Vec<Value>),
    /// A string-keyed mapping. Entry order is not significant: two objects
    /// with equal entries encode and compare identically.
    Object(BTreeMap<String, Value>),
    /// An application-defined variant, claimed by an extension encoding.
    Extension(Extension),
    /// Sentinel ordering below every encodable value.
    Min,
    /// Sentinel ordering above every encodable value.
    Max,
}

/// An application-defined value: a name selecting the extension encoding
/// that claims it, plus a payload expressed in the base universe.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    name: Cow<'static, str>,
    data: Box<Value>,
}

impl Extension {
    /// Wraps `data` under the extension `name`.
    pub fn new(name: impl Into<Cow<'static, str>>, data: Value) -> Extension {
        Extension { name: name.into(), data: Box::new(data) }
    }

    /// The name extension encodings match on.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped payload.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Number(x)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Value {
        Value::Object(entries)
    }
}

impl From<Extension> for Value {
    fn from(extension: Extension) -> Value {
        Value::Extension(extension)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Value {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Value {
        Value::Object(iter.into_iter().collect())
    }
}
