use std::fmt;
use std::str::FromStr;

/// A malformed attribute value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name} must be {expected} (got \"{value}\")")]
pub struct AttributeError {
    pub name: String,
    pub value: String,
    pub expected: &'static str,
}

/// A single named attribute. The value is kept as written; typed accessors
/// parse it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying unparsed value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn as_int(&self) -> Result<i32, AttributeError> {
        self.parse("an integer number")
    }

    /// Non-finite values (`NaN`, `inf`) are rejected.
    pub fn as_float(&self) -> Result<f32, AttributeError> {
        self.parse::<f32>("a number")
            .and_then(|v| if v.is_finite() { Ok(v) } else { Err(self.error("a number")) })
    }

    /// Accepts `true` or `false`.
    pub fn as_bool(&self) -> Result<bool, AttributeError> {
        self.parse("a boolean (true or false)")
    }

    /// The whole value must parse; surrounding whitespace is an error.
    fn parse<T: FromStr>(&self, expected: &'static str) -> Result<T, AttributeError> {
        self.value.parse().map_err(|_| self.error(expected))
    }

    fn error(&self, expected: &'static str) -> AttributeError {
        AttributeError {
            name: self.name.clone(),
            value: self.value.clone(),
            expected,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Attributes of one element, keyed by case-sensitive name, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList(Vec<Attribute>);

impl AttributeList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `name` to `value`, replacing an existing entry in place.
    /// Returns the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let attr = Attribute::new(name, value);
        match self.0.iter_mut().find(|a| a.name == attr.name) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, attr.value)),
            None => {
                self.0.push(attr);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().find(|a| a.name == name)
    }

    /// Returns the attribute, or `default` under the same name when absent.
    pub fn get_or(&self, name: &str, default: &str) -> Attribute {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| Attribute::new(name, default))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = AttributeList::new();
        for (k, v) in iter {
            list.insert(k, v);
        }
        list
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
