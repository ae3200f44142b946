//! Ordered request parameters and their canonical query-string encoding.

use std::fmt;

/// Parameter names whose values are masked by [`RequestParams::redacted`].
const SENSITIVE_KEYS: &[&str] = &["apiSecret", "secretKey", "secret"];

/// Ordered name/value pairs for a single request.
///
/// Parameters are encoded in insertion order, so identical pushes always
/// produce an identical query string and therefore an identical signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Look up the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Canonical `application/x-www-form-urlencoded` encoding, in insertion order.
    ///
    /// This exact string is both signed and sent on the wire.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }

    /// Display view with sensitive values masked, for logging.
    pub fn redacted(&self) -> RedactedParams<'_> {
        RedactedParams(self)
    }
}

/// Display adapter that prints parameters with sensitive values masked.
pub struct RedactedParams<'a>(&'a RequestParams);

impl fmt::Display for RedactedParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if SENSITIVE_KEYS.iter().any(|s| s.eq_ignore_ascii_case(k)) {
                write!(f, "{}: [REDACTED]", k)?;
            } else {
                write!(f, "{}: {}", k, v)?;
            }
        }
        f.write_str("}")
    }
}
