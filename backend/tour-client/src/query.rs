//! Query-string construction for filter, sort and pagination parameters.
//!
//! A [`QuerySpec`] keeps keys in insertion order and drops every absent,
//! null or empty value before encoding, so the backend never receives
//! `?difficulty=` style parameters.

use models::{Difficulty, Role};

use url::form_urlencoded::Serializer;

/// A single query value before string coercion.
///
/// Floats are written in plain decimal (`1000000000000000000000`, never `1e21`);
/// non-finite floats are omitted like absent values.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Absent,
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl QueryValue {
    /// String form sent on the wire, or `None` when the key must be omitted.
    pub fn coerce(&self) -> Option<String> {
        match self {
            QueryValue::Absent | QueryValue::Null => None,
            QueryValue::Text(text) if text.is_empty() => None,
            QueryValue::Text(text) => Some(text.clone()),
            QueryValue::Integer(value) => Some(value.to_string()),
            // NaN and infinities have no agreed wire form.
            QueryValue::Float(value) if !value.is_finite() => None,
            QueryValue::Float(value) => Some(value.to_string()),
            QueryValue::Boolean(value) => Some(value.to_string()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Integer(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Boolean(value)
    }
}

impl From<Difficulty> for QueryValue {
    fn from(value: Difficulty) -> Self {
        QueryValue::Text(value.as_str().to_string())
    }
}

impl From<Role> for QueryValue {
    fn from(value: Role) -> Self {
        QueryValue::Text(value.as_str().to_string())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Absent, Into::into)
    }
}

/// Ordered mapping of query keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    entries: Vec<(String, QueryValue)>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`QuerySpec::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Key/value pairs that will be sent, in insertion order.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.coerce().map(|text| (key.as_str(), text)))
            .collect()
    }

    /// True when no key would be sent.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.coerce().is_none())
    }

    /// Encoded query string without the leading `?`, or `None` when nothing is sent.
    pub fn to_query_string(&self) -> Option<String> {
        let pairs = self.pairs();
        if pairs.is_empty() {
            return None;
        }

        let mut serializer = Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, &value);
        }
        Some(serializer.finish())
    }
}

impl<K, V> FromIterator<(K, V)> for QuerySpec
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = QuerySpec::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

/// Typed filter for `GET /tours`.
///
/// Lowers into the backend's bracket operators (`duration[gte]`, `price[lte]`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourFilter {
    pub difficulty: Option<Difficulty>,
    pub duration_gte: Option<u32>,
    pub price_lte: Option<f64>,
    /// Comma separated sort expression, e.g. `-ratingsAverage,price`.
    pub sort: Option<String>,
    /// Comma separated field projection.
    pub fields: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TourFilter {
    pub fn to_query(&self) -> QuerySpec {
        QuerySpec::new()
            .with("difficulty", self.difficulty)
            .with("duration[gte]", self.duration_gte)
            .with("price[lte]", self.price_lte)
            .with("sort", self.sort.as_ref())
            .with("fields", self.fields.as_ref())
            .with("page", self.page)
            .with("limit", self.limit)
    }
}

impl From<&TourFilter> for QuerySpec {
    fn from(filter: &TourFilter) -> Self {
        filter.to_query()
    }
}
