//! Query string parameters for list endpoints

use indexmap::IndexMap;

/// Single query value; the backend accepts strings and numbers
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryValue::Text(s) => write!(f, "{}", s),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<i32> for QueryValue {
    fn from(n: i32) -> Self {
        QueryValue::Int(n as i64)
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Int(n as i64)
    }
}

impl From<f64> for QueryValue {
    fn from(n: f64) -> Self {
        QueryValue::Float(n)
    }
}

/// Ordered `name → value` mapping serialized into the query string.
///
/// An empty mapping means "no filter"; insertion order is kept so the
/// generated URL is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(IndexMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<QueryValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn with_opt<V: Into<QueryValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn insert(&mut self, name: &str, value: impl Into<QueryValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl<K: AsRef<str>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k.as_ref(), v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_values_keep_order() {
        let params = QueryParams::new()
            .with("search", "laptop")
            .with("page", 2)
            .with_opt::<i64>("opd_id", None)
            .with("ratio", 0.5);

        assert_eq!(
            params.to_pairs(),
            vec![
                ("search".to_string(), "laptop".to_string()),
                ("page".to_string(), "2".to_string()),
                ("ratio".to_string(), "0.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_reinsert_overwrites() {
        let params: QueryParams = [("page", 1), ("page", 3)].into_iter().collect();
        assert_eq!(params.to_pairs(), vec![("page".to_string(), "3".to_string())]);
    }
}
