use rayon::prelude::*;
use std::collections::HashSet;

/// A haystack or extraction result: one string, or an arbitrarily nested
/// sequence of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<Value>),
}

impl Value {
    /// Apply `transform` to every leaf scalar, recursing through nested
    /// sequences. Sequence elements are mapped in parallel; output order
    /// matches input order.
    pub fn map<F>(self, transform: &F) -> Value
    where
        F: Fn(&str) -> Value + Sync,
    {
        match self {
            Value::Scalar(text) => transform(&text),
            Value::Sequence(items) => Value::Sequence(
                items
                    .into_par_iter()
                    .map(|item| item.map(transform))
                    .collect(),
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Value::Scalar(text) => text.is_empty(),
            Value::Sequence(items) => items.is_empty(),
        }
    }

    pub fn scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(text) => Some(text),
            Value::Sequence(_) => None,
        }
    }

    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::Scalar(_) => None,
            Value::Sequence(items) => Some(items),
        }
    }

    /// First non-empty element of a sequence; scalars pass through.
    pub fn first_non_empty(self) -> Value {
        match self {
            Value::Sequence(items) => items
                .into_iter()
                .find(|item| !item.is_empty())
                .unwrap_or(Value::Scalar(String::new())),
            scalar => scalar,
        }
    }

    /// Shortest element of a sequence, earlier elements winning ties.
    pub fn shortest(self) -> Value {
        match self {
            Value::Sequence(items) => items
                .into_iter()
                .reduce(|best, next| {
                    if next.weight() < best.weight() {
                        next
                    } else {
                        best
                    }
                })
                .unwrap_or(Value::Scalar(String::new())),
            scalar => scalar,
        }
    }

    fn weight(&self) -> usize {
        match self {
            Value::Scalar(text) => text.len(),
            Value::Sequence(items) => items.len(),
        }
    }

    /// Drop empty elements from a sequence.
    pub fn remove_empty(self) -> Value {
        match self {
            Value::Sequence(items) => {
                Value::Sequence(items.into_iter().filter(|item| !item.is_empty()).collect())
            }
            scalar => scalar,
        }
    }

    /// Drop duplicate elements, keeping first occurrences in order.
    pub fn unique(self) -> Value {
        match self {
            Value::Sequence(items) => {
                let mut seen = HashSet::new();
                Value::Sequence(
                    items
                        .into_iter()
                        .filter(|item| seen.insert(item.clone()))
                        .collect(),
                )
            }
            scalar => scalar,
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Scalar(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(text.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(texts: Vec<String>) -> Self {
        Value::Sequence(texts.into_iter().map(Value::Scalar).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(texts: Vec<&str>) -> Self {
        Value::Sequence(texts.into_iter().map(Value::from).collect())
    }
}
