use serde::Deserialize;

/// A list response. The backend returns either a bare array or, when
/// pagination is enabled, a `{count, next, previous, results}` envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Page<T> {
    Plain(Vec<T>),
    Paginated {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<T>,
    },
}

impl<T> Page<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Page::Paginated { results, .. } => results,
            Page::Plain(items) => items,
        }
    }

    /// Total number of records on the server, when known.
    pub fn total(&self) -> usize {
        match self {
            Page::Paginated { count, .. } => *count as usize,
            Page::Plain(items) => items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_and_paginated_lists() {
        let plain: Page<u32> = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(plain.total(), 3);
        assert_eq!(plain.into_items(), vec![1, 2, 3]);

        let paged: Page<u32> = serde_json::from_value(json!({
            "count": 40,
            "next": "http://localhost:8000/api/users/?page=2",
            "previous": null,
            "results": [1, 2]
        }))
        .unwrap();
        assert_eq!(paged.total(), 40);
        assert_eq!(paged.into_items(), vec![1, 2]);
    }
}
