//! # Queries
//!
//! A [`Query`] is the table-scoped `select(filter, order, limit)` of the store: a row predicate,
//! an optional comparator and an optional row limit. Predicates are plain closures so callers can
//! filter on any column.
//!
//! ```rust
//! use dishpatch::framework::Query;
//!
//! #[derive(Clone, Debug)]
//! struct Row { rating: f64, active: bool }
//!
//! let query = Query::<Row>::all()
//!     .filter(|r| r.active)
//!     .order_by_desc(|a, b| a.rating.total_cmp(&b.rating))
//!     .limit(10);
//! # let _ = query;
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Shared row predicate.
pub type Filter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Shared row comparator.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Builds a [`Filter`] from a closure.
pub fn filter<T>(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Filter<T> {
    Arc::new(predicate)
}

pub struct Query<T> {
    filter: Option<Filter<T>>,
    order: Option<Comparator<T>>,
    limit: Option<usize>,
}

impl<T: 'static> Query<T> {
    /// Every row, unordered.
    pub fn all() -> Self {
        Self {
            filter: None,
            order: None,
            limit: None,
        }
    }

    /// Adds a predicate. Calling it twice keeps rows matching both.
    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        let combined: Filter<T> = match self.filter.take() {
            Some(previous) => Arc::new(move |row: &T| previous(row) && predicate(row)),
            None => Arc::new(predicate),
        };
        self.filter = Some(combined);
        self
    }

    /// Same as [`Query::filter`] for an already shared predicate.
    pub fn with_filter(self, predicate: Filter<T>) -> Self {
        self.filter(move |row| predicate(row))
    }

    pub fn order_by(mut self, cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.order = Some(Arc::new(cmp));
        self
    }

    pub fn order_by_desc(
        mut self,
        cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.order = Some(Arc::new(move |a: &T, b: &T| cmp(b, a)));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, row: &T) -> bool {
        self.filter.as_ref().map_or(true, |f| f(row))
    }

    /// Applies the query to a set of rows.
    pub fn apply<'a, I>(&self, rows: I) -> Vec<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        let mut selected: Vec<T> = rows
            .into_iter()
            .filter(|row| self.matches(row))
            .cloned()
            .collect();
        if let Some(cmp) = &self.order {
            selected.sort_by(|a, b| cmp(a, b));
        }
        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            order: self.order.clone(),
            limit: self.limit,
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("ordered", &self.order.is_some())
            .field("limit", &self.limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        rating: f64,
        active: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "a", rating: 3.5, active: true },
            Row { name: "b", rating: 4.8, active: true },
            Row { name: "c", rating: 4.9, active: false },
            Row { name: "d", rating: 4.1, active: true },
        ]
    }

    #[test]
    fn test_filter_order_and_limit() {
        let query = Query::all()
            .filter(|r: &Row| r.active)
            .order_by_desc(|a, b| a.rating.total_cmp(&b.rating))
            .limit(2);

        let names: Vec<_> = query.apply(&rows()).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn test_filters_compose() {
        let query = Query::all()
            .filter(|r: &Row| r.active)
            .filter(|r: &Row| r.rating > 4.0);

        let names: Vec<_> = query.apply(&rows()).into_iter().map(|r| r.name).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"b"));
        assert!(names.contains(&"d"));
    }
}
