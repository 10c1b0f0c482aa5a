//! Query filter builder for OpenF1 comparison operators.
//!
//! # Design
//! The upstream API encodes comparisons in the parameter *name*: a request
//! for laps 5 through 10 is `lap_number>=5&lap_number<=10`. `Filter` holds up
//! to four bounds for one field and `Query` collects equality and range
//! constraints in caller order, resolving each entry into plain
//! `(key, value)` string pairs. Bound values are stringified at insertion
//! time, so a bound can be an integer, a float, or a date string alike.
//!
//! A `Filter` with no bounds is a caller bug. `Query::into_pairs` rejects it
//! with `Error::Validation` before any request is issued. Bounds are not
//! cross-checked against each other; `gte(10).lte(5)` is passed through and
//! the API simply matches nothing.

use crate::error::Error;

/// A comparison filter over a single query field.
///
/// Usage:
/// ```
/// use openf1::Filter;
///
/// // Greater than or equal
/// let f = Filter::new().gte(5);
///
/// // Range filter
/// let f = Filter::new().gte(5).lte(10);
///
/// // Date window
/// let f = Filter::new().gt("2023-09-16T13:00:00").lt("2023-09-16T14:00:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    gt: Option<String>,
    gte: Option<String>,
    lt: Option<String>,
    lte: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly greater than `value`.
    pub fn gt(mut self, value: impl ToString) -> Self {
        self.gt = Some(value.to_string());
        self
    }

    /// Greater than or equal to `value`.
    pub fn gte(mut self, value: impl ToString) -> Self {
        self.gte = Some(value.to_string());
        self
    }

    /// Strictly less than `value`.
    pub fn lt(mut self, value: impl ToString) -> Self {
        self.lt = Some(value.to_string());
        self
    }

    /// Less than or equal to `value`.
    pub fn lte(mut self, value: impl ToString) -> Self {
        self.lte = Some(value.to_string());
        self
    }

    /// True if no bound has been set.
    pub fn is_empty(&self) -> bool {
        self.gt.is_none() && self.gte.is_none() && self.lt.is_none() && self.lte.is_none()
    }

    /// Emit one `(key-with-operator, value)` pair per populated bound, in the
    /// canonical order gt, gte, lt, lte.
    fn to_pairs(&self, field: &str) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.gt {
            pairs.push((format!("{field}>"), v.clone()));
        }
        if let Some(v) = &self.gte {
            pairs.push((format!("{field}>="), v.clone()));
        }
        if let Some(v) = &self.lt {
            pairs.push((format!("{field}<"), v.clone()));
        }
        if let Some(v) = &self.lte {
            pairs.push((format!("{field}<="), v.clone()));
        }
        pairs
    }
}

/// A constraint on one field: plain equality or a range of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QueryValue {
    Eq(String),
    Range(Filter),
}

/// An ordered set of query constraints for one API call.
///
/// Usage:
/// ```
/// use openf1::{Filter, Query};
///
/// let query = Query::new()
///     .eq("session_key", 9161)
///     .eq("driver_number", 1)
///     .filter("lap_number", Filter::new().gte(5).lte(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    entries: Vec<(String, QueryValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `field` to exactly `value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.entries
            .push((field.into(), QueryValue::Eq(value.to_string())));
        self
    }

    /// Constrain `field` with a comparison [`Filter`].
    pub fn filter(mut self, field: impl Into<String>, filter: Filter) -> Self {
        self.entries
            .push((field.into(), QueryValue::Range(filter)));
        self
    }

    /// True if no constraint has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the query into flat `(key, value)` pairs, preserving caller
    /// order across fields.
    pub(crate) fn into_pairs(self) -> Result<Vec<(String, String)>, Error> {
        let mut pairs = Vec::new();
        for (field, value) in self.entries {
            match value {
                QueryValue::Eq(v) => pairs.push((field, v)),
                QueryValue::Range(f) => {
                    if f.is_empty() {
                        return Err(Error::Validation(format!(
                            "filter on `{field}` has no bounds set"
                        )));
                    }
                    pairs.extend(f.to_pairs(&field));
                }
            }
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: Query) -> Vec<(String, String)> {
        query.into_pairs().unwrap()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn gt_emits_suffix() {
        let f = Filter::new().gt(5);
        assert_eq!(f.to_pairs("speed"), vec![pair("speed>", "5")]);
    }

    #[test]
    fn gte_emits_suffix() {
        let f = Filter::new().gte(10);
        assert_eq!(f.to_pairs("lap_number"), vec![pair("lap_number>=", "10")]);
    }

    #[test]
    fn lt_emits_suffix() {
        let f = Filter::new().lt(100);
        assert_eq!(f.to_pairs("speed"), vec![pair("speed<", "100")]);
    }

    #[test]
    fn lte_emits_suffix() {
        let f = Filter::new().lte(50);
        assert_eq!(f.to_pairs("lap_number"), vec![pair("lap_number<=", "50")]);
    }

    #[test]
    fn range_emits_both_bounds_in_order() {
        let f = Filter::new().gte(5).lte(10);
        assert_eq!(
            f.to_pairs("lap_number"),
            vec![pair("lap_number>=", "5"), pair("lap_number<=", "10")]
        );
    }

    #[test]
    fn all_operators_emit_canonical_order() {
        // Set in scrambled order; emission order stays gt, gte, lt, lte.
        let f = Filter::new().lte(9).gt(1).lt(10).gte(2);
        assert_eq!(
            f.to_pairs("x"),
            vec![
                pair("x>", "1"),
                pair("x>=", "2"),
                pair("x<", "10"),
                pair("x<=", "9"),
            ]
        );
    }

    #[test]
    fn float_value_is_stringified() {
        let f = Filter::new().gte(1.5);
        assert_eq!(f.to_pairs("temp"), vec![pair("temp>=", "1.5")]);
    }

    #[test]
    fn string_value_passes_through() {
        let f = Filter::new().gte("2023-01-01");
        assert_eq!(f.to_pairs("date"), vec![pair("date>=", "2023-01-01")]);
    }

    #[test]
    fn empty_filter_reports_empty() {
        assert!(Filter::new().is_empty());
        assert!(!Filter::new().gt(0).is_empty());
    }

    #[test]
    fn simple_equality() {
        let p = pairs(Query::new().eq("session_key", 9161).eq("driver_number", 1));
        assert_eq!(
            p,
            vec![pair("session_key", "9161"), pair("driver_number", "1")]
        );
    }

    #[test]
    fn filter_value_expands_inline() {
        let p = pairs(
            Query::new()
                .eq("session_key", 9161)
                .filter("lap_number", Filter::new().gte(5).lte(10)),
        );
        assert_eq!(
            p,
            vec![
                pair("session_key", "9161"),
                pair("lap_number>=", "5"),
                pair("lap_number<=", "10"),
            ]
        );
    }

    #[test]
    fn mixed_constraints_preserve_caller_order() {
        let p = pairs(
            Query::new()
                .eq("session_key", 9161)
                .filter("speed", Filter::new().gte(300))
                .eq("driver_number", 1),
        );
        assert_eq!(
            p,
            vec![
                pair("session_key", "9161"),
                pair("speed>=", "300"),
                pair("driver_number", "1"),
            ]
        );
    }

    #[test]
    fn empty_query_emits_nothing() {
        assert_eq!(pairs(Query::new()), Vec::<(String, String)>::new());
        assert!(Query::new().is_empty());
    }

    #[test]
    fn empty_filter_fails_validation() {
        let err = Query::new()
            .filter("lap_number", Filter::new())
            .into_pairs()
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("lap_number"));
    }
}
