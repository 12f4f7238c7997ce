//! Textual filter expressions scoping query, search, update and delete calls.
//!
//! The condition string is opaque to the client: it is forwarded verbatim to
//! the service, which is the sole judge of its semantics. Composition only
//! ever appends to the existing condition.

use std::sync::RwLock;

/// A boolean predicate over document fields.
///
/// Reads of the condition may proceed in parallel; each composition call
/// takes the write lock, so two concurrent compositions serialize and never
/// interleave their output.
///
/// ```
/// use vectordb_client::Filter;
///
/// let filter = Filter::new("bookName=\"dream\"");
/// filter.and(&Filter::is_in("page", &[21u64, 22]));
/// assert_eq!(filter.cond(), "bookName=\"dream\" and (page in (21,22))");
/// ```
#[derive(Debug, Default)]
pub struct Filter {
    cond: RwLock<String>,
}

impl Filter {
    pub fn new(cond: impl Into<String>) -> Self {
        Self {
            cond: RwLock::new(cond.into()),
        }
    }

    /// Snapshot of the current condition string.
    pub fn cond(&self) -> String {
        self.cond.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn assembly_cond(&self, condition: &str, connective: &str) -> &Self {
        let mut cond = self.cond.write().unwrap_or_else(|e| e.into_inner());
        *cond = format!("{cond} {connective} ({condition})");
        self
    }

    pub fn and(&self, condition: &str) -> &Self {
        self.assembly_cond(condition, "and")
    }

    pub fn or(&self, condition: &str) -> &Self {
        self.assembly_cond(condition, "or")
    }

    pub fn and_not(&self, condition: &str) -> &Self {
        self.assembly_cond(condition, "and not")
    }

    pub fn or_not(&self, condition: &str) -> &Self {
        self.assembly_cond(condition, "or not")
    }

    /// `<key> in (<v1>,<v2>,...)`; empty list yields an empty expression.
    pub fn is_in<T: FilterValue>(key: &str, list: &[T]) -> String {
        assembly_filter_expr(key, list, "in")
    }

    /// `<key> not in (<v1>,<v2>,...)`.
    pub fn not_in<T: FilterValue>(key: &str, list: &[T]) -> String {
        assembly_filter_expr(key, list, "not in")
    }

    /// `<key> include (<v1>,<v2>,...)` - array field contains any value.
    pub fn include<T: FilterValue>(key: &str, list: &[T]) -> String {
        assembly_filter_expr(key, list, "include")
    }

    /// `<key> exclude (<v1>,<v2>,...)` - array field contains no value.
    pub fn exclude<T: FilterValue>(key: &str, list: &[T]) -> String {
        assembly_filter_expr(key, list, "exclude")
    }

    /// `<key> include all (<v1>,<v2>,...)` - array field contains every value.
    pub fn include_all<T: FilterValue>(key: &str, list: &[T]) -> String {
        assembly_filter_expr(key, list, "include all")
    }
}

impl Clone for Filter {
    fn clone(&self) -> Self {
        Filter::new(self.cond())
    }
}

impl From<&Filter> for String {
    fn from(filter: &Filter) -> Self {
        filter.cond()
    }
}

/// A value that can appear in a set-membership expression. Text is quoted,
/// numbers are written bare.
pub trait FilterValue {
    fn write_literal(&self, out: &mut String);
}

impl FilterValue for &str {
    fn write_literal(&self, out: &mut String) {
        out.push('"');
        out.push_str(self);
        out.push('"');
    }
}

impl FilterValue for String {
    fn write_literal(&self, out: &mut String) {
        self.as_str().write_literal(out);
    }
}

macro_rules! numeric_filter_value {
    ($($ty:ty),*) => {
        $(impl FilterValue for $ty {
            fn write_literal(&self, out: &mut String) {
                out.push_str(&self.to_string());
            }
        })*
    };
}

numeric_filter_value!(u32, u64, i32, i64, f32, f64);

fn assembly_filter_expr<T: FilterValue>(key: &str, list: &[T], operation: &str) -> String {
    if list.is_empty() {
        return String::new();
    }
    let mut expr = format!("{key} {operation} (");
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            expr.push(',');
        }
        item.write_literal(&mut expr);
    }
    expr.push(')');
    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn empty_condition() {
        assert_eq!(Filter::default().cond(), "");
    }

    #[test]
    fn and_wraps_the_new_condition() {
        let filter = Filter::new("key1 = \"value1\"");
        filter.and("key2 = \"value2\"");
        assert_eq!(filter.cond(), "key1 = \"value1\" and (key2 = \"value2\")");
    }

    #[test]
    fn or_wraps_the_new_condition() {
        let filter = Filter::new("a");
        filter.or("b");
        assert_eq!(filter.cond(), "a or (b)");
    }

    #[test]
    fn negated_connectives() {
        let filter = Filter::new("a");
        filter.and_not("b");
        assert_eq!(filter.cond(), "a and not (b)");

        let filter = Filter::new("a");
        filter.or_not("b");
        assert_eq!(filter.cond(), "a or not (b)");
    }

    #[test]
    fn chained_composition_appends() {
        let filter = Filter::new("a");
        filter.and("b").or("c");
        assert_eq!(filter.cond(), "a and (b) or (c)");
    }

    #[test]
    fn in_quotes_text_values() {
        let values = ["value1".to_string(), "value2".to_string(), "value3".to_string()];
        assert_eq!(
            Filter::is_in("key1", &values),
            "key1 in (\"value1\",\"value2\",\"value3\")"
        );
    }

    #[test]
    fn not_in_substitutes_the_operator() {
        assert_eq!(
            Filter::not_in("key1", &["value1", "value2"]),
            "key1 not in (\"value1\",\"value2\")"
        );
    }

    #[test]
    fn include_exclude_include_all() {
        assert_eq!(
            Filter::include("key1", &["value1", "value2"]),
            "key1 include (\"value1\",\"value2\")"
        );
        assert_eq!(
            Filter::exclude("key1", &["value1", "value2"]),
            "key1 exclude (\"value1\",\"value2\")"
        );
        assert_eq!(
            Filter::include_all("key1", &["value1", "value2"]),
            "key1 include all (\"value1\",\"value2\")"
        );
    }

    #[test]
    fn numeric_values_are_unquoted() {
        assert_eq!(Filter::is_in("page", &[21u64, 22, 23]), "page in (21,22,23)");
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let none: [&str; 0] = [];
        assert_eq!(Filter::is_in("key1", &none), "");
        assert_eq!(Filter::include_all("key1", &none), "");
    }

    #[test]
    fn concurrent_composition_never_interleaves() {
        let filter = Arc::new(Filter::new("seed"));
        let left = Arc::clone(&filter);
        let right = Arc::clone(&filter);
        let a = std::thread::spawn(move || {
            left.and("alpha = 1");
        });
        let b = std::thread::spawn(move || {
            right.or("beta = 2");
        });
        a.join().unwrap();
        b.join().unwrap();

        let cond = filter.cond();
        let serialized = [
            "seed and (alpha = 1) or (beta = 2)",
            "seed or (beta = 2) and (alpha = 1)",
        ];
        assert!(serialized.contains(&cond.as_str()), "got {cond:?}");
    }
}
