//! Translation of typed filter values into SeaORM conditions.

use sea_orm::{sea_query::LikeExpr, ColumnTrait, Condition, Value};

/// Escape character of every `LIKE` pattern built here.
const LIKE_ESCAPE: char = '\\';

/// Accumulates the `WHERE` clause of a list query.
///
/// Every method takes an optional value and only constrains the query when the value is
/// present, so a filter struct can be applied field by field without branching.
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    condition: Condition,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
        }
    }

    /// Adds `column = value` when `value` is present.
    pub fn eq<C, V>(mut self, column: C, value: Option<V>) -> Self
    where
        C: ColumnTrait,
        V: Into<Value>,
    {
        if let Some(value) = value {
            self.condition = self.condition.add(column.eq(value));
        }
        self
    }

    /// Adds a substring match of `term` against any of `columns`.
    ///
    /// Blank terms are ignored. `%` and `_` in the term match literally. SQLite's `LIKE`
    /// compares ASCII letters without regard to case, so `justice` matches `Justice`.
    pub fn search<C>(mut self, columns: &[C], term: Option<&str>) -> Self
    where
        C: ColumnTrait,
    {
        let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
            return self;
        };
        if columns.is_empty() {
            return self;
        }

        let pattern = format!("%{}%", escape_like(term));
        let any = columns.iter().fold(Condition::any(), |any, column| {
            any.add(column.like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)))
        });
        self.condition = self.condition.add(any);
        self
    }

    /// Restricts the query to rows whose `column` is one of `ids`.
    pub fn id_in<C>(mut self, column: C, ids: Vec<i32>) -> Self
    where
        C: ColumnTrait,
    {
        self.condition = self.condition.add(column.is_in(ids));
        self
    }

    pub fn build(self) -> Condition {
        self.condition
    }
}

/// Escapes the `LIKE` wildcards and the escape character itself.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Parses a comma separated tag list from a query string.
///
/// Tags are trimmed and lowercased; empty entries and duplicates are dropped. Returns
/// `None` when no usable tag remains so the tag filter is skipped entirely.
pub fn parse_tags(raw: Option<&str>) -> Option<Vec<String>> {
    let tags = normalize_tags(raw?.split(','));
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

/// Normalizes a list of tags for storage or matching.
pub fn normalize_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}
