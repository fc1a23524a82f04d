//! Dynamic WHERE clause construction for list queries

use sqlx::Sqlite;
use sqlx::query::{QueryAs, QueryScalar};

type Args<'a> = <Sqlite as sqlx::Database>::Arguments<'a>;

/// Query builder for SQL queries with dynamic WHERE conditions
///
/// Conditions are AND-combined; bindings are applied in the order they were
/// added, so callers add a condition and its values together. Every column
/// filtered on is TEXT, so values are bound as strings.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw condition; bind its placeholders separately
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    pub fn bind_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.bindings.push(value.into());
        self
    }

    /// Substring condition OR-ed across `fields`
    ///
    /// Uses `instr` rather than LIKE so `%` and `_` in `term` stay literal.
    /// Callers pass columns and a term that are already case-folded.
    pub fn add_search_condition(&mut self, fields: &[&str], term: &str) -> &mut Self {
        if fields.is_empty() {
            return self;
        }

        let field_conditions: Vec<String> = fields
            .iter()
            .map(|field| format!("instr({field}, ?) > 0"))
            .collect();
        self.conditions
            .push(format!("({})", field_conditions.join(" OR ")));

        for _ in fields {
            self.bindings.push(term.to_string());
        }
        self
    }

    /// ` WHERE a AND b`, or an empty string without conditions
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    #[cfg(test)]
    fn bindings(&self) -> &[String] {
        &self.bindings
    }

    pub fn apply_bindings_as<'a, O>(
        &self,
        mut query: QueryAs<'a, Sqlite, O, Args<'a>>,
    ) -> QueryAs<'a, Sqlite, O, Args<'a>> {
        for value in &self.bindings {
            query = query.bind(value.clone());
        }
        query
    }

    pub fn apply_bindings_scalar<'a, O>(
        &self,
        mut query: QueryScalar<'a, Sqlite, O, Args<'a>>,
    ) -> QueryScalar<'a, Sqlite, O, Args<'a>> {
        for value in &self.bindings {
            query = query.bind(value.clone());
        }
        query
    }
}
