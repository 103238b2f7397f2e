//! Shared WHERE clause builder with nested groups.

use super::traits::SqlBuilder;
use crate::condition::{Conjunction, Operator};
use crate::error::{SelqError, SelqResult};
use crate::ident::write_quoted;
use crate::value::Value;

/// One rendered condition plus the conjunction joining it to its predecessor.
///
/// The conjunction of the first predicate in a builder is stored but never
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    text: String,
    conjunction: Conjunction,
}

impl Predicate {
    /// Rendered condition text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Conjunction joining this predicate to the previous one.
    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }
}

/// Ordered accumulator of WHERE predicates.
///
/// Predicates render in insertion order. Nested groups are built by a fresh
/// `WhereBuilder`, rendered immediately and stored as a single parenthesized
/// predicate, so no child builder outlives the call that created it.
///
/// # Example
/// ```
/// use selq::builder::WhereBuilder;
///
/// let mut wb = WhereBuilder::new();
/// wb.and_where("id", 1)?
///     .or_where_nested(|w| {
///         w.and_where("status", "active")?.and_where_null("deleted_at")?;
///         Ok(())
///     })?;
/// assert_eq!(
///     wb.build_clause(),
///     r#""id" = 1 or ("status" = 'active' and "deleted_at" is null)"#
/// );
/// # Ok::<(), selq::SelqError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhereBuilder {
    predicates: Vec<Predicate>,
}

impl WhereBuilder {
    /// Create a new, empty WhereBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any predicates have been added.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Number of top-level predicates (a nested group counts once).
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Predicates in insertion (render) order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    fn push(&mut self, conjunction: Conjunction, text: String) -> &mut Self {
        self.predicates.push(Predicate { text, conjunction });
        self
    }

    // ==================== Generic forms ====================

    /// Add `"column" <op> <value>` joined by `conjunction`.
    pub fn add_comparison(
        &mut self,
        conjunction: Conjunction,
        column: &str,
        op: Operator,
        value: impl Into<Value>,
    ) -> SelqResult<&mut Self> {
        if column.is_empty() {
            return Err(SelqError::missing("Column name and value are required"));
        }

        let value = value.into();
        let mut text = String::with_capacity(column.len() + op.as_str().len() + 8);
        write_quoted(&mut text, column);
        text.push(' ');
        text.push_str(op.as_str());
        text.push(' ');
        value.write_sql(&mut text)?;

        Ok(self.push(conjunction, text))
    }

    /// Add `"column" in (v1, v2, ...)` joined by `conjunction`.
    pub fn add_in<I>(
        &mut self,
        conjunction: Conjunction,
        column: &str,
        values: I,
    ) -> SelqResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if column.is_empty() {
            return Err(SelqError::missing("Column name and values are required"));
        }

        let mut list = String::new();
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                list.push_str(", ");
            }
            value.into().write_sql(&mut list)?;
        }
        if list.is_empty() {
            return Err(SelqError::missing("Column name and values are required"));
        }

        let mut text = String::with_capacity(column.len() + list.len() + 8);
        write_quoted(&mut text, column);
        text.push_str(" in (");
        text.push_str(&list);
        text.push(')');

        Ok(self.push(conjunction, text))
    }

    /// Add `"column" is null` joined by `conjunction`.
    pub fn add_null(&mut self, conjunction: Conjunction, column: &str) -> SelqResult<&mut Self> {
        if column.is_empty() {
            return Err(SelqError::missing("Column name is required"));
        }

        let mut text = String::with_capacity(column.len() + 10);
        write_quoted(&mut text, column);
        text.push_str(" is null");

        Ok(self.push(conjunction, text))
    }

    /// Add a parenthesized group configured by `configure`.
    ///
    /// The closure receives a fresh builder; its first predicate's conjunction
    /// is dropped like at the top level, while `conjunction` joins the whole
    /// group to this builder. An error from the closure is returned as-is and
    /// nothing is appended. A group left empty by the closure renders as `()`.
    pub fn add_nested<F>(&mut self, conjunction: Conjunction, configure: F) -> SelqResult<&mut Self>
    where
        F: FnOnce(&mut WhereBuilder) -> SelqResult<()>,
    {
        let mut nested = WhereBuilder::new();
        configure(&mut nested)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            conjunction = %conjunction,
            predicates = nested.len(),
            "composed nested where group"
        );

        let mut text = String::with_capacity(nested.rendered_len() + 2);
        text.push('(');
        nested.write_clause(&mut text);
        text.push(')');

        Ok(self.push(conjunction, text))
    }

    // ==================== AND / OR forms ====================

    /// Add AND equality condition.
    pub fn and_where(&mut self, column: &str, value: impl Into<Value>) -> SelqResult<&mut Self> {
        self.add_comparison(Conjunction::And, column, Operator::Eq, value)
    }

    /// Add OR equality condition.
    pub fn or_where(&mut self, column: &str, value: impl Into<Value>) -> SelqResult<&mut Self> {
        self.add_comparison(Conjunction::Or, column, Operator::Eq, value)
    }

    /// Add AND condition with an explicit operator.
    pub fn and_where_op(
        &mut self,
        column: &str,
        op: Operator,
        value: impl Into<Value>,
    ) -> SelqResult<&mut Self> {
        self.add_comparison(Conjunction::And, column, op, value)
    }

    /// Add OR condition with an explicit operator.
    pub fn or_where_op(
        &mut self,
        column: &str,
        op: Operator,
        value: impl Into<Value>,
    ) -> SelqResult<&mut Self> {
        self.add_comparison(Conjunction::Or, column, op, value)
    }

    /// Add AND IN (...) condition.
    pub fn and_where_in<I>(&mut self, column: &str, values: I) -> SelqResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.add_in(Conjunction::And, column, values)
    }

    /// Add OR IN (...) condition.
    pub fn or_where_in<I>(&mut self, column: &str, values: I) -> SelqResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.add_in(Conjunction::Or, column, values)
    }

    /// Add AND IS NULL condition.
    pub fn and_where_null(&mut self, column: &str) -> SelqResult<&mut Self> {
        self.add_null(Conjunction::And, column)
    }

    /// Add OR IS NULL condition.
    pub fn or_where_null(&mut self, column: &str) -> SelqResult<&mut Self> {
        self.add_null(Conjunction::Or, column)
    }

    /// Add an AND-joined nested group.
    pub fn and_where_nested<F>(&mut self, configure: F) -> SelqResult<&mut Self>
    where
        F: FnOnce(&mut WhereBuilder) -> SelqResult<()>,
    {
        self.add_nested(Conjunction::And, configure)
    }

    /// Add an OR-joined nested group.
    pub fn or_where_nested<F>(&mut self, configure: F) -> SelqResult<&mut Self>
    where
        F: FnOnce(&mut WhereBuilder) -> SelqResult<()>,
    {
        self.add_nested(Conjunction::Or, configure)
    }

    // ==================== Rendering ====================

    /// Build the WHERE clause string (without "where" prefix).
    ///
    /// Returns an empty string when no predicates exist.
    pub fn build_clause(&self) -> String {
        let mut out = String::with_capacity(self.rendered_len());
        self.write_clause(&mut out);
        out
    }

    pub(crate) fn write_clause(&self, out: &mut String) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(predicate.conjunction.as_str());
                out.push(' ');
            }
            out.push_str(&predicate.text);
        }
    }

    /// Exact byte length of [`Self::build_clause`].
    pub(crate) fn rendered_len(&self) -> usize {
        self.predicates
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i > 0 {
                    p.text.len() + p.conjunction.as_str().len() + 2
                } else {
                    p.text.len()
                }
            })
            .sum()
    }
}

impl SqlBuilder for WhereBuilder {
    fn build_sql(&self) -> String {
        self.build_clause()
    }
}
