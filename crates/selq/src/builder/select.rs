use super::traits::SqlBuilder;
use super::where_builder::WhereBuilder;
use crate::condition::{Direction, JoinType, Operator};
use crate::error::{SelqError, SelqResult};
use crate::ident::{IntoColumnList, quote_ident, write_quoted};
use crate::value::Value;
use std::fmt;

#[cfg(feature = "tracing")]
const MAX_LOGGED_SQL: usize = 200;

/// One ORDER BY entry: quoted columns sharing a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub columns: Vec<String>,
    pub direction: Direction,
}

/// JOIN description.
///
/// `table` defaults to the statement's own table, `target_column` to
/// `column` and `operator` to `=`.
///
/// # Example
/// ```
/// use selq::{Join, SelectBuilder};
///
/// let mut qb = SelectBuilder::new("users")?;
/// qb.left_join(Join::new("id", "posts").target_column("user_id"));
/// assert_eq!(
///     qb.build().sql(),
///     r#"select * from "users" left join "posts" on "users"."id" = "posts"."user_id""#
/// );
/// # Ok::<(), selq::SelqError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    column: String,
    target_table: String,
    table: Option<String>,
    operator: Option<Operator>,
    target_column: Option<String>,
}

impl Join {
    /// Join `target_table` on `column` of the source table.
    pub fn new(column: impl Into<String>, target_table: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            target_table: target_table.into(),
            table: None,
            operator: None,
            target_column: None,
        }
    }

    /// Source table (defaults to the statement's table).
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Comparison operator in the ON condition (defaults to `=`).
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Column on the joined table (defaults to the source column).
    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    fn render(&self, join_type: JoinType, default_table: &str) -> String {
        let table = self.table.as_deref().unwrap_or(default_table);
        let target_column = self.target_column.as_deref().unwrap_or(&self.column);
        let operator = self.operator.unwrap_or(Operator::Eq);

        let mut out = String::with_capacity(
            32 + table.len() + 2 * self.target_table.len() + self.column.len() + target_column.len(),
        );
        out.push_str(join_type.as_str());
        out.push_str(" join ");
        write_quoted(&mut out, &self.target_table);
        out.push_str(" on ");
        write_quoted(&mut out, table);
        out.push('.');
        write_quoted(&mut out, &self.column);
        out.push(' ');
        out.push_str(operator.as_str());
        out.push(' ');
        write_quoted(&mut out, &self.target_table);
        out.push('.');
        write_quoted(&mut out, target_column);
        out
    }
}

/// Structured SELECT statement builder.
///
/// Values are rendered inline as literals; see [`crate::value`].
///
/// # Example
/// ```
/// use selq::{Direction, SelectBuilder};
///
/// let mut qb = SelectBuilder::new("users")?;
/// qb.select(["id", "name"])
///     .and_where("is_active", true)?
///     .order_by("id", Direction::Desc)
///     .limit(10)?;
/// assert_eq!(
///     qb.build().sql(),
///     r#"select id, name from "users" where "is_active" = true order by "id" desc limit 10"#
/// );
/// # Ok::<(), selq::SelqError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    /// Main table (unquoted)
    table: String,
    /// SELECT columns (default ["*"])
    select_cols: Vec<String>,
    /// Render `count(*)` and drop ORDER BY / LIMIT / OFFSET
    is_count: bool,
    /// WHERE predicates
    where_builder: WhereBuilder,
    /// Rendered JOIN clauses
    join_clauses: Vec<String>,
    /// ORDER BY entries
    order_clauses: Vec<OrderBy>,
    /// LIMIT
    limit: Option<u64>,
    /// OFFSET
    offset: Option<u64>,
}

/// Alias kept for callers that think in statements rather than builders.
pub type Statement = SelectBuilder;

impl SelectBuilder {
    /// Create a new builder for `table`.
    pub fn new(table: &str) -> SelqResult<Self> {
        if table.is_empty() {
            return Err(SelqError::missing("Table name is required"));
        }

        Ok(Self {
            table: table.to_string(),
            select_cols: vec!["*".to_string()],
            is_count: false,
            where_builder: WhereBuilder::new(),
            join_clauses: Vec::new(),
            order_clauses: Vec::new(),
            limit: None,
            offset: None,
        })
    }

    /// Main table name, unquoted.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Set SELECT columns. Names are written as given, without quoting.
    ///
    /// An empty list resets to `*`.
    pub fn select(&mut self, fields: impl IntoColumnList) -> &mut Self {
        let fields = fields.into_column_list();
        self.select_cols = if fields.is_empty() {
            vec!["*".to_string()]
        } else {
            fields
        };
        self
    }

    /// Reset SELECT columns to `*`.
    pub fn select_all(&mut self) -> &mut Self {
        self.select_cols = vec!["*".to_string()];
        self
    }

    /// Switch to `count(*)` mode.
    ///
    /// The field list, ORDER BY, LIMIT and OFFSET are kept but not rendered.
    pub fn count(&mut self) -> &mut Self {
        self.is_count = true;
        self
    }

    /// Check if count mode is on.
    pub fn is_count(&self) -> bool {
        self.is_count
    }

    /// The WHERE predicates collected so far.
    pub fn where_builder(&self) -> &WhereBuilder {
        &self.where_builder
    }

    // ==================== Conditions ====================

    /// Add AND equality condition.
    pub fn and_where(&mut self, column: &str, value: impl Into<Value>) -> SelqResult<&mut Self> {
        self.where_builder.and_where(column, value)?;
        Ok(self)
    }

    /// Add OR equality condition.
    pub fn or_where(&mut self, column: &str, value: impl Into<Value>) -> SelqResult<&mut Self> {
        self.where_builder.or_where(column, value)?;
        Ok(self)
    }

    /// Add AND condition with an explicit operator.
    pub fn and_where_op(
        &mut self,
        column: &str,
        op: Operator,
        value: impl Into<Value>,
    ) -> SelqResult<&mut Self> {
        self.where_builder.and_where_op(column, op, value)?;
        Ok(self)
    }

    /// Add OR condition with an explicit operator.
    pub fn or_where_op(
        &mut self,
        column: &str,
        op: Operator,
        value: impl Into<Value>,
    ) -> SelqResult<&mut Self> {
        self.where_builder.or_where_op(column, op, value)?;
        Ok(self)
    }

    /// Add AND IN (...) condition.
    pub fn and_where_in<I>(&mut self, column: &str, values: I) -> SelqResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.where_builder.and_where_in(column, values)?;
        Ok(self)
    }

    /// Add OR IN (...) condition.
    pub fn or_where_in<I>(&mut self, column: &str, values: I) -> SelqResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.where_builder.or_where_in(column, values)?;
        Ok(self)
    }

    /// Add AND IS NULL condition.
    pub fn and_where_null(&mut self, column: &str) -> SelqResult<&mut Self> {
        self.where_builder.and_where_null(column)?;
        Ok(self)
    }

    /// Add OR IS NULL condition.
    pub fn or_where_null(&mut self, column: &str) -> SelqResult<&mut Self> {
        self.where_builder.or_where_null(column)?;
        Ok(self)
    }

    /// Add an AND-joined nested group.
    pub fn and_where_nested<F>(&mut self, configure: F) -> SelqResult<&mut Self>
    where
        F: FnOnce(&mut WhereBuilder) -> SelqResult<()>,
    {
        self.where_builder.and_where_nested(configure)?;
        Ok(self)
    }

    /// Add an OR-joined nested group.
    pub fn or_where_nested<F>(&mut self, configure: F) -> SelqResult<&mut Self>
    where
        F: FnOnce(&mut WhereBuilder) -> SelqResult<()>,
    {
        self.where_builder.or_where_nested(configure)?;
        Ok(self)
    }

    // ==================== Joins ====================

    /// Add a JOIN of the given type.
    pub fn join(&mut self, join_type: JoinType, join: Join) -> &mut Self {
        let clause = join.render(join_type, &self.table);
        self.join_clauses.push(clause);
        self
    }

    /// Add INNER JOIN.
    pub fn inner_join(&mut self, join: Join) -> &mut Self {
        self.join(JoinType::Inner, join)
    }

    /// Add LEFT JOIN.
    pub fn left_join(&mut self, join: Join) -> &mut Self {
        self.join(JoinType::Left, join)
    }

    /// Add RIGHT JOIN.
    pub fn right_join(&mut self, join: Join) -> &mut Self {
        self.join(JoinType::Right, join)
    }

    /// Add FULL JOIN.
    pub fn full_join(&mut self, join: Join) -> &mut Self {
        self.join(JoinType::Full, join)
    }

    // ==================== Ordering & pagination ====================

    /// Append an ORDER BY entry; every column is quoted.
    pub fn order_by(&mut self, columns: impl IntoColumnList, direction: Direction) -> &mut Self {
        let columns = columns
            .into_column_list()
            .iter()
            .map(|c| quote_ident(c))
            .collect();
        self.order_clauses.push(OrderBy { columns, direction });
        self
    }

    /// Append an ascending ORDER BY entry.
    pub fn order_by_asc(&mut self, columns: impl IntoColumnList) -> &mut Self {
        self.order_by(columns, Direction::Asc)
    }

    /// Append a descending ORDER BY entry.
    pub fn order_by_desc(&mut self, columns: impl IntoColumnList) -> &mut Self {
        self.order_by(columns, Direction::Desc)
    }

    /// Set LIMIT. Zero is rejected.
    pub fn limit(&mut self, limit: u64) -> SelqResult<&mut Self> {
        if limit == 0 {
            return Err(SelqError::missing("Limit is required"));
        }
        self.limit = Some(limit);
        Ok(self)
    }

    /// Set OFFSET. Zero is rejected.
    pub fn offset(&mut self, offset: u64) -> SelqResult<&mut Self> {
        if offset == 0 {
            return Err(SelqError::missing("Offset is required"));
        }
        self.offset = Some(offset);
        Ok(self)
    }

    // ==================== SQL build ====================

    fn build_sql_internal(&self) -> String {
        let mut sql = String::with_capacity(self.estimated_len());

        sql.push_str("select ");
        if self.is_count {
            sql.push_str("count(*)");
        } else {
            for (i, col) in self.select_cols.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(col);
            }
        }
        sql.push_str(" from ");
        write_quoted(&mut sql, &self.table);

        for join in &self.join_clauses {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.where_builder.is_empty() {
            sql.push_str(" where ");
            self.where_builder.write_clause(&mut sql);
        }

        if !self.is_count {
            if !self.order_clauses.is_empty() {
                sql.push_str(" order by ");
                for (i, order) in self.order_clauses.iter().enumerate() {
                    if i > 0 {
                        sql.push_str(", ");
                    }
                    sql.push_str(&order.columns.join(", "));
                    sql.push(' ');
                    sql.push_str(order.direction.as_str());
                }
            }

            if let Some(limit) = self.limit {
                sql.push_str(" limit ");
                sql.push_str(&limit.to_string());
            }

            if let Some(offset) = self.offset {
                sql.push_str(" offset ");
                sql.push_str(&offset.to_string());
            }
        }

        sql
    }

    fn estimated_len(&self) -> usize {
        let cols: usize = self.select_cols.iter().map(|c| c.len() + 2).sum();
        let joins: usize = self.join_clauses.iter().map(|j| j.len() + 1).sum();
        let orders: usize = self
            .order_clauses
            .iter()
            .flat_map(|o| o.columns.iter().map(|c| c.len() + 2))
            .sum();
        32 + cols + self.table.len() + joins + self.where_builder.rendered_len() + orders
    }

    /// Build the statement.
    ///
    /// Rendering does not mutate the builder; calling `build` again yields
    /// the same SQL until the builder changes.
    pub fn build(&self) -> BuiltSelect {
        let sql = self.build_sql_internal();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sql = %truncate_sql(&sql, MAX_LOGGED_SQL),
            predicates = self.where_builder.len(),
            count = self.is_count,
            "built select statement"
        );

        BuiltSelect { sql }
    }
}

impl SqlBuilder for SelectBuilder {
    fn build_sql(&self) -> String {
        self.build_sql_internal()
    }
}

#[cfg(feature = "tracing")]
fn truncate_sql(sql: &str, max: usize) -> &str {
    if sql.len() <= max {
        return sql;
    }
    let mut end = max;
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// Result of [`SelectBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltSelect {
    sql: String,
}

impl BuiltSelect {
    /// The rendered statement.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Take ownership of the rendered statement.
    pub fn into_sql(self) -> String {
        self.sql
    }
}

impl fmt::Display for BuiltSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl From<BuiltSelect> for String {
    fn from(built: BuiltSelect) -> Self {
        built.sql
    }
}
