use super::select::SelectBuilder;
use crate::condition::Direction;
use crate::error::SelqResult;
use crate::value::Value;

/// Table metadata helper.
///
/// A small `const`-friendly wrapper that creates builders with a consistent
/// field list and default ordering.
///
/// # Example
///
/// ```rust
/// use selq::builder::{SqlBuilder, Table};
///
/// const USERS: Table = Table::new("users")
///     .with_select_cols(&["id", "username", "email"])
///     .with_order_cols(&["id"]);
///
/// let mut qb = USERS.select()?;
/// qb.and_where("username", "alice")?;
/// assert_eq!(
///     qb.build_sql(),
///     r#"select id, username, email from "users" where "username" = 'alice' order by "id" asc"#
/// );
/// # Ok::<(), selq::SelqError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub select_cols: &'static [&'static str],
    pub order_cols: &'static [&'static str],
    pub order_direction: Direction,
    pub id_col: &'static str,
}

impl Table {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            select_cols: &["*"],
            order_cols: &[],
            order_direction: Direction::Asc,
            id_col: "id",
        }
    }

    pub const fn with_select_cols(mut self, cols: &'static [&'static str]) -> Self {
        self.select_cols = cols;
        self
    }

    pub const fn with_order_cols(mut self, cols: &'static [&'static str]) -> Self {
        self.order_cols = cols;
        self
    }

    pub const fn with_order_direction(mut self, direction: Direction) -> Self {
        self.order_direction = direction;
        self
    }

    pub const fn with_id_col(mut self, col: &'static str) -> Self {
        self.id_col = col;
        self
    }

    /// A SELECT builder with the configured columns and ordering.
    pub fn select(&self) -> SelqResult<SelectBuilder> {
        let mut qb = SelectBuilder::new(self.name)?;
        qb.select(self.select_cols);
        if !self.order_cols.is_empty() {
            qb.order_by(self.order_cols, self.order_direction);
        }
        Ok(qb)
    }

    /// A `count(*)` builder.
    pub fn count(&self) -> SelqResult<SelectBuilder> {
        let mut qb = SelectBuilder::new(self.name)?;
        qb.count();
        Ok(qb)
    }

    /// [`Self::select`] filtered on `id_col = id`.
    pub fn find_by_id(&self, id: impl Into<Value>) -> SelqResult<SelectBuilder> {
        let mut qb = self.select()?;
        qb.and_where(self.id_col, id)?;
        Ok(qb)
    }
}
