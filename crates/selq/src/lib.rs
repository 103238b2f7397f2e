//! # selq
//!
//! A fluent builder for SQL `select` statements.
//!
//! ## Features
//!
//! - **Composable predicates**: `and`/`or` conditions and nested groups to any depth
//! - **Literal rendering**: values are written inline (`1`, `true`, `'text'`, ISO-8601 timestamps)
//! - **Fixed section order**: select, joins, where, order by, limit, offset
//! - **Count mode**: `count(*)` with ordering and pagination suppressed
//! - **Eager validation**: argument errors surface from the call that caused them
//!
//! selq does not escape text literals or validate identifiers beyond wrapping
//! them in double quotes. It does not execute anything.
//!
//! ## Example
//!
//! ```
//! use selq::{Join, SelectBuilder};
//!
//! let mut qb = SelectBuilder::new("users")?;
//! qb.select(["id", "name"])
//!     .inner_join(Join::new("id", "posts").target_column("user_id"))
//!     .and_where("is_active", true)?
//!     .or_where_nested(|w| {
//!         w.and_where("role", "admin")?.or_where_null("banned_at")?;
//!         Ok(())
//!     })?
//!     .order_by_desc("id")
//!     .limit(20)?;
//!
//! assert_eq!(
//!     qb.build().sql(),
//!     concat!(
//!         r#"select id, name from "users" inner join "posts" on "users"."id" = "posts"."user_id" "#,
//!         r#"where "is_active" = true or ("role" = 'admin' or "banned_at" is null) "#,
//!         r#"order by "id" desc limit 20"#,
//!     )
//! );
//! # Ok::<(), selq::SelqError>(())
//! ```

pub mod builder;
pub mod condition;
pub mod error;
pub mod ident;
pub mod prelude;
pub mod value;

pub use builder::{
    BuiltSelect, Join, OrderBy, Predicate, SelectBuilder, SqlBuilder, Statement, Table,
    WhereBuilder,
};
pub use condition::{Conjunction, Direction, JoinType, Operator};
pub use error::{SelqError, SelqResult};
pub use ident::{IntoColumnList, quote_ident};
pub use value::Value;
