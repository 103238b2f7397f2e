//! Convenient imports for typical `selq` usage.
//!
//! ```
//! use selq::prelude::*;
//!
//! let mut qb = SelectBuilder::new("users")?;
//! qb.and_where_op("age", Operator::Gte, 18)?;
//! assert_eq!(qb.to_sql(), r#"select * from "users" where "age" >= 18"#);
//! # Ok::<(), SelqError>(())
//! ```

pub use crate::{
    Conjunction, Direction, Join, JoinType, Operator, SelectBuilder, SelqError, SelqResult,
    SqlBuilder, Table, Value, WhereBuilder,
};
