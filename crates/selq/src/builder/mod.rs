//! Structured SELECT builder.
//!
//! ## Design
//!
//! - Values are rendered inline as literals; there are no placeholders.
//! - Builders only accumulate: nothing set can be unset, and `build` is
//!   read-only and repeatable.
//! - Argument errors are returned by the offending call, never deferred.

pub mod select;
pub mod table;
pub mod traits;
pub mod where_builder;

pub use select::{BuiltSelect, Join, OrderBy, SelectBuilder, Statement};
pub use table::Table;
pub use traits::SqlBuilder;
pub use where_builder::{Predicate, WhereBuilder};

#[cfg(test)]
mod tests;
