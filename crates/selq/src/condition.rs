//! Condition vocabulary shared by the builders.
//!
//! This module provides [`Conjunction`], the fixed [`Operator`] set accepted by
//! explicit comparisons, and the [`Direction`] / [`JoinType`] keywords.

use crate::error::SelqError;
use std::fmt;
use std::str::FromStr;

/// Boolean joiner placed in front of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(self) -> &'static str {
        match self {
            Conjunction::And => "and",
            Conjunction::Or => "or",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! operators {
    ($( $(#[$doc:meta])* $variant:ident => $sql:literal, )*) => {
        /// Comparison operator inserted verbatim between a column and a value.
        ///
        /// # Example
        /// ```
        /// use selq::Operator;
        ///
        /// assert_eq!(Operator::Gte.as_str(), ">=");
        /// assert_eq!("not like".parse::<Operator>().unwrap(), Operator::NotLike);
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operator {
            $( $(#[$doc])* $variant, )*
        }

        impl Operator {
            /// Every operator, in declaration order.
            pub const ALL: &'static [Operator] = &[$( Operator::$variant, )*];

            /// The SQL token for this operator.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Operator::$variant => $sql, )*
                }
            }
        }

        impl FromStr for Operator {
            type Err = SelqError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $sql => Ok(Operator::$variant), )*
                    other => Err(SelqError::invalid_value(format!(
                        "unknown operator '{other}'"
                    ))),
                }
            }
        }
    };
}

operators! {
    /// `=`
    Eq => "=",
    /// `!=`
    Ne => "!=",
    /// `<>`
    LtGt => "<>",
    /// `<`
    Lt => "<",
    /// `<=`
    Lte => "<=",
    /// `>`
    Gt => ">",
    /// `>=`
    Gte => ">=",
    /// `-|-` (ranges are adjacent)
    Adjacent => "-|-",
    /// `?-` (is horizontal)
    Horizontal => "?-",
    /// `?#` (intersects)
    Intersects => "?#",
    /// `?|` (is vertical)
    Vertical => "?|",
    /// `@>` (contains)
    Contains => "@>",
    /// `<@` (is contained by)
    ContainedBy => "<@",
    /// `&&` (overlaps)
    Overlaps => "&&",
    /// `&<` (does not extend to the right of)
    NotExtendRight => "&<",
    /// `&>` (does not extend to the left of)
    NotExtendLeft => "&>",
    HashEq => "#=",
    HashGt => "#>",
    LtHash => "<#",
    /// `<^` (is below)
    Below => "<^",
    /// `<<` (strictly left of)
    StrictlyLeft => "<<",
    /// `>>` (strictly right of)
    StrictlyRight => ">>",
    Between => "between",
    NotBetween => "not between",
    Exists => "exists",
    NotExists => "not exists",
    In => "in",
    NotIn => "not in",
    Is => "is",
    IsNot => "is not",
    IsNull => "is null",
    IsNotNull => "is not null",
    IsDistinctFrom => "is distinct from",
    IsNotDistinctFrom => "is not distinct from",
    Like => "like",
    NotLike => "not like",
    Match => "match",
    NotMatch => "not match",
    Regexp => "regexp",
    NotRegexp => "not regexp",
    SoundsLike => "sounds like",
    NotSoundsLike => "not sounds like",
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JOIN flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinType::Inner => "inner",
            JoinType::Left => "left",
            JoinType::Right => "right",
            JoinType::Full => "full",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
