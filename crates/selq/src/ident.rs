//! Identifier quoting and column-list conversion.
//!
//! Identifiers are wrapped in double quotes verbatim. Embedded `"` characters
//! are **not** escaped; callers are responsible for the names they pass in.
//!
//! # Example
//! ```
//! use selq::ident::{quote_ident, IntoColumnList};
//!
//! assert_eq!(quote_ident("users"), r#""users""#);
//! assert_eq!("id".into_column_list(), vec!["id".to_string()]);
//! assert_eq!(["id", "name"].into_column_list().len(), 2);
//! ```

/// Wrap an identifier in double quotes.
pub fn quote_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(&mut out, name);
    out
}

pub(crate) fn write_quoted(out: &mut String, name: &str) {
    out.push('"');
    out.push_str(name);
    out.push('"');
}

/// Convert a single name or a sequence of names into an ordered column list.
///
/// This is mainly for ergonomics in builder APIs that accept either
/// `"id"` or `["id", "name"]`.
pub trait IntoColumnList {
    fn into_column_list(self) -> Vec<String>;
}

impl IntoColumnList for &str {
    fn into_column_list(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumnList for String {
    fn into_column_list(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumnList for &String {
    fn into_column_list(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoColumnList for &[&str] {
    fn into_column_list(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumnList for [&str; N] {
    fn into_column_list(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumnList for &[&str; N] {
    fn into_column_list(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoColumnList for Vec<&str> {
    fn into_column_list(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoColumnList for Vec<String> {
    fn into_column_list(self) -> Vec<String> {
        self
    }
}

impl IntoColumnList for &[String] {
    fn into_column_list(self) -> Vec<String> {
        self.to_vec()
    }
}
