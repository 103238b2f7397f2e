//! Builds a handful of statements and prints them.
//!
//! Run with: `cargo run -p selq --example select_builder`

use chrono::Utc;
use selq::prelude::*;

const USERS: Table = Table::new("users")
    .with_select_cols(&["id", "username", "email"])
    .with_order_cols(&["id"]);

fn main() -> SelqResult<()> {
    let mut recent = USERS.select()?;
    recent
        .left_join(Join::new("id", "profiles").target_column("user_id"))
        .and_where_op("created_at", Operator::Gte, Utc::now())?
        .and_where_nested(|w| {
            w.and_where("status", "active")?.or_where_null("suspended_at")?;
            Ok(())
        })?
        .limit(50)?;
    println!("{}", recent.build());

    let mut admins = SelectBuilder::new("users")?;
    admins.and_where_in("role", ["admin", "owner"])?.count();
    println!("{}", admins.build());

    println!("{}", USERS.find_by_id(42)?.build());

    Ok(())
}
