use super::*;
use crate::{Direction, JoinType, Operator, SelqError};
use chrono::{TimeZone, Utc};

fn users() -> SelectBuilder {
    SelectBuilder::new("users").unwrap()
}

fn posts_join() -> Join {
    Join::new("id", "posts").target_column("user_id")
}

#[test]
fn test_simple_select() {
    assert_eq!(users().to_sql(), r#"select * from "users""#);
}

#[test]
fn test_empty_table_rejected() {
    let err = SelectBuilder::new("").unwrap_err();
    assert_eq!(err, SelqError::missing("Table name is required"));
}

#[test]
fn test_select_one_field() {
    let mut qb = users();
    qb.select("id");
    assert_eq!(qb.to_sql(), r#"select id from "users""#);
}

#[test]
fn test_select_two_fields() {
    let mut qb = users();
    qb.select(["id", "name"]);
    assert_eq!(qb.to_sql(), r#"select id, name from "users""#);
}

#[test]
fn test_select_replaces_previous_fields() {
    let mut qb = users();
    qb.select(["id", "name"]).select("email");
    assert_eq!(qb.to_sql(), r#"select email from "users""#);
    qb.select_all();
    assert_eq!(qb.to_sql(), r#"select * from "users""#);
}

#[test]
fn test_select_empty_list_falls_back_to_star() {
    let mut qb = users();
    qb.select(Vec::<String>::new());
    assert_eq!(qb.to_sql(), r#"select * from "users""#);
}

#[test]
fn test_where_one_field() {
    let mut qb = users();
    qb.select("id").and_where("id", 1).unwrap();
    assert_eq!(qb.to_sql(), r#"select id from "users" where "id" = 1"#);
}

#[test]
fn test_where_two_clauses() {
    let mut qb = users();
    qb.select(["id", "name"])
        .and_where("id", 1)
        .unwrap()
        .and_where("name", "John")
        .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select id, name from "users" where "id" = 1 and "name" = 'John'"#
    );
}

#[test]
fn test_or_where() {
    let mut qb = users();
    qb.and_where("id", 1).unwrap().or_where("name", "John").unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "id" = 1 or "name" = 'John'"#
    );
}

#[test]
fn test_leading_or_is_dropped() {
    let mut qb = users();
    qb.or_where("name", "John").unwrap().and_where("id", 1).unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "name" = 'John' and "id" = 1"#
    );
}

#[test]
fn test_where_date() {
    let ts = Utc.with_ymd_and_hms(2023, 6, 15, 12, 30, 0).unwrap();
    let mut qb = users();
    qb.and_where("created_at", ts).unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "created_at" = '2023-06-15T12:30:00.000Z'"#
    );
}

#[test]
fn test_where_number_and_bool() {
    let mut qb = users();
    qb.and_where("id", 1)
        .unwrap()
        .or_where("age", 18.5)
        .unwrap()
        .and_where("is_active", true)
        .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "id" = 1 or "age" = 18.5 and "is_active" = true"#
    );
}

#[test]
fn test_where_null_value_and_null_check() {
    let mut qb = users();
    qb.and_where("manager_id", None::<i64>)
        .unwrap()
        .or_where_null("is_active")
        .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "manager_id" = null or "is_active" is null"#
    );
}

#[test]
fn test_where_op() {
    let mut qb = users();
    qb.and_where_op("age", Operator::Gt, 21)
        .unwrap()
        .or_where_op("email", Operator::NotLike, "%@example.com")
        .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "age" > 21 or "email" not like '%@example.com'"#
    );
}

#[test]
fn test_where_in() {
    let mut qb = users();
    qb.and_where_in("role", ["admin", "owner"])
        .unwrap()
        .or_where_in("id", [1, 2])
        .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "role" in ('admin', 'owner') or "id" in (1, 2)"#
    );
}

#[test]
fn test_where_errors_leave_state_untouched() {
    let mut qb = users();
    qb.and_where("id", 1).unwrap();
    assert!(qb.and_where("", 1).unwrap_err().is_missing_argument());
    assert!(qb.or_where("", "x").is_err());
    assert!(qb.and_where_in("id", Vec::<i64>::new()).is_err());
    assert!(qb.and_where_null("").is_err());
    assert!(qb.and_where("score", f64::NAN).unwrap_err().is_invalid_value());
    assert_eq!(qb.to_sql(), r#"select * from "users" where "id" = 1"#);
}

#[test]
fn test_join() {
    let mut qb = users();
    qb.join(JoinType::Inner, posts_join());
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" inner join "posts" on "users"."id" = "posts"."user_id""#
    );
}

#[test]
fn test_two_joins() {
    let mut qb = users();
    qb.inner_join(posts_join())
        .left_join(Join::new("id", "comments").target_column("user_id"));
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" inner join "posts" on "users"."id" = "posts"."user_id" left join "comments" on "users"."id" = "comments"."user_id""#
    );
}

#[test]
fn test_join_defaults_and_overrides() {
    let mut qb = users();
    qb.right_join(Join::new("org_id", "orgs"));
    qb.full_join(
        Join::new("tag_id", "tags")
            .table("posts")
            .operator(Operator::Gte)
            .target_column("id"),
    );
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" right join "orgs" on "users"."org_id" = "orgs"."org_id" full join "tags" on "posts"."tag_id" >= "tags"."id""#
    );
}

#[test]
fn test_order_by_single() {
    let mut qb = users();
    qb.order_by("id", Direction::Asc);
    assert_eq!(qb.to_sql(), r#"select * from "users" order by "id" asc"#);
}

#[test]
fn test_order_by_columns() {
    let mut qb = users();
    qb.order_by(["id", "users"], Direction::Asc);
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" order by "id", "users" asc"#
    );
}

#[test]
fn test_order_by_separate_entries() {
    let mut qb = users();
    qb.order_by_asc("id").order_by_desc("users");
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" order by "id" asc, "users" desc"#
    );
}

#[test]
fn test_limit_offset() {
    let mut qb = users();
    qb.limit(10).unwrap();
    assert_eq!(qb.to_sql(), r#"select * from "users" limit 10"#);
    qb.offset(10).unwrap();
    assert_eq!(qb.to_sql(), r#"select * from "users" limit 10 offset 10"#);
}

#[test]
fn test_offset_only() {
    let mut qb = users();
    qb.offset(10).unwrap();
    assert_eq!(qb.to_sql(), r#"select * from "users" offset 10"#);
}

#[test]
fn test_limit_offset_zero_rejected() {
    let mut qb = users();
    assert_eq!(
        qb.limit(0).unwrap_err(),
        SelqError::missing("Limit is required")
    );
    assert_eq!(
        qb.offset(0).unwrap_err(),
        SelqError::missing("Offset is required")
    );
    assert_eq!(qb.to_sql(), r#"select * from "users""#);
}

fn all_clauses() -> SelectBuilder {
    let mut qb = users();
    qb.and_where("is_active", true)
        .unwrap()
        .or_where("is_admin", true)
        .unwrap()
        .inner_join(posts_join())
        .order_by_asc("id")
        .limit(10)
        .unwrap()
        .offset(10)
        .unwrap();
    qb
}

#[test]
fn test_all_clauses() {
    assert_eq!(
        all_clauses().to_sql(),
        r#"select * from "users" inner join "posts" on "users"."id" = "posts"."user_id" where "is_active" = true or "is_admin" = true order by "id" asc limit 10 offset 10"#
    );
}

#[test]
fn test_all_clauses_count() {
    let mut qb = all_clauses();
    qb.select(["id", "name"]).count();
    assert!(qb.is_count());
    assert_eq!(
        qb.to_sql(),
        r#"select count(*) from "users" inner join "posts" on "users"."id" = "posts"."user_id" where "is_active" = true or "is_admin" = true"#
    );
}

#[test]
fn test_all_clauses_nested() {
    let mut qb = all_clauses();
    qb.and_where_nested(|w| {
        w.and_where("is_active", true)?.or_where("is_admin", true)?;
        Ok(())
    })
    .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" inner join "posts" on "users"."id" = "posts"."user_id" where "is_active" = true or "is_admin" = true and ("is_active" = true or "is_admin" = true) order by "id" asc limit 10 offset 10"#
    );
}

#[test]
fn test_empty_nested_group_renders_parens() {
    let mut qb = users();
    qb.and_where("id", 1)
        .unwrap()
        .or_where_nested(|_| Ok(()))
        .unwrap();
    assert_eq!(qb.to_sql(), r#"select * from "users" where "id" = 1 or ()"#);
}

#[test]
fn test_where_f32_and_usize() {
    let ids: Vec<usize> = vec![1, 2];
    let mut qb = users();
    qb.and_where("score", 0.1f32)
        .unwrap()
        .and_where("rank", ids.len())
        .unwrap()
        .or_where_in("id", ids)
        .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "score" = 0.1 and "rank" = 2 or "id" in (1, 2)"#
    );
}

#[test]
fn test_or_nested() {
    let mut qb = users();
    qb.and_where("id", 1)
        .unwrap()
        .or_where_nested(|w| {
            w.and_where("a", 1)?.and_where_nested(|inner| {
                inner.or_where("b", 2)?.or_where("c", 3)?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    assert_eq!(
        qb.to_sql(),
        r#"select * from "users" where "id" = 1 or ("a" = 1 and ("b" = 2 or "c" = 3))"#
    );
    assert_eq!(qb.where_builder().len(), 2);
}

#[test]
fn test_build_is_repeatable_and_sees_later_changes() {
    let mut qb = users();
    qb.and_where("id", 1).unwrap();
    let first = qb.build();
    assert_eq!(first, qb.build());

    qb.limit(5).unwrap();
    let second = qb.build();
    assert_ne!(first, second);
    assert_eq!(second.sql(), r#"select * from "users" where "id" = 1 limit 5"#);
    assert_eq!(second.to_string(), second.sql());
    assert_eq!(String::from(second.clone()), second.into_sql());
}

#[test]
fn test_statement_alias() {
    let mut stmt = Statement::new("users").unwrap();
    stmt.and_where("id", 1).unwrap();
    assert_eq!(stmt.table(), "users");
    assert_eq!(stmt.build_sql(), stmt.build().into_sql());
}
