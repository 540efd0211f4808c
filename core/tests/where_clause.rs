use dynsql_core::{Condition, ParameterNames, Placeholder, PlaceholderStyle, WhereBuilder};

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i64),
    Text(String),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

#[test]
fn test_where_or_is_null() {
    let clause = WhereBuilder::new()
        .r#where("id", Condition::equal_to(1))
        .or("occupation", Condition::is_null())
        .build();

    assert_eq!(clause.fragment(), "id = #{p1} or occupation is null");
    assert_eq!(clause.parameters().len(), 1);
    assert_eq!(clause.parameter("p1"), Some(&1));
}

#[test]
fn test_null_checks_take_builder_value_type() {
    let clause = WhereBuilder::<Value>::new()
        .r#where("occupation", Condition::is_not_null())
        .and("id", Condition::equal_to(Value::Int(7)))
        .or("last_name", Condition::is_null())
        .build_where_clause();

    assert_eq!(
        clause.fragment(),
        "where occupation is not null and id = #{p1} or last_name is null"
    );
    assert_eq!(clause.parameter("p1"), Some(&Value::Int(7)));
}

#[test]
fn test_first_name_in() {
    let clause = WhereBuilder::<Value>::new()
        .r#where(
            "first_name",
            Condition::is_in(["Fred", "Barney"]).unwrap().convert(),
        )
        .build_where_clause();

    assert_eq!(clause.fragment(), "where first_name in (#{p1},#{p2})");
    assert_eq!(clause.parameter("p1"), Some(&Value::from("Fred")));
    assert_eq!(clause.parameter("p2"), Some(&Value::from("Barney")));
}

#[test]
fn test_mixed_value_types_get_unique_names() {
    let clause = WhereBuilder::<Value>::new()
        .r#where("id", Condition::between(1_i64).and(10).convert())
        .and("last_name", Condition::like("Flint%").convert())
        .or("id", Condition::equal_to(42_i64).convert())
        .build();

    assert_eq!(
        clause.fragment(),
        "id between #{p1} and #{p2} and last_name like #{p3} or id = #{p4}"
    );
    let keys: Vec<&str> = clause.parameters().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["p1", "p2", "p3", "p4"]);
    assert_eq!(clause.parameter("p3"), Some(&Value::from("Flint%")));
}

#[test]
fn test_placeholder_styles() {
    let clause = WhereBuilder::<i64>::with_style(PlaceholderStyle::MyBatisMap)
        .r#where("id", Condition::equal_to(3))
        .build();
    assert_eq!(clause.fragment(), "id = #{parameters.p1}");

    let clause = WhereBuilder::<i64>::with_names(
        PlaceholderStyle::Colon,
        ParameterNames::with_prefix("arg"),
    )
    .r#where("id", Condition::not_between(3).and(4))
    .build();
    assert_eq!(clause.fragment(), "id not between :arg1 and :arg2");
    assert_eq!(clause.parameter("arg2"), Some(&4));
}

#[test]
fn test_custom_names_never_restart() {
    let clause = WhereBuilder::with_names(PlaceholderStyle::MyBatis, ParameterNames::new())
        .r#where("id", Condition::equal_to(1))
        .and("age", Condition::equal_to(2))
        .and_group(|group| group.r#where("age", Condition::less_than(3)))
        .build();

    assert_eq!(
        clause.fragment(),
        "id = #{p1} and age = #{p2} and (age < #{p3})"
    );
    assert_eq!(clause.parameters().len(), 3);
    assert_eq!(clause.parameter("p1"), Some(&1));
    assert_eq!(clause.parameter("p2"), Some(&2));
}

#[test]
fn test_groups_continue_name_sequence() {
    let clause = WhereBuilder::<i64>::new()
        .r#where("id", Condition::greater_than(1))
        .and_group(|group| {
            group
                .r#where("age", Condition::less_than(18))
                .or("age", Condition::greater_than(65))
        })
        .or("id", Condition::equal_to(0))
        .build();

    assert_eq!(
        clause.fragment(),
        "id > #{p1} and (age < #{p2} or age > #{p3}) or id = #{p4}"
    );
    assert_eq!(clause.parameters().len(), 4);
    assert_eq!(clause.parameter("p3"), Some(&65));
}

#[test]
fn test_empty_group_is_skipped() {
    let clause = WhereBuilder::<i64>::new()
        .r#where("id", Condition::equal_to(1))
        .or_group(|group| group)
        .build();
    assert_eq!(clause.fragment(), "id = #{p1}");
}

#[test]
fn test_empty_builder() {
    let builder = WhereBuilder::<i64>::new();
    assert!(builder.is_empty());

    let clause = builder.build_where_clause();
    assert_eq!(clause.fragment(), "");
    assert!(clause.parameters().is_empty());
}

#[test]
fn test_parameter_names() {
    let mut names = ParameterNames::new();
    assert_eq!(names.next_name(), "p1");
    assert_eq!(names.next_name(), "p2");
    assert_eq!(names.allocated(), 2);

    let taken: Vec<_> = ParameterNames::with_prefix("v").take(3).collect();
    assert_eq!(taken, ["v1", "v2", "v3"]);
}

#[test]
fn test_placeholder_tokens() {
    assert_eq!(PlaceholderStyle::MyBatis.token("p1"), "#{p1}");
    assert_eq!(PlaceholderStyle::MyBatisMap.token("p1"), "#{parameters.p1}");
    assert_eq!(PlaceholderStyle::Colon.token("p1"), ":p1");
    assert_eq!(PlaceholderStyle::AtSign.token("p1"), "@p1");
    assert_eq!(PlaceholderStyle::Dollar.token("p1"), "$p1");
}

#[test]
fn test_placeholder_display() {
    let placeholder = Placeholder::new("p1", PlaceholderStyle::AtSign);
    assert_eq!(placeholder.to_string(), "@p1");
    assert_eq!(placeholder.token(), "@p1");
}

#[test]
fn test_nested_groups_share_allocator() {
    let clause = WhereBuilder::new()
        .r#where("a", Condition::equal_to(1))
        .or_group(|group| {
            group
                .r#where("b", Condition::equal_to(2))
                .and_group(|inner| {
                    assert!(inner.is_empty());
                    inner
                        .r#where("c", Condition::between(3).and(4))
                        .or("d", Condition::is_null())
                })
        })
        .and("e", Condition::is_in([5, 6]).unwrap())
        .build();

    assert_eq!(
        clause.fragment(),
        "a = #{p1} or (b = #{p2} and (c between #{p3} and #{p4} or d is null)) and e in (#{p5},#{p6})"
    );
    let values: Vec<i32> = clause.parameters().values().copied().collect();
    assert_eq!(values, [1, 2, 3, 4, 5, 6]);
}
