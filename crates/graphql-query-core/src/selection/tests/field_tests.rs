use crate::tests::test_utils::arg_1;
use crate::tests::test_utils::arg_2;
use crate::tests::test_utils::field_friends;
use crate::tests::test_utils::field_friends_connection;
use crate::tests::test_utils::field_height;
use crate::tests::test_utils::field_node;
use crate::tests::test_utils::field_simple;
use crate::tests::test_utils::field_simple_typename;
use crate::Argument;
use crate::Directive;
use crate::Field;
use crate::FieldBuilder;
use crate::Fragment;
use crate::GraphQLQueryError;
use crate::Variable;
use pretty_assertions::assert_eq;

#[test]
fn fixture_fields_render() {
    assert_eq!(field_simple().render().unwrap(), "field {\n  f1\n  f2\n  f3\n}");
    assert_eq!(
        field_simple_typename().render().unwrap(),
        "field {\n  __typename\n  f1\n  f2\n  f3\n}",
    );
    assert_eq!(field_node().render().unwrap(), "node {\n  name\n}");
    assert_eq!(field_height().render().unwrap(), "height(\n  unit: FOOT\n)");
    assert_eq!(field_friends().render().unwrap(), "friends {\n  name\n}");
    assert_eq!(
        field_friends_connection().render().unwrap(),
        r#"friendsConnection(
  first: $first
) {
  totalCount
  edges {
    node {
      name
    }
  }
}"#,
    );
}

#[test]
fn leaf_field() {
    let field = Field::new("name").unwrap();
    assert!(field.is_leaf());
    assert_eq!(field.render().unwrap(), "name");
}

#[test]
fn aliased_leaf_field() {
    let field = Field::builder("name").set_alias("my_name").build().unwrap();
    assert_eq!(field.render().unwrap(), "my_name: name");
    assert_eq!(field.selected_name(), "my_name");
}

#[test]
fn field_with_arguments_and_no_sub_fields() {
    let field = Field::builder("field")
        .set_arguments(vec![arg_1(), arg_2()])
        .build()
        .unwrap();
    assert_eq!(field.render().unwrap(), "field(\n  arg1: VALUE1\n  arg2: VALUE2\n)");
}

#[test]
fn field_with_object_argument() {
    let field = Field::builder("field")
        .add_argument(Argument::new("filter", vec![arg_1(), arg_2()]).unwrap())
        .build()
        .unwrap();
    assert_eq!(
        field.render().unwrap(),
        "field(\n  filter: {\n    arg1: VALUE1\n    arg2: VALUE2\n  }\n)",
    );
}

#[test]
fn typename_is_injected_at_every_requested_level() {
    let field = Field::builder("field1")
        .add_field(field_simple_typename())
        .set_typename(true)
        .build()
        .unwrap();
    assert_eq!(
        field.render().unwrap(),
        "field1 {\n  __typename\n  field {\n    __typename\n    f1\n    f2\n    f3\n  }\n}",
    );
}

#[test]
fn typename_alone_makes_a_selection_set() {
    let field = Field::builder("node").set_typename(true).build().unwrap();
    assert!(!field.is_leaf());
    assert_eq!(field.render().unwrap(), "node {\n  __typename\n}");
}

#[test]
fn fragment_sub_field_renders_as_spread() {
    let field = Field::builder("field1")
        .add_field(
            Fragment::builder("MyFragment", "MyType")
                .add_field("f1")
                .build()
                .unwrap(),
        )
        .set_typename(true)
        .build()
        .unwrap();
    assert_eq!(field.render().unwrap(), "field1 {\n  __typename\n  ...MyFragment\n}");
}

#[test]
fn field_with_directive() {
    let with_friends = Variable::new("withFriends", "Boolean!").unwrap();
    let field = Field::builder("friends")
        .add_field("name")
        .add_directive(
            Directive::new(
                "include",
                vec![Argument::new("if", with_friends).unwrap()],
            ).unwrap(),
        )
        .build()
        .unwrap();

    assert_eq!(
        field.render().unwrap(),
        r#"friends @include(
  if: $withFriends
) {
  name
}"#,
    );
}

#[test]
fn field_with_two_directives() {
    let field = Field::builder("friends")
        .add_field("name")
        .set_directives(vec![
            Directive::new("include", vec![Argument::new("if", "true").unwrap()]).unwrap(),
            Directive::new("skip", vec![Argument::new("if", "false").unwrap()]).unwrap(),
        ])
        .build()
        .unwrap();

    assert_eq!(
        field.render().unwrap(),
        r#"friends @include(
  if: true
) @skip(
  if: false
) {
  name
}"#,
    );
}

#[test]
fn field_with_arguments_directive_and_alias() {
    let field = Field::builder("hero")
        .set_alias("mainHero")
        .add_argument(Argument::new("episode", "JEDI").unwrap())
        .add_directive(Directive::new("cached", vec![]).unwrap())
        .add_field("name")
        .build()
        .unwrap();

    assert_eq!(
        field.render().unwrap(),
        "mainHero: hero(\n  episode: JEDI\n) @cached {\n  name\n}",
    );
}

#[test]
fn set_fields_replaces_previous_fields() {
    let field = FieldBuilder::new("field")
        .add_field("dropped")
        .set_fields(["f1"])
        .build()
        .unwrap();
    assert_eq!(field.render().unwrap(), "field {\n  f1\n}");
}

#[test]
fn invalid_field_name_or_alias_fails_construction() {
    assert_eq!(
        Field::new("my field"),
        Err(GraphQLQueryError::InvalidName { name: "my field".to_string() }),
    );
    assert_eq!(
        Field::builder("name").set_alias("my-name").build(),
        Err(GraphQLQueryError::InvalidName { name: "my-name".to_string() }),
    );
}

#[test]
fn render_error_in_argument_propagates_through_field() {
    let field = Field::builder("outer")
        .add_field(
            Field::builder("inner")
                .add_argument(Argument::new("ratio", f64::NAN).unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    assert!(matches!(
        field.render(),
        Err(GraphQLQueryError::InvalidArgumentValue { .. }),
    ));
}
