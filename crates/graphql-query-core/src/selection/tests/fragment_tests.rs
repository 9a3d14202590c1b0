use crate::tests::test_utils::fragment_comparison_fields;
use crate::Field;
use crate::Fragment;
use crate::GraphQLQueryError;
use crate::InlineFragment;
use crate::NodeKind;
use pretty_assertions::assert_eq;

#[test]
fn fixture_fragments_render() {
    assert_eq!(
        fragment_comparison_fields(false).render().unwrap(),
        "fragment comparisonFields on Character {\n  name\n  appearsIn\n}",
    );
    assert_eq!(
        fragment_comparison_fields(true).render().unwrap(),
        "fragment comparisonFields on Character {\n  __typename\n  name\n  appearsIn\n}",
    );
}

#[test]
fn fragment_with_every_kind_of_sub_field() {
    let fragment = Fragment::builder("FragmentName", "MyType")
        .add_field("name")
        .add_field(
            Field::builder("field")
                .set_fields(["f1", "f2", "f3"])
                .set_typename(true)
                .build()
                .unwrap(),
        )
        .add_field(
            InlineFragment::builder("InlineFragmentType")
                .set_fields(["if1", "if2"])
                .set_typename(true)
                .build()
                .unwrap(),
        )
        .add_field(
            Fragment::builder("FragmentName2", "MyType2")
                .set_fields(["frg1", "frg2"])
                .set_typename(true)
                .build()
                .unwrap(),
        )
        .set_typename(true)
        .build()
        .unwrap();

    assert_eq!(
        fragment.render().unwrap(),
        r#"fragment FragmentName on MyType {
  __typename
  name
  field {
    __typename
    f1
    f2
    f3
  }
  ... on InlineFragmentType {
    __typename
    if1
    if2
  }
  ...FragmentName2
}"#,
    );
}

#[test]
fn spread_is_the_fragment_name() {
    assert_eq!(fragment_comparison_fields(false).spread(), "...comparisonFields");
}

#[test]
fn empty_fragment_fails_construction() {
    assert_eq!(
        Fragment::builder("comparisonFields", "Character").build(),
        Err(GraphQLQueryError::EmptyRequiredFieldList {
            node_kind: NodeKind::Fragment,
        }),
    );
}

#[test]
fn invalid_fragment_names_fail_construction() {
    assert_eq!(
        Fragment::builder("comparison-fields", "Character").add_field("name").build(),
        Err(GraphQLQueryError::InvalidName { name: "comparison-fields".to_string() }),
    );
    assert!(Fragment::builder("comparisonFields", "").add_field("name").build().is_err());
}
