#![allow(dead_code)]

use crate as graphql_query;
use crate::macros::GraphQLQueryModel;
use crate::Argument;
use crate::Directive;
use crate::Field;
use crate::FieldSlot;
use crate::GraphQLFields;
use crate::GraphQLQueryError;
use crate::InlineFragment;
use crate::Result;
use crate::Variable;
use pretty_assertions::assert_eq;

fn leaf(name: &str) -> FieldSlot {
    Field::new(name).unwrap().into()
}

fn render_under(name: &str, fields: Vec<FieldSlot>) -> String {
    Field::builder(name)
        .set_fields(fields)
        .build()
        .unwrap()
        .render()
        .unwrap()
}

// =============================================================================
// Structs
// =============================================================================

#[derive(GraphQLQueryModel)]
struct Friend {
    name: String,
}

#[derive(GraphQLQueryModel)]
struct Hero {
    name: String,
    friends: Vec<Friend>,
}

#[test]
fn simple_model() -> Result<()> {
    let generated = Hero::graphql_fields()?;
    assert_eq!(generated, vec![
        leaf("name"),
        Field::builder("friends").add_field(leaf("name")).build()?.into(),
    ]);

    assert_eq!(
        render_under("hero", generated),
        "hero {\n  name\n  friends {\n    name\n  }\n}",
    );
    Ok(())
}

#[derive(GraphQLQueryModel)]
#[graphql(rename_all = "camelCase")]
struct Author {
    login: String,
    avatar_url: String,
    url: String,
}

#[derive(GraphQLQueryModel)]
#[graphql(rename_all = "camelCase")]
struct CommentsNode {
    created_at: String,
    author: Option<Author>,
}

#[test]
fn optional_sub_model() -> Result<()> {
    let generated = CommentsNode::graphql_fields()?;
    assert_eq!(
        render_under("comments", generated),
        r#"comments {
  createdAt
  author {
    login
    avatarUrl
    url
  }
}"#,
    );
    Ok(())
}

#[derive(GraphQLQueryModel)]
struct Human {
    name: String,
    #[graphql(argument(name = "unit", value = "FOOT"))]
    height: f64,
}

#[test]
fn field_with_arguments() -> Result<()> {
    let generated = Human::graphql_fields()?;
    assert_eq!(generated, vec![
        leaf("name"),
        Field::builder("height")
            .add_argument(Argument::new("unit", "FOOT")?)
            .build()?
            .into(),
    ]);

    assert_eq!(
        render_under("human", generated),
        "human {\n  name\n  height(\n    unit: FOOT\n  )\n}",
    );
    Ok(())
}

#[derive(GraphQLQueryModel)]
struct Review {
    stars: i32,
}

#[derive(GraphQLQueryModel)]
struct Film {
    #[graphql(rename = "title", alias = "filmTitle")]
    name: String,
    #[graphql(skip)]
    local_only: bool,
    #[graphql(scalar)]
    cover: Review,
    #[graphql(typename, argument(name = "first", value = 3))]
    reviews: Vec<Review>,
    #[graphql(directive(
        name = "include",
        argument(name = "if", value = Variable::new("withDirector", "Boolean!")?),
    ))]
    director: Option<Friend>,
    r#type: String,
}

#[test]
fn field_attributes() -> Result<()> {
    let generated = Film::graphql_fields()?;
    assert_eq!(
        render_under("film", generated),
        r#"film {
  filmTitle: title
  cover
  reviews(
    first: 3
  ) {
    __typename
    stars
  }
  director @include(
    if: $withDirector
  ) {
    name
  }
  type
}"#,
    );

    let director = Film::graphql_fields()?.remove(3);
    let expected_directive = Directive::new(
        "include",
        vec![Argument::new("if", Variable::new("withDirector", "Boolean!")?)?],
    )?;
    match director {
        FieldSlot::Field(field) => {
            assert_eq!(field.directives(), &[expected_directive]);
        },
        other => panic!("Expected a field, found {other:?}"),
    }
    Ok(())
}

#[derive(GraphQLQueryModel)]
struct Nested<T> {
    id: String,
    items: Vec<T>,
}

#[test]
fn generic_model() -> Result<()> {
    assert_eq!(
        render_under("page", Nested::<Friend>::graphql_fields()?),
        "page {\n  id\n  items {\n    name\n  }\n}",
    );
    assert_eq!(
        render_under("page", Nested::<String>::graphql_fields()?),
        "page {\n  id\n  items\n}",
    );
    Ok(())
}

#[derive(GraphQLQueryModel)]
struct BadArgument {
    #[graphql(argument(name = "ratio", value = f64::NAN))]
    value: f64,
}

#[test]
fn argument_values_are_checked_at_render_time() -> Result<()> {
    let generated = BadArgument::graphql_fields()?;
    let field = Field::builder("bad").set_fields(generated).build()?;
    assert!(matches!(
        field.render(),
        Err(GraphQLQueryError::InvalidArgumentValue { .. }),
    ));
    Ok(())
}

// =============================================================================
// Enums
// =============================================================================

#[derive(GraphQLQueryModel)]
#[graphql(rename_all = "camelCase")]
struct Droid {
    primary_function: String,
}

#[derive(GraphQLQueryModel)]
struct Height {
    height: f64,
}

#[derive(GraphQLQueryModel)]
enum Character {
    Human(Height),
    Droid(Droid),
}

#[derive(GraphQLQueryModel)]
struct HeroWithType {
    name: String,
    r#type: Character,
}

#[test]
fn enum_variants_become_inline_fragments() -> Result<()> {
    let generated = HeroWithType::graphql_fields()?;
    assert_eq!(generated, vec![
        leaf("name"),
        Field::builder("type")
            .add_field(InlineFragment::builder("Human").add_field(leaf("height")).build()?)
            .add_field(
                InlineFragment::builder("Droid")
                    .add_field(leaf("primaryFunction"))
                    .build()?,
            )
            .build()?
            .into(),
    ]);

    assert_eq!(
        render_under("hero", generated),
        r#"hero {
  name
  type {
    ... on Human {
      height
    }
    ... on Droid {
      primaryFunction
    }
  }
}"#,
    );
    Ok(())
}

#[derive(GraphQLQueryModel)]
enum SearchResult {
    #[graphql(on = "Person", typename)]
    Human(Friend),
    #[graphql(skip)]
    Unknown,
}

#[test]
fn enum_variant_attributes() -> Result<()> {
    assert_eq!(
        render_under("search", SearchResult::graphql_fields()?),
        "search {\n  ... on Person {\n    __typename\n    name\n  }\n}",
    );
    Ok(())
}

#[derive(GraphQLQueryModel)]
#[graphql(rename_all = "camelCase")]
enum RenamedCharacter {
    Droid(Droid),
    #[graphql(on = "Human")]
    HumanBeing(Height),
}

#[derive(GraphQLQueryModel)]
#[graphql(rename_all = "camelCase")]
struct RenamedHero {
    hero_name: String,
    character: RenamedCharacter,
}

#[test]
fn rename_all_on_enum_keeps_type_names() -> Result<()> {
    assert_eq!(
        render_under("hero", RenamedHero::graphql_fields()?),
        r#"hero {
  heroName
  character {
    ... on Droid {
      primaryFunction
    }
    ... on Human {
      height
    }
  }
}"#,
    );
    Ok(())
}
