use crate::model_attributes::ArgumentAttribute;
use crate::model_attributes::ContainerAttributes;
use crate::model_attributes::DirectiveAttribute;
use crate::model_attributes::FieldAttributes;
use crate::model_attributes::RenameRule;
use crate::model_attributes::VariantAttributes;
use graphql_query_core::is_valid_name;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse_quote;
use syn::Data;
use syn::DataEnum;
use syn::DeriveInput;
use syn::Fields;
use syn::FieldsNamed;
use syn::Ident;

/// Expands `#[derive(GraphQLQueryModel)]` into a `GraphQLFields` impl.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttributes::from_attrs(&input.attrs)?;
    let slots = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => struct_field_slots(&container, fields)?,
            _ => return Err(syn::Error::new_spanned(
                &input.ident,
                "GraphQLQueryModel can only be derived for structs with named fields",
            )),
        },
        Data::Enum(data) => enum_variant_slots(data)?,
        Data::Union(_) => return Err(syn::Error::new_spanned(
            &input.ident,
            "GraphQLQueryModel cannot be derived for unions",
        )),
    };

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(graphql_query::GraphQLFields));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics graphql_query::GraphQLFields for #ident #ty_generics #where_clause {
            fn graphql_fields() -> graphql_query::Result<
                ::std::vec::Vec<graphql_query::FieldSlot>
            > {
                ::std::result::Result::Ok(::std::vec![#(#slots),*])
            }
        }
    })
}

/// The GraphQL name a Rust identifier maps to: `rename` if given, otherwise
/// the unraw'd identifier with `rename_rule` applied.
fn graphql_name(
    rename_rule: Option<RenameRule>,
    ident: &Ident,
    rename: Option<&String>,
) -> syn::Result<String> {
    if let Some(rename) = rename {
        return Ok(rename.to_owned());
    }
    let name = ident.unraw().to_string();
    let name = match rename_rule {
        Some(rule) => rule.apply(name.as_str()),
        None => name,
    };
    if is_valid_name(name.as_str()) {
        Ok(name)
    } else {
        Err(syn::Error::new(
            ident.span(),
            format!("`{name}` is not a valid GraphQL name"),
        ))
    }
}

fn argument_expr(argument: &ArgumentAttribute) -> TokenStream {
    let name = argument.name.as_str();
    let value = &argument.value;
    quote! { graphql_query::Argument::new(#name, #value)? }
}

fn directive_expr(directive: &DirectiveAttribute) -> TokenStream {
    let name = directive.name.as_str();
    let arguments = directive.arguments.iter().map(argument_expr);
    quote! {
        graphql_query::Directive::new(#name, ::std::vec![#(#arguments),*])?
    }
}

fn struct_field_slots(
    container: &ContainerAttributes,
    fields: &FieldsNamed,
) -> syn::Result<Vec<TokenStream>> {
    let mut slots = vec![];
    for field in &fields.named {
        let attrs = FieldAttributes::from_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let name = graphql_name(container.rename_all, ident, attrs.rename.as_ref())?;
        let alias = attrs.alias.as_ref().map(|alias| quote! { .set_alias(#alias) });
        let arguments = attrs.arguments.iter().map(argument_expr);
        let directives = attrs.directives.iter().map(directive_expr);
        let typename = attrs.typename;
        let ty = &field.ty;
        let sub_fields = if attrs.scalar {
            quote! { ::std::vec::Vec::<graphql_query::FieldSlot>::new() }
        } else {
            quote! { <#ty as graphql_query::GraphQLFields>::graphql_fields()? }
        };

        slots.push(quote! {
            graphql_query::FieldSlot::from(
                graphql_query::FieldBuilder::new(#name)
                    #alias
                    #(.add_argument(#arguments))*
                    #(.add_directive(#directives))*
                    .set_typename(#typename)
                    .set_fields(#sub_fields)
                    .build()?
            )
        });
    }
    Ok(slots)
}

/// Type conditions are GraphQL type names, so `rename_all` never applies to
/// them: a variant's type condition is its own name unless `on` overrides it.
fn enum_variant_slots(
    data: &DataEnum,
) -> syn::Result<Vec<TokenStream>> {
    let mut slots = vec![];
    for variant in &data.variants {
        let attrs = VariantAttributes::from_attrs(&variant.attrs)?;
        if attrs.skip {
            continue;
        }
        let ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 =>
                &fields.unnamed[0].ty,
            _ => return Err(syn::Error::new_spanned(
                &variant.ident,
                "GraphQLQueryModel enum variants must wrap exactly one type, \
                e.g. `Human(Human)`",
            )),
        };

        let type_condition =
            graphql_name(None, &variant.ident, attrs.on.as_ref())?;
        let typename = attrs.typename;

        slots.push(quote! {
            graphql_query::FieldSlot::from(
                graphql_query::InlineFragmentBuilder::new(#type_condition)
                    .set_typename(#typename)
                    .set_fields(<#ty as graphql_query::GraphQLFields>::graphql_fields()?)
                    .build()?
            )
        });
    }
    Ok(slots)
}
