//! Tests for identity synthesis.

use crate::derive::generate::identity;
use crate::derive::parse::{IdKind, IdentifyOpts};
use anyhow::{Result, ensure};
use quote::quote;
use rstest::rstest;
use structural_test_helpers::{assert_expansion_contains, normalise};
use syn::parse_quote;

fn opts_for(kind: Option<IdKind>, optional: bool) -> IdentifyOpts {
    IdentifyOpts {
        kind,
        optional,
        crate_path: None,
    }
}

#[rstest]
fn existing_id_field_is_left_untouched() -> Result<()> {
    let item: syn::Item = parse_quote! {
        struct Keyed {
            id: String,
            value: u32,
        }
    };
    let expansion = identity::expand(&IdentifyOpts::default(), item)?;
    assert_expansion_contains(&expansion, &quote! { type Id = String; })?;
    let rendered = normalise(&expansion);
    ensure!(
        !rendered.contains("StringId"),
        "no identifier should be synthesised: {rendered}"
    );
    Ok(())
}

#[rstest]
#[case::default(None, quote! { id: structural::StringId })]
#[case::string(Some(IdKind::String), quote! { id: structural::StringId })]
#[case::integer(Some(IdKind::Integer), quote! { id: structural::IntId })]
#[case::double(Some(IdKind::Double), quote! { id: structural::FloatId })]
#[case::boolean(Some(IdKind::Boolean), quote! { id: structural::BoolId })]
#[case::token(Some(IdKind::Token), quote! { id: structural::Token })]
fn missing_id_is_synthesised_from_the_kind_table(
    #[case] kind: Option<IdKind>,
    #[case] expected: proc_macro2::TokenStream,
) -> Result<()> {
    let item: syn::Item = parse_quote! {
        struct Session {
            user: String,
        }
    };
    let expansion = identity::expand(&opts_for(kind, false), item)?;
    assert_expansion_contains(&expansion, &expected)
}

#[rstest]
fn optional_identifier_is_wrapped_in_option() -> Result<()> {
    let item: syn::Item = parse_quote! {
        struct Session {
            user: String,
        }
    };
    let expansion = identity::expand(&opts_for(None, true), item)?;
    assert_expansion_contains(
        &expansion,
        &quote! { id: ::core::option::Option<structural::StringId> },
    )
}

#[rstest]
fn injected_field_opts_out_of_structural_derives() -> Result<()> {
    let item: syn::Item = parse_quote! {
        #[derive(StructuralEq, StructuralHash)]
        struct Point {
            x: f64,
            y: f64,
        }
    };
    let expansion = identity::expand(&IdentifyOpts::default(), item)?;
    assert_expansion_contains(
        &expansion,
        &quote! { #[structural(skip)] id: structural::StringId },
    )
}

#[rstest]
fn plain_struct_injection_carries_no_skip_marker() -> Result<()> {
    let item: syn::Item = parse_quote! {
        struct Session {
            user: String,
        }
    };
    let expansion = identity::expand(&IdentifyOpts::default(), item)?;
    let rendered = normalise(&expansion);
    ensure!(
        !rendered.contains("skip"),
        "unexpected skip marker: {rendered}"
    );
    Ok(())
}

#[rstest]
fn payload_free_enum_is_its_own_identity() -> Result<()> {
    let item: syn::Item = parse_quote! {
        enum Mode {
            Active,
            Dormant,
        }
    };
    let expansion = identity::expand(&IdentifyOpts::default(), item)?;
    assert_expansion_contains(&expansion, &quote! { type Id = Self; })?;
    assert_expansion_contains(
        &expansion,
        &quote! {
            fn id(&self) -> &Self::Id {
                self
            }
        },
    )
}

#[rstest]
fn crate_alias_redirects_generated_paths() -> Result<()> {
    let item: syn::Item = parse_quote! {
        struct Session {
            user: String,
        }
    };
    let opts = IdentifyOpts {
        kind: None,
        optional: false,
        crate_path: Some(parse_quote!(my_alias)),
    };
    let expansion = identity::expand(&opts, item)?;
    assert_expansion_contains(&expansion, &quote! { id: my_alias::StringId })?;
    assert_expansion_contains(&expansion, &quote! { impl my_alias::Identifiable for Session })
}

#[rstest]
#[case::tuple(parse_quote! { struct Pair(u32, u32); }, "tuple or unit")]
#[case::unit(parse_quote! { struct Marker; }, "tuple or unit")]
#[case::payload_enum(
    parse_quote! { enum Status { Ok, Error(u32) } },
    "payload-carrying"
)]
#[case::function(parse_quote! { fn demo() {} }, "unsupported declaration kind")]
fn unsupported_declarations_are_rejected(#[case] item: syn::Item, #[case] needle: &str) {
    let err = identity::expand(&IdentifyOpts::default(), item).err();
    assert!(
        err.is_some_and(|e| e.to_string().contains(needle)),
        "expected a diagnostic mentioning '{needle}'"
    );
}

#[rstest]
fn id_type_is_rejected_on_enums() {
    let item: syn::Item = parse_quote! { enum Mode { Active } };
    let err = identity::expand(&opts_for(Some(IdKind::Integer), false), item).err();
    assert!(
        err.is_some_and(|e| e.to_string().contains("do not apply to enum declarations")),
        "expected the inapplicable-options diagnostic"
    );
}
