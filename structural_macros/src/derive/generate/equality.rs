//! Structural equality generation.
//!
//! Emits a `PartialEq` implementation comparing members in declaration
//! order with early returns, so the routine short-circuits at the first
//! unequal field. Sum types match on variant identity before comparing
//! payload slots pairwise.
//!
//! Callable slots make their container permanently unequal: a function or
//! closure value has no usable equality, and the generated routine yields
//! `false` for any pair landing on one, even when both sides are the same
//! value. This is a documented limitation carried on purpose; hashing
//! instead skips such slots (see the `hash` module) so the
//! equal-implies-equal-hash invariant still holds.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;

use crate::derive::generate::with_bound;
use crate::derive::parse::{
    Member, Shape, Slot, SlotKind, VariantFields, VariantShape, collect,
};

/// Expands `#[derive(StructuralEq)]`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let body = match collect(input)? {
        Shape::Product(members) => product_eq(&members),
        Shape::Sum(variants) => sum_eq(&variants),
    };
    let ident = &input.ident;
    let generics = with_bound(&input.generics, &syn::parse_quote!(::core::cmp::PartialEq));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                #body
            }
        }
    })
}

fn product_eq(members: &[Member]) -> TokenStream {
    let active: Vec<&Member> = members.iter().filter(|m| !m.skipped).collect();
    if active.iter().any(|m| m.kind == SlotKind::Callable) {
        return quote! {
            let _ = other;
            false
        };
    }
    if active.is_empty() {
        // Two instances of an empty product type are always equal.
        return quote! {
            let _ = other;
            true
        };
    }
    let guards = active.iter().map(|member| {
        let access = &member.access;
        let comparison = match member.kind {
            SlotKind::Cell(_) => quote! { self.#access.get() == other.#access.get() },
            SlotKind::RefCell(_) => {
                quote! { *self.#access.borrow() == *other.#access.borrow() }
            }
            _ => quote! { self.#access == other.#access },
        };
        quote! {
            if !(#comparison) {
                return false;
            }
        }
    });
    quote! {
        #(#guards)*
        true
    }
}

fn sum_eq(variants: &[VariantShape]) -> TokenStream {
    if variants.is_empty() {
        return quote! {
            let _ = other;
            match *self {}
        };
    }
    let arms = variants.iter().map(variant_arm);
    // The catch-all covers mismatched variants; a single-variant enum
    // cannot mismatch and the arm would be unreachable.
    let fallback = (variants.len() > 1).then(|| quote! { _ => false, });
    quote! {
        match (self, other) {
            #(#arms)*
            #fallback
        }
    }
}

fn variant_arm(variant: &VariantShape) -> TokenStream {
    let ident = &variant.ident;
    match &variant.fields {
        VariantFields::Unit => quote! { (Self::#ident, Self::#ident) => true, },
        VariantFields::Tuple(slots) => {
            if has_active_callable(slots) {
                return quote! { (Self::#ident(..), Self::#ident(..)) => false, };
            }
            let mut lhs_pats = Vec::new();
            let mut rhs_pats = Vec::new();
            let mut comparisons = Vec::new();
            for slot in slots {
                if slot.skipped {
                    lhs_pats.push(quote! { _ });
                    rhs_pats.push(quote! { _ });
                } else {
                    let lhs = format_ident!("__lhs_{}", slot.index);
                    let rhs = format_ident!("__rhs_{}", slot.index);
                    comparisons.push(slot_eq(slot, &lhs, &rhs));
                    lhs_pats.push(quote! { #lhs });
                    rhs_pats.push(quote! { #rhs });
                }
            }
            let body = join_comparisons(&comparisons);
            quote! {
                (Self::#ident(#(#lhs_pats),*), Self::#ident(#(#rhs_pats),*)) => #body,
            }
        }
        VariantFields::Named(slots) => {
            if has_active_callable(slots) {
                return quote! { (Self::#ident { .. }, Self::#ident { .. }) => false, };
            }
            let mut lhs_pats = Vec::new();
            let mut rhs_pats = Vec::new();
            let mut comparisons = Vec::new();
            for slot in slots.iter().filter(|s| !s.skipped) {
                let Some(label) = &slot.label else { continue };
                let lhs = format_ident!("__lhs_{}", label);
                let rhs = format_ident!("__rhs_{}", label);
                comparisons.push(slot_eq(slot, &lhs, &rhs));
                lhs_pats.push(quote! { #label: #lhs });
                rhs_pats.push(quote! { #label: #rhs });
            }
            if comparisons.is_empty() {
                return quote! { (Self::#ident { .. }, Self::#ident { .. }) => true, };
            }
            let body = join_comparisons(&comparisons);
            quote! {
                (Self::#ident { #(#lhs_pats,)* .. }, Self::#ident { #(#rhs_pats,)* .. }) => #body,
            }
        }
    }
}

fn has_active_callable(slots: &[Slot]) -> bool {
    slots
        .iter()
        .any(|s| !s.skipped && s.kind == SlotKind::Callable)
}

fn slot_eq(slot: &Slot, lhs: &syn::Ident, rhs: &syn::Ident) -> TokenStream {
    match slot.kind {
        SlotKind::Cell(_) => quote! { #lhs.get() == #rhs.get() },
        SlotKind::RefCell(_) => quote! { *#lhs.borrow() == *#rhs.borrow() },
        SlotKind::Callable => quote! { false },
        _ => quote! { #lhs == #rhs },
    }
}

fn join_comparisons(comparisons: &[TokenStream]) -> TokenStream {
    if comparisons.is_empty() {
        quote! { true }
    } else {
        quote! { #(#comparisons)&&* }
    }
}
