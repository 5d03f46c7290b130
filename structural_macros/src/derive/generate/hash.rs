//! Structural hash generation.
//!
//! Emits a `core::hash::Hash` implementation feeding each eligible member,
//! in declaration order, into the supplied hasher. Sum types feed the
//! variant's zero-based declaration index before its payload slots, so a
//! no-payload variant contributes exactly its discriminant.
//!
//! Callable slots are skipped outright rather than hashed as a constant;
//! this lowers hash quality for variants carrying them but keeps hashing
//! consistent with the equality policy, which already treats such slots as
//! never comparable. Hashing is purely structural: no per-instance identity
//! token is ever mixed in.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::DeriveInput;

use crate::derive::crate_path;
use crate::derive::generate::with_bound;
use crate::derive::parse::{
    CellInner, FloatWidth, Member, Shape, Slot, SlotKind, VariantFields, VariantShape,
    collect, parse_container_attrs,
};

/// Expands `#[derive(StructuralHash)]`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = parse_container_attrs(&input.attrs)?;
    let root = crate_path::resolve(container.crate_path.as_ref());
    let body = match collect(input)? {
        Shape::Product(members) => product_hash(&members, &root),
        Shape::Sum(variants) => sum_hash(&variants, &root),
    };
    let ident = &input.ident;
    let generics = with_bound(&input.generics, &syn::parse_quote!(::core::hash::Hash));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                #body
            }
        }
    })
}

fn product_hash(members: &[Member], root: &TokenStream) -> TokenStream {
    let statements: Vec<TokenStream> = members
        .iter()
        .filter(|m| !m.skipped)
        .filter_map(|m| member_hash(m, root))
        .collect();
    if statements.is_empty() {
        return quote! { let _ = state; };
    }
    quote! { #(#statements)* }
}

fn member_hash(member: &Member, root: &TokenStream) -> Option<TokenStream> {
    let access = &member.access;
    match member.kind {
        SlotKind::Callable => None,
        SlotKind::Plain => Some(quote! {
            ::core::hash::Hash::hash(&self.#access, state);
        }),
        SlotKind::Float(width) => {
            let helper = float_helper(width, root);
            Some(quote! { #helper(self.#access, state); })
        }
        SlotKind::Cell(CellInner::Plain) => Some(quote! {
            ::core::hash::Hash::hash(&self.#access.get(), state);
        }),
        SlotKind::Cell(CellInner::Float(width)) => {
            let helper = float_helper(width, root);
            Some(quote! { #helper(self.#access.get(), state); })
        }
        SlotKind::RefCell(CellInner::Plain) => Some(quote! {
            ::core::hash::Hash::hash(&*self.#access.borrow(), state);
        }),
        SlotKind::RefCell(CellInner::Float(width)) => {
            let helper = float_helper(width, root);
            Some(quote! { #helper(*self.#access.borrow(), state); })
        }
    }
}

fn sum_hash(variants: &[VariantShape], root: &TokenStream) -> TokenStream {
    if variants.is_empty() {
        return quote! {
            let _ = state;
            match *self {}
        };
    }
    let arms = variants.iter().map(|v| variant_arm(v, root));
    quote! {
        match self {
            #(#arms)*
        }
    }
}

fn variant_arm(variant: &VariantShape, root: &TokenStream) -> TokenStream {
    let ident = &variant.ident;
    let discriminant = Literal::usize_suffixed(variant.index);
    let mut statements = vec![quote! {
        ::core::hash::Hash::hash(&#discriminant, state);
    }];
    match &variant.fields {
        VariantFields::Unit => quote! {
            Self::#ident => { #(#statements)* }
        },
        VariantFields::Tuple(slots) => {
            let mut patterns = Vec::new();
            for slot in slots {
                let binding = format_ident!("__slot_{}", slot.index);
                match slot_hash(slot, &binding, root) {
                    Some(statement) => {
                        statements.push(statement);
                        patterns.push(quote! { #binding });
                    }
                    None => patterns.push(quote! { _ }),
                }
            }
            quote! {
                Self::#ident(#(#patterns),*) => { #(#statements)* }
            }
        }
        VariantFields::Named(slots) => {
            let mut patterns = Vec::new();
            for slot in slots {
                let Some(label) = &slot.label else { continue };
                let binding = format_ident!("__slot_{}", label);
                if let Some(statement) = slot_hash(slot, &binding, root) {
                    statements.push(statement);
                    patterns.push(quote! { #label: #binding });
                }
            }
            quote! {
                Self::#ident { #(#patterns,)* .. } => { #(#statements)* }
            }
        }
    }
}

fn slot_hash(slot: &Slot, binding: &syn::Ident, root: &TokenStream) -> Option<TokenStream> {
    if slot.skipped {
        return None;
    }
    match slot.kind {
        SlotKind::Callable => None,
        SlotKind::Plain => Some(quote! {
            ::core::hash::Hash::hash(#binding, state);
        }),
        SlotKind::Float(width) => {
            let helper = float_helper(width, root);
            Some(quote! { #helper(*#binding, state); })
        }
        SlotKind::Cell(CellInner::Plain) => Some(quote! {
            ::core::hash::Hash::hash(&#binding.get(), state);
        }),
        SlotKind::Cell(CellInner::Float(width)) => {
            let helper = float_helper(width, root);
            Some(quote! { #helper(#binding.get(), state); })
        }
        SlotKind::RefCell(CellInner::Plain) => Some(quote! {
            ::core::hash::Hash::hash(&*#binding.borrow(), state);
        }),
        SlotKind::RefCell(CellInner::Float(width)) => {
            let helper = float_helper(width, root);
            Some(quote! { #helper(*#binding.borrow(), state); })
        }
    }
}

fn float_helper(width: FloatWidth, root: &TokenStream) -> TokenStream {
    match width {
        FloatWidth::F32 => quote! { #root::hash::float32 },
        FloatWidth::F64 => quote! { #root::hash::float64 },
    }
}
