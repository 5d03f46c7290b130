//! Code generation for the three transformers.
//!
//! Each submodule turns a shape view into one emitted `impl` block. The
//! fragments are immutable once produced; ownership passes back to the
//! compiler for splicing.

pub(crate) mod equality;
pub(crate) mod hash;
pub(crate) mod identity;
#[cfg(test)]
mod tests;

/// Clones the input generics with `bound` added to every type parameter,
/// mirroring what the standard derives do.
pub(crate) fn with_bound(
    generics: &syn::Generics,
    bound: &syn::TypeParamBound,
) -> syn::Generics {
    let mut out = generics.clone();
    for param in out.type_params_mut() {
        param.bounds.push(bound.clone());
    }
    out
}
