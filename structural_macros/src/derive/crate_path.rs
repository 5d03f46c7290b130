//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `crate = "..."` attribute value into a
//! `TokenStream` that replaces hardcoded `structural::` paths in generated
//! code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the runtime crate path from the parsed attribute.
///
/// Defaults to `structural` when no override is present. When the user
/// specifies `crate = "..."`, the returned tokens reference types through
/// the aliased dependency name instead.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { structural }, |path| quote! { #path })
}
