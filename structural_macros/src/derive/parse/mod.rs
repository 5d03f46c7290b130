//! Attribute parsing for the structural transformers.
//!
//! Two attribute surfaces exist: the `#[structural(...)]` helper recognised
//! by the derives, and the option list of the `#[identify]` attribute macro.
//! Unknown keys are rejected rather than discarded: a misspelt option must
//! fail the expansion, never silently default.

use syn::Token;
use syn::meta::ParseNestedMeta;

pub(crate) mod shape;
#[cfg(test)]
mod tests;
pub(crate) mod type_utils;

pub(crate) use shape::{Member, Shape, Slot, VariantFields, VariantShape, collect};
pub(crate) use type_utils::{CellInner, FloatWidth, SlotKind};

/// Container-level `#[structural(...)]` attributes recognised by the derives.
///
/// Only `crate = "alias"` is accepted; it redirects generated references to
/// the runtime crate through a renamed dependency.
#[derive(Default, Clone)]
pub(crate) struct ContainerAttrs {
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[structural(...)]` attributes recognised by the derives.
///
/// `skip` excludes the field from both equality and hash derivation, the
/// analogue of a computed property that stores no value of its own.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
}

/// Options accepted by the `#[identify]` attribute macro.
#[derive(Default, Clone)]
pub(crate) struct IdentifyOpts {
    pub kind: Option<IdKind>,
    pub optional: bool,
    pub crate_path: Option<syn::Path>,
}

/// Identifier kinds with a known default-value strategy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum IdKind {
    String,
    Integer,
    Double,
    Boolean,
    Token,
}

impl IdKind {
    pub(crate) fn parse(s: &str, span: proc_macro2::Span) -> Result<Self, syn::Error> {
        match s {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "double" => Ok(Self::Double),
            "boolean" => Ok(Self::Boolean),
            "token" => Ok(Self::Token),
            _ => Err(syn::Error::new(
                span,
                format!(
                    "identifier generation for '{s}' is not implemented; expected one of \
                     \"string\", \"integer\", \"double\", \"boolean\", or \"token\""
                ),
            )),
        }
    }
}

impl IdentifyOpts {
    /// Applies one `#[identify(...)]` option.
    pub(crate) fn apply(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        let Some(ident) = meta.path.get_ident().map(ToString::to_string) else {
            return Err(meta.error("expected `id_type`, `optional`, or `crate`"));
        };
        match ident.as_str() {
            "id_type" => {
                let s = lit_str(meta, "id_type")?;
                self.kind = Some(IdKind::parse(&s.value(), s.span())?);
                Ok(())
            }
            "optional" => {
                self.optional = flag_value(meta)?;
                Ok(())
            }
            "crate" => {
                self.crate_path = Some(path_value(meta, "crate")?);
                Ok(())
            }
            other => Err(meta.error(format!(
                "unknown #[identify] option '{other}'; expected `id_type`, `optional`, or `crate`"
            ))),
        }
    }
}

/// Iterate all `#[structural(...)]` attributes once and apply a callback.
fn parse_structural<F>(attrs: &[syn::Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("structural")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Extracts container-level `#[structural(...)]` metadata.
pub(crate) fn parse_container_attrs(attrs: &[syn::Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    parse_structural(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("crate") => {
                out.crate_path = Some(path_value(meta, "crate")?);
                Ok(())
            }
            _ => Err(meta.error("unknown #[structural] option; expected `crate`")),
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[structural(...)]` attributes.
pub(crate) fn parse_field_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_structural(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("skip") => {
                out.skip = flag_value(meta)?;
                Ok(())
            }
            _ => Err(meta.error("unknown #[structural] field option; expected `skip`")),
        }
    })?;
    Ok(out)
}

/// Parses a string-literal option value.
fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<syn::LitStr> {
    let lit: syn::Lit = meta.value()?.parse()?;
    match lit {
        syn::Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string literal"),
        )),
    }
}

/// Parses a flag that may appear bare (`optional`) or valued
/// (`optional = false`).
fn flag_value(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        Ok(meta.value()?.parse::<syn::LitBool>()?.value)
    } else {
        Ok(true)
    }
}

/// Parses a string-literal option value holding a path.
fn path_value(meta: &ParseNestedMeta, key: &str) -> syn::Result<syn::Path> {
    let s = lit_str(meta, key)?;
    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))
}
