//! Type emission for artifact to Rust code generation
//!
//! This module handles emitting Rust type tokens from IR types, plus visibility and identifier helpers.

use persistgen_core::lang::conventions::SETTER_PREFIX;
use persistgen_core::lang::rust_keywords::escape_keyword;
use persistgen_core::strings::to_snake_case;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, Ident};

use super::super::decl::Visibility;
use super::super::types::IrType;
use super::{ArtifactEmitter, EmitError};

impl ArtifactEmitter<'_> {
    /// Emit a type as Rust tokens.
    pub(super) fn emit_type(&self, ty: &IrType) -> Result<TokenStream, EmitError> {
        let rt = &self.runtime;
        Ok(match ty {
            IrType::Uuid => quote! { #rt::Uuid },
            IrType::DateTime => quote! { #rt::DateTime<#rt::Utc> },
            IrType::Bool => quote! { bool },
            IrType::String => quote! { String },
            IrType::Nullable(inner) => {
                let i = self.emit_type(inner)?;
                quote! { Option<#i> }
            }
            IrType::Declared(declared) => {
                let parsed = syn::parse_str::<syn::Type>(declared.as_str()).map_err(|e| EmitError::InvalidType {
                    ty: declared.to_string(),
                    reason: e.to_string(),
                })?;
                quote! { #parsed }
            }
        })
    }

    pub(super) fn emit_visibility(&self, vis: Visibility) -> TokenStream {
        match vis {
            Visibility::Private => quote! {},
            Visibility::Public => quote! { pub },
            Visibility::Crate => quote! { pub(crate) },
        }
    }
}

/// Parse an identifier, reporting keywords and malformed names as errors.
pub(super) fn parse_ident(name: &str) -> Result<Ident, EmitError> {
    syn::parse_str::<Ident>(name).map_err(|e| EmitError::InvalidIdent {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Member identifier of a property (`IdRegistration` → `id_registration`).
pub(super) fn member_ident(property: &str) -> Result<Ident, EmitError> {
    parse_ident(&escape_keyword(&to_snake_case(property)))
}

/// Setter identifier of a property (`IdRegistration` → `set_id_registration`).
pub(super) fn setter_ident(property: &str) -> Result<Ident, EmitError> {
    parse_ident(&format!("{SETTER_PREFIX}{}", to_snake_case(property)))
}

/// Identifier of a backing field, kept as declared.
pub(super) fn field_ident(name: &str) -> Result<Ident, EmitError> {
    parse_ident(&escape_keyword(name))
}

/// Parse pass-through outer attributes. One entry may hold several attributes.
pub(super) fn parse_attributes(texts: &[String]) -> Result<Vec<Attribute>, EmitError> {
    let mut attrs = Vec::with_capacity(texts.len());
    for text in texts {
        let parsed = Attribute::parse_outer
            .parse_str(text)
            .map_err(|e| EmitError::InvalidAttribute {
                attr: text.clone(),
                reason: e.to_string(),
            })?;
        attrs.extend(parsed);
    }
    Ok(attrs)
}

/// The `#[cfg(...)]` attributes among `attrs`; they also gate every member derived from the item.
pub(super) fn cfg_attributes(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect()
}
