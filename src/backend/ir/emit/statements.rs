//! Statement emission for mapper bodies.

use persistgen_core::lang::conventions::{AUTHORITY_PARAM, RUNTIME_NOW_FN};
use proc_macro2::TokenStream;
use quote::quote;

use super::super::ClassArtifact;
use super::super::stmt::{MapperStmt, PropertyAccess, PropertyRef, StampValue};
use super::types::{member_ident, parse_ident, setter_ident};
use super::{ArtifactEmitter, EmitError};

impl ArtifactEmitter<'_> {
    pub(super) fn emit_stmt(&self, artifact: &ClassArtifact, stmt: &MapperStmt) -> Result<TokenStream, EmitError> {
        let authority = parse_ident(AUTHORITY_PARAM)?;
        match stmt {
            MapperStmt::Copy(target) => {
                let getter = member_ident(&target.name)?;
                match target.access {
                    PropertyAccess::Accessor => {
                        let setter = setter_ident(&target.name)?;
                        let cfgs = self.property_cfgs(artifact, &target.name)?;
                        Ok(quote! { #(#cfgs)* #authority.#setter(self.#getter().clone()); })
                    }
                    PropertyAccess::Field => Ok(quote! { #authority.#getter = self.#getter.clone(); }),
                }
            }
            MapperStmt::Stamp { target, value } => {
                let value = self.emit_stamp_value(artifact, target, *value)?;
                match target.access {
                    PropertyAccess::Accessor => {
                        let setter = setter_ident(&target.name)?;
                        Ok(quote! { #authority.#setter(#value); })
                    }
                    PropertyAccess::Field => {
                        let field = member_ident(&target.name)?;
                        Ok(quote! { #authority.#field = #value; })
                    }
                }
            }
        }
    }

    /// The stamped literal, wrapped in `Some` when the target is nullable.
    fn emit_stamp_value(
        &self,
        artifact: &ClassArtifact,
        target: &PropertyRef,
        value: StampValue,
    ) -> Result<TokenStream, EmitError> {
        let property = artifact
            .property(&target.name)
            .ok_or_else(|| EmitError::Unsupported(format!("stamp targets unknown property '{}'", target.name)))?;

        let rt = &self.runtime;
        let value = match value {
            StampValue::CurrentUtcTime => {
                let now = parse_ident(RUNTIME_NOW_FN)?;
                quote! { #rt::#now() }
            }
            StampValue::Bool(b) => quote! { #b },
        };

        Ok(if property.ty.is_nullable() {
            quote! { ::core::option::Option::Some(#value) }
        } else {
            value
        })
    }
}
