//! Emit a full class artifact to formatted Rust source.
//!
//! This module implements the artifact-level API for the emitter:
//!
//! - assembling the struct, its `Default` impl and the inherent impl as one token stream,
//! - parsing the tokens with `syn` and formatting them with `prettyplease`,
//! - prepending the version header.
//!
//! ## Notes
//!
//! - Emission is codegen-only: it does not read/write files.
//!
//! ## See also
//!
//! - [`crate::backend::ir::emit::ArtifactEmitter`]
//! - [`crate::backend::ir::emit::decls`]
//! - [`crate::backend::ir::emit::statements`]

use proc_macro2::TokenStream;
use quote::quote;

use super::super::ClassArtifact;
use super::types::parse_ident;
use super::{ArtifactEmitter, EmitError};
use crate::version::PERSISTGEN_VERSION;

impl ArtifactEmitter<'_> {
    /// Emit the artifact as tokens, as spliced by the proc-macro host.
    #[tracing::instrument(skip_all, fields(class = %artifact.identity))]
    pub fn emit_tokens(&self, artifact: &ClassArtifact) -> Result<TokenStream, EmitError> {
        let name = parse_ident(&artifact.identity.class_name)?;
        let item_struct = self.emit_struct(artifact)?;
        let default_impl = self.emit_default_impl(artifact)?;
        let cfgs = self.class_cfgs(artifact)?;

        let accessors = artifact
            .properties
            .iter()
            .map(|p| self.emit_accessors(artifact, p))
            .collect::<Result<Vec<_>, _>>()?;
        let mappers = artifact
            .mappers
            .iter()
            .map(|m| self.emit_mapper(artifact, m))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! {
            #item_struct

            #default_impl

            #(#cfgs)*
            impl #name {
                #(#accessors)*
                #(#mappers)*
            }
        })
    }

    /// Emit the artifact as formatted source text.
    ///
    /// Identical artifacts under identical configuration render to byte-identical text.
    pub fn emit_artifact(&self, artifact: &ClassArtifact) -> Result<String, EmitError> {
        let tokens = self.emit_tokens(artifact)?;
        let syntax_tree = syn::parse2::<syn::File>(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
        let formatted = prettyplease::unparse(&syntax_tree);

        if !self.config.emit_header {
            return Ok(formatted);
        }

        let header = format!(
            "// Generated by persistgen v{} for {}\n// Regenerated on every pass; edits are overwritten.\n\n",
            PERSISTGEN_VERSION, artifact.identity
        );
        Ok(header + &formatted)
    }
}
