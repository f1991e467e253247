//! Declaration emission: the re-declared struct, its `Default` impl, accessors and mappers.
//!
//! Pass-through attributes land on the struct and its backing fields. `#[cfg]` attributes also gate
//! the `Default` initializer, accessors and mapper copies of the field they sit on.

use std::collections::HashSet;

use persistgen_core::lang::conventions::{AUTHORITY_PARAM, DEFAULT_DERIVE};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Attribute;

use super::super::ClassArtifact;
use super::super::decl::{DefaultValue, MapperFunction, PropertyKind, PropertyMember};
use super::types::{cfg_attributes, field_ident, member_ident, parse_attributes, parse_ident, setter_ident};
use super::{ArtifactEmitter, EmitError};

impl ArtifactEmitter<'_> {
    /// The struct: `id`, private backing fields, then public generated state.
    pub(super) fn emit_struct(&self, artifact: &ClassArtifact) -> Result<TokenStream, EmitError> {
        let name = parse_ident(&artifact.identity.class_name)?;
        let vis = self.emit_visibility(artifact.visibility);
        let attrs = parse_attributes(&artifact.attributes)?;

        let derives = artifact
            .derives
            .iter()
            .map(|d| {
                syn::parse_str::<syn::Path>(d).map_err(|e| EmitError::InvalidPath {
                    path: d.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let derives: Vec<&syn::Path> = derives
            .iter()
            .filter(|p| !p.segments.last().is_some_and(|s| s.ident == DEFAULT_DERIVE))
            .collect();
        let derive_attr = if derives.is_empty() {
            quote! {}
        } else {
            quote! { #[derive(#(#derives),*)] }
        };

        let id = member_ident(&artifact.id.name)?;
        let id_ty = self.emit_type(&artifact.id.ty)?;

        let mut generated = HashSet::from([id.to_string()]);
        let mut state = Vec::new();
        for property in artifact.properties.iter().filter(|p| !p.is_backed()) {
            let pname = member_ident(&property.name)?;
            let pty = self.emit_type(&property.ty)?;
            generated.insert(pname.to_string());
            state.push(quote! { pub #pname: #pty });
        }

        let mut fields = Vec::with_capacity(artifact.backing_fields.len());
        for field in &artifact.backing_fields {
            let fname = field_ident(&field.name)?;
            if generated.contains(&fname.to_string()) {
                return Err(EmitError::Unsupported(format!(
                    "field '{}' collides with the generated member '{fname}'",
                    field.name
                )));
            }
            let fattrs = parse_attributes(&field.attributes)?;
            let fty = self.emit_type(&field.ty)?;
            fields.push(quote! { #(#fattrs)* #fname: #fty });
        }

        Ok(quote! {
            #derive_attr
            #(#attrs)*
            #[allow(non_snake_case)]
            #vis struct #name {
                pub #id: #id_ty,
                #(#fields,)*
                #(#state,)*
            }
        })
    }

    pub(super) fn emit_default_impl(&self, artifact: &ClassArtifact) -> Result<TokenStream, EmitError> {
        let name = parse_ident(&artifact.identity.class_name)?;
        let cfgs = self.class_cfgs(artifact)?;

        let mut inits = vec![self.emit_state_init(&artifact.id)?];
        for field in &artifact.backing_fields {
            let fname = field_ident(&field.name)?;
            let fcfgs = cfg_attributes(&parse_attributes(&field.attributes)?);
            inits.push(quote! { #(#fcfgs)* #fname: ::core::default::Default::default() });
        }
        for property in artifact.properties.iter().filter(|p| !p.is_backed()) {
            inits.push(self.emit_state_init(property)?);
        }

        Ok(quote! {
            #(#cfgs)*
            impl ::core::default::Default for #name {
                fn default() -> Self {
                    Self {
                        #(#inits,)*
                    }
                }
            }
        })
    }

    /// `#[cfg]` attributes of the host struct, repeated on every generated impl.
    pub(super) fn class_cfgs(&self, artifact: &ClassArtifact) -> Result<Vec<Attribute>, EmitError> {
        Ok(cfg_attributes(&parse_attributes(&artifact.attributes)?))
    }

    /// `#[cfg]` attributes of the backing field behind `property`, if any.
    pub(super) fn property_cfgs(&self, artifact: &ClassArtifact, property: &str) -> Result<Vec<Attribute>, EmitError> {
        let field = match artifact.property(property).map(|p| &p.kind) {
            Some(PropertyKind::Backed { field }) => artifact.backing_field(field),
            _ => None,
        };
        match field {
            Some(field) => Ok(cfg_attributes(&parse_attributes(&field.attributes)?)),
            None => Ok(Vec::new()),
        }
    }

    fn emit_state_init(&self, property: &PropertyMember) -> Result<TokenStream, EmitError> {
        let pname = member_ident(&property.name)?;
        let rt = &self.runtime;
        let value = match &property.kind {
            PropertyKind::State { default } => match default {
                DefaultValue::NewId => quote! { #rt::Uuid::new_v4() },
                DefaultValue::TypeDefault => quote! { ::core::default::Default::default() },
                DefaultValue::Absent => quote! { ::core::option::Option::None },
                DefaultValue::Bool(b) => quote! { #b },
            },
            PropertyKind::Backed { .. } => {
                return Err(EmitError::Unsupported(format!(
                    "property '{}' has a backing field and no state default",
                    property.name
                )));
            }
        };
        Ok(quote! { #pname: #value })
    }

    pub(super) fn emit_accessors(
        &self,
        artifact: &ClassArtifact,
        property: &PropertyMember,
    ) -> Result<TokenStream, EmitError> {
        let PropertyKind::Backed { field } = &property.kind else {
            return Ok(quote! {});
        };
        let cfgs = self.property_cfgs(artifact, &property.name)?;
        let getter = member_ident(&property.name)?;
        let setter = setter_ident(&property.name)?;
        let field = field_ident(field)?;
        let ty = self.emit_type(&property.ty)?;

        Ok(quote! {
            #(#cfgs)*
            pub fn #getter(&self) -> &#ty {
                &self.#field
            }

            #(#cfgs)*
            pub fn #setter(&mut self, value: #ty) {
                self.#field = value;
            }
        })
    }

    pub(super) fn emit_mapper(
        &self,
        artifact: &ClassArtifact,
        mapper: &MapperFunction,
    ) -> Result<TokenStream, EmitError> {
        let name = member_ident(&mapper.name)?;
        let authority = parse_ident(AUTHORITY_PARAM)?;

        let stmts = mapper
            .body
            .iter()
            .map(|s| self.emit_stmt(artifact, s))
            .collect::<Result<Vec<_>, _>>()?;

        let binding = if stmts.is_empty() {
            quote! { #authority }
        } else {
            quote! { mut #authority }
        };

        Ok(quote! {
            #[allow(dead_code)]
            pub(crate) fn #name(&self, #binding: Self) -> Self {
                #(#stmts)*
                #authority
            }
        })
    }
}
