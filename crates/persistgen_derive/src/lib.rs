//! The `#[managed]` attribute: persistgen's proc-macro host.
//!
//! The attribute reads the struct it is placed on, turns its syntax into the raw model the generator
//! understands, runs one generation pass for that struct and replaces the item with the generated code:
//! the re-declared struct, its `Default` impl, property accessors and the three authority mappers.
//!
//! ```ignore
//! #[managed(enable_audit = true, enable_soft_delete = true)]
//! #[derive(Debug, Clone)]
//! pub struct ManagedEntity {
//!     #[persisted(set_on_insert)]
//!     _userIdExternal: String,
//!     #[persisted(set_on_insert, set_on_update)]
//!     _idRegistration: String,
//! }
//! ```
//!
//! `#[managed]` must come before `#[derive(...)]` so it sees the derive list. Every field carries exactly
//! one `#[persisted(...)]`. Other attributes (docs, `#[serde(...)]`, `#[cfg(...)]`) stay on the struct
//! and its fields; a field's `#[cfg]` also gates its accessors and mapper copies. Warnings (fields without a property name) cannot be reported by a stable proc
//! macro and are dropped; the CLI host reports them.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Attribute, Fields, ItemStruct, LitBool, LitStr, Meta, Token, parse_macro_input};

use persistgen::backend::ir::ConfigurationError;
use persistgen::backend::{GenerationError, GenerationPass, GeneratorConfig};
use persistgen::model::{
    ClassAnnotation, DeclaredVisibility, FieldAnnotation, ManagedArgs, PersistedArgs, PersistedVia, RawClass,
    RawField,
};
use persistgen_core::lang::annotations::{self, AnnotationId, DirectiveId, ManagedArgId, PersistedArgId};

/// Namespace used when the expanding crate's name is unavailable.
const FALLBACK_NAMESPACE: &str = "crate";

/// Generates managed-entity members for a named-field struct.
///
/// Arguments: `enable_audit`, `enable_soft_delete` (flag or `= bool`, default off).
#[proc_macro_attribute]
pub fn managed(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = ManagedArgs::default();
    let parser = syn::meta::parser(|meta| parse_managed_arg(&mut args, &meta));
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemStruct);
    match expand_managed(args, &input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// `name` or `name = true|false`.
fn parse_flag(meta: &ParseNestedMeta<'_>) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        let lit: LitBool = meta.value()?.parse()?;
        Ok(lit.value)
    } else {
        Ok(true)
    }
}

fn arg_name(meta: &ParseNestedMeta<'_>) -> Option<String> {
    meta.path.get_ident().map(|i| i.unraw().to_string())
}

fn parse_managed_arg(args: &mut ManagedArgs, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    let id = arg_name(meta)
        .and_then(|name| annotations::managed_arg_from_str(&name))
        .ok_or_else(|| meta.error("unsupported managed argument. Supported: enable_audit, enable_soft_delete"))?;
    let value = parse_flag(meta)?;
    match id {
        ManagedArgId::EnableAudit => args.enable_audit = Some(value),
        ManagedArgId::EnableSoftDelete => args.enable_soft_delete = Some(value),
    }
    Ok(())
}

fn parse_persisted_arg(args: &mut PersistedArgs, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    let id = arg_name(meta)
        .and_then(|name| annotations::persisted_arg_from_str(&name))
        .ok_or_else(|| {
            meta.error(
                "unsupported persisted argument. Supported: set_on_insert, set_on_update, set_on_delete, \
                 set_all_actions, property_name, prefix, type_override, persisted_via",
            )
        })?;

    match id {
        PersistedArgId::SetOnInsert => args.set_on_insert = Some(parse_flag(meta)?),
        PersistedArgId::SetOnUpdate => args.set_on_update = Some(parse_flag(meta)?),
        PersistedArgId::SetOnDelete => args.set_on_delete = Some(parse_flag(meta)?),
        // Applied in source order: later per-action flags still override it.
        PersistedArgId::SetAllActions => args.set_all_actions(parse_flag(meta)?),
        PersistedArgId::PropertyName => args.property_name = Some(meta.value()?.parse::<LitStr>()?.value()),
        PersistedArgId::Prefix => args.prefix = Some(meta.value()?.parse::<LitStr>()?.value()),
        PersistedArgId::TypeOverride => args.type_override = Some(meta.value()?.parse::<LitStr>()?.value()),
        PersistedArgId::PersistedVia => {
            let path: syn::Path = meta.value()?.parse()?;
            let directive = path
                .segments
                .last()
                .and_then(|s| annotations::directive_from_str(&s.ident.to_string()))
                .ok_or_else(|| meta.error("expected Direct, Nested or NestedCollection"))?;
            args.persisted_via = Some(match directive {
                DirectiveId::Direct => PersistedVia::Direct,
                DirectiveId::Nested => PersistedVia::Nested,
                DirectiveId::NestedCollection => PersistedVia::NestedCollection,
            });
        }
    }
    Ok(())
}

fn attr_name(attr: &Attribute) -> String {
    attr.path()
        .segments
        .last()
        .map(|s| s.ident.to_string())
        .unwrap_or_default()
}

fn is_annotation(attr: &Attribute, id: AnnotationId) -> bool {
    annotations::from_str(&attr_name(attr)) == Some(id)
}

fn parse_persisted_attr(attr: &Attribute) -> syn::Result<PersistedArgs> {
    let mut args = PersistedArgs::new();
    if !matches!(attr.meta, Meta::Path(_)) {
        attr.parse_nested_meta(|meta| parse_persisted_arg(&mut args, &meta))?;
    }
    Ok(args)
}

fn parse_managed_attr(attr: &Attribute) -> syn::Result<ManagedArgs> {
    let mut args = ManagedArgs::default();
    if !matches!(attr.meta, Meta::Path(_)) {
        attr.parse_nested_meta(|meta| parse_managed_arg(&mut args, &meta))?;
    }
    Ok(args)
}

fn declared_visibility(vis: &syn::Visibility) -> syn::Result<DeclaredVisibility> {
    match vis {
        syn::Visibility::Public(_) => Ok(DeclaredVisibility::Public),
        syn::Visibility::Inherited => Ok(DeclaredVisibility::Private),
        syn::Visibility::Restricted(r) if r.in_token.is_none() && r.path.is_ident("crate") => {
            Ok(DeclaredVisibility::Crate)
        }
        syn::Visibility::Restricted(r) => Err(syn::Error::new_spanned(
            r,
            "managed types must be `pub`, `pub(crate)` or private",
        )),
    }
}

/// Build the raw model of `item` as the generator sees it.
fn raw_class(args: ManagedArgs, item: &ItemStruct) -> syn::Result<RawClass> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&item.generics, "managed types cannot be generic"));
    }
    let Fields::Named(named) = &item.fields else {
        return Err(syn::Error::new_spanned(&item.ident, "managed types must have named fields"));
    };

    let namespace = std::env::var("CARGO_CRATE_NAME").unwrap_or_else(|_| FALLBACK_NAMESPACE.to_string());
    let mut class = RawClass::new(namespace, item.ident.unraw().to_string())
        .with_visibility(declared_visibility(&item.vis)?)
        .with_annotation(ClassAnnotation::Managed(args));

    for attr in &item.attrs {
        if attr.path().is_ident("derive") {
            let paths = attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)?;
            for path in paths {
                class = class.with_derive(path.to_token_stream().to_string());
            }
        } else if is_annotation(attr, AnnotationId::Managed) {
            class = class.with_annotation(ClassAnnotation::Managed(parse_managed_attr(attr)?));
        } else {
            class = class
                .with_annotation(ClassAnnotation::Other(attr_name(attr)))
                .with_attribute(attr.to_token_stream().to_string());
        }
    }

    for field in &named.named {
        let Some(ident) = &field.ident else { continue };
        let ty = &field.ty;
        let mut raw = RawField::new(ident.unraw().to_string(), quote!(#ty).to_string());
        for attr in &field.attrs {
            raw = if is_annotation(attr, AnnotationId::Persisted) {
                raw.with_annotation(FieldAnnotation::Persisted(parse_persisted_attr(attr)?))
            } else {
                raw.with_annotation(FieldAnnotation::Other(attr_name(attr)))
                    .with_attribute(attr.to_token_stream().to_string())
            };
        }
        class = class.with_field(raw);
    }

    Ok(class)
}

/// Point a generation error at the field or struct it is about.
fn spanned_error(item: &ItemStruct, error: &GenerationError) -> syn::Error {
    let field = match error {
        GenerationError::Configuration(ConfigurationError::FieldAnnotation { field, .. }) => item
            .fields
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|i| i.unraw() == field.as_str())),
        _ => None,
    };
    match field {
        Some(field) => syn::Error::new_spanned(field, error),
        None => syn::Error::new_spanned(&item.ident, error),
    }
}

fn expand_managed(args: ManagedArgs, item: &ItemStruct) -> syn::Result<TokenStream2> {
    let raw = raw_class(args, item)?;
    let report = GenerationPass::new(GeneratorConfig::default()).expand_class(&raw);

    match report.outcome {
        Ok(Some(tokens)) => Ok(tokens),
        Ok(None) => Err(syn::Error::new_spanned(&item.ident, "no code was generated for this type")),
        Err(error) => Err(spanned_error(item, &error)),
    }
}
