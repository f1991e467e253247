//! Raw host model: classes, fields and their annotation arguments as discovered by a host.
//!
//! This is the input contract of the generator. Hosts (the JSON model loader, the `#[managed]` proc macro)
//! fill these types from whatever syntax they understand; the generator never looks at syntax itself.
//!
//! Every annotation argument is optional here. Defaults are applied by the descriptor resolvers, not by
//! hosts, so "unset" and "explicitly false" stay distinguishable until resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A whole model: every candidate class found by a host in one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawModel {
    #[serde(default)]
    pub classes: Vec<RawClass>,
}

/// A candidate class with its raw class-level annotations and grouped fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawClass {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub scope: DeclarationScope,
    #[serde(default)]
    pub visibility: DeclaredVisibility,
    /// Derive paths declared on the host type, in source order.
    #[serde(default)]
    pub derives: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<ClassAnnotation>,
    /// Outer attributes re-emitted on the generated struct, as source text (`#[serde(rename_all = "camelCase")]`).
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<RawField>,
}

impl RawClass {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            scope: DeclarationScope::Namespace,
            visibility: DeclaredVisibility::Public,
            derives: Vec::new(),
            annotations: Vec::new(),
            attributes: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: ClassAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_field(mut self, field: RawField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn with_scope(mut self, scope: DeclarationScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_visibility(mut self, visibility: DeclaredVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Where a class is declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationScope {
    /// Directly inside a namespace/module.
    #[default]
    Namespace,
    /// Inside another type.
    Nested { parent: String },
}

/// Visibility as declared on the host type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredVisibility {
    Private,
    #[default]
    Public,
    Crate,
}

/// A class-level annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassAnnotation {
    /// The qualifying `managed` annotation.
    #[serde(alias = "Managed")]
    Managed(ManagedArgs),
    /// Any other annotation; kept so qualification counts see the full list.
    Other(String),
}

/// Named arguments of the `managed` annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManagedArgs {
    #[serde(default, alias = "EnableAudit")]
    pub enable_audit: Option<bool>,
    #[serde(default, alias = "EnableSoftDelete")]
    pub enable_soft_delete: Option<bool>,
}

/// A candidate field with its raw annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    pub name: String,
    /// Declared type as source text (e.g. `String`, `Option<u32>`).
    pub ty: String,
    #[serde(default)]
    pub annotations: Vec<FieldAnnotation>,
    /// Outer attributes re-emitted on the backing field, as source text.
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl RawField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Shorthand for a field carrying exactly one `persisted` annotation.
    pub fn persisted(name: impl Into<String>, ty: impl Into<String>, args: PersistedArgs) -> Self {
        Self::new(name, ty).with_annotation(FieldAnnotation::Persisted(args))
    }

    pub fn with_annotation(mut self, annotation: FieldAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }
}

/// A field-level annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldAnnotation {
    /// The qualifying `persisted` annotation.
    #[serde(alias = "Persisted")]
    Persisted(PersistedArgs),
    Other(String),
}

/// Persistence directive as written by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistedVia {
    #[serde(alias = "direct")]
    Direct,
    #[serde(alias = "nested")]
    Nested,
    #[serde(alias = "nested_collection")]
    NestedCollection,
}

impl fmt::Display for PersistedVia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PersistedVia::Direct => "Direct",
            PersistedVia::Nested => "Nested",
            PersistedVia::NestedCollection => "NestedCollection",
        };
        write!(f, "{s}")
    }
}

/// Named arguments of the `persisted` annotation.
///
/// `set_all_actions` provides the base value of the three per-action flags; an explicit per-action flag
/// wins over it. Hosts that read arguments in source order should call [`PersistedArgs::set_all_actions`]
/// so a later `set_all_actions` overrides earlier per-action flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistedArgs {
    #[serde(default, alias = "PersistedVia")]
    pub persisted_via: Option<PersistedVia>,
    #[serde(default, alias = "PropertyName")]
    pub property_name: Option<String>,
    #[serde(default, alias = "Prefix")]
    pub prefix: Option<String>,
    #[serde(default, alias = "TypeOverride")]
    pub type_override: Option<String>,
    #[serde(default, alias = "SetOnInsert")]
    pub set_on_insert: Option<bool>,
    #[serde(default, alias = "SetOnUpdate")]
    pub set_on_update: Option<bool>,
    #[serde(default, alias = "SetOnDelete")]
    pub set_on_delete: Option<bool>,
    #[serde(default, alias = "SetAllActions")]
    pub set_all_actions: Option<bool>,
}

impl PersistedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_insert(mut self) -> Self {
        self.set_on_insert = Some(true);
        self
    }

    pub fn on_update(mut self) -> Self {
        self.set_on_update = Some(true);
        self
    }

    pub fn on_delete(mut self) -> Self {
        self.set_on_delete = Some(true);
        self
    }

    pub fn with_property_name(mut self, name: impl Into<String>) -> Self {
        self.property_name = Some(name.into());
        self
    }

    pub fn with_directive(mut self, via: PersistedVia) -> Self {
        self.persisted_via = Some(via);
        self
    }

    /// Set all three per-action flags at once, overriding any earlier explicit flag.
    pub fn set_all_actions(&mut self, value: bool) {
        self.set_all_actions = Some(value);
        self.set_on_insert = Some(value);
        self.set_on_update = Some(value);
        self.set_on_delete = Some(value);
    }
}
