//! Diagnostics for generation passes.
//!
//! Every pass returns a list of [`Diagnostic`]s next to its generated units. This is the channel through
//! which silent outcomes (rejected property names, skipped nested classes) stay observable, and through
//! which per-class failures reach the host.

use std::fmt;

/// A diagnostic attached to one class of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Display form of the class identity (`Namespace::Class`).
    pub class: String,
    /// Field the diagnostic refers to, when there is one.
    pub field: Option<String>,
    pub message: String,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            class: class.into(),
            field: None,
            message: message.into(),
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn error(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, class, message)
    }

    pub fn warning(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, class, message)
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Render a diagnostic for terminal output.
pub fn format_diagnostic(diagnostic: &Diagnostic, color: bool) -> String {
    let (red, yellow, cyan, bold, reset) = if color {
        ("\x1b[31m", "\x1b[33m", "\x1b[36m", "\x1b[1m", "\x1b[0m")
    } else {
        ("", "", "", "", "")
    };

    let kind_color = match diagnostic.severity {
        Severity::Error => red,
        Severity::Warning => yellow,
    };

    let mut out = format!(
        "{bold}{kind_color}{kind}{reset}{bold}: {message}{reset}\n",
        kind = diagnostic.severity,
        message = diagnostic.message,
    );

    match &diagnostic.field {
        Some(field) => out.push_str(&format!("  {cyan}-->{reset} {}.{}\n", diagnostic.class, field)),
        None => out.push_str(&format!("  {cyan}-->{reset} {}\n", diagnostic.class)),
    }

    for note in &diagnostic.notes {
        out.push_str(&format!("  {cyan}= note:{reset} {note}\n"));
    }
    for hint in &diagnostic.hints {
        out.push_str(&format!("  {cyan}= hint:{reset} {hint}\n"));
    }

    out
}

/// Print a diagnostic to stderr.
pub fn print_diagnostic(diagnostic: &Diagnostic) {
    eprintln!("{}", format_diagnostic(diagnostic, true));
}

// ============================================================================
// Diagnostic catalog
// ============================================================================

pub mod catalog {
    use super::*;

    pub fn naming_rejected(class: &str, field: &str) -> Diagnostic {
        Diagnostic::warning(class, format!("field '{field}' does not yield a distinct property name"))
            .with_field(field)
            .with_note("the field is excluded from generated accessors and from every mapper")
            .with_hint("prefix the field with '_' or set `property_name` on its `persisted` annotation")
    }

    pub fn structural_rejected(class: &str, parent: &str, strict: bool) -> Diagnostic {
        let diagnostic = if strict {
            Diagnostic::error(class, "managed type must be declared at namespace scope")
        } else {
            Diagnostic::warning(class, "managed type is not declared at namespace scope; no code generated")
        };
        diagnostic
            .with_note(format!("declared inside '{parent}'"))
            .with_hint("move the type to the top level of its module")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_warning() {
        let d = catalog::naming_rejected("Demo::Entity", "Name");
        let text = format_diagnostic(&d, false);
        assert!(text.starts_with("warning: field 'Name' does not yield a distinct property name\n"));
        assert!(text.contains("  --> Demo::Entity.Name\n"));
        assert!(text.contains("= hint:"));
    }

    #[test]
    fn test_structural_severity_follows_strictness() {
        assert_eq!(catalog::structural_rejected("A::B", "Outer", false).severity, Severity::Warning);
        assert!(catalog::structural_rejected("A::B", "Outer", true).is_error());
    }
}
