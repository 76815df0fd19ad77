//! A simple builder for facilitating the creation of diagnostics.

use crate::ast::{Span, Spanned};
use serde::{Deserialize, Serialize};

/// Types of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
    Info,
}

/// A range that is indexed in a specific file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpan {
    pub file: usize,
    pub span: Span,
}

impl FileSpan {
    pub fn new(file: usize, span: impl Spanned) -> Self {
        Self {
            file,
            span: span.span(),
        }
    }
}

/// A label attached to a [`Diagnostic`], anchored to a span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDiagnostic {
    pub severity: Severity,
    pub msg: String,
    pub span: FileSpan,
}

/// A footer displayed under the labels, without a span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub severity: Severity,
    pub msg: String,
}

/// A diagnostic message such as an error or a warning, built sequentially.
///
/// The `title` of a finding emitted by a rule is exactly the entry's reasons
/// joined by `", "`; hosts layer rendering, severity remapping and the like
/// on top of this structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file_id: usize,
    pub severity: Severity,
    pub code: Option<String>,
    pub title: String,
    pub children: Vec<SubDiagnostic>,
    pub footers: Vec<Footer>,
}

impl Diagnostic {
    pub fn new(file_id: usize, severity: Severity, title: impl Into<String>) -> Self {
        Self {
            file_id,
            severity,
            code: None,
            title: title.into(),
            children: vec![],
            footers: vec![],
        }
    }

    /// Create a new diagnostic with a severity of error.
    pub fn error(file_id: usize, code: impl Into<String>, title: impl Into<String>) -> Self {
        let mut diagnostic = Self::new(file_id, Severity::Error, title);
        diagnostic.code = Some(code.into());
        diagnostic
    }

    /// Create a new diagnostic with a severity of warning.
    pub fn warning(file_id: usize, code: impl Into<String>, title: impl Into<String>) -> Self {
        let mut diagnostic = Self::new(file_id, Severity::Warning, title);
        diagnostic.code = Some(code.into());
        diagnostic
    }

    /// Attach a primary label to this diagnostic.
    pub fn primary(mut self, span: impl Spanned, msg: impl Into<String>) -> Self {
        self.children.push(SubDiagnostic {
            severity: Severity::Error,
            msg: msg.into(),
            span: FileSpan::new(self.file_id, span),
        });
        self
    }

    /// Attach a secondary label to this diagnostic.
    pub fn secondary(mut self, span: impl Spanned, msg: impl Into<String>) -> Self {
        self.children.push(SubDiagnostic {
            severity: Severity::Info,
            msg: msg.into(),
            span: FileSpan::new(self.file_id, span),
        });
        self
    }

    /// Attach a note footer to this diagnostic.
    pub fn footer_note(mut self, msg: impl Into<String>) -> Self {
        self.footers.push(Footer {
            severity: Severity::Note,
            msg: msg.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;

    #[test]
    fn builder_collects_labels_and_footers() {
        let diagnostic = Diagnostic::error(1, "pluck", "use Array#map")
            .primary(Span::new(0, 19), "")
            .secondary(Span::new(0, 1), "the alias")
            .footer_note("the call goes through the `_` alias");

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.code.as_deref(), Some("pluck"));
        assert_eq!(diagnostic.children.len(), 2);
        assert_eq!(diagnostic.children[0].severity, Severity::Error);
        assert_eq!(diagnostic.children[0].span.file, 1);
        assert_eq!(diagnostic.children[0].span.span, Span::new(0, 19));
        assert_eq!(diagnostic.children[1].severity, Severity::Info);
        assert_eq!(diagnostic.footers.len(), 1);
    }
}
