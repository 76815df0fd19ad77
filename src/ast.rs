//! The syntax tree contract consumed by rules.
//!
//! This crate does not parse source code, a host (a linter runner, an editor
//! integration, ...) produces these nodes from whatever parser it uses and
//! hands them to [`run_rule`](crate::run_rule) or [`lint_ast`](crate::lint_ast).
//! Only the productions rules actually inspect are modeled; everything else
//! is an [`Expr::Other`] which keeps its children so traversal still descends
//! through it.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A byte range inside the analyzed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// A value which can be used as the range inside of a diagnostic.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl Spanned for Range<usize> {
    fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl<T: Spanned> Spanned for &T {
    fn span(&self) -> Span {
        (*self).span()
    }
}

/// An expression node supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    Member(MemberExpr),
    Call(CallExpr),
    /// A production this crate does not model. Children are kept so
    /// traversal reaches call expressions nested inside it.
    Other(OtherExpr),
}

/// An identifier, e.g. `lodash` in `lodash.pluck(list, "id")`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: impl Into<Span>) -> Self {
        Self {
            name: name.into(),
            span: span.into(),
        }
    }
}

/// A member access expression, e.g. `_.pluck` or `list[idx]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: MemberProp,
    pub span: Span,
}

impl MemberExpr {
    /// The statically known property name, `None` for computed access.
    pub fn prop_name(&self) -> Option<&Ident> {
        match &self.property {
            MemberProp::Static(ident) => Some(ident),
            MemberProp::Computed(_) => None,
        }
    }
}

/// The property side of a member access.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberProp {
    /// `a.b`
    Static(Ident),
    /// `a[expr]`, no static name exists.
    Computed(Box<Expr>),
}

/// A call expression, e.g. `_.pluck(list, "id")`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// Catch-all for productions rules never look at directly.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherExpr {
    pub children: Vec<Expr>,
    pub span: Span,
}

impl Expr {
    pub fn ident(name: impl Into<String>, span: impl Into<Span>) -> Expr {
        Expr::Ident(Ident::new(name, span))
    }

    pub fn member(object: Expr, property: Ident, span: impl Into<Span>) -> Expr {
        Expr::Member(MemberExpr {
            object: Box::new(object),
            property: MemberProp::Static(property),
            span: span.into(),
        })
    }

    pub fn computed_member(object: Expr, index: Expr, span: impl Into<Span>) -> Expr {
        Expr::Member(MemberExpr {
            object: Box::new(object),
            property: MemberProp::Computed(Box::new(index)),
            span: span.into(),
        })
    }

    pub fn call(callee: Expr, args: Vec<Expr>, span: impl Into<Span>) -> Expr {
        Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
            span: span.into(),
        })
    }

    pub fn other(children: Vec<Expr>, span: impl Into<Span>) -> Expr {
        Expr::Other(OtherExpr {
            children,
            span: span.into(),
        })
    }

    pub fn as_ident(&self) -> Option<&Ident> {
        match self {
            Expr::Ident(ident) => Some(ident),
            _ => None,
        }
    }

    pub fn as_member(&self) -> Option<&MemberExpr> {
        match self {
            Expr::Member(member) => Some(member),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    /// All nodes in this subtree in preorder, including the node itself.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    fn push_children<'a>(&'a self, stack: &mut Vec<&'a Expr>) {
        match self {
            Expr::Ident(_) => {}
            Expr::Member(member) => {
                if let MemberProp::Computed(index) = &member.property {
                    stack.push(index);
                }
                stack.push(&member.object);
            }
            Expr::Call(call) => {
                for arg in call.args.iter().rev() {
                    stack.push(arg);
                }
                stack.push(&call.callee);
            }
            Expr::Other(other) => {
                for child in other.children.iter().rev() {
                    stack.push(child);
                }
            }
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Ident(ident) => ident.span,
            Expr::Member(member) => member.span,
            Expr::Call(call) => call.span,
            Expr::Other(other) => other.span,
        }
    }
}

impl Spanned for Ident {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for MemberExpr {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for CallExpr {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for OtherExpr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Preorder iterator over a subtree, see [`Expr::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<&'a Expr> {
        let node = self.stack.pop()?;
        node.push_children(&mut self.stack);
        Some(node)
    }
}
