//! Expression nodes.
//!
//! The external parser is the sole producer of trees; this module defines
//! the shapes it builds. Every variant owns its child expressions and
//! tokens outright - no parent links, no sharing, no cycles - so a tree is
//! a self-contained value. `Clone` produces a deep structural copy whose
//! tokens share their text; dropping the original leaves the copy intact.
//!
//! Spans are computed on demand from current children rather than cached,
//! so they always reflect the subtree as it stands.
//!
//! `Display` reconstructs source-like text. Binary operators take one space
//! on each side, except the member-access family, which is written tight
//! (`actor.health`, `Actor::spawn`) the way scripts write it.

use std::fmt;

use crate::{Span, Spanned, Token};

/// A parsed script expression.
///
/// Closed over variant - every visitor handles all of them - and open over
/// behavior via [`ExprVisitor`](crate::ExprVisitor).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Literal or bare name: wraps exactly one token.
    Literal(LiteralExpr),
    /// Prefix operation: `-x`, `!alive`
    Unary(UnaryExpr),
    /// Infix operation: `a + b`, `actor.health`
    Binary(BinaryExpr),
    /// Parenthesized expression: `(a + b)`
    Grouping(GroupingExpr),
    /// Invocation: `spawn(kind, 3)`
    Call(CallExpr),
    /// Subscript: `items[0]`
    Index(IndexExpr),
}

impl Expr {
    /// Wrap a token as a literal node.
    pub fn literal(value: Token) -> Self {
        Expr::Literal(LiteralExpr { value })
    }

    /// Build a prefix operation node.
    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
        })
    }

    /// Build an infix operation node.
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Build a parenthesized node from its delimiters and contents.
    pub fn grouping(open: Token, inner: Expr, close: Token) -> Self {
        Expr::Grouping(GroupingExpr {
            open,
            inner: Box::new(inner),
            close,
        })
    }

    /// Build a call node; `paren` is the closing parenthesis.
    pub fn call(callee: Expr, args: Vec<Expr>, paren: Token) -> Self {
        Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
            paren,
        })
    }

    /// Build a subscript node; `bracket` is the closing bracket.
    pub fn index(target: Expr, index: Expr, bracket: Token) -> Self {
        Expr::Index(IndexExpr {
            target: Box::new(target),
            index: Box::new(index),
            bracket,
        })
    }

    /// Source range covered by this node, computed from current children.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(node) => node.span(),
            Expr::Unary(node) => node.span(),
            Expr::Binary(node) => node.span(),
            Expr::Grouping(node) => node.span(),
            Expr::Call(node) => node.span(),
            Expr::Index(node) => node.span(),
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        Expr::span(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(node) => fmt::Display::fmt(node, f),
            Expr::Unary(node) => fmt::Display::fmt(node, f),
            Expr::Binary(node) => fmt::Display::fmt(node, f),
            Expr::Grouping(node) => fmt::Display::fmt(node, f),
            Expr::Call(node) => fmt::Display::fmt(node, f),
            Expr::Index(node) => fmt::Display::fmt(node, f),
        }
    }
}

/// Literal or bare-name expression.
///
/// Covers numbers, strings, and plain identifiers; the token kind tells
/// them apart.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LiteralExpr {
    pub value: Token,
}

impl Spanned for LiteralExpr {
    fn span(&self) -> Span {
        self.value.span
    }
}

impl fmt::Display for LiteralExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.content)
    }
}

/// Prefix operation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

impl Spanned for UnaryExpr {
    fn span(&self) -> Span {
        self.operator.span.union(self.operand.span())
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator.content, self.operand)
    }
}

/// Infix operation over two subtrees.
///
/// Member access is not a separate variant: it is a binary node whose
/// operator token is one of the member-access family, see
/// [`TokenKind::is_member_access`](crate::TokenKind::is_member_access).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Spanned for BinaryExpr {
    fn span(&self) -> Span {
        self.left.span().union(self.right.span())
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.kind.is_member_access() {
            write!(f, "{}{}{}", self.left, self.operator.content, self.right)
        } else {
            write!(f, "{} {} {}", self.left, self.operator.content, self.right)
        }
    }
}

/// Parenthesized expression, delimiters included.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingExpr {
    pub open: Token,
    pub inner: Box<Expr>,
    pub close: Token,
}

impl Spanned for GroupingExpr {
    fn span(&self) -> Span {
        self.open.span.union(self.close.span)
    }
}

impl fmt::Display for GroupingExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.open.content, self.inner, self.close.content)
    }
}

/// Invocation with positional arguments.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    /// Closing parenthesis; anchors the end of the call's span.
    pub paren: Token,
}

impl Spanned for CallExpr {
    fn span(&self) -> Span {
        self.callee.span().union(self.paren.span)
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// Subscript access.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexExpr {
    pub target: Box<Expr>,
    pub index: Box<Expr>,
    /// Closing bracket; anchors the end of the subscript's span.
    pub bracket: Token,
}

impl Spanned for IndexExpr {
    fn span(&self) -> Span {
        self.target.span().union(self.bracket.span)
    }
}

impl fmt::Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.target, self.index)
    }
}
