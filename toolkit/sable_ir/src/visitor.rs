//! Visitor dispatch over expression trees.
//!
//! External consumers - pretty-printers, evaluators, static checkers -
//! implement [`ExprVisitor`] and drive traversal through [`Expr::accept`].
//! The tree knows nothing about any particular consumer; dispatch is an
//! exhaustive match over the variant, so every visitor handles every
//! variant at compile time.
//!
//! # Example
//!
//! ```
//! use sable_ir::{Expr, ExprVisitor, Span, Token, TokenKind};
//! use sable_ir::{BinaryExpr, CallExpr, GroupingExpr, IndexExpr, LiteralExpr, UnaryExpr};
//!
//! /// Counts nodes in a subtree.
//! struct NodeCounter;
//!
//! impl ExprVisitor for NodeCounter {
//!     type Output = usize;
//!     type Context = ();
//!
//!     fn visit_literal(&mut self, _expr: &LiteralExpr, _cx: &mut ()) -> usize {
//!         1
//!     }
//!     fn visit_unary(&mut self, expr: &UnaryExpr, cx: &mut ()) -> usize {
//!         1 + expr.operand.accept(self, cx)
//!     }
//!     fn visit_binary(&mut self, expr: &BinaryExpr, cx: &mut ()) -> usize {
//!         1 + expr.left.accept(self, cx) + expr.right.accept(self, cx)
//!     }
//!     fn visit_grouping(&mut self, expr: &GroupingExpr, cx: &mut ()) -> usize {
//!         1 + expr.inner.accept(self, cx)
//!     }
//!     fn visit_call(&mut self, expr: &CallExpr, cx: &mut ()) -> usize {
//!         let args: usize = expr.args.iter().map(|arg| arg.accept(self, cx)).sum();
//!         1 + expr.callee.accept(self, cx) + args
//!     }
//!     fn visit_index(&mut self, expr: &IndexExpr, cx: &mut ()) -> usize {
//!         1 + expr.target.accept(self, cx) + expr.index.accept(self, cx)
//!     }
//! }
//!
//! let one = Expr::literal(Token::new(TokenKind::Int, "1", Span::new(0, 1)));
//! let two = Expr::literal(Token::new(TokenKind::Int, "2", Span::new(4, 5)));
//! let plus = Token::new(TokenKind::Plus, "+", Span::new(2, 3));
//! let sum = Expr::binary(one, plus, two);
//! assert_eq!(sum.accept(&mut NodeCounter, &mut ()), 3);
//! ```

use crate::expr::{BinaryExpr, CallExpr, Expr, GroupingExpr, IndexExpr, LiteralExpr, UnaryExpr};

/// Dispatch target for expression traversal.
///
/// `Output` and `Context` are chosen by the implementor per traversal; the
/// tree fixes neither. Handlers that can fail make `Output` a `Result` -
/// the framework never catches or wraps anything, a handler's failure
/// propagates through [`Expr::accept`] unchanged.
pub trait ExprVisitor {
    /// Value returned from every handler.
    type Output;
    /// Caller-supplied state threaded through traversal.
    type Context;

    fn visit_literal(&mut self, expr: &LiteralExpr, cx: &mut Self::Context) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr, cx: &mut Self::Context) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr, cx: &mut Self::Context) -> Self::Output;
    fn visit_grouping(&mut self, expr: &GroupingExpr, cx: &mut Self::Context) -> Self::Output;
    fn visit_call(&mut self, expr: &CallExpr, cx: &mut Self::Context) -> Self::Output;
    fn visit_index(&mut self, expr: &IndexExpr, cx: &mut Self::Context) -> Self::Output;
}

impl Expr {
    /// Dispatch to the handler matching this node's variant.
    ///
    /// The node and context pass through unchanged. The visitor decides
    /// whether and how to recurse into children.
    pub fn accept<V: ExprVisitor + ?Sized>(
        &self,
        visitor: &mut V,
        cx: &mut V::Context,
    ) -> V::Output {
        match self {
            Expr::Literal(node) => visitor.visit_literal(node, cx),
            Expr::Unary(node) => visitor.visit_unary(node, cx),
            Expr::Binary(node) => visitor.visit_binary(node, cx),
            Expr::Grouping(node) => visitor.visit_grouping(node, cx),
            Expr::Call(node) => visitor.visit_call(node, cx),
            Expr::Index(node) => visitor.visit_index(node, cx),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
