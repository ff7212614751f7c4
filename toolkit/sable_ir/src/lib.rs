//! Sable script IR - expression tree types
//!
//! Core data structures for tooling that inspects Sable scripts:
//! - Spans for source locations
//! - Tokens, the contract with the external lexer
//! - Expression nodes, the contract with the external parser
//! - Visitor dispatch for external traversals
//!
//! # Design Philosophy
//!
//! - **Own everything**: a tree is a self-contained value. Parents own
//!   children outright and token text is reference-counted, so `Clone` is a
//!   deep structural copy that shares leaf data.
//! - **Compute spans, never store them**: a composite node's span is the
//!   union of its children's spans, derived on demand so it stays correct
//!   across duplication.
//! - **Closed variants, open behavior**: consumers implement
//!   [`ExprVisitor`]; dispatch is an exhaustive match, so adding a variant
//!   breaks every visitor at compile time.
//!
//! This crate performs no validation of its own. Trees are whatever the
//! parser built; failures inside a visitor are that visitor's concern.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr;
mod span;
mod token;
mod traits;
pub mod visitor;

pub use expr::{BinaryExpr, CallExpr, Expr, GroupingExpr, IndexExpr, LiteralExpr, UnaryExpr};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use traits::Spanned;
pub use visitor::ExprVisitor;
