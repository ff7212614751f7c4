use pretty_assertions::assert_eq;

use crate::{
    BinaryExpr, CallExpr, Expr, ExprVisitor, GroupingExpr, IndexExpr, LiteralExpr, Span, Token,
    TokenKind, UnaryExpr,
};

fn token(kind: TokenKind, content: &str, start: u32, end: u32) -> Token {
    Token::new(kind, content, Span::new(start, end))
}

fn ident(name: &str, start: u32) -> Expr {
    let end = start + u32::try_from(name.len()).unwrap();
    Expr::literal(token(TokenKind::Ident, name, start, end))
}

fn int(digits: &str, start: u32) -> Expr {
    let end = start + u32::try_from(digits.len()).unwrap();
    Expr::literal(token(TokenKind::Int, digits, start, end))
}

/// Visitor that counts every node in the tree.
struct NodeCounter;

impl ExprVisitor for NodeCounter {
    type Output = usize;
    type Context = ();

    fn visit_literal(&mut self, _expr: &LiteralExpr, _cx: &mut ()) -> usize {
        1
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, cx: &mut ()) -> usize {
        1 + expr.operand.accept(self, cx)
    }

    fn visit_binary(&mut self, expr: &BinaryExpr, cx: &mut ()) -> usize {
        1 + expr.left.accept(self, cx) + expr.right.accept(self, cx)
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr, cx: &mut ()) -> usize {
        1 + expr.inner.accept(self, cx)
    }

    fn visit_call(&mut self, expr: &CallExpr, cx: &mut ()) -> usize {
        let args: usize = expr.args.iter().map(|arg| arg.accept(self, cx)).sum();
        1 + expr.callee.accept(self, cx) + args
    }

    fn visit_index(&mut self, expr: &IndexExpr, cx: &mut ()) -> usize {
        1 + expr.target.accept(self, cx) + expr.index.accept(self, cx)
    }
}

#[test]
fn test_visit_single_literal() {
    let expr = int("42", 0);
    assert_eq!(expr.accept(&mut NodeCounter, &mut ()), 1);
}

#[test]
fn test_visit_counts_every_node_once() {
    // (a + b) * items[0]
    let grouped = Expr::grouping(
        token(TokenKind::LParen, "(", 0, 1),
        Expr::binary(ident("a", 1), token(TokenKind::Plus, "+", 3, 4), ident("b", 5)),
        token(TokenKind::RParen, ")", 6, 7),
    );
    let subscript = Expr::index(
        ident("items", 10),
        int("0", 16),
        token(TokenKind::RBracket, "]", 17, 18),
    );
    let expr = Expr::binary(grouped, token(TokenKind::Star, "*", 8, 9), subscript);

    // binary + grouping + inner binary + a + b + index + items + 0
    assert_eq!(expr.accept(&mut NodeCounter, &mut ()), 8);
}

/// Visitor that collects literal text into the caller's buffer.
struct LiteralCollector;

impl ExprVisitor for LiteralCollector {
    type Output = ();
    type Context = Vec<String>;

    fn visit_literal(&mut self, expr: &LiteralExpr, cx: &mut Vec<String>) {
        cx.push(expr.value.content.to_string());
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, cx: &mut Vec<String>) {
        expr.operand.accept(self, cx);
    }

    fn visit_binary(&mut self, expr: &BinaryExpr, cx: &mut Vec<String>) {
        expr.left.accept(self, cx);
        expr.right.accept(self, cx);
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr, cx: &mut Vec<String>) {
        expr.inner.accept(self, cx);
    }

    fn visit_call(&mut self, expr: &CallExpr, cx: &mut Vec<String>) {
        expr.callee.accept(self, cx);
        for arg in &expr.args {
            arg.accept(self, cx);
        }
    }

    fn visit_index(&mut self, expr: &IndexExpr, cx: &mut Vec<String>) {
        expr.target.accept(self, cx);
        expr.index.accept(self, cx);
    }
}

#[test]
fn test_context_threads_through_traversal() {
    // a + heal(b, c)
    let call = Expr::call(
        ident("heal", 4),
        vec![ident("b", 9), ident("c", 12)],
        token(TokenKind::RParen, ")", 13, 14),
    );
    let expr = Expr::binary(ident("a", 0), token(TokenKind::Plus, "+", 2, 3), call);

    let mut names = Vec::new();
    expr.accept(&mut LiteralCollector, &mut names);
    assert_eq!(names, ["a", "heal", "b", "c"]);
}

/// Small constant evaluator over integer literals.
///
/// Exercises a caller-chosen fallible output type; errors pass through
/// `accept` untouched.
struct ConstEval;

impl ExprVisitor for ConstEval {
    type Output = Result<i64, String>;
    type Context = ();

    fn visit_literal(&mut self, expr: &LiteralExpr, _cx: &mut ()) -> Self::Output {
        expr.value
            .content
            .parse::<i64>()
            .map_err(|err| err.to_string())
    }

    fn visit_unary(&mut self, expr: &UnaryExpr, cx: &mut ()) -> Self::Output {
        let value = expr.operand.accept(self, cx)?;
        match expr.operator.kind {
            TokenKind::Minus => Ok(-value),
            kind => Err(format!("unsupported unary operator {kind:?}")),
        }
    }

    fn visit_binary(&mut self, expr: &BinaryExpr, cx: &mut ()) -> Self::Output {
        let left = expr.left.accept(self, cx)?;
        let right = expr.right.accept(self, cx)?;
        match expr.operator.kind {
            TokenKind::Plus => Ok(left + right),
            TokenKind::Minus => Ok(left - right),
            TokenKind::Star => Ok(left * right),
            kind => Err(format!("unsupported operator {kind:?}")),
        }
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr, cx: &mut ()) -> Self::Output {
        expr.inner.accept(self, cx)
    }

    fn visit_call(&mut self, _expr: &CallExpr, _cx: &mut ()) -> Self::Output {
        Err("calls are not constant".to_owned())
    }

    fn visit_index(&mut self, _expr: &IndexExpr, _cx: &mut ()) -> Self::Output {
        Err("subscripts are not constant".to_owned())
    }
}

#[test]
fn test_caller_chosen_output_type() {
    // 1 + 2 * 3
    let product = Expr::binary(int("2", 4), token(TokenKind::Star, "*", 6, 7), int("3", 8));
    let expr = Expr::binary(int("1", 0), token(TokenKind::Plus, "+", 2, 3), product);
    assert_eq!(expr.accept(&mut ConstEval, &mut ()), Ok(7));
}

#[test]
fn test_unary_negation_evaluates() {
    let expr = Expr::unary(token(TokenKind::Minus, "-", 0, 1), int("9", 1));
    assert_eq!(expr.accept(&mut ConstEval, &mut ()), Ok(-9));
}

#[test]
fn test_handler_failures_propagate_unchanged() {
    let expr = Expr::call(ident("rand", 0), vec![], token(TokenKind::RParen, ")", 5, 6));
    assert_eq!(
        expr.accept(&mut ConstEval, &mut ()),
        Err("calls are not constant".to_owned())
    );
}
