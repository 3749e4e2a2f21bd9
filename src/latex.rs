//! Rendering of an expression tree as a minimally parenthesized LaTeX math-mode string.

use crate::ast::{BinaryOperation, Expr};

/// Precedence the root is rendered against, below that of every operator
const ROOT_PRECEDENCE: u8 = 0;

/// Render an expression as `$...$`, inserting parentheses only where operator precedence or
/// right-nested subtraction and division require them
pub fn generate(expr: &Expr) -> String {
    let mut out = String::from("$");
    emit_operand(expr, ROOT_PRECEDENCE, false, &mut out);
    out.push('$');

    log::debug!("generated {out}");
    out
}

fn emit_expr(node: &Expr, out: &mut String) {
    match node {
        Expr::Number(n) => out.push_str(&n.text),
        Expr::Binary(bin) => emit_binary(bin, out),
    }
}

fn emit_binary(bin: &BinaryOperation, out: &mut String) {
    let prec = bin.op.precedence();

    emit_operand(&bin.lhs, prec, false, out);
    out.push(' ');
    out.push_str(bin.op.latex());
    out.push(' ');
    emit_operand(&bin.rhs, prec, true, out);
}

fn emit_operand(child: &Expr, parent_prec: u8, is_rhs: bool, out: &mut String) {
    if needs_parens(child, parent_prec, is_rhs) {
        out.push_str("( ");
        emit_expr(child, out);
        out.push_str(" )");
    } else {
        emit_expr(child, out);
    }
}

/// A child operation is grouped when it binds looser than its parent, or when it sits on the
/// right of an equal-precedence parent and is itself order sensitive (`a - (b - c)`)
fn needs_parens(child: &Expr, parent_prec: u8, is_rhs: bool) -> bool {
    let Some(op) = child.operator() else {
        return false
    };

    let prec = op.precedence();
    prec < parent_prec || (prec == parent_prec && is_rhs && !op.is_commutative())
}
