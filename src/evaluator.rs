use crate::ast::{BinaryOperator, Expr, MathFunction};

/// Evaluates an expression tree at a concrete value of `x`.
///
/// Evaluation walks the tree recursively and cannot fail: every arithmetic
/// edge case follows IEEE 754, so division by zero yields an infinity,
/// `ln(0)` yields negative infinity, and domain violations such as `asin(2)`
/// yield NaN. Non-finite values propagate upward unchanged; it is the
/// caller's job to decide what to do with them (the plotter breaks the curve
/// at such samples).
///
/// # Parameters
/// - `expression`: Root of the expression tree.
/// - `x`: The value substituted for the variable.
///
/// # Returns
/// The value of the expression at `x`.
///
/// # Example
/// ```
/// use fplot::{evaluator::evaluate, parse_expression};
///
/// let expr = parse_expression("2 * x + 1").unwrap();
/// assert_eq!(evaluate(&expr, 3.0), 7.0);
///
/// let expr = parse_expression("1 / x").unwrap();
/// assert!(evaluate(&expr, 0.0).is_infinite());
/// ```
#[must_use]
pub fn evaluate(expression: &Expr, x: f64) -> f64 {
    match expression {
        Expr::Number { value } => *value,

        Expr::Variable => x,

        Expr::Negate { operand } => -evaluate(operand, x),

        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left, x);
            let right = evaluate(right, x);

            match op {
                BinaryOperator::Add => left + right,
                BinaryOperator::Sub => left - right,
                BinaryOperator::Mul => left * right,
                BinaryOperator::Div => left / right,
                BinaryOperator::Pow => left.powf(right),
            }
        },

        Expr::FunctionCall { function, argument } => {
            apply_function(*function, evaluate(argument, x))
        },
    }
}

/// Applies a built-in function to an already-evaluated argument.
fn apply_function(function: MathFunction, argument: f64) -> f64 {
    match function {
        MathFunction::Sin => argument.sin(),
        MathFunction::Cos => argument.cos(),
        MathFunction::Tan => argument.tan(),
        MathFunction::Asin => argument.asin(),
        MathFunction::Acos => argument.acos(),
        MathFunction::Atan => argument.atan(),
        MathFunction::Sinh => argument.sinh(),
        MathFunction::Cosh => argument.cosh(),
        MathFunction::Tanh => argument.tanh(),
        MathFunction::Abs => argument.abs(),
        MathFunction::Ln => argument.ln(),
        MathFunction::Log => argument.log10(),
        MathFunction::Exp => argument.exp(),
    }
}
