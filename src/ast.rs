/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` covers every construct the expression grammar can produce: numeric
/// literals, the free variable `x`, unary negation, binary arithmetic, and
/// calls to the built-in unary math functions. Each node exclusively owns its
/// children, so the tree is strictly hierarchical and can be walked without
/// any sharing or cycle concerns. Trees are built once by the parser and are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal (e.g. `3.14`, `2e-5`).
    Number {
        /// The literal value.
        value: f64,
    },
    /// The free variable `x`, substituted at evaluation time.
    Variable,
    /// Unary negation (e.g. `-x`).
    Negate {
        /// The negated operand.
        operand: Box<Self>,
    },
    /// A binary operation (e.g. `a + b`, `a ^ b`).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a built-in unary function (e.g. `sin(x)`).
    FunctionCall {
        /// The function being called.
        function: MathFunction,
        /// The single argument expression.
        argument: Box<Self>,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents one of the built-in unary mathematical functions.
///
/// The set is closed: the lexer only produces function tokens for these names,
/// and the evaluator matches exhaustively over them, so an unknown function
/// can never reach evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Absolute value.
    Abs,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
    /// Natural exponential.
    Exp,
}

impl MathFunction {
    /// Looks a function up by its source-level name.
    ///
    /// # Parameters
    /// - `name`: The identifier as written in the expression.
    ///
    /// # Returns
    /// - `Some(MathFunction)`: If `name` is one of the built-in functions.
    /// - `None`: For any other identifier.
    ///
    /// # Example
    /// ```
    /// use fplot::ast::MathFunction;
    ///
    /// assert_eq!(MathFunction::from_name("sin"), Some(MathFunction::Sin));
    /// assert_eq!(MathFunction::from_name("sinus"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "asin" => Some(Self::Asin),
            "acos" => Some(Self::Acos),
            "atan" => Some(Self::Atan),
            "sinh" => Some(Self::Sinh),
            "cosh" => Some(Self::Cosh),
            "tanh" => Some(Self::Tanh),
            "abs" => Some(Self::Abs),
            "ln" => Some(Self::Ln),
            "log" => Some(Self::Log),
            "exp" => Some(Self::Exp),
            _ => None,
        }
    }

    /// Gets the source-level name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Abs => "abs",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Exp => "exp",
        }
    }
}

impl std::fmt::Display for MathFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
