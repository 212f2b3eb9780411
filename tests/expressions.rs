use fplot::{error::ParseError, evaluator::evaluate, parse_expression};

fn eval_at(source: &str, x: f64) -> f64 {
    match parse_expression(source) {
        Ok(expression) => evaluate(&expression, x),
        Err(e) => panic!("Expression '{source}' failed to parse: {e}"),
    }
}

fn assert_evaluates(source: &str, x: f64, expected: f64) {
    let result = eval_at(source, x);
    assert!((result - expected).abs() < 1e-9,
            "Expression '{source}' at x = {x} evaluated to {result}, expected {expected}");
}

fn assert_rejected(source: &str) {
    if parse_expression(source).is_ok() {
        panic!("Expression '{source}' parsed but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("2 + 3 * 4", 0.0, 14.0);
    assert_evaluates("8 - 5", 0.0, 3.0);
    assert_evaluates("10 / 2 + 3 * 5", 0.0, 20.0);
    assert_evaluates("1 / 3", 0.0, 1.0 / 3.0);
}

#[test]
fn exponentiation_shares_the_multiplicative_tier() {
    // ^ is left-associative and binds exactly as tightly as * and /.
    assert_evaluates("2 ^ 3 ^ 2", 0.0, 64.0);
    assert_evaluates("2 * 3 ^ 2", 0.0, 36.0);
    assert_evaluates("16 / 2 ^ 2", 0.0, 64.0);
    assert_evaluates("2 + 3 ^ 2", 0.0, 11.0);
}

#[test]
fn negation_binds_below_the_binary_tiers() {
    assert_evaluates("-x ^ 2", 3.0, 9.0);
    assert_evaluates("-3 + 2", 0.0, -1.0);
    assert_evaluates("-3 + 5 - 3", 0.0, -1.0);
    assert_evaluates("-10 + 3^(-1) + 10", 0.0, 1.0 / 3.0);
    assert_evaluates("--5", 0.0, 5.0);
    assert_evaluates("2 - -3", 0.0, 5.0);
}

#[test]
fn variable_substitution() {
    assert_evaluates("x", 4.5, 4.5);
    assert_evaluates("2 * x + 1", 3.0, 7.0);
    assert_evaluates("x * x - x", 5.0, 20.0);
}

#[test]
fn builtin_functions() {
    assert_evaluates("sin(0) + cos(0)", 0.0, 1.0);
    assert_evaluates("log(10)", 0.0, 1.0);
    assert_evaluates("ln(1)", 0.0, 0.0);
    assert_evaluates("exp(0)", 0.0, 1.0);
    assert_evaluates("abs(0 - 7)", 0.0, 7.0);
    assert_evaluates("tanh(0)", 0.0, 0.0);
    assert_evaluates("atan(1)", 0.0, std::f64::consts::FRAC_PI_4);
    assert_evaluates("sin(x) * sin(x) + cos(x) * cos(x)", 0.3, 1.0);
}

#[test]
fn scientific_notation() {
    assert_evaluates("2.5e2", 0.0, 250.0);
    assert_evaluates("1e-2", 0.0, 0.01);
    assert_evaluates("3E+1", 0.0, 30.0);
}

#[test]
fn grouping_overrides_precedence() {
    assert_evaluates("(2 + 3) * 4", 0.0, 20.0);
    assert_evaluates("2 ^ (3 ^ 2)", 0.0, 512.0);
    assert_evaluates("((((7))))", 0.0, 7.0);
}

#[test]
fn re_evaluation_is_bit_identical() {
    // Trees are read-only after parsing, so evaluating one twice at the same
    // x must reproduce the exact same bits, NaN payloads included.
    let expression = parse_expression("sin(x) * x ^ 2 - 1 / x + ln(x)").unwrap();
    for x in [-3.2, 0.0, 0.5, 10.0] {
        let first = evaluate(&expression, x);
        let second = evaluate(&expression, x);
        assert_eq!(first.to_bits(),
                   second.to_bits(),
                   "Evaluating at x = {x} was not reproducible");
    }
}

#[test]
fn non_finite_results_propagate() {
    assert!(eval_at("1 / x", 0.0).is_infinite());
    assert!(eval_at("ln(0 - 1)", 0.0).is_nan());
    assert!(eval_at("asin(2)", 0.0).is_nan());
    assert!(eval_at("ln(x)", 0.0).is_infinite());
    assert!(eval_at("1 / x + 1", 0.0).is_infinite());
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_rejected("3.5.2");
    assert_rejected("2e");
    assert_rejected("2e+");
    assert_rejected("2e5.1");
    assert_rejected("2e5x");
    assert_rejected(".");
}

#[test]
fn unknown_identifiers_are_rejected() {
    assert_rejected("foo(1)");
    assert_rejected("siin(1)");
    assert_rejected("verylongname(1)");
    assert_rejected("2 + y");
}

#[test]
fn unbalanced_brackets_are_rejected() {
    assert_eq!(parse_expression("(2 + 3"), Err(ParseError::UnbalancedBrackets));
    assert_eq!(parse_expression("2 + 3)"), Err(ParseError::UnbalancedBrackets));
    assert_eq!(parse_expression("sin(x))"), Err(ParseError::UnbalancedBrackets));
}

#[test]
fn function_argument_must_be_parenthesized() {
    assert!(matches!(parse_expression("sin x"),
                     Err(ParseError::ExpectedLeftParen { .. })));
    assert!(matches!(parse_expression("sin"),
                     Err(ParseError::ExpectedLeftParen { .. })));
}

#[test]
fn incomplete_expressions_are_rejected() {
    assert_eq!(parse_expression("2 +"), Err(ParseError::UnexpectedEndOfInput));
    assert_eq!(parse_expression(""), Err(ParseError::UnexpectedEndOfInput));
    assert_rejected("* 2");
    assert_rejected("()");
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(parse_expression("2 2"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(parse_expression("x x"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(parse_expression("(2) 3"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn unknown_characters_are_rejected() {
    assert!(matches!(parse_expression("2 # 3"),
                     Err(ParseError::UnknownCharacter { .. })));
    assert!(matches!(parse_expression("x ? 1"),
                     Err(ParseError::UnknownCharacter { .. })));
}

#[test]
fn errors_carry_byte_positions() {
    match parse_expression("1 + boo(2)") {
        Err(ParseError::UnknownIdentifier { name, position }) => {
            assert_eq!(name, "boo");
            assert_eq!(position, 4);
        },
        other => panic!("Expected an unknown-identifier error, got {other:?}"),
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates("2+3*4", 0.0, 14.0);
    assert_evaluates("  2 \t+\n 3  ", 0.0, 5.0);
    assert_evaluates("sin ( x )", 0.0, 0.0);
}
