use exprcalc::{evaluate_str, parse_str, CalcError, Error, ErrorType, EvalError, Options};

fn parse_error(input: &str) -> Error {
    parse_str(input, &Options::default()).unwrap_err()
}

#[test]
fn test_empty_input() {
    let err = parse_error("");
    assert_eq!(err.error_type, ErrorType::UnexpectedEnd);
    assert_eq!(err.index, 0);

    let err = parse_error("   ");
    assert_eq!(err.error_type, ErrorType::UnexpectedEnd);
    assert_eq!(err.index, 3);
}

#[test]
fn test_missing_operand() {
    let err = parse_error("1 +");
    assert_eq!(err.error_type, ErrorType::UnexpectedEnd);
    assert_eq!(err.index, 3);

    let err = parse_error("2 * * 3");
    assert_eq!(err.error_type, ErrorType::UnexpectedSymbol(b'*'));
    assert_eq!(err.index, 4);
}

#[test]
fn test_unknown_symbol() {
    let err = parse_error("1 + x");
    assert_eq!(err.error_type, ErrorType::UnexpectedSymbol(b'x'));
    assert_eq!(err.index, 4);

    let err = parse_error(")");
    assert_eq!(err.error_type, ErrorType::UnexpectedSymbol(b')'));
    assert_eq!(err.index, 0);
}

#[test]
fn test_brackets_other_than_parentheses_are_rejected() {
    let err = parse_error("[1 + 2]");
    assert_eq!(err.error_type, ErrorType::UnexpectedSymbol(b'['));
    assert_eq!(err.index, 0);
}

#[test]
fn test_unclosed_parenthesis() {
    let err = parse_error("(1 + 2");
    assert_eq!(err.error_type, ErrorType::UnclosedParenthesis);
    assert_eq!(err.index, 6);

    let err = parse_error("(1 + 2]");
    assert_eq!(err.error_type, ErrorType::UnclosedParenthesis);
    assert_eq!(err.index, 6);

    let err = parse_error("((1) 2)");
    assert_eq!(err.error_type, ErrorType::UnclosedParenthesis);
    assert_eq!(err.index, 5);
}

#[test]
fn test_trailing_input() {
    let err = parse_error("1 2");
    assert_eq!(err.error_type, ErrorType::TrailingInput);
    assert_eq!(err.index, 2);

    let err = parse_error("(1))");
    assert_eq!(err.error_type, ErrorType::TrailingInput);
    assert_eq!(err.index, 3);
}

#[test]
fn test_number_overflow() {
    let err = parse_error("1 + 99999999999999999999");
    assert_eq!(err.error_type, ErrorType::NumberOverflow);
    assert_eq!(err.index, 4);
}

#[test]
fn test_depth_limit() {
    let options = Options { max_depth: 3 };
    assert!(parse_str("(((1)))", &options).is_ok());

    let err = parse_str("((((1))))", &options).unwrap_err();
    assert_eq!(err.error_type, ErrorType::DepthLimitExceeded { max_depth: 3 });
    assert_eq!(err.index, 3);
}

#[test]
fn test_default_depth_bounds_long_sign_chains() {
    let input = "-".repeat(10_000) + "1";
    let err = parse_str(&input, &Options::default()).unwrap_err();
    assert_eq!(err.error_type, ErrorType::DepthLimitExceeded { max_depth: 256 });
    assert_eq!(err.index, 256);
}

#[test]
fn test_long_operator_chains_are_not_nesting() {
    let options = Options::default();

    let sum = "1".to_string() + &" + 1".repeat(199_999);
    assert_eq!(evaluate_str(&sum, &options), Ok(200_000));

    let product = "1".to_string() + &"*1".repeat(150_000);
    assert_eq!(evaluate_str(&product, &options), Ok(1));

    let mixed = "(2 * 3 - 6 + 1)".to_string() + &" - (1 - 1) / 7".repeat(100_000);
    let expr = parse_str(&mixed, &options).unwrap();
    assert_eq!(expr.evaluate(), Ok(1));
    assert!(expr.to_string().starts_with("(((((("));
    drop(expr);
}

#[test]
fn test_long_chain_still_reports_errors() {
    let options = Options::default();

    let overflow = "9223372036854775807".to_string() + &" - 1".repeat(100_000) + " + 100001";
    assert_eq!(
        evaluate_str(&overflow, &options),
        Err(CalcError::Eval(EvalError::Overflow))
    );

    let dangling = "1".to_string() + &"+1".repeat(100_000) + "+";
    let err = parse_str(&dangling, &options).unwrap_err();
    assert_eq!(err.error_type, ErrorType::UnexpectedEnd);
    assert_eq!(err.index, dangling.len());
}

#[test]
fn test_evaluation_errors() {
    let options = Options::default();
    assert_eq!(
        evaluate_str("1 / 0", &options),
        Err(CalcError::Eval(EvalError::DivisionByZero))
    );
    assert_eq!(
        evaluate_str("5 / (3 - 3)", &options),
        Err(CalcError::Eval(EvalError::DivisionByZero))
    );
    assert_eq!(
        evaluate_str("9223372036854775807 + 1", &options),
        Err(CalcError::Eval(EvalError::Overflow))
    );
    assert_eq!(
        evaluate_str("-(-9223372036854775807 - 1)", &options),
        Err(CalcError::Eval(EvalError::Overflow))
    );
    assert_eq!(
        evaluate_str("(-9223372036854775807 - 1) / -1", &options),
        Err(CalcError::Eval(EvalError::Overflow))
    );
}

#[test]
fn test_parse_error_takes_precedence_over_evaluation() {
    assert!(matches!(
        evaluate_str("1 / 0 +", &Options::default()),
        Err(CalcError::Parse(_))
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse_error("1 + x").to_string(),
        "unexpected symbol 'x' at index 4"
    );
    assert_eq!(parse_error("(1").to_string(), "expected ')' at index 2");
    assert_eq!(
        parse_error("1 1").to_string(),
        "trailing input after expression at index 2"
    );
    assert_eq!(
        parse_error("").to_string(),
        "unexpected end of input at index 0"
    );
    assert_eq!(
        CalcError::from(EvalError::DivisionByZero).to_string(),
        "division by zero"
    );
    assert_eq!(EvalError::Overflow.to_string(), "integer overflow");
}
