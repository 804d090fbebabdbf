use safecalc::{
    error::EvalError, evaluate, evaluate_with_limits, interpreter::Limits, parse, parse_with_limits,
};

const TOLERANCE: f64 = 1e-12;

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(v) => assert!((v - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
                         "'{src}' evaluated to {v}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_tree(src: &str, rendered: &str) {
    match parse(src) {
        Ok(tree) => assert_eq!(tree.to_string(), rendered, "tree for '{src}'"),
        Err(e) => panic!("'{src}' failed to parse: {e}"),
    }
}

fn assert_syntax_error(src: &str) {
    match evaluate(src) {
        Err(EvalError::SyntaxError { .. }) => {},
        other => panic!("'{src}' should be a syntax error, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("7 % 4", 3.0);
    assert_value("2 ** 10", 1024.0);
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3**2", 18.0);
    assert_value("1+6/3%4", 3.0);
    assert_tree("1+2*3-4", "((1 + (2 * 3)) - 4)");
}

#[test]
fn associativity() {
    assert_value("2-3-4", -5.0);
    assert_value("64/4/2", 8.0);
    assert_value("2**3**2", 512.0);
    assert_tree("2**3**2", "(2 ** (3 ** 2))");
    assert_tree("8/4*2", "((8 / 4) * 2)");
    assert_tree("9%4/2", "((9 % 4) / 2)");
}

#[test]
fn unary_signs() {
    assert_value("-3 + +5", 2.0);
    assert_value("--3", 3.0);
    assert_value("2--3", 5.0);
    assert_value("2*-3", -6.0);
    assert_value("-(2+3)", -5.0);
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_value("-2**2", -4.0);
    assert_value("(-2)**2", 4.0);
    assert_value("2**-1", 0.5);
    assert_value("2**-2**2", 0.0625);
    assert_tree("-2**2", "(-(2 ** 2))");
}

#[test]
fn percent_literals() {
    assert_value("50%", 0.5);
    assert_value("2**3+5%", 8.05);
    assert_value("2**3 + 5%", 8.05);
    assert_value("1.5%", 0.015);
    assert_value("200 * 10%", 20.0);
    assert_value("10%%5", 0.1);
    assert_tree("50%", "(50 / 100)");
}

#[test]
fn percent_literal_followed_by_a_sign_is_subtraction() {
    assert_value("7%-3", -2.93);
    assert_tree("7%-3", "((7 / 100) - 3)");
    assert_value("7% + -3", -2.93);
}

#[test]
fn percent_between_operands_is_remainder() {
    assert_value("10%3", 1.0);
    assert_value("10 % 3", 1.0);
    assert_value("10%(2+1)", 1.0);
    assert_value("7.5%2", 1.5);
}

#[test]
fn remainder_takes_the_sign_of_the_divisor() {
    assert_value("-7%3", 2.0);
    assert_value("7%(-3)", -2.0);
    assert_value("-7%(-3)", -1.0);
    assert_value("-6%3", 0.0);
    assert_value("-7.5%2", 0.5);
}

#[test]
fn decimals() {
    assert_value("0.5+0.25", 0.75);
    assert_value(".5+.5", 1.0);
    assert_value("2.*3", 6.0);
    assert_value("0.1+0.2", 0.3);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  ( 1 +\t2 ) * 3  ", 9.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("5%0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("1/(2-2)"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("0.0 % 0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("0**-1"), Err(EvalError::DivisionByZero));
}

#[test]
fn zero_divisor_is_only_detected_when_evaluated() {
    let tree = parse("1/0").unwrap();
    assert_eq!(tree.evaluate(), Err(EvalError::DivisionByZero));
}

#[test]
fn invalid_characters_are_rejected() {
    assert!(matches!(evaluate("2+x"), Err(EvalError::InvalidCharacter { .. })));
    assert!(matches!(evaluate("2^3"), Err(EvalError::InvalidCharacter { .. })));
    assert!(matches!(evaluate("1e5"), Err(EvalError::InvalidCharacter { .. })));
    assert!(matches!(evaluate("1,000"), Err(EvalError::InvalidCharacter { .. })));
}

#[test]
fn code_is_never_executed() {
    for src in ["import os",
                "__import__('os').system('ls')",
                "open('/etc/passwd')",
                "().__class__"]
    {
        assert!(matches!(evaluate(src),
                         Err(EvalError::InvalidCharacter { .. } | EvalError::SyntaxError { .. })),
                "'{src}' should be rejected");
    }
}

#[test]
fn empty_input_is_error() {
    assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate("   "), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate("\t\n"), Err(EvalError::EmptyExpression));
}

#[test]
fn malformed_grouping_is_syntax_error() {
    assert_syntax_error("(2+3");
    assert_syntax_error("2+3)");
    assert_syntax_error("()");
    assert_syntax_error("((1)");
    assert_syntax_error(")(");
}

#[test]
fn malformed_operators_are_syntax_errors() {
    assert_syntax_error("2+*3");
    assert_syntax_error("2//3");
    assert_syntax_error("2+");
    assert_syntax_error("*2");
    assert_syntax_error("2 3");
    assert_syntax_error("2(3)");
    assert_syntax_error("1..2");
    assert_syntax_error(".");
    assert_syntax_error("10%5(");
    assert_syntax_error("%");
}

#[test]
fn syntax_errors_name_the_offending_token() {
    assert_eq!(evaluate("2+*3"),
               Err(EvalError::SyntaxError { detail: "unexpected token '*' at column 3".to_string() }));
    assert_eq!(evaluate("2+"),
               Err(EvalError::SyntaxError { detail: "unexpected end of input".to_string() }));
}

#[test]
fn deep_nesting_is_too_complex() {
    let depth = 300;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(evaluate(&src), Err(EvalError::TooComplex { limit: 256 }));

    let limits = Limits { max_depth: 400 };
    assert_eq!(evaluate_with_limits(&src, &limits), Ok(1.0));
}

#[test]
fn long_flat_chains_are_not_nesting() {
    assert_value(&vec!["1"; 300].join("+"), 300.0);
    assert_value(&vec!["2"; 1000].join("*"), 2f64.powi(1000));
    assert_value(&vec!["(1+1)"; 500].join(" - "), -996.0);

    let limits = Limits { max_depth: 10 };
    assert_eq!(evaluate_with_limits(&vec!["1"; 100].join("+"), &limits), Ok(100.0));
}

#[test]
fn deep_trees_are_too_complex_to_evaluate() {
    let src = format!("{}1", "-".repeat(300));
    let tree = parse_with_limits(&src, &Limits { max_depth: 400 }).unwrap();

    assert_eq!(tree.evaluate(), Err(EvalError::TooComplex { limit: 256 }));
    assert_eq!(tree.evaluate_with_limits(&Limits { max_depth: 400 }), Ok(1.0));
}

#[test]
fn long_sign_chains_are_bounded() {
    let src = format!("{}1", "-".repeat(1000));
    assert_eq!(evaluate(&src), Err(EvalError::TooComplex { limit: 256 }));
    assert_value(&format!("{}1", "-".repeat(10)), 1.0);
}

#[test]
fn evaluation_is_idempotent() {
    let src = "(1.5 + 2) * 3 ** 2 - 10% / 4";
    let first = evaluate(src).unwrap();
    let second = evaluate(src).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn evaluation_is_thread_safe() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        evaluate(&format!("{i} * 2 + 1")).unwrap()
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), f64::from(u8::try_from(i).unwrap()) * 2.0 + 1.0);
    }
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(EvalError::EmptyExpression.to_string(), "Empty expression");
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(evaluate("2+x").unwrap_err().to_string(),
               "Expression contains invalid characters: 'x' at column 3 in '2+x'");
}
