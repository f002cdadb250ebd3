use jimmy_script::frontend::lexer::tokenize;
use jimmy_script::utils::underline;
use jimmy_script::{run, Environment, Error, NumericValue, SourceUnit};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> Result<NumericValue, Error> {
    run(source, "<test>", &mut Environment::new()).map(|n| n.value)
}

fn int(source: &str) -> i64 {
    match eval(source) {
        Ok(NumericValue::Int(v)) => v,
        other => panic!("{} evaluated to {:?}", source, other),
    }
}

#[test]
fn precedence_matches_standard_arithmetic() {
    let cases = [
        ("1 + 2 * 3", 7),
        ("1 * 2 + 3", 5),
        ("10 - 2 * 3 - 1", 3),
        ("2 * 3 * 4 - 5", 19),
        ("100 - 10 - 10", 80),
        ("7 + 8 * 9 - 6", 73),
    ];
    for (source, expected) in cases {
        assert_eq!(int(source), expected, "{}", source);
    }
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(int("(1 + 2) * 3"), 9);
    assert_eq!(int("1 + 2 * 3"), 7);
    assert_eq!(int("((2))"), 2);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(int("2 ^ 3 ^ 2"), 512);
    assert_eq!(int("(2 ^ 3) ^ 2"), 64);
}

#[test]
fn division() {
    assert_eq!(eval("5 / 2").unwrap(), NumericValue::Float(2.5));
    for source in ["5 / 0", "5.0 / 0", "5 / 0.0", "1 / (2 - 2)"] {
        let err = eval(source).unwrap_err();
        assert!(matches!(err, Error::Runtime { .. }), "{}", source);
        assert_eq!(err.message(), "cannot divide by zero");
    }
}

#[test]
fn zero_to_a_negative_power_fails_at_the_exponent() {
    for source in ["0 ^ -1", "0.0 ^ -1"] {
        let err = eval(source).unwrap_err();
        assert!(matches!(err, Error::Runtime { .. }), "{}", source);
        assert_eq!(err.message(), "cannot raise zero to a negative power");
        assert_eq!(err.interval().text(), "-1");
        assert_eq!(err.traceback()[0].context, "<program>");
    }

    let report = eval("0.0 ^ -1").unwrap_err().report();
    assert!(report.contains(">>> 0.0 ^ -1\n          ^^\n"));
    assert_eq!(eval("0 ^ 0").unwrap(), NumericValue::Int(1));
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = eval(&source).unwrap_err();
    assert!(matches!(err, Error::Syntax { .. }));
    assert_eq!(err.message(), "expression nested too deeply");

    assert_eq!(int(&format!("{}7{}", "(".repeat(40), ")".repeat(40))), 7);
    assert_eq!(int(&vec!["1"; 300].join(" + ")), 300);
}

#[test]
fn errors_cross_thread_boundaries() {
    let handle = std::thread::spawn(|| eval("1 / 0"));
    let err = handle.join().unwrap().unwrap_err();
    let err: anyhow::Error = err.into();
    assert_eq!(err.to_string(), "Runtime Error: cannot divide by zero");
}

#[test]
fn unary_minus_is_subtraction_from_zero() {
    assert_eq!(eval("-5").unwrap(), eval("0 - 5").unwrap());
    assert_eq!(eval("-2.5").unwrap(), eval("0 - 2.5").unwrap());
}

#[test]
fn bindings_persist_within_one_environment() {
    let mut env = Environment::new();
    run("let x = 5", "<test>", &mut env).unwrap();
    let value = run("x + 1", "<test>", &mut env).unwrap();
    assert_eq!(value.to_string(), "6");

    let mut fresh = Environment::new();
    let err = run("x + 1", "<test>", &mut fresh).unwrap_err();
    assert!(err.message().starts_with("unknown identifier"));
}

#[test]
fn identifiers_are_case_insensitive() {
    let mut env = Environment::new();
    run("LET Total BE 3", "<test>", &mut env).unwrap();
    assert_eq!(run("total * 2", "<test>", &mut env).unwrap().to_string(), "6");
}

#[test]
fn errors_leave_environment_usable() {
    let mut env = Environment::new();
    run("let a = 1", "<test>", &mut env).unwrap();
    assert!(run("let a = a / 0", "<test>", &mut env).is_err());
    assert!(run("let a = (", "<test>", &mut env).is_err());
    assert_eq!(run("a", "<test>", &mut env).unwrap().to_string(), "1");
}

#[test]
fn malformed_input_is_located() {
    let err = eval("(1 + 2").unwrap_err();
    assert!(matches!(err, Error::Syntax { .. }));
    assert_eq!(err.message(), "missing ')'");
    assert_eq!(err.interval().start.offset, 6);
    assert!(err.interval().is_empty());

    let err = eval("1 +").unwrap_err();
    assert_eq!(err.message(), "expecting a number, sign, or bracket");
    assert_eq!(err.interval().start.offset, 3);

    let err = eval("@").unwrap_err();
    assert!(matches!(err, Error::Lexical { .. }));
    assert_eq!(err.interval().start.offset, 0);
}

#[test]
fn let_requires_an_assignment_operator() {
    assert_eq!(int("let x = 1"), 1);
    assert_eq!(int("let x <- 2"), 2);
    assert_eq!(int("let x be 3"), 3);

    for source in ["let x 5", "let x + 5", "let x let"] {
        let err = eval(source).unwrap_err();
        assert_eq!(
            err.message(),
            "assignment operator expected after identifier",
            "{}",
            source
        );
    }
}

#[test]
fn single_character_token_gets_one_caret() {
    let tokens = tokenize(SourceUnit::new("<test>", "1 + 2")).unwrap();
    let rendered = underline(&tokens[1].interval, "");
    assert_eq!(rendered.matches('^').count(), 1);
}

#[test]
fn reports_render_excerpt_and_traceback() {
    let err = run("1 +\n  2 / 0", "calc.jim", &mut Environment::new()).unwrap_err();
    let report = err.report();
    assert_eq!(
        report,
        "Runtime Error:\n    cannot divide by zero\nAt line 2 in calc.jim.\n\n\
         >>>   2 / 0\n          ^\n\
         Traceback (most recent call first):\n\
         \x20   In calc.jim, at line 2, in the context <program>\n"
    );

    let err = eval("3 $").unwrap_err();
    let report = err.report();
    assert!(report.starts_with("Lexical Error:\n    unexpected character '$'\n"));
    assert!(report.ends_with(">>> 3 $\n      ^\n"));
}
