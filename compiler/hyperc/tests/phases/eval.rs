//! Whole programs through lexer, parser and interpreter.

use hyper_diagnostic::ErrorCode;
use hyperc::{ExitStatus, RunOptions};
use pretty_assertions::assert_eq;

use crate::common::{flow, flow_with, rendered};

fn run_ok(source: &str) -> String {
    let (output, outcome) = flow(source);
    assert!(
        outcome.is_success(),
        "diagnostics: {:?}",
        rendered(&outcome)
    );
    output
}

#[test]
fn test_fizzbuzz() {
    let source = "\
let i = 1
while (i <= 15) do
  if (i % 15 == 0) then
    print \"FizzBuzz\"
  else
    if (i % 3 == 0) then
      print \"Fizz\"
    else
      if (i % 5 == 0) then
        print \"Buzz\"
      else
        print i
      end
    end
  end
  i = i + 1
end
";
    let expected = "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n";
    assert_eq!(run_ok(source), expected);
}

#[test]
fn test_string_building() {
    let source = "\
function greet(name)
  return \"Hello, \" .. name .. \"!\"
end
let count = 3
print greet(\"world\")
print \"count: \" + count
print 1 .. 2 .. 3
";
    assert_eq!(run_ok(source), "Hello, world!\ncount: 3\n123\n");
}

#[test]
fn test_number_rendering() {
    assert_eq!(run_ok("print 10 / 4\nprint 3.0\nprint 2 ^ 0.5 * 0"), "2.5\n3\n0\n");
    assert_eq!(run_ok("print -1 ^ 0.5"), "NaN\n");
    assert_eq!(run_ok("print 5 % 0"), "NaN\n");
}

#[test]
fn test_runtime_error_reporting() {
    let source = "print \"start\"\nlet x = 1\nprint x + nothing\nprint \"never\"";
    let (output, outcome) = flow(source);
    assert_eq!(output, "start\n");
    assert_eq!(outcome.status, ExitStatus::RuntimeError);
    assert_eq!(
        rendered(&outcome),
        vec!["Undefined variable 'nothing'.\n[line 3]"]
    );
    assert_eq!(outcome.diagnostics.diagnostics()[0].code, ErrorCode::E6003);
}

#[test]
fn test_runtime_error_codes() {
    let cases = [
        ("print 1 - \"a\"", ErrorCode::E6001),
        ("print 1 / 0", ErrorCode::E6002),
        ("print missing", ErrorCode::E6003),
        ("let v = 1\nv()", ErrorCode::E6004),
        ("function f(a)\nend\nf()", ErrorCode::E6005),
        ("function f()\n  return f()\nend\nf()", ErrorCode::E6006),
    ];
    for (source, code) in cases {
        let (_, outcome) = flow(source);
        assert_eq!(outcome.status, ExitStatus::RuntimeError, "{source}");
        assert_eq!(outcome.diagnostics.diagnostics()[0].code, code, "{source}");
    }
}

#[test]
fn test_invalid_addition_message() {
    let (_, outcome) = flow("print true + 1");
    assert_eq!(
        rendered(&outcome),
        vec!["Operands must be two numbers or at least one string.\n[line 1]"]
    );
}

#[test]
fn test_clock_is_available_to_scripts() {
    assert_eq!(run_ok("let t = clock()\nprint t > 1000000"), "true\n");
}

#[test]
fn test_recursive_functions() {
    let source = "\
function fact(n)
  if (n <= 1) then
    return 1
  end
  return n * fact(n - 1)
end
print fact(10)
";
    assert_eq!(run_ok(source), "3628800\n");
}

#[test]
fn test_globals_visible_inside_functions() {
    let source = "\
let total = 0
function add(n)
  total = total + n
end
add(5)
add(7)
print total
";
    assert_eq!(run_ok(source), "12\n");
}

#[test]
fn test_lexical_option_enables_closures() {
    let source = "\
function counter()
  let n = 0
  function step()
    n = n + 1
    return n
  end
  return step
end
let c = counter()
c()
print c()
";
    let options = RunOptions {
        lexical_closures: true,
        ..RunOptions::default()
    };
    let (output, outcome) = flow_with(source, options);
    assert!(outcome.is_success());
    assert_eq!(output, "2\n");

    let (_, outcome) = flow(source);
    assert_eq!(outcome.status, ExitStatus::RuntimeError);
    assert_eq!(
        rendered(&outcome),
        vec!["Undefined variable 'n'.\n[line 4]"]
    );
}

#[test]
fn test_semicolons_separate_statements() {
    assert_eq!(run_ok("let a = 1; let b = 2; print a + b"), "3\n");
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(run_ok("// header\nprint 1 // trailing\n// footer"), "1\n");
}
