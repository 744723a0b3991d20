//! Parser output through the pipeline: `--ast` dumps, blueprint trees and
//! syntax error reporting.

use hyper_diagnostic::ErrorCode;
use hyperc::{ExitStatus, RunOptions};
use pretty_assertions::assert_eq;

use crate::common::{blueprint, flow, flow_with, rendered};

fn with_ast() -> RunOptions {
    RunOptions {
        dump_ast: true,
        ..RunOptions::default()
    }
}

#[test]
fn test_ast_flag_prints_tree_then_runs() {
    let source = "let x = 2\nprint x * 3";
    let (output, outcome) = flow_with(source, with_ast());
    assert!(outcome.is_success());
    assert_eq!(
        output,
        "--- AST ---\n(var x = 2.0)\n(print (* x 3.0))\n6\n"
    );
}

#[test]
fn test_ast_of_function_program() {
    let source = "\
function area(w, h)
  return w * h
end
if (area(2, 3) > 5) then
  print \"big\"
else
  print \"small\"
end
";
    let (output, outcome) = flow_with(source, with_ast());
    assert!(outcome.is_success());
    assert_eq!(
        output,
        "--- AST ---\n\
         (fun area (w h) (return (* w h)))\n\
         (if-else (> (call area 2.0 3.0) 5.0) (block (print \"big\")) (block (print \"small\")))\n\
         big\n"
    );
}

#[test]
fn test_syntax_errors_prevent_execution() {
    let (output, outcome) = flow("print \"before\"\nprint (1");
    assert_eq!(output, "");
    assert_eq!(outcome.status, ExitStatus::SyntaxError);
    assert_eq!(
        rendered(&outcome),
        vec!["[line 2] Error at end: Expect ')' after expression."]
    );
}

#[test]
fn test_several_syntax_errors_in_one_run() {
    let source = "let = 1\nprint 1 2\nlet ok = 3\n";
    let (_, outcome) = flow(source);
    assert_eq!(outcome.status, ExitStatus::SyntaxError);
    assert_eq!(outcome.diagnostics.error_count(), 2);
    let codes: Vec<ErrorCode> = outcome
        .diagnostics
        .diagnostics()
        .iter()
        .map(|d| d.code)
        .collect();
    assert_eq!(codes, vec![ErrorCode::E1002, ErrorCode::E1005]);
}

#[test]
fn test_invalid_assignment_target() {
    let (_, outcome) = flow("let a\n(a) = 3");
    assert_eq!(
        rendered(&outcome),
        vec!["[line 2] Error at '=': Invalid assignment target."]
    );
}

#[test]
fn test_blueprint_tree_is_printed() {
    let source = "\
Sector Game {
  component Health {
    Number : current,
    Number : max
  }
  role Player is Health
}
";
    let (output, outcome) = blueprint(source);
    assert!(outcome.is_success());
    assert_eq!(
        output,
        "(Sector Game\n  (component Health\n    (Number: current)\n    (Number: max) )\n  (role Player is Health)\n)\n"
    );
}

#[test]
fn test_blueprint_errors_suppress_tree() {
    let (output, outcome) = blueprint("Class C {\n  Stuff\n}\nrole R is T");
    assert_eq!(output, "");
    assert_eq!(outcome.status, ExitStatus::SyntaxError);
    assert_eq!(
        rendered(&outcome),
        vec!["[line 2] Error at 'Stuff': Expect 'Attributes', 'Attachments', or 'Fragment' inside Class."]
    );
}

#[test]
fn test_empty_programs() {
    let (output, outcome) = flow("");
    assert!(outcome.is_success());
    assert_eq!(output, "");

    let (output, outcome) = flow("\n\n;\n");
    assert!(outcome.is_success());
    assert_eq!(output, "");
}
