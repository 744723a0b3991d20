use super::*;
use crate::token::{Literal, Token, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tok(kind: TokenKind, lexeme: &str) -> Token {
    Token::simple(kind, lexeme, 1)
}

fn ident(name: &str) -> Token {
    tok(TokenKind::Identifier, name)
}

fn num(n: f64) -> Expr {
    Expr::literal(Literal::Number(n))
}

fn var(name: &str) -> Expr {
    Expr::Variable(ident(name))
}

#[test]
fn test_literals() {
    assert_eq!(AstPrinter::print_expr(&num(1.0)), "1.0");
    assert_eq!(AstPrinter::print_expr(&num(2.5)), "2.5");
    assert_eq!(
        AstPrinter::print_expr(&Expr::literal(Literal::Str("hi".into()))),
        "\"hi\""
    );
    assert_eq!(AstPrinter::print_expr(&Expr::literal(Literal::Bool(true))), "true");
    assert_eq!(AstPrinter::print_expr(&Expr::literal(Literal::Null)), "null");
}

#[test]
fn test_binary_uses_operator_lexeme() {
    let expr = Expr::binary(
        num(1.0),
        tok(TokenKind::Plus, "+"),
        Expr::binary(num(2.0), tok(TokenKind::Star, "*"), num(3.0)),
    );
    assert_eq!(AstPrinter::print_expr(&expr), "(+ 1.0 (* 2.0 3.0))");
}

#[test]
fn test_unary_not_keeps_word_spelling() {
    let bang = Expr::unary(tok(TokenKind::Bang, "!"), var("a"));
    let not = Expr::unary(tok(TokenKind::Bang, "not"), var("a"));
    assert_eq!(AstPrinter::print_expr(&bang), "(! a)");
    assert_eq!(AstPrinter::print_expr(&not), "(not a)");
}

#[test]
fn test_assign_group_call_logical() {
    let assign = Expr::assign(ident("x"), Expr::grouping(num(4.0)));
    assert_eq!(AstPrinter::print_expr(&assign), "(assign x (group 4.0))");

    let call = Expr::call(var("f"), tok(TokenKind::RightParen, ")"), vec![num(1.0), var("y")]);
    assert_eq!(AstPrinter::print_expr(&call), "(call f 1.0 y)");

    let no_args = Expr::call(var("g"), tok(TokenKind::RightParen, ")"), vec![]);
    assert_eq!(AstPrinter::print_expr(&no_args), "(call g)");

    let logical = Expr::logical(var("a"), tok(TokenKind::Or, "or"), var("b"));
    assert_eq!(AstPrinter::print_expr(&logical), "(or a b)");
}

#[test]
fn test_var_forms() {
    let bare = Stmt::Var {
        name: ident("x"),
        initializer: None,
    };
    let init = Stmt::Var {
        name: ident("x"),
        initializer: Some(num(1.0)),
    };
    assert_eq!(AstPrinter::print_stmt(&bare), "(var x)");
    assert_eq!(AstPrinter::print_stmt(&init), "(var x = 1.0)");
}

#[test]
fn test_control_flow_forms() {
    let print_a = Stmt::Print(var("a"));
    let if_stmt = Stmt::If {
        condition: var("c"),
        then_branch: Box::new(Stmt::Block(vec![print_a.clone()])),
        else_branch: None,
    };
    assert_eq!(AstPrinter::print_stmt(&if_stmt), "(if c (block (print a)))");

    let if_else = Stmt::If {
        condition: var("c"),
        then_branch: Box::new(Stmt::Block(vec![])),
        else_branch: Some(Box::new(Stmt::Block(vec![print_a.clone()]))),
    };
    assert_eq!(
        AstPrinter::print_stmt(&if_else),
        "(if-else c (block) (block (print a)))"
    );

    let while_stmt = Stmt::While {
        condition: var("c"),
        body: Box::new(Stmt::Block(vec![Stmt::Expression(var("a"))])),
    };
    assert_eq!(
        AstPrinter::print_stmt(&while_stmt),
        "(while c (block (expr_stmt a)))"
    );
}

#[test]
fn test_function_and_return() {
    let func = Stmt::function(
        ident("add"),
        vec![ident("a"), ident("b")],
        vec![Stmt::Return {
            keyword: tok(TokenKind::Return, "return"),
            value: Some(Expr::binary(var("a"), tok(TokenKind::Plus, "+"), var("b"))),
        }],
    );
    assert_eq!(AstPrinter::print_stmt(&func), "(fun add (a b) (return (+ a b)))");

    let empty = Stmt::function(
        ident("noop"),
        vec![],
        vec![Stmt::Return {
            keyword: tok(TokenKind::Return, "return"),
            value: None,
        }],
    );
    assert_eq!(AstPrinter::print_stmt(&empty), "(fun noop () (return))");
}

#[test]
fn test_program_one_statement_per_line() {
    let program = vec![Stmt::Print(num(1.0)), Stmt::Expression(var("x"))];
    assert_eq!(
        AstPrinter::print_program(&program),
        "(print 1.0)\n(expr_stmt x)\n"
    );
    assert_eq!(AstPrinter::print_program(&[]), "");
}

#[test]
fn test_deeply_nested_grouping_renders() {
    let mut expr = num(0.0);
    for _ in 0..5_000 {
        expr = Expr::grouping(expr);
    }
    let text = AstPrinter::print_expr(&expr);
    assert!(text.starts_with("(group (group"));
    assert_eq!(text.matches("(group ").count(), 5_000);
}

// Blueprint

fn field(ty: &str, name: &str) -> Field {
    Field {
        ty: ident(ty),
        name: ident(name),
    }
}

#[test]
fn test_blueprint_role_and_component() {
    let role = BlueprintDecl::Role {
        name: ident("Admin"),
        ty: ident("User"),
    };
    assert_eq!(BlueprintPrinter::print_decl(&role), "(role Admin is User)");

    let component = BlueprintDecl::Component {
        name: ident("Health"),
        fields: vec![field("Number", "current"), field("Number", "max")],
    };
    assert_eq!(
        BlueprintPrinter::print_decl(&component),
        "(component Health\n  (Number: current)\n  (Number: max) )"
    );
}

#[test]
fn test_blueprint_class_with_fragment() {
    let class = BlueprintDecl::Class {
        name: ident("Clock"),
        members: vec![
            ClassMember::Attributes(vec![field("Number", "hours")]),
            ClassMember::Attachments(vec![Attachment {
                kind: tok(TokenKind::Flow, "Flow"),
                path: "tick.hfl".into(),
                line: 1,
            }]),
            ClassMember::Fragment {
                name: ident("Face"),
                members: vec![ClassMember::Attributes(vec![field("Text", "label")])],
            },
        ],
    };
    assert_eq!(
        BlueprintPrinter::print_decl(&class),
        "(Class Clock\n  (Attributes\n    (Number: hours) )\n  (Attachments\n    (Flow: tick.hfl) )\n  (Fragment Face\n    (Attributes\n      (Text: label) )\n  )\n)"
    );
}

#[test]
fn test_blueprint_sector_indents_children() {
    let sector = BlueprintDecl::Sector {
        name: ident("Core"),
        declarations: vec![BlueprintDecl::Role {
            name: ident("R"),
            ty: ident("T"),
        }],
    };
    assert_eq!(
        BlueprintPrinter::print_program(&[sector]),
        "(Sector Core\n  (role R is T)\n)\n"
    );
}

#[test]
fn test_blueprint_empty_blocks_are_omitted() {
    let class = BlueprintDecl::Class {
        name: ident("Bare"),
        members: vec![ClassMember::Attributes(vec![]), ClassMember::Attachments(vec![])],
    };
    assert_eq!(BlueprintPrinter::print_decl(&class), "(Class Bare\n)");
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (-1.0e6..1.0e6f64).prop_map(num),
        "[a-z]{1,4}".prop_map(|s| var(&s)),
    ];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(l, r)| Expr::binary(l, tok(TokenKind::Minus, "-"), r)),
            inner.clone().prop_map(Expr::grouping),
            inner.prop_map(|e| Expr::unary(tok(TokenKind::Bang, "not"), e)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_printing_is_deterministic(expr in arb_expr()) {
        let stmt = Stmt::Print(expr.clone());
        let first = AstPrinter::print_stmt(&stmt);
        let second = AstPrinter::print_stmt(&stmt.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.matches('(').count(), first.matches(')').count());
    }
}
