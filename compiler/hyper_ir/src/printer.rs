//! Canonical parenthesized text for syntax trees.
//!
//! The rendered form is a stable contract: tests and the `parse` command
//! compare against it. Rendering is pure, so printing the same tree twice
//! always yields identical text.
//!
//! | Node        | Form                                       |
//! |-------------|--------------------------------------------|
//! | Assign      | `(assign name v)`                          |
//! | Unary       | `(op x)`                                   |
//! | Binary      | `(op l r)`                                 |
//! | Call        | `(call f a b)`                             |
//! | Var         | `(var n)` / `(var n = e)`                  |
//! | If          | `(if c t)` / `(if-else c t e)`             |
//! | Function    | `(fun name (a b) body...)`                 |

use std::fmt::Write;

use hyper_stack::ensure_sufficient_stack;

use crate::ast::{Expr, FunctionDecl, Stmt};
use crate::blueprint::{Attachment, BlueprintDecl, ClassMember, Field};

/// Renders flow trees.
#[derive(Default)]
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter::default()
    }

    /// One statement per line, each followed by `\n`.
    pub fn print_program(statements: &[Stmt]) -> String {
        let mut printer = AstPrinter::new();
        for stmt in statements {
            printer.stmt(stmt);
            printer.out.push('\n');
        }
        printer.out
    }

    pub fn print_stmt(stmt: &Stmt) -> String {
        let mut printer = AstPrinter::new();
        printer.stmt(stmt);
        printer.out
    }

    pub fn print_expr(expr: &Expr) -> String {
        let mut printer = AstPrinter::new();
        printer.expr(expr);
        printer.out
    }

    fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => {
                let _ = write!(self.out, "{value}");
            }
            Expr::Variable(name) => self.out.push_str(&name.lexeme),
            Expr::Assign { name, value } => {
                let _ = write!(self.out, "(assign {} ", name.lexeme);
                self.expr(value);
                self.out.push(')');
            }
            Expr::Unary { operator, operand } => {
                let _ = write!(self.out, "({} ", operator.lexeme);
                self.expr(operand);
                self.out.push(')');
            }
            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => {
                let _ = write!(self.out, "({} ", operator.lexeme);
                self.expr(left);
                self.out.push(' ');
                self.expr(right);
                self.out.push(')');
            }
            Expr::Grouping(inner) => {
                self.out.push_str("(group ");
                self.expr(inner);
                self.out.push(')');
            }
            Expr::Call {
                callee, arguments, ..
            } => {
                self.out.push_str("(call ");
                self.expr(callee);
                for arg in arguments {
                    self.out.push(' ');
                    self.expr(arg);
                }
                self.out.push(')');
            }
        });
    }

    fn stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Expression(expr) => self.wrap("expr_stmt", expr),
            Stmt::Print(expr) => self.wrap("print", expr),
            Stmt::Var { name, initializer } => {
                let _ = write!(self.out, "(var {}", name.lexeme);
                if let Some(init) = initializer {
                    self.out.push_str(" = ");
                    self.expr(init);
                }
                self.out.push(')');
            }
            Stmt::Block(statements) => {
                self.out.push_str("(block");
                self.stmt_list(statements);
                self.out.push(')');
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let head = if else_branch.is_some() { "if-else" } else { "if" };
                let _ = write!(self.out, "({head} ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push(' ');
                    self.stmt(else_branch);
                }
                self.out.push(')');
            }
            Stmt::While { condition, body } => {
                self.out.push_str("(while ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(body);
                self.out.push(')');
            }
            Stmt::Function(decl) => self.function(decl),
            Stmt::Return { value, .. } => match value {
                Some(value) => self.wrap("return", value),
                None => self.out.push_str("(return)"),
            },
        });
    }

    fn function(&mut self, decl: &FunctionDecl) {
        let _ = write!(self.out, "(fun {} (", decl.name.lexeme);
        for (i, param) in decl.params.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(&param.lexeme);
        }
        self.out.push(')');
        self.stmt_list(&decl.body);
        self.out.push(')');
    }

    fn stmt_list(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.out.push(' ');
            self.stmt(stmt);
        }
    }

    fn wrap(&mut self, head: &str, expr: &Expr) {
        let _ = write!(self.out, "({head} ");
        self.expr(expr);
        self.out.push(')');
    }
}

/// Renders blueprint trees.
///
/// Nested declarations are indented two spaces per level; bodies close
/// with `)` on their own line, field lists close with ` )`.
pub struct BlueprintPrinter;

impl BlueprintPrinter {
    pub fn print_program(declarations: &[BlueprintDecl]) -> String {
        let mut out = String::new();
        for decl in declarations {
            out.push_str(&Self::print_decl(decl));
            out.push('\n');
        }
        out
    }

    pub fn print_decl(decl: &BlueprintDecl) -> String {
        match decl {
            BlueprintDecl::Sector { name, declarations } => {
                let mut out = format!("(Sector {}", name.lexeme);
                for inner in declarations {
                    push_indented(&mut out, &Self::print_decl(inner));
                }
                out.push_str("\n)");
                out
            }
            BlueprintDecl::Class { name, members } => {
                let mut out = format!("(Class {}", name.lexeme);
                Self::members(&mut out, members);
                out.push_str("\n)");
                out
            }
            BlueprintDecl::Component { name, fields } => {
                let mut out = format!("(component {}", name.lexeme);
                for field in fields {
                    let _ = write!(out, "\n  {}", field_text(field));
                }
                out.push_str(" )");
                out
            }
            BlueprintDecl::Role { name, ty } => format!("(role {} is {})", name.lexeme, ty.lexeme),
        }
    }

    fn members(out: &mut String, members: &[ClassMember]) {
        for member in members {
            match member {
                ClassMember::Attributes(fields) if !fields.is_empty() => {
                    out.push_str("\n  (Attributes");
                    for field in fields {
                        let _ = write!(out, "\n    {}", field_text(field));
                    }
                    out.push_str(" )");
                }
                ClassMember::Attachments(attachments) if !attachments.is_empty() => {
                    out.push_str("\n  (Attachments");
                    for attachment in attachments {
                        let _ = write!(out, "\n    {}", attachment_text(attachment));
                    }
                    out.push_str(" )");
                }
                ClassMember::Fragment { name, members } => {
                    let mut fragment = format!("(Fragment {}", name.lexeme);
                    Self::members(&mut fragment, members);
                    fragment.push_str("\n)");
                    push_indented(out, &fragment);
                }
                ClassMember::Attributes(_) | ClassMember::Attachments(_) => {}
            }
        }
    }
}

fn field_text(field: &Field) -> String {
    format!("({}: {})", field.ty.lexeme, field.name.lexeme)
}

fn attachment_text(attachment: &Attachment) -> String {
    format!("({}: {})", attachment.kind.lexeme, attachment.path)
}

/// Append `text` on a new line, indenting each of its lines by two spaces.
fn push_indented(out: &mut String, text: &str) {
    out.push_str("\n  ");
    out.push_str(&text.replace('\n', "\n  "));
}

#[cfg(test)]
mod tests;
