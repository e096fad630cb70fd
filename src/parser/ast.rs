//! AST node definitions for the Pawn parser.
//!
//! The tree is a pair of closed enums ([`Statement`] and [`Expression`])
//! plus a handful of shared structs. Every node keeps the first token of
//! its construct for diagnostics; nothing is mutated after construction and
//! ownership runs strictly parent-to-child.
//!
//! `Display` produces canonical, reparseable source text: expressions come
//! out fully parenthesized (`(a + (b * c))`), statements keep their braces
//! and terminators. Feeding the rendering back through the parser yields a
//! structurally equivalent tree.

use super::lexer::Token;
use std::fmt;

/// A name, possibly tag-qualified (`Float:x` stays one identifier).
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A brace-delimited statement sequence. The token is the `{`.
#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for stmt in &self.statements {
            write!(f, "{} ", stmt)?;
        }
        write!(f, "}}")
    }
}

/// One member of an enum declaration, with an optional initializer.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} = {}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// All statement forms, including declarations and preprocessor directives.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `new name = value;` / `new name[] = value;`
    Let {
        token: Token,
        name: Identifier,
        is_array: bool,
        value: Expression,
    },
    /// `return;` / `return value;`
    Return {
        token: Token,
        value: Option<Expression>,
    },
    /// A bare expression in statement position.
    Expression { token: Token, expression: Expression },
    Block(BlockStatement),
    If {
        token: Token,
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    While {
        token: Token,
        condition: Expression,
        body: BlockStatement,
    },
    /// `for (init; condition; update) { body }`; all three clauses may be
    /// empty.
    For {
        token: Token,
        init: Option<Box<Statement>>,
        condition: Option<Expression>,
        update: Option<Box<Statement>>,
        body: BlockStatement,
    },
    /// `function name(params) { body }`
    Function {
        token: Token,
        name: Identifier,
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    /// `native name(params) : type;` with no body and an optional return type.
    Native {
        token: Token,
        name: Identifier,
        parameters: Vec<Identifier>,
        return_type: Option<Expression>,
    },
    /// `state name { body }`
    State {
        token: Token,
        name: Identifier,
        body: BlockStatement,
    },
    /// `tag name;`
    Tag { token: Token, name: Identifier },
    /// `enum [name] { members }`
    Enum {
        token: Token,
        name: Option<Identifier>,
        members: Vec<EnumMember>,
    },
    /// `#include <path>` or `#include "path"`
    Include { token: Token, path: String },
    /// `#define NAME value`
    Define {
        token: Token,
        name: String,
        value: Expression,
    },
    /// `#ifdef COND { body } [else { body }] #endif`
    IfDef {
        token: Token,
        condition: String,
        body: BlockStatement,
        else_body: Option<BlockStatement>,
    },
}

impl Statement {
    /// The first token consumed for this statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. }
            | Statement::If { token, .. }
            | Statement::While { token, .. }
            | Statement::For { token, .. }
            | Statement::Function { token, .. }
            | Statement::Native { token, .. }
            | Statement::State { token, .. }
            | Statement::Tag { token, .. }
            | Statement::Enum { token, .. }
            | Statement::Include { token, .. }
            | Statement::Define { token, .. }
            | Statement::IfDef { token, .. } => token,
            Statement::Block(block) => &block.token,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let {
                name,
                is_array,
                value,
                ..
            } => {
                let brackets = if *is_array { "[]" } else { "" };
                write!(f, "new {}{} = {};", name, brackets, value)
            }
            Statement::Return { value, .. } => match value {
                Some(value) => write!(f, "return {};", value),
                None => write!(f, "return;"),
            },
            Statement::Expression { expression, .. } => write!(f, "{};", expression),
            Statement::Block(block) => write!(f, "{}", block),
            Statement::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Statement::While {
                condition, body, ..
            } => write!(f, "while ({}) {}", condition, body),
            Statement::For {
                init,
                condition,
                update,
                body,
                ..
            } => {
                // The init clause carries its own terminator; the update is
                // rendered without one, matching the surface grammar.
                match init {
                    Some(init) => write!(f, "for ({} ", init)?,
                    None => write!(f, "for (; ")?,
                }
                if let Some(condition) = condition {
                    write!(f, "{}", condition)?;
                }
                write!(f, "; ")?;
                match update.as_deref() {
                    Some(Statement::Expression { expression, .. }) => {
                        write!(f, "{}", expression)?
                    }
                    Some(other) => write!(f, "{}", other)?,
                    None => {}
                }
                write!(f, ") {}", body)
            }
            Statement::Function {
                name,
                parameters,
                body,
                ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "function {}({}) {}", name, params.join(", "), body)
            }
            Statement::Native {
                name,
                parameters,
                return_type,
                ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "native {}({})", name, params.join(", "))?;
                if let Some(return_type) = return_type {
                    write!(f, " : {}", return_type)?;
                }
                write!(f, ";")
            }
            Statement::State { name, body, .. } => write!(f, "state {} {}", name, body),
            Statement::Tag { name, .. } => write!(f, "tag {};", name),
            Statement::Enum { name, members, .. } => {
                write!(f, "enum ")?;
                if let Some(name) = name {
                    write!(f, "{} ", name)?;
                }
                let members: Vec<String> = members.iter().map(|m| m.to_string()).collect();
                if members.is_empty() {
                    write!(f, "{{ }}")
                } else {
                    write!(f, "{{ {} }}", members.join(", "))
                }
            }
            Statement::Include { path, .. } => write!(f, "#include <{}>", path),
            Statement::Define { name, value, .. } => write!(f, "#define {} {}", name, value),
            Statement::IfDef {
                condition,
                body,
                else_body,
                ..
            } => {
                write!(f, "#ifdef {} {}", condition, body)?;
                if let Some(else_body) = else_body {
                    write!(f, " else {}", else_body)?;
                }
                write!(f, " #endif")
            }
        }
    }
}

/// All expression forms, including type expressions.
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    FloatLiteral {
        token: Token,
        value: f64,
    },
    StringLiteral {
        token: Token,
        value: String,
    },
    /// The value is the first byte of the literal's raw content.
    CharLiteral {
        token: Token,
        value: u8,
    },
    BooleanLiteral {
        token: Token,
        value: bool,
    },
    NullLiteral {
        token: Token,
    },
    ArrayLiteral {
        token: Token,
        elements: Vec<Expression>,
    },
    FunctionLiteral {
        token: Token,
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    /// `-x`, `!x`, `++x`, `--x`
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
    /// `x++`, `x--`
    Postfix {
        token: Token,
        operator: String,
        left: Box<Expression>,
    },
    Call {
        token: Token,
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Index {
        token: Token,
        left: Box<Expression>,
        index: Box<Expression>,
    },
    /// A bare type name in type position.
    TypeName {
        token: Token,
        name: String,
    },
    /// `[]ElementType`
    ArrayType {
        token: Token,
        element: Box<Expression>,
    },
    /// `function(T1, T2) [: R]`
    FunctionType {
        token: Token,
        parameters: Vec<Expression>,
        return_type: Option<Box<Expression>>,
    },
    /// `Tag : Type` (the spaced form; the adjacent form fuses lexically)
    TaggedType {
        token: Token,
        tag: Identifier,
        ty: Box<Expression>,
    },
}

impl Expression {
    /// The first token consumed for this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(ident) => &ident.token,
            Expression::IntegerLiteral { token, .. }
            | Expression::FloatLiteral { token, .. }
            | Expression::StringLiteral { token, .. }
            | Expression::CharLiteral { token, .. }
            | Expression::BooleanLiteral { token, .. }
            | Expression::NullLiteral { token }
            | Expression::ArrayLiteral { token, .. }
            | Expression::FunctionLiteral { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. }
            | Expression::Postfix { token, .. }
            | Expression::Call { token, .. }
            | Expression::Index { token, .. }
            | Expression::TypeName { token, .. }
            | Expression::ArrayType { token, .. }
            | Expression::FunctionType { token, .. }
            | Expression::TaggedType { token, .. } => token,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            // Numeric literals render their verbatim source text so hex and
            // binary forms survive a round trip.
            Expression::IntegerLiteral { token, .. } => f.write_str(&token.literal),
            Expression::FloatLiteral { token, .. } => f.write_str(&token.literal),
            Expression::StringLiteral { value, .. } => write!(f, "\"{}\"", value),
            Expression::CharLiteral { token, .. } => write!(f, "'{}'", token.literal),
            Expression::BooleanLiteral { value, .. } => write!(f, "{}", value),
            Expression::NullLiteral { .. } => write!(f, "null"),
            Expression::ArrayLiteral { elements, .. } => {
                let elements: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Expression::FunctionLiteral {
                parameters, body, ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "function({}) {}", params.join(", "), body)
            }
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::Postfix { operator, left, .. } => write!(f, "({}{})", left, operator),
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
            Expression::Index { left, index, .. } => write!(f, "({}[{}])", left, index),
            Expression::TypeName { name, .. } => f.write_str(name),
            Expression::ArrayType { element, .. } => write!(f, "[]{}", element),
            Expression::FunctionType {
                parameters,
                return_type,
                ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "function({})", params.join(", "))?;
                if let Some(return_type) = return_type {
                    write!(f, " : {}", return_type)?;
                }
                Ok(())
            }
            Expression::TaggedType { tag, ty, .. } => write!(f, "{} : {}", tag, ty),
        }
    }
}

/// The parse root, owning all top-level statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
