//! Statement parsing implementation
//!
//! This module handles parsing of all statement forms:
//!
//! - Variable declarations: `new x = 42;`, `new arr[] = "text";`
//! - Control flow: `if`/`else`, `while`, `for`
//! - Jump statements: `return`, `return value;`
//! - Compound statements: `{ ... }`
//! - Tag and enum declarations
//! - Expression statements (the default when nothing else matches)
//!
//! Convention shared by every production: on entry the current token is the
//! statement's first token, on exit it is the statement's last consumed
//! token (the enclosing loop advances past it). Trailing semicolons after
//! simple statements are optional and absorbed when present.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use super::ast::{BlockStatement, EnumMember, Statement};
use super::lexer::TokenKind;
use super::parse::{ParseError, Parser};
use super::precedence::Precedence;

impl Parser {
    /// The entry point for parsing any statement. Dispatches purely on the
    /// current token's kind.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cur_token.kind {
            TokenKind::New => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::LBrace => Ok(Statement::Block(self.parse_block_statement()?)),
            TokenKind::Tag => self.parse_tag_declaration(),
            TokenKind::Enum => self.parse_enum_declaration(),
            TokenKind::Function => self.parse_function_declaration(),
            TokenKind::Native => self.parse_native_declaration(),
            TokenKind::State => self.parse_state_declaration(),
            TokenKind::Include => self.parse_include_directive(),
            TokenKind::Define => self.parse_define_directive(),
            TokenKind::IfDef => self.parse_ifdef_directive(),
            TokenKind::Directive => Err(ParseError::invalid(
                format!("unknown directive '{}'", self.cur_token.literal),
                &self.cur_token,
            )),
            _ => self.parse_expression_statement(),
        }
    }

    /// `new IDENT [= <expr>] ;?` with an optional `[]` marker after the
    /// name for array declarations. Name and `=` are mandatory.
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();
        let name = self.expect_peek_ident()?;

        let mut is_array = false;
        if self.peek_token_is(TokenKind::LBracket) {
            self.next_token();
            self.expect_peek(TokenKind::RBracket)?;
            is_array = true;
        }

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Let {
            token,
            name,
            is_array,
            value,
        })
    }

    /// `return ;` or `return <expr> ;?`; the value is absent exactly when
    /// a semicolon directly follows the keyword.
    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            return Ok(Statement::Return { token, value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Return {
            token,
            value: Some(value),
        })
    }

    fn parse_if_statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Statement::If {
            token,
            condition,
            consequence,
            alternative,
        })
    }

    fn parse_while_statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Statement::While {
            token,
            condition,
            body,
        })
    }

    /// `for (init; condition; update) { body }`. Each clause may be empty;
    /// the update is an expression statement without its own terminator, so
    /// `i++` and `i += 1` are valid there.
    fn parse_for_statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;

        let init = if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            None
        } else {
            self.next_token();
            let stmt = self.parse_statement()?;
            // Simple statements absorb an optional trailing semicolon; the
            // for grammar makes it mandatory.
            if !self.cur_token_is(TokenKind::Semicolon) {
                return Err(ParseError::invalid(
                    "expected ';' after for initializer",
                    &self.cur_token,
                ));
            }
            Some(Box::new(stmt))
        };

        let condition = if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            None
        } else {
            self.next_token();
            let expr = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Semicolon)?;
            Some(expr)
        };

        let update = if self.peek_token_is(TokenKind::RParen) {
            None
        } else {
            self.next_token();
            Some(Box::new(self.parse_expression_statement()?))
        };
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Statement::For {
            token,
            init,
            condition,
            update,
            body,
        })
    }

    /// `tag IDENT ;?`
    fn parse_tag_declaration(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();
        let name = self.expect_peek_ident()?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Tag { token, name })
    }

    /// `enum [IDENT] { member [= expr] , ... }` with an optional trailing
    /// comma before the closing brace.
    fn parse_enum_declaration(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        let name = if self.peek_token_is(TokenKind::Ident) {
            self.next_token();
            Some(self.cur_identifier())
        } else {
            None
        };

        self.expect_peek(TokenKind::LBrace)?;
        let members = self.parse_enum_members()?;

        Ok(Statement::Enum {
            token,
            name,
            members,
        })
    }

    /// Current token is `{` on entry and `}` on exit.
    fn parse_enum_members(&mut self) -> Result<Vec<EnumMember>, ParseError> {
        let mut members = Vec::new();

        if self.peek_token_is(TokenKind::RBrace) {
            self.next_token();
            return Ok(members);
        }

        loop {
            let name = self.expect_peek_ident()?;

            let mut value = None;
            if self.peek_token_is(TokenKind::Assign) {
                self.next_token(); // '='
                self.next_token(); // move to the value
                value = Some(self.parse_expression(Precedence::Lowest)?);
            }

            members.push(EnumMember { name, value });

            if self.peek_token_is(TokenKind::Comma) {
                self.next_token();
                if self.peek_token_is(TokenKind::RBrace) {
                    self.next_token();
                    return Ok(members);
                }
                continue;
            }

            self.expect_peek(TokenKind::RBrace)?;
            return Ok(members);
        }
    }

    /// `{ statement* }`. Statement-level errors are recorded and skipped so
    /// the rest of the block still parses; end of input before the closing
    /// brace fails the whole block.
    pub(crate) fn parse_block_statement(&mut self) -> Result<BlockStatement, ParseError> {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.next_token();
                }
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }

        if self.cur_token_is(TokenKind::Eof) {
            return Err(ParseError::UnterminatedBlock {
                line: token.line,
                column: token.column,
            });
        }

        Ok(BlockStatement { token, statements })
    }

    /// The default statement form: a bare expression with an optional
    /// trailing semicolon.
    pub(crate) fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Expression { token, expression })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Expression;

    fn parse_ok(input: &str) -> Vec<Statement> {
        let mut parser = Parser::new(input);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parser errors: {:?}",
            parser.errors()
        );
        program.statements
    }

    fn let_parts(stmt: &Statement) -> (&str, bool, &Expression) {
        match stmt {
            Statement::Let {
                name,
                is_array,
                value,
                ..
            } => (name.value.as_str(), *is_array, value),
            other => panic!("expected let statement, got {:?}", other),
        }
    }

    #[test]
    fn test_variable_declarations() {
        let statements = parse_ok(
            r#"
            new x = 5;
            new y = 10.5;
            new str[] = "Hello, Pawn!";
            new ch = 'A';
            new flag = true;
            new empty = null;
            "#,
        );

        assert_eq!(statements.len(), 6);

        let (name, is_array, value) = let_parts(&statements[0]);
        assert_eq!((name, is_array), ("x", false));
        assert!(matches!(value, Expression::IntegerLiteral { value: 5, .. }));

        let (name, _, value) = let_parts(&statements[1]);
        assert_eq!(name, "y");
        assert!(matches!(value, Expression::FloatLiteral { value, .. } if *value == 10.5));

        let (name, is_array, value) = let_parts(&statements[2]);
        assert_eq!((name, is_array), ("str", true));
        assert!(matches!(value, Expression::StringLiteral { value, .. } if value == "Hello, Pawn!"));

        let (name, _, value) = let_parts(&statements[3]);
        assert_eq!(name, "ch");
        assert!(matches!(value, Expression::CharLiteral { value: b'A', .. }));

        let (_, _, value) = let_parts(&statements[4]);
        assert!(matches!(value, Expression::BooleanLiteral { value: true, .. }));

        let (_, _, value) = let_parts(&statements[5]);
        assert!(matches!(value, Expression::NullLiteral { .. }));
    }

    #[test]
    fn test_let_statement_token_is_new() {
        let statements = parse_ok("new x = 1;");
        assert_eq!(statements[0].token().literal, "new");
    }

    #[test]
    fn test_tagged_variable_declaration() {
        let statements = parse_ok("new Float:pos = 10.5;");
        let (name, _, _) = let_parts(&statements[0]);
        assert_eq!(name, "Float:pos");
    }

    #[test]
    fn test_return_statements() {
        let statements = parse_ok("return 1; return x + y; return;");
        assert_eq!(statements.len(), 3);

        assert!(
            matches!(&statements[0], Statement::Return { value: Some(Expression::IntegerLiteral { value: 1, .. }), .. })
        );
        assert!(matches!(
            &statements[1],
            Statement::Return {
                value: Some(Expression::Infix { .. }),
                ..
            }
        ));
        assert!(matches!(&statements[2], Statement::Return { value: None, .. }));
    }

    #[test]
    fn test_if_statement() {
        let statements = parse_ok("if (x < y) { return x; }");
        match &statements[0] {
            Statement::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                assert_eq!(condition.to_string(), "(x < y)");
                assert_eq!(consequence.statements.len(), 1);
                assert!(alternative.is_none());
            }
            other => panic!("expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else_statement() {
        let statements = parse_ok("if (x < y) { return x; } else { return y; }");
        match &statements[0] {
            Statement::If { alternative, .. } => {
                let alternative = alternative.as_ref().expect("missing else branch");
                assert_eq!(alternative.statements.len(), 1);
            }
            other => panic!("expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_while_statement() {
        let statements = parse_ok("while (i < 10) { i += 1; }");
        match &statements[0] {
            Statement::While {
                condition, body, ..
            } => {
                assert_eq!(condition.to_string(), "(i < 10)");
                assert_eq!(body.statements.len(), 1);
            }
            other => panic!("expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_for_statement_full_clauses() {
        let statements = parse_ok("for (new i = 0; i < 10; i++) { print(i); }");
        match &statements[0] {
            Statement::For {
                init,
                condition,
                update,
                body,
                ..
            } => {
                assert!(matches!(init.as_deref(), Some(Statement::Let { .. })));
                assert_eq!(condition.as_ref().map(|c| c.to_string()).as_deref(), Some("(i < 10)"));
                match update.as_deref() {
                    Some(Statement::Expression { expression, .. }) => {
                        assert_eq!(expression.to_string(), "(i++)");
                    }
                    other => panic!("expected update expression, got {:?}", other),
                }
                assert_eq!(body.statements.len(), 1);
            }
            other => panic!("expected for statement, got {:?}", other),
        }
    }

    #[test]
    fn test_for_statement_empty_clauses() {
        let statements = parse_ok("for (;;) { }");
        match &statements[0] {
            Statement::For {
                init,
                condition,
                update,
                body,
                ..
            } => {
                assert!(init.is_none());
                assert!(condition.is_none());
                assert!(update.is_none());
                assert!(body.statements.is_empty());
            }
            other => panic!("expected for statement, got {:?}", other),
        }
    }

    #[test]
    fn test_for_statement_compound_assignment_update() {
        let statements = parse_ok("for (new i = 0; i < 10; i += 2) { }");
        match &statements[0] {
            Statement::For { update, .. } => match update.as_deref() {
                Some(Statement::Expression { expression, .. }) => {
                    assert_eq!(expression.to_string(), "(i += 2)");
                }
                other => panic!("expected update expression, got {:?}", other),
            },
            other => panic!("expected for statement, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_declaration() {
        let statements = parse_ok("tag Speed;");
        match &statements[0] {
            Statement::Tag { name, .. } => assert_eq!(name.value, "Speed"),
            other => panic!("expected tag declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_enum_declaration() {
        let statements = parse_ok("enum Color { Red, Green = 2, Blue }");
        match &statements[0] {
            Statement::Enum { name, members, .. } => {
                assert_eq!(name.as_ref().map(|n| n.value.as_str()), Some("Color"));
                assert_eq!(members.len(), 3);
                assert_eq!(members[0].name.value, "Red");
                assert!(members[0].value.is_none());
                assert_eq!(members[1].name.value, "Green");
                assert!(matches!(
                    members[1].value,
                    Some(Expression::IntegerLiteral { value: 2, .. })
                ));
                assert_eq!(members[2].name.value, "Blue");
            }
            other => panic!("expected enum declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_anonymous_enum_with_trailing_comma() {
        let statements = parse_ok("enum { A, B, }");
        match &statements[0] {
            Statement::Enum { name, members, .. } => {
                assert!(name.is_none());
                assert_eq!(members.len(), 2);
            }
            other => panic!("expected enum declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_enum() {
        let statements = parse_ok("enum Flags { }");
        match &statements[0] {
            Statement::Enum { members, .. } => assert!(members.is_empty()),
            other => panic!("expected enum declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_blocks() {
        let statements = parse_ok("{ new x = 1; { new y = 2; } }");
        match &statements[0] {
            Statement::Block(block) => {
                assert_eq!(block.statements.len(), 2);
                assert!(matches!(block.statements[1], Statement::Block(_)));
            }
            other => panic!("expected block statement, got {:?}", other),
        }
    }

    #[test]
    fn test_error_inside_block_recovers() {
        let mut parser = Parser::new("{ new x 1; new y = 2; }");
        let program = parser.parse_program();

        assert_eq!(parser.errors().len(), 1);
        match &program.statements[0] {
            Statement::Block(block) => {
                assert_eq!(block.statements.len(), 1);
                assert!(matches!(&block.statements[0], Statement::Let { name, .. } if name.value == "y"));
            }
            other => panic!("expected block statement, got {:?}", other),
        }
    }

    #[test]
    fn test_expression_statement() {
        let statements = parse_ok("print(42);");
        match &statements[0] {
            Statement::Expression { expression, .. } => {
                assert!(matches!(expression, Expression::Call { .. }));
            }
            other => panic!("expected expression statement, got {:?}", other),
        }
    }
}
