//! Declaration parsing implementation
//!
//! This module handles the named top-level declarations:
//!
//! - Function declarations: `function name(params) { body }`
//! - Native declarations: `native name(params) : type;` (no body)
//! - State declarations: `state name { body }`
//! - The shared parameter-list production
//!
//! Parameters are plain identifiers; a tag prefix arrives already fused
//! into the identifier token (`Float:x`), so no colon handling happens
//! here.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use super::ast::{Identifier, Statement};
use super::lexer::TokenKind;
use super::parse::{ParseError, Parser};

impl Parser {
    /// `function IDENT ( params ) { body }`
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();
        let name = self.expect_peek_ident()?;

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Statement::Function {
            token,
            name,
            parameters,
            body,
        })
    }

    /// `native IDENT ( params ) [: type] ;`; the semicolon is mandatory,
    /// there is never a body.
    pub(crate) fn parse_native_declaration(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();
        let name = self.expect_peek_ident()?;

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        let return_type = if self.peek_token_is(TokenKind::Colon) {
            self.next_token(); // ':'
            self.next_token(); // first token of the type
            Some(self.parse_type_expression()?)
        } else {
            None
        };

        self.expect_peek(TokenKind::Semicolon)?;

        Ok(Statement::Native {
            token,
            name,
            parameters,
            return_type,
        })
    }

    /// `state IDENT { body }`
    pub(crate) fn parse_state_declaration(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();
        let name = self.expect_peek_ident()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Statement::State { token, name, body })
    }

    /// Comma-separated identifier list between parentheses. Current token
    /// is `(` on entry and `)` on exit.
    pub(crate) fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut identifiers = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Ok(identifiers);
        }

        identifiers.push(self.expect_peek_ident()?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            identifiers.push(self.expect_peek_ident()?);
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(identifiers)
    }
}
