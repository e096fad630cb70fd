//! Preprocessor directive parsing
//!
//! Directives are tokenized by the lexer and parsed here into statement
//! nodes; nothing is ever expanded:
//!
//! - `#include <path>` or `#include "path"`
//! - `#define NAME value-expression`
//! - `#ifdef COND { body } [else { body }] #endif`
//!
//! An unknown `#name` surfaces through statement dispatch as an "unknown
//! directive" diagnostic.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use super::ast::Statement;
use super::lexer::TokenKind;
use super::parse::{ParseError, Parser};
use super::precedence::Precedence;

impl Parser {
    /// `#include <path>` (the path between the angle brackets is collected
    /// from the raw token literals) or `#include "path"`.
    pub(crate) fn parse_include_directive(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        if self.peek_token_is(TokenKind::Lt) {
            self.next_token(); // '<'

            let mut path = String::new();
            while !self.peek_token_is(TokenKind::Gt) && !self.peek_token_is(TokenKind::Eof) {
                self.next_token();
                path.push_str(&self.cur_token.literal);
            }
            self.expect_peek(TokenKind::Gt)?;

            Ok(Statement::Include { token, path })
        } else if self.peek_token_is(TokenKind::Str) {
            self.next_token();
            Ok(Statement::Include {
                token,
                path: self.cur_token.literal.clone(),
            })
        } else {
            Err(ParseError::invalid(
                "expected '<' or a quoted path after #include",
                &self.peek_token,
            ))
        }
    }

    /// `#define NAME value`; the value is a full expression.
    pub(crate) fn parse_define_directive(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = self.cur_token.literal.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        Ok(Statement::Define { token, name, value })
    }

    /// `#ifdef COND { body } [else { body }] #endif`; the closing `#endif`
    /// is mandatory.
    pub(crate) fn parse_ifdef_directive(&mut self) -> Result<Statement, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let condition = self.cur_token.literal.clone();

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        let else_body = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        self.expect_peek(TokenKind::EndIf)?;

        Ok(Statement::IfDef {
            token,
            condition,
            body,
            else_body,
        })
    }
}
