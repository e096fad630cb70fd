//! Type expression parsing
//!
//! Types appear after the `:` of a native declaration's return position and
//! inside other type expressions:
//!
//! - `TypeName`: a bare name (`Float`) or a builtin type keyword,
//! - `ArrayType`: `[]ElementType`,
//! - `FunctionType`: `function(T1, T2) [: R]`,
//! - `TaggedType`: `Tag : Type` (an adjacent `Tag:...` fuses into one
//!   identifier token in the lexer, so the tagged form requires the spaced
//!   colon).
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use super::ast::Expression;
use super::lexer::TokenKind;
use super::parse::{ParseError, Parser};

impl Parser {
    /// The entry point for parsing any type expression; current token is
    /// the type's first token.
    pub(crate) fn parse_type_expression(&mut self) -> Result<Expression, ParseError> {
        match self.cur_token.kind {
            TokenKind::Ident => {
                if self.peek_token_is(TokenKind::Colon) {
                    self.parse_tagged_type()
                } else {
                    Ok(self.type_name())
                }
            }
            TokenKind::CharType | TokenKind::FloatType | TokenKind::Bool | TokenKind::Void => {
                Ok(self.type_name())
            }
            TokenKind::LBracket => self.parse_array_type(),
            TokenKind::Function => self.parse_function_type(),
            _ => Err(ParseError::invalid(
                format!("expected a type expression, got {}", self.cur_token),
                &self.cur_token,
            )),
        }
    }

    fn type_name(&self) -> Expression {
        Expression::TypeName {
            token: self.cur_token.clone(),
            name: self.cur_token.literal.clone(),
        }
    }

    /// `[] ElementType`
    fn parse_array_type(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::RBracket)?;
        self.next_token();
        let element = self.parse_type_expression()?;

        Ok(Expression::ArrayType {
            token,
            element: Box::new(element),
        })
    }

    /// `function ( T1, T2 ) [: R]`
    fn parse_function_type(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;

        let mut parameters = Vec::new();
        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
        } else {
            self.next_token();
            parameters.push(self.parse_type_expression()?);

            while self.peek_token_is(TokenKind::Comma) {
                self.next_token();
                self.next_token();
                parameters.push(self.parse_type_expression()?);
            }

            self.expect_peek(TokenKind::RParen)?;
        }

        let return_type = if self.peek_token_is(TokenKind::Colon) {
            self.next_token();
            self.next_token();
            Some(Box::new(self.parse_type_expression()?))
        } else {
            None
        };

        Ok(Expression::FunctionType {
            token,
            parameters,
            return_type,
        })
    }

    /// `Tag : Type`
    fn parse_tagged_type(&mut self) -> Result<Expression, ParseError> {
        let tag = self.cur_identifier();
        let token = tag.token.clone();

        self.expect_peek(TokenKind::Colon)?;
        self.next_token();
        let ty = self.parse_type_expression()?;

        Ok(Expression::TaggedType {
            token,
            tag,
            ty: Box::new(ty),
        })
    }
}
