//! Expression parsing implementation
//!
//! Precedence climbing over the [`Precedence`] table: a prefix handler for
//! the current token produces the left operand, then infix handlers fold in
//! operators as long as the next token binds tighter than the caller's
//! precedence. Passing an infix operator's own precedence into the recursive
//! call makes same-precedence chains left-associative (`a - b - c` parses as
//! `((a - b) - c)`).
//!
//! Handler lookup is a static `match` over the token kind; a token with no
//! prefix handler in expression position is an error, a token with no infix
//! handler simply ends the expression.
//!
//! Literal tokens carry verbatim source text; the numeric value (and any
//! malformed-literal error) is produced here, when the token is consumed
//! into an AST node.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use super::ast::Expression;
use super::lexer::TokenKind;
use super::parse::{ParseError, Parser};
use super::precedence::Precedence;

impl Parser {
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            if !Self::has_infix(self.peek_token.kind) {
                return Ok(left);
            }
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        match self.cur_token.kind {
            TokenKind::Ident => Ok(Expression::Identifier(self.cur_identifier())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Float => self.parse_float_literal(),
            TokenKind::Str => Ok(Expression::StringLiteral {
                token: self.cur_token.clone(),
                value: self.cur_token.literal.clone(),
            }),
            TokenKind::Char => self.parse_char_literal(),
            TokenKind::True | TokenKind::False => Ok(Expression::BooleanLiteral {
                token: self.cur_token.clone(),
                value: self.cur_token_is(TokenKind::True),
            }),
            TokenKind::Null => Ok(Expression::NullLiteral {
                token: self.cur_token.clone(),
            }),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Bang | TokenKind::Minus | TokenKind::Inc | TokenKind::Dec => {
                self.parse_prefix_expression()
            }
            TokenKind::LParen => self.parse_grouped_expression(),
            kind => Err(ParseError::NoPrefixParseFn {
                kind,
                line: self.cur_token.line,
                column: self.cur_token.column,
            }),
        }
    }

    fn has_infix(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Le
                | TokenKind::Ge
                | TokenKind::Shl
                | TokenKind::Shr
                | TokenKind::Amp
                | TokenKind::Pipe
                | TokenKind::Caret
                | TokenKind::AndAnd
                | TokenKind::OrOr
                | TokenKind::Assign
                | TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::StarAssign
                | TokenKind::SlashAssign
                | TokenKind::PercentAssign
                | TokenKind::AmpAssign
                | TokenKind::PipeAssign
                | TokenKind::CaretAssign
                | TokenKind::ShlAssign
                | TokenKind::ShrAssign
                | TokenKind::Inc
                | TokenKind::Dec
                | TokenKind::LParen
                | TokenKind::LBracket
        )
    }

    fn parse_infix(&mut self, left: Expression) -> Result<Expression, ParseError> {
        match self.cur_token.kind {
            TokenKind::LParen => self.parse_call_expression(left),
            TokenKind::LBracket => self.parse_index_expression(left),
            TokenKind::Inc | TokenKind::Dec => Ok(Expression::Postfix {
                token: self.cur_token.clone(),
                operator: self.cur_token.literal.clone(),
                left: Box::new(left),
            }),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let operator = self.cur_token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let operator = self.cur_token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::Call {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_index_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index {
            token,
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// Comma-separated expressions up to the given terminator; shared by
    /// call arguments and array literals.
    pub(crate) fn parse_expression_list(
        &mut self,
        end: TokenKind,
    ) -> Result<Vec<Expression>, ParseError> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Ok(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }

    fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let literal = token.literal.as_str();

        let parsed = if let Some(digits) = literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))
        {
            i64::from_str_radix(digits, 16)
        } else if let Some(digits) = literal
            .strip_prefix("0b")
            .or_else(|| literal.strip_prefix("0B"))
        {
            i64::from_str_radix(digits, 2)
        } else {
            literal.parse::<i64>()
        };

        match parsed {
            Ok(value) => Ok(Expression::IntegerLiteral { token, value }),
            Err(_) => Err(ParseError::invalid(
                format!("could not parse '{}' as integer", literal),
                &token,
            )),
        }
    }

    fn parse_float_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();

        match token.literal.parse::<f64>() {
            Ok(value) => Ok(Expression::FloatLiteral { token, value }),
            Err(_) => Err(ParseError::invalid(
                format!("could not parse '{}' as float", token.literal),
                &token,
            )),
        }
    }

    /// The char token's literal is the raw content between the quotes; its
    /// first byte is the effective value.
    fn parse_char_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();

        match token.literal.bytes().next() {
            Some(value) => Ok(Expression::CharLiteral { token, value }),
            None => Err(ParseError::invalid("empty character literal", &token)),
        }
    }

    fn parse_array_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Ok(Expression::ArrayLiteral { token, elements })
    }

    /// `function(params) { body }` in expression position.
    fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral {
            token,
            parameters,
            body,
        })
    }
}
