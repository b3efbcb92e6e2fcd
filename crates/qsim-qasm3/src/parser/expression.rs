//! Constant parameter expressions.

use std::f64::consts::{PI, TAU};

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::lexer::Token;

#[derive(Debug, Clone, Copy)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }

    fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
        }
    }
}

impl Parser {
    /// Parse and evaluate an expression.
    pub(super) fn parse_expression(&mut self) -> ParseResult<f64> {
        self.parse_binary_expr(0)
    }

    /// Precedence climbing over `+ - * /`, all left-associative.
    fn parse_binary_expr(&mut self, min_prec: u8) -> ParseResult<f64> {
        let mut left = self.parse_unary_expr()?;

        while let Some(op) = self.peek_binary_op() {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.advance();

            let right = self.parse_binary_expr(prec + 1)?;
            left = op.apply(left, right);
        }

        Ok(left)
    }

    fn parse_unary_expr(&mut self) -> ParseResult<f64> {
        if self.consume(&Token::Minus) {
            return Ok(-self.parse_unary_expr()?);
        }
        if self.consume(&Token::Plus) {
            return self.parse_unary_expr();
        }
        self.parse_primary_expr()
    }

    fn parse_primary_expr(&mut self) -> ParseResult<f64> {
        let token = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expression".into()))?;

        match token {
            #[allow(clippy::cast_precision_loss)]
            Token::IntLiteral(v) => Ok(v as f64),
            Token::FloatLiteral(v) => Ok(v),
            Token::Pi => Ok(PI),
            Token::Tau => Ok(TAU),
            Token::Identifier(name) => Err(ParseError::UndefinedIdentifier(name)),
            Token::LParen => {
                let value = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            other => Err(self.unexpected("expression", &other)),
        }
    }

    fn peek_binary_op(&self) -> Option<BinOp> {
        match self.peek()? {
            Token::Plus => Some(BinOp::Add),
            Token::Minus => Some(BinOp::Sub),
            Token::Star => Some(BinOp::Mul),
            Token::Slash => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Parse a parenthesized, comma-separated expression list. The opening
    /// parenthesis has already been consumed.
    pub(super) fn parse_expression_list(&mut self) -> ParseResult<Vec<f64>> {
        if self.consume(&Token::RParen) {
            return Ok(vec![]);
        }
        let mut values = vec![self.parse_expression()?];
        while self.consume(&Token::Comma) {
            values.push(self.parse_expression()?);
        }
        self.expect(Token::RParen)?;
        Ok(values)
    }
}
