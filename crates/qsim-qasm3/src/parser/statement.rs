//! Statement parsing.

use super::Parser;
use crate::ast::{GateCall, Operand, Statement};
use crate::error::{ParseError, ParseResult};
use crate::lexer::Token;

impl Parser {
    /// Parse a statement.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self
            .peek()
            .cloned()
            .ok_or_else(|| ParseError::UnexpectedEof("statement".into()))?;

        match token {
            Token::Include => self.parse_include(),
            Token::Qubit => {
                self.advance();
                let (name, size) = self.parse_declaration()?;
                Ok(Statement::QubitDecl { name, size })
            }
            Token::Bit => {
                self.advance();
                let (name, size) = self.parse_declaration()?;
                Ok(Statement::BitDecl { name, size })
            }
            Token::Measure => self.parse_arrow_measure(),
            Token::Identifier(name) => {
                self.advance();
                if self.check(&Token::LBracket) || self.check(&Token::Eq) {
                    self.parse_assign_measure(name)
                } else {
                    self.parse_gate_call(name)
                }
            }
            other => {
                self.advance();
                Err(self.unexpected("statement", &other))
            }
        }
    }

    fn parse_include(&mut self) -> ParseResult<Statement> {
        self.expect(Token::Include)?;
        let path = match self.advance() {
            Some(Token::StringLiteral(s)) => s,
            Some(other) => return Err(self.unexpected("string literal", &other)),
            None => return Err(ParseError::UnexpectedEof("include path".into())),
        };
        self.expect(Token::Semicolon)?;
        Ok(Statement::Include(path))
    }

    /// `[n] name;` or `name;` after the `qubit`/`bit` keyword.
    fn parse_declaration(&mut self) -> ParseResult<(String, u64)> {
        let size = if self.consume(&Token::LBracket) {
            let size = self.parse_int_literal()?;
            self.expect(Token::RBracket)?;
            size
        } else {
            1
        };
        let name = self.parse_identifier()?;
        self.expect(Token::Semicolon)?;
        Ok((name, size))
    }

    /// `name` or `name[i]`.
    fn parse_operand(&mut self) -> ParseResult<Operand> {
        let register = self.parse_identifier()?;
        self.parse_operand_index(register)
    }

    fn parse_operand_index(&mut self, register: String) -> ParseResult<Operand> {
        let index = if self.consume(&Token::LBracket) {
            let index = self.parse_int_literal()?;
            self.expect(Token::RBracket)?;
            Some(index)
        } else {
            None
        };
        Ok(Operand { register, index })
    }

    /// `bits = measure qubits;` with the target identifier already consumed.
    fn parse_assign_measure(&mut self, target: String) -> ParseResult<Statement> {
        let line = self.line();
        let bits = self.parse_operand_index(target)?;
        self.expect(Token::Eq)?;
        self.expect(Token::Measure)?;
        let qubits = self.parse_operand()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Measure { bits, qubits, line })
    }

    /// `measure qubits -> bits;`
    fn parse_arrow_measure(&mut self) -> ParseResult<Statement> {
        self.expect(Token::Measure)?;
        let line = self.line();
        let qubits = self.parse_operand()?;
        self.expect(Token::Arrow)?;
        let bits = self.parse_operand()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Measure { bits, qubits, line })
    }

    /// `name(params) q[a], q[b];` with the name already consumed.
    fn parse_gate_call(&mut self, name: String) -> ParseResult<Statement> {
        let line = self.line();
        let params = if self.consume(&Token::LParen) {
            self.parse_expression_list()?
        } else {
            vec![]
        };

        let mut operands = vec![self.parse_operand()?];
        loop {
            match self.advance() {
                Some(Token::Comma) => operands.push(self.parse_operand()?),
                Some(Token::Semicolon) => break,
                Some(other) => return Err(self.unexpected("',' or ';'", &other)),
                None => return Err(ParseError::UnexpectedEof(format!("end of '{name}'"))),
            }
        }

        Ok(Statement::Gate(GateCall {
            name,
            params,
            operands,
            line,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse_program;
    use super::*;

    fn statements(body: &str) -> Vec<Statement> {
        parse_program(&format!("OPENQASM 3.0;\n{body}"))
            .unwrap()
            .statements
    }

    #[test]
    fn test_declarations() {
        let s = statements("qubit[3] q; bit c;");
        assert_eq!(
            s,
            vec![
                Statement::QubitDecl {
                    name: "q".into(),
                    size: 3
                },
                Statement::BitDecl {
                    name: "c".into(),
                    size: 1
                },
            ]
        );
    }

    #[test]
    fn test_measure_forms() {
        let s = statements("c[1] = measure q[0];\nmeasure q -> c;");
        assert_eq!(
            s[0],
            Statement::Measure {
                bits: Operand {
                    register: "c".into(),
                    index: Some(1)
                },
                qubits: Operand {
                    register: "q".into(),
                    index: Some(0)
                },
                line: 2,
            }
        );
        assert!(matches!(
            &s[1],
            Statement::Measure { bits, qubits, line: 3 }
                if bits.index.is_none() && qubits.index.is_none()
        ));
    }

    #[test]
    fn test_gate_call() {
        let s = statements("rx(pi) q[0];\ncx q[0], q[1];");
        let Statement::Gate(call) = &s[1] else {
            panic!("expected gate call");
        };
        assert_eq!(call.name, "cx");
        assert!(call.params.is_empty());
        assert_eq!(call.operands.len(), 2);
        assert_eq!(call.line, 3);
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_program("OPENQASM 3.0; h q[0]").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof(_)));
    }
}
