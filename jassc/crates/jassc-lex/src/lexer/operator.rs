//! Operator and punctuation lexing.
//!
//! Every operator is matched greedily: the longest spelling that the input
//! allows wins.

use super::core::Scanner;
use crate::token::TokenKind;

impl<'a, K: AsRef<str>> Scanner<'a, K> {
    /// Lexes a one-byte token.
    ///
    /// Handles: `(`, `)`, `[`, `]`, `{`, `}`, `,`, `;`
    pub(crate) fn lex_single(&mut self, kind: TokenKind) {
        let start = self.cursor.position();
        self.cursor.advance();
        self.emit(kind, start);
    }

    /// Lexes plus, increment, or plus-assign.
    ///
    /// Handles: `+`, `++`, `+=`
    pub(crate) fn lex_plus(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_byte(b'+') {
            TokenKind::Increment
        } else if self.cursor.match_byte(b'=') {
            TokenKind::PlusAssign
        } else {
            TokenKind::Plus
        };
        self.emit(kind, start);
    }

    /// Lexes minus, decrement, or minus-assign.
    ///
    /// Handles: `-`, `--`, `-=`
    pub(crate) fn lex_minus(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_byte(b'-') {
            TokenKind::Decrement
        } else if self.cursor.match_byte(b'=') {
            TokenKind::MinusAssign
        } else {
            TokenKind::Minus
        };
        self.emit(kind, start);
    }

    /// Lexes star or star-assign.
    ///
    /// Handles: `*`, `*=`
    pub(crate) fn lex_star(&mut self) {
        self.lex_with_assign(TokenKind::Multiply, TokenKind::MultiplyAssign);
    }

    /// Lexes percent or percent-assign.
    ///
    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) {
        self.lex_with_assign(TokenKind::Modulo, TokenKind::ModuloAssign);
    }

    /// Lexes assign or equality.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) {
        self.lex_with_assign(TokenKind::Assign, TokenKind::Equal);
    }

    /// Lexes logical not or inequality.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) {
        self.lex_with_assign(TokenKind::Not, TokenKind::NotEqual);
    }

    /// Lexes less-than, shift-left, and their assign forms.
    ///
    /// Handles: `<`, `<=`, `<<`, `<<=`
    pub(crate) fn lex_less(&mut self) {
        self.lex_angle(
            b'<',
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::ShiftLeft,
            TokenKind::ShiftLeftAssign,
        );
    }

    /// Lexes greater-than, shift-right, and their assign forms.
    ///
    /// Handles: `>`, `>=`, `>>`, `>>=`
    pub(crate) fn lex_greater(&mut self) {
        self.lex_angle(
            b'>',
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::ShiftRight,
            TokenKind::ShiftRightAssign,
        );
    }

    /// Lexes `x` or `x=` where `x` is the byte under the cursor.
    fn lex_with_assign(&mut self, plain: TokenKind, assign: TokenKind) {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_byte(b'=') { assign } else { plain };
        self.emit(kind, start);
    }

    fn lex_angle(
        &mut self,
        angle: u8,
        plain: TokenKind,
        compare: TokenKind,
        shift: TokenKind,
        shift_assign: TokenKind,
    ) {
        let start = self.cursor.position();
        self.cursor.advance();
        let kind = if self.cursor.match_byte(angle) {
            if self.cursor.match_byte(b'=') {
                shift_assign
            } else {
                shift
            }
        } else if self.cursor.match_byte(b'=') {
            compare
        } else {
            plain
        };
        self.emit(kind, start);
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::{tokenize_jass, Lexer};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize_jass(source).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_arithmetic_operators() {
        assert_eq!(
            kinds("+ - * /"),
            [
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide,
            ]
        );
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(
            kinds("+= -= *= /= %= <<= >>="),
            [
                TokenKind::PlusAssign,
                TokenKind::MinusAssign,
                TokenKind::MultiplyAssign,
                TokenKind::DivideAssign,
                TokenKind::ModuloAssign,
                TokenKind::ShiftLeftAssign,
                TokenKind::ShiftRightAssign,
            ]
        );
    }

    #[test]
    fn test_comparison_operators() {
        assert_eq!(
            kinds("== != < > <= >="),
            [
                TokenKind::Equal,
                TokenKind::NotEqual,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
            ]
        );
    }

    #[test]
    fn test_increment_and_shift() {
        assert_eq!(
            kinds("++ -- << >> !"),
            [
                TokenKind::Increment,
                TokenKind::Decrement,
                TokenKind::ShiftLeft,
                TokenKind::ShiftRight,
                TokenKind::Not,
            ]
        );
    }

    #[test]
    fn test_greedy_without_spaces() {
        // `+++` is `++` then `+`, `<<<=` is `<<` then `<=`.
        assert_eq!(
            kinds("+++"),
            [TokenKind::Increment, TokenKind::Plus]
        );
        assert_eq!(
            kinds("<<<="),
            [TokenKind::ShiftLeft, TokenKind::LessEqual]
        );
        assert_eq!(kinds("==="), [TokenKind::Equal, TokenKind::Assign]);
    }

    #[test]
    fn test_operator_positions() {
        let mut lexer = Lexer::new();
        let tokens = lexer.tokenize("a>>=b", &["x"], &[TokenKind::Identifier]);
        assert_eq!(tokens[1], Token::new(TokenKind::ShiftRightAssign, 1, 1));
        assert_eq!(tokens[2].start(), 4);
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(kinds("x +"), [TokenKind::Identifier, TokenKind::Plus]);
        assert_eq!(kinds("<"), [TokenKind::Less]);
    }
}
