//! Edge case tests for jassc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_jass, KeywordTable, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize_jass(source)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== LINES ====================

    #[test]
    fn test_edge_crlf_lines() {
        assert_eq!(
            lex_all("a\r\nb"),
            [
                Token::with_length(TokenKind::Identifier, 0, 1, 1),
                Token::new(TokenKind::Newline, 1, 1),
                Token::with_length(TokenKind::Identifier, 3, 2, 1),
            ]
        );
    }

    #[test]
    fn test_edge_mixed_line_endings() {
        let tokens = lex_all("a\nb\r\nc\rd");
        let lines: Vec<u32> = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Identifier)
            .map(Token::line)
            .collect();
        assert_eq!(lines, [1, 2, 3, 4]);
    }

    #[test]
    fn test_edge_line_count_matches_newlines() {
        let source = "a\n\r\n\r/* x\r\ny */\n\"s\ns\"\n";
        let table = KeywordTable::jass();
        let mut lexer = Lexer::new();
        lexer.tokenize_with(source, &table);
        // Five line terminators outside regions, two inside.
        assert_eq!(lexer.line(), 8);
    }

    #[test]
    fn test_edge_token_line_is_start_line() {
        let tokens = lex_all("/*\n\n*/ x");
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 3);
    }

    // ==================== KEYWORDS ====================

    #[test]
    fn test_edge_two_entry_table() {
        let keywords = ["if", "in"];
        let kinds = [TokenKind::If, TokenKind::Identifier];
        assert_eq!(
            tokenize("if", &keywords, &kinds),
            [Token::new(TokenKind::If, 0, 1)]
        );
        assert_eq!(
            tokenize("iffy", &keywords, &kinds),
            [Token::with_length(TokenKind::Identifier, 0, 1, 4)]
        );
        assert_eq!(
            tokenize("i", &keywords, &kinds),
            [Token::with_length(TokenKind::Identifier, 0, 1, 1)]
        );
    }

    #[test]
    fn test_edge_single_entry_needs_exact_match() {
        let keywords = ["b"];
        let kinds = [TokenKind::Debug];
        assert_eq!(
            tokenize("bb", &keywords, &kinds),
            [Token::with_length(TokenKind::Identifier, 0, 1, 2)]
        );
        // `b` is not the usual spelling of `debug`, so the run length is kept.
        assert_eq!(
            tokenize("b", &keywords, &kinds),
            [Token::with_length(TokenKind::Debug, 0, 1, 1)]
        );
    }

    #[test]
    fn test_edge_empty_keyword_table() {
        let keywords: [&str; 0] = [];
        assert_eq!(
            tokenize("set", &keywords, &[]),
            [Token::with_length(TokenKind::Identifier, 0, 1, 3)]
        );
    }

    #[test]
    fn test_edge_keyword_prefix_chain() {
        // `endif` must not be taken for `end`-anything else.
        assert_eq!(kinds("endif"), [TokenKind::EndIf]);
        assert_eq!(kinds("endi"), [TokenKind::Identifier]);
        assert_eq!(kinds("endifs"), [TokenKind::Identifier]);
        assert_eq!(kinds("else elseif"), [TokenKind::Else, TokenKind::ElseIf]);
    }

    #[test]
    fn test_edge_keyword_glued_to_operator() {
        assert_eq!(
            kinds("not(x)"),
            [TokenKind::Not, TokenKind::LParen, TokenKind::Identifier, TokenKind::RParen]
        );
    }

    #[test]
    fn test_edge_bang_is_not() {
        let source = "!x";
        let tokens = lex_all(source);
        assert_eq!(tokens[0], Token::new(TokenKind::Not, 0, 1));
        assert_eq!(tokens[0].extent(source), 1);
    }

    // ==================== LITERALS ====================

    #[test]
    fn test_edge_literal_boundaries() {
        assert_eq!(kinds("1.5"), [TokenKind::Real]);
        assert_eq!(kinds("1."), [TokenKind::Real]);
        assert_eq!(kinds(".5"), [TokenKind::Real]);
        assert_eq!(kinds("."), [TokenKind::Dot]);
        assert_eq!(kinds("0x"), [TokenKind::Identifier]);
        assert_eq!(kinds("0x1"), [TokenKind::Int]);
    }

    #[test]
    fn test_edge_leading_zero_eight() {
        assert_eq!(
            lex_all("08"),
            [Token::with_length(TokenKind::Identifier, 0, 1, 2)]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("set {} = 1", name);
        let tokens = lex_all(&source);
        assert_eq!(tokens[1].length(), 10000);
    }

    #[test]
    fn test_edge_long_integer() {
        let source = "9".repeat(64);
        assert_eq!(
            lex_all(&source),
            [Token::with_length(TokenKind::Int, 0, 1, 64)]
        );
    }

    // ==================== REGIONS ====================

    #[test]
    fn test_edge_nested_comment() {
        assert_eq!(
            lex_all("/* a /* b */ c */"),
            [Token::with_length(TokenKind::BlockComment, 2, 1, 13)]
        );
    }

    #[test]
    fn test_edge_escaped_quote() {
        let source = r#""a\"b""#;
        let tokens = lex_all(source);
        assert_eq!(tokens, [Token::with_length(TokenKind::String, 1, 1, 4)]);
        assert_eq!(tokens[0].text(source), r#"a\"b"#);
    }

    #[test]
    fn test_edge_unterminated_regions_run_to_end() {
        for source in ["\"abc", "'abc", "$abc", "/* abc", "/* a /* b */"] {
            let tokens = lex_all(source);
            assert_eq!(tokens.len(), 1, "{:?}", source);
            assert_eq!(tokens[0].end(source), source.len(), "{:?}", source);
        }
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let source = r#""// not a comment" x"#;
        let tokens = lex_all(source);
        assert_eq!(tokens[0].text(source), "// not a comment");
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_string_inside_comment() {
        assert_eq!(kinds("/* \" */ x"), [TokenKind::BlockComment, TokenKind::Identifier]);
    }

    // ==================== ROBUSTNESS ====================

    #[test]
    fn test_edge_idempotent() {
        let source = "library A\n    private real x = .5 // c\n/* d */ endlibrary";
        assert_eq!(lex_all(source), lex_all(source));
    }

    #[test]
    fn test_edge_unknown_bytes_make_progress() {
        let source = "@ ? : ~ ^ & | ` é 中";
        let tokens = lex_all(source);
        assert_eq!(tokens.len(), 10);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Identifier));
        assert_eq!(tokens[9].text(source), "中");
    }

    #[test]
    fn test_edge_only_newlines() {
        assert_eq!(kinds("\n\n\n"), [TokenKind::Newline; 3]);
    }

    #[test]
    fn test_edge_tokens_stay_in_bounds() {
        let source = "x = 'a";
        for token in lex_all(source) {
            assert!(token.end(source) <= source.len());
        }
    }
}
