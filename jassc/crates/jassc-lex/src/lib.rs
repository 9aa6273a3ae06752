//! jassc-lex - Lexical Analyzer for JASS and vJass
//!
//! This crate turns JASS source (the Warcraft III scripting language) and
//! its vJass superset into a flat list of tokens for a parser to consume.
//!
//! # Overview
//!
//! Scanning is byte based and never fails. Every byte of the input is
//! either skipped (spaces, tabs, `//` comments) or covered by exactly one
//! token; input that is not valid JASS ends up as identifier tokens for
//! the parser to reject.
//!
//! Tokens do not own text. Each one records its kind, the byte offset
//! where it starts and the line it starts on. Kinds whose text varies
//! (identifiers, literals, comments) also record a length.
//!
//! # Example Usage
//!
//! ```
//! use jassc_lex::{tokenize_jass, TokenKind};
//!
//! let source = "call KillUnit(u)\n";
//! let tokens = tokenize_jass(source);
//!
//! assert_eq!(tokens[0].kind(), TokenKind::Call);
//! assert_eq!(tokens[1].text(source), "KillUnit");
//! assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Newline));
//! ```
//!
//! A [`Lexer`] can also be driven directly with any sorted keyword table:
//!
//! ```
//! use jassc_lex::{Lexer, TokenKind};
//!
//! let keywords = ["if", "then"];
//! let kinds = [TokenKind::If, TokenKind::Then];
//!
//! let mut lexer = Lexer::new();
//! let tokens = lexer.tokenize("if x then", &keywords, &kinds);
//! assert_eq!(tokens.len(), 3);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`keywords`] - Keyword tables and the narrowing keyword search
//! - [`config`] - Loading keyword tables from TOML
//! - [`cursor`] - Byte cursor and line accounting
//! - [`chars`] - Byte classification
//! - [`error`] - Keyword table errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! The JASS keywords (`function`, `takes`, `returns`, `globals`, `loop`,
//! `exitwhen`, ...) and the vJass ones (`library`, `struct`, `method`,
//! `textmacro`, ...). The conditional-compilation directives `#if`,
//! `#elseif`, `#else` and `#endif` are matched separately.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0755` (octal), `0x1F`
//! - **Real**: `3.14`, `1.`, `.5`
//! - **Rawcode**: `'hfoo'`
//! - **String**: `"hello"`, with backslash escapes kept verbatim
//!
//! ## vJass regions
//!
//! - **Block comments**: `/* ... */`, nesting
//! - **Preprocessor lines**: `//! textmacro ...`
//! - **Text-macro arguments**: `$NAME$`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `++`, `--`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Shift**: `<<`, `>>`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `<<=`, `>>=`
//! - **Logical**: `!`
//!
//! ## Delimiters
//!
//! `()`, `[]`, `{}`, `,`, `;`, `.`
//!
//! # Line Numbers
//!
//! `\n`, `\r\n` and a lone `\r` each end one line. Lines are 1-based and a
//! token reports the line it starts on, even when it spans several.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;

mod edge_cases;

use std::sync::OnceLock;

// Re-export main types for convenience
pub use config::KeywordConfig;
pub use cursor::Cursor;
pub use error::{KeywordTableError, KeywordTableResult};
pub use keywords::{find_keyword, KeywordTable, JASS_KEYWORDS};
pub use lexer::{integer_literal_len, real_literal_len, Lexer};
pub use token::{Token, TokenKind};

// Independent lexers may run on separate threads over one shared table.
static_assertions::assert_impl_all!(Lexer: Send, Sync);
static_assertions::assert_impl_all!(Token: Send, Sync, Copy);
static_assertions::assert_impl_all!(KeywordTable: Send, Sync);

/// Tokenizes `source` with a caller-supplied keyword table.
///
/// `keywords` must be sorted by byte value and index-aligned with `kinds`.
/// See [`Lexer::tokenize`].
pub fn tokenize<K: AsRef<str>>(
    source: &str,
    keywords: &[K],
    kinds: &[TokenKind],
) -> Vec<Token> {
    let mut lexer = Lexer::new();
    lexer.tokenize(source, keywords, kinds);
    lexer.into_tokens()
}

/// Tokenizes `source` with the built-in JASS + vJass keyword table.
pub fn tokenize_jass(source: &str) -> Vec<Token> {
    static TABLE: OnceLock<KeywordTable> = OnceLock::new();
    let table = TABLE.get_or_init(KeywordTable::jass);
    tokenize(source, table.words(), table.kinds())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize_jass(source)
            .iter()
            .map(Token::kind)
            .filter(|&kind| kind != TokenKind::Newline)
            .collect()
    }

    fn texts<'a>(source: &'a str, kind: TokenKind) -> Vec<&'a str> {
        tokenize_jass(source)
            .iter()
            .filter(|t| t.kind() == kind)
            .map(|t| t.text(source))
            .collect()
    }

    #[test]
    fn test_jass_function() {
        let source = r#"
function Trig_Init takes nothing returns nothing
    local integer i = 0
    loop
        exitwhen i >= 10
        call BJDebugMsg("tick " + I2S(i))
        set i = i + 1
    endloop
endfunction
"#;
        let kinds = kinds(source);
        assert_eq!(kinds[0], TokenKind::Function);
        assert!(kinds.contains(&TokenKind::Local));
        assert!(kinds.contains(&TokenKind::Loop));
        assert!(kinds.contains(&TokenKind::ExitWhen));
        assert!(kinds.contains(&TokenKind::GreaterEqual));
        assert!(kinds.contains(&TokenKind::EndLoop));
        assert_eq!(kinds.last(), Some(&TokenKind::EndFunction));

        assert_eq!(texts(source, TokenKind::String), ["tick "]);
        assert_eq!(
            texts(source, TokenKind::Identifier),
            [
                "Trig_Init",
                "nothing",
                "nothing",
                "integer",
                "i",
                "i",
                "BJDebugMsg",
                "I2S",
                "i",
                "i",
                "i",
            ]
        );
    }

    #[test]
    fn test_jass_globals() {
        let source = "globals\n    constant real PI = 3.14159\n    unit array heroes\nendglobals\n";
        assert_eq!(
            kinds(source),
            [
                TokenKind::Globals,
                TokenKind::Constant,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Real,
                TokenKind::Identifier,
                TokenKind::Array,
                TokenKind::Identifier,
                TokenKind::EndGlobals,
            ]
        );
        assert_eq!(texts(source, TokenKind::Real), ["3.14159"]);
    }

    #[test]
    fn test_vjass_library() {
        let source = r#"
library Heroes initializer Init requires Table
    /* registry of /* nested */ heroes */
    struct Hero extends array
        static method create takes nothing returns thistype
            return thistype.allocate()
        endmethod
    endstruct

    //! textmacro HERO takes NAME
    private function $NAME$_Init takes nothing returns nothing
    endfunction
    //! endtextmacro
endlibrary
"#;
        let kinds = kinds(source);
        assert_eq!(kinds[0], TokenKind::Library);
        assert!(kinds.contains(&TokenKind::Initializer));
        assert!(kinds.contains(&TokenKind::Requires));
        assert!(kinds.contains(&TokenKind::Struct));
        assert!(kinds.contains(&TokenKind::Extends));
        assert!(kinds.contains(&TokenKind::Static));
        assert!(kinds.contains(&TokenKind::Method));
        assert!(kinds.contains(&TokenKind::ThisType));
        assert!(kinds.contains(&TokenKind::Dot));
        assert!(kinds.contains(&TokenKind::EndMethod));
        assert!(kinds.contains(&TokenKind::EndStruct));
        assert!(kinds.contains(&TokenKind::Private));
        assert_eq!(kinds.last(), Some(&TokenKind::EndLibrary));

        assert_eq!(
            texts(source, TokenKind::BlockComment),
            [" registry of /* nested */ heroes "]
        );
        assert_eq!(
            texts(source, TokenKind::Preprocessor),
            [" textmacro HERO takes NAME", " endtextmacro"]
        );
        assert_eq!(texts(source, TokenKind::TextMacroArg), ["NAME"]);
    }

    #[test]
    fn test_static_if_directives() {
        let source = "#if DEBUG_MODE\ncall Log(1)\n#else\n#endif";
        let kinds = kinds(source);
        assert_eq!(kinds[0], TokenKind::HashIf);
        assert!(kinds.contains(&TokenKind::HashElse));
        assert_eq!(kinds.last(), Some(&TokenKind::HashEndIf));
    }

    #[test]
    fn test_rawcode_in_call() {
        let source = "call CreateUnit(p, 'hfoo', 0., .0, 270)";
        assert_eq!(texts(source, TokenKind::Rawcode), ["hfoo"]);
        assert_eq!(texts(source, TokenKind::Real), ["0.", ".0"]);
        assert_eq!(texts(source, TokenKind::Int), ["270"]);
    }

    #[test]
    fn test_free_tokenize_matches_lexer() {
        let source = "set x = y";
        let table = KeywordTable::jass();
        let mut lexer = Lexer::new();
        let expected = lexer.tokenize_with(source, &table).to_vec();
        assert_eq!(tokenize(source, table.words(), table.kinds()), expected);
        assert_eq!(tokenize_jass(source), expected);
    }

    #[test]
    fn test_tokens_serialize() {
        let tokens = tokenize_jass("set x = 1");
        let json = serde_json::to_string(&tokens).unwrap();
        let back: Vec<Token> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
        assert!(json.starts_with(r#"[{"kind":"Set","start":0,"line":1"#));
    }
}
