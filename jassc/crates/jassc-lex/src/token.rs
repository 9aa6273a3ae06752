//! Token definitions for JASS and vJass.
//!
//! A [`Token`] is a small `Copy` record: the [`TokenKind`], the byte offset
//! its significant content starts at, the line it opens on, and a length
//! that is only meaningful for kinds whose text is not fixed by the kind
//! (see [`TokenKind::has_length`]). Source text is never copied into tokens;
//! use [`Token::text`] against the source it was lexed from.

use std::fmt;

use jassc_util::Span;
use serde::{Deserialize, Serialize};

/// Every lexical category the lexer can produce.
///
/// The variants are grouped the way the language grew: JASS literals and
/// keywords, the vJass additions, then operators and delimited regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    // ===== Literals =====
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// `0`, `017`, `0x1F`
    Int,
    /// `2.5`, `2.`, `.5`
    Real,
    /// `super`
    Super,
    /// `this`
    This,

    // ===== JASS keywords =====
    /// `function`
    Function,
    /// `endfunction`
    EndFunction,
    /// `globals`
    Globals,
    /// `endglobals`
    EndGlobals,
    /// `array`
    Array,
    /// `takes`
    Takes,
    /// `returns`
    Returns,
    /// `local`
    Local,
    /// `set`
    Set,
    /// `call`
    Call,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `elseif`
    ElseIf,
    /// `endif`
    EndIf,
    /// `loop`
    Loop,
    /// `exitwhen`
    ExitWhen,
    /// `endloop`
    EndLoop,
    /// `constant`
    Constant,
    /// `return`
    Return,
    /// `or`
    Or,
    /// `and`
    And,
    /// `not`, also produced for a lone `!`
    Not,
    /// `extends`
    Extends,
    /// `native`
    Native,
    /// `type`
    Type,

    // ===== vJass keywords =====
    /// `debug`
    Debug,
    /// `library`
    Library,
    /// `endlibrary`
    EndLibrary,
    /// `uses`
    Uses,
    /// `requires`
    Requires,
    /// `needs`
    Needs,
    /// `initializer`
    Initializer,
    /// `optional`
    Optional,
    /// `scope`
    Scope,
    /// `endscope`
    EndScope,
    /// `struct`
    Struct,
    /// `class`
    Class,
    /// `endstruct`
    EndStruct,
    /// `endclass`
    EndClass,
    /// `method`
    Method,
    /// `endmethod`
    EndMethod,
    /// `operator`
    Operator,
    /// `static`
    Static,
    /// `private`
    Private,
    /// `public`
    Public,
    /// `readonly`
    Readonly,
    /// `temporary`
    Temporary,
    /// `template`
    Template,
    /// `alias`
    Alias,
    /// `inline`
    Inline,
    /// `deprecated`
    Deprecated,
    /// `textmacro`
    TextMacro,
    /// `runtextmacro`
    RunTextMacro,
    /// `endtextmacro`
    EndTextMacro,
    /// `module`
    Module,
    /// `endmodule`
    EndModule,
    /// `external`
    External,
    /// `endexternal`
    EndExternal,
    /// `externalblock`
    ExternalBlock,
    /// `endexternalblock`
    EndExternalBlock,
    /// `interface`
    Interface,
    /// `endinterface`
    EndInterface,
    /// `defaults`
    Defaults,
    /// `stub`
    Stub,
    /// `sizeof`
    Sizeof,
    /// `static_assert`
    StaticAssert,
    /// `compiletime`
    Compiletime,
    /// `while`
    While,
    /// `endwhile`
    EndWhile,
    /// `break`
    Break,
    /// `for`
    For,
    /// `endfor`
    EndFor,
    /// `implement`
    Implement,
    /// `catch`
    Catch,
    /// `thistype`
    ThisType,
    /// `final`
    Final,
    /// `#if`
    HashIf,
    /// `#elseif`
    HashElseIf,
    /// `#else`
    HashElse,
    /// `#endif`
    HashEndIf,
    /// `auto`
    Auto,
    /// `override`
    Override,
    /// `mutable`
    Mutable,
    /// `endblock`
    EndBlock,
    /// `allocator`
    Allocator,
    /// `endallocator`
    EndAllocator,
    /// `using`
    Using,
    /// `hook`
    Hook,
    /// `before`
    Before,
    /// `after`
    After,
    /// `constructor`
    Constructor,
    /// `endconstructor`
    EndConstructor,
    /// `construct`
    Construct,
    /// `destructor`
    Destructor,
    /// `enddestructor`
    EndDestructor,
    /// `import`
    Import,
    /// `encrypted`
    Encrypted,
    /// `priority`
    Priority,
    /// `extendor`
    Extendor,
    /// `endextendor`
    EndExtendor,
    /// `concept`
    Concept,
    /// `endconcept`
    EndConcept,

    // ===== Operators and punctuation =====
    /// `\n`, `\r\n` or `\r`
    Newline,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `'abcd'`, body between the quotes
    Rawcode,
    /// `"text"`, body between the quotes
    String,
    /// `,`
    Comma,
    /// `%`
    Modulo,
    /// `>>`
    ShiftRight,
    /// `<<`
    ShiftLeft,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    ModuloAssign,
    /// `>>=`
    ShiftRightAssign,
    /// `<<=`
    ShiftLeftAssign,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `/* ... */`, body between the outermost delimiters
    BlockComment,
    /// `//! ...`, body up to the end of the line
    Preprocessor,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `$ARG$`, body between the dollars
    TextMacroArg,

    // ===== Catch-all =====
    /// Any run that did not fit another kind.
    Identifier,
}

impl TokenKind {
    /// Returns the fixed source spelling of this kind, if it has one.
    ///
    /// Literals other than the keyword literals, delimited regions,
    /// newlines and identifiers return `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use jassc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::EndFunction.spelling(), Some("endfunction"));
    /// assert_eq!(TokenKind::ShiftLeftAssign.spelling(), Some("<<="));
    /// assert_eq!(TokenKind::String.spelling(), None);
    /// ```
    pub const fn spelling(self) -> Option<&'static str> {
        use TokenKind::*;
        let text = match self {
            Null => "null",
            True => "true",
            False => "false",
            Super => "super",
            This => "this",
            Function => "function",
            EndFunction => "endfunction",
            Globals => "globals",
            EndGlobals => "endglobals",
            Array => "array",
            Takes => "takes",
            Returns => "returns",
            Local => "local",
            Set => "set",
            Call => "call",
            If => "if",
            Then => "then",
            Else => "else",
            ElseIf => "elseif",
            EndIf => "endif",
            Loop => "loop",
            ExitWhen => "exitwhen",
            EndLoop => "endloop",
            Constant => "constant",
            Return => "return",
            Or => "or",
            And => "and",
            Not => "not",
            Extends => "extends",
            Native => "native",
            Type => "type",
            Debug => "debug",
            Library => "library",
            EndLibrary => "endlibrary",
            Uses => "uses",
            Requires => "requires",
            Needs => "needs",
            Initializer => "initializer",
            Optional => "optional",
            Scope => "scope",
            EndScope => "endscope",
            Struct => "struct",
            Class => "class",
            EndStruct => "endstruct",
            EndClass => "endclass",
            Method => "method",
            EndMethod => "endmethod",
            Operator => "operator",
            Static => "static",
            Private => "private",
            Public => "public",
            Readonly => "readonly",
            Temporary => "temporary",
            Template => "template",
            Alias => "alias",
            Inline => "inline",
            Deprecated => "deprecated",
            TextMacro => "textmacro",
            RunTextMacro => "runtextmacro",
            EndTextMacro => "endtextmacro",
            Module => "module",
            EndModule => "endmodule",
            External => "external",
            EndExternal => "endexternal",
            ExternalBlock => "externalblock",
            EndExternalBlock => "endexternalblock",
            Interface => "interface",
            EndInterface => "endinterface",
            Defaults => "defaults",
            Stub => "stub",
            Sizeof => "sizeof",
            StaticAssert => "static_assert",
            Compiletime => "compiletime",
            While => "while",
            EndWhile => "endwhile",
            Break => "break",
            For => "for",
            EndFor => "endfor",
            Implement => "implement",
            Catch => "catch",
            ThisType => "thistype",
            Final => "final",
            HashIf => "#if",
            HashElseIf => "#elseif",
            HashElse => "#else",
            HashEndIf => "#endif",
            Auto => "auto",
            Override => "override",
            Mutable => "mutable",
            EndBlock => "endblock",
            Allocator => "allocator",
            EndAllocator => "endallocator",
            Using => "using",
            Hook => "hook",
            Before => "before",
            After => "after",
            Constructor => "constructor",
            EndConstructor => "endconstructor",
            Construct => "construct",
            Destructor => "destructor",
            EndDestructor => "enddestructor",
            Import => "import",
            Encrypted => "encrypted",
            Priority => "priority",
            Extendor => "extendor",
            EndExtendor => "endextendor",
            Concept => "concept",
            EndConcept => "endconcept",
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            Assign => "=",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Comma => ",",
            Modulo => "%",
            ShiftRight => ">>",
            ShiftLeft => "<<",
            PlusAssign => "+=",
            MinusAssign => "-=",
            MultiplyAssign => "*=",
            DivideAssign => "/=",
            ModuloAssign => "%=",
            ShiftRightAssign => ">>=",
            ShiftLeftAssign => "<<=",
            Increment => "++",
            Decrement => "--",
            LBrace => "{",
            RBrace => "}",
            Semicolon => ";",
            Dot => ".",
            Int | Real | Newline | Rawcode | String | BlockComment | Preprocessor
            | TextMacroArg | Identifier => return None,
        };
        Some(text)
    }

    /// Returns true for kinds whose token carries an explicit length.
    pub const fn has_length(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Real
                | TokenKind::Rawcode
                | TokenKind::String
                | TokenKind::BlockComment
                | TokenKind::Preprocessor
                | TokenKind::TextMacroArg
                | TokenKind::Identifier
        )
    }

    /// Returns true for literal kinds, including the keyword literals
    /// `null`, `true`, `false`, `super` and `this`.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Null
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Int
                | TokenKind::Real
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::Rawcode
                | TokenKind::String
        )
    }

    /// Returns true for reserved words, including the `#` directives.
    ///
    /// The keyword literals (`null`, `true`, ...) count as literals, not
    /// keywords.
    pub const fn is_keyword(self) -> bool {
        let id = self as u16;
        id >= TokenKind::Function as u16 && id <= TokenKind::EndConcept as u16
    }

    /// Returns true for tokens a parser usually skips: newlines and block
    /// comments.
    ///
    /// Newlines are statement terminators in JASS, so whether they are
    /// really trivia is the parser's call.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::BlockComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.spelling() {
            return write!(f, "`{}`", text);
        }
        let name = match self {
            TokenKind::Int => "integer literal",
            TokenKind::Real => "real literal",
            TokenKind::Newline => "newline",
            TokenKind::Rawcode => "rawcode literal",
            TokenKind::String => "string literal",
            TokenKind::BlockComment => "block comment",
            TokenKind::Preprocessor => "preprocessor directive",
            TokenKind::TextMacroArg => "text macro argument",
            _ => "identifier",
        };
        f.write_str(name)
    }
}

/// A classified, positioned span of source text.
///
/// Tokens are immutable once built; the lexer is responsible for keeping
/// `start + length` inside the source.
///
/// # Example
///
/// ```
/// use jassc_lex::{Token, TokenKind};
///
/// let source = "call Foo()";
/// let ident = Token::with_length(TokenKind::Identifier, 5, 1, 3);
/// assert_eq!(ident.text(source), "Foo");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    start: usize,
    line: u32,
    length: usize,
}

impl Token {
    /// Creates a token whose length is implied by its kind.
    #[inline]
    pub const fn new(kind: TokenKind, start: usize, line: u32) -> Self {
        Self::with_length(kind, start, line, 0)
    }

    /// Creates a token with an explicit length.
    #[inline]
    pub const fn with_length(kind: TokenKind, start: usize, line: u32, length: usize) -> Self {
        Self {
            kind,
            start,
            line,
            length,
        }
    }

    /// The token's kind.
    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset of the token's significant content.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// 1-based line the token opens on.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Explicit length; zero for kinds without one.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of source bytes covered by the token.
    ///
    /// For kinds with an explicit length, and for keywords recorded with
    /// one because a custom table spells them differently, that length is
    /// returned. Other kinds are measured from their spelling, except for
    /// the two cases where one kind has several spellings: a newline is two
    /// bytes when it is `\r\n`, and `not` is one byte when written as `!`.
    pub fn extent(&self, source: &str) -> usize {
        if self.kind.has_length() || self.length > 0 {
            return self.length;
        }
        let bytes = source.as_bytes();
        match self.kind {
            TokenKind::Newline => match bytes.get(self.start..self.start + 2) {
                Some(b"\r\n") => 2,
                _ => 1,
            },
            TokenKind::Not if bytes.get(self.start) == Some(&b'!') => 1,
            kind => kind.spelling().map_or(0, str::len),
        }
    }

    /// Byte offset just past the token's content.
    #[inline]
    pub fn end(&self, source: &str) -> usize {
        self.start + self.extent(source)
    }

    /// The token's location as a [`Span`].
    pub fn span(&self, source: &str) -> Span {
        Span::new(self.start, self.end(source), self.line)
    }

    /// The source text covered by the token.
    ///
    /// Returns an empty string if the token does not describe a valid range
    /// of `source`, which only happens when it is paired with the wrong
    /// source.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span(source).snippet(source).unwrap_or("")
    }
}
