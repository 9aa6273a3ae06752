//! Keyword recognition.
//!
//! Keywords are looked up with a narrowing search over a byte-wise sorted
//! table: for every position of the candidate word the range of keywords
//! that still agree with the input is shrunk, so the work done is
//! proportional to the length of the word, not to the size of the table.
//! A range that shrinks to one entry is only a hint; the final answer always
//! comes from a full comparison against the whole word, so `b` never
//! matches `bb`.

use std::ops::Range;

use crate::chars::{is_word_byte, next_token_start};
use crate::error::{KeywordTableError, KeywordTableResult};
use crate::token::TokenKind;

/// Every JASS and vJass keyword recognised by the built-in table, sorted by
/// byte value.
///
/// The `#if` family is missing on purpose: `#` never starts an alphabetic
/// run, so the dispatch loop matches those four itself.
pub const JASS_KEYWORDS: &[(&str, TokenKind)] = &[
    ("after", TokenKind::After),
    ("alias", TokenKind::Alias),
    ("allocator", TokenKind::Allocator),
    ("and", TokenKind::And),
    ("array", TokenKind::Array),
    ("auto", TokenKind::Auto),
    ("before", TokenKind::Before),
    ("break", TokenKind::Break),
    ("call", TokenKind::Call),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("compiletime", TokenKind::Compiletime),
    ("concept", TokenKind::Concept),
    ("constant", TokenKind::Constant),
    ("construct", TokenKind::Construct),
    ("constructor", TokenKind::Constructor),
    ("debug", TokenKind::Debug),
    ("defaults", TokenKind::Defaults),
    ("deprecated", TokenKind::Deprecated),
    ("destructor", TokenKind::Destructor),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::ElseIf),
    ("encrypted", TokenKind::Encrypted),
    ("endallocator", TokenKind::EndAllocator),
    ("endblock", TokenKind::EndBlock),
    ("endclass", TokenKind::EndClass),
    ("endconcept", TokenKind::EndConcept),
    ("endconstructor", TokenKind::EndConstructor),
    ("enddestructor", TokenKind::EndDestructor),
    ("endextendor", TokenKind::EndExtendor),
    ("endexternal", TokenKind::EndExternal),
    ("endexternalblock", TokenKind::EndExternalBlock),
    ("endfor", TokenKind::EndFor),
    ("endfunction", TokenKind::EndFunction),
    ("endglobals", TokenKind::EndGlobals),
    ("endif", TokenKind::EndIf),
    ("endinterface", TokenKind::EndInterface),
    ("endlibrary", TokenKind::EndLibrary),
    ("endloop", TokenKind::EndLoop),
    ("endmethod", TokenKind::EndMethod),
    ("endmodule", TokenKind::EndModule),
    ("endscope", TokenKind::EndScope),
    ("endstruct", TokenKind::EndStruct),
    ("endtextmacro", TokenKind::EndTextMacro),
    ("endwhile", TokenKind::EndWhile),
    ("exitwhen", TokenKind::ExitWhen),
    ("extendor", TokenKind::Extendor),
    ("extends", TokenKind::Extends),
    ("external", TokenKind::External),
    ("externalblock", TokenKind::ExternalBlock),
    ("false", TokenKind::False),
    ("final", TokenKind::Final),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("globals", TokenKind::Globals),
    ("hook", TokenKind::Hook),
    ("if", TokenKind::If),
    ("implement", TokenKind::Implement),
    ("import", TokenKind::Import),
    ("initializer", TokenKind::Initializer),
    ("inline", TokenKind::Inline),
    ("interface", TokenKind::Interface),
    ("library", TokenKind::Library),
    ("local", TokenKind::Local),
    ("loop", TokenKind::Loop),
    ("method", TokenKind::Method),
    ("module", TokenKind::Module),
    ("mutable", TokenKind::Mutable),
    ("native", TokenKind::Native),
    ("needs", TokenKind::Needs),
    ("not", TokenKind::Not),
    ("null", TokenKind::Null),
    ("operator", TokenKind::Operator),
    ("optional", TokenKind::Optional),
    ("or", TokenKind::Or),
    ("override", TokenKind::Override),
    ("priority", TokenKind::Priority),
    ("private", TokenKind::Private),
    ("public", TokenKind::Public),
    ("readonly", TokenKind::Readonly),
    ("requires", TokenKind::Requires),
    ("return", TokenKind::Return),
    ("returns", TokenKind::Returns),
    ("runtextmacro", TokenKind::RunTextMacro),
    ("scope", TokenKind::Scope),
    ("set", TokenKind::Set),
    ("sizeof", TokenKind::Sizeof),
    ("static", TokenKind::Static),
    ("static_assert", TokenKind::StaticAssert),
    ("struct", TokenKind::Struct),
    ("stub", TokenKind::Stub),
    ("super", TokenKind::Super),
    ("takes", TokenKind::Takes),
    ("template", TokenKind::Template),
    ("temporary", TokenKind::Temporary),
    ("textmacro", TokenKind::TextMacro),
    ("then", TokenKind::Then),
    ("this", TokenKind::This),
    ("thistype", TokenKind::ThisType),
    ("true", TokenKind::True),
    ("type", TokenKind::Type),
    ("uses", TokenKind::Uses),
    ("using", TokenKind::Using),
    ("while", TokenKind::While),
];

/// Finds the keyword equal to the word starting at `start`.
///
/// The word runs from `start` up to the first byte outside `[0-9A-Za-z_]`.
/// `keywords` must be sorted by byte value; an unsorted table silently
/// produces wrong answers.
///
/// Returns the index of the matching keyword, or `None` if the word is not
/// exactly one of them.
///
/// # Example
///
/// ```
/// use jassc_lex::keywords::find_keyword;
///
/// let table = ["if", "in"];
/// assert_eq!(find_keyword(b"if x", 0, &table), Some(0));
/// assert_eq!(find_keyword(b"iffy", 0, &table), None);
/// assert_eq!(find_keyword(b"i", 0, &table), None);
/// ```
pub fn find_keyword<K: AsRef<str>>(source: &[u8], start: usize, keywords: &[K]) -> Option<usize> {
    let end = next_token_start(source, start);
    let word = source.get(start..end)?;
    let is_exact = |index: usize| keywords[index].as_ref().as_bytes() == word;

    let mut range = 0..keywords.len();
    for (offset, &byte) in word.iter().enumerate() {
        range = narrow(range, byte, offset, keywords)?;
        if range.len() == 1 {
            return is_exact(range.start).then_some(range.start);
        }
    }

    // The word ran out first. Shorter keywords sort first, so if any
    // candidate equals the word it is the first one.
    (!range.is_empty() && is_exact(range.start)).then_some(range.start)
}

/// Shrinks `range` to the keywords whose byte at `offset` equals `byte`.
///
/// Every keyword in `range` shares the same first `offset` bytes, so those
/// too short to have a byte at `offset` sort first and the rest are ordered
/// by that byte. Returns `None` as soon as no keyword can match.
fn narrow<K: AsRef<str>>(
    range: Range<usize>,
    byte: u8,
    offset: usize,
    keywords: &[K],
) -> Option<Range<usize>> {
    let byte_at = |index: usize| keywords[index].as_ref().as_bytes().get(offset).copied();

    let mut first = None;
    for index in range.clone() {
        let Some(candidate) = byte_at(index) else {
            continue;
        };
        if byte < candidate {
            return None;
        }
        if byte == candidate {
            first = Some(index);
            break;
        }
    }

    let first = first?;
    let end = (first + 1..range.end)
        .find(|&index| byte_at(index) != Some(byte))
        .unwrap_or(range.end);
    Some(first..end)
}

/// A sorted keyword table paired with the kinds its spellings produce.
///
/// `KeywordTable` is the validated form of the two parallel slices the
/// lexer takes. It guarantees the ordering the narrowing search relies on.
///
/// # Example
///
/// ```
/// use jassc_lex::{KeywordTable, TokenKind};
///
/// let table = KeywordTable::jass();
/// assert_eq!(table.lookup("endglobals"), Some(TokenKind::EndGlobals));
/// assert_eq!(table.lookup("endglobal"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordTable {
    words: Vec<String>,
    kinds: Vec<TokenKind>,
}

impl KeywordTable {
    /// Builds a table, checking that both lists line up and that the
    /// spellings are valid words in strictly increasing byte order.
    pub fn new(words: Vec<String>, kinds: Vec<TokenKind>) -> KeywordTableResult<Self> {
        if words.len() != kinds.len() {
            return Err(KeywordTableError::LengthMismatch {
                words: words.len(),
                kinds: kinds.len(),
            });
        }

        for (index, word) in words.iter().enumerate() {
            let bytes = word.as_bytes();
            match bytes.first() {
                None => return Err(KeywordTableError::EmptyKeyword { index }),
                Some(b) if !b.is_ascii_alphabetic() => {
                    return Err(KeywordTableError::NotAlphabetic {
                        keyword: word.clone(),
                    })
                },
                Some(_) => {},
            }
            if !bytes.iter().all(|&b| is_word_byte(b)) {
                return Err(KeywordTableError::InvalidByte {
                    keyword: word.clone(),
                });
            }
            if index > 0 && words[index - 1].as_bytes() >= bytes {
                return Err(KeywordTableError::Unsorted {
                    index,
                    previous: words[index - 1].clone(),
                    next: word.clone(),
                });
            }
        }

        Ok(Self { words, kinds })
    }

    /// Builds a table from `(spelling, kind)` pairs in any order.
    ///
    /// The pairs are sorted before validation; duplicate spellings are still
    /// rejected.
    pub fn from_pairs<I, S>(pairs: I) -> KeywordTableResult<Self>
    where
        I: IntoIterator<Item = (S, TokenKind)>,
        S: Into<String>,
    {
        let mut pairs: Vec<(String, TokenKind)> =
            pairs.into_iter().map(|(word, kind)| (word.into(), kind)).collect();
        pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        let (words, kinds) = pairs.into_iter().unzip();
        Self::new(words, kinds)
    }

    /// The built-in JASS + vJass keyword table.
    pub fn jass() -> Self {
        Self {
            words: JASS_KEYWORDS.iter().map(|(word, _)| (*word).to_string()).collect(),
            kinds: JASS_KEYWORDS.iter().map(|&(_, kind)| kind).collect(),
        }
    }

    /// The sorted spellings.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The kinds, index-aligned with [`KeywordTable::words`].
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    /// Number of keywords in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up the kind of a whole word.
    ///
    /// Returns `None` if `word` is not exactly a keyword, including when it
    /// contains bytes that would end a word run.
    pub fn lookup(&self, word: &str) -> Option<TokenKind> {
        if next_token_start(word.as_bytes(), 0) != word.len() {
            return None;
        }
        find_keyword(word.as_bytes(), 0, &self.words).map(|index| self.kinds[index])
    }

    /// Iterates over `(spelling, kind)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> + '_ {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.kinds.iter().copied())
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::jass()
    }
}
