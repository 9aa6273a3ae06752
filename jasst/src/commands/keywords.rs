//! The `keywords` command: prints the active keyword table.

use std::io::Write;

use jassc_lex::KeywordTable;

use crate::error::Result;

/// Writes one `spelling<TAB>Kind` line per keyword, in table order.
pub fn run_keywords(table: &KeywordTable, out: &mut impl Write) -> Result<()> {
    for (word, kind) in table.iter() {
        writeln!(out, "{}\t{:?}", word, kind)?;
    }
    Ok(())
}
