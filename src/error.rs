use thiserror::Error;

/// Terminal parse failure. `Lex` means no token rule matched the input;
/// `Syntax` means the token sequence does not fit the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized character `{character}` at position {position}")]
    Lex { position: usize, character: char },

    #[error("expected {expected}, found {found} at position {position}")]
    Syntax {
        position: usize,
        expected: String,
        found: String,
    },
}
