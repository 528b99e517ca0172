use thiserror::Error;

/// Errors that can be returned by this crate.
///
/// Construction-time errors (`InvalidRowCount`, `InvalidCell`, `RackTooLarge`, ...)
/// are meant to be turned into 400-class responses by an embedding HTTP layer;
/// `best_move` itself is total over any validly-constructed `Board`/`Rack` and
/// never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// The wordlist file could not be read.
    #[error("wordlist file \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// The wordlist file was empty.
    #[error("wordlist file \"{0}\" contains no words")]
    EmptyWordlist(String),

    /// A board must have exactly 15 rows.
    #[error("invalid number of rows: {0} (expected 15)")]
    InvalidRowCount(usize),

    /// Every board row must have exactly 15 columns.
    #[error("invalid row length: {0} (expected 15)")]
    InvalidRowLength(usize),

    /// A board cell was neither a space nor an uppercase A-Z letter.
    #[error("invalid board cell '{0}' at row {1}, col {2}")]
    InvalidCell(char, usize, usize),

    /// A rack held more than 7 tiles.
    #[error("rack has {0} tiles (maximum 7)")]
    RackTooLarge(usize),

    /// A rack entry was neither an uppercase A-Z letter nor '?'.
    #[error("invalid rack tile '{0}'")]
    InvalidRackTile(char),

    /// A premium grid bonus token could not be parsed.
    #[error("invalid premium cell: \"{0}\"")]
    PremiumParseError(String),
}
