use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested gap sequence name is not one of `shell`, `knuth` or `sedgewick`.
    #[error("unknown gap sequence `{0}`, use 'shell', 'knuth', or 'sedgewick'")]
    InvalidArgument(String),
    #[error("invalid integer `{token}` on line {line}")]
    Parse { line: usize, token: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}
