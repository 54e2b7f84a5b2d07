use std::ffi::OsString;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("argument is not valid UTF-8: {0:?}")]
    NonUnicode(OsString),

    #[error("{0}")]
    BadQuote(String),
}

pub type Result<T> = std::result::Result<T, Error>;
