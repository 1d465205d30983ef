use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Writing a table to stdout failed
    #[error("Can't write output: {0}")]
    IoError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}
