//! Crate error type
//!
//! Only the presentation boundary can fail. Simulation code is total.

use std::error::Error as _;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The display (raw terminal, alternate screen) could not be initialized
    #[error("error initializing display")]
    DisplayInit(#[source] io::Error),
    /// The text layer could not be initialized
    #[error("error initializing text rendering: {0}")]
    TextInit(String),
    /// Drawing or event polling failed while the game was running
    #[error("terminal I/O failed")]
    Render(#[from] io::Error),
}

impl Error {
    /// One line with the whole source chain, for the operator
    pub fn report(&self) -> String {
        let mut line = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            line.push_str(": ");
            line.push_str(&cause.to_string());
            source = cause.source();
        }
        line
    }
}

pub type Result<T> = std::result::Result<T, Error>;
