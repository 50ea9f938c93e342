use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned to the client.
    #[error("Unknown value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Table and column the value was read from
        column: &'static str,
        /// The offending value
        value: String,
    },

    /// A row that was just written could not be read back.
    #[error("{0} missing after write")]
    MissingAfterWrite(String),

    /// A row pointed at by a foreign key could not be found.
    #[error("{0} is referenced but missing")]
    MissingReference(String),

    /// The HTTP server stopped with an I/O error.
    #[error("Server error: {0}")]
    Server(String),
}
