use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse an id from String.
    ///
    /// Results in a 500 Internal Server Error with a generic message
    /// returned to the client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored whitelist status value is not one of the known states.
    ///
    /// Only possible through manual database edits. Results in a 500
    /// Internal Server Error with a generic message returned to the
    /// client.
    #[error("Unknown whitelist status '{0}' in database")]
    UnknownStoredStatus(String),

    /// A stored form document no longer parses as JSON.
    #[error("Corrupt form data for whitelist request {id}: {reason}")]
    CorruptFormData {
        /// Id of the affected request
        id: i32,
        /// The underlying parse failure
        reason: String,
    },
}
