use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A user row holds a role outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("User {user_id} has unknown stored role '{value}'")]
    UnknownStoredRole {
        /// Id of the user whose row is malformed
        user_id: i32,
        /// The stored role text
        value: String,
    },

    /// A course list column does not hold the expected JSON array.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Course {course_id} has malformed stored {field}: {source}")]
    MalformedStoredList {
        /// Id of the course whose row is malformed
        course_id: i32,
        /// Column name
        field: &'static str,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
