use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A persisted enum column holds a value no variant maps to.
    ///
    /// Indicates the row was written by something other than this service or
    /// the enum lost a variant.
    #[error("Unknown {kind} value '{value}'")]
    UnknownEnumValue {
        /// Name of the enum being parsed
        kind: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// A persisted operating-days list contains an unknown weekday name.
    #[error("Unknown weekday '{0}' in operating days")]
    UnknownWeekday(String),
}
