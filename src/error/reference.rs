use thiserror::Error;

/// Field validation errors for airlines, aircraft and stations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// A required text field is empty or whitespace.
    #[error("{0} is required")]
    Missing(&'static str),

    /// A text field is shorter or longer than allowed, counted in characters.
    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    /// A numeric field is outside its allowed range.
    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: String },
}
