//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures while moving between XML text and typed messages.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ParsingError {
    #[error("Input is not well-formed XML")]
    XmlParseFailure,
    #[error("Failed to encode message as XML")]
    XmlEncodeFailure,
    #[error("Expected root element <{expected}>, found <{found}>")]
    UnexpectedRootElement {
        expected: &'static str,
        found: String,
    },
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
}
