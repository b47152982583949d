use thiserror::Error;

/// Error taxonomy of the service layer.
///
/// - `Domain`: the backend answered with `success: false`; the message is the
///   backend's own and is shown to the user verbatim.
/// - `Transport`: the request never produced a usable response (network
///   failure, or an HTTP error without an envelope body).
/// - `Payload`: the response parsed but violated the mapping contract
///   (missing required field, wrong type with no fallback rule).
///
/// Nothing is retried; every error is caught at the call site and converted
/// to a user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Domain(String),
    #[error("{0}")]
    Transport(String),
    #[error("respuesta inesperada del servidor: {0}")]
    Payload(String),
}

impl ApiError {
    pub(crate) fn payload(context: &str) -> Self {
        ApiError::Payload(context.to_string())
    }
}
