#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Invalid merchant configuration: {0}")]
    InvalidMerchant(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Invalid log filtering directive: {0}")]
    InvalidDirective(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install the global subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApmClientError {
    #[error("Failed to encode the request")]
    RequestEncodingFailed,
    #[error("Failed to decode the response")]
    ResponseDecodingFailed,
    #[error("Response hash does not match the message content")]
    InvalidResponseHash,
    #[error("Processor returned error {code}: {message}")]
    ErrorResponse { code: String, message: String },
    #[error("Merchant id or shared secret is not configured")]
    MissingMerchantConfiguration,
}
