use serde::{Deserialize, Serialize};

/// The kind of alternative payment method transaction carried in the `type`
/// attribute of a request.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ApmType {
    #[default]
    PaymentSet,
    PaymentCredit,
}

/// Settlement behaviour requested for a transaction.
///
/// On the wire this is the `flag` attribute of `<autosettle/>`: `1`, `0` or `MULTI`.
/// Parsing also accepts the short `M` form and `true`/`false`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum AutoSettleFlag {
    #[default]
    #[serde(rename = "1")]
    #[strum(to_string = "1", serialize = "true")]
    On,
    #[serde(rename = "0")]
    #[strum(to_string = "0", serialize = "false")]
    Off,
    #[serde(rename = "MULTI")]
    #[strum(to_string = "MULTI", serialize = "M")]
    Multi,
}

/// Coarse classification of the processor's `result` code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResultCategory {
    /// `00`
    Success,
    /// `1xx`
    Declined,
    /// `2xx`
    BankError,
    /// `3xx`
    ProcessorError,
    /// `5xx`
    InvalidRequest,
    Unknown,
}

impl ResultCategory {
    pub const SUCCESS_CODE: &'static str = "00";

    pub fn from_result_code(code: &str) -> Self {
        if code == Self::SUCCESS_CODE {
            return Self::Success;
        }
        match code.chars().next() {
            Some('1') => Self::Declined,
            Some('2') => Self::BankError,
            Some('3') => Self::ProcessorError,
            Some('5') => Self::InvalidRequest,
            _ => Self::Unknown,
        }
    }

    /// Basic responses are error replies produced before the transaction reached the
    /// payment scheme. They carry only a result and message and are never hashed.
    pub fn is_basic_response(self) -> bool {
        matches!(self, Self::ProcessorError | Self::InvalidRequest)
    }
}
