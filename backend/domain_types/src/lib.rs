pub mod apm_request;
pub mod apm_response;
pub mod payment_method_data;

pub use apm_request::ApmRequest;
pub use apm_response::ApmResponse;
pub use payment_method_data::{
    Amount, AutoSettle, BankAccount, Comment, CommentCollection, PaymentMethodDetails,
};
