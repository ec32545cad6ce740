use common_enums::ResultCategory;
use common_utils::crypto;
use hyperswitch_masking::Secret;

use crate::payment_method_data::PaymentMethodDetails;

/// The processor's reply to an [`crate::apm_request::ApmRequest`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApmResponse {
    pub timestamp: Option<String>,
    pub merchant_id: Option<String>,
    pub account: Option<String>,
    pub order_id: Option<String>,
    pub result: Option<String>,
    pub message: Option<String>,
    /// Processor reference for the transaction (`pasref`).
    pub payments_reference: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_details: Option<PaymentMethodDetails>,
    pub hash: Option<String>,
}

impl ApmResponse {
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_payments_reference(mut self, payments_reference: impl Into<String>) -> Self {
        self.payments_reference = Some(payments_reference.into());
        self
    }

    pub fn with_payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = Some(payment_method.into());
        self
    }

    pub fn with_payment_method_details(
        mut self,
        payment_method_details: PaymentMethodDetails,
    ) -> Self {
        self.payment_method_details = Some(payment_method_details);
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Sets `hash` the way the processor signs its responses.
    pub fn generate_hash(mut self, secret: &Secret<String>) -> Self {
        self.hash = Some(self.compute_hash(secret));
        self
    }

    /// Hash over `timestamp.merchantid.orderid.result.message.pasref.paymentmethod`.
    pub fn compute_hash(&self, secret: &Secret<String>) -> String {
        crypto::compute_hash(
            [
                self.timestamp.as_deref(),
                self.merchant_id.as_deref(),
                self.order_id.as_deref(),
                self.result.as_deref(),
                self.message.as_deref(),
                self.payments_reference.as_deref(),
                self.payment_method.as_deref(),
            ],
            secret,
        )
    }

    /// A mismatch is an expected outcome and reported as `false`; a response without a
    /// hash never validates.
    pub fn is_hash_valid(&self, secret: &Secret<String>) -> bool {
        let Some(received) = self.hash.as_deref() else {
            return false;
        };
        crypto::hashes_match(&self.compute_hash(secret), received)
    }

    pub fn result_category(&self) -> ResultCategory {
        self.result
            .as_deref()
            .map_or(ResultCategory::Unknown, ResultCategory::from_result_code)
    }

    pub fn is_success(&self) -> bool {
        self.result_category() == ResultCategory::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha1_hex(input: &str) -> String {
        hex::encode(ring::digest::digest(
            &ring::digest::SHA1_FOR_LEGACY_USE_ONLY,
            input.as_bytes(),
        ))
    }

    fn secret(value: &str) -> Secret<String> {
        Secret::new(value.to_string())
    }

    fn sample_response() -> ApmResponse {
        ApmResponse::default()
            .with_timestamp("20150131094559")
            .with_merchant_id("merch1")
            .with_account("internet")
            .with_order_id("ord1")
            .with_result("00")
            .with_message("Successful")
            .with_payments_reference("pasref1")
            .with_payment_method("sofort")
    }

    #[test]
    fn response_hash_uses_the_response_field_order() {
        let expected = sha1_hex(&format!(
            "{}.mysecret",
            sha1_hex("20150131094559.merch1.ord1.00.Successful.pasref1.sofort")
        ));
        assert_eq!(sample_response().compute_hash(&secret("mysecret")), expected);
    }

    #[test]
    fn self_signed_response_validates() {
        let response = sample_response().generate_hash(&secret("mysecret"));
        assert!(response.is_hash_valid(&secret("mysecret")));
    }

    #[test]
    fn wrong_secret_fails_validation() {
        let response = sample_response().generate_hash(&secret("mysecret"));
        assert!(!response.is_hash_valid(&secret("othersecret")));
    }

    #[test]
    fn any_hashed_field_change_fails_validation() {
        let signed = sample_response().generate_hash(&secret("mysecret"));
        let tampered = [
            signed.clone().with_timestamp("20150131094600"),
            signed.clone().with_merchant_id("merch2"),
            signed.clone().with_order_id("ord2"),
            signed.clone().with_result("101"),
            signed.clone().with_message("Declined"),
            signed.clone().with_payments_reference("pasref2"),
            signed.clone().with_payment_method("paypal"),
        ];

        for response in tampered {
            assert!(!response.is_hash_valid(&secret("mysecret")));
        }
        assert!(signed
            .with_account("other")
            .is_hash_valid(&secret("mysecret")));
    }

    #[test]
    fn missing_hash_is_invalid() {
        assert!(!sample_response().is_hash_valid(&secret("mysecret")));
    }

    #[test]
    fn success_requires_result_zero_zero() {
        assert!(sample_response().is_success());
        assert!(!sample_response().with_result("101").is_success());
        assert!(!ApmResponse::default().is_success());
        assert_eq!(
            ApmResponse::default().result_category(),
            ResultCategory::Unknown
        );
    }
}
