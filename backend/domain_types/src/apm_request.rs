use std::str::FromStr;

use common_enums::ApmType;
use common_utils::{crypto, generators, types::MinorUnit};
use hyperswitch_masking::Secret;

use crate::payment_method_data::{
    Amount, AutoSettle, Comment, CommentCollection, PaymentMethodDetails,
};

/// An alternative payment method request (`payment-set` or `payment-credit`).
///
/// ```ignore
/// let request = ApmRequest::default()
///     .with_merchant_id("merch1")
///     .with_account("internet")
///     .with_amount(1001)
///     .with_currency("EUR")
///     .with_payment_method("sofort")
///     .generate_defaults(&secret);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApmRequest {
    /// `yyyyMMddHHmmss`
    pub timestamp: Option<String>,
    pub apm_type: ApmType,
    pub merchant_id: Option<String>,
    /// Sub-account used for the transaction; the processor falls back to its default.
    pub account: Option<String>,
    pub order_id: Option<String>,
    pub payment_method: Option<String>,
    pub amount: Option<Amount>,
    /// `sha1hash` over timestamp, merchant id, order id, amount, currency and payment method.
    pub hash: Option<String>,
    pub comments: Option<CommentCollection>,
    pub payment_method_details: Option<PaymentMethodDetails>,
    pub auto_settle: Option<AutoSettle>,
}

impl ApmRequest {
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_apm_type(mut self, apm_type: ApmType) -> Self {
        self.apm_type = apm_type;
        self
    }

    /// Unknown type strings leave the current type in place.
    pub fn with_type(mut self, apm_type: &str) -> Self {
        match ApmType::from_str(apm_type) {
            Ok(apm_type) => self.apm_type = apm_type,
            Err(_) => tracing::warn!(apm_type, "Ignoring unknown APM request type"),
        }
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

    pub fn with_payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = Some(payment_method.into());
        self
    }

    /// Sets the amount value, creating the [`Amount`] if there is none yet.
    pub fn with_amount(mut self, value: impl Into<MinorUnit>) -> Self {
        self.amount = Some(self.amount.unwrap_or_default().with_value(value));
        self
    }

    /// Sets the currency, creating the [`Amount`] if there is none yet.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.amount = Some(self.amount.unwrap_or_default().with_currency(currency));
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Appends a comment with the next sequential id. The processor accepts two.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments
            .get_or_insert_with(CommentCollection::new)
            .add(Comment::new(0, comment));
        self
    }

    pub fn with_comments(mut self, comments: CommentCollection) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_payment_method_details(
        mut self,
        payment_method_details: PaymentMethodDetails,
    ) -> Self {
        self.payment_method_details = Some(payment_method_details);
        self
    }

    pub fn with_auto_settle(mut self, auto_settle: AutoSettle) -> Self {
        self.auto_settle = Some(auto_settle);
        self
    }

    /// Fills a missing timestamp and order id, then recomputes the hash from the
    /// current field values.
    pub fn generate_defaults(mut self, secret: &Secret<String>) -> Self {
        if self.timestamp.is_none() {
            self.timestamp = Some(generators::generate_timestamp());
        }
        if self.order_id.is_none() {
            self.order_id = Some(generators::generate_order_id());
        }
        self.generate_hash(secret)
    }

    pub fn generate_hash(mut self, secret: &Secret<String>) -> Self {
        self.hash = Some(self.compute_hash(secret));
        self
    }

    /// Hash over `timestamp.merchantid.orderid.amount.currency.paymentmethod`.
    pub fn compute_hash(&self, secret: &Secret<String>) -> String {
        let amount = self.amount.as_ref();
        let value = amount
            .and_then(|amount| amount.value)
            .map(|value| value.to_string());
        let currency = amount.and_then(|amount| amount.currency.as_deref());

        crypto::compute_hash(
            [
                self.timestamp.as_deref(),
                self.merchant_id.as_deref(),
                self.order_id.as_deref(),
                value.as_deref(),
                currency,
                self.payment_method.as_deref(),
            ],
            secret,
        )
    }
}
