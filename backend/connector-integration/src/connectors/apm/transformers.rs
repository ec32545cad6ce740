use std::str::FromStr;

use common_enums::{ApmType, AutoSettleFlag};
use common_utils::types::MinorUnit;
use domain_types::{
    Amount, ApmRequest, ApmResponse, AutoSettle, BankAccount, Comment, CommentCollection,
    PaymentMethodDetails,
};
use hyperswitch_masking::{PeekInterface, Secret};

use super::{attributes, elements};
use crate::{
    types::WireMapping,
    utils::{Lookup, WireElement},
};

impl WireMapping for ApmRequest {
    const ELEMENT: &'static str = elements::REQUEST;

    fn to_wire(&self) -> WireElement {
        WireElement::new(Self::ELEMENT)
            .attribute(attributes::TIMESTAMP, self.timestamp.as_deref())
            .attribute(attributes::TYPE, Some(self.apm_type))
            .text_child(elements::MERCHANT_ID, self.merchant_id.as_deref())
            .text_child(elements::ACCOUNT, self.account.as_deref())
            .text_child(elements::ORDER_ID, self.order_id.as_deref())
            .child(self.amount.as_ref().map(WireMapping::to_wire))
            .text_child(elements::SHA1_HASH, self.hash.as_deref())
            .child(self.comments.as_ref().map(WireMapping::to_wire))
            .text_child(elements::PAYMENT_METHOD, self.payment_method.as_deref())
            .child(self.payment_method_details.as_ref().map(WireMapping::to_wire))
            .child(self.auto_settle.as_ref().map(WireMapping::to_wire))
    }

    fn from_wire(element: &WireElement) -> Option<Self> {
        Some(Self {
            timestamp: element.get_attribute(attributes::TIMESTAMP).map(str::to_string),
            apm_type: decode_apm_type(element),
            merchant_id: scalar(element, elements::MERCHANT_ID),
            account: scalar(element, elements::ACCOUNT),
            order_id: scalar(element, elements::ORDER_ID),
            payment_method: scalar(element, elements::PAYMENT_METHOD),
            amount: nested(element, elements::AMOUNT),
            hash: scalar(element, elements::SHA1_HASH),
            comments: nested(element, elements::COMMENTS),
            payment_method_details: nested(element, elements::PAYMENT_METHOD_DETAILS),
            auto_settle: nested(element, elements::AUTO_SETTLE),
        })
    }
}

impl WireMapping for ApmResponse {
    const ELEMENT: &'static str = elements::RESPONSE;

    fn to_wire(&self) -> WireElement {
        WireElement::new(Self::ELEMENT)
            .attribute(attributes::TIMESTAMP, self.timestamp.as_deref())
            .text_child(elements::MERCHANT_ID, self.merchant_id.as_deref())
            .text_child(elements::ACCOUNT, self.account.as_deref())
            .text_child(elements::ORDER_ID, self.order_id.as_deref())
            .text_child(elements::PASREF, self.payments_reference.as_deref())
            .text_child(elements::PAYMENT_METHOD, self.payment_method.as_deref())
            .text_child(elements::RESULT, self.result.as_deref())
            .text_child(elements::MESSAGE, self.message.as_deref())
            .child(self.payment_method_details.as_ref().map(WireMapping::to_wire))
            .text_child(elements::SHA1_HASH, self.hash.as_deref())
    }

    fn from_wire(element: &WireElement) -> Option<Self> {
        Some(Self {
            timestamp: element.get_attribute(attributes::TIMESTAMP).map(str::to_string),
            merchant_id: scalar(element, elements::MERCHANT_ID),
            account: scalar(element, elements::ACCOUNT),
            order_id: scalar(element, elements::ORDER_ID),
            result: scalar(element, elements::RESULT),
            message: scalar(element, elements::MESSAGE),
            payments_reference: scalar(element, elements::PASREF),
            payment_method: scalar(element, elements::PAYMENT_METHOD),
            payment_method_details: nested(element, elements::PAYMENT_METHOD_DETAILS),
            hash: scalar(element, elements::SHA1_HASH),
        })
    }
}

impl WireMapping for Amount {
    const ELEMENT: &'static str = elements::AMOUNT;

    fn to_wire(&self) -> WireElement {
        WireElement::new(Self::ELEMENT)
            .attribute(attributes::CURRENCY, self.currency.as_deref())
            .text(self.value.map(|value| value.to_string()))
    }

    fn from_wire(element: &WireElement) -> Option<Self> {
        let value = element.get_text().and_then(|text| {
            MinorUnit::from_str(text)
                .inspect_err(|_| {
                    tracing::warn!(value = text, "Amount is not an integer, treating as absent")
                })
                .ok()
        });
        let amount = Self {
            value,
            currency: element
                .get_attribute(attributes::CURRENCY)
                .map(str::to_string),
        };
        (amount != Self::default()).then_some(amount)
    }
}

impl WireMapping for AutoSettle {
    const ELEMENT: &'static str = elements::AUTO_SETTLE;

    fn to_wire(&self) -> WireElement {
        WireElement::new(Self::ELEMENT).attribute(attributes::FLAG, Some(self.flag))
    }

    fn from_wire(element: &WireElement) -> Option<Self> {
        let flag = element.get_attribute(attributes::FLAG)?;
        AutoSettleFlag::from_str(flag)
            .inspect_err(|_| tracing::warn!(flag, "Unknown autosettle flag, treating as absent"))
            .ok()
            .map(Self::new)
    }
}

impl WireMapping for CommentCollection {
    const ELEMENT: &'static str = elements::COMMENTS;

    fn to_wire(&self) -> WireElement {
        self.iter().fold(WireElement::new(Self::ELEMENT), |comments, comment| {
            comments.child(Some(
                WireElement::new(elements::COMMENT)
                    .attribute(attributes::ID, Some(comment.id.to_string()))
                    .text(Some(comment.text.as_str())),
            ))
        })
    }

    /// Ids are kept exactly as received; a missing or non-numeric id falls back to the
    /// comment's 1-based position.
    fn from_wire(element: &WireElement) -> Option<Self> {
        let comments: Self = element
            .find_all(elements::COMMENT)
            .zip(1_u32..)
            .map(|(comment, position)| {
                let id = comment
                    .get_attribute(attributes::ID)
                    .and_then(|id| id.parse::<u32>().ok())
                    .unwrap_or_else(|| {
                        tracing::warn!(position, "Comment without a numeric id");
                        position
                    });
                Comment::new(id, comment.get_text().unwrap_or_default())
            })
            .collect();

        (!comments.is_empty()).then_some(comments)
    }
}

impl WireMapping for PaymentMethodDetails {
    const ELEMENT: &'static str = elements::PAYMENT_METHOD_DETAILS;

    fn to_wire(&self) -> WireElement {
        WireElement::new(Self::ELEMENT)
            .text_child(elements::RETURN_URL, self.return_url.as_deref())
            .text_child(elements::REDIRECT_URL, self.redirect_url.as_deref())
            .text_child(elements::STATUS_UPDATE_URL, self.status_update_url.as_deref())
            .text_child(elements::DESCRIPTOR, self.descriptor.as_deref())
            .text_child(elements::PAYMENT_PURPOSE, self.payment_purpose.as_deref())
            .text_child(elements::COUNTRY, self.country.as_deref())
            .text_child(
                elements::ACCOUNT_HOLDER_NAME,
                self.account_holder_name.as_ref().map(|name| name.peek()),
            )
            .child(self.bank_account.as_ref().map(WireMapping::to_wire))
    }

    fn from_wire(element: &WireElement) -> Option<Self> {
        let details = Self {
            return_url: scalar(element, elements::RETURN_URL),
            redirect_url: scalar(element, elements::REDIRECT_URL),
            status_update_url: scalar(element, elements::STATUS_UPDATE_URL),
            descriptor: scalar(element, elements::DESCRIPTOR),
            payment_purpose: scalar(element, elements::PAYMENT_PURPOSE),
            country: scalar(element, elements::COUNTRY),
            account_holder_name: scalar(element, elements::ACCOUNT_HOLDER_NAME).map(Secret::new),
            bank_account: nested(element, elements::BANK_ACCOUNT),
        };
        (details != Self::default()).then_some(details)
    }
}

impl WireMapping for BankAccount {
    const ELEMENT: &'static str = elements::BANK_ACCOUNT;

    fn to_wire(&self) -> WireElement {
        WireElement::new(Self::ELEMENT)
            .text_child(elements::IBAN, self.iban.as_ref().map(|iban| iban.peek()))
            .text_child(elements::BIC, self.bic.as_deref())
    }

    fn from_wire(element: &WireElement) -> Option<Self> {
        let bank_account = Self {
            iban: scalar(element, elements::IBAN).map(Secret::new),
            bic: scalar(element, elements::BIC),
        };
        (bank_account != Self::default()).then_some(bank_account)
    }
}

fn decode_apm_type(element: &WireElement) -> ApmType {
    element
        .get_attribute(attributes::TYPE)
        .and_then(|apm_type| {
            ApmType::from_str(apm_type)
                .inspect_err(|_| tracing::warn!(apm_type, "Unknown request type, using default"))
                .ok()
        })
        .unwrap_or_default()
}

/// Text of a leaf child. A child that turns out to be structured is treated as absent.
fn scalar(element: &WireElement, key: &'static str) -> Option<String> {
    match element.lookup(key) {
        Lookup::Absent => None,
        Lookup::Text(text) => Some(text.to_string()),
        Lookup::Nested(_) => {
            tracing::warn!(
                parent = %element.name,
                key,
                "Expected a text value but found structured content, treating as absent"
            );
            None
        }
    }
}

/// Decodes a structured child. A child holding only text is treated as absent.
fn nested<T: WireMapping>(element: &WireElement, key: &'static str) -> Option<T> {
    match element.lookup(key) {
        Lookup::Absent => None,
        Lookup::Nested(child) => T::from_wire(child),
        Lookup::Text(_) => {
            tracing::warn!(
                parent = %element.name,
                key,
                "Expected structured content but found text, treating as absent"
            );
            None
        }
    }
}
