pub mod transformers;

use common_utils::errors::{CustomResult, ParsingError};
use domain_types::{ApmRequest, ApmResponse};
use error_stack::report;

use crate::{
    types::WireMapping,
    utils::{parse_xml, parse_xml_bytes, write_xml, WireElement},
};

pub(crate) mod elements {
    pub(crate) const REQUEST: &str = "request";
    pub(crate) const RESPONSE: &str = "response";
    pub(crate) const MERCHANT_ID: &str = "merchantid";
    pub(crate) const ACCOUNT: &str = "account";
    pub(crate) const ORDER_ID: &str = "orderid";
    pub(crate) const AMOUNT: &str = "amount";
    pub(crate) const SHA1_HASH: &str = "sha1hash";
    pub(crate) const COMMENTS: &str = "comments";
    pub(crate) const COMMENT: &str = "comment";
    pub(crate) const PAYMENT_METHOD: &str = "paymentmethod";
    pub(crate) const PAYMENT_METHOD_DETAILS: &str = "paymentmethoddetails";
    pub(crate) const AUTO_SETTLE: &str = "autosettle";
    pub(crate) const PASREF: &str = "pasref";
    pub(crate) const RESULT: &str = "result";
    pub(crate) const MESSAGE: &str = "message";
    pub(crate) const RETURN_URL: &str = "returnurl";
    pub(crate) const REDIRECT_URL: &str = "redirecturl";
    pub(crate) const STATUS_UPDATE_URL: &str = "statusupdateurl";
    pub(crate) const DESCRIPTOR: &str = "descriptor";
    pub(crate) const PAYMENT_PURPOSE: &str = "paymentpurpose";
    pub(crate) const COUNTRY: &str = "country";
    pub(crate) const ACCOUNT_HOLDER_NAME: &str = "accountholdername";
    pub(crate) const BANK_ACCOUNT: &str = "bankaccount";
    pub(crate) const IBAN: &str = "iban";
    pub(crate) const BIC: &str = "bic";
}

pub(crate) mod attributes {
    pub(crate) const TIMESTAMP: &str = "timestamp";
    pub(crate) const TYPE: &str = "type";
    pub(crate) const CURRENCY: &str = "currency";
    pub(crate) const FLAG: &str = "flag";
    pub(crate) const ID: &str = "id";
}

/// A top-level message that is exchanged as a whole XML document.
pub trait XmlMessage: WireMapping {
    #[tracing::instrument(skip_all, fields(message = Self::ELEMENT))]
    fn to_xml(&self) -> CustomResult<String, ParsingError> {
        let xml = write_xml(&self.to_wire())?;
        tracing::debug!(bytes = xml.len(), "Encoded message");
        Ok(xml)
    }

    /// Fails only for malformed XML or a document rooted at a different element.
    #[tracing::instrument(skip_all, fields(message = Self::ELEMENT))]
    fn from_xml(xml: &str) -> CustomResult<Self, ParsingError> {
        from_root(&parse_xml(xml)?)
    }

    #[tracing::instrument(skip_all, fields(message = Self::ELEMENT))]
    fn from_xml_bytes(xml: &[u8]) -> CustomResult<Self, ParsingError> {
        from_root(&parse_xml_bytes(xml)?)
    }
}

impl XmlMessage for ApmRequest {}

impl XmlMessage for ApmResponse {}

fn from_root<T: WireMapping>(root: &WireElement) -> CustomResult<T, ParsingError> {
    if root.name != T::ELEMENT {
        return Err(report!(ParsingError::UnexpectedRootElement {
            expected: T::ELEMENT,
            found: root.name.clone(),
        }));
    }
    T::from_wire(root).ok_or_else(|| report!(ParsingError::StructParseFailure(T::ELEMENT)))
}
