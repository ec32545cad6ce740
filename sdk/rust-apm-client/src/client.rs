use common_utils::errors::CustomResult;
use connector_integration::XmlMessage;
use domain_types::{ApmRequest, ApmResponse};
use error_stack::{report, ResultExt};

use crate::{
    configs::{Config, Merchant},
    error::ApmClientError,
};

/// Signs outgoing requests and verifies incoming responses for one merchant.
#[derive(Clone, Debug)]
pub struct ApmClient {
    merchant: Merchant,
}

impl ApmClient {
    pub fn new(merchant: Merchant) -> CustomResult<Self, ApmClientError> {
        merchant
            .validate()
            .change_context(ApmClientError::MissingMerchantConfiguration)?;
        Ok(Self { merchant })
    }

    pub fn from_config(config: &Config) -> CustomResult<Self, ApmClientError> {
        Self::new(config.merchant.clone())
    }

    pub fn merchant(&self) -> &Merchant {
        &self.merchant
    }

    /// Completes the request with the configured merchant, a timestamp, an order id and the
    /// hash, then serializes it. Values already present on the request are kept, except the
    /// hash which is always recomputed.
    #[tracing::instrument(skip_all, fields(order_id = tracing::field::Empty))]
    pub fn prepare_request(&self, request: ApmRequest) -> CustomResult<String, ApmClientError> {
        let mut request = request;
        if request.merchant_id.is_none() {
            request.merchant_id = Some(self.merchant.merchant_id.clone());
        }
        if request.account.is_none() {
            request.account.clone_from(&self.merchant.account);
        }

        let request = request.generate_defaults(&self.merchant.shared_secret);
        tracing::Span::current().record("order_id", request.order_id.as_deref());

        let xml = request
            .to_xml()
            .change_context(ApmClientError::RequestEncodingFailed)?;
        tracing::info!(apm_type = %request.apm_type, "Prepared request");
        Ok(xml)
    }

    /// Parses a response and checks it came from the processor.
    ///
    /// Basic error responses (`3xx`/`5xx`) carry no hash and are returned as
    /// [`ApmClientError::ErrorResponse`]. Any other response must hash correctly with the
    /// shared secret; a declined transaction with a valid hash is still `Ok`.
    #[tracing::instrument(skip_all)]
    pub fn process_response(&self, xml: &str) -> CustomResult<ApmResponse, ApmClientError> {
        let response = ApmResponse::from_xml(xml)
            .change_context(ApmClientError::ResponseDecodingFailed)?;

        let category = response.result_category();
        if category.is_basic_response() {
            tracing::warn!(result = ?response.result, %category, "Processor rejected the request");
            return Err(report!(ApmClientError::ErrorResponse {
                code: response.result.unwrap_or_default(),
                message: response.message.unwrap_or_default(),
            }));
        }

        if !response.is_hash_valid(&self.merchant.shared_secret) {
            tracing::warn!(order_id = ?response.order_id, "Response hash mismatch");
            return Err(report!(ApmClientError::InvalidResponseHash)).attach_printable_lazy(|| {
                format!(
                    "order_id: {}",
                    response.order_id.as_deref().unwrap_or_default()
                )
            });
        }

        tracing::info!(
            order_id = ?response.order_id,
            result = ?response.result,
            %category,
            "Processed response"
        );
        Ok(response)
    }
}
