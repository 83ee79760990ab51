// services/phonepe_service.rs
use base64::{engine::general_purpose::STANDARD as base64, Engine as _};
use reqwest::{header, Client};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::services::checksum;

pub const PAY_ENDPOINT: &str = "/pg/v1/pay";

const PAY_PAGE: &str = "PAY_PAGE";

#[derive(Debug, Serialize)]
pub struct PayPageRequest {
    #[serde(rename = "merchantId")]
    pub merchant_id: String,
    #[serde(rename = "merchantTransactionId")]
    pub merchant_transaction_id: String,
    #[serde(rename = "merchantUserId")]
    pub merchant_user_id: String,
    pub amount: i64,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
    #[serde(rename = "paymentInstrument")]
    pub payment_instrument: PaymentInstrument,
}

#[derive(Debug, Serialize)]
pub struct PaymentInstrument {
    #[serde(rename = "type")]
    pub instrument_type: String,
}

/// What the gateway told us about an initiation attempt that made it onto
/// the wire and back.
#[derive(Debug)]
pub enum PayOutcome {
    /// Accepted; the payer completes payment on the hosted pay page.
    Redirect { url: String },
    /// The gateway answered but declined to start the payment.
    Declined {
        code: Option<String>,
        message: Option<String>,
    },
}

pub struct PhonePeService {
    config: Arc<AppConfig>,
    client: Client,
}

impl PhonePeService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        PhonePeService { config, client }
    }

    pub fn build_pay_request(
        &self,
        transaction_id: &str,
        mobile: &str,
        amount: f64,
    ) -> PayPageRequest {
        PayPageRequest {
            merchant_id: self.config.merchant_id.clone(),
            merchant_transaction_id: transaction_id.to_string(),
            merchant_user_id: format!("user-{}", mobile),
            amount: to_minor_units(amount),
            mobile_number: mobile.to_string(),
            callback_url: self.config.callback_url(),
            payment_instrument: PaymentInstrument {
                instrument_type: PAY_PAGE.to_string(),
            },
        }
    }

    /// Sends the signed pay-page envelope to the gateway. A transport-level
    /// failure is an `ExternalApi` error (the stored record stays PENDING);
    /// a gateway that answers but declines comes back as
    /// `PayOutcome::Declined`.
    pub async fn initiate_pay_page(&self, request: &PayPageRequest) -> Result<PayOutcome> {
        let transaction_id = request.merchant_transaction_id.as_str();

        let payload = base64.encode(serde_json::to_vec(request)?);
        let signature = checksum::x_verify(
            &payload,
            PAY_ENDPOINT,
            &self.config.salt_key,
            &self.config.salt_index,
        );
        let pay_url = format!("{}{}", self.config.phonepe_base_url, PAY_ENDPOINT);

        info!("Sending pay request {} to gateway", transaction_id);

        let response = self
            .client
            .post(&pay_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-VERIFY", signature)
            .header("X-MERCHANT-ID", &self.config.merchant_id)
            .json(&serde_json::json!({ "request": payload }))
            .send()
            .await
            .map_err(|e| {
                error!("Pay request {} failed in transit: {}", transaction_id, e);
                AppError::external_api("Payment processing failed", None)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail: Option<Value> = response.json().await.ok();
            error!(
                "Pay request {} rejected by gateway: {} - {:?}",
                transaction_id, status, detail
            );
            return Err(AppError::external_api("Payment processing failed", detail));
        }

        let body: Value = response.json().await.map_err(|e| {
            error!("Pay request {} returned unreadable body: {}", transaction_id, e);
            AppError::external_api("Payment processing failed", None)
        })?;

        let success = body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let redirect_url = body
            .pointer("/data/instrumentResponse/redirectInfo/url")
            .and_then(Value::as_str);

        match redirect_url {
            Some(url) if success => {
                info!("Pay request {} accepted by gateway", transaction_id);
                Ok(PayOutcome::Redirect {
                    url: url.to_string(),
                })
            }
            _ => Ok(PayOutcome::Declined {
                code: body
                    .get("code")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                message: body
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
        }
    }
}

/// Paise conversion for the outbound request only; stored amounts stay in
/// original currency units.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
