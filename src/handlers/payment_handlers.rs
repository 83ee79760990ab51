// handlers/payment_handlers.rs
use axum::extract::{Json, State};
use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::errors::{AppError, Result};
use crate::models::transaction::TransactionStatus;
use crate::services::phonepe_service::PayOutcome;
use crate::state::AppState;

// Fields are optional so a missing one gets the descriptive 400 below
// instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct InitiatePaymentRequest {
    pub mobile: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentCallbackRequest {
    #[serde(rename = "merchantTransactionId")]
    pub merchant_transaction_id: Option<String>,
    pub code: Option<String>,
}

/// Timestamp plus a random suffix; practically unique, and the unique
/// index on `transactionId` catches the rare collision.
fn generate_transaction_id() -> String {
    let suffix = rand::thread_rng().gen_range(0..1_000_000);
    format!("T{}{}", Utc::now().timestamp_millis(), suffix)
}

pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(payload): Json<InitiatePaymentRequest>,
) -> Result<Json<Value>> {
    let (mobile, amount) = match (payload.mobile, payload.amount) {
        (Some(mobile), Some(amount)) if !mobile.is_empty() => (mobile, amount),
        _ => {
            return Err(AppError::invalid_data(
                "Mobile number and amount are required",
            ));
        }
    };

    if amount <= 0.0 {
        return Err(AppError::invalid_data("Amount must be greater than 0"));
    }

    let transaction_id = generate_transaction_id();
    info!("Initiating payment {} for {}", transaction_id, mobile);

    // The PENDING record goes in before the gateway sees the request.
    state
        .transactions
        .create(&mobile, &transaction_id, amount)
        .await?;

    let request = state.phonepe.build_pay_request(&transaction_id, &mobile, amount);
    match state.phonepe.initiate_pay_page(&request).await? {
        PayOutcome::Redirect { url } => Ok(Json(json!({
            "success": true,
            "redirectUrl": url,
            "transactionId": transaction_id,
        }))),
        PayOutcome::Declined { code, message } => {
            error!(
                "Payment {} declined by gateway: code={:?} message={:?}",
                transaction_id, code, message
            );
            state
                .transactions
                .update_status(&transaction_id, TransactionStatus::Failed)
                .await?;
            Err(AppError::payment_failed("Payment initiation failed"))
        }
    }
}

pub async fn payment_callback(
    State(state): State<AppState>,
    Json(payload): Json<PaymentCallbackRequest>,
) -> Result<Json<Value>> {
    let (transaction_id, code) = match (payload.merchant_transaction_id, payload.code) {
        (Some(id), Some(code)) if !id.is_empty() => (id, code),
        _ => {
            return Err(AppError::invalid_data(
                "merchantTransactionId and code are required",
            ));
        }
    };

    let status = TransactionStatus::from_callback_code(&code);
    info!(
        "Callback for {}: code {} -> {}",
        transaction_id,
        code,
        status.as_str()
    );

    let updated = state.transactions.update_status(&transaction_id, status).await?;
    if !updated {
        // Unknown or already-terminal transaction; the gateway still gets
        // its acknowledgement so it stops re-delivering.
        warn!("Callback for {} matched no pending transaction", transaction_id);
    }

    Ok(Json(json!({
        "success": true,
        "message": format!("Payment {}", status.as_str()),
    })))
}
