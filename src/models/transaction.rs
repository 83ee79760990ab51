// models/transaction.rs
use chrono::{DateTime, Utc};
use mongodb::bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    /// The gateway reports the final outcome as a code string; anything
    /// other than PAYMENT_SUCCESS counts as a failure.
    pub fn from_callback_code(code: &str) -> Self {
        if code == "PAYMENT_SUCCESS" {
            TransactionStatus::Success
        } else {
            TransactionStatus::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Failed => "FAILED",
        }
    }
}

/// One document per payment attempt. `transactionId` is assigned once at
/// creation and is the lookup key for callback updates; `amount` stays in
/// original currency units (the paise conversion only exists on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub mobile: String,

    #[serde(rename = "transactionId")]
    pub transaction_id: String,

    pub amount: f64,

    pub status: TransactionStatus,

    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}
