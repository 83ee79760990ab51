// database/transactions.rs
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::errors::{AppError, Result};
use crate::models::transaction::{Transaction, TransactionStatus};

const COLLECTION: &str = "transactions";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct TransactionStore {
    collection: Collection<Transaction>,
}

impl TransactionStore {
    pub fn new(db: &Database) -> Self {
        TransactionStore {
            collection: db.collection(COLLECTION),
        }
    }

    /// Unique index on `transactionId` so an ID collision surfaces as a
    /// duplicate-key error instead of a second document.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "transactionId": 1 })
            .options(options)
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    pub async fn create(
        &self,
        mobile: &str,
        transaction_id: &str,
        amount: f64,
    ) -> Result<Transaction> {
        let transaction = Transaction {
            id: None,
            mobile: mobile.to_string(),
            transaction_id: transaction_id.to_string(),
            amount,
            status: TransactionStatus::Pending,
            created_at: Utc::now(),
        };

        self.collection
            .insert_one(&transaction)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::DuplicateKey
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(transaction)
    }

    /// Terminal states are write-once: the filter only matches PENDING
    /// documents, so re-delivered callbacks and unknown IDs fall through as
    /// a non-error `false`.
    pub async fn update_status(
        &self,
        transaction_id: &str,
        status: TransactionStatus,
    ) -> Result<bool> {
        let filter = doc! {
            "transactionId": transaction_id,
            "status": TransactionStatus::Pending.as_str(),
        };
        let update = doc! { "$set": { "status": status.as_str() } };

        let result = self.collection.update_one(filter, update).await?;
        Ok(result.modified_count > 0)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
