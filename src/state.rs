use mongodb::Database;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::transactions::TransactionStore;
use crate::services::phonepe_service::PhonePeService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
    pub transactions: TransactionStore,
    pub phonepe: Arc<PhonePeService>,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        let config = Arc::new(config);
        let transactions = TransactionStore::new(&db);
        let phonepe = Arc::new(PhonePeService::new(config.clone()));

        AppState {
            db,
            config,
            transactions,
            phonepe,
        }
    }
}
