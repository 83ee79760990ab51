use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::AppConfig;

const DB_NAME: &str = "payments";

pub async fn get_db_client(config: &AppConfig) -> Database {
    let client = Client::with_uri_str(&config.database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(DB_NAME);

    // The driver connects lazily; ping here so a bad connection string is
    // fatal at startup rather than on the first payment.
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => {
            tracing::info!("Connected to database: {}", DB_NAME);
        }
        Err(e) => {
            tracing::error!("Database '{}' is unreachable: {}", DB_NAME, e);
            std::process::exit(1);
        }
    }

    db
}
