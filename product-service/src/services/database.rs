use mongodb::bson::{doc, Document};
use mongodb::{Client as MongoClient, Collection, Database};
use service_core::error::AppError;

/// Handle to the product store. Constructed once at startup and cloned into
/// every handler; the driver pools connections internally.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Connected to MongoDB");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// The "products" collection. Documents are schemaless field maps keyed
    /// by the server-minted id in `_id`; no secondary indexes exist because
    /// nothing queries by anything else.
    pub fn products(&self) -> Collection<Document> {
        self.db.collection("products")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
