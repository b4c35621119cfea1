use super::store::{
    invoice_not_found, stale_version, CompanyStore, InvoiceStore, MAX_LIST_LIMIT,
};
use crate::models::{CompanySettings, Invoice};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions, ReplaceOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for invoicing-service");

        // Newest-first listing
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        // Lookup by human-facing number; uniqueness is not enforced here
        let invoice_number_index = IndexModel::builder()
            .keys(doc! { "invoice_number": 1 })
            .options(
                IndexOptions::builder()
                    .name("invoice_number_lookup".to_string())
                    .build(),
            )
            .build();

        self.invoices()
            .create_indexes([created_at_index, invoice_number_index], None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create indexes on invoices collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created indexes on invoices.(created_at, invoice_number)");

        Ok(())
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

    pub fn invoices(&self) -> Collection<Invoice> {
        self.db.collection("invoices")
    }

    pub fn company_settings(&self) -> Collection<CompanySettings> {
        self.db.collection("company_settings")
    }
}

/// Invoice store over the `invoices` collection.
#[derive(Clone)]
pub struct MongoInvoiceStore {
    db: MongoDb,
}

impl MongoInvoiceStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceStore for MongoInvoiceStore {
    async fn get(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        Ok(self
            .db
            .invoices()
            .find_one(doc! { "_id": id }, None)
            .await?)
    }

    async fn insert(&self, invoice: &Invoice) -> Result<(), AppError> {
        self.db
            .invoices()
            .insert_one(invoice, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to insert invoice {} into database: {}",
                    invoice.id,
                    e
                );
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn replace(&self, invoice: &Invoice, expected_version: i64) -> Result<(), AppError> {
        let result = self
            .db
            .invoices()
            .replace_one(
                doc! { "_id": &invoice.id, "version": expected_version },
                invoice,
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return match self.get(&invoice.id).await? {
                Some(_) => Err(stale_version(&invoice.id, expected_version)),
                None => Err(invoice_not_found()),
            };
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = self
            .db
            .invoices()
            .delete_one(doc! { "_id": id }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Invoice>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 }) // Newest first
            .limit(limit.clamp(1, MAX_LIST_LIMIT))
            .build();

        let mut cursor = self.db.invoices().find(doc! {}, find_options).await?;

        let mut invoices = Vec::new();
        while let Some(invoice) = cursor.try_next().await? {
            invoices.push(invoice);
        }
        Ok(invoices)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}

/// Company settings store over the `company_settings` collection.
#[derive(Clone)]
pub struct MongoCompanyStore {
    db: MongoDb,
}

impl MongoCompanyStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyStore for MongoCompanyStore {
    async fn get(&self) -> Result<Option<CompanySettings>, AppError> {
        Ok(self.db.company_settings().find_one(doc! {}, None).await?)
    }

    async fn upsert(&self, settings: &CompanySettings) -> Result<(), AppError> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.db
            .company_settings()
            .replace_one(doc! { "_id": &settings.id }, settings, options)
            .await?;
        Ok(())
    }
}
