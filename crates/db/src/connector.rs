//! Lazily established, process-wide database connection.
//!
//! A [`Connector`] owns a single-initialization cell. The first caller of
//! [`Connector::get`] runs the dial; every caller that arrives while the dial
//! is in flight awaits that same attempt, and later callers get the cached
//! handle without dialing again. A failed dial leaves the cell empty, so the
//! next call tries again.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;

use crate::error::StoreError;

/// Something that can open a connection handle.
#[async_trait]
pub trait Dial: Send + Sync {
    type Handle: Send + Sync;

    async fn dial(&self) -> Result<Self::Handle, StoreError>;
}

/// Memoizing wrapper around a [`Dial`] implementation.
pub struct Connector<D: Dial> {
    dialer: D,
    handle: OnceCell<D::Handle>,
}

impl<D: Dial> Connector<D> {
    pub fn new(dialer: D) -> Self {
        Self {
            dialer,
            handle: OnceCell::new(),
        }
    }

    /// Return the shared handle, dialing on first use.
    pub async fn get(&self) -> Result<&D::Handle, StoreError> {
        self.handle
            .get_or_try_init(|| async {
                tracing::info!("Opening database connection");
                let handle = self.dialer.dial().await;
                match &handle {
                    Ok(_) => tracing::info!("Database connection established"),
                    Err(e) => tracing::error!(error = %e, "Database connection failed"),
                }
                handle
            })
            .await
    }

    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }

    pub fn dialer(&self) -> &D {
        &self.dialer
    }
}

// ---------------------------------------------------------------------------
// MongoDB
// ---------------------------------------------------------------------------

/// Dials MongoDB and verifies the connection with a `ping`.
///
/// Server selection and socket connect are both bounded by `timeout`, so an
/// unreachable server surfaces as a [`StoreError`] well before the request
/// deadline.
pub struct MongoDialer {
    uri: String,
    fallback_database: String,
    timeout: Duration,
}

impl MongoDialer {
    /// `fallback_database` is used when the URI names no default database.
    pub fn new(
        uri: impl Into<String>,
        fallback_database: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            uri: uri.into(),
            fallback_database: fallback_database.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Dial for MongoDialer {
    type Handle = Database;

    async fn dial(&self) -> Result<Database, StoreError> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.server_selection_timeout = Some(self.timeout);
        options.connect_timeout = Some(self.timeout);

        let client = Client::with_options(options)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(&self.fallback_database));

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::debug!(database = %database.name(), "MongoDB ping succeeded");

        Ok(database)
    }
}

pub type MongoConnector = Connector<MongoDialer>;
