//! # enabled: the enabled-sensor allowlist lookup
//!
//! This module defines a single trait ([`EnabledSource`]) and the concrete
//! Postgres-backed implementation used in production. The trait exists so the
//! pipeline driver can be exercised against deterministic mocks in tests.
//!
//! ## Contract
//! - [`EnabledSource::fetch_enabled`] runs exactly once per run, before any
//!   document is transformed, and returns the full set of enabled sensor UUIDs.
//! - A failed lookup is fatal with no retries: an incomplete set would silently
//!   under- or over-include sensors in the output, which is worse than stopping.
//!
//! ## Mocking & Testing
//! The trait is annotated for `mockall`, so consumers can generate
//! `MockEnabledSource` for unit/integration tests (gated behind the
//! `test-export-mocks` feature, on by default).

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::postgres::PgConnection;
use sqlx::Connection;
use tracing::info;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::error::PipelineError;

/// Set of sensor UUIDs currently enabled in the external store. Fetched once
/// per run and read-only afterwards.
pub type EnabledSet = HashSet<String>;

const ENABLED_SENSORS_QUERY: &str = "
    SELECT sensor_uuid
    FROM collections.sensors
    WHERE enabled_flag = true
";

/// Source of the enabled-sensor set.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait EnabledSource: Send + Sync {
    /// Fetch the set of enabled sensor UUIDs from the backing store.
    async fn fetch_enabled(&self) -> Result<EnabledSet, PipelineError>;
}

/// Enabled-sensor source backed by the collections Postgres database.
pub struct PostgresEnabledSource {
    url: String,
}

impl PostgresEnabledSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl EnabledSource for PostgresEnabledSource {
    async fn fetch_enabled(&self) -> Result<EnabledSet, PipelineError> {
        let mut conn = PgConnection::connect(&self.url)
            .await
            .map_err(PipelineError::Lookup)?;

        // The connection is scoped to this one lookup; an early return drops
        // (and thereby releases) it.
        let uuids: Vec<String> = sqlx::query_scalar(ENABLED_SENSORS_QUERY)
            .fetch_all(&mut conn)
            .await
            .map_err(PipelineError::Lookup)?;

        conn.close().await.map_err(PipelineError::Lookup)?;

        info!(enabled_count = uuids.len(), "Fetched enabled sensor UUIDs");
        Ok(uuids.into_iter().collect())
    }
}
