use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration of the rentals module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RentalsConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Let a landlord review their own property.
    #[serde(default)]
    pub allow_self_review: bool,
    /// Shown in place of a reviewer whose profile has no name.
    #[serde(default = "default_anonymous_reviewer_name")]
    pub anonymous_reviewer_name: String,
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_bio_length")]
    pub max_bio_length: usize,
    /// Capacity of the domain event broadcast channel.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for RentalsConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            allow_self_review: false,
            anonymous_reviewer_name: default_anonymous_reviewer_name(),
            min_name_length: default_min_name_length(),
            max_name_length: default_max_name_length(),
            max_bio_length: default_max_bio_length(),
            event_buffer: default_event_buffer(),
        }
    }
}

impl RentalsConfig {
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            allow_self_review: self.allow_self_review,
            anonymous_reviewer_name: self.anonymous_reviewer_name.clone(),
            min_name_length: self.min_name_length,
            max_name_length: self.max_name_length,
            max_bio_length: self.max_bio_length,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_dsn")]
    pub dsn: String,
    #[serde(default)]
    pub max_connections: Option<u32>,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            max_connections: None,
            run_migrations: default_run_migrations(),
        }
    }
}

fn default_anonymous_reviewer_name() -> String {
    "Anonymous".to_owned()
}

fn default_min_name_length() -> usize {
    2
}

fn default_max_name_length() -> usize {
    50
}

fn default_max_bio_length() -> usize {
    200
}

fn default_event_buffer() -> usize {
    256
}

fn default_dsn() -> String {
    "sqlite::memory:".to_owned()
}

fn default_run_migrations() -> bool {
    true
}
