#![doc = "secret-tunnel: consolidate sensor credential documents into one secrets document."]

//! This crate turns a set of per-sensor YAML documents into a single aggregated
//! secrets document for downstream provisioning. Sensors are included only when
//! their UUID appears in the enabled-sensor allowlist held in the collections
//! database; when no database is wired in, every sensor is treated as enabled.
//!
//! # Pipeline
//! - [`enabled`]: one-shot lookup of the enabled-sensor set (Postgres, optional)
//! - [`transform`]: per-document field projection and inclusion decision
//! - [`pipeline`]: sequential driver tying the two together, fail-fast
//! - [`output`]: the aggregated document model and its YAML rendering
//!
//! The CLI surface lives in [`cli`]; [`config`] holds the run-wide settings.

pub mod cli;
pub mod config;
pub mod enabled;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod transform;
