// src/ingest/providers/mod.rs
pub mod json_feed;
