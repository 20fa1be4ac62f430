// src/lib.rs

//! Curator Library
//!
//! Content-pipeline utilities for a static blog: two YAML ledgers of daily
//! links (published and queued) and an importer that turns the author's
//! Medium RSS feed into site pages.

pub mod config;
pub mod error;
pub mod feed;
pub mod guard;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod utils;
