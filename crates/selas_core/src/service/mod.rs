//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads, search and favorites into use-case APIs.
//! - Keep UI/FFI layers decoupled from data source details.

pub mod catalog_service;
