//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate authorization, validation and store calls into use-case APIs.
//! - Keep transport layers decoupled from storage details.

pub mod bookmark_service;
