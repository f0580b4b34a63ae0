//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage access into use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod report_service;
pub mod session_service;
