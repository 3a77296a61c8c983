//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Orchestrate repository reads/writes into caller-facing operations.
//! - Compute derived figures and render plain-text reports.
//! - Emit metadata-only log events for state changes.
//!
//! # Invariants
//! - Services never bypass entity validation.
//! - Log lines carry ids and outcomes, never names or emails.

pub mod bank_service;
pub mod format;
pub mod library_service;
pub mod payroll_service;
pub mod vacation_service;
