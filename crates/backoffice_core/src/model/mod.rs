//! Entity models for the banking, employee and library domains.
//!
//! # Responsibility
//! - Define validated records and their mutation methods.
//! - Keep each invariant enforced inside the owning type.
//!
//! # Invariants
//! - Constructors fail fast on invalid input; no half-built entity escapes.
//! - Mutators re-validate and leave state unchanged on failure.

pub mod account;
pub mod book;
pub mod borrow_record;
pub mod employee;
pub mod member;
pub mod validation;
