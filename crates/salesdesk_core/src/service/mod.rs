//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the UI layer decoupled from storage details; services issue no
//!   SQL of their own.
//!
//! # Invariants
//! - `save_or_update` dispatches purely on id presence: absent id means
//!   insert, present id means update.
//! - Services hold no business validation; field checks stay in the UI.

pub mod department_service;
pub mod seller_service;
