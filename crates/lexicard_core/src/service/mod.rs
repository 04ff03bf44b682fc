//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, scheduler, quiz and repository calls into the
//!   operations exposed to presentation shells.
//! - Keep shells decoupled from storage details.

pub mod card_service;
