//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce ownership and
//! state rules, validate input, coordinate several repositories and own transaction
//! boundaries. They take and return domain models, never DTOs or entity models.

pub mod application;
pub mod auth;
pub mod catalog;
pub mod comment;
pub mod post;
pub mod team;
