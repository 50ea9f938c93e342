//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary. Enum-valued columns are parsed into Rust enums here, so the
//! service layer never handles raw status or category strings.

pub mod application;
pub mod catalog;
pub mod comment;
pub mod filter;
pub mod post;
pub mod team;
pub mod user;
