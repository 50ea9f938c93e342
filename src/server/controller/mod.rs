//! HTTP request handlers.
//!
//! Handlers extract the request, resolve the current user through `AuthGuard` where needed,
//! convert DTOs into domain parameters, call a service and convert the result back into a DTO.

pub mod application;
pub mod auth;
pub mod catalog;
pub mod comment;
pub mod post;
pub mod team;
