//! Data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod application;
pub mod catalog;
pub mod comment;
pub mod post;
pub mod team;
pub mod user;
