//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Ownership rules, validation and transactions
//! - **Data Layer** (`data/`) - Database operations, including the post search query compiler
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! Supporting modules: `config` (environment configuration), `state` (shared state),
//! `startup` (database, sessions and clients), `router` (routes), `openapi` (the OpenAPI
//! document served at `/api/openapi.json`) and `util` (request value parsing).
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** resolves the current user, converts DTOs to params and calls a service
//! 3. **Service** validates, checks ownership and calls repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
