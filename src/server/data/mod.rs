//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one area each and return entity models or domain
//! models. Repositories that take part in multi-table writes are generic over
//! `ConnectionTrait` so services can run them inside a transaction.

pub mod application;
pub mod catalog;
pub mod comment;
pub mod post;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
