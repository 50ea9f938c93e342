//! Request guards and session wrappers.
//!
//! Handlers call [`auth::AuthGuard`] to resolve the logged-in user and use the wrappers in
//! [`session`] instead of raw session keys.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
