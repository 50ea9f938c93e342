//! SeaORM entities for the teammate schema.
//!
//! Posts are the root searchable entity. Each multi-valued post attribute lives in its own
//! junction table keyed by `(post_id, <value>)`; catalog tables hold the lookup data those
//! junctions point at. Comments and team chat messages hang off a post and are removed with it.

pub mod prelude;

pub mod car;
pub mod car_class;
pub mod comment;
pub mod event;
pub mod language;
pub mod post;
pub mod post_application;
pub mod post_car;
pub mod post_car_class;
pub mod post_category;
pub mod post_language;
pub mod post_series;
pub mod post_track;
pub mod series;
pub mod team_message;
pub mod track;
pub mod user;
