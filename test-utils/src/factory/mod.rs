//! Factories for test data.
//!
//! Each entity has a `*Factory` builder for customized rows and a `create_*` shorthand for
//! rows with defaults. Defaults are unique per call (see [`helpers::next_id`]), so tests can
//! create as many rows as they need without colliding on unique columns.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(db).await?;
//! let car = factory::create_car(db, "Dallara IR18").await?;
//! let post = factory::post::PostFactory::new(db, owner.id)
//!     .categories(["oval"])
//!     .car_ids([car.id])
//!     .min_irating(2500)
//!     .build()
//!     .await?;
//! ```

pub mod catalog;
pub mod comment;
pub mod helpers;
pub mod post;
pub mod post_application;
pub mod team_message;
pub mod user;

pub use catalog::{
    create_car, create_car_class, create_event, create_language, create_series, create_track,
};
pub use comment::create_comment;
pub use post::create_post;
pub use post_application::create_application;
pub use team_message::create_team_message;
pub use user::create_user;
