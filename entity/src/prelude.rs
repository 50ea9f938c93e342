pub use super::car::Entity as Car;
pub use super::car_class::Entity as CarClass;
pub use super::comment::Entity as Comment;
pub use super::event::Entity as Event;
pub use super::language::Entity as Language;
pub use super::post::Entity as Post;
pub use super::post_application::Entity as PostApplication;
pub use super::post_car::Entity as PostCar;
pub use super::post_car_class::Entity as PostCarClass;
pub use super::post_category::Entity as PostCategory;
pub use super::post_language::Entity as PostLanguage;
pub use super::post_series::Entity as PostSeries;
pub use super::post_track::Entity as PostTrack;
pub use super::series::Entity as Series;
pub use super::team_message::Entity as TeamMessage;
pub use super::track::Entity as Track;
pub use super::user::Entity as User;
