mod application;
mod catalog;
mod comment;
mod post;
mod team;
mod user;
