pub mod authentication;
pub mod item;
pub mod user;
