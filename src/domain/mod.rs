pub mod auth;
pub mod content;
pub mod feed;
pub mod interaction;
pub mod user;
