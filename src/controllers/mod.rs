pub mod feed;
pub mod health;
pub mod interaction;
pub mod user;
