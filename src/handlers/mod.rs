pub mod auth;
pub mod chat;
pub mod gallery;
pub mod health;
