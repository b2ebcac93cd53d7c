pub mod blog;
pub mod health;
pub mod login;
pub mod testing;
pub mod user;
