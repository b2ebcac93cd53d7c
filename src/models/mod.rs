mod blog;
mod user;

pub use blog::Blog;
pub use user::User;
