//! Value Objects

pub mod user_name;

pub use user_name::UserName;
