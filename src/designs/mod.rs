pub mod about;
pub mod blog;
pub mod common;
pub mod contact;
pub mod home;
pub mod projects;
