pub mod category;
pub mod detail;
pub mod logo;
pub mod post;
pub mod project;
