pub mod identity;
pub mod page;
pub mod todo;
pub mod user;
