pub mod admin;
pub mod base;
pub mod help_request;
pub mod ngo;
pub mod user;

pub use base::BaseDao;
