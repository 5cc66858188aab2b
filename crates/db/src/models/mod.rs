mod admin;
mod geo;
mod help_request;
mod ngo;
mod user;

pub use admin::Admin;
pub use geo::GeoPoint;
pub use help_request::{HelpRequest, HelpStatus, HelpType};
pub use ngo::Ngo;
pub use user::User;
