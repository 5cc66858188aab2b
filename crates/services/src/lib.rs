pub mod auth;
pub mod dao;
pub mod push;

pub use auth::AuthService;
pub use dao::*;
pub use push::PushService;
