use mongodb::Database;
use ngo_connect_config::Settings;
use ngo_connect_services::{
    AuthService, PushService,
    dao::{admin::AdminDao, help_request::HelpRequestDao, ngo::NgoDao, user::UserDao},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub settings: Settings,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserDao>,
    pub admins: Arc<AdminDao>,
    pub ngos: Arc<NgoDao>,
    pub help_requests: Arc<HelpRequestDao>,
    pub push: Arc<PushService>,
}

impl AppState {
    pub fn new(db: Database, settings: Settings) -> Self {
        let auth = Arc::new(AuthService::new());
        let users = Arc::new(UserDao::new(&db));
        let admins = Arc::new(AdminDao::new(&db));
        let ngos = Arc::new(NgoDao::new(&db));
        let help_requests = Arc::new(HelpRequestDao::new(&db));
        let push = Arc::new(PushService::new(&settings.push));

        Self {
            db,
            settings,
            auth,
            users,
            admins,
            ngos,
            help_requests,
            push,
        }
    }
}
