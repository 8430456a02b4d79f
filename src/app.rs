use std::cell::RefCell;
use std::rc::Rc;

use adw::Application;
use adw::prelude::*;
use cheesehome::MessengerClient;
use cheesehome::config::Config;
use log::error;

/// Everything the windows share. Lives on the GTK main thread only.
pub struct AppContext {
    pub app: Application,
    pub config: Config,
    pub client: RefCell<MessengerClient>,
}

pub fn build_ui(app: &Application) {
    let config = Config::load();
    let client = match MessengerClient::with_builtin_seed() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to load mock data: {e}");
            app.quit();
            return;
        }
    };
    let ctx = Rc::new(AppContext {
        app: app.clone(),
        config,
        client: RefCell::new(client),
    });
    crate::ui::login::show_login_window(&ctx);
}
