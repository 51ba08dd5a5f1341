use super::*;

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub layout: LayoutState,
    pub keybinds: Keybinds,
    pub sign_in_modal: SignInModal,
    pub auth: Arc<dyn SignIn>,
    pub show_help: bool,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
}

impl App {
    pub fn new(config: Config, auth: Arc<dyn SignIn>) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let sign_in_modal = SignInModal::new(config.auth.provider, config.ui.home_url.clone());

        Self {
            should_quit: false,
            config,
            layout: LayoutState::default(),
            keybinds: Keybinds,
            sign_in_modal,
            auth,
            show_help: false,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
        }
    }
}
