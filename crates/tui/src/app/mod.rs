use crate::keybinds::Keybinds;
use crate::modal::Modal;
use crate::sign_in::SignInModal;
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::Config;
use anyhow::Result;
use precedent_auth::SignIn;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

mod effects;
mod input;
mod render;
mod state;
mod types;

pub use state::App;
pub use types::AppAsyncEvent;

impl App {
    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }
}
