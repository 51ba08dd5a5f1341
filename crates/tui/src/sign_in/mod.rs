//! The sign-in modal: a visibility toggle owning one mounted panel at a time.
//!
//! The panel only exists while the modal is shown. Hiding drops it, showing
//! mounts a fresh one with a new mount id, and setting the flag to the value
//! it already has leaves the mounted panel untouched.

mod panel;
mod view;

pub use panel::{
    ButtonContent, ButtonView, InteractionState, PanelView, SignInPanel, SignInRequest,
    DESCRIPTION, HEADING,
};
use view::{panel_height, render_panel, PANEL_WIDTH};

use crate::modal::Modal;
use precedent_auth::{Provider, SignInResult};
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::{Position, Rect};
use ratatui::Frame;

const DOTS_INTERVAL_MS: u128 = 300;

/// New value for the visibility flag: either a plain boolean or a function
/// of the current one.
pub enum VisibilityUpdate {
    Set(bool),
    Apply(Box<dyn FnOnce(bool) -> bool>),
}

impl VisibilityUpdate {
    pub fn with(f: impl FnOnce(bool) -> bool + 'static) -> Self {
        VisibilityUpdate::Apply(Box::new(f))
    }

    pub fn toggle() -> Self {
        Self::with(|shown| !shown)
    }

    fn resolve(self, current: bool) -> bool {
        match self {
            VisibilityUpdate::Set(value) => value,
            VisibilityUpdate::Apply(f) => f(current),
        }
    }
}

impl From<bool> for VisibilityUpdate {
    fn from(value: bool) -> Self {
        VisibilityUpdate::Set(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ModalLayout {
    popup: Rect,
    button: Rect,
}

pub struct SignInModal {
    show_sign_in_modal: bool,
    panel: Option<SignInPanel>,
    mounts: u64,
    provider: Provider,
    home_url: String,
    layout: Option<ModalLayout>,
}

impl SignInModal {
    pub fn new(provider: Provider, home_url: impl Into<String>) -> Self {
        Self {
            show_sign_in_modal: false,
            panel: None,
            mounts: 0,
            provider,
            home_url: home_url.into(),
            layout: None,
        }
    }

    pub fn set_show_sign_in_modal(&mut self, update: impl Into<VisibilityUpdate>) {
        let next = update.into().resolve(self.show_sign_in_modal);
        if next == self.show_sign_in_modal {
            return;
        }

        self.show_sign_in_modal = next;
        if next {
            self.mounts += 1;
            self.panel = Some(SignInPanel::new(
                self.mounts,
                self.provider,
                self.home_url.clone(),
            ));
            tracing::debug!("Sign-in panel mounted ({})", self.mounts);
        } else {
            self.panel = None;
            self.layout = None;
            tracing::debug!("Sign-in panel unmounted");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.show_sign_in_modal
    }

    pub fn panel(&self) -> Option<&SignInPanel> {
        self.panel.as_ref()
    }

    /// How many panels have been mounted so far.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }

    pub fn click(&mut self) -> Option<SignInRequest> {
        self.panel.as_mut().and_then(SignInPanel::click)
    }

    /// Delivers a finished attempt. Returns false when the panel it belongs
    /// to is no longer mounted, in which case the result is dropped.
    pub fn resolve(&mut self, mount_id: u64, result: SignInResult<()>) -> bool {
        match self.panel.as_mut() {
            Some(panel) if panel.mount_id() == mount_id => {
                panel.finish(result);
                true
            }
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        Modal::handle_key(key, |show| self.set_show_sign_in_modal(show))
    }

    pub fn popup_contains(&self, column: u16, row: u16) -> bool {
        self.layout
            .is_some_and(|layout| Modal::contains(layout.popup, column, row))
    }

    pub fn button_contains(&self, column: u16, row: u16) -> bool {
        self.layout
            .is_some_and(|layout| layout.button.contains(Position::new(column, row)))
    }

    /// Draws the modal over `area` when shown; draws nothing otherwise.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(panel) = self.panel.as_ref() else {
            self.layout = None;
            return;
        };

        let view = panel.view();
        let dots_frame = panel
            .pending_since()
            .map(|since| (since.elapsed().as_millis() / DOTS_INTERVAL_MS) as usize)
            .unwrap_or(0);

        let mut button = Rect::default();
        let popup = Modal::render(
            frame,
            area,
            PANEL_WIDTH,
            panel_height(&view),
            |frame, inner| {
                button = render_panel(frame, inner, &view, dots_frame);
            },
        );
        self.layout = Some(ModalLayout { popup, button });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_auth::SignInError;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn modal() -> SignInModal {
        SignInModal::new(Provider::Google, "https://precedent.dev")
    }

    fn screen(modal: &mut SignInModal) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        terminal
            .draw(|frame| modal.render(frame, frame.area()))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn rendered_only_while_visible() {
        let mut modal = modal();
        assert!(!screen(&mut modal).contains("Sign In with Google"));

        modal.set_show_sign_in_modal(true);
        assert!(screen(&mut modal).contains("Sign In with Google"));

        modal.set_show_sign_in_modal(VisibilityUpdate::toggle());
        assert!(!modal.is_visible());
        assert!(!screen(&mut modal).contains("Sign In with Google"));
        assert!(modal.panel().is_none());
    }

    #[test]
    fn same_value_keeps_the_mounted_panel() {
        let mut modal = modal();
        modal.set_show_sign_in_modal(true);
        modal.click();

        modal.set_show_sign_in_modal(true);
        modal.set_show_sign_in_modal(VisibilityUpdate::with(|shown| shown));

        assert_eq!(modal.mount_count(), 1);
        assert!(modal.panel().is_some_and(SignInPanel::is_pending));
    }

    #[test]
    fn remount_starts_idle() {
        let mut modal = modal();
        modal.set_show_sign_in_modal(true);
        let request = modal.click().expect("request");
        modal.resolve(request.mount_id, Err(SignInError::Csrf("gone".to_string())));

        modal.set_show_sign_in_modal(false);
        modal.set_show_sign_in_modal(true);

        assert_eq!(modal.mount_count(), 2);
        assert_eq!(
            modal.panel().map(SignInPanel::state),
            Some(&InteractionState::Idle)
        );
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut modal = modal();
        modal.set_show_sign_in_modal(true);
        let request = modal.click().expect("request");
        modal.set_show_sign_in_modal(false);
        modal.set_show_sign_in_modal(true);

        let applied = modal.resolve(
            request.mount_id,
            Err(SignInError::Rejected("late".to_string())),
        );

        assert!(!applied);
        assert!(modal.panel().is_some_and(|p| p.view().error_banner.is_none()));
    }

    #[test]
    fn click_without_panel_does_nothing() {
        let mut modal = modal();
        assert!(modal.click().is_none());
        assert!(!modal.resolve(1, Ok(())));
    }

    #[test]
    fn rejection_renders_the_alert() {
        let mut modal = modal();
        modal.set_show_sign_in_modal(true);
        let request = modal.click().expect("request");
        assert!(!screen(&mut modal).contains("Sign In with Google"));

        modal.resolve(
            request.mount_id,
            Err(SignInError::Rejected("AccessDenied".to_string())),
        );

        let text = screen(&mut modal);
        assert!(text.contains("Failed to sign in. Please try again."));
        assert!(text.contains("Sign In with Google"));
        assert!(!text.contains("AccessDenied"));
    }

    #[test]
    fn hit_testing_follows_the_last_render() {
        let mut modal = modal();
        modal.set_show_sign_in_modal(true);
        screen(&mut modal);

        let layout = modal.layout.expect("layout");
        assert!(modal.button_contains(layout.button.x + 1, layout.button.y + 1));
        assert!(modal.popup_contains(layout.popup.x, layout.popup.y));
        assert!(!modal.popup_contains(0, 0));

        modal.set_show_sign_in_modal(false);
        assert!(!modal.button_contains(layout.button.x + 1, layout.button.y + 1));
    }
}
