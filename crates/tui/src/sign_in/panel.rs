use precedent_auth::{Provider, SignInResult};
use std::time::Instant;

pub const HEADING: &str = "Sign In";
pub const DESCRIPTION: &str =
    "This is strictly for demo purposes - only your email and profile picture will be stored.";

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    Pending,
    Error(String),
}

/// Ask the host to run one sign-in attempt for the panel identified by `mount_id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInRequest {
    pub mount_id: u64,
    pub provider: Provider,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ButtonContent {
    Label { icon: &'static str, text: String },
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub disabled: bool,
    pub aria_label: String,
    pub content: ButtonContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub heading: &'static str,
    pub description: &'static str,
    pub home_url: String,
    pub error_banner: Option<String>,
    pub button: ButtonView,
}

pub struct SignInPanel {
    mount_id: u64,
    provider: Provider,
    home_url: String,
    state: InteractionState,
    pending_since: Option<Instant>,
}

impl SignInPanel {
    pub fn new(mount_id: u64, provider: Provider, home_url: impl Into<String>) -> Self {
        Self {
            mount_id,
            provider,
            home_url: home_url.into(),
            state: InteractionState::Idle,
            pending_since: None,
        }
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == InteractionState::Pending
    }

    pub fn pending_since(&self) -> Option<Instant> {
        self.pending_since
    }

    /// Press the button. Returns the request to dispatch, or `None` while an
    /// attempt is already in flight.
    pub fn click(&mut self) -> Option<SignInRequest> {
        if self.is_pending() {
            return None;
        }

        self.state = InteractionState::Pending;
        self.pending_since = Some(Instant::now());
        Some(SignInRequest {
            mount_id: self.mount_id,
            provider: self.provider,
        })
    }

    /// Apply the outcome of the external call. Success leaves the panel
    /// pending: the provider flow takes over from here.
    pub fn finish(&mut self, result: SignInResult<()>) {
        if let Err(error) = result {
            self.state = InteractionState::Error(error.user_message().to_string());
            self.pending_since = None;
        }
    }

    pub fn view(&self) -> PanelView {
        let (disabled, content) = match self.state {
            InteractionState::Pending => (true, ButtonContent::Loading),
            InteractionState::Idle | InteractionState::Error(_) => (
                false,
                ButtonContent::Label {
                    icon: provider_icon(self.provider),
                    text: format!("Sign In with {}", self.provider.display_name()),
                },
            ),
        };

        let error_banner = match &self.state {
            InteractionState::Error(message) => Some(message.clone()),
            _ => None,
        };

        PanelView {
            heading: HEADING,
            description: DESCRIPTION,
            home_url: self.home_url.clone(),
            error_banner,
            button: ButtonView {
                disabled,
                aria_label: format!("Sign in with {}", self.provider.display_name()),
                content,
            },
        }
    }
}

fn provider_icon(provider: Provider) -> &'static str {
    match provider {
        Provider::Google => "G",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_auth::{SignInError, SIGN_IN_FAILED};

    fn panel() -> SignInPanel {
        SignInPanel::new(1, Provider::Google, "https://precedent.dev")
    }

    #[test]
    fn starts_idle_with_enabled_google_button() {
        let view = panel().view();
        assert!(!view.button.disabled);
        assert_eq!(
            view.button.content,
            ButtonContent::Label {
                icon: "G",
                text: "Sign In with Google".to_string()
            }
        );
        assert_eq!(view.button.aria_label, "Sign in with Google");
        assert!(view.error_banner.is_none());
    }

    #[test]
    fn click_goes_pending_before_the_call_resolves() {
        let mut panel = panel();
        let request = panel.click().expect("request");

        assert_eq!(request.provider, Provider::Google);
        assert_eq!(request.mount_id, 1);
        assert!(panel.pending_since().is_some());
        let view = panel.view();
        assert!(view.button.disabled);
        assert_eq!(view.button.content, ButtonContent::Loading);
    }

    #[test]
    fn click_while_pending_issues_nothing() {
        let mut panel = panel();
        assert!(panel.click().is_some());
        assert!(panel.click().is_none());
        assert!(panel.click().is_none());
        assert!(panel.is_pending());
    }

    #[test]
    fn rejection_shows_banner_and_reenables_button() {
        let mut panel = panel();
        panel.click();
        panel.finish(Err(SignInError::Rejected("AccessDenied".to_string())));

        let view = panel.view();
        assert_eq!(view.error_banner.as_deref(), Some(SIGN_IN_FAILED));
        assert_eq!(SIGN_IN_FAILED, "Failed to sign in. Please try again.");
        assert!(!view.button.disabled);
        assert!(panel.pending_since().is_none());
    }

    #[test]
    fn retry_after_rejection_clears_banner() {
        let mut panel = panel();
        panel.click();
        panel.finish(Err(SignInError::Navigation("no browser".to_string())));

        assert!(panel.click().is_some());
        let view = panel.view();
        assert!(view.error_banner.is_none());
        assert!(view.button.disabled);
    }

    #[test]
    fn success_keeps_loading_without_banner() {
        let mut panel = panel();
        panel.click();
        panel.finish(Ok(()));

        let view = panel.view();
        assert!(view.error_banner.is_none());
        assert_eq!(view.button.content, ButtonContent::Loading);
        assert_eq!(panel.state(), &InteractionState::Pending);
    }
}
