use super::*;

impl App {
    pub fn init(&mut self) {
        tracing::info!(
            "Auth server {} with provider {}",
            self.config.auth.base_url,
            self.config.auth.provider
        );
        if self.config.ui.show_sign_in_on_start {
            self.sign_in_modal.set_show_sign_in_modal(true);
        }
    }

    /// Presses the sign-in button. The panel decides whether an attempt may
    /// start; the external call itself runs off the UI loop.
    pub(super) fn start_sign_in(&mut self) {
        let Some(request) = self.sign_in_modal.click() else {
            return;
        };

        tracing::info!("Starting {} sign-in", request.provider);
        let attempt = self.auth.sign_in(request.provider);
        self.spawn_app_task(async move {
            AppAsyncEvent::SignInFinished {
                mount_id: request.mount_id,
                error: attempt.await.err(),
            }
        });
    }

    /// Drains finished background work. Returns how many events were handled.
    pub fn process_async_events(&mut self) -> usize {
        let mut async_events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                async_events.push(event);
            }
        }

        let processed = async_events.len();
        for event in async_events {
            match event {
                AppAsyncEvent::SignInFinished { mount_id, error } => {
                    let result = match error {
                        Some(e) => Err(e),
                        None => Ok(()),
                    };
                    if !self.sign_in_modal.resolve(mount_id, result) {
                        tracing::debug!("Dropped sign-in result for unmounted panel {}", mount_id);
                    }
                }
            }
        }
        processed
    }
}
