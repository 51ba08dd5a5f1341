use precedent_auth::SignInError;

pub enum AppAsyncEvent {
    SignInFinished {
        mount_id: u64,
        error: Option<SignInError>,
    },
}
