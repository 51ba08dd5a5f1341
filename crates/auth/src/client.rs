use crate::error::{SignInError, SignInResult};
use crate::provider::{Provider, ProviderInfo};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const PROVIDERS_PATH: &str = "/api/auth/providers";
const CSRF_PATH: &str = "/api/auth/csrf";
const SIGNIN_PATH: &str = "/api/auth/signin";

/// Entry point of a federated sign-in. Resolves once the flow has been
/// handed off to the provider; the resolved value carries nothing.
pub trait SignIn: Send + Sync {
    fn sign_in(&self, provider: Provider) -> BoxFuture<'static, SignInResult<()>>;
}

/// Where the flow goes once the auth server hands back the provider url.
pub trait Navigate: Send + Sync {
    fn navigate(&self, url: &Url) -> SignInResult<()>;
}

/// Opens the provider page in the user's default browser.
pub struct BrowserNavigator;

impl Navigate for BrowserNavigator {
    fn navigate(&self, url: &Url) -> SignInResult<()> {
        info!("Opening browser for sign-in at {}", url.host_str().unwrap_or("<unknown>"));
        open::that(url.as_str()).map_err(|e| SignInError::Navigation(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsrfResponse {
    csrf_token: String,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    url: String,
}

/// Talks to a NextAuth-style auth server the same way its browser client
/// does: provider listing, CSRF token, then the provider sign-in endpoint.
#[derive(Clone)]
pub struct NextAuthClient {
    client: Client,
    base_url: Url,
    callback_url: String,
    navigator: Arc<dyn Navigate>,
}

impl NextAuthClient {
    pub fn new(base_url: &str, callback_url: &str) -> SignInResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SignInError::Unexpected(format!("invalid auth base url {base_url}: {e}")))?;

        let client = Client::builder()
            .user_agent(concat!("precedent/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .cookie_store(true)
            .build()
            .map_err(|e| SignInError::Unexpected(format!("building http client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            callback_url: callback_url.to_string(),
            navigator: Arc::new(BrowserNavigator),
        })
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigate>) -> Self {
        self.navigator = navigator;
        self
    }

    fn endpoint(&self, path: &str) -> SignInResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| SignInError::Unexpected(format!("invalid endpoint {path}: {e}")))
    }

    pub async fn providers(&self) -> SignInResult<HashMap<String, ProviderInfo>> {
        let providers = self
            .client
            .get(self.endpoint(PROVIDERS_PATH)?)
            .send()
            .await?
            .error_for_status()?
            .json::<HashMap<String, ProviderInfo>>()
            .await?;
        Ok(providers)
    }

    async fn csrf_token(&self) -> SignInResult<String> {
        let response = self
            .client
            .get(self.endpoint(CSRF_PATH)?)
            .send()
            .await?
            .error_for_status()?
            .json::<CsrfResponse>()
            .await?;

        if response.csrf_token.is_empty() {
            return Err(SignInError::Csrf("empty token".to_string()));
        }
        Ok(response.csrf_token)
    }

    /// Resolves the provider url without navigating to it.
    pub async fn authorization_url(&self, provider: Provider) -> SignInResult<Url> {
        let providers = self.providers().await?;
        if !providers.contains_key(provider.id()) {
            return Err(SignInError::UnknownProvider(provider.id().to_string()));
        }

        let csrf_token = self.csrf_token().await?;
        debug!("Requesting {} sign-in url", provider);

        let response = self
            .client
            .post(self.endpoint(&format!("{SIGNIN_PATH}/{}", provider.id()))?)
            .header("X-Auth-Return-Redirect", "1")
            .form(&[
                ("csrfToken", csrf_token.as_str()),
                ("callbackUrl", self.callback_url.as_str()),
                ("json", "true"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<SignInResponse>()
            .await?;

        let url = Url::parse(&response.url)
            .map_err(|e| SignInError::Rejected(format!("malformed redirect: {e}")))?;

        if let Some((_, reason)) = url.query_pairs().find(|(key, _)| key == "error") {
            return Err(SignInError::Rejected(reason.into_owned()));
        }
        // The server bounces back to its own sign-in page when the CSRF
        // cookie and the posted token disagree.
        if url.query_pairs().any(|(key, value)| key == "csrf" && value == "true") {
            return Err(SignInError::Csrf("token rejected by auth server".to_string()));
        }

        Ok(url)
    }

    async fn run(self, provider: Provider) -> SignInResult<()> {
        let url = self.authorization_url(provider).await?;
        self.navigator.navigate(&url)?;
        info!("Handed {} sign-in off to the browser", provider);
        Ok(())
    }
}

impl SignIn for NextAuthClient {
    fn sign_in(&self, provider: Provider) -> BoxFuture<'static, SignInResult<()>> {
        self.clone().run(provider).boxed()
    }
}
