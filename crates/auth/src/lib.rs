pub mod client;
pub mod error;
pub mod provider;

pub use client::{BrowserNavigator, Navigate, NextAuthClient, SignIn};
pub use error::{SignInError, SignInResult, SIGN_IN_FAILED};
pub use provider::Provider;
