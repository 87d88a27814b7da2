//! Identity verification and first-login registration.
//!
//! The client signs in with the identity provider and sends the resulting ID token.
//! The token is verified against the provider's token-info endpoint; the verified
//! email then gets a bare student row on first login.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    data::student::StudentRepository,
    error::{auth::AuthError, AppError},
    model::identity::VerifiedIdentity,
};

/// Verifies ID tokens issued by the identity provider.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verifies `id_token`.
    ///
    /// # Returns
    /// - `Ok(VerifiedIdentity)` - Token is valid for the configured audience
    /// - `Err(AppError::AuthErr)` - Token rejected, issued for another audience, or without email
    /// - `Err(AppError::ReqwestErr)` - Provider could not be reached
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AppError>;
}

/// Claims returned by the token-info endpoint.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: Option<String>,
    /// `"true"`/`"false"` on Google's endpoint, a boolean on some others.
    email_verified: Option<serde_json::Value>,
    picture: Option<String>,
}

impl TokenInfo {
    /// An email is unverified only when the provider says so explicitly.
    fn email_unverified(&self) -> bool {
        match &self.email_verified {
            None => false,
            Some(serde_json::Value::Bool(verified)) => !verified,
            Some(serde_json::Value::String(verified)) => verified != "true",
            Some(_) => true,
        }
    }
}

/// `IdentityVerifier` asking the provider's token-info endpoint.
pub struct TokenInfoVerifier {
    client: reqwest::Client,
    tokeninfo_url: String,
    audience: String,
}

impl TokenInfoVerifier {
    pub fn new(client: reqwest::Client, tokeninfo_url: String, audience: String) -> Self {
        Self {
            client,
            tokeninfo_url,
            audience,
        }
    }
}

#[async_trait]
impl IdentityVerifier for TokenInfoVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AppError> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("Token-info endpoint answered {}", response.status());
            return Err(AuthError::InvalidIdentityToken.into());
        }

        let info = response
            .json::<TokenInfo>()
            .await
            .map_err(|_| AuthError::InvalidIdentityToken)?;
        if info.aud != self.audience {
            return Err(AuthError::AudienceMismatch(info.aud).into());
        }
        if info.email_unverified() {
            return Err(AuthError::UnverifiedEmail.into());
        }
        let email = info
            .email
            .filter(|email| !email.is_empty())
            .ok_or(AuthError::MissingEmail)?;

        Ok(VerifiedIdentity {
            email,
            picture: info.picture,
        })
    }
}

pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
    verifier: &'a dyn IdentityVerifier,
}

impl<'a> IdentityService<'a> {
    pub fn new(db: &'a DatabaseConnection, verifier: &'a dyn IdentityVerifier) -> Self {
        Self { db, verifier }
    }

    /// Verifies `id_token` and registers the email on first login.
    ///
    /// An existing student row is never modified, so the provider picture only
    /// becomes the photo URL of new students.
    ///
    /// # Returns
    /// - `Ok(VerifiedIdentity)` - Verified email and picture
    /// - `Err(AppError::AuthErr)` - Token rejected
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, id_token: &str) -> Result<VerifiedIdentity, AppError> {
        let identity = self.verifier.verify(id_token).await?;
        let repo = StudentRepository::new(self.db);

        if repo.find_by_email(&identity.email).await?.is_none() {
            repo.create_if_absent(&identity.email, identity.picture.clone())
                .await?;
            tracing::info!("Registered student {} on first login", identity.email);
        }

        Ok(identity)
    }

    /// Registers `email` without a token, leaving existing rows untouched.
    pub async fn signup(&self, email: &str) -> Result<(), AppError> {
        StudentRepository::new(self.db)
            .create_if_absent(email, None)
            .await?;

        Ok(())
    }
}
