use crate::{domain::SubmissionResult, state::AppState};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, IntoResponseParts, Response, ResponseParts},
};
use axum_extra::extract::SignedCookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use cookie::{Cookie, SameSite};
use http::StatusCode;
use std::time::Duration;

const HANDOFF_COOKIE: &str = "_lead_handoff";

/// Cookie attributes for the lead handoff.
#[derive(Debug, Clone)]
pub struct HandoffSettings {
    ttl_seconds: i64,
    secure: bool,
}

impl HandoffSettings {
    /// Fails when `ttl` does not fit the signed seconds of a cookie `Max-Age`.
    pub fn new(ttl: Duration, secure: bool) -> Result<Self, HandoffError> {
        let ttl_seconds = i64::try_from(ttl.as_secs())
            .map_err(|_| HandoffError::TtlOutOfRange(ttl.as_secs()))?;
        Ok(Self {
            ttl_seconds,
            secure,
        })
    }
}

/// Carries a [`SubmissionResult`] from the lead form to the confirmation
/// page in a signed, short-lived cookie, so the email address never shows up
/// in a URL.
///
/// Like any cookie jar this **MUST** be returned as part of the response.
#[derive(Clone)]
pub struct SubmissionHandoff {
    cookie_jar: SignedCookieJar,
    settings: HandoffSettings,
}

impl SubmissionHandoff {
    /// Store `result` for the next page to pick up.
    pub fn hand_off(self, result: &SubmissionResult) -> Result<Self, HandoffError> {
        let payload = HandoffPayload {
            issued_at: Utc::now().timestamp(),
            result: result.clone(),
        };
        let value = payload.encode()?;
        let max_age = cookie::time::Duration::seconds(self.settings.ttl_seconds);

        let cookie = Cookie::build(HANDOFF_COOKIE, value)
            .max_age(max_age)
            .secure(self.settings.secure)
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .finish();
        Ok(Self {
            cookie_jar: self.cookie_jar.add(cookie),
            settings: self.settings,
        })
    }

    /// Remove the pending result from the jar and return it. A missing,
    /// forged, undecodable or expired value yields `None`.
    pub fn take(self) -> (Self, Option<SubmissionResult>) {
        let Some(cookie) = self.cookie_jar.get(HANDOFF_COOKIE) else {
            return (self, None);
        };

        let result = match HandoffPayload::decode(cookie.value()) {
            Ok(payload) if payload.is_fresh(Utc::now().timestamp(), self.settings.ttl_seconds) => {
                Some(payload.result)
            }
            Ok(_) => {
                tracing::info!("Discarding an expired lead handoff");
                None
            }
            Err(e) => {
                tracing::warn!(
                    error.message = %e,
                    error.cause_chain = ?e,
                    "Failed to decode the lead handoff"
                );
                None
            }
        };

        let removal = Cookie::build(HANDOFF_COOKIE, "").path("/").finish();
        let handoff = Self {
            cookie_jar: self.cookie_jar.remove(removal),
            settings: self.settings,
        };
        (handoff, result)
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct HandoffPayload {
    issued_at: i64,
    result: SubmissionResult,
}

impl HandoffPayload {
    fn encode(&self) -> Result<String, HandoffError> {
        let json = serde_json::to_vec(self).map_err(HandoffError::Serialize)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    fn decode(value: &str) -> Result<Self, HandoffError> {
        let json = URL_SAFE_NO_PAD
            .decode(value)
            .map_err(HandoffError::Decode)?;
        serde_json::from_slice(&json).map_err(HandoffError::Deserialize)
    }

    fn is_fresh(&self, now: i64, ttl_seconds: i64) -> bool {
        let age = now.saturating_sub(self.issued_at);
        (0..=ttl_seconds).contains(&age)
    }
}

impl IntoResponseParts for SubmissionHandoff {
    type Error = <SignedCookieJar as IntoResponseParts>::Error;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.cookie_jar.into_response_parts(res)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SubmissionHandoff {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        use axum::RequestPartsExt;
        let cookie_jar = parts
            .extract_with_state::<SignedCookieJar, AppState>(state)
            .await
            .map_err(|e| {
                tracing::error!("{e:?}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?;

        Ok(SubmissionHandoff {
            cookie_jar,
            settings: state.handoff_settings().as_ref().clone(),
        })
    }
}

#[derive(thiserror::Error)]
pub enum HandoffError {
    #[error("Failed to serialize the lead handoff")]
    Serialize(#[source] serde_json::Error),
    #[error("Lead handoff is not valid base64")]
    Decode(#[source] base64::DecodeError),
    #[error("Lead handoff does not hold a submission result")]
    Deserialize(#[source] serde_json::Error),
    #[error("Handoff lifetime of {0} seconds is too long")]
    TtlOutOfRange(u64),
}
