use poem::web::cookie::{Cookie, CookieJar, SameSite};
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;
use std::time::Duration;

use crate::api::TOKEN_COOKIE;
use crate::errors::ApiError;
use crate::services::TokenService;
use crate::types::dto::auth::{AuthAck, IssueTokenRequest};

/// Authentication API endpoints
pub struct AuthApi {
    token_service: Arc<TokenService>,
    production: bool,
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

impl AuthApi {
    /// Create a new AuthApi
    ///
    /// `production` selects the cross-site cookie mode: Secure +
    /// SameSite=None when true, SameSite=Strict otherwise.
    pub fn new(token_service: Arc<TokenService>, production: bool) -> Self {
        Self {
            token_service,
            production,
        }
    }

    fn session_cookie(&self, value: String) -> Cookie {
        let mut cookie = Cookie::new_with_str(TOKEN_COOKIE, value);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_secure(self.production);
        cookie.set_same_site(if self.production {
            SameSite::None
        } else {
            SameSite::Strict
        });
        cookie
    }
}

#[OpenApi]
impl AuthApi {
    /// Issue a session credential for the submitted identity claim
    ///
    /// The signed token is delivered as an HTTP-only cookie; its one-day
    /// expiry is encoded inside the token, not as a cookie max-age.
    #[oai(path = "/jwt", method = "post", tag = "AuthTags::Authentication")]
    async fn issue_token(
        &self,
        cookie_jar: &CookieJar,
        body: Json<IssueTokenRequest>,
    ) -> Result<Json<AuthAck>, ApiError> {
        let token = self.token_service.issue(&body.email)?;

        cookie_jar.add(self.session_cookie(token));

        Ok(Json(AuthAck { success: true }))
    }

    /// Revoke the session credential
    ///
    /// Expires the cookie immediately. A copy of the token kept by the
    /// caller stays cryptographically valid until its natural expiry; there
    /// is no server-side revocation list.
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(&self, cookie_jar: &CookieJar) -> Json<AuthAck> {
        let mut cookie = self.session_cookie(String::new());
        cookie.set_max_age(Duration::from_secs(0));
        cookie_jar.add(cookie);

        Json(AuthAck { success: true })
    }
}
