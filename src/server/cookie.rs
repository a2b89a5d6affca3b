//! HMAC-signed session cookie.
//!
//! The cookie value is `<token>.<hex signature>` where the token is an opaque
//! uuid and the signature is HMAC-SHA256 over the token with the configured
//! session secret. The server never trusts an unverified token.

use axum::http::{header, HeaderMap};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::session;

type HmacSha256 = Hmac<Sha256>;

pub const SESSION_COOKIE: &str = "medimate_session";

pub fn sign(secret: &str, token: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a cookie value and return the embedded token when the signature holds.
pub fn verify(secret: &str, value: &str) -> Option<String> {
    let (token, signature) = value.rsplit_once('.')?;
    if token.is_empty() {
        return None;
    }

    let expected = hex::decode(signature).ok()?;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(token.as_bytes());
    mac.verify_slice(&expected).ok()?;

    Some(token.to_string())
}

pub fn cookie_value(secret: &str, token: &str) -> String {
    format!("{}.{}", token, sign(secret, token))
}

/// Resolve the session token from the request, minting a fresh signed token
/// when the cookie is missing or fails verification. Returns the token and,
/// for fresh tokens, the Set-Cookie header to issue.
pub fn establish(secret: &str, headers: &HeaderMap) -> (String, Option<String>) {
    if let Some(value) = cookie_from_headers(headers) {
        if let Some(token) = verify(secret, &value) {
            return (token, None);
        }
    }

    let token = session::new_session_id();
    let set_cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE,
        cookie_value(secret, &token)
    );
    (token, Some(set_cookie))
}

fn cookie_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}
