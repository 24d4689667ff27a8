//! # Token inspection
//!
//! Reads the `exp` claim of a bearer token to decide whether it is still
//! usable. The client holds no signing key, so the signature is not verified;
//! the backend remains the authority and rejects forged tokens itself.
//!
//! Inspection is fail-closed: a token that does not decode as a JWT, or whose
//! payload has no positive `exp`, is reported as expired.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

#[derive(Deserialize)]
struct ExpiryClaim {
    #[serde(default)]
    exp: Option<f64>,
}

/// The token's `exp` claim in Unix seconds, if it has a usable one.
///
/// Kept as sent: a fractional claim is not rounded.
pub fn expiry(token: &str) -> Option<f64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data =
        jsonwebtoken::decode::<ExpiryClaim>(token, &DecodingKey::from_secret(&[]), &validation)
            .ok()?;
    match data.claims.exp {
        Some(exp) if exp.is_finite() && exp > 0.0 => Some(exp),
        _ => None,
    }
}

/// Whether the token is expired at `now` (Unix seconds).
///
/// Expired when the claim is at or before `now`, or when there is no claim.
pub fn is_expired_at(token: &str, now: u64) -> bool {
    match expiry(token) {
        Some(exp) => exp <= now as f64,
        None => true,
    }
}

/// Whether the token is expired by the wall clock.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_secs())
}

/// Current Unix time in seconds.
pub fn now_secs() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
