// Bearer token claim decoding and projection.
//
// The client never verifies token signatures; the backend is the authority.
// Decoding here only parses the payload segment so the session layer can read
// claims, which matches how the web dashboard treats tokens. Every malformed
// input degrades to `None`, never a panic.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::{Map, Value};

use crate::models::auth::CurrentUser;

/// Candidate claim keys for the subject (user id), in priority order.
pub const SUBJECT_CLAIM_KEYS: &[&str] = &[
    "sub",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier",
];

/// Candidate claim keys for the email address, in priority order.
pub const EMAIL_CLAIM_KEYS: &[&str] = &[
    "email",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress",
];

/// Candidate claim keys for roles, in priority order. The URI form is what
/// the ASP.NET backend emits for role claims.
pub const ROLE_CLAIM_KEYS: &[&str] = &[
    "role",
    "roles",
    "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
];

pub const COMPANY_ID_CLAIM_KEYS: &[&str] = &["companyId", "company_id"];

pub const USER_CODE_CLAIM_KEYS: &[&str] = &["userCode", "user_code"];

/// Fallback primary role when a token carries no role claim at all.
pub const DEFAULT_ROLE: &str = "user";

/// Parsed claim payload of a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedClaims(Map<String, Value>);

impl DecodedClaims {
    /// Parse the claim payload of a compact-serialized token.
    ///
    /// Returns `None` for any malformed input: wrong segment count, invalid
    /// base64url, payload that is not a JSON object.
    pub fn decode(token: &str) -> Option<Self> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next()) {
            (Some(_), Some(payload)) if !payload.is_empty() => payload,
            _ => return None,
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(claims)) => Some(Self(claims)),
            _ => None,
        }
    }

    /// Raw claim value by exact key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Resolve the first non-empty trimmed string across `keys` in order.
    ///
    /// Supports both scalar and array claim shapes; for arrays the first
    /// non-empty string element wins. Returns an empty string when nothing
    /// matches.
    pub fn first_string(&self, keys: &[&str]) -> String {
        for key in keys {
            match self.0.get(*key) {
                Some(Value::String(value)) if !value.trim().is_empty() => {
                    return value.trim().to_string();
                }
                Some(Value::Array(items)) => {
                    if let Some(found) = items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::trim)
                        .find(|s| !s.is_empty())
                    {
                        return found.to_string();
                    }
                }
                _ => {}
            }
        }
        String::new()
    }

    /// Resolve every role claim into an ordered, deduplicated list.
    ///
    /// String values are split on commas and trimmed; array values keep only
    /// their string entries. Keys are scanned in priority order and the
    /// first-seen spelling of a role wins (dedup is case-insensitive, case is
    /// preserved).
    pub fn roles(&self) -> Vec<String> {
        let mut resolved: Vec<String> = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        for key in ROLE_CLAIM_KEYS {
            let candidates: Vec<String> = match self.0.get(*key) {
                Some(Value::String(value)) => value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
                _ => Vec::new(),
            };

            for role in candidates {
                let folded = role.to_lowercase();
                if !seen.contains(&folded) {
                    seen.push(folded);
                    resolved.push(role);
                }
            }
        }

        resolved
    }

    /// Expiry claim in epoch seconds, when present and numeric.
    pub fn expiry(&self) -> Option<i64> {
        let value = self.0.get("exp")?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|secs| secs as i64))
    }

    /// A token with no parsable `exp` claim counts as expired.
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expiry() {
            Some(exp) => exp < now,
            None => true,
        }
    }

    /// Project the claims into the session's `CurrentUser` shape.
    pub fn to_current_user(&self) -> CurrentUser {
        let role = self
            .roles()
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        CurrentUser {
            id: self.first_string(SUBJECT_CLAIM_KEYS),
            email: self.first_string(EMAIL_CLAIM_KEYS),
            role,
            company_id: self.first_string(COMPANY_ID_CLAIM_KEYS),
            user_code: self.first_string(USER_CODE_CLAIM_KEYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mint_token;
    use serde_json::json;

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert!(DecodedClaims::decode("").is_none());
        assert!(DecodedClaims::decode("not-a-token").is_none());
        assert!(DecodedClaims::decode("a.!!!.c").is_none());
        // Valid base64 but the payload is a JSON array, not an object
        let bogus = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"[1,2]"));
        assert!(DecodedClaims::decode(&bogus).is_none());
    }

    #[test]
    fn decode_reads_real_token_payloads() {
        let token = mint_token(json!({ "sub": "u-1", "email": "a@b.c", "exp": 4_000_000_000i64 }));
        let claims = DecodedClaims::decode(&token).expect("decodes");
        assert_eq!(claims.first_string(SUBJECT_CLAIM_KEYS), "u-1");
        assert_eq!(claims.first_string(EMAIL_CLAIM_KEYS), "a@b.c");
    }

    #[test]
    fn roles_split_trim_and_dedupe() {
        let token = mint_token(json!({ "role": "admin, finance", "exp": 4_000_000_000i64 }));
        let claims = DecodedClaims::decode(&token).unwrap();
        assert_eq!(claims.roles(), vec!["admin", "finance"]);
    }

    #[test]
    fn roles_merge_across_keys_in_priority_order() {
        let token = mint_token(json!({
            "role": "admin",
            "roles": ["finance", "Admin", 42],
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "ops"
        }));
        let claims = DecodedClaims::decode(&token).unwrap();
        // "Admin" collapses into the first-seen "admin"; the numeric entry is dropped
        assert_eq!(claims.roles(), vec!["admin", "finance", "ops"]);
    }

    #[test]
    fn first_string_falls_through_to_uri_keys_and_arrays() {
        let token = mint_token(json!({
            "email": "  ",
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress": ["", " ops@shop.in "]
        }));
        let claims = DecodedClaims::decode(&token).unwrap();
        assert_eq!(claims.first_string(EMAIL_CLAIM_KEYS), "ops@shop.in");
        assert_eq!(claims.first_string(COMPANY_ID_CLAIM_KEYS), "");
    }

    #[test]
    fn expiry_rules() {
        let missing = DecodedClaims::decode(&mint_token(json!({ "sub": "x" }))).unwrap();
        assert!(missing.is_expired(0));

        let non_numeric = DecodedClaims::decode(&mint_token(json!({ "exp": "soon" }))).unwrap();
        assert!(non_numeric.is_expired(0));

        let past = DecodedClaims::decode(&mint_token(json!({ "exp": 100 }))).unwrap();
        assert!(past.is_expired(200));
        assert!(!past.is_expired(50));
    }

    #[test]
    fn projection_defaults_primary_role_to_user() {
        let token = mint_token(json!({
            "sub": "u-9",
            "companyId": "c-3",
            "user_code": "UC-7",
            "exp": 4_000_000_000i64
        }));
        let user = DecodedClaims::decode(&token).unwrap().to_current_user();
        assert_eq!(user.id, "u-9");
        assert_eq!(user.role, DEFAULT_ROLE);
        assert_eq!(user.company_id, "c-3");
        assert_eq!(user.user_code, "UC-7");
    }
}
