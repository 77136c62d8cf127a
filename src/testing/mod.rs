// Unit-test helpers: real (signed) tokens so the codec exercises the same
// shapes the backend emits.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;

const TEST_SECRET: &[u8] = b"opsdeck-test-secret";

/// Mint a compact token with the given claim payload.
pub fn mint_token(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("test token encodes")
}

/// Claims plus an `exp` far in the future.
pub fn valid_token(mut claims: Value) -> String {
    if let Some(map) = claims.as_object_mut() {
        map.insert("exp".to_string(), Value::from(4_000_000_000i64));
    }
    mint_token(claims)
}

/// Claims plus an `exp` in the past.
pub fn expired_token(mut claims: Value) -> String {
    if let Some(map) = claims.as_object_mut() {
        map.insert("exp".to_string(), Value::from(1_000i64));
    }
    mint_token(claims)
}
