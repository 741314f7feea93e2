use oauthsign_core::time::{now, unix_timestamp};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated nonces.
///
/// 32 alphanumeric characters carry about 190 bits, above the 128 bits
/// a nonce needs.
const NONCE_LEN: usize = 32;

/// Generate a fresh alphanumeric nonce from the thread local CSPRNG.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// Current unix time in seconds.
pub fn generate_timestamp() -> i64 {
    unix_timestamp(now())
}
