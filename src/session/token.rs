// src/session/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;
const REPORT_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const REPORT_ID_LEN: usize = 9;

/// Session id for the `sid` cookie, drawn from the OS RNG.
pub fn generate_session_token() -> String {
    let mut rng = OsRng;
    generate_token(&mut rng, SESSION_TOKEN_BYTES)
}

/// URL-safe Base64 of `nbytes` random bytes, without padding.
/// 32 bytes give a 43 character token.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// The store only ever sees this hash, never the cookie value itself.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Printed on every analysis report, e.g. `PMC-7K2Q9XZ1A`.
pub fn generate_report_id<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..REPORT_ID_LEN)
        .map(|_| REPORT_ID_ALPHABET[rng.gen_range(0..REPORT_ID_ALPHABET.len())] as char)
        .collect();
    format!("PMC-{suffix}")
}
