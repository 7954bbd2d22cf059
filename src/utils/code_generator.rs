//! Short code generation.
//!
//! Codes are random bytes encoded as URL-safe base64 without padding, so they
//! only contain `A-Z`, `a-z`, `0-9`, `-` and `_`. They are not unique by
//! construction: the store's unique constraint is the final arbiter and the
//! resolver retries on collision.

use base64::Engine as _;
use rand::RngCore;

/// Default number of random bytes per code (8 characters once encoded).
pub const DEFAULT_CODE_BYTES: usize = 6;

/// Bounds accepted for the number of random bytes.
pub const MIN_CODE_BYTES: usize = 3;
pub const MAX_CODE_BYTES: usize = 24;

/// Codes that would shadow a fixed route.
pub const RESERVED_CODES: &[&str] = &["shorten", "urls", "health", "api"];

/// Returns whether `code` is reserved for a system endpoint.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Source of new short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh candidate code.
    fn generate(&self) -> String;
}

/// Generates codes from the thread-local CSPRNG.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    bytes: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes from `bytes` random bytes.
    ///
    /// `bytes` is clamped to [`MIN_CODE_BYTES`]..=[`MAX_CODE_BYTES`].
    pub fn new(bytes: usize) -> Self {
        Self {
            bytes: bytes.clamp(MIN_CODE_BYTES, MAX_CODE_BYTES),
        }
    }

    /// Length of the codes this generator produces.
    pub fn code_len(&self) -> usize {
        encoded_len(self.bytes)
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_BYTES)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut buffer = vec![0u8; self.bytes];
        rand::rng().fill_bytes(&mut buffer);

        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
    }
}

/// Unpadded base64 length for `bytes` input bytes.
fn encoded_len(bytes: usize) -> usize {
    (bytes * 4).div_ceil(3)
}
