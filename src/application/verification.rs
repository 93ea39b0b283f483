//! Feedback-form transcription check.
//!
//! A six-character code the submitter must copy before a ticket is
//! accepted. This is a nuisance filter against drive-by form spam, not a
//! security boundary: the code lives client-side and is trivially
//! bypassable by anything that is not a plain form post.

use rand::Rng;

pub const CODE_LEN: usize = 6;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone)]
pub struct CaptchaChallenge {
    code: String,
    verified: bool,
}

impl Default for CaptchaChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptchaChallenge {
    pub fn new() -> Self {
        Self {
            code: generate_code(),
            verified: false,
        }
    }

    /// The code the form renders for transcription.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Case-insensitive exact match; sets and returns the verified flag.
    pub fn verify(&mut self, input: &str) -> bool {
        self.verified = input.trim().eq_ignore_ascii_case(&self.code);
        self.verified
    }

    /// Draw a fresh code and drop any prior verification. Codes are
    /// independent draws, so a collision with the previous code is
    /// possible but vanishingly unlikely.
    pub fn refresh(&mut self) {
        self.code = generate_code();
        self.verified = false;
    }
}

fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
