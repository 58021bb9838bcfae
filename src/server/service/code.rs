//! One-time code service for passwordless login, password reset and first-run setup.
//!
//! Codes live only in memory, so a restart invalidates every outstanding code. Each kind has
//! its own TTL and every code is single use. Expired entries are dropped lazily when touched.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

/// Login codes expire after ten minutes.
pub const LOGIN_CODE_TTL: Duration = Duration::from_secs(10 * 60);

/// Password reset tokens expire after thirty minutes.
pub const RESET_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// The first-run setup code expires after fifteen minutes.
pub const SETUP_CODE_TTL: Duration = Duration::from_secs(15 * 60);

/// Wrong guesses tolerated before a login code is discarded.
const MAX_LOGIN_ATTEMPTS: u8 = 5;

const LOGIN_CODE_LENGTH: usize = 6;
const TOKEN_LENGTH: usize = 32;

#[derive(Clone)]
struct LoginCode {
    code: String,
    expires_at: Instant,
    failed_attempts: u8,
}

#[derive(Clone)]
struct ResetToken {
    user_id: i32,
    expires_at: Instant,
}

#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

/// Issues and validates the application's short-lived codes.
///
/// - Login codes: six digits, keyed by normalised e-mail; a new request replaces the old code.
/// - Reset tokens: 32 alphanumeric characters, each bound to a user id.
/// - Setup code: 32 alphanumeric characters, at most one outstanding.
#[derive(Clone)]
pub struct OneTimeCodeService {
    login_codes: Arc<RwLock<HashMap<String, LoginCode>>>,
    reset_tokens: Arc<RwLock<HashMap<String, ResetToken>>>,
    setup_code: Arc<RwLock<Option<SetupCode>>>,
}

impl OneTimeCodeService {
    pub fn new() -> Self {
        Self {
            login_codes: Arc::new(RwLock::new(HashMap::new())),
            reset_tokens: Arc::new(RwLock::new(HashMap::new())),
            setup_code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a six-digit login code for `email`, replacing any earlier one.
    ///
    /// # Returns
    /// - `String` - The generated code
    pub async fn issue_login_code(&self, email: &str) -> String {
        let code = Self::generate_digits(LOGIN_CODE_LENGTH);

        self.login_codes.write().await.insert(
            email.to_string(),
            LoginCode {
                code: code.clone(),
                expires_at: Instant::now() + LOGIN_CODE_TTL,
                failed_attempts: 0,
            },
        );

        code
    }

    /// Checks `input` against the code issued for `email` and consumes it on success.
    ///
    /// Expired codes are removed. A code is also removed after too many wrong guesses.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No code, wrong code or expired code
    pub async fn consume_login_code(&self, email: &str, input: &str) -> bool {
        let mut codes = self.login_codes.write().await;

        let Some(stored) = codes.get_mut(email) else {
            return false;
        };

        if Instant::now() >= stored.expires_at {
            codes.remove(email);
            return false;
        }

        if stored.code == input.trim() {
            codes.remove(email);
            return true;
        }

        stored.failed_attempts += 1;
        if stored.failed_attempts >= MAX_LOGIN_ATTEMPTS {
            codes.remove(email);
        }

        false
    }

    /// Generates a password reset token bound to `user_id`.
    pub async fn issue_reset_token(&self, user_id: i32) -> String {
        let token = Self::generate_token();

        let mut tokens = self.reset_tokens.write().await;
        let now = Instant::now();
        tokens.retain(|_, t| t.expires_at > now);
        tokens.insert(
            token.clone(),
            ResetToken {
                user_id,
                expires_at: now + RESET_TOKEN_TTL,
            },
        );

        token
    }

    /// Consumes a reset token.
    ///
    /// # Returns
    /// - `Some(user_id)` - Token was valid; it can not be used again
    /// - `None` - Unknown or expired token
    pub async fn consume_reset_token(&self, token: &str) -> Option<i32> {
        let stored = self.reset_tokens.write().await.remove(token.trim())?;

        if Instant::now() >= stored.expires_at {
            return None;
        }

        Some(stored.user_id)
    }

    /// Generates a new setup code, replacing any earlier one.
    pub async fn generate_setup_code(&self) -> String {
        let code = Self::generate_token();

        *self.setup_code.write().await = Some(SetupCode {
            code: code.clone(),
            expires_at: Instant::now() + SETUP_CODE_TTL,
        });

        code
    }

    /// Validates the setup code and consumes it on success.
    pub async fn validate_and_consume_setup_code(&self, input: &str) -> bool {
        let mut code = self.setup_code.write().await;

        if let Some(stored) = code.as_ref() {
            if Instant::now() >= stored.expires_at {
                *code = None;
                return false;
            }

            if stored.code == input.trim() {
                *code = None;
                return true;
            }
        }

        false
    }

    fn generate_digits(length: usize) -> String {
        let mut rng = rand::rng();

        (0..length)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }

    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

impl Default for OneTimeCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const EMAIL: &str = "ana@example.com";

    #[tokio::test]
    async fn login_code_is_six_digits() {
        let service = OneTimeCodeService::new();
        let code = service.issue_login_code(EMAIL).await;

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn login_code_is_single_use() {
        let service = OneTimeCodeService::new();
        let code = service.issue_login_code(EMAIL).await;

        assert!(service.consume_login_code(EMAIL, &code).await);
        assert!(!service.consume_login_code(EMAIL, &code).await);
    }

    #[tokio::test]
    async fn login_code_is_bound_to_email() {
        let service = OneTimeCodeService::new();
        let code = service.issue_login_code(EMAIL).await;

        assert!(!service.consume_login_code("outro@example.com", &code).await);
        assert!(service.consume_login_code(EMAIL, &code).await);
    }

    #[tokio::test]
    async fn newer_login_code_replaces_older() {
        let service = OneTimeCodeService::new();
        let first = service.issue_login_code(EMAIL).await;
        let second = service.issue_login_code(EMAIL).await;

        if first != second {
            assert!(!service.consume_login_code(EMAIL, &first).await);
        }
        assert!(service.consume_login_code(EMAIL, &second).await);
    }

    #[tokio::test]
    async fn too_many_wrong_guesses_discard_code() {
        let service = OneTimeCodeService::new();
        let code = service.issue_login_code(EMAIL).await;
        let wrong = if code == "000000" { "111111" } else { "000000" };

        for _ in 0..MAX_LOGIN_ATTEMPTS {
            assert!(!service.consume_login_code(EMAIL, wrong).await);
        }

        assert!(!service.consume_login_code(EMAIL, &code).await);
    }

    #[tokio::test(start_paused = true)]
    async fn login_code_expires_after_ten_minutes() {
        let service = OneTimeCodeService::new();
        let code = service.issue_login_code(EMAIL).await;

        advance(LOGIN_CODE_TTL + Duration::from_secs(1)).await;

        assert!(!service.consume_login_code(EMAIL, &code).await);
    }

    #[tokio::test(start_paused = true)]
    async fn login_code_valid_just_before_expiry() {
        let service = OneTimeCodeService::new();
        let code = service.issue_login_code(EMAIL).await;

        advance(LOGIN_CODE_TTL - Duration::from_secs(1)).await;

        assert!(service.consume_login_code(EMAIL, &code).await);
    }

    #[tokio::test]
    async fn reset_token_returns_user_once() {
        let service = OneTimeCodeService::new();
        let token = service.issue_reset_token(42).await;

        assert_eq!(token.len(), 32);
        assert_eq!(service.consume_reset_token(&token).await, Some(42));
        assert_eq!(service.consume_reset_token(&token).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_token_expires_after_thirty_minutes() {
        let service = OneTimeCodeService::new();
        let token = service.issue_reset_token(7).await;

        advance(RESET_TOKEN_TTL + Duration::from_secs(1)).await;

        assert_eq!(service.consume_reset_token(&token).await, None);
    }

    #[tokio::test]
    async fn setup_code_is_single_use() {
        let service = OneTimeCodeService::new();
        let code = service.generate_setup_code().await;

        assert!(!service.validate_and_consume_setup_code("wrong").await);
        assert!(service.validate_and_consume_setup_code(&code).await);
        assert!(!service.validate_and_consume_setup_code(&code).await);
    }

    #[tokio::test(start_paused = true)]
    async fn setup_code_expires() {
        let service = OneTimeCodeService::new();
        let code = service.generate_setup_code().await;

        advance(SETUP_CODE_TTL + Duration::from_secs(1)).await;

        assert!(!service.validate_and_consume_setup_code(&code).await);
    }
}
