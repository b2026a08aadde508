// tests/support/mocks/ports.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use blogsmith::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{security::PasswordHasher, time::Clock, util::DigitSource},
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Stores passwords with a marker prefix; argon2 is too slow for every request.
pub struct PlainPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain${password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Starts at 2024-05-01 and moves one second forward on every call, so rows
/// created in sequence have strictly increasing timestamps.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

/// Replays a fixed digit sequence, cycling when exhausted.
pub struct ScriptedDigits {
    digits: Mutex<Vec<u8>>,
    cursor: AtomicUsize,
}

impl ScriptedDigits {
    pub fn new(digits: &[u8]) -> Self {
        assert!(!digits.is_empty(), "digit script cannot be empty");
        Self {
            digits: Mutex::new(digits.to_vec()),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl DigitSource for ScriptedDigits {
    fn next_digit(&self) -> u8 {
        let digits = self.digits.lock().unwrap();
        let index = self.cursor.fetch_add(1, Ordering::SeqCst) % digits.len();
        digits[index]
    }
}
