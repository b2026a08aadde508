// tests/support/mocks/mod.rs
pub mod ports;
pub mod storage;

pub use ports::{PlainPasswordHasher, ScriptedDigits, SteppingClock};
pub use storage::InMemoryFileStorage;
