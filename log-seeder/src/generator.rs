use chrono::{DateTime, Utc};
use rand::{Rng, seq::IndexedRandom};
use serde::Serialize;

pub const METHODS: [(&str, u8); 5] = [
    ("GET", 6),
    ("POST", 2),
    ("PUT", 1),
    ("PATCH", 1),
    ("DELETE", 1),
];
pub const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/status", 20),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];

/// One nginx access-log document, shaped the way the reporter expects
/// (`method` and `path` plus the usual extras).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogRecord {
    pub ip: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub bytes: u64,
    pub timestamp: DateTime<Utc>,
}

pub fn generate_log_record<R: Rng + ?Sized>(rng: &mut R) -> LogRecord {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let bytes = rng.random_range(100..2000);

    LogRecord {
        ip,
        method: method.to_string(),
        path: path.to_string(),
        status,
        bytes,
        timestamp: Utc::now(),
    }
}
