// Auxiliary card fields - future expiry dates and security codes

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

/// Generated expiries land at most this many months ahead.
pub const MAX_MONTHS_AHEAD: u32 = 60;

/// Standard CVV/CVC length.
pub const DEFAULT_CVV_LENGTH: usize = 3;

/// Pick a uniformly random expiry 1-60 months after `now`, normalizing
/// month overflow into year increments. Returns a zero-padded 2-digit month
/// and a 4-digit year.
pub fn future_month_year<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> (String, String) {
    let months_ahead = rng.random_range(1..=MAX_MONTHS_AHEAD);

    let mut month = now.month() + months_ahead;
    let mut year = now.year();
    while month > 12 {
        month -= 12;
        year += 1;
    }

    (format!("{month:02}"), format!("{year:04}"))
}

/// Draw `length` independent uniform decimal digits. Returned as a string
/// so leading zeros survive.
pub fn security_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| (b'0' + rng.random_range(0u8..10)) as char)
        .collect()
}
