use chrono::{Datelike, NaiveDate};

/// Maps a local calendar date and a mode key to a stable catalog index in
/// `[0, n)`. Every call with the same date, key, and size yields the same
/// index regardless of clock time, so the whole player base sees the same
/// daily target.
///
/// DJB2 rolling hash over a `day_month_year_key` composite, with the same
/// 32-bit two's-complement wraparound the original web build relied on. The
/// composite uses the absolute four-digit year; a two-digit year would let
/// dates a century apart alias onto one index.
///
/// An empty catalog is a caller contract violation, not a recoverable state.
pub fn select_index(date: NaiveDate, key: &str, n: usize) -> usize {
    assert!(n > 0, "select_index requires a non-empty catalog");

    let combined = format!(
        "{}_{}_{}_{}",
        date.day(),
        date.month0(),
        date.year(),
        key
    );

    let mut hash: i32 = 5381;
    for byte in combined.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(i32::from(byte));
    }

    hash.unsigned_abs() as usize % n
}
