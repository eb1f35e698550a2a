//! Purpose: Pseudo-random integers and collision-prone string identifiers.
//! Exports: `rand_int`, `unique_id`.
//! Role: Convenience helpers for test fixtures and log correlation.
//! Invariants: Draws are uniform across the requested range (no modulo bias).
//! Invariants: Identifiers are unique-ish, not cryptographic; collisions are
//! acceptable by contract.

use getrandom::fill as fill_random;
use time::OffsetDateTime;

/// Return a uniformly distributed integer in the inclusive range `[min, max]`.
///
/// Swapped bounds are reordered rather than rejected. If the OS entropy
/// source fails the draw degrades to `min`.
pub fn rand_int(min: i64, max: i64) -> i64 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let span = (max as i128) - (min as i128) + 1;
    if span > u64::MAX as i128 {
        // Full i64 range: every u64 bit pattern maps to a distinct value.
        return next_u64() as i64;
    }
    let span = span as u64;

    // Rejection sampling: discard draws past the largest multiple of span
    // so the remainder stays uniform.
    let threshold = u64::MAX - (u64::MAX % span);
    loop {
        let draw = next_u64();
        if draw < threshold {
            return ((min as i128) + ((draw % span) as i128)) as i64;
        }
    }
}

/// Build an identifier of the form `<prefix>-<2-digit><8-hex><5-hex>`,
/// e.g. `test-64a0643d4e76891`: a two-digit random number, the current Unix
/// second, and a sub-second counter fragment. Collision-prone by design.
pub fn unique_id(prefix: &str) -> String {
    let now = OffsetDateTime::now_utc();
    let sec = now.unix_timestamp();
    let frac = (now.unix_timestamp_nanos() % 0x100000) as u64;
    format!("{prefix}-{:02}{sec:08x}{frac:05x}", rand_int(10, 99))
}

fn next_u64() -> u64 {
    let mut buf = [0u8; 8];
    if fill_random(&mut buf).is_err() {
        return 0;
    }
    u64::from_le_bytes(buf)
}
