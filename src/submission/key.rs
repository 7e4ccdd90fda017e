use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

pub const KEY_PREFIX: &str = "submission";
pub const SUFFIX_LEN: usize = 6;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `submission:<epoch-millis>:<6 base36 chars>`. Uniqueness is probabilistic.
pub fn generate(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();

    format!("{KEY_PREFIX}:{}:{suffix}", now.timestamp_millis())
}

/// Server time in the format stored when the caller sends no timestamp.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Whether `key` has the shape produced by [`generate`].
pub fn is_valid(key: &str) -> bool {
    let mut parts = key.split(':');
    let (Some(prefix), Some(millis), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == KEY_PREFIX
        && !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix.bytes().all(|b| BASE36.contains(&b))
}
