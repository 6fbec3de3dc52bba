//! Random message/user pair generation.
//!
//! Given a fixture catalog and a shared identifier, these functions
//! populate one [`Message`] and one [`User`]. The shared identifier is the
//! only invariant linking the two records; every other field is sampled
//! independently.

use chrono::DateTime;
use rand::Rng;

use crate::catalog::FixtureCatalog;
use crate::error::SampleError;
use crate::record::{Message, Ranking, User};
use crate::sample::{chance, digit_token, int_in, pick, stamp_in_window};

/// Digit count of the per-message `msgID` token.
const MESSAGE_TOKEN_DIGITS: u32 = 7;

/// Probability that a message carries the synthetic error payload (10%).
const ERROR_PROBABILITY: f64 = 0.1;

/// Probability that a user holds gold membership (50%).
const GOLD_PROBABILITY: f64 = 0.5;

/// Exclusive upper bound on user points.
const MAX_POINTS: u64 = 100_000;

/// Inclusive lower bound on ranking level.
const MIN_LEVEL: u64 = 1;

/// Exclusive upper bound on ranking level.
const MAX_LEVEL: u64 = 101;

/// Inclusive lower bound on the avatar image index.
const MIN_AVATAR_INDEX: u64 = 1;

/// Exclusive upper bound on the avatar image index.
const MAX_AVATAR_INDEX: u64 = 251;

/// Generates one mock message with the given pairing identifier.
///
/// # Errors
///
/// Returns [`SampleError`] only if a catalog pool is empty, which
/// validated catalogs rule out.
pub fn generate_message(
    rng: &mut impl Rng,
    catalog: &FixtureCatalog,
    id: u64,
) -> Result<Message, SampleError> {
    let error = if chance(rng, ERROR_PROBABILITY) {
        Some(vec![forbidden_payload(rng)])
    } else {
        None
    };

    Ok(Message {
        id,
        message: pick(rng, catalog.messages())?.clone(),
        site: pick(rng, catalog.sites())?.clone(),
        user: pick(rng, catalog.names())?.clone(),
        msg_id: digit_token(rng, MESSAGE_TOKEN_DIGITS),
        stamp: stamp_in_window(rng),
        comment: pick(rng, catalog.messages())?.clone(),
        error,
    })
}

/// Generates one mock user with the given pairing identifier.
///
/// # Errors
///
/// Returns [`SampleError`] only if a catalog pool is empty, which
/// validated catalogs rule out.
pub fn generate_user(
    rng: &mut impl Rng,
    catalog: &FixtureCatalog,
    id: u64,
) -> Result<User, SampleError> {
    Ok(User {
        id,
        url: avatar_url(int_in(rng, MIN_AVATAR_INDEX, MAX_AVATAR_INDEX)?),
        country: pick(rng, catalog.countries())?.clone(),
        points: int_in(rng, 0, MAX_POINTS)?,
        is_gold: chance(rng, GOLD_PROBABILITY),
        stamp: stamp_in_window(rng),
        ranking: Ranking {
            league: pick(rng, catalog.leagues())?.clone(),
            level: int_in(rng, MIN_LEVEL, MAX_LEVEL)?,
        },
        name: pick(rng, catalog.names())?.clone(),
    })
}

/// Generates a message/user pair sharing `id`.
///
/// # Errors
///
/// Returns [`SampleError`] only if a catalog pool is empty, which
/// validated catalogs rule out.
pub fn generate_pair(
    rng: &mut impl Rng,
    catalog: &FixtureCatalog,
    id: u64,
) -> Result<(Message, User), SampleError> {
    let message = generate_message(rng, catalog, id)?;
    let user = generate_user(rng, catalog, id)?;
    Ok((message, user))
}

/// Formats the synthetic upstream failure payload with a random in-window
/// server time.
fn forbidden_payload(rng: &mut impl Rng) -> String {
    format!(
        "{{\"error\":\"Forbidden\",\"data\":[],\"serverTime\":\"{}\"}}",
        iso_stamp(stamp_in_window(rng))
    )
}

/// Renders a millisecond timestamp as an ISO-8601 UTC string with
/// millisecond precision, e.g. `2020-06-01T12:30:00.000Z`.
fn iso_stamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map_or_else(String::new, |at| {
            at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
        })
}

fn avatar_url(index: u64) -> String {
    format!("https://picsum.photos/100/100?random={index}")
}
