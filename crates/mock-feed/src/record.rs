//! Generated record types.
//!
//! This module defines the output types from record generation. Field names
//! serialize in the camelCase shape the original feed emitted (`msgID`,
//! `isGold`), so downstream consumers see the same JSON either way.

use serde::{Deserialize, Serialize};

/// A generated mock message record.
///
/// `id` is the pairing key shared with exactly one [`User`] in the same
/// dataset. `user` is a display name sampled independently of the paired
/// user's `name`; the two are not guaranteed to agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Pairing identifier shared with one user record.
    pub id: u64,
    /// Message body drawn from the message pool.
    pub message: String,
    /// Originating site drawn from the site pool.
    pub site: String,
    /// Display name drawn from the name pool.
    pub user: String,
    /// Per-message numeric token, up to seven digits.
    #[serde(rename = "msgID")]
    pub msg_id: u64,
    /// Timestamp in milliseconds since the Unix epoch.
    pub stamp: i64,
    /// Comment body drawn from the message pool.
    pub comment: String,
    /// Synthetic upstream failure payload, present roughly 10% of the
    /// time as a singleton sequence; never affects control flow.
    pub error: Option<Vec<String>>,
}

/// A generated mock user record, paired to a [`Message`] by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Pairing identifier shared with one message record.
    pub id: u64,
    /// Avatar image URL.
    pub url: String,
    /// Country drawn from the country pool.
    pub country: String,
    /// Score in `[0, 100000)`.
    pub points: u64,
    /// Gold membership flag, true with probability 0.5.
    pub is_gold: bool,
    /// Timestamp in milliseconds since the Unix epoch, sampled
    /// independently of the paired message's stamp.
    pub stamp: i64,
    /// League placement.
    pub ranking: Ranking,
    /// Display name drawn from the name pool.
    pub name: String,
}

/// League placement for a generated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    /// League drawn from the league pool.
    pub league: String,
    /// Level in `[1, 101)`.
    pub level: u64,
}
