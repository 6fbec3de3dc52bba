//! Batch dataset construction and paired lookups.
//!
//! The dataset is built exactly once per widget activation as a single
//! pure batch: one call produces every message/user pair, and the hosting
//! UI updates its state once. The original accumulated pairs one state
//! append at a time, re-rendering after each; batching removes that
//! cascade without changing the output ordering.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::catalog::FixtureCatalog;
use crate::error::SampleError;
use crate::generator::generate_pair;
use crate::record::{Message, User};
use crate::sample::{digit_token, int_in};

/// Inclusive lower bound on the batch size.
const MIN_ROWS: u64 = 1;

/// Exclusive upper bound on the batch size.
const MAX_ROWS: u64 = 20;

/// Digit count of the shared pairing identifier drawn per unit.
const SHARED_ID_DIGITS: u32 = 5;

/// The full generated collection for one widget activation.
///
/// Messages and users are parallel sequences of matching length. For every
/// message there is exactly one user sharing its `id`, discoverable by
/// linear lookup; the dataset is never mutated after construction.
///
/// # Example
///
/// ```
/// use mock_feed::{Dataset, FixtureCatalog};
///
/// let catalog = FixtureCatalog::builtin();
/// let dataset = Dataset::from_seed(&catalog, 42).expect("generation succeeds");
///
/// assert_eq!(dataset.messages().len(), dataset.users().len());
/// assert!((1..20).contains(&dataset.len()));
///
/// // Same seed produces an identical dataset.
/// let again = Dataset::from_seed(&catalog, 42).expect("generation succeeds");
/// assert_eq!(dataset, again);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    messages: Vec<Message>,
    users: Vec<User>,
}

impl Dataset {
    /// Generates a dataset with a uniform batch size in `[1, 20)`.
    ///
    /// Each unit draws a fresh five-digit shared identifier, then builds
    /// one message and one user from it.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] only if a catalog pool is empty, which
    /// validated catalogs rule out.
    pub fn generate(rng: &mut impl Rng, catalog: &FixtureCatalog) -> Result<Self, SampleError> {
        let rows = int_in(rng, MIN_ROWS, MAX_ROWS)?;
        let capacity = usize::try_from(rows).unwrap_or_default();
        let mut messages = Vec::with_capacity(capacity);
        let mut users = Vec::with_capacity(capacity);

        for _ in 0..rows {
            let id = digit_token(rng, SHARED_ID_DIGITS);
            let (message, user) = generate_pair(rng, catalog, id)?;
            messages.push(message);
            users.push(user);
        }

        tracing::debug!(rows = messages.len(), "generated mock feed dataset");

        Ok(Self { messages, users })
    }

    /// Generates a dataset from a deterministic seed.
    ///
    /// The same seed and catalog always produce an identical dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] only if a catalog pool is empty, which
    /// validated catalogs rule out.
    pub fn from_seed(catalog: &FixtureCatalog, seed: u64) -> Result<Self, SampleError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(&mut rng, catalog)
    }

    /// Returns the number of message/user pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the dataset holds no pairs. Generated datasets
    /// never are; the batch size lower bound is one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the generated messages in generation order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the generated users in generation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Finds the user paired with the given identifier by linear scan.
    ///
    /// Linear lookup is deliberate; the dataset never exceeds nineteen
    /// pairs.
    #[must_use]
    pub fn user_for(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Finds the message with the given identifier by linear scan.
    #[must_use]
    pub fn message_for(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }
}
