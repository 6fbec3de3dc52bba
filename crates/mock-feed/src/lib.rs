//! Random mock message and user feed generation for demonstration table
//! widgets.
//!
//! This crate fabricates paired `Message`/`User` records from fixed
//! sampling pools, assembles them into a dataset of random bounded length,
//! tracks a single detail-panel selection, and exposes a render-ready view
//! model for an external presentation layer. There is no backend and no
//! persistence; everything is synthetic.
//!
//! # Overview
//!
//! - [`FixtureCatalog`] — the fixed reference lists used as sampling pools
//! - [`Dataset`] — paired records built once per widget activation
//! - [`Selection`] — which single record's detail panel is open
//! - [`summary_rows`] / [`detail_card`] — the rendering boundary
//!
//! # Example
//!
//! ```
//! use mock_feed::{Dataset, FixtureCatalog, Selection, detail_card, summary_rows};
//!
//! let catalog = FixtureCatalog::builtin();
//! let dataset = Dataset::from_seed(&catalog, 42).expect("generation succeeds");
//! assert_eq!(dataset.messages().len(), dataset.users().len());
//!
//! let mut selection = Selection::default();
//! let first = dataset.messages().first().expect("non-empty dataset").id;
//! selection.select(first);
//!
//! let rows = summary_rows(&dataset, &selection);
//! assert_eq!(rows.len(), dataset.len());
//! assert!(detail_card(&dataset, &selection).is_some());
//!
//! selection.clear();
//! assert!(detail_card(&dataset, &selection).is_none());
//! ```

mod catalog;
mod dataset;
mod error;
pub mod feed_cli;
mod generator;
mod record;
mod sample;
mod selection;
mod view;

pub use catalog::FixtureCatalog;
pub use dataset::Dataset;
pub use error::{CatalogError, SampleError};
pub use generator::{generate_message, generate_pair, generate_user};
pub use record::{Message, Ranking, User};
pub use sample::{
    STAMP_WINDOW_END_MS, STAMP_WINDOW_START_MS, chance, digit_token, int_in, pick, stamp_in_window,
};
pub use selection::Selection;
pub use view::{
    DetailCard, PREVIEW_LIMIT, SummaryRow, detail_card, format_stamp, preview, summary_rows,
};
