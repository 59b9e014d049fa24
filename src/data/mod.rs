//! Data layer: core types, loading, filtering, and aggregates.
//!
//! Architecture:
//! ```text
//!  .csv / .tsv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → GameDataset (all-or-nothing)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ GameDataset  │  Vec<GameRecord>, facet indices
//!   └─────────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐   ┌─────────┐
//!   │  filter   │   │  stats   │  top-N, lookup, facets / means, medians
//!   └──────────┘   └─────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;

pub use error::LoadError;
pub use model::{GameDataset, GameRecord, PlayerMetric};
