/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, category indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site/payload predicates → chart rows and counts
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
