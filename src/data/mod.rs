/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchTable (fatal DataLoadError on failure)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchTable   │  Vec<LaunchRecord>, booster-category index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + payload-range predicates → filtered indices
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
