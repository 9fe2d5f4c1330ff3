/// Data layer: core types, loading, and reshaping.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Observation>, key indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  pivot    │  long → wide, one WideTable per metric
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod pivot;
