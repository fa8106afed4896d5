/// Data layer: core types, the embedded dataset, and CSV export.
///
/// Architecture:
/// ```text
///   embedded iris.csv (150 rows, class codes)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate schema, remap codes → species names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ IrisTable │  Vec<IrisRecord>, read-only after construction
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  serialize table → iris.csv in the working directory
///   └──────────┘
/// ```
pub mod export;
pub mod loader;
pub mod model;
