/// Data layer: metric types, loading, normalization, sampling, summaries.
///
/// Architecture:
/// ```text
///   uploaded .json files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → UploadedFile (raw records)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resolve   │  file name → model label, first file per label
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  raw records → MetricTable (first N rows)
///   └───────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  sample   │   │ summary   │  stride indices / per-metric means
///   └──────────┘   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ dashboard  │  one ModelView per label
///   └───────────┘
/// ```

pub mod dashboard;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod resolve;
pub mod sample;
pub mod summary;
