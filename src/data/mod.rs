/// Data layer: table type, reading, writing and splitting.
///
/// Architecture:
/// ```text
///   stud.csv
///      │
///      ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  split   │  seeded permutation → (train, test)
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  writer  │  data.csv / train.csv / test.csv
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod split;
pub mod writer;
