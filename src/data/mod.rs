/// Data layer: core types, assembly, and segmentation.
///
/// Architecture:
/// ```text
///   SESSION_A   SESSION_B      literal tables
///        │          │
///        ▼          ▼
///   ┌──────────────────┐
///   │     assemble      │  A then B → Dataset (all fields f64)
///   └──────────────────┘
///            │
///            ▼
///   ┌──────────────────┐
///   │     segment       │  x ≤ 0 / x > 0 → index views
///   └──────────────────┘
/// ```

pub mod assemble;
pub mod model;
pub mod segment;
