/// Data layer: reference tables, spectra, filtering and overlay geometry.
///
/// Architecture:
/// ```text
///  IRFunctionalGroups.csv / XANESFunctionalGroups.csv     uploaded spectra
///        │                                                     │
///        ▼                                                     ▼
///   ┌──────────┐                                         ┌──────────┐
///   │  loader   │  parse file → ReferenceTable           │ spectrum  │  parse / default → SpectrumSet
///   └──────────┘                                         └──────────┘
///        │                                                     │
///        ├──────────────┬──────────────────────────────────────┘
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter   │   │ overlay  │  selected labels → OverlayTrace per label
///   └──────────┘   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod overlay;
pub mod spectrum;
