use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SpectralType – IR or XANES
// ---------------------------------------------------------------------------

/// Which kind of spectrum is being inspected.  Determines the unit, the
/// reference table and the synthetic default axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpectralType {
    #[default]
    #[serde(rename = "IR")]
    Ir,
    #[serde(rename = "XANES")]
    Xanes,
}

impl SpectralType {
    pub const ALL: [SpectralType; 2] = [SpectralType::Ir, SpectralType::Xanes];

    /// Unit label used in column headers and captions.
    pub fn unit(self) -> &'static str {
        match self {
            SpectralType::Ir => "cm-1",
            SpectralType::Xanes => "eV",
        }
    }

    /// File name of the reference table inside the data directory.
    pub fn reference_file(self) -> &'static str {
        match self {
            SpectralType::Ir => "IRFunctionalGroups.csv",
            SpectralType::Xanes => "XANESFunctionalGroups.csv",
        }
    }

    /// Half-width used to make point features visible on the by-group path.
    pub fn minimum_feature_width(self) -> f64 {
        match self {
            SpectralType::Ir => 10.0,
            SpectralType::Xanes => 0.5,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectralType::Ir => write!(f, "IR"),
            SpectralType::Xanes => write!(f, "XANES"),
        }
    }
}

// ---------------------------------------------------------------------------
// FunctionalGroupRecord – one row of a reference table
// ---------------------------------------------------------------------------

/// A functional group and its characteristic band, in the table's unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalGroupRecord {
    /// Row identifier from the first column of the reference file.
    pub key: String,
    /// Chemical bond label, e.g. `C=O`.
    pub group: String,
    /// Descriptive label, e.g. `Ketone`.
    pub name: String,
    pub min_bound: f64,
    pub max_bound: f64,
}

impl FunctionalGroupRecord {
    /// A record with `min_bound == max_bound` marks a single position.
    pub fn is_point_feature(&self) -> bool {
        self.min_bound == self.max_bound
    }
}

// ---------------------------------------------------------------------------
// ReferenceTable – the active list of functional groups
// ---------------------------------------------------------------------------

/// Records sorted ascending by `min_bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    pub spectral_type: SpectralType,
    records: Vec<FunctionalGroupRecord>,
}

impl ReferenceTable {
    /// Build a table, sorting the records by `min_bound`.  The sort is stable
    /// so rows sharing a lower bound keep their file order.
    pub fn new(spectral_type: SpectralType, mut records: Vec<FunctionalGroupRecord>) -> Self {
        records.sort_by(|a, b| a.min_bound.total_cmp(&b.min_bound));
        ReferenceTable {
            spectral_type,
            records,
        }
    }

    /// Wrap records that are already in table order (e.g. a filtered subset).
    pub(crate) fn from_sorted(
        spectral_type: SpectralType,
        records: Vec<FunctionalGroupRecord>,
    ) -> Self {
        ReferenceTable {
            spectral_type,
            records,
        }
    }

    pub fn records(&self) -> &[FunctionalGroupRecord] {
        &self.records
    }

    pub fn unit(&self) -> &'static str {
        self.spectral_type.unit()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique group labels (feeds the by-bond picker).
    pub fn group_labels(&self) -> Vec<String> {
        unique_sorted(self.records.iter().map(|r| r.group.as_str()))
    }

    /// Sorted unique descriptive names (feeds the by-description picker).
    pub fn name_labels(&self) -> Vec<String> {
        unique_sorted(self.records.iter().map(|r| r.name.as_str()))
    }

    /// Smallest lower bound and largest upper bound, or `None` when empty.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let first = self.records.first()?;
        let max = self
            .records
            .iter()
            .map(|r| r.max_bound)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((first.min_bound, max))
    }
}

fn unique_sorted<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    labels
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// SpectrumSample / SpectrumSet
// ---------------------------------------------------------------------------

/// A labelled spectrum; `x` and `y` have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumSample {
    pub label: String,
    /// Spectral axis in the active unit.
    pub x: Vec<f64>,
    /// Intensity – same length as `x`.
    pub y: Vec<f64>,
}

impl SpectrumSample {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest finite intensity, if any.
    pub fn max_intensity(&self) -> Option<f64> {
        self.y
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
}

/// Samples in insertion order, keyed by unique label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectrumSet {
    samples: Vec<SpectrumSample>,
}

impl SpectrumSet {
    /// Insert a sample.  A sample with the same label is replaced in place.
    pub fn insert(&mut self, sample: SpectrumSample) {
        match self.samples.iter_mut().find(|s| s.label == sample.label) {
            Some(existing) => *existing = sample,
            None => self.samples.push(sample),
        }
    }

    pub fn get(&self, label: &str) -> Option<&SpectrumSample> {
        self.samples.iter().find(|s| s.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpectrumSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<'a> IntoIterator for &'a SpectrumSet {
    type Item = &'a SpectrumSample;
    type IntoIter = std::slice::Iter<'a, SpectrumSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
