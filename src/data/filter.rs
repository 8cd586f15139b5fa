use super::model::{FunctionalGroupRecord, ReferenceTable};

// ---------------------------------------------------------------------------
// Search window
// ---------------------------------------------------------------------------

/// A query window `[center - half_width, center + half_width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    pub center: f64,
    pub half_width: f64,
}

impl SearchWindow {
    pub fn new(center: f64, half_width: f64) -> Self {
        SearchWindow { center, half_width }
    }

    pub fn lower(&self) -> f64 {
        self.center - self.half_width
    }

    pub fn upper(&self) -> f64 {
        self.center + self.half_width
    }

    /// Strict interval overlap: a record that only touches an edge is out.
    pub fn overlaps(&self, record: &FunctionalGroupRecord) -> bool {
        record.min_bound < self.upper() && record.max_bound > self.lower()
    }
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Return the records of `table` whose band overlaps the window around
/// `center`.  Table order is preserved.
pub fn filter_by_window(table: &ReferenceTable, center: f64, half_width: f64) -> ReferenceTable {
    let window = SearchWindow::new(center, half_width);
    let records = table
        .records()
        .iter()
        .filter(|r| window.overlaps(r))
        .cloned()
        .collect();
    ReferenceTable::from_sorted(table.spectral_type, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SpectralType;
    use proptest::prelude::*;

    fn record(group: &str, min: f64, max: f64) -> FunctionalGroupRecord {
        FunctionalGroupRecord {
            key: group.to_string(),
            group: group.to_string(),
            name: format!("{group} band"),
            min_bound: min,
            max_bound: max,
        }
    }

    fn ir_table() -> ReferenceTable {
        ReferenceTable::new(
            SpectralType::Ir,
            vec![record("C=O", 1650.0, 1750.0), record("O-H", 3200.0, 3550.0)],
        )
    }

    #[test]
    fn carbonyl_window_selects_only_carbonyl() {
        let found = filter_by_window(&ir_table(), 1700.0, 60.0);
        let groups: Vec<&str> = found.records().iter().map(|r| r.group.as_str()).collect();
        assert_eq!(groups, vec!["C=O"]);
    }

    #[test]
    fn touching_an_edge_is_excluded() {
        let table = ir_table();
        // upper edge 1650 touches C=O min
        assert!(filter_by_window(&table, 1600.0, 50.0).is_empty());
        // lower edge 1750 touches C=O max
        assert!(filter_by_window(&table, 1800.0, 50.0).is_empty());
        // one unit more on either side overlaps
        assert_eq!(filter_by_window(&table, 1600.0, 51.0).len(), 1);
        assert_eq!(filter_by_window(&table, 1800.0, 51.0).len(), 1);
    }

    #[test]
    fn point_feature_inside_window_is_found() {
        let table = ReferenceTable::new(SpectralType::Xanes, vec![record("C=C", 285.0, 285.0)]);
        assert_eq!(filter_by_window(&table, 285.2, 0.5).len(), 1);
        // zero half-width around the point itself still fails the strict test
        assert!(filter_by_window(&table, 285.0, 0.0).is_empty());
    }

    #[test]
    fn empty_table_filters_to_empty() {
        let table = ReferenceTable::new(SpectralType::Ir, Vec::new());
        assert!(filter_by_window(&table, 1000.0, 500.0).is_empty());
    }

    fn arb_table() -> impl Strategy<Value = ReferenceTable> {
        prop::collection::vec((0.0f64..4000.0, 0.0f64..400.0), 0..40).prop_map(|bands| {
            let records = bands
                .into_iter()
                .enumerate()
                .map(|(i, (min, width))| record(&format!("G{i}"), min, min + width))
                .collect();
            ReferenceTable::new(SpectralType::Ir, records)
        })
    }

    proptest! {
        /// The result is exactly the strict-overlap subset, in table order
        #[test]
        fn filter_matches_predicate(
            table in arb_table(),
            center in -100.0f64..4100.0,
            half_width in 0.0f64..500.0,
        ) {
            let found = filter_by_window(&table, center, half_width);
            let expected: Vec<&FunctionalGroupRecord> = table
                .records()
                .iter()
                .filter(|r| r.min_bound < center + half_width && r.max_bound > center - half_width)
                .collect();
            let actual: Vec<&FunctionalGroupRecord> = found.records().iter().collect();
            prop_assert_eq!(actual, expected);
        }

        /// Filtering twice with the same window changes nothing
        #[test]
        fn filter_is_idempotent(
            table in arb_table(),
            center in 0.0f64..4000.0,
            half_width in 0.0f64..500.0,
        ) {
            let once = filter_by_window(&table, center, half_width);
            let twice = filter_by_window(&once, center, half_width);
            prop_assert_eq!(once, twice);
        }
    }
}
