use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::data::loader::{load_reference_table, load_upload};
use crate::data::model::{ReferenceTable, SpectralType};
use crate::view::{render, RenderInputs, View};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which picker a label toggle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    Groups,
    Names,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Current widget values.
    pub inputs: RenderInputs,

    /// Reference table of the active spectral type, or the load error.
    pub reference: Result<ReferenceTable, String>,

    /// Labels offered by the two pickers (cached from the table).
    pub group_labels: Vec<String>,
    pub name_labels: Vec<String>,

    /// Output of the last render and the inputs it was made from.
    pub view: Option<View>,
    rendered_for: Option<RenderInputs>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        let inputs = RenderInputs::new(
            config.initial_type,
            config.search_center,
            config.search_half_width,
        );
        let mut state = Self {
            config,
            inputs,
            reference: Err(String::new()),
            group_labels: Vec::new(),
            name_labels: Vec::new(),
            view: None,
            rendered_for: None,
            status_message: None,
        };
        state.load_reference();
        state.refresh();
        state
    }

    /// (Re)load the reference table for the active spectral type.
    fn load_reference(&mut self) {
        let spectral_type = self.inputs.spectral_type;
        let path = self.config.reference_path(spectral_type);
        self.reference = load_reference_table(&path, spectral_type).map_err(|e| {
            log::error!("Failed to load {spectral_type} reference table: {e}");
            e.to_string()
        });
        match &self.reference {
            Ok(table) => {
                self.group_labels = table.group_labels();
                self.name_labels = table.name_labels();
            }
            Err(_) => {
                self.group_labels.clear();
                self.name_labels.clear();
            }
        }
    }

    /// Switch between IR and XANES.  The table, its labels and the current
    /// selections are replaced wholesale; the search window goes back to the
    /// configured defaults since the old values are in the other unit.
    pub fn set_spectral_type(&mut self, spectral_type: SpectralType) {
        if self.inputs.spectral_type == spectral_type {
            return;
        }
        self.inputs.spectral_type = spectral_type;
        self.inputs.selected_groups.clear();
        self.inputs.selected_names.clear();
        self.inputs.search_center = self.config.search_center;
        self.inputs.search_half_width = self.config.search_half_width;
        self.load_reference();
    }

    fn selection_mut(&mut self, picker: Picker) -> &mut Vec<String> {
        match picker {
            Picker::Groups => &mut self.inputs.selected_groups,
            Picker::Names => &mut self.inputs.selected_names,
        }
    }

    /// Toggle a label.  Newly picked labels go to the end of the selection.
    pub fn toggle_label(&mut self, picker: Picker, label: &str) {
        let selected = self.selection_mut(picker);
        if let Some(pos) = selected.iter().position(|l| l == label) {
            selected.remove(pos);
        } else {
            selected.push(label.to_string());
        }
    }

    /// Select every label of a picker, in label order.
    pub fn select_all(&mut self, picker: Picker) {
        let labels = match picker {
            Picker::Groups => self.group_labels.clone(),
            Picker::Names => self.name_labels.clone(),
        };
        *self.selection_mut(picker) = labels;
    }

    /// Clear a picker's selection.
    pub fn select_none(&mut self, picker: Picker) {
        self.selection_mut(picker).clear();
    }

    /// Index of `label` within its picker's selection.
    pub fn selection_index(&self, picker: Picker, label: &str) -> Option<usize> {
        let selected = match picker {
            Picker::Groups => &self.inputs.selected_groups,
            Picker::Names => &self.inputs.selected_names,
        };
        selected.iter().position(|l| l == label)
    }

    /// Upper bound and drag speed for the search half-width input.
    pub fn half_width_limits(&self) -> (f64, f64) {
        match self.reference.as_ref().ok().and_then(|t| t.extent()) {
            Some((min, max)) => ((max + min) / 10.0, (max - min) / 1000.0),
            None => (f64::INFINITY, 0.1),
        }
    }

    /// Read spectrum files and add them to the uploads.  Unreadable files
    /// are reported in the status line.
    pub fn add_uploads(&mut self, paths: Vec<PathBuf>) {
        let mut errors = Vec::new();
        for path in paths {
            match load_upload(&path) {
                Ok(upload) => {
                    log::info!("Added spectrum file {}", upload.name);
                    if let Some(existing) =
                        self.inputs.uploads.iter_mut().find(|u| u.name == upload.name)
                    {
                        *existing = upload;
                    } else {
                        self.inputs.uploads.push(upload);
                    }
                }
                Err(e) => {
                    log::error!("Failed to read spectrum file: {e:#}");
                    errors.push(format!("{e:#}"));
                }
            }
        }
        self.status_message = if errors.is_empty() {
            None
        } else {
            Some(format!("Error: {}", errors.join("; ")))
        };
    }

    pub fn clear_uploads(&mut self) {
        self.inputs.uploads.clear();
        self.status_message = None;
    }

    /// Re-run the pipeline when the inputs changed since the last render.
    pub fn refresh(&mut self) {
        if self.rendered_for.as_ref() == Some(&self.inputs) {
            return;
        }
        self.view = match &self.reference {
            Ok(table) => Some(render(&self.inputs, table)),
            Err(_) => None,
        };
        self.rendered_for = Some(self.inputs.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_config() -> ViewerConfig {
        ViewerConfig {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_rendered_view() {
        let state = AppState::new(shipped_config());
        assert!(state.reference.is_ok());
        assert!(!state.group_labels.is_empty());
        let view = state.view.as_ref().unwrap();
        assert!(view.used_default);
    }

    #[test]
    fn toggling_keeps_pick_order() {
        let mut state = AppState::new(shipped_config());
        state.toggle_label(Picker::Groups, "O-H");
        state.toggle_label(Picker::Groups, "C=O");
        assert_eq!(state.inputs.selected_groups, vec!["O-H", "C=O"]);
        assert_eq!(state.selection_index(Picker::Groups, "C=O"), Some(1));
        state.toggle_label(Picker::Groups, "O-H");
        assert_eq!(state.inputs.selected_groups, vec!["C=O"]);
    }

    #[test]
    fn switching_type_replaces_table_and_clears_selection() {
        let mut state = AppState::new(shipped_config());
        state.select_all(Picker::Names);
        assert!(!state.inputs.selected_names.is_empty());
        state.set_spectral_type(SpectralType::Xanes);
        assert!(state.inputs.selected_names.is_empty());
        let table = state.reference.as_ref().unwrap();
        assert_eq!(table.unit(), "eV");
        state.refresh();
        let view = state.view.as_ref().unwrap();
        assert_eq!(view.full_table.spectral_type, SpectralType::Xanes);
    }

    #[test]
    fn switching_type_resets_search_window() {
        let mut state = AppState::new(shipped_config());
        state.inputs.search_center = 1700.0;
        state.inputs.search_half_width = 60.0;
        state.set_spectral_type(SpectralType::Xanes);
        assert_eq!(state.inputs.search_center, 10.0);
        assert_eq!(state.inputs.search_half_width, 10.0);

        // re-selecting the active type keeps the user's values
        state.inputs.search_center = 285.0;
        state.set_spectral_type(SpectralType::Xanes);
        assert_eq!(state.inputs.search_center, 285.0);
    }

    #[test]
    fn missing_reference_table_blocks_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(ViewerConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        });
        assert!(state.reference.is_err());
        assert!(state.view.is_none());
        assert!(state.group_labels.is_empty());
    }
}
