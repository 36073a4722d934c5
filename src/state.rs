use std::path::PathBuf;

use crate::chart::{pie_request, scatter_request, PieRequest, ScatterRequest};
use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, PayloadRange, Selection, SiteSelection};
use crate::data::model::{LaunchTable, PayloadBounds};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.  The table is read-only after
/// load; every control change only recomputes `visible_indices`.
pub struct AppState {
    /// Path the table was loaded from (shown in the top bar).
    pub dataset_path: PathBuf,

    /// The loaded launch table.
    pub table: LaunchTable,

    /// Data-derived payload bounds, computed once at load.  Seeds the initial
    /// range value; the displayed slider domain stays fixed at [0, 10000].
    pub bounds: PayloadBounds,

    /// Current control values (site dropdown + payload range).
    pub selection: Selection,

    /// Indices of launches passing the current selection (cached per change).
    pub visible_indices: Vec<usize>,

    /// Colours for booster version categories (scatter colour key).
    pub booster_colors: ColorMap,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state from a freshly loaded table.
    pub fn new(dataset_path: PathBuf, table: LaunchTable) -> Self {
        let bounds = table.payload_bounds();
        let booster_colors = ColorMap::new(&table.booster_categories);
        let selection = Selection {
            site: SiteSelection::All,
            payload: PayloadRange {
                low: bounds.min,
                high: bounds.max,
            },
        };
        let mut state = AppState {
            dataset_path,
            table,
            bounds,
            selection,
            visible_indices: Vec::new(),
            booster_colors,
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Swap in a newly loaded table (File → Open) and reset the controls.
    pub fn replace_table(&mut self, dataset_path: PathBuf, table: LaunchTable) {
        *self = AppState::new(dataset_path, table);
    }

    /// Recompute `visible_indices` after a control change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.table, &self.selection);
    }

    pub fn set_site(&mut self, site: SiteSelection) {
        if self.selection.site != site {
            self.selection.site = site;
            self.refilter();
        }
    }

    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let range = PayloadRange { low, high };
        if self.selection.payload != range {
            self.selection.payload = range;
            self.refilter();
        }
    }

    /// Pie request for the current view.
    pub fn pie(&self) -> PieRequest {
        pie_request(&self.table, &self.visible_indices, &self.selection.site)
    }

    /// Scatter request for the current view.
    pub fn scatter(&self) -> ScatterRequest {
        scatter_request(&self.table, &self.visible_indices, &self.selection.site)
    }
}
