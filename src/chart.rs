use std::collections::BTreeMap;

use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchTable, Outcome};

// ---------------------------------------------------------------------------
// Chart requests: pure aggregations handed to the rendering layer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

/// A pie figure: labelled counts plus a title.  Slices with a zero count are
/// kept in the request (they render as empty wedges, matching the grouping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieRequest {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieRequest {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Categorical colour key.
    pub booster_category: String,
}

/// A scatter figure: payload mass vs outcome class, one point per filtered row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRequest {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the pie request for the current view.
///
/// The grouping key is determined solely by the site selection:
/// * All Sites       → successes per launch site
/// * a concrete site → success vs failure within that site's rows
pub fn pie_request(table: &LaunchTable, visible: &[usize], site: &SiteSelection) -> PieRequest {
    match site {
        SiteSelection::All => {
            let mut successes_by_site: BTreeMap<&str, usize> = BTreeMap::new();
            for &idx in visible {
                let rec = &table.records[idx];
                let entry = successes_by_site.entry(rec.site.as_str()).or_insert(0);
                if rec.outcome.is_success() {
                    *entry += 1;
                }
            }
            PieRequest {
                title: "Total Successful Launches by Site".to_string(),
                slices: successes_by_site
                    .into_iter()
                    .map(|(site, count)| PieSlice {
                        label: site.to_string(),
                        count,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(name) => {
            let mut successes = 0;
            let mut failures = 0;
            for &idx in visible {
                match table.records[idx].outcome {
                    Outcome::Success => successes += 1,
                    Outcome::Failure => failures += 1,
                }
            }
            PieRequest {
                title: format!("Success vs Failure for {name}"),
                slices: vec![
                    PieSlice {
                        label: Outcome::Success.to_string(),
                        count: successes,
                    },
                    PieSlice {
                        label: Outcome::Failure.to_string(),
                        count: failures,
                    },
                ],
            }
        }
    }
}

/// Build the scatter request: one point per visible row, payload mass against
/// outcome class, booster version category as the colour key.
pub fn scatter_request(table: &LaunchTable, visible: &[usize], site: &SiteSelection) -> ScatterRequest {
    let title = match site {
        SiteSelection::All => "Payload vs Launch Outcome (All Sites)".to_string(),
        SiteSelection::Site(name) => format!("Payload vs Launch Outcome ({name})"),
    };

    let points = visible
        .iter()
        .map(|&idx| {
            let rec = &table.records[idx];
            ScatterPoint {
                payload_mass_kg: rec.payload_mass_kg,
                outcome: rec.outcome,
                booster_category: rec.booster_category.clone(),
            }
        })
        .collect();

    ScatterRequest { title, points }
}
