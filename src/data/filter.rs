use super::model::LaunchTable;

// ---------------------------------------------------------------------------
// Selection – transient filter input from the controls
// ---------------------------------------------------------------------------

/// The site dropdown value: either the "All Sites" sentinel or one concrete
/// site string.  Out-of-catalog strings are allowed and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a row with the given launch site passes the site predicate.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    /// Label used in chart titles and the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(s) => s,
        }
    }
}

/// Inclusive payload-mass range in kilograms.  The UI keeps `low <= high`;
/// the filter does not validate it (an inverted range matches nothing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.low && mass_kg <= self.high
    }
}

/// The full control state fed to the filter on every interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

// ---------------------------------------------------------------------------
// Filter – pure, stable subset of the table
// ---------------------------------------------------------------------------

/// Return indices of launches passing both the site and payload predicates,
/// in table order.  Pure: identical inputs always yield identical output.
/// An empty result is valid and expected for out-of-catalog site strings.
pub fn filtered_indices(table: &LaunchTable, selection: &Selection) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.site.matches(&rec.site) && selection.payload.contains(rec.payload_mass_kg)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome, SITE_CATALOG};

    fn rec(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    fn sample_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            rec("CCAFS LC-40", 2500.0, Outcome::Failure, "v1.0"),
            rec("KSC LC-39A", 500.0, Outcome::Success, "v1.1"),
            rec("VAFB SLC-4E", 9600.0, Outcome::Success, "FT"),
            rec("KSC LC-39A", 4800.0, Outcome::Failure, "B4"),
            rec("CCAFS SLC-40", 3100.0, Outcome::Success, "B5"),
        ])
    }

    fn selection(site: SiteSelection, low: f64, high: f64) -> Selection {
        Selection {
            site,
            payload: PayloadRange { low, high },
        }
    }

    #[test]
    fn all_sites_with_full_bounds_returns_whole_table_in_order() {
        let table = sample_table();
        let bounds = table.payload_bounds();
        let sel = selection(SiteSelection::All, bounds.min, bounds.max);
        assert_eq!(filtered_indices(&table, &sel), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn payload_bounds_are_inclusive() {
        let table = sample_table();
        let sel = selection(SiteSelection::All, 500.0, 2500.0);
        // Rows exactly at low and high both pass.
        assert_eq!(filtered_indices(&table, &sel), vec![0, 1]);
    }

    #[test]
    fn unknown_site_yields_empty_view_not_error() {
        let table = sample_table();
        let sel = selection(SiteSelection::Site("XYZ".to_string()), 0.0, 10000.0);
        assert!(filtered_indices(&table, &sel).is_empty());
    }

    #[test]
    fn site_match_is_case_sensitive() {
        let table = sample_table();
        let sel = selection(SiteSelection::Site("ksc lc-39a".to_string()), 0.0, 10000.0);
        assert!(filtered_indices(&table, &sel).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let table = sample_table();
        let sel = selection(SiteSelection::Site("KSC LC-39A".to_string()), 0.0, 5000.0);
        let first = filtered_indices(&table, &sel);
        let second = filtered_indices(&table, &sel);
        assert_eq!(first, second);
    }

    #[test]
    fn matches_naive_scan_for_every_catalog_site_and_range() {
        let table = sample_table();
        let ranges = [(0.0, 10000.0), (0.0, 3000.0), (3000.0, 3000.0), (5000.0, 10000.0)];

        let mut selections: Vec<SiteSelection> = SITE_CATALOG
            .iter()
            .map(|s| SiteSelection::Site(s.to_string()))
            .collect();
        selections.push(SiteSelection::All);

        for site_sel in &selections {
            for &(low, high) in &ranges {
                let sel = selection(site_sel.clone(), low, high);
                let fast = filtered_indices(&table, &sel);

                let naive: Vec<usize> = table
                    .records
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| {
                        let site_ok = match site_sel {
                            SiteSelection::All => true,
                            SiteSelection::Site(s) => &r.site == s,
                        };
                        site_ok && r.payload_mass_kg >= low && r.payload_mass_kg <= high
                    })
                    .map(|(i, _)| i)
                    .collect();

                assert_eq!(fast, naive, "site={site_sel:?} range=[{low}, {high}]");
            }
        }
    }

    // Scenario: two KSC LC-39A launches at 500 kg and 9000 kg.
    #[test]
    fn ksc_two_row_scenario() {
        let table = LaunchTable::from_records(vec![
            rec("KSC LC-39A", 500.0, Outcome::Success, "v1"),
            rec("KSC LC-39A", 9000.0, Outcome::Failure, "v2"),
        ]);

        let ksc = SiteSelection::Site("KSC LC-39A".to_string());
        assert_eq!(
            filtered_indices(&table, &selection(ksc.clone(), 0.0, 10000.0)),
            vec![0, 1]
        );
        assert_eq!(
            filtered_indices(&table, &selection(ksc, 0.0, 1000.0)),
            vec![0]
        );
        assert_eq!(
            filtered_indices(&table, &selection(SiteSelection::All, 0.0, 1000.0)),
            vec![0]
        );
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let table = sample_table();
        let sel = selection(SiteSelection::All, 5000.0, 1000.0);
        assert!(filtered_indices(&table, &sel).is_empty());
    }
}
