//! Persisted form of a show.
//!
//! The stored record keeps the area order, the class lists and the
//! navigation indices as three separate structures:
//!
//! ```text
//! { "areaOrder": [..], "classesByArea": {name: [..]}, "navByArea": {name: n} }
//! ```
//!
//! Records written by the earlier browser-based manager used `areas`,
//! `classes` and `currentClasses`; those names are accepted on read.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::show::{Area, Show};

/// Flat snapshot of a [`Show`] as stored in the key-value store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSnapshot {
    /// Area names in display order.
    #[serde(rename = "areaOrder", alias = "areas", default)]
    pub area_order: Vec<String>,

    /// Running order per area.
    #[serde(rename = "classesByArea", alias = "classes", default)]
    pub classes_by_area: BTreeMap<String, Vec<String>>,

    /// Navigation index per area.
    #[serde(rename = "navByArea", alias = "currentClasses", default)]
    pub nav_by_area: BTreeMap<String, usize>,
}

impl From<&Show> for ShowSnapshot {
    fn from(show: &Show) -> Self {
        let mut snapshot = Self::default();
        for area in &show.areas {
            snapshot.area_order.push(area.name.clone());
            snapshot
                .classes_by_area
                .insert(area.name.clone(), area.classes.clone());
            snapshot.nav_by_area.insert(area.name.clone(), area.current);
        }
        snapshot
    }
}

impl Show {
    /// Rebuilds a show from a stored snapshot.
    ///
    /// `area_order` decides which areas exist. Entries in the maps that are
    /// not listed there are dropped, missing class lists become empty and
    /// navigation indices are clamped into range. An empty order yields the
    /// default show.
    pub fn from_snapshot(snapshot: ShowSnapshot) -> Self {
        let ShowSnapshot {
            area_order,
            mut classes_by_area,
            nav_by_area,
        } = snapshot;

        let mut seen = HashSet::new();
        let mut areas = Vec::with_capacity(area_order.len());
        for name in area_order {
            if !seen.insert(name.clone()) {
                tracing::warn!(area = %name, "duplicate area in snapshot, keeping first");
                continue;
            }
            let classes = classes_by_area.remove(&name).unwrap_or_default();
            let current = nav_by_area.get(&name).copied().unwrap_or(0);
            let mut area = Area {
                name,
                classes,
                current,
            };
            area.clamp_current();
            areas.push(area);
        }

        if !classes_by_area.is_empty() {
            tracing::warn!(
                orphaned = classes_by_area.len(),
                "dropping class lists for areas missing from the area order"
            );
        }

        Show::from_areas(areas).unwrap_or_else(|| {
            tracing::warn!("snapshot has no areas, starting from the default show");
            Show::default()
        })
    }

    /// Flattens the show into its stored form.
    pub fn to_snapshot(&self) -> ShowSnapshot {
        ShowSnapshot::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keeps_key_sets_equal() {
        let show = Show {
            areas: vec![
                Area::with_classes("A", ["X", "Y"]),
                Area::with_classes("B", ["Z"]),
            ],
        };
        let snapshot = show.to_snapshot();
        assert_eq!(snapshot.area_order, vec!["A", "B"]);
        let class_keys: Vec<_> = snapshot.classes_by_area.keys().collect();
        let nav_keys: Vec<_> = snapshot.nav_by_area.keys().collect();
        assert_eq!(class_keys, nav_keys);
        assert_eq!(class_keys.len(), snapshot.area_order.len());
    }

    #[test]
    fn from_snapshot_clamps_and_fills_gaps() {
        let mut snapshot = ShowSnapshot {
            area_order: vec!["A".into(), "B".into(), "A".into()],
            ..ShowSnapshot::default()
        };
        snapshot
            .classes_by_area
            .insert("A".into(), vec!["X".into(), "Y".into()]);
        snapshot
            .classes_by_area
            .insert("Ghost".into(), vec!["Q".into()]);
        snapshot.nav_by_area.insert("A".into(), 9);
        snapshot.nav_by_area.insert("B".into(), 3);

        let show = Show::from_snapshot(snapshot);
        assert_eq!(show.area_names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(show.area("A").unwrap().current, 1);
        let b = show.area("B").unwrap();
        assert!(b.is_empty());
        assert_eq!(b.current, 0);
    }

    #[test]
    fn empty_snapshot_falls_back_to_default() {
        let show = Show::from_snapshot(ShowSnapshot::default());
        assert_eq!(show, Show::default());
    }
}
