//! File-backed snapshot persistence.

use std::collections::BTreeMap;
use std::fs;

use ring_model::{Area, Show, ShowSnapshot};
use ring_persistence::{
    DEFAULT_SHOW_KEY, DEFAULT_USERS_KEY, FileStore, load_json, load_snapshot, save_json,
    save_snapshot,
};
use tempfile::tempdir;

#[test]
fn snapshot_written_as_plain_json_file() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let mut ring = Area::with_classes("Ring 2", ["Hunter Pleasure", "Western Pleasure"]);
    ring.current = 1;
    let show = Show { areas: vec![ring] };

    save_snapshot(&store, DEFAULT_SHOW_KEY, &show.to_snapshot()).unwrap();

    let raw = fs::read_to_string(dir.path().join("horseShowOrganization.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["areaOrder"][0], "Ring 2");
    assert_eq!(value["navByArea"]["Ring 2"], 1);

    let reopened = FileStore::new(dir.path());
    let snapshot: ShowSnapshot = load_snapshot(&reopened, DEFAULT_SHOW_KEY)
        .unwrap()
        .expect("snapshot on disk");
    assert_eq!(Show::from_snapshot(snapshot), show);
}

#[test]
fn credential_map_round_trip() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let mut users = BTreeMap::new();
    users.insert("steward".to_string(), "hunter2".to_string());

    save_json(&store, DEFAULT_USERS_KEY, &users).unwrap();
    let loaded: BTreeMap<String, String> = load_json(&store, DEFAULT_USERS_KEY)
        .unwrap()
        .expect("users stored");
    assert_eq!(loaded, users);
}
