use jsondir::{Store, StoreError, StoreOptions};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Address {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Country")]
    country: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Employee {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Address")]
    address: Address,
}

fn setup() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path(), StoreOptions::default()).unwrap();
    (dir, store)
}

#[test]
fn test_read_all_returns_single_written_record() {
    let (_dir, store) = setup();
    store
        .write("users", "zoro", &json!({"Name": "Zoro", "Age": 23}))
        .unwrap();

    let records = store.read_all("users").unwrap();
    assert_eq!(records.len(), 1);
    let parsed: Value = serde_json::from_slice(&records[0]).unwrap();
    assert_eq!(parsed, json!({"Name": "Zoro", "Age": 23}));
}

#[test]
fn test_read_missing_on_empty_store() {
    let (_dir, store) = setup();
    let err = store.read::<Value>("users", "missing").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_delete_with_empty_resource_drops_collection() {
    let (dir, store) = setup();
    store.write("users", "zoro", &json!({"Name": "Zoro"})).unwrap();
    store.write("users", "kid", &json!({"Name": "Kid"})).unwrap();

    store.delete("users", "").unwrap();

    assert!(!dir.path().join("users").exists());
    assert!(matches!(
        store.read_all("users"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_delete_then_read_is_not_found() {
    let (_dir, store) = setup();
    store.write("users", "sabo", &json!({"Name": "Sabo"})).unwrap();
    store.delete("users", "sabo").unwrap();

    assert!(store.read::<Value>("users", "sabo").unwrap_err().is_not_found());
    assert!(store.delete("users", "sabo").unwrap_err().is_not_found());
}

#[test]
fn test_typed_round_trip_with_nested_values() {
    let (_dir, store) = setup();
    let benn = Employee {
        name: "Benn".to_string(),
        age: 23,
        address: Address {
            city: "Shanks' Ship".to_string(),
            country: "Nepal".to_string(),
        },
    };
    store.write("users", "Benn", &benn).unwrap();

    let back: Employee = store.read("users", "Benn").unwrap();
    assert_eq!(back, benn);

    let all: Vec<Employee> = store.read_all_as("users").unwrap();
    assert_eq!(all, vec![back]);
}

#[test]
fn test_files_written_by_hand_are_readable() {
    let (dir, store) = setup();
    let users = dir.path().join("users");
    fs::create_dir_all(&users).unwrap();
    fs::write(users.join("kuma.json"), r#"{"Name": "Kuma", "Age": 23}"#).unwrap();

    let kuma: Value = store.read("users", "kuma").unwrap();
    assert_eq!(kuma["Name"], "Kuma");
}

#[test]
fn test_collections_are_independent() {
    let (_dir, store) = setup();
    store.write("users", "zoro", &json!({"kind": "user"})).unwrap();
    store.write("ships", "zoro", &json!({"kind": "ship"})).unwrap();

    store.delete("ships", "").unwrap();

    let user: Value = store.read("users", "zoro").unwrap();
    assert_eq!(user, json!({"kind": "user"}));
}

#[test]
fn test_stale_temp_files_purged_on_open() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users");
    fs::create_dir_all(&users).unwrap();
    fs::write(users.join("zoro.json"), "{}\n").unwrap();
    fs::write(users.join("kid.json.tmp"), "{\"Na").unwrap();

    let options = StoreOptions::new().purge_stale_tmp(Some(std::time::Duration::ZERO));
    let store = Store::open(dir.path(), options).unwrap();

    assert!(!users.join("kid.json.tmp").exists());
    assert_eq!(store.read_all("users").unwrap().len(), 1);
}

#[test]
fn test_purge_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users");
    fs::create_dir_all(&users).unwrap();
    fs::write(users.join("kid.json.tmp"), "{\"Na").unwrap();

    Store::open(dir.path(), StoreOptions::new().purge_stale_tmp(None)).unwrap();
    assert!(users.join("kid.json.tmp").exists());
}

#[test]
fn test_open_leaves_files_outside_collections_alone() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json.tmp"), "{}").unwrap();

    let options = StoreOptions::new().purge_stale_tmp(Some(std::time::Duration::ZERO));
    Store::open(dir.path(), options).unwrap();

    assert!(dir.path().join("settings.json.tmp").exists());
}
