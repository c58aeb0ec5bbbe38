use jsondir::{Store, StoreOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tempfile::TempDir;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Payload {
    writer: usize,
    seq: usize,
    // Large enough that a torn write would be observable.
    body: Vec<String>,
}

fn payload(writer: usize, seq: usize) -> Payload {
    Payload {
        writer,
        seq,
        body: (0..200).map(|i| format!("{}-{}-{}", writer, seq, i)).collect(),
    }
}

fn setup() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path(), StoreOptions::default()).unwrap();
    (dir, store)
}

fn assert_no_temp_files(dir: &std::path::Path) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_readers_never_observe_partial_records() {
    let (_dir, store) = setup();
    store.write("users", "zoro", &payload(0, 0)).unwrap();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            for seq in 1..300 {
                store.write("users", "zoro", &payload(0, seq)).unwrap();
            }
            done.store(true, Ordering::SeqCst);
        });

        for _ in 0..2 {
            s.spawn(|| {
                let mut reads = 0;
                while !done.load(Ordering::SeqCst) || reads == 0 {
                    let record: Payload = store.read("users", "zoro").unwrap();
                    assert_eq!(record, payload(0, record.seq));

                    for raw in store.read_all("users").unwrap() {
                        let parsed: Payload = serde_json::from_slice(&raw).unwrap();
                        assert_eq!(parsed.body.len(), 200);
                    }
                    reads += 1;
                }
            });
        }
    });
}

#[test]
fn test_concurrent_writers_same_resource_leave_valid_file() {
    let (dir, store) = setup();

    thread::scope(|s| {
        for writer in 0..8 {
            let store = &store;
            s.spawn(move || {
                for seq in 0..25 {
                    store.write("users", "zoro", &payload(writer, seq)).unwrap();
                }
            });
        }
    });

    let last: Payload = store.read("users", "zoro").unwrap();
    assert_eq!(last, payload(last.writer, last.seq));
    assert_no_temp_files(&dir.path().join("users"));
}

#[test]
fn test_concurrent_writers_distinct_resources() {
    let (dir, store) = setup();

    thread::scope(|s| {
        for writer in 0..8 {
            let store = &store;
            s.spawn(move || {
                for seq in 0..10 {
                    let name = format!("w{}-r{}", writer, seq);
                    store.write("users", &name, &payload(writer, seq)).unwrap();
                }
            });
        }
    });

    let all: Vec<Payload> = store.read_all_as("users").unwrap();
    assert_eq!(all.len(), 80);
    assert_no_temp_files(&dir.path().join("users"));
}

#[test]
fn test_writes_across_collections_run_in_parallel() {
    let (_dir, store) = setup();
    let collections = ["users", "ships", "islands", "crews"];

    thread::scope(|s| {
        for (writer, collection) in collections.iter().enumerate() {
            let store = &store;
            s.spawn(move || {
                for seq in 0..20 {
                    let name = format!("r{}", seq);
                    store.write(collection, &name, &payload(writer, seq)).unwrap();
                }
            });
        }
    });

    for collection in collections {
        assert_eq!(store.read_all(collection).unwrap().len(), 20);
    }
    assert_eq!(store.known_collections(), collections.len());
}

#[test]
fn test_delete_racing_writes_is_serialized() {
    let (_dir, store) = setup();

    thread::scope(|s| {
        s.spawn(|| {
            for seq in 0..50 {
                store.write("users", "zoro", &payload(0, seq)).unwrap();
            }
        });
        s.spawn(|| {
            for _ in 0..50 {
                match store.delete("users", "zoro") {
                    Ok(()) => {}
                    Err(e) => assert!(e.is_not_found(), "unexpected error: {}", e),
                }
            }
        });
    });

    match store.read::<Payload>("users", "zoro") {
        Ok(record) => assert_eq!(record, payload(0, record.seq)),
        Err(e) => assert!(e.is_not_found()),
    }
}

#[test]
fn test_scan_racing_collection_delete_reports_not_found() {
    let (_dir, store) = setup();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            for seq in 0..100 {
                store.write("users", "zoro", &payload(0, seq)).unwrap();
                match store.delete("users", "") {
                    Ok(()) => {}
                    Err(e) => assert!(e.is_not_found(), "unexpected error: {}", e),
                }
            }
            done.store(true, Ordering::SeqCst);
        });

        s.spawn(|| {
            while !done.load(Ordering::SeqCst) {
                match store.read_all("users") {
                    Ok(records) => assert!(records.len() <= 1),
                    Err(e) => assert!(e.is_not_found(), "unexpected error: {}", e),
                }
            }
        });
    });
}
