#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use roster_core::{
    core::{FixedClock, RecordStore, ViewController},
    domain::Candidate,
    storage::{JsonFileBackend, MemoryBackend},
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Controller over a shared in-memory slot, pinned to `today`.
pub fn memory_controller(backend: &MemoryBackend, today: NaiveDate) -> ViewController {
    let store = RecordStore::open(Box::new(backend.clone()));
    ViewController::new(store, Box::new(FixedClock(today)))
}

/// File backend in a fresh directory under the `students` key.
pub fn file_backend() -> JsonFileBackend {
    JsonFileBackend::new(temp_dir().join("data"), "students").expect("create json backend")
}

pub fn third_student() -> Candidate {
    Candidate::new(
        "Сидоров",
        "Алексей",
        "Павлович",
        "2003-03-14",
        "2021",
        "ИСиП",
    )
}
