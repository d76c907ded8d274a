use std::path::{Path, PathBuf};

/// The shipped reference-data directory, relative to the crate root where
/// `cargo test` runs.
pub const DATA_DIR: &str = "data";

pub fn data_dir() -> &'static Path {
    Path::new(DATA_DIR)
}

/// Copy the shipped data directory into a scratch directory so a test can
/// corrupt individual files without touching the real tables. Returns the
/// scratch root.
pub fn scratch_data_dir(tag: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("quran-meta-test-{}-{}", tag, std::process::id()));
    let chapters = root.join("chapters");
    std::fs::create_dir_all(&chapters).expect("create scratch dir");
    for entry in std::fs::read_dir(data_dir()).expect("read data dir") {
        let entry = entry.expect("read data entry");
        if entry.path().is_file() {
            std::fs::copy(entry.path(), root.join(entry.file_name())).expect("copy mapping file");
        }
    }
    for entry in std::fs::read_dir(data_dir().join("chapters")).expect("read chapters dir") {
        let entry = entry.expect("read chapters entry");
        std::fs::copy(entry.path(), chapters.join(entry.file_name())).expect("copy chapter table");
    }
    root
}
