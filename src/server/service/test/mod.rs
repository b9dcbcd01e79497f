use std::{collections::HashMap, path::Path};

mod course;
mod lecture;
mod user;

/// Builds multipart text fields from name/value pairs.
fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Writes an asset file under `dir` and returns its stored path.
fn write_asset(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, b"asset").unwrap();
    path.to_string_lossy().into_owned()
}

fn exists(path: &str) -> bool {
    Path::new(path).exists()
}
