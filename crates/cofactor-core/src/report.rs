use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Summary of one computation, rendered for stdout and optionally written
/// as a JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeReport {
    pub matrix_size: usize,
    pub thread_count: usize,
    pub determinant: i64,
    pub elapsed_seconds: f64,
}

impl ComputeReport {
    pub fn render_human_summary(&self) -> String {
        format!(
            "Determinant: {}\nElapsed: {:.2} s ({} threads, {}x{} matrix)",
            self.determinant,
            self.elapsed_seconds,
            self.thread_count,
            self.matrix_size,
            self.matrix_size
        )
    }

    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, body)
    }
}
