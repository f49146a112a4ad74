use std::path::PathBuf;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Directory holding the seed fixture (`data/catalog.json`) and the
    /// product pictures (`Pics/`).
    pub content_root: PathBuf,
}

impl Config {
    pub fn pics_dir(&self) -> PathBuf {
        self.content_root.join("Pics")
    }
}
