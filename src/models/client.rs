use serde::Serialize;
use std::path::PathBuf;

/// One entry of the client book, plus its resolved log directory.
/// Every metadata field is optional; there are no sentinel values.
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub slug: String,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub phone: Option<String>,
    /// Hourly billing rate.
    pub rate: Option<f64>,
    pub logs_dir: PathBuf,
}

impl Client {
    pub fn new(slug: &str, logs_dir: PathBuf) -> Self {
        Self {
            slug: slug.to_string(),
            full_name: None,
            address: None,
            city: None,
            state: None,
            zipcode: None,
            phone: None,
            rate: None,
            logs_dir,
        }
    }

    /// Display name: the full name when present, the slug otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.slug)
    }
}
