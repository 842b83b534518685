//! Where the data files live: a local directory or an HTTP base URL.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// File names resolved against a [`DataSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    pub stays: String,
    pub pois: String,
    pub images: String,
    pub budget: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            stays: "stays.json".to_string(),
            pois: "pois.json".to_string(),
            images: "images.json".to_string(),
            budget: "budget.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DataSource {
    Dir(PathBuf),
    Http {
        base: String,
        client: reqwest::Client,
    },
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a directory.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Http {
                base: location.trim_end_matches('/').to_string(),
                client: reqwest::Client::new(),
            }
        } else {
            DataSource::Dir(PathBuf::from(location))
        }
    }

    /// Full path or URL for a file name.
    pub fn locate(&self, name: &str) -> String {
        match self {
            DataSource::Dir(dir) => dir.join(name).display().to_string(),
            DataSource::Http { base, .. } => format!("{}/{}", base, name.trim_start_matches('/')),
        }
    }

    pub async fn fetch_text(&self, name: &str) -> Result<String, LoadError> {
        let location = self.locate(name);
        tracing::debug!(%location, "fetching");
        match self {
            DataSource::Dir(_) => tokio::fs::read_to_string(&location)
                .await
                .map_err(|source| LoadError::Read {
                    path: location,
                    source,
                }),
            DataSource::Http { client, .. } => {
                let result = async {
                    client
                        .get(location.as_str())
                        .send()
                        .await?
                        .error_for_status()?
                        .text()
                        .await
                }
                .await;
                result.map_err(|source| LoadError::Fetch {
                    url: location,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_locate() {
        let dir = DataSource::parse("site/data");
        assert!(matches!(dir, DataSource::Dir(_)));
        assert_eq!(
            dir.locate("stays.json"),
            PathBuf::from("site/data").join("stays.json").display().to_string()
        );

        let http = DataSource::parse("https://example.org/trip/data/");
        assert_eq!(http.locate("pois.json"), "https://example.org/trip/data/pois.json");
    }

    #[tokio::test]
    async fn test_missing_local_file_is_read_error() {
        let src = DataSource::parse("/definitely/not/here");
        let err = src.fetch_text("stays.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.location().ends_with("stays.json"));
    }
}
