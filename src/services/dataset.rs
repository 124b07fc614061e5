use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::models::{Dataset, Destination, DestinationReviews, Hotel, TourGuide};

/// Errors that can occur when reading a dataset file
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// File names of each collection inside the dataset directory
#[derive(Debug, Clone)]
pub struct DatasetFiles {
    pub destinations: String,
    pub reviews: String,
    pub hotels: String,
    pub guides: String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            destinations: "destinationBali.json".to_string(),
            reviews: "destinationReview.json".to_string(),
            hotels: "hotelsBali.json".to_string(),
            guides: "tourGuides.json".to_string(),
        }
    }
}

/// Loads the static JSON collections from disk
pub struct DatasetLoader {
    dir: PathBuf,
    files: DatasetFiles,
}

impl DatasetLoader {
    pub fn new<P: AsRef<Path>>(dir: P, files: DatasetFiles) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            files,
        }
    }

    /// Read and parse one collection file
    pub async fn load_collection<T>(&self, file: &str) -> Result<Vec<T>, DatasetError>
    where
        T: DeserializeOwned,
    {
        let path = self.dir.join(file);
        let path_str = path.display().to_string();

        tracing::debug!("Loading dataset file: {}", path_str);

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| DatasetError::ReadError {
                path: path_str.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| DatasetError::ParseError {
            path: path_str,
            source,
        })
    }

    /// Read a collection, treating an unavailable file as an empty one
    async fn load_or_empty<T>(&self, file: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        match self.load_collection(file).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Dataset unavailable, continuing with empty collection: {}", e);
                vec![]
            }
        }
    }

    /// Load every collection
    pub async fn load(&self) -> Dataset {
        let (destinations, reviews, hotels, guides) = tokio::join!(
            self.load_or_empty::<Destination>(&self.files.destinations),
            self.load_or_empty::<DestinationReviews>(&self.files.reviews),
            self.load_or_empty::<Hotel>(&self.files.hotels),
            self.load_or_empty::<TourGuide>(&self.files.guides),
        );

        tracing::info!(
            "Dataset loaded: {} destinations, {} review groups, {} hotels, {} guides",
            destinations.len(),
            reviews.len(),
            hotels.len(),
            guides.len()
        );

        Dataset {
            destinations,
            reviews,
            hotels,
            guides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bali-explore-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_load_collections() {
        let dir = scratch_dir();
        std::fs::write(
            dir.join("destinationBali.json"),
            r#"[{"Place": "Kuta Beach", "Location": "Kuta", "Google Reviews (Count)": 120, "Description": "beach"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("destinationReview.json"),
            r#"[{"place": "Kuta Beach", "reviews": [{"review": "Nice", "rating": 4}]}]"#,
        )
        .unwrap();

        let loader = DatasetLoader::new(&dir, DatasetFiles::default());
        let dataset = loader.load().await;

        assert_eq!(dataset.destinations.len(), 1);
        assert_eq!(dataset.reviews[0].reviews[0].rating, 4.0);
        // Missing files degrade to empty collections
        assert!(dataset.hotels.is_empty());
        assert!(dataset.guides.is_empty());

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_invalid_json_is_reported() {
        let dir = scratch_dir();
        std::fs::write(dir.join("hotelsBali.json"), "{not json").unwrap();

        let loader = DatasetLoader::new(&dir, DatasetFiles::default());
        let result = loader.load_collection::<Hotel>("hotelsBali.json").await;

        assert!(matches!(result, Err(DatasetError::ParseError { .. })));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let loader = DatasetLoader::new(scratch_dir(), DatasetFiles::default());
        let result = loader.load_collection::<TourGuide>("nope.json").await;

        assert!(matches!(result, Err(DatasetError::ReadError { .. })));
    }
}
