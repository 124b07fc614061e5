use std::sync::Arc;
use crate::services::store::{KeyValueStore, StoreError};

/// "My list" of favorite places, one list per session
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(session: &str) -> String {
        format!("myList:{}", session)
    }

    /// Places on the list, in the order they were added
    ///
    /// A stored value that is not a JSON string array reads as an empty list.
    pub async fn list(&self, session: &str) -> Result<Vec<String>, StoreError> {
        let raw = self.store.get(&Self::key(session)).await?;
        Ok(parse_list(raw, session))
    }

    pub async fn contains(&self, session: &str, place: &str) -> Result<bool, StoreError> {
        Ok(self.list(session).await?.iter().any(|p| p == place))
    }

    /// Add the place if absent, remove it if present
    ///
    /// Returns true when the place is on the list afterwards.
    pub async fn toggle(&self, session: &str, place: &str) -> Result<bool, StoreError> {
        let owner = session.to_string();
        let target = place.to_string();

        let stored = self
            .store
            .update(
                &Self::key(session),
                Box::new(move |current: Option<String>| {
                    let mut list = parse_list(current, &owner);
                    if list.contains(&target) {
                        list.retain(|p| p != &target);
                    } else {
                        list.push(target);
                    }
                    Some(serde_json::Value::from(list).to_string())
                }),
            )
            .await?;

        let list: Vec<String> = match stored {
            Some(json) => serde_json::from_str(&json)?,
            None => vec![],
        };
        let added = list.iter().any(|p| p == place);

        tracing::debug!("Favorite {} for {}: added={}", place, session, added);
        Ok(added)
    }
}

fn parse_list(raw: Option<String>, session: &str) -> Vec<String> {
    raw.and_then(|json| match serde_json::from_str::<Vec<String>>(&json) {
        Ok(list) => Some(list),
        Err(e) => {
            tracing::warn!("Discarding unreadable favorites for {}: {}", session, e);
            None
        }
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::MemoryStore;

    fn service() -> (FavoritesService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new(16));
        (FavoritesService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let (favorites, _) = service();

        assert!(favorites.toggle("s1", "Kuta Beach").await.unwrap());
        assert!(favorites.toggle("s1", "Tanah Lot Temple").await.unwrap());
        assert!(favorites.contains("s1", "Kuta Beach").await.unwrap());

        assert!(!favorites.toggle("s1", "Kuta Beach").await.unwrap());
        assert_eq!(favorites.list("s1").await.unwrap(), vec!["Tanah Lot Temple"]);
    }

    #[tokio::test]
    async fn test_sessions_are_separate() {
        let (favorites, _) = service();

        favorites.toggle("s1", "Kuta Beach").await.unwrap();
        assert!(favorites.list("s2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_list_reads_empty() {
        let (favorites, store) = service();
        store.set("myList:s1", "not json".to_string()).await.unwrap();

        assert!(favorites.list("s1").await.unwrap().is_empty());
        assert!(favorites.toggle("s1", "Kuta Beach").await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_toggles_keep_every_place() {
        let (favorites, _) = service();
        let favorites = Arc::new(favorites);

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let favorites = favorites.clone();
                tokio::spawn(async move { favorites.toggle("s", &format!("P{}", i)).await.unwrap() })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap());
        }

        let list = favorites.list("s").await.unwrap();
        assert_eq!(list.len(), 200);
        for i in 0..200 {
            assert!(list.contains(&format!("P{}", i)));
        }
    }
}
