use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use log::info;
use lru::LruCache;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::{MissionConfig, Timings};
use crate::core::page::MissionError;
use crate::mission::session::{MissionSession, SharedSession};
use crate::pages::ship::AssetLoader;

/// Live mission sessions, bounded by least-recent use
pub struct MissionRegistry {
    sessions: Mutex<LruCache<Uuid, SharedSession>>,
    timings: Timings,
    model_path: PathBuf,
    loader: Arc<dyn AssetLoader>,
}

impl MissionRegistry {
    pub fn new(config: &MissionConfig, loader: Arc<dyn AssetLoader>) -> Self {
        let capacity = NonZeroUsize::new(config.session_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
            timings: config.timings.clone(),
            model_path: config.model_path.clone(),
            loader,
        }
    }

    /// Start a new mission. The least recently used session is torn down
    /// when the registry is full.
    pub async fn create(&self) -> SharedSession {
        let session =
            MissionSession::launch(self.timings.clone(), self.model_path.clone(), self.loader.clone())
                .await;
        let id = session.read().await.id();

        let evicted = self.sessions.lock().await.push(id, session.clone());
        if let Some((old_id, old)) = evicted {
            if old_id != id {
                info!("Evicting mission {}", old_id);
                old.write().await.teardown();
            }
        }
        session
    }

    /// Look up a session, marking it as recently used
    pub async fn get(&self, id: &Uuid) -> Result<SharedSession, MissionError> {
        self.sessions
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| MissionError::UnknownSession(id.to_string()))
    }

    /// Look up a session by its textual id
    pub async fn find(&self, raw_id: &str) -> Result<SharedSession, MissionError> {
        let id = Uuid::parse_str(raw_id).map_err(|_| MissionError::UnknownSession(raw_id.to_string()))?;
        self.get(&id).await
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::{PageAction, ViewId};
    use crate::pages::ship::MockAssetLoader;
    use std::time::Duration;

    fn registry(capacity: usize) -> MissionRegistry {
        let config = MissionConfig {
            session_capacity: capacity,
            ..MissionConfig::default()
        };
        let mut loader = MockAssetLoader::new();
        loader
            .expect_load()
            .returning(|_| Err(MissionError::AssetLoad("no model".to_string())));
        MissionRegistry::new(&config, Arc::new(loader))
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_and_find() {
        let registry = registry(4);
        let session = registry.create().await;
        let id = session.read().await.id();

        let found = registry.find(&id.to_string()).await.unwrap();
        assert!(Arc::ptr_eq(&session, &found));
        assert!(matches!(
            registry.find("not-a-uuid").await,
            Err(MissionError::UnknownSession(_))
        ));
        assert!(registry.get(&Uuid::new_v4()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_eviction_tears_down_oldest() {
        let registry = registry(2);
        let first = registry.create().await;
        first.write().await.apply_action(PageAction::Board).unwrap();

        registry.create().await;
        registry.create().await;
        assert_eq!(registry.len().await, 2);

        let first_id = first.read().await.id();
        assert!(registry.get(&first_id).await.is_err());

        // The evicted session's wall sequence never completes
        tokio::time::sleep(Duration::from_millis(3000)).await;
        let s = first.read().await;
        assert_eq!(s.current_view(), ViewId::Landing);
        assert!(s.screen().overlay.is_none());
    }
}
