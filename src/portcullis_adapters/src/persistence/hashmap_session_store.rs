use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use portcullis_core::{SessionId, SessionRecord, SessionStore, SessionStoreError};

/// Process-local session store. Records never expire.
#[derive(Default, Clone)]
pub struct HashMapSessionStore {
    records: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn commit(&self, id: &SessionId, record: &SessionRecord) -> Result<(), SessionStoreError> {
        self.records
            .write()
            .await
            .insert(id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.records.write().await.remove(id);
        Ok(())
    }
}
