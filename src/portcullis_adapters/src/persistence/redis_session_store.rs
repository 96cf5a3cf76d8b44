use std::sync::Arc;

use portcullis_core::{SessionId, SessionRecord, SessionStore, SessionStoreError};
use redis::{Commands, Connection};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<Mutex<Connection>>,
    time_to_live_secs: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<Mutex<Connection>>, time_to_live_secs: u64) -> Self {
        Self {
            conn,
            time_to_live_secs,
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    #[tracing::instrument(name = "Loading session from Redis", skip_all)]
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let key = get_key(id);
        let raw: Option<String> = {
            let mut conn = self.conn.lock().await;
            conn.get(&key)
                .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?
        };

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| SessionStoreError::Corrupted(e.to_string()))
        })
        .transpose()
    }

    #[tracing::instrument(name = "Committing session to Redis", skip_all)]
    async fn commit(&self, id: &SessionId, record: &SessionRecord) -> Result<(), SessionStoreError> {
        let key = get_key(id);
        let json = serde_json::to_string(record)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        let mut conn = self.conn.lock().await;
        conn.set_ex::<_, _, ()>(key, json, self.time_to_live_secs)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Deleting session from Redis", skip_all)]
    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let key = get_key(id);
        let mut conn = self.conn.lock().await;
        conn.del::<_, ()>(key)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }
}

const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(id: &SessionId) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, id.as_str())
}
