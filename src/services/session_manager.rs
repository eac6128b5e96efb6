// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::vehicle::VehicleRecord;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Everything one user's views can see. Views receive it by `&mut` and never
/// touch another session.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub vehicle_data: Vec<VehicleRecord>,
    pub messages: Vec<ChatMessage>,
    pub last_active: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            id: id.into(),
            vehicle_data: Vec::new(),
            messages: Vec::new(),
            last_active: now,
        }
    }

    pub fn push_record(&mut self, record: VehicleRecord) -> usize {
        self.vehicle_data.push(record);
        self.vehicle_data.len()
    }

    /// Appends a user message and its reply together so the history length
    /// stays even between requests.
    pub fn push_exchange(&mut self, prompt: impl Into<String>, reply: impl Into<String>) -> usize {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: prompt.into(),
        });
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: reply.into(),
        });
        self.messages.len()
    }
}

#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // Create a fresh session and return its id.
    pub async fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());

        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), session);
        info!(session_id = %id, "session created");
        id
    }

    // Ensure there's a session with this id.
    pub async fn ensure_session(&self, id: &str) -> String {
        {
            let guard = self.inner.read().await;
            if guard.contains_key(id) {
                return id.to_string();
            }
        }
        let mut guard = self.inner.write().await;
        guard
            .entry(id.to_string())
            .or_insert_with(|| Session::new(id));
        info!(session_id = %id, "session created for client-supplied id");
        id.to_string()
    }

    /// Blank or missing ids get a new session.
    pub async fn resolve(&self, id: Option<&str>) -> String {
        match id {
            Some(s) if !s.trim().is_empty() => self.ensure_session(s).await,
            _ => self.create_session().await,
        }
    }

    /// Runs `f` against the session context under the write lock. The session
    /// is created if it does not exist yet.
    pub async fn with_session<T>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut guard = self.inner.write().await;
        let session = guard
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id));
        session.last_active = Instant::now();
        f(session)
    }

    pub async fn append_record(&self, session_id: &str, record: VehicleRecord) -> usize {
        self.with_session(session_id, |s| s.push_record(record)).await
    }

    pub async fn records(&self, session_id: &str) -> Option<Vec<VehicleRecord>> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.vehicle_data.clone())
    }

    pub async fn append_exchange(
        &self,
        session_id: &str,
        prompt: impl Into<String>,
        reply: impl Into<String>,
    ) -> usize {
        let (prompt, reply) = (prompt.into(), reply.into());
        self.with_session(session_id, |s| s.push_exchange(prompt, reply))
            .await
    }

    /// Get a copy of the chat history
    pub async fn get_history(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.messages.clone())
    }

    /// Remove a session by id
    pub async fn remove_session(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        let removed = guard.remove(session_id).is_some();
        if removed {
            info!(session_id, "session removed");
        }
        removed
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| now.duration_since(s.last_active) < self.ttl);
        let removed = before - guard.len();
        debug!(removed, remaining = guard.len(), "expired sessions purged");
        removed
    }

    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn list_session_ids(&self) -> Vec<String> {
        let guard = self.inner.read().await;
        guard.keys().cloned().collect()
    }
}
