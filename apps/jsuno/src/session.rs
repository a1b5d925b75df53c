//! Per-visitor session state, keyed by a cookie id.
//!
//! Each session is an explicit context object owned by the store. Handlers
//! take a snapshot, release the lock across any model call, and write back
//! only the fields they own.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderMap, HeaderValue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::MAX_SESSION_TTL_SECS;
use crate::pack::models::PromptPack;

pub const SESSION_COOKIE: &str = "jsuno_session";
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
    Warning,
    Error,
}

/// A one-shot inline message shown on the next render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub input_text: String,
    pub pack: Option<PromptPack>,
    pub rewrite_instruction: String,
    pub flash: Option<Flash>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            input_text: String::new(),
            pack: None,
            rewrite_instruction: String::new(),
            flash: None,
            last_seen: Utc::now(),
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: chrono::Duration,
}

impl SessionStore {
    /// `ttl_secs` is clamped to `MAX_SESSION_TTL_SECS`.
    pub fn new(ttl_secs: u64) -> Self {
        let secs = ttl_secs.min(MAX_SESSION_TTL_SECS) as i64;
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: chrono::Duration::seconds(secs),
        }
    }

    /// Returns the live session named by the request cookie, or creates one.
    /// The returned id must be echoed back with `session_cookie`.
    pub async fn resume_or_create(&self, headers: &HeaderMap) -> Session {
        let mut sessions = self.sessions.write().await;
        if let Some(id) = session_id_from_headers(headers) {
            if let Some(session) = sessions.get_mut(&id) {
                session.last_seen = Utc::now();
                return session.clone();
            }
        }

        let session = Session::new(Uuid::new_v4());
        debug!("Created session {}", session.id);
        sessions.insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Applies `f` to the session if it still exists. Returns whether it did.
    pub async fn update<F>(&self, id: Uuid, f: F) -> bool
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id) {
            Some(session) => {
                f(session);
                session.last_seen = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Removes and returns the pending flash message.
    pub async fn take_flash(&self, id: Uuid) -> Option<Flash> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).and_then(|s| s.flash.take())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions idle for longer than the TTL. Returns how many were removed.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.ttl);
        before - sessions.len()
    }

    /// Spawns the background sweeper. Runs for the life of the process.
    pub fn spawn_sweeper(&self) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                let removed = store.purge_expired(Utc::now()).await;
                if removed > 0 {
                    info!("Expired {removed} idle sessions");
                }
            }
        })
    }
}

/// Reads the session id from the `Cookie` header(s).
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to `id`.
pub fn session_cookie(id: Uuid) -> HeaderValue {
    // A hyphenated UUID is always a valid header value.
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("jsuno_session=; Path=/"))
}
