//! Conversion sessions
//!
//! A session holds two independent pieces of state: the text currently being
//! edited and the result of the last conversion that succeeded. A failed
//! conversion never touches the stored result.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use numconv_core::{ConversionResult, Converter, ParseFailure};
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::watch;

use crate::ServerError;

/// Session state
pub struct ConversionSession {
    /// Session ID
    pub id: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    last_activity: RwLock<Instant>,
    input: RwLock<String>,
    result: RwLock<Option<ConversionResult>>,
}

/// Serializable view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub input: String,
    pub result: Option<ConversionResult>,
    pub created_at: DateTime<Utc>,
}

impl ConversionSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            last_activity: RwLock::new(Instant::now()),
            input: RwLock::new(String::new()),
            result: RwLock::new(None),
        }
    }

    pub fn input(&self) -> String {
        self.input.read().clone()
    }

    /// Replace the input text; the stored result is kept
    pub fn set_input(&self, text: impl Into<String>) {
        *self.input.write() = text.into();
        self.touch();
    }

    /// Last successful result, if any
    pub fn result(&self) -> Option<ConversionResult> {
        self.result.read().clone()
    }

    /// Convert the current input
    ///
    /// On success the result replaces the stored one. On failure the stored
    /// result is left as it was.
    pub fn convert(&self, converter: &dyn Converter) -> Result<ConversionResult, ParseFailure> {
        let input = self.input();
        self.touch();

        let result = converter.convert(&input)?;
        *self.result.write() = Some(result.clone());
        Ok(result)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.clone(),
            input: self.input(),
            result: self.result(),
            created_at: self.created_at,
        }
    }

    /// Update last activity
    pub fn touch(&self) {
        *self.last_activity.write() = Instant::now();
    }

    /// Check if session is expired
    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.last_activity.read().elapsed() > timeout
    }
}

/// Session manager
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<ConversionSession>>>,
    max_sessions: usize,
    session_timeout: Duration,
    cleanup_interval: Duration,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(max_sessions: usize) -> Self {
        Self::with_config(
            max_sessions,
            Duration::from_secs(3600),
            Duration::from_secs(300),
        )
    }

    /// Create a new session manager with custom timeout and cleanup interval
    pub fn with_config(
        max_sessions: usize,
        session_timeout: Duration,
        cleanup_interval: Duration,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            session_timeout,
            cleanup_interval,
        }
    }

    /// Start a background task that periodically removes expired sessions
    ///
    /// Send `true` on the returned channel to stop it.
    pub fn start_cleanup_task(self: &Arc<Self>) -> watch::Sender<bool> {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let manager = Arc::clone(self);
        let interval = manager.cleanup_interval;

        tokio::spawn(async move {
            let mut interval_timer = tokio::time::interval(interval);
            interval_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval_timer.tick() => {
                        let removed = manager.cleanup_expired();
                        if removed > 0 {
                            tracing::info!(
                                removed,
                                remaining = manager.count(),
                                "Session cleanup removed expired sessions"
                            );
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            tracing::info!("Session cleanup task shutting down");
                            break;
                        }
                    }
                }
            }
        });

        shutdown_tx
    }

    /// Create a new session
    pub fn create(&self) -> Result<Arc<ConversionSession>, ServerError> {
        let mut sessions = self.sessions.write();

        if sessions.len() >= self.max_sessions {
            self.cleanup_expired_internal(&mut sessions);

            if sessions.len() >= self.max_sessions {
                tracing::warn!(max = self.max_sessions, "Session limit reached");
                return Err(ServerError::SessionLimit(self.max_sessions));
            }
        }

        let id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(ConversionSession::new(&id));
        sessions.insert(id.clone(), session.clone());

        tracing::info!(session_id = %id, "Created session");
        Ok(session)
    }

    /// Get a session by ID
    pub fn get(&self, id: &str) -> Option<Arc<ConversionSession>> {
        self.sessions.read().get(id).cloned()
    }

    /// Remove a session; returns whether it existed
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().remove(id).is_some();
        if removed {
            tracing::info!(session_id = %id, "Removed session");
        }
        removed
    }

    /// Get active session count
    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Remove expired sessions; returns how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write();
        self.cleanup_expired_internal(&mut sessions)
    }

    fn cleanup_expired_internal(
        &self,
        sessions: &mut HashMap<String, Arc<ConversionSession>>,
    ) -> usize {
        let timeout = self.session_timeout;
        let before = sessions.len();
        sessions.retain(|id, s| {
            let keep = !s.is_expired(timeout);
            if !keep {
                tracing::debug!(session_id = %id, "Expired session");
            }
            keep
        });
        before - sessions.len()
    }

    /// List all session IDs
    pub fn list(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }
}
