// Tracking service - Owns live motion sessions, one writer per session
use crate::application::footprint_calculator::compute;
use crate::application::motion_tracker::{on_fix, track_stream};
use crate::domain::error::CoreResult;
use crate::domain::footprint::FootprintReport;
use crate::domain::motion::{LocationFix, MotionSession};
use futures::Stream;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

type SharedSession = Arc<Mutex<MotionSession>>;

/// Sessions keyed by an id chosen by the caller. Each session has its own
/// lock, so `on_fix` never runs concurrently on one session while other
/// sessions stay available. The map lock is never held across an await.
#[derive(Clone, Default)]
pub struct TrackingService {
    sessions: Arc<Mutex<HashMap<String, SharedSession>>>,
}

impl TrackingService {
    pub fn new() -> Self {
        Self::default()
    }

    async fn get_or_start(&self, session_id: &str) -> SharedSession {
        self.sessions
            .lock()
            .await
            .entry(session_id.to_string())
            .or_default()
            .clone()
    }

    async fn get(&self, session_id: &str) -> Option<SharedSession> {
        self.sessions.lock().await.get(session_id).cloned()
    }

    /// Feed one fix, starting the session if it does not exist yet.
    /// Returns a snapshot of the session after the update.
    pub async fn record_fix(&self, session_id: &str, fix: LocationFix) -> CoreResult<MotionSession> {
        let shared = self.get_or_start(session_id).await;
        let mut session = shared.lock().await;

        if let Err(e) = on_fix(&mut session, fix) {
            tracing::warn!("Session {}: {}", session_id, e);
            return Err(e);
        }

        Ok(session.clone())
    }

    /// Consume a whole fix stream into a session. Only that session is
    /// locked until the stream ends, keeping the producer its only writer.
    pub async fn follow<S>(&self, session_id: &str, fixes: S) -> u64
    where
        S: Stream<Item = LocationFix>,
    {
        let shared = self.get_or_start(session_id).await;
        let mut session = shared.lock().await;
        track_stream(&mut session, fixes).await
    }

    pub async fn session(&self, session_id: &str) -> Option<MotionSession> {
        let shared = self.get(session_id).await?;
        let session = shared.lock().await;
        Some(session.clone())
    }

    /// End tracking and hand back the final state. Waits for a stream
    /// still feeding the session to finish.
    pub async fn stop(&self, session_id: &str) -> Option<MotionSession> {
        let shared = self.sessions.lock().await.remove(session_id)?;
        let session = shared.lock().await.clone();

        tracing::info!(
            "Session {} stopped after {} fixes, {:.3} km",
            session_id,
            session.fix_count,
            session.total_distance_km()
        );
        Some(session)
    }

    pub async fn reset(&self, session_id: &str) -> bool {
        match self.get(session_id).await {
            Some(shared) => {
                shared.lock().await.reset();
                true
            }
            None => false,
        }
    }

    /// Footprint for the distance tracked so far; `None` for an unknown session.
    pub async fn footprint(&self, session_id: &str, electricity_bill: f64) -> Option<CoreResult<FootprintReport>> {
        let shared = self.get(session_id).await?;
        let session = shared.lock().await;
        Some(compute(electricity_bill, &session.distance_by_mode))
    }
}
