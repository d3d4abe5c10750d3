use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::interview::session::PreparationSession;

/// Opens and tracks preparation interactions.
///
/// Each interaction owns at most one `PreparationSession`; handing it out
/// through `&mut` means two parts of one interaction can never hold it at
/// once, and separate interactions never share one.
#[derive(Debug, Clone, Default)]
pub struct SessionLifecycleManager {
    active: Arc<AtomicUsize>,
}

impl SessionLifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_interaction(&self) -> Interaction {
        self.active.fetch_add(1, Ordering::SeqCst);
        let interaction = Interaction {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            session: None,
            active: Arc::clone(&self.active),
        };
        debug!("Opened interaction {}", interaction.id);
        interaction
    }

    /// Number of interactions opened and not yet discarded.
    pub fn active_interactions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// One caller's preparation interaction, from resume upload to answer evaluation.
/// Dropping it discards its session.
#[derive(Debug)]
pub struct Interaction {
    id: Uuid,
    started_at: DateTime<Utc>,
    session: Option<PreparationSession>,
    active: Arc<AtomicUsize>,
}

impl Interaction {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns this interaction's session in the `Empty` state, creating it on
    /// first use and resetting it otherwise.
    pub fn new_or_reset_session(&mut self) -> &mut PreparationSession {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
        self.session.get_or_insert_with(PreparationSession::new)
    }

    #[allow(dead_code)]
    pub fn session(&self) -> Option<&PreparationSession> {
        self.session.as_ref()
    }

    /// Ends the interaction. Equivalent to dropping it.
    #[allow(dead_code)]
    pub fn discard(self) {}
}

impl Drop for Interaction {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
        let elapsed = Utc::now() - self.started_at;
        debug!(
            "Discarded interaction {} after {}ms",
            self.id,
            elapsed.num_milliseconds()
        );
    }
}
