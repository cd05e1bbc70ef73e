//! Bridges auth-provider events into an observable session snapshot.
//!
//! Consumers subscribe to a watch channel and always see the latest
//! [`SessionSnapshot`]. The bridge starts in `Loading` and only ever moves
//! to a resolved state on a definitive answer or on timeout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::profile::Profile;
use crate::domain::session::{SessionEvent, SessionSnapshot};
use crate::ports::{ProfileRepository, SessionValidator};

const DEFAULT_LOADING_TIMEOUT: Duration = Duration::from_secs(5);

pub struct SessionBridge {
    validator: Arc<dyn SessionValidator>,
    profiles: Arc<dyn ProfileRepository>,
    tx: watch::Sender<SessionSnapshot>,
    // Guards against overlapping refreshes when events arrive in bursts.
    refreshing: AtomicBool,
    loading_timeout: Duration,
}

impl SessionBridge {
    pub fn new(validator: Arc<dyn SessionValidator>, profiles: Arc<dyn ProfileRepository>) -> Self {
        let (tx, _) = watch::channel(SessionSnapshot::loading());
        Self {
            validator,
            profiles,
            tx,
            refreshing: AtomicBool::new(false),
            loading_timeout: DEFAULT_LOADING_TIMEOUT,
        }
    }

    pub fn with_loading_timeout(mut self, timeout: Duration) -> Self {
        self.loading_timeout = timeout;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Resolves the initial state from a stored token, if any.
    ///
    /// A validator that does not answer within the loading timeout resolves
    /// to signed-out rather than leaving consumers stuck in `Loading`.
    pub async fn resolve_initial(&self, access_token: Option<String>) {
        let Some(token) = access_token else {
            self.publish(SessionSnapshot::signed_out());
            return;
        };

        match tokio::time::timeout(self.loading_timeout, self.validator.validate(&token)).await {
            Ok(Ok(user)) => {
                let profile = self.load_profile(&user).await;
                self.publish(SessionSnapshot::signed_in(user, profile));
            }
            Ok(Err(err)) => {
                info!("stored session rejected: {err}");
                self.publish(SessionSnapshot::signed_out());
            }
            Err(_) => {
                warn!(
                    timeout = ?self.loading_timeout,
                    "session resolution timed out, treating as signed out"
                );
                self.publish(SessionSnapshot::signed_out());
            }
        }
    }

    /// Applies an auth-state change. Overlapping calls are dropped, not
    /// queued; a later definitive event will land.
    pub async fn handle_event(&self, event: SessionEvent) {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        match event.session {
            None => self.publish(SessionSnapshot::signed_out()),
            Some(session) => {
                let profile = self.load_profile(&session.user).await;
                self.publish(SessionSnapshot::signed_in(session.user, profile));
            }
        }

        self.refreshing.store(false, Ordering::Release);
    }

    /// Loads the user's profile, synthesizing a transient non-premium one
    /// on a missing row or a storage failure. Sign-in never blocks on the
    /// profile store.
    async fn load_profile(&self, user: &AuthenticatedUser) -> Profile {
        match self.profiles.find_by_id(&user.id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                info!(user = %user.id, "no profile row, synthesizing transient profile");
                Self::transient_profile(user)
            }
            Err(err) => {
                warn!(user = %user.id, "profile load failed, synthesizing transient profile: {err}");
                Self::transient_profile(user)
            }
        }
    }

    fn transient_profile(user: &AuthenticatedUser) -> Profile {
        Profile::new(
            user.id,
            Some(user.email.clone()),
            user.display_name.clone(),
        )
    }

    fn publish(&self, snapshot: SessionSnapshot) {
        self.tx.send_replace(snapshot);
    }
}
