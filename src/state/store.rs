//! Session store — single-writer command loop over the state containers.
//!
//! DESIGN
//! ======
//! All mutation flows through one task that owns both containers. Each
//! command applies a pure transition, runs the storage effects it returned,
//! then publishes fresh snapshots on watch channels. Dispatch is
//! acknowledged: when `dispatch` returns, the command has been applied, so
//! a subsequent read observes it.
//!
//! STALE WRITES
//! ============
//! `SetUser` carries the session token its profile request was sent under.
//! The apply step drops the write when that token no longer matches the
//! live session, so a profile response that outlives its session (logout or
//! re-login while the request was in flight) cannot repopulate cleared
//! state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::warn;

use crate::error::Error;
use crate::net::types::UserProfile;
use crate::persist::TokenStore;
use crate::state::auth::{AuthState, Effect};
use crate::state::reader::StateReader;
use crate::state::user::UserState;

/// Mutations the store accepts. A closed set, matched exhaustively when
/// applied.
#[derive(Debug)]
pub enum Command {
    /// A login round trip returned this token.
    SetCredentials { token: String },
    /// A login round trip failed with this user-facing message.
    LoginFailed { message: String },
    /// End the session locally.
    Logout,
    /// Cache a profile fetched under `session`.
    SetUser { profile: UserProfile, session: String },
    /// Drop the cached profile.
    ClearUser,
}

struct CommandEnvelope {
    command: Command,
    ack: oneshot::Sender<()>,
}

/// Cloneable handle: dispatch plus snapshot access.
#[derive(Clone)]
pub struct Store {
    commands: mpsc::UnboundedSender<CommandEnvelope>,
    auth_rx: watch::Receiver<AuthState>,
    user_rx: watch::Receiver<UserState>,
}

impl Store {
    /// Spawn the owning task. `auth` seeds the session container (signed
    /// out, or restored from a persisted token); `tokens` is the storage
    /// the task runs `ClearPersistedToken` effects against.
    #[must_use]
    pub fn spawn(auth: AuthState, tokens: Arc<dyn TokenStore>) -> Self {
        let user = UserState::new();
        let (commands, inbox) = mpsc::unbounded_channel();
        let (auth_tx, auth_rx) = watch::channel(auth.clone());
        let (user_tx, user_rx) = watch::channel(user.clone());
        tokio::spawn(run(inbox, StoreTask { auth, user, auth_tx, user_tx, tokens }));
        Self { commands, auth_rx, user_rx }
    }

    /// Apply a command and wait until its transition and effects have run.
    ///
    /// # Errors
    /// `Error::StoreClosed` when the owning task is gone.
    pub async fn dispatch(&self, command: Command) -> Result<(), Error> {
        let (ack, applied) = oneshot::channel();
        self.commands
            .send(CommandEnvelope { command, ack })
            .map_err(|_| Error::StoreClosed)?;
        applied.await.map_err(|_| Error::StoreClosed)
    }

    /// Current session snapshot.
    #[must_use]
    pub fn auth(&self) -> AuthState {
        self.auth_rx.borrow().clone()
    }

    /// Current profile snapshot.
    #[must_use]
    pub fn user(&self) -> UserState {
        self.user_rx.borrow().clone()
    }

    /// Read-only view for presentation code.
    #[must_use]
    pub fn reader(&self) -> StateReader {
        StateReader::new(self.auth_rx.clone(), self.user_rx.clone())
    }
}

struct StoreTask {
    auth: AuthState,
    user: UserState,
    auth_tx: watch::Sender<AuthState>,
    user_tx: watch::Sender<UserState>,
    tokens: Arc<dyn TokenStore>,
}

async fn run(mut inbox: mpsc::UnboundedReceiver<CommandEnvelope>, mut task: StoreTask) {
    while let Some(CommandEnvelope { command, ack }) = inbox.recv().await {
        task.apply(command);
        // Ack only after state and effects are in place, so an awaited
        // dispatch is observable.
        let _ = ack.send(());
    }
}

impl StoreTask {
    fn apply(&mut self, command: Command) {
        match command {
            Command::SetCredentials { token } => {
                let (next, effects) = AuthState::with_credentials(token);
                self.auth = next;
                self.run_effects(&effects);
                self.publish_auth();
            }
            Command::LoginFailed { message } => {
                let (next, effects) = AuthState::login_failed(message);
                self.auth = next;
                self.run_effects(&effects);
                self.publish_auth();
            }
            Command::Logout => {
                let (next, effects) = AuthState::logged_out();
                self.auth = next;
                self.run_effects(&effects);
                self.publish_auth();
            }
            Command::SetUser { profile, session } => {
                // EDGE: the response belongs to a session that has since
                // ended or changed; dropping it keeps cleared state cleared.
                if self.auth.token.as_deref() != Some(session.as_str()) {
                    warn!(account = profile.id, "dropping profile write from a stale session");
                    return;
                }
                self.user = self.user.with_profile(profile);
                self.publish_user();
            }
            Command::ClearUser => {
                self.user = UserState::new();
                self.publish_user();
            }
        }
    }

    fn run_effects(&self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::ClearPersistedToken => self.clear_persisted_token(),
            }
        }
    }

    /// Remove the persisted token only when one is present, so sessions
    /// that never persisted anything do not issue removal calls.
    fn clear_persisted_token(&self) {
        match self.tokens.load() {
            Ok(Some(_)) => {
                if let Err(e) = self.tokens.remove() {
                    warn!(error = %e, "failed to remove persisted token");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "failed to inspect persisted token"),
        }
    }

    fn publish_auth(&self) {
        let _ = self.auth_tx.send(self.auth.clone());
    }

    fn publish_user(&self) {
        let _ = self.user_tx.send(self.user.clone());
    }
}
