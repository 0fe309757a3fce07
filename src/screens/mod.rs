//! Screen state for the client listing, creation and edit flows.
//!
//! Screens own their form state and talk to the outside world only through
//! the collaborators bundled in [`ScreenContext`].

pub mod banner;
pub mod client_list;
pub mod edit_client;
pub mod new_client;

use std::fmt;

use clients_domain::{ClientFields, ClientId, ClientRecord};

use crate::{api::ClientApi, cache::ClientListCache, time::Clock, timer::TimerQueue};

pub use banner::Banner;
pub use client_list::{load_client_list, refresh_client_list};
pub use edit_client::EditClientScreen;
pub use new_client::NewClientScreen;

/// Destinations a screen can redirect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ClientList,
    NewClient,
    EditClient(ClientId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::ClientList => "/".into(),
            Route::NewClient => "/clients/new".into(),
            Route::EditClient(id) => format!("/clients/{}/edit", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs redirects requested by screens.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// One-time confirmation shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn client_updated() -> Self {
        Self::new("Updated", "The client was updated successfully")
    }
}

/// Displays modal-style confirmations.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// External collaborators a screen needs while handling an event.
#[derive(Clone, Copy)]
pub struct ScreenContext<'a> {
    pub api: &'a dyn ClientApi,
    pub cache: &'a dyn ClientListCache,
    pub navigator: &'a dyn Navigator,
    pub notifier: &'a dyn Notifier,
    pub clock: &'a dyn Clock,
    pub timers: &'a TimerQueue,
}

/// Result of a submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Prefill data has not arrived; the form accepts no input yet.
    NotReady,
    /// Validation failed; nothing was sent.
    Blocked { invalid: usize },
    Created(ClientRecord),
    Updated(ClientFields),
    /// The mutation failed with this message.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_) | SubmitOutcome::Updated(_))
    }
}
