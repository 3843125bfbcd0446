use crate::api::PersonClient;
use crate::state::{DirectoryState, SearchMode};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

/// Delay between the last keystroke and the search it triggers
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
/// How long count / connectivity messages stay on screen
const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Controller for the person directory. Holds the whole view state in one
/// signal and runs every backend call; components only render the state and
/// invoke the named operations.
#[derive(Clone)]
pub struct DirectoryContext {
    pub state: Signal<DirectoryState>,
    client: Rc<PersonClient>,
    // At most one debounce timer alive; a keystroke cancels the previous one
    pending_search: Signal<Option<Task>>,
    pending_clear: Signal<Option<Task>>,
}

impl DirectoryContext {
    pub fn new(client: PersonClient) -> Self {
        Self {
            state: Signal::new(DirectoryState::new()),
            client: Rc::new(client),
            pending_search: Signal::new(None),
            pending_clear: Signal::new(None),
        }
    }

    pub fn api_base_url(&self) -> String {
        self.client.base_url().to_string()
    }

    /// Replace the list with everything the backend has
    pub fn load_all(&self) {
        let mut state = self.state;
        state.write().begin_request();

        let ctx = self.clone();
        spawn(async move {
            ctx.refresh().await;
        });
    }

    async fn refresh(&self) {
        let mut state = self.state;
        match self.client.list().await {
            Ok(persons) => state.write().persons_loaded(persons),
            Err(e) => {
                warn!("Loading persons failed: {e}");
                state
                    .write()
                    .request_failed(format!("Failed to load persons: {e}"));
            }
        }
    }

    /// Record a keystroke and (re)arm the debounce timer
    pub fn search_input(&self, term: String) {
        let mut state = self.state;
        state.write().search_term_changed(term);

        let mut pending = self.pending_search;
        if let Some(task) = pending.take() {
            task.cancel();
        }

        let ctx = self.clone();
        let task = spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            ctx.run_search();
        });
        pending.set(Some(task));
    }

    /// Run the search now. An empty term is the same as loading everything.
    pub fn run_search(&self) {
        let term = self.state.read().search_term.trim().to_string();
        if term.is_empty() {
            self.load_all();
            return;
        }

        let mode = self.state.read().search_mode;
        let mut state = self.state;
        state.write().begin_request();

        let ctx = self.clone();
        spawn(async move {
            let mut state = ctx.state;
            let result = match mode {
                SearchMode::Name => ctx.client.search_by_name(&term).await,
                SearchMode::Department => ctx.client.search_by_department(&term).await,
            };
            match result {
                Ok(persons) => state.write().persons_loaded(persons),
                Err(e) => {
                    warn!("Search failed: {e}");
                    state.write().request_failed(format!("Search failed: {e}"));
                }
            }
        });
    }

    pub fn set_search_mode(&self, mode: SearchMode) {
        let mut state = self.state;
        state.write().search_mode_changed(mode);
    }

    /// Drop the search term and any armed timer, then reload everything
    pub fn clear_search(&self) {
        let mut pending = self.pending_search;
        if let Some(task) = pending.take() {
            task.cancel();
        }

        let mut state = self.state;
        state.write().search_term_changed(String::new());
        self.load_all();
    }

    /// Validate the form, then create or update depending on the edit
    /// target. Validation failures never reach the network; API failures
    /// leave the modal open.
    pub fn submit(&self) {
        let validated = self.state.read().form.validate();
        let payload = match validated {
            Ok(payload) => payload,
            Err(e) => {
                let mut state = self.state;
                state.write().request_failed(e.to_string());
                return;
            }
        };

        let editing_id = self.state.read().editing.as_ref().and_then(|p| p.id);
        let mut state = self.state;
        state.write().begin_mutation();

        let ctx = self.clone();
        spawn(async move {
            let mut state = ctx.state;
            let result = match editing_id {
                Some(id) => ctx
                    .client
                    .update(id, &payload)
                    .await
                    .map(|_| "Person updated successfully!"),
                None => ctx
                    .client
                    .create(&payload)
                    .await
                    .map(|_| "Person created successfully!"),
            };

            match result {
                Ok(message) => {
                    state.write().saved(message);
                    state.write().begin_request();
                    ctx.refresh().await;
                }
                Err(e) => {
                    warn!("Saving person failed: {e}");
                    state.write().request_failed(e.to_string());
                }
            }
        });
    }

    /// Delete a record. Callers must have confirmed with the user first.
    pub fn delete_person(&self, id: i64) {
        let mut state = self.state;
        state.write().begin_mutation();

        let ctx = self.clone();
        spawn(async move {
            let mut state = ctx.state;
            match ctx.client.delete(id).await {
                Ok(_) => {
                    state.write().deleted();
                    state.write().begin_request();
                    ctx.refresh().await;
                }
                Err(e) => {
                    warn!("Deleting person {id} failed: {e}");
                    state.write().request_failed(e.to_string());
                }
            }
        });
    }

    /// Ask the backend how many records it holds; the message auto-clears
    pub fn fetch_count(&self) {
        let ctx = self.clone();
        spawn(async move {
            let mut state = ctx.state;
            match ctx.client.count().await {
                Ok(count) => {
                    state.write().count_received(count.count);
                    ctx.schedule_success_clear();
                }
                Err(e) => state.write().background_failed(e.to_string()),
            }
        });
    }

    /// Connectivity check. A transport-level failure gets replaced with a
    /// troubleshooting hint; HTTP errors pass through unchanged.
    pub fn test_connection(&self) {
        let mut state = self.state;
        state.write().begin_mutation();

        let ctx = self.clone();
        spawn(async move {
            let mut state = ctx.state;
            match ctx.client.test_connection().await {
                Ok(report) => {
                    state.write().connection_ok(&report);
                    state.write().begin_request();
                    ctx.refresh().await;
                    ctx.schedule_success_clear();
                }
                Err(e) if e.is_network() => {
                    warn!("Connectivity check failed at transport level: {e}");
                    state
                        .write()
                        .request_failed(network_hint(ctx.client.base_url()));
                }
                Err(e) => state.write().request_failed(e.to_string()),
            }
        });
    }

    pub fn open_create(&self) {
        let mut state = self.state;
        state.write().open_create();
    }

    pub fn edit_person(&self, person: crate::api::Person) {
        let mut state = self.state;
        state.write().open_edit(person);
    }

    pub fn close_modal(&self) {
        let mut state = self.state;
        state.write().close_modal();
    }

    pub fn clear_error(&self) {
        let mut state = self.state;
        state.write().clear_error();
    }

    pub fn clear_success(&self) {
        let mut state = self.state;
        state.write().clear_success();
    }

    /// Cancel armed timers. Called when the directory view unmounts so a
    /// stale timer cannot fire into a dead view.
    pub fn cancel_pending(&self) {
        let mut pending = self.pending_search;
        if let Some(task) = pending.take() {
            task.cancel();
        }
        let mut clear = self.pending_clear;
        if let Some(task) = clear.take() {
            task.cancel();
        }
    }

    fn schedule_success_clear(&self) {
        let mut pending = self.pending_clear;
        if let Some(task) = pending.take() {
            task.cancel();
        }

        let mut state = self.state;
        let task = spawn(async move {
            tokio::time::sleep(MESSAGE_TTL).await;
            state.write().clear_success();
        });
        pending.set(Some(task));
    }
}

fn network_hint(base_url: &str) -> String {
    format!(
        "CORS/Network error. Check if:\n\
         1. The backend is running at {base_url}\n\
         2. CORS is properly configured\n\
         3. You can open {base_url} in a browser"
    )
}
