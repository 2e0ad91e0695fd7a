//! Runs one `PostListView` on a tokio event loop.
//!
//! Input events and fetch completions are handled on the same task, one at a
//! time, so the view itself needs no locking. Each fetch runs as its own task;
//! issuing a new fetch aborts the ones it supersedes, and teardown aborts
//! whatever is still running.

use std::collections::HashMap;

use blog_core::{
    render_list, ApiError, Completion, Fetch, HttpResponse, PostListView, PostsClient, Ticket,
};
use tokio::{sync::mpsc, task::AbortHandle};

use crate::config::Config;
use crate::error::Result;
use crate::executor::HttpExecutor;

/// Something the user did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search field now holds this value.
    Input(String),
    /// No more input will come. The newest fetch still in flight is shown,
    /// then the session ends.
    Finish,
    /// The user navigated away. In-flight fetches are abandoned.
    Quit,
}

type Outcome = (Ticket, Result<HttpResponse, ApiError>);

pub struct Session {
    view: PostListView,
    executor: HttpExecutor,
    in_flight: HashMap<Ticket, AbortHandle>,
    done_tx: mpsc::UnboundedSender<Outcome>,
    done_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Ok(Self {
            view: PostListView::new(PostsClient::new(&config.api_url)),
            executor: HttpExecutor::new(config.fetch_timeout)?,
            in_flight: HashMap::new(),
            done_tx,
            done_rx,
        })
    }

    /// Mounts the view and processes events until `Quit`, until the event
    /// channel closes, or until nothing is in flight after `Finish`. Every
    /// applied completion sends the rendered list to `frames`.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<UiEvent>,
        frames: mpsc::UnboundedSender<String>,
    ) {
        let mount = self.view.mount();
        self.dispatch(mount);

        let mut finishing = false;
        loop {
            if finishing && self.in_flight.is_empty() {
                break;
            }
            tokio::select! {
                event = events.recv(), if !finishing => match event {
                    Some(UiEvent::Input(query)) => {
                        let fetch = self.view.search(&query);
                        self.dispatch(fetch);
                    }
                    Some(UiEvent::Finish) => {
                        tracing::debug!(pending = self.in_flight.len(), "input finished");
                        finishing = true;
                    }
                    Some(UiEvent::Quit) | None => break,
                },
                Some((ticket, outcome)) = self.done_rx.recv() => {
                    self.in_flight.remove(&ticket);
                    match self.view.complete(ticket, outcome) {
                        Completion::Applied { rows } => {
                            if frames.send(render_list(&rows)).is_err() {
                                tracing::debug!("frame receiver dropped");
                                break;
                            }
                        }
                        other => tracing::trace!(seq = ticket.seq(), ?other, "completion not shown"),
                    }
                }
            }
        }

        self.teardown();
    }

    fn dispatch(&mut self, fetch: Option<Fetch>) {
        let Some(Fetch { ticket, request }) = fetch else {
            return;
        };

        for (superseded, handle) in self.in_flight.drain() {
            tracing::debug!(seq = superseded.seq(), "aborting superseded fetch");
            handle.abort();
        }

        let executor = self.executor.clone();
        let done = self.done_tx.clone();
        let task = tokio::spawn(async move {
            let outcome = executor.execute(request).await;
            if done.send((ticket, outcome)).is_err() {
                tracing::trace!(seq = ticket.seq(), "session gone before fetch completed");
            }
        });
        self.in_flight.insert(ticket, task.abort_handle());
    }

    fn teardown(&mut self) {
        self.view.unmount();
        let pending = self.in_flight.len();
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
        tracing::debug!(pending, "session torn down");
    }
}
