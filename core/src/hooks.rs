//! Resource-fetch hooks: `PostsHook` for the feed and `PostHook` for a single
//! post.
//!
//! # Design
//! A hook owns one `Resource` inside a `watch` channel. `fetch(key)` takes
//! the ticket synchronously, before the returned future is first polled, so
//! the order in which callers *ask* for keys decides which response wins,
//! not the order in which responses arrive. Ticket issuance and settlement
//! are single `send_if_modified` closures, so observers only ever see whole
//! snapshots.
//!
//! A fetch future that is dropped before its response is committed abandons
//! its ticket: the hook goes back to the phase it had before the request and
//! forgets the key, so asking for the same key again issues a new request.
//!
//! The two endpoints differ only in key type, request construction and
//! parsing; `Endpoint` captures that difference and `Hook` does the rest.

use std::fmt;
use std::future::Future;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::client::BlogClient;
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::{FetchState, Resource, Ticket};
use crate::transport::Transport;
use crate::types::Post;

/// What a hook fetches: key type, empty default and wire mapping.
pub trait Endpoint {
    type Key: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;
    type Data: Clone + Default + Send + Sync + 'static;

    /// `None` means the key selects nothing and no request is issued.
    fn request(client: &BlogClient, key: &Self::Key) -> Option<HttpRequest>;

    fn parse(client: &BlogClient, response: HttpResponse) -> Result<Self::Data, FetchError>;
}

/// `GET /api/posts[?limit=N]`, keyed by the optional limit.
#[derive(Debug, Clone, Copy)]
pub struct PostList;

impl Endpoint for PostList {
    type Key = Option<u32>;
    type Data = Vec<Post>;

    fn request(client: &BlogClient, limit: &Option<u32>) -> Option<HttpRequest> {
        Some(client.build_list_posts(*limit))
    }

    fn parse(client: &BlogClient, response: HttpResponse) -> Result<Vec<Post>, FetchError> {
        client.parse_list_posts(response)
    }
}

/// `GET /api/posts/{id}`, keyed by id. An empty id issues nothing.
#[derive(Debug, Clone, Copy)]
pub struct PostItem;

impl Endpoint for PostItem {
    type Key = String;
    type Data = Option<Post>;

    fn request(client: &BlogClient, id: &String) -> Option<HttpRequest> {
        if id.is_empty() {
            return None;
        }
        Some(client.build_get_post(id))
    }

    fn parse(client: &BlogClient, response: HttpResponse) -> Result<Option<Post>, FetchError> {
        client.parse_get_post(response).map(Some)
    }
}

pub type PostsHook<Tr> = Hook<PostList, Tr>;
pub type PostHook<Tr> = Hook<PostItem, Tr>;

/// One view's fetch state for one endpoint. Not shared between views.
pub struct Hook<E: Endpoint, Tr> {
    client: BlogClient,
    transport: Tr,
    slot: watch::Sender<Resource<E::Key, E::Data>>,
}

impl<E: Endpoint, Tr: Transport> Hook<E, Tr> {
    /// Starts in the loading state with empty data, as a freshly mounted
    /// view would.
    pub fn new(client: BlogClient, transport: Tr) -> Self {
        let (slot, _) = watch::channel(Resource::new());
        Self {
            client,
            transport,
            slot,
        }
    }

    pub fn transport(&self) -> &Tr {
        &self.transport
    }

    pub fn snapshot(&self) -> FetchState<E::Data> {
        self.slot.borrow().state().clone()
    }

    /// The current snapshot, then every committed transition.
    pub fn observe(&self) -> impl Stream<Item = FetchState<E::Data>> + Send + 'static {
        WatchStream::new(self.slot.subscribe()).map(|resource| resource.state().clone())
    }

    /// Request the resource for `key` and resolve to the hook's state once
    /// this request has finished.
    ///
    /// The request starts as soon as `fetch` is called. If `key` is already
    /// the active key nothing is issued. If another key is requested before
    /// this one resolves, this response is discarded and the returned
    /// snapshot reflects whatever the newer request has produced so far.
    pub fn fetch(&self, key: E::Key) -> impl Future<Output = FetchState<E::Data>> + '_ {
        let started = self.start(key).map(|(ticket, request)| {
            let in_flight = InFlight {
                slot: &self.slot,
                ticket,
                armed: true,
            };
            (in_flight, request)
        });
        async move {
            if let Some((mut in_flight, request)) = started {
                let outcome = match self.transport.execute(&request).await {
                    Ok(response) => E::parse(&self.client, response),
                    Err(err) => Err(FetchError::from(err)),
                };
                self.settle(in_flight.disarm(), &request, outcome);
            }
            self.snapshot()
        }
    }

    fn start(&self, key: E::Key) -> Option<(Ticket, HttpRequest)> {
        let mut started = None;
        self.slot.send_if_modified(|resource| {
            if resource.is_active(&key) {
                return false;
            }
            match E::request(&self.client, &key) {
                Some(request) => {
                    debug!(?key, url = %request.url, "starting fetch");
                    let ticket = resource.begin(key);
                    started = Some((ticket, request));
                }
                None => {
                    debug!(?key, "key selects nothing, no request issued");
                    resource.park(key);
                }
            }
            true
        });
        started
    }

    fn settle(&self, ticket: Ticket, request: &HttpRequest, outcome: Result<E::Data, FetchError>) {
        if let Err(err) = &outcome {
            warn!(url = %request.url, error = %err, "fetch failed");
        }
        let committed = self
            .slot
            .send_if_modified(|resource| resource.settle(ticket, outcome));
        if !committed {
            debug!(
                url = %request.url,
                generation = ticket.generation(),
                "dropping superseded response"
            );
        }
    }
}

/// A ticket whose outcome has not been committed. Dropping it while still
/// armed abandons the request.
struct InFlight<'a, K: PartialEq, T: Default> {
    slot: &'a watch::Sender<Resource<K, T>>,
    ticket: Ticket,
    armed: bool,
}

impl<K: PartialEq, T: Default> InFlight<'_, K, T> {
    fn disarm(&mut self) -> Ticket {
        self.armed = false;
        self.ticket
    }
}

impl<K: PartialEq, T: Default> Drop for InFlight<'_, K, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let ticket = self.ticket;
        if self.slot.send_if_modified(|resource| resource.abandon(ticket)) {
            debug!(generation = ticket.generation(), "fetch cancelled, request abandoned");
        }
    }
}
