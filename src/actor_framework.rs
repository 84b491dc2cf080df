//! Generic resource actor.
//!
//! Every collection of the data store (dresses, appointments, clients, users)
//! is owned by one [`ResourceActor`]. The actor processes one request at a
//! time, so each request is a single atomic read or read-modify-write on its
//! collection. Callers talk to it through a cloneable [`ResourceClient`].

use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Filter: Send + Sync + Debug;

    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Human readable kind, used in errors and spans.
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    /// Applies a patch. Implementations validate before mutating so a
    /// rejected patch leaves the record untouched.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    /// Whether this record belongs in a listing for `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Errors produced by the actor layer itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("{0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    /// Responds `true` when a record was removed.
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    // Insertion order is listing order.
    records: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Seeds the collection before the actor starts serving requests.
    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.records = records;
        self
    }

    #[instrument(name = "resource_actor", skip(self), fields(kind = T::KIND))]
    pub async fn run(mut self) {
        info!(records = self.records.len(), "Resource actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    self.handle_create(payload, respond_to);
                }
                ResourceRequest::List { filter, respond_to } => {
                    self.handle_list(filter, respond_to);
                }
                ResourceRequest::Get { id, respond_to } => {
                    self.handle_get(id, respond_to);
                }
                ResourceRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    self.handle_update(id, patch, respond_to);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    self.handle_delete(id, respond_to);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    self.handle_action(id, action, respond_to);
                }
                ResourceRequest::Shutdown => {
                    info!("Resource actor shutting down");
                    break;
                }
            }
        }

        info!("Resource actor stopped");
    }

    fn not_found(id: &T::Id) -> FrameworkError {
        FrameworkError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    #[instrument(skip(self, payload, respond_to))]
    fn handle_create(&mut self, payload: T::CreatePayload, respond_to: Response<T>) {
        debug!("Processing create request");

        let id = (self.next_id_fn)();
        let result = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected);

        match result {
            Ok(item) => {
                self.records.push(item.clone());
                info!(id = %id, "Record created");
                let _ = respond_to.send(Ok(item));
            }
            Err(e) => {
                warn!(error = %e, "Create rejected");
                let _ = respond_to.send(Err(e));
            }
        }
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, filter: T::Filter, respond_to: Response<Vec<T>>) {
        debug!("Processing list request");

        let items: Vec<T> = self
            .records
            .iter()
            .filter(|item| item.matches(&filter))
            .cloned()
            .collect();
        debug!(count = items.len(), "Listed records");

        let _ = respond_to.send(Ok(items));
    }

    #[instrument(fields(id = %id), skip(self, respond_to))]
    fn handle_get(&self, id: T::Id, respond_to: Response<Option<T>>) {
        let item = self.records.iter().find(|item| item.id() == &id).cloned();
        if item.is_none() {
            debug!("Record not found");
        }
        let _ = respond_to.send(Ok(item));
    }

    #[instrument(fields(id = %id), skip(self, patch, respond_to))]
    fn handle_update(&mut self, id: T::Id, patch: T::Patch, respond_to: Response<T>) {
        debug!("Processing update request");

        let result = match self.records.iter_mut().find(|item| item.id() == &id) {
            Some(item) => item
                .on_update(patch)
                .map(|()| item.clone())
                .map_err(FrameworkError::Rejected),
            None => Err(Self::not_found(&id)),
        };

        match &result {
            Ok(_) => info!("Record updated"),
            Err(e) => warn!(error = %e, "Update failed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(id = %id), skip(self, respond_to))]
    fn handle_delete(&mut self, id: T::Id, respond_to: Response<bool>) {
        let before = self.records.len();
        self.records.retain(|item| item.id() != &id);
        let removed = self.records.len() != before;

        if removed {
            info!("Record deleted");
        } else {
            debug!("Nothing to delete");
        }
        let _ = respond_to.send(Ok(removed));
    }

    #[instrument(fields(id = %id), skip(self, action, respond_to))]
    fn handle_action(&mut self, id: T::Id, action: T::Action, respond_to: Response<T::ActionResult>) {
        debug!(?action, "Processing action request");

        let result = match self.records.iter_mut().find(|item| item.id() == &id) {
            Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
            None => Err(Self::not_found(&id)),
        };
        let _ = respond_to.send(result);
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would demand `T: Clone` on every associated type.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn list(&self, filter: T::Filter) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
