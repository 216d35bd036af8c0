use std::fmt::Debug;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument, warn};

use crate::file_store::Persistence;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Identifier assigned to every managed record.
pub type EntityId = u64;

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> EntityId;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: EntityId, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    /// Checks a create payload against the whole collection before an id is assigned.
    ///
    /// An `Err` here always means the payload conflicts with a stored record and
    /// surfaces as [`FrameworkError::Conflict`]; every other hook failure is a
    /// [`FrameworkError::Rejected`].
    fn validate_create(_existing: &[Self], _payload: &Self::CreatePayload) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(EntityId),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Rejected(String),
    #[error("No identifiers left to assign")]
    IdsExhausted,
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// `1` for an empty collection, otherwise one past the highest id in use.
///
/// `None` once the highest id is `EntityId::MAX`.
pub fn next_id<T: Entity>(items: &[T]) -> Option<EntityId> {
    match items.iter().map(Entity::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: EntityId,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: EntityId,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: EntityId,
        respond_to: Response<()>,
    },
    Action {
        id: EntityId,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one ordered collection and mirrors it to its store after every mutation.
pub struct ResourceActor<T: Entity> {
    name: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    items: Vec<T>,
    store: Box<dyn Persistence<T>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        name: &'static str,
        buffer_size: usize,
        store: impl Persistence<T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let items = store.load();
        let actor = Self {
            name,
            receiver,
            items,
            store: Box::new(store),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(collection = self.name))]
    pub async fn run(mut self) {
        info!(loaded = self.items.len(), "Actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(id).map(|index| self.items[index].clone());
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }

        info!("Actor stopped");
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        T::validate_create(&self.items, &payload).map_err(|e| {
            warn!(error = %e, "Create rejected");
            FrameworkError::Conflict(e)
        })?;

        let id = next_id(&self.items).ok_or_else(|| {
            error!("Highest id already in use, cannot assign another");
            FrameworkError::IdsExhausted
        })?;
        let item = T::from_create(id, payload).map_err(FrameworkError::Rejected)?;
        self.items.push(item.clone());
        self.persist();

        debug!(id, "Item created");
        Ok(item)
    }

    fn handle_update(&mut self, id: EntityId, patch: T::Patch) -> Result<T, FrameworkError> {
        let index = self.position(id).ok_or(FrameworkError::NotFound(id))?;
        let item = &mut self.items[index];
        item.on_update(patch).map_err(FrameworkError::Rejected)?;
        let updated = item.clone();
        self.persist();

        debug!(id, "Item updated");
        Ok(updated)
    }

    fn handle_delete(&mut self, id: EntityId) -> Result<(), FrameworkError> {
        let index = self.position(id).ok_or(FrameworkError::NotFound(id))?;
        self.items.remove(index);
        self.persist();

        debug!(id, "Item deleted");
        Ok(())
    }

    fn handle_action(
        &mut self,
        id: EntityId,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let index = self.position(id).ok_or(FrameworkError::NotFound(id))?;
        let result = self.items[index].handle_action(action).map_err(|e| {
            warn!(id, error = %e, "Action rejected");
            FrameworkError::Rejected(e)
        })?;
        self.persist();
        Ok(result)
    }

    /// Write failures are logged and never reach the requester.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            error!(error = %e, "Failed to persist collection");
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    #[cfg(test)]
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
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

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: EntityId, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: EntityId,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
