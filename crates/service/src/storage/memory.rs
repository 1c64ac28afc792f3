use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::contact::{insert_contact, remove_contact, replace_contact, Contact, ContactInput};
use crate::errors::ServiceError;
use crate::repository::ContactRepository;

/// In-memory contact collection with the same semantics as the file store.
/// Used by tests and as the degraded fallback when the persistent store
/// cannot be opened; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ContactRepository for MemoryStore {
    async fn find(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, ServiceError> {
        Ok(self.inner.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, input: ContactInput) -> Result<Contact, ServiceError> {
        let mut contacts = self.inner.write().await;
        insert_contact(&mut contacts, &input)
    }

    async fn update(&self, id: Uuid, input: ContactInput) -> Result<Contact, ServiceError> {
        let mut contacts = self.inner.write().await;
        replace_contact(&mut contacts, id, &input)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut contacts = self.inner.write().await;
        Ok(remove_contact(&mut contacts, id))
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.inner.read().await.len())
    }
}
