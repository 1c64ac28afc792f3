use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::{Contact, ContactInput};
use crate::errors::ServiceError;

/// Storage contract for the contact collection. The transport layer only
/// talks to this trait, so the backing store can change without touching
/// the handlers.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts in insertion order.
    async fn find(&self) -> Result<Vec<Contact>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, ServiceError>;
    /// Validate and persist a new contact with a store-assigned id.
    async fn save(&self, input: ContactInput) -> Result<Contact, ServiceError>;
    /// Validate and replace name/number of an existing contact.
    async fn update(&self, id: Uuid, input: ContactInput) -> Result<Contact, ServiceError>;
    /// Remove a contact; returns whether it existed. Absent ids are not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<usize, ServiceError>;
}
