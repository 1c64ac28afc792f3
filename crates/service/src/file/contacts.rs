use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::{insert_contact, remove_contact, replace_contact, Contact, ContactInput};
use crate::errors::ServiceError;
use crate::repository::ContactRepository;
use crate::storage::json_doc_store::JsonDocStore;

/// File persistence for the contact collection: one JSON document file,
/// rewritten on every mutation.
#[derive(Clone)]
pub struct ContactStore {
    store: Arc<JsonDocStore<Contact>>,
}

impl ContactStore {
    /// Open the store, creating an empty collection file if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::<Contact>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl ContactRepository for ContactStore {
    async fn find(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.store.list().await)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, ServiceError> {
        Ok(self.store.find(|c| c.id == id).await)
    }

    async fn save(&self, input: ContactInput) -> Result<Contact, ServiceError> {
        let mut created: Option<Contact> = None;
        self.store
            .update_docs(|docs| {
                created = Some(insert_contact(docs, &input)?);
                Ok(())
            })
            .await?;
        Ok(created.expect("created set"))
    }

    async fn update(&self, id: Uuid, input: ContactInput) -> Result<Contact, ServiceError> {
        let mut updated: Option<Contact> = None;
        self.store
            .update_docs(|docs| {
                updated = Some(replace_contact(docs, id, &input)?);
                Ok(())
            })
            .await?;
        Ok(updated.expect("updated set"))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut existed = false;
        self.store
            .update_docs(|docs| {
                existed = remove_contact(docs, id);
                Ok(())
            })
            .await?;
        Ok(existed)
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.store.len().await)
    }
}
