//! Author service

use crate::error::ApiError;
use crate::storage::{db, Database, StorageError};
use quotes_types::{Author, NewAuthor};
use std::sync::Arc;
use tracing::{debug, info};

pub struct AuthorService {
    db: Arc<Database>,
}

impl AuthorService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Author>, ApiError> {
        Ok(self.db.list_authors().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Author, ApiError> {
        debug!("Looking up author {}", id);
        self.db
            .get_author(id)
            .await?
            .ok_or(ApiError::AuthorNotFound(id))
    }

    pub async fn create(&self, req: NewAuthor) -> Result<Author, ApiError> {
        let mut tx = self.db.begin().await?;

        let id = match db::insert_author(&mut *tx, &req.name).await {
            Ok(id) => id,
            Err(StorageError::Duplicate(name)) => return Err(ApiError::DuplicateAuthor(name)),
            Err(e) => return Err(e.into()),
        };

        tx.commit().await.map_err(StorageError::from)?;
        info!("Created author {}: {}", id, req.name);

        Ok(Author { id, name: req.name })
    }
}
