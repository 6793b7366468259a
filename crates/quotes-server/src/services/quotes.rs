//! Quote service
//!
//! Writes run inside one transaction per call, so a failed lookup or a
//! rejected edit never leaves partial state behind.

use crate::error::ApiError;
use crate::storage::{db, Database, StorageError};
use quotes_types::{NewQuote, Quote, QuotePatch};
use std::sync::Arc;
use tracing::{debug, info};

pub struct QuoteService {
    db: Arc<Database>,
}

impl QuoteService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Quote>, ApiError> {
        Ok(self.db.list_quotes().await?)
    }

    pub async fn list_for_author(&self, author_id: i64) -> Result<Vec<Quote>, ApiError> {
        if self.db.get_author(author_id).await?.is_none() {
            return Err(ApiError::AuthorNotFound(author_id));
        }
        Ok(self.db.list_quotes_by_author(author_id).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Quote, ApiError> {
        debug!("Looking up quote {}", id);
        self.db
            .get_quote(id)
            .await?
            .ok_or(ApiError::QuoteNotFound(id))
    }

    /// Attribute a new quote to an existing author.
    pub async fn create(&self, author_id: i64, req: NewQuote) -> Result<Quote, ApiError> {
        let mut tx = self.db.begin().await?;

        // Write first: the foreign key decides whether the author exists, and
        // the transaction holds the write lock before it reads anything.
        let id = match db::insert_quote(&mut *tx, author_id, &req.text).await {
            Ok(id) => id,
            Err(StorageError::MissingReference(_)) => {
                return Err(ApiError::AuthorNotFound(author_id))
            }
            Err(e) => return Err(e.into()),
        };
        let author = db::fetch_author(&mut *tx, author_id)
            .await?
            .ok_or(ApiError::AuthorNotFound(author_id))?;

        tx.commit().await.map_err(StorageError::from)?;
        info!("Created quote {} for author {}", id, author.id);

        Ok(Quote {
            id,
            author,
            text: req.text,
        })
    }

    /// Apply a patch to an existing quote. An empty patch returns the quote
    /// unchanged without opening a write transaction.
    pub async fn edit(&self, id: i64, patch: QuotePatch) -> Result<Quote, ApiError> {
        if patch.is_empty() {
            debug!("Empty patch for quote {}", id);
            return self.get(id).await;
        }

        let mut tx = self.db.begin().await?;

        if let Some(text) = &patch.text {
            if !db::update_quote_text(&mut *tx, id, text).await? {
                return Err(ApiError::QuoteNotFound(id));
            }
        }
        let quote = db::fetch_quote(&mut *tx, id)
            .await?
            .ok_or(ApiError::QuoteNotFound(id))?;

        tx.commit().await.map_err(StorageError::from)?;
        info!("Updated quote {}", id);

        Ok(quote)
    }

    /// Hard delete of a single quote.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut tx = self.db.begin().await?;

        if !db::delete_quote(&mut *tx, id).await? {
            return Err(ApiError::QuoteNotFound(id));
        }

        tx.commit().await.map_err(StorageError::from)?;
        info!("Deleted quote {}", id);

        Ok(())
    }
}
