//! SQLite database layer (embedded, no external dependencies)

use quotes_types::{Author, Quote};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteExecutor, SqlitePool, Transaction};
use std::path::Path;
use std::str::FromStr;

use super::error::{Result, StorageError};

/// Per-request write transaction. Rolled back on drop unless committed.
pub type Tx = Transaction<'static, Sqlite>;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        if !database_url.starts_with("sqlite:") {
            return Err(StorageError::InvalidUrl(database_url.to_string()));
        }
        tracing::info!("Opening SQLite database at: {}", database_url);

        let in_memory =
            database_url.contains(":memory:") || database_url.contains("mode=memory");

        let mut options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        if !in_memory {
            // Create parent directory if needed
            let parent = database_file(database_url)
                .parent()
                .filter(|p| !p.as_os_str().is_empty());
            if let Some(parent) = parent {
                tracing::info!("Creating parent directory: {}", parent.display());
                tokio::fs::create_dir_all(&parent).await?;
            }

            options = options
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        }

        // An in-memory database lives only as long as its connection.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;

        tracing::info!("SQLite connection established, running migrations...");
        Self::run_migrations(&pool).await?;
        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    /// Fresh private database, used by tests.
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS authors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                author_id INTEGER NOT NULL REFERENCES authors(id) ON DELETE CASCADE,
                text TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_quotes_author_id ON quotes(author_id)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn begin(&self) -> Result<Tx> {
        Ok(self.pool.begin().await?)
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // Author operations
    pub async fn list_authors(&self) -> Result<Vec<Author>> {
        let rows: Vec<AuthorRow> = sqlx::query_as(
            r#"
            SELECT id, name FROM authors ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_author(&self, id: i64) -> Result<Option<Author>> {
        fetch_author(&self.pool, id).await
    }

    // Quote operations
    pub async fn list_quotes(&self) -> Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT q.id, q.text, a.id AS author_id, a.name AS author_name
            FROM quotes q JOIN authors a ON a.id = q.author_id
            ORDER BY q.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn list_quotes_by_author(&self, author_id: i64) -> Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT q.id, q.text, a.id AS author_id, a.name AS author_name
            FROM quotes q JOIN authors a ON a.id = q.author_id
            WHERE q.author_id = ?1
            ORDER BY q.id ASC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_quote(&self, id: i64) -> Result<Option<Quote>> {
        fetch_quote(&self.pool, id).await
    }
}

/// File path named by a `sqlite:` connection string, without query options.
fn database_file(database_url: &str) -> &Path {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    Path::new(rest.split('?').next().unwrap_or(rest))
}

// Single-statement operations usable on the pool or inside a `Tx`

pub async fn fetch_author<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> Result<Option<Author>> {
    let row: Option<AuthorRow> = sqlx::query_as(
        r#"
        SELECT id, name FROM authors WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Insert an author, returning the assigned id.
pub async fn insert_author<'e>(executor: impl SqliteExecutor<'e>, name: &str) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO authors (name) VALUES (?1)
        "#,
    )
    .bind(name)
    .execute(executor)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StorageError::Duplicate(name.to_string())
        }
        _ => StorageError::Database(e),
    })?;

    Ok(result.last_insert_rowid())
}

pub async fn fetch_quote<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> Result<Option<Quote>> {
    let row: Option<QuoteRow> = sqlx::query_as(
        r#"
        SELECT q.id, q.text, a.id AS author_id, a.name AS author_name
        FROM quotes q JOIN authors a ON a.id = q.author_id
        WHERE q.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Insert a quote, returning the assigned id. Fails with
/// [`StorageError::MissingReference`] when the author does not exist.
pub async fn insert_quote<'e>(
    executor: impl SqliteExecutor<'e>,
    author_id: i64,
    text: &str,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO quotes (author_id, text) VALUES (?1, ?2)
        "#,
    )
    .bind(author_id)
    .bind(text)
    .execute(executor)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            StorageError::MissingReference(format!("author {}", author_id))
        }
        _ => StorageError::Database(e),
    })?;

    Ok(result.last_insert_rowid())
}

/// Returns false when no quote has the given id.
pub async fn update_quote_text<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    text: &str,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE quotes SET text = ?1 WHERE id = ?2
        "#,
    )
    .bind(text)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns false when no quote has the given id.
pub async fn delete_quote<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM quotes WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author {
            id: r.id,
            name: r.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: i64,
    text: String,
    author_id: i64,
    author_name: String,
}

impl From<QuoteRow> for Quote {
    fn from(r: QuoteRow) -> Self {
        Quote {
            id: r.id,
            author: Author {
                id: r.author_id,
                name: r.author_name,
            },
            text: r.text,
        }
    }
}
