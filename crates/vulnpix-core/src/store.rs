// SPDX-License-Identifier: Apache-2.0

//! SQLite-backed photo storage.
//!
//! All reads and writes go through [`PhotoStore`]. The safe search
//! paths bind every user-supplied value; [`PhotoStore::search_public_raw`]
//! is the vulnerable half of the SQL pair and splices the term into
//! the query text so the injection stays demonstrable.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::error::VulnpixError;
use crate::sanitize::escape_like;

/// A stored photo row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Photo {
    /// Row identifier.
    pub id: i64,
    /// Display name; defaults to the upload path when left empty.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Upload path or URL.
    pub upload: String,
    /// Owning username.
    pub owner: String,
    /// Whether the photo is visible without ownership.
    pub is_public: bool,
    /// Upload time as unix seconds.
    pub uploaded_at: i64,
    /// Detail-page hit counter.
    pub views: i64,
}

/// Fields required to insert a photo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPhoto {
    /// Display name; blank falls back to `upload`.
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Upload path or URL. Must not be blank.
    pub upload: String,
    /// Owning username. Must not be blank.
    pub owner: String,
    /// Whether the photo is visible without ownership.
    #[serde(default)]
    pub is_public: bool,
}

/// Time window for the advanced search's upload filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadedWithin {
    /// Last 24 hours (wire value `hours`).
    Hours,
    /// Last 7 days (wire value `week`).
    Week,
    /// Last 30 days (wire value `month`).
    Month,
}

impl UploadedWithin {
    /// Parses a wire value; returns `None` for unknown windows.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hours" => Some(UploadedWithin::Hours),
            "week" => Some(UploadedWithin::Week),
            "month" => Some(UploadedWithin::Month),
            _ => None,
        }
    }

    /// Returns the unix-seconds cutoff for this window ending at `now`.
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> i64 {
        let span = match self {
            UploadedWithin::Hours => Duration::hours(24),
            UploadedWithin::Week => Duration::days(7),
            UploadedWithin::Month => Duration::days(30),
        };
        (now - span).timestamp()
    }
}

/// Optional predicates for the advanced search, AND-combined over
/// public rows.
#[derive(Debug, Clone, Default)]
pub struct PhotoFilter {
    /// Name-contains term.
    pub name: Option<String>,
    /// Description-contains term.
    pub description: Option<String>,
    /// Upload window.
    pub uploaded_within: Option<UploadedWithin>,
}

/// SQLite-backed photo store.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    pool: SqlitePool,
}

const SELECT_COLUMNS: &str =
    "id, name, description, upload, owner, is_public, uploaded_at, views";

impl PhotoStore {
    /// Wraps an existing pool. Call [`PhotoStore::init`] before use.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the configured database, creating the file if missing,
    /// and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns [`VulnpixError::Database`] when the URL is invalid or
    /// the database cannot be opened.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, VulnpixError> {
        let options = config
            .url
            .parse::<SqliteConnectOptions>()?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;
        let store = Self::new(pool);
        store.init().await?;
        Ok(store)
    }

    /// Creates the photos table when absent.
    pub async fn init(&self) -> Result<(), VulnpixError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS photos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                upload TEXT NOT NULL,
                owner TEXT NOT NULL,
                is_public INTEGER NOT NULL DEFAULT 0,
                uploaded_at INTEGER NOT NULL,
                views INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Inserts a photo with `uploaded_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`VulnpixError::Validation`] for a blank `upload` or
    /// `owner`.
    pub async fn insert(&self, photo: NewPhoto) -> Result<Photo, VulnpixError> {
        self.insert_dated(photo, Utc::now().timestamp()).await
    }

    /// Inserts a photo with an explicit upload time.
    ///
    /// Seeding and tests use this to stagger rows across the window
    /// filters.
    pub async fn insert_dated(
        &self,
        photo: NewPhoto,
        uploaded_at: i64,
    ) -> Result<Photo, VulnpixError> {
        if photo.upload.trim().is_empty() {
            return Err(VulnpixError::validation("upload must not be blank"));
        }
        if photo.owner.trim().is_empty() {
            return Err(VulnpixError::validation("owner must not be blank"));
        }
        let name = photo
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| photo.upload.clone(), str::to_string);

        let sql = format!(
            "INSERT INTO photos (name, description, upload, owner, is_public, uploaded_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {SELECT_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Photo>(&sql)
            .bind(name)
            .bind(photo.description)
            .bind(photo.upload)
            .bind(photo.owner)
            .bind(photo.is_public)
            .bind(uploaded_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(inserted)
    }

    /// Fetches a public photo by id and counts the view.
    ///
    /// # Errors
    ///
    /// Returns [`VulnpixError::NotFound`] for unknown or private ids.
    pub async fn view_photo(&self, id: i64) -> Result<Photo, VulnpixError> {
        let updated = sqlx::query("UPDATE photos SET views = views + 1 WHERE id = ? AND is_public = 1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(VulnpixError::not_found(format!("photo {id}")));
        }
        let sql = format!("SELECT {SELECT_COLUMNS} FROM photos WHERE id = ?");
        let photo = sqlx::query_as::<_, Photo>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(photo)
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Lists a user's public photos, newest first.
    pub async fn photos_by_owner(&self, owner: &str) -> Result<Vec<Photo>, VulnpixError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM photos
             WHERE owner = ? AND is_public = 1
             ORDER BY uploaded_at DESC"
        );
        let photos = sqlx::query_as::<_, Photo>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(photos)
    }

    /// Searches public photos by name with a bound `LIKE` pattern.
    ///
    /// The term is escaped and bound, so wildcard and quote characters
    /// match literally.
    pub async fn search_public(&self, term: &str, limit: i64) -> Result<Vec<Photo>, VulnpixError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM photos
             WHERE name LIKE ? ESCAPE '\\' AND is_public = 1
             ORDER BY uploaded_at DESC
             LIMIT ?"
        );
        let photos = sqlx::query_as::<_, Photo>(&sql)
            .bind(contains_pattern(term))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(photos)
    }

    /// Searches public photos by splicing the term into the SQL text.
    ///
    /// Vulnerable half of the SQL pair: quote characters in `term`
    /// become query syntax, so `%' OR 1=1 --` widens the query to
    /// every row, private ones included. No cap is applied.
    pub async fn search_public_raw(&self, term: &str) -> Result<Vec<Photo>, VulnpixError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM photos
             WHERE name LIKE '%{term}%' AND is_public = 1"
        );
        let photos = sqlx::query_as::<_, Photo>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(photos)
    }

    /// Runs the advanced search: optional bound predicates over public
    /// rows, newest first, capped at `limit`.
    pub async fn advanced_search(
        &self,
        filter: &PhotoFilter,
        limit: i64,
    ) -> Result<Vec<Photo>, VulnpixError> {
        let mut sql = format!("SELECT {SELECT_COLUMNS} FROM photos WHERE is_public = 1");
        let mut patterns: Vec<String> = Vec::new();
        if let Some(name) = &filter.name {
            sql.push_str(" AND name LIKE ? ESCAPE '\\'");
            patterns.push(contains_pattern(name));
        }
        if let Some(description) = &filter.description {
            sql.push_str(" AND description LIKE ? ESCAPE '\\'");
            patterns.push(contains_pattern(description));
        }
        let cutoff = filter.uploaded_within.map(|window| window.cutoff(Utc::now()));
        if cutoff.is_some() {
            sql.push_str(" AND uploaded_at > ?");
        }
        sql.push_str(" ORDER BY uploaded_at DESC LIMIT ?");

        let mut query = sqlx::query_as::<_, Photo>(&sql);
        for pattern in patterns {
            query = query.bind(pattern);
        }
        if let Some(cutoff) = cutoff {
            query = query.bind(cutoff);
        }
        let photos = query.bind(limit).fetch_all(&self.pool).await?;
        Ok(photos)
    }

    /// Counts stored photos.
    pub async fn count(&self) -> Result<i64, VulnpixError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM photos")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Builds a contains-style `LIKE` pattern from an escaped term.
fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
