// SPDX-License-Identifier: Apache-2.0

//! Demo data for training sessions.

use chrono::{Duration, Utc};
use vulnpix_core::{NewPhoto, PhotoStore, Result};

/// Inserts a small public/private photo set when the table is empty.
///
/// Upload times are staggered across the window filters so
/// `/advanced-search` has something to cut, and one private row exists
/// for the SQL injection demo to expose.
pub async fn seed_demo_photos(store: &PhotoStore) -> Result<()> {
    if store.count().await? > 0 {
        tracing::debug!("photo table already populated, skipping seed");
        return Ok(());
    }

    let now = Utc::now();
    for (photo, age) in demo_photos() {
        store
            .insert_dated(photo, (now - age).timestamp())
            .await?;
    }
    tracing::info!("seeded demo photos");
    Ok(())
}

fn demo_photos() -> Vec<(NewPhoto, Duration)> {
    vec![
        (
            photo("kittens", "two kittens on a windowsill", "alice", true),
            Duration::hours(2),
        ),
        (
            photo("sunset over the bay", "golden hour", "alice", true),
            Duration::days(3),
        ),
        (
            photo("mountain trail", "switchbacks above the treeline", "bob", true),
            Duration::days(12),
        ),
        (
            photo("city rooftops", "rain on the skylight", "bob", true),
            Duration::days(45),
        ),
        (
            photo("passport scan", "do not share", "alice", false),
            Duration::days(1),
        ),
    ]
}

fn photo(name: &str, description: &str, owner: &str, is_public: bool) -> NewPhoto {
    NewPhoto {
        name: Some(name.to_string()),
        description: description.to_string(),
        upload: format!("{}.jpg", name.replace(' ', "-")),
        owner: owner.to_string(),
        is_public,
    }
}
