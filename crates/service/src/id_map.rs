//! Legacy room-identifier resolution.
//!
//! Older site builds linked rooms by slug ("standard-room") or by UUIDs that
//! no longer exist after database resets. Public detail requests may still
//! arrive with those identifiers, so lookups go through a resolution chain:
//!
//! 1. the raw value, if it parses as a UUID and the row exists
//! 2. a static map of known legacy slugs and stale UUIDs
//! 3. a dynamic map rebuilt from the `type` column at startup or on demand
//! 4. a direct `type` lookup derived from the slug
//! 5. for unknown `*-room` slugs, the first active room as a soft fallback
//!
//! Anything that looks like an asset path (has a file extension) is rejected
//! before the chain runs, so stray image URLs never hit the database.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, warn};
use uuid::Uuid;

use models::room;

use crate::errors::ServiceError;

/// Slugs and stale UUIDs the old frontend shipped with, pinned to the UUIDs
/// the seed data uses.
static LEGACY_ROOM_IDS: Lazy<HashMap<&'static str, Uuid>> = Lazy::new(|| {
    let standard = Uuid::parse_str("43c7e499-ba30-40a9-a010-79902cd38558").unwrap_or_default();
    let mut m = HashMap::new();
    m.insert("standard-room", standard);
    m.insert(
        "triple-room",
        Uuid::parse_str("d50b9afd-9964-4fe0-8f5c-70bcf19beb76").unwrap_or_default(),
    );
    m.insert(
        "suite-room",
        Uuid::parse_str("448a5110-8ffa-4059-8264-6e171f919ff1").unwrap_or_default(),
    );
    m.insert(
        "apart-room",
        Uuid::parse_str("73c5fbe8-0b05-4c21-8374-09bbd5fee920").unwrap_or_default(),
    );
    // Stale UUID from a pre-reset database, observed in cached pages.
    m.insert("08a00bb0-48fa-4cfc-90e6-f08a53797154", standard);
    m
});

/// True when the identifier is an asset path rather than a room id, e.g.
/// "standard.jpg" leaking out of an image tag.
pub fn is_asset_path(id: &str) -> bool {
    let lower = id.to_ascii_lowercase();
    ["jpg", "jpeg", "png", "webp", "gif", "svg", "mp4", "webm", "ogg", "ico", "css", "js"]
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Slug-to-UUID map kept alongside the static table and refreshed from the
/// live rows, so renamed or reseeded rooms keep resolving.
#[derive(Default)]
pub struct RoomIdMap {
    dynamic: RwLock<HashMap<String, Uuid>>,
}

impl RoomIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the dynamic map from the rooms table. Each room contributes
    /// its `{type}-room` slug; first occurrence of a type wins.
    pub async fn refresh(&self, db: &DatabaseConnection) -> Result<usize, ServiceError> {
        let rows = room::Entity::find()
            .order_by_asc(room::Column::OrderNumber)
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let mut map = HashMap::new();
        for row in rows {
            let ty = row.r#type.trim().to_ascii_lowercase();
            if ty.is_empty() {
                continue;
            }
            map.entry(format!("{}-room", ty)).or_insert(row.id);
        }
        let count = map.len();
        match self.dynamic.write() {
            Ok(mut guard) => *guard = map,
            Err(poisoned) => *poisoned.into_inner() = map,
        }
        debug!(entries = count, "room id map refreshed");
        Ok(count)
    }

    fn dynamic_get(&self, slug: &str) -> Option<Uuid> {
        match self.dynamic.read() {
            Ok(guard) => guard.get(slug).copied(),
            Err(poisoned) => poisoned.into_inner().get(slug).copied(),
        }
    }

    /// Resolve an incoming identifier to an existing room id, or `None` when
    /// nothing matches. Ids pointing at missing rows fall through the chain.
    pub async fn resolve(
        &self,
        db: &DatabaseConnection,
        raw: &str,
    ) -> Result<Option<Uuid>, ServiceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        if let Ok(id) = Uuid::parse_str(raw) {
            if self.exists(db, id).await? {
                return Ok(Some(id));
            }
        }

        let slug = raw.to_ascii_lowercase();
        if let Some(&id) = LEGACY_ROOM_IDS.get(slug.as_str()) {
            if self.exists(db, id).await? {
                return Ok(Some(id));
            }
        }

        if let Some(id) = self.dynamic_get(&slug) {
            if self.exists(db, id).await? {
                return Ok(Some(id));
            }
        }

        // "suite-room" -> type "suite"
        let ty = slug.strip_suffix("-room").unwrap_or(&slug);
        let by_type = room::Entity::find()
            .filter(room::Column::Type.eq(ty))
            .order_by_asc(room::Column::OrderNumber)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if let Some(row) = by_type {
            return Ok(Some(row.id));
        }

        // Unknown room-like slugs get the first active room rather than a
        // dead page; anything else is a genuine miss.
        if slug.ends_with("-room") {
            let first = room::Entity::find()
                .filter(room::Column::Active.eq(true))
                .order_by_asc(room::Column::OrderNumber)
                .one(db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            if let Some(row) = first {
                warn!(slug = %slug, fallback = %row.id, "unknown room slug, using first active room");
                return Ok(Some(row.id));
            }
        }

        Ok(None)
    }

    async fn exists(&self, db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
        let found = room::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_detected() {
        assert!(is_asset_path("standard.jpg"));
        assert!(is_asset_path("hero.MP4"));
        assert!(is_asset_path("photo.webp"));
        assert!(!is_asset_path("standard-room"));
        assert!(!is_asset_path("43c7e499-ba30-40a9-a010-79902cd38558"));
    }

    #[test]
    fn legacy_map_covers_known_slugs() {
        for slug in ["standard-room", "triple-room", "suite-room", "apart-room"] {
            assert!(LEGACY_ROOM_IDS.contains_key(slug), "missing {}", slug);
        }
        // Stale UUID aliases the standard room.
        assert_eq!(
            LEGACY_ROOM_IDS["08a00bb0-48fa-4cfc-90e6-f08a53797154"],
            LEGACY_ROOM_IDS["standard-room"]
        );
    }
}
