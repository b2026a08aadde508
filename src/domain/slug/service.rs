// src/domain/slug/service.rs
use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::util::{DigitSource, SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::registry::SlugRegistry;
use crate::domain::slug::value_objects::{MAX_SLUG_LEN, Slug, SlugKind, SlugSeed, Sluggable};

/// Number of leading characters of free text used as slug seed.
pub const SEED_CHARS: usize = 10;
/// Upper bound on random digits appended while resolving collisions.
pub const MAX_SUFFIX_DIGITS: usize = 24;
/// Inserts attempted when the unique index rejects a generated slug.
pub const MAX_PERSIST_ATTEMPTS: usize = 3;
/// Room left for the normalized seed once a full collision suffix is added.
const MAX_BASE_LEN: usize = MAX_SLUG_LEN - 1 - MAX_SUFFIX_DIGITS;

/// Domain service assigning slugs to entities right before they are persisted.
///
/// The existence check and the insert are separate statements, so two
/// concurrent creations with the same seed may both pass the check. For kinds
/// backed by a unique index the loser gets [`DomainError::SlugTaken`] from the
/// repository; [`SlugAssignmentService::assign_and_insert`] reassigns and
/// retries in that case. Comment kinds have no unique index and may end up
/// sharing a slug under such a race.
pub struct SlugAssignmentService {
    registry: Arc<dyn SlugRegistry>,
    generator: Arc<dyn SlugGenerator>,
    digits: Arc<dyn DigitSource>,
}

impl SlugAssignmentService {
    pub fn new(
        registry: Arc<dyn SlugRegistry>,
        generator: Arc<dyn SlugGenerator>,
        digits: Arc<dyn DigitSource>,
    ) -> Self {
        Self {
            registry,
            generator,
            digits,
        }
    }

    /// Assign a slug to `entity` unless it already carries one.
    pub async fn assign<T>(&self, entity: &mut T) -> DomainResult<()>
    where
        T: Sluggable + Send,
    {
        if entity.slug().is_some() {
            return Ok(());
        }

        let kind = entity.slug_kind();
        let seed = match entity.slug_seed() {
            SlugSeed::Text(text) => text.chars().take(SEED_CHARS).collect::<String>(),
            SlugSeed::RandomDigit => self.random_digit().to_string(),
        };

        let slug = self.unique_slug(kind, &seed).await?;
        tracing::debug!(%kind, slug = %slug, "slug assigned");
        entity.set_slug(slug);
        Ok(())
    }

    /// Normalize `seed` and append random digits until no persisted slug of
    /// `kind` matches.
    pub async fn unique_slug(&self, kind: SlugKind, seed: &str) -> DomainResult<Slug> {
        // Transliteration can expand a short seed far past the slug limit.
        let normalized = truncate_base(&self.generator.slugify(seed));
        let base = if normalized.is_empty() {
            fallback_slug(kind)
        } else {
            normalized
        };

        let mut candidate = base.clone();
        let mut appended = 0usize;
        while self.registry.slug_taken(kind, &candidate).await? {
            if appended == MAX_SUFFIX_DIGITS {
                return Err(DomainError::Conflict(format!(
                    "no free {kind} slug derived from '{base}'"
                )));
            }
            if appended == 0 {
                candidate.push('-');
            }
            let digit = self.generator.slugify(&self.random_digit().to_string());
            candidate.push_str(&digit);
            appended += 1;
        }

        Slug::new(candidate)
    }

    /// Assign a slug and hand the entity to `insert`, reassigning when the
    /// storage layer reports that a generated slug was taken in the meantime.
    /// Explicitly supplied slugs are never rewritten.
    pub async fn assign_and_insert<T, R, F, Fut>(&self, mut entity: T, insert: F) -> DomainResult<R>
    where
        T: Sluggable + Clone + Send,
        F: Fn(T) -> Fut,
        Fut: Future<Output = DomainResult<R>>,
    {
        let explicit = entity.slug().is_some();
        let mut attempt = 1usize;

        loop {
            self.assign(&mut entity).await?;
            match insert(entity.clone()).await {
                Err(DomainError::SlugTaken(detail)) if !explicit && attempt < MAX_PERSIST_ATTEMPTS => {
                    tracing::warn!(
                        kind = %entity.slug_kind(),
                        attempt,
                        %detail,
                        "generated slug taken at insert time, reassigning"
                    );
                    entity.clear_slug();
                    attempt += 1;
                }
                Err(DomainError::SlugTaken(detail)) => return Err(DomainError::Conflict(detail)),
                result => return result,
            }
        }
    }

    fn random_digit(&self) -> u8 {
        self.digits.next_digit() % 10
    }
}

fn truncate_base(normalized: &str) -> String {
    let mut end = normalized.len().min(MAX_BASE_LEN);
    while !normalized.is_char_boundary(end) {
        end -= 1;
    }
    normalized[..end].trim_end_matches('-').to_string()
}

fn fallback_slug(kind: SlugKind) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{kind}-{}", &token[..8])
}
