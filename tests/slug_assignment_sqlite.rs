// tests/slug_assignment_sqlite.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use blogsmith::domain::category::{CategoryName, CategoryRepository, NewCategory};
use blogsmith::domain::errors::{DomainError, DomainResult};
use blogsmith::domain::slug::{MAX_SLUG_LEN, Slug, SlugAssignmentService, SlugKind, SlugRegistry};
use blogsmith::infrastructure::repositories::{SqliteCategoryRepository, SqliteSlugRegistry};
use blogsmith::infrastructure::util::DefaultSlugGenerator;

mod support;

use support::{ScriptedDigits, memory_pool};

fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: CategoryName::new(name).unwrap(),
        slug: None,
    }
}

fn service(registry: Arc<dyn SlugRegistry>, digits: &[u8]) -> SlugAssignmentService {
    SlugAssignmentService::new(
        registry,
        Arc::new(DefaultSlugGenerator),
        Arc::new(ScriptedDigits::new(digits)),
    )
}

/// Reports every slug as free once, as if a concurrent writer had not yet
/// committed, then defers to the real registry.
struct StaleOnceRegistry {
    inner: SqliteSlugRegistry,
    stale: AtomicBool,
}

#[async_trait::async_trait]
impl SlugRegistry for StaleOnceRegistry {
    async fn slug_taken(&self, kind: SlugKind, candidate: &str) -> DomainResult<bool> {
        if self.stale.swap(false, Ordering::SeqCst) {
            return Ok(false);
        }
        self.inner.slug_taken(kind, candidate).await
    }
}

#[tokio::test]
async fn assigned_slugs_never_repeat_existing_ones() {
    let pool = memory_pool().await;
    let repo = SqliteCategoryRepository::new(pool.clone());
    let slugs = service(Arc::new(SqliteSlugRegistry::new(pool.clone())), &[4, 4, 8, 1]);

    let mut seen = Vec::new();
    for _ in 0..4 {
        let created = slugs
            .assign_and_insert(new_category("Hello, World!!! Extra"), |c| repo.insert(c))
            .await
            .unwrap();
        let slug = created.slug.as_str().to_string();
        assert!(!seen.contains(&slug), "{slug} assigned twice");
        assert!(slug.starts_with("hello-wor"));
        seen.push(slug);
    }
    assert_eq!(seen[0], "hello-wor");
    assert_eq!(seen[1], "hello-wor-4");
}

#[tokio::test]
async fn registry_scopes_slugs_per_kind() {
    let pool = memory_pool().await;
    let repo = SqliteCategoryRepository::new(pool.clone());
    let registry = SqliteSlugRegistry::new(pool.clone());

    repo.insert(NewCategory {
        name: CategoryName::new("Rust").unwrap(),
        slug: Some(Slug::new("rust").unwrap()),
    })
    .await
    .unwrap();

    assert!(registry.slug_taken(SlugKind::Category, "rust").await.unwrap());
    assert!(!registry.slug_taken(SlugKind::Article, "rust").await.unwrap());
    assert!(!registry.slug_taken(SlugKind::Category, "go").await.unwrap());
}

#[tokio::test]
async fn unique_index_rejection_triggers_reassignment() {
    let pool = memory_pool().await;
    let repo = SqliteCategoryRepository::new(pool.clone());
    let plain = service(Arc::new(SqliteSlugRegistry::new(pool.clone())), &[1]);
    plain
        .assign_and_insert(new_category("Databases"), |c| repo.insert(c))
        .await
        .unwrap();

    let racy = service(
        Arc::new(StaleOnceRegistry {
            inner: SqliteSlugRegistry::new(pool.clone()),
            stale: AtomicBool::new(true),
        }),
        &[6],
    );
    let created = racy
        .assign_and_insert(new_category("Databases"), |c| repo.insert(c))
        .await
        .unwrap();
    assert_eq!(created.slug.as_str(), "databases-6");
}

#[tokio::test]
async fn explicit_slug_collision_surfaces_as_conflict() {
    let pool = memory_pool().await;
    let repo = SqliteCategoryRepository::new(pool.clone());
    let slugs = service(Arc::new(SqliteSlugRegistry::new(pool.clone())), &[2]);

    let explicit = || NewCategory {
        name: CategoryName::new("Tooling").unwrap(),
        slug: Some(Slug::new("tools").unwrap()),
    };
    slugs
        .assign_and_insert(explicit(), |c| repo.insert(c))
        .await
        .unwrap();
    let err = slugs
        .assign_and_insert(explicit(), |c| repo.insert(c))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
}

#[tokio::test]
async fn punctuation_only_names_fall_back_to_a_token() {
    let pool = memory_pool().await;
    let repo = SqliteCategoryRepository::new(pool.clone());
    let slugs = service(Arc::new(SqliteSlugRegistry::new(pool.clone())), &[0]);

    let created = slugs
        .assign_and_insert(new_category("!!!"), |c| repo.insert(c))
        .await
        .unwrap();
    let token = created
        .slug
        .as_str()
        .strip_prefix("category-")
        .expect("fallback prefix");
    assert_eq!(token.len(), 8);
}

#[tokio::test]
async fn non_latin_names_are_stored_with_bounded_slugs() {
    let pool = memory_pool().await;
    let repo = SqliteCategoryRepository::new(pool.clone());
    let slugs = service(Arc::new(SqliteSlugRegistry::new(pool.clone())), &[5, 2]);

    let mut stored = Vec::new();
    for name in ["庄庄庄庄庄庄庄庄庄庄", "庄庄庄庄庄庄庄庄庄庄", "Ελληνικά θέματα"] {
        let created = slugs
            .assign_and_insert(new_category(name), |c| repo.insert(c))
            .await
            .unwrap();
        let slug = created.slug.as_str().to_string();
        assert!(slug.len() <= MAX_SLUG_LEN, "{slug} too long");
        assert!(slug.is_ascii());
        stored.push(slug);
    }
    assert_eq!(stored[1], format!("{}-5", stored[0]));
    assert_eq!(repo.list().await.unwrap().len(), 3);
}
