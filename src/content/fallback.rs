//! Failure boundary around store reads.
//!
//! Public pages must render even when the store is unreachable, so every read
//! made on their behalf resolves to a usable value. Errors are not classified:
//! a timeout, a schema mismatch and a missing pool all land on the fallback.

use std::future::Future;

use crate::error::StoreError;

use super::model::Publishable;

/// Await `read`; on any store error log it and return `on_failure`.
pub async fn with_fallback<T, F>(read: F, on_failure: T) -> T
where
    F: Future<Output = Result<T, StoreError>>,
{
    match read.await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "store read failed, rendering fallback");
            on_failure
        }
    }
}

/// `with_fallback` with the type's zero value (empty list, zero count).
pub async fn or_default<T, F>(read: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, StoreError>>,
{
    with_fallback(read, T::default()).await
}

/// Outcome of a single-entity lookup on a public route.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    /// Absent, or present but unpublished.
    NotFound,
    /// The store could not be read.
    Unavailable,
}

impl<T> Lookup<T> {
    /// Collapse to the renderer's view: anything but `Found` is a 404.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Unavailable => None,
        }
    }
}

/// Read one entity by its routing key and keep it only if it is published.
pub async fn lookup_published<T, F>(read: F) -> Lookup<T>
where
    T: Publishable,
    F: Future<Output = Result<Option<T>, StoreError>>,
{
    match read.await {
        Ok(Some(entity)) if entity.is_published() => Lookup::Found(entity),
        Ok(Some(_)) => {
            tracing::debug!("entity exists but is unpublished");
            Lookup::NotFound
        }
        Ok(None) => Lookup::NotFound,
        Err(e) => {
            tracing::warn!(error = %e, "store read failed, treating entity as not found");
            Lookup::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        published: bool,
    }

    impl Publishable for Item {
        fn is_published(&self) -> bool {
            self.published
        }
    }

    #[tokio::test]
    async fn test_with_fallback_passes_success_through() {
        let value = with_fallback(async { Ok::<_, StoreError>(vec![1, 2]) }, vec![]).await;
        assert_eq!(value, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_with_fallback_substitutes_on_error() {
        let value = with_fallback(async { Err::<Vec<i32>, _>(StoreError::Unavailable) }, vec![9]).await;
        assert_eq!(value, vec![9]);
    }

    #[tokio::test]
    async fn test_or_default_zeroes_on_error() {
        let count: i64 = or_default(async { Err(StoreError::Unavailable) }).await;
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_lookup_distinguishes_outcomes() {
        let found = lookup_published(async { Ok(Some(Item { published: true })) }).await;
        assert!(matches!(found, Lookup::Found(_)));

        let hidden = lookup_published(async { Ok(Some(Item { published: false })) }).await;
        assert!(matches!(hidden, Lookup::NotFound));

        let missing = lookup_published::<Item, _>(async { Ok(None) }).await;
        assert!(matches!(missing, Lookup::NotFound));

        let down = lookup_published::<Item, _>(async { Err(StoreError::Unavailable) }).await;
        assert!(matches!(down, Lookup::Unavailable));
        assert!(down.found().is_none());
    }
}
