//! DisplayContext - the current font size shared across screens.
//!
//! One owner holds the value; screens subscribe and re-render on change.
//! Changes are persisted to `@font_size` before subscribers are notified.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::foundation::DomainError;
use crate::domain::user::FontSize;
use crate::ports::ProfileStore;

/// Owner of the current recommended font size.
#[derive(Clone)]
pub struct DisplayContext {
    store: Arc<dyn ProfileStore>,
    sender: Arc<watch::Sender<FontSize>>,
}

impl DisplayContext {
    /// Starts from the stored `@font_size`, or `fallback` when none is stored
    /// or the record is unreadable.
    pub async fn load(store: Arc<dyn ProfileStore>, fallback: FontSize) -> Self {
        let initial = match store.load_font_size().await {
            Ok(Some(size)) => size,
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!("Failed to load font size, using {}: {}", fallback, e);
                fallback
            }
        };
        let (sender, _) = watch::channel(initial);
        Self {
            store,
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> FontSize {
        *self.sender.borrow()
    }

    /// Receiver that observes every later change.
    pub fn subscribe(&self) -> watch::Receiver<FontSize> {
        self.sender.subscribe()
    }

    /// Persists `size`, then publishes it.
    ///
    /// On a storage error the published value is left unchanged.
    pub async fn set(&self, size: FontSize) -> Result<(), DomainError> {
        self.store.save_font_size(size).await?;
        self.sender.send_replace(size);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::profile::KeyValueProfileStore;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::ports::{keys, KeyValueStore};

    fn store_over(kv: &InMemoryKeyValueStore) -> Arc<dyn ProfileStore> {
        Arc::new(KeyValueProfileStore::new(Arc::new(kv.clone())))
    }

    #[tokio::test]
    async fn loads_stored_size() {
        let kv = InMemoryKeyValueStore::with_records([(keys::FONT_SIZE, "22")]);
        let ctx = DisplayContext::load(store_over(&kv), FontSize::REFERENCE).await;
        assert_eq!(ctx.current().px(), 22.0);
    }

    #[tokio::test]
    async fn falls_back_when_missing_or_garbage() {
        let empty = InMemoryKeyValueStore::new();
        let ctx = DisplayContext::load(store_over(&empty), FontSize::REFERENCE).await;
        assert_eq!(ctx.current(), FontSize::REFERENCE);

        let garbage = InMemoryKeyValueStore::with_records([(keys::FONT_SIZE, "big")]);
        let ctx = DisplayContext::load(store_over(&garbage), FontSize::REFERENCE).await;
        assert_eq!(ctx.current(), FontSize::REFERENCE);
    }

    #[tokio::test]
    async fn set_persists_then_notifies() {
        let kv = InMemoryKeyValueStore::new();
        let ctx = DisplayContext::load(store_over(&kv), FontSize::REFERENCE).await;
        let mut rx = ctx.subscribe();

        ctx.set(FontSize::try_new(19.3).unwrap()).await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().px(), 19.3);
        assert_eq!(kv.get(keys::FONT_SIZE).await.unwrap().as_deref(), Some("19.3"));
    }

    #[tokio::test]
    async fn clones_share_value() {
        let kv = InMemoryKeyValueStore::new();
        let ctx = DisplayContext::load(store_over(&kv), FontSize::REFERENCE).await;
        let other = ctx.clone();

        ctx.set(FontSize::try_new(18.0).unwrap()).await.unwrap();
        assert_eq!(other.current().px(), 18.0);
    }
}
