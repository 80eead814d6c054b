use std::sync::Arc;

use model::TrackSummary;
use tokio::sync::RwLock;
use utility::id::Id;

use crate::{RequestError, RequestResult};

/// The append-only in-memory track registry. Identifiers are dense and
/// 1-based: the record stored at index `i` has id `i + 1`, so the id of a
/// new record equals the record count after the append.
///
/// The service constructs one registry at startup and hands cheap clones
/// to the request handlers; clones share the same store. Append and id
/// assignment happen under a single write guard and lookups take the read
/// guard, so concurrent registrations never share an id and readers never
/// observe a half-inserted record.
#[derive(Debug, Clone, Default)]
pub struct TrackRegistry {
    records: Arc<RwLock<Vec<TrackSummary>>>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a summary and returns the id assigned to it. Cannot fail;
    /// the store has no capacity limit.
    pub async fn append(&self, summary: TrackSummary) -> Id<TrackSummary> {
        let mut records = self.records.write().await;
        records.push(summary);
        Id::new(records.len() as i64)
    }

    /// Looks up a summary by id. Ids outside `1..=len` are `NotFound`,
    /// including zero and negative ids.
    pub async fn get(&self, id: Id<TrackSummary>) -> RequestResult<TrackSummary> {
        let records = self.records.read().await;
        let raw = id.raw();
        if raw < 1 || raw > records.len() as i64 {
            return Err(RequestError::NotFound);
        }
        Ok(records[(raw - 1) as usize].clone())
    }

    /// All assigned ids, in registration order.
    pub async fn ids(&self) -> Vec<Id<TrackSummary>> {
        let records = self.records.read().await;
        (1..=records.len() as i64).map(Id::new).collect()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use model::TrackSummary;
    use utility::id::Id;

    use super::TrackRegistry;
    use crate::RequestError;

    fn summary(pilot: &str) -> TrackSummary {
        TrackSummary {
            recorded_date: NaiveDate::from_ymd_opt(2018, 3, 28).unwrap(),
            pilot: pilot.to_owned(),
            glider_type: "RV8".to_owned(),
            glider_id: "EC-XLL".to_owned(),
            track_length: 443.0,
        }
    }

    #[tokio::test]
    async fn ids_are_dense_and_one_based() {
        let registry = TrackRegistry::new();
        assert_eq!(registry.append(summary("a")).await.raw(), 1);
        assert_eq!(registry.append(summary("b")).await.raw(), 2);
        assert_eq!(registry.append(summary("c")).await.raw(), 3);

        let ids: Vec<i64> = registry.ids().await.iter().map(Id::raw).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn ids_is_empty_for_a_fresh_registry() {
        let registry = TrackRegistry::new();
        assert!(registry.ids().await.is_empty());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn get_returns_the_exact_stored_summary() {
        let registry = TrackRegistry::new();
        let id = registry.append(summary("a")).await;
        let stored = registry.get(id).await.unwrap();
        assert_eq!(stored, summary("a"));
    }

    #[tokio::test]
    async fn out_of_range_ids_are_not_found() {
        let registry = TrackRegistry::new();
        registry.append(summary("a")).await;

        for raw in [0, -1, 2, i64::MAX] {
            let result = registry.get(Id::new(raw)).await;
            assert!(
                matches!(result, Err(RequestError::NotFound)),
                "id {} should be NotFound",
                raw
            );
        }
    }

    #[tokio::test]
    async fn concurrent_appends_never_share_an_id() {
        let registry = TrackRegistry::new();

        let mut handles = vec![];
        for i in 0..64 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry.append(summary(&format!("pilot {}", i))).await
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            let id = handle.await.unwrap();
            assert!(seen.insert(id.raw()), "id {} assigned twice", id);
        }
        assert_eq!(registry.len().await, 64);
        let ids: Vec<i64> = registry.ids().await.iter().map(Id::raw).collect();
        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
    }
}
