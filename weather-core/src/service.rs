//! Submission and retrieval flows.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    Error, Result, WeatherProvider, WeatherStore,
    model::{RequestData, WeatherRecord, WeatherRequest},
};

/// Ties the provider and the store together.
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    store: Arc<dyn WeatherStore>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>, store: Arc<dyn WeatherStore>) -> Self {
        Self { provider, store }
    }

    /// Look up current weather for the request's location, store the merged record and
    /// return its id.
    ///
    /// Nothing is stored unless the provider call succeeds. The date is not validated.
    pub async fn submit(&self, request: WeatherRequest) -> Result<String> {
        if request.location.trim().is_empty() {
            return Err(Error::Validation("location must not be empty".to_string()));
        }

        let id = Uuid::new_v4().to_string();

        let weather_data = match self.provider.current(&request.location).await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(%id, location = %request.location, error = %err, "weather lookup failed");
                return Err(err.into());
            }
        };

        let record = WeatherRecord {
            id: id.clone(),
            request_data: RequestData::from_request(request, Utc::now().naive_utc()),
            weather_data,
        };

        self.store.put(record)?;
        tracing::info!(%id, "stored weather record");

        Ok(id)
    }

    /// Return the stored record for `id`.
    pub fn fetch(&self, id: &str) -> Result<WeatherRecord> {
        self.store.get(id)?.ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, ProviderError, SAMPLE_ID};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::{Value, json};

    /// Replays a fixed outcome and counts calls.
    #[derive(Debug)]
    struct StubProvider {
        outcome: fn() -> std::result::Result<Value, ProviderError>,
        calls: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn new(outcome: fn() -> std::result::Result<Value, ProviderError>) -> Arc<Self> {
            Arc::new(Self { outcome, calls: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(&self, location: &str) -> std::result::Result<Value, ProviderError> {
            self.calls.lock().push(location.to_string());
            (self.outcome)()
        }
    }

    /// Rejects every write.
    struct FailingStore;

    impl WeatherStore for FailingStore {
        fn put(&self, _record: WeatherRecord) -> Result<()> {
            Err(Error::Storage("backend offline".to_string()))
        }

        fn get(&self, _id: &str) -> Result<Option<WeatherRecord>> {
            Ok(None)
        }

        fn len(&self) -> Result<usize> {
            Ok(0)
        }
    }

    fn london() -> std::result::Result<Value, ProviderError> {
        Ok(json!({ "current": { "temperature": 15 }, "location": { "name": "London" } }))
    }

    fn request(location: &str) -> WeatherRequest {
        WeatherRequest {
            date: "2024-03-01".to_string(),
            location: location.to_string(),
            notes: String::new(),
        }
    }

    fn service(provider: Arc<StubProvider>) -> (WeatherService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::seeded());
        (WeatherService::new(provider, store.clone()), store)
    }

    #[tokio::test]
    async fn submit_then_fetch_round_trips_request_data() {
        let provider = StubProvider::new(london);
        let (svc, _) = service(provider.clone());

        let id = svc.submit(request("London")).await.unwrap();
        let record = svc.fetch(&id).unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.request_data.location, "London");
        assert_eq!(record.request_data.date, "2024-03-01");
        assert_eq!(record.weather_data["current"]["temperature"], 15);
        assert_eq!(provider.calls.lock().as_slice(), ["London"]);
    }

    #[tokio::test]
    async fn identical_submissions_get_distinct_ids() {
        let (svc, store) = service(StubProvider::new(london));

        let a = svc.submit(request("London")).await.unwrap();
        let b = svc.submit(request("London")).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn reported_error_stores_nothing() {
        let (svc, store) =
            service(StubProvider::new(|| Err(ProviderError::Reported("bad query".into()))));

        let err = svc.submit(request("Nowhere")).await.unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn unreachable_provider_stores_nothing() {
        let (svc, store) =
            service(StubProvider::new(|| Err(ProviderError::Unreachable("refused".into()))));

        let err = svc.submit(request("London")).await.unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_location_skips_provider() {
        let provider = StubProvider::new(london);
        let (svc, store) = service(provider.clone());

        let err = svc.submit(request("   ")).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(provider.calls.lock().is_empty());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn date_is_not_validated() {
        let (svc, _) = service(StubProvider::new(london));
        let mut req = request("London");
        req.date = "next tuesday-ish".to_string();

        let id = svc.submit(req).await.unwrap();
        assert_eq!(svc.fetch(&id).unwrap().request_data.date, "next tuesday-ish");
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_internal_error() {
        let store = Arc::new(FailingStore);
        let svc = WeatherService::new(StubProvider::new(london), store.clone());

        let err = svc.submit(request("London")).await.unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(err.status_code(), 500);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn fetch_unknown_id_is_not_found() {
        let (svc, _) = service(StubProvider::new(london));

        let err = svc.fetch("never-issued").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn sample_is_available_without_submission() {
        let (svc, _) = service(StubProvider::new(london));

        let record = svc.fetch(SAMPLE_ID).unwrap();
        assert_eq!(record.request_data.location, "New York");
    }
}
