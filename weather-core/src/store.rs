//! Storage of combined weather records.

use chrono::NaiveDate;
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;

use crate::{
    Result,
    model::{RequestData, WeatherRecord},
};

/// Identifier of the record seeded at startup.
pub const SAMPLE_ID: &str = "sample-weather-123";

/// Storage backend for weather records.
///
/// Records are immutable once written; `put` only ever inserts.
pub trait WeatherStore: Send + Sync {
    /// Insert a record under its own id, replacing any previous one.
    fn put(&self, record: WeatherRecord) -> Result<()>;

    /// Look up a record by id. Unknown ids yield `Ok(None)`.
    fn get(&self, id: &str) -> Result<Option<WeatherRecord>>;

    /// Number of stored records.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Process-lifetime in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, WeatherRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new store already holding the sample record.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.seed_sample();
        store
    }

    /// Insert the fixed sample record so retrieval can be exercised without a prior submission.
    pub fn seed_sample(&self) {
        let record = sample_record();
        self.records.write().insert(record.id.clone(), record);
    }
}

impl WeatherStore for MemoryStore {
    fn put(&self, record: WeatherRecord) -> Result<()> {
        self.records.write().insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<WeatherRecord>> {
        Ok(self.records.read().get(id).cloned())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }
}

pub fn sample_record() -> WeatherRecord {
    let created_at = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap_or_default();

    WeatherRecord {
        id: SAMPLE_ID.to_string(),
        request_data: RequestData {
            date: "2024-01-15".to_string(),
            location: "New York".to_string(),
            notes: "Sample weather data for testing".to_string(),
            created_at,
        },
        weather_data: json!({
            "current": {
                "temperature": 22,
                "weather_descriptions": ["Partly cloudy"],
                "humidity": 65,
                "wind_speed": 10,
                "wind_dir": "SW"
            },
            "location": {
                "name": "New York",
                "country": "United States of America",
                "region": "New York"
            }
        }),
    }
}
