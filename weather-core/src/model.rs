use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Form data submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRequest {
    /// Free-form date string, not validated.
    pub date: String,
    pub location: String,
    /// Missing and `null` both mean no notes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The submitted form data as stored alongside the provider payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    pub date: String,
    pub location: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

impl RequestData {
    pub fn from_request(request: WeatherRequest, created_at: NaiveDateTime) -> Self {
        Self {
            date: request.date,
            location: request.location,
            notes: request.notes,
            created_at,
        }
    }
}

/// A stored merge of a submission and the provider's response.
///
/// `weather_data` is kept exactly as the provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub id: String,
    pub request_data: RequestData,
    pub weather_data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedWeather {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
