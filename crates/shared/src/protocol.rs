use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{PlateState, PopNumber, QrId, ShopNumber};

/// Untrusted body of `POST /v1/plates`. Absent and `null` are both `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateRequestBody {
    #[serde(default)]
    pub qr_id: Option<String>,
    #[serde(default)]
    pub shop_number: Option<i64>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub pop_number: Option<i16>,
    #[serde(default)]
    pub state: Option<i8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateRecord {
    pub qr_id: QrId,
    pub pop_number: PopNumber,
    pub state: PlateState,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of an update: every plate currently known for the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPlates {
    pub shop_number: ShopNumber,
    pub plates: Vec<PlateRecord>,
}
