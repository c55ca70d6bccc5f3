use async_trait::async_trait;
use shared::{
    domain::{PlateStates, ShopNumber},
    error::{ApiError, ErrorCode},
    protocol::ShopPlates,
};
use storage::Storage;
use tracing::debug;

/// The update operation behind `POST /v1/plates`.
///
/// Implementations own any retry or timeout policy; callers invoke it once
/// per validated request.
#[async_trait]
pub trait PlateUpdater: Send + Sync {
    async fn update_plates(
        &self,
        shop_number: ShopNumber,
        plate: PlateStates,
    ) -> anyhow::Result<ShopPlates>;
}

#[async_trait]
impl PlateUpdater for Storage {
    async fn update_plates(
        &self,
        shop_number: ShopNumber,
        plate: PlateStates,
    ) -> anyhow::Result<ShopPlates> {
        self.upsert_plate(shop_number, &plate).await?;
        let plates = self.list_plates_for_shop(shop_number).await?;
        Ok(ShopPlates {
            shop_number,
            plates,
        })
    }
}

pub fn plates_route() -> &'static str {
    "/v1/plates"
}

pub async fn update_plates(
    updater: &dyn PlateUpdater,
    shop_number: ShopNumber,
    plate: PlateStates,
) -> Result<ShopPlates, ApiError> {
    debug!(shop_number = shop_number.0, qr_id = plate.qr_id.as_str(), "updating plate state");
    updater
        .update_plates(shop_number, plate)
        .await
        .map_err(internal)
}

fn internal(err: anyhow::Error) -> ApiError {
    ApiError::new(ErrorCode::Internal, format!("{err:#}"))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
