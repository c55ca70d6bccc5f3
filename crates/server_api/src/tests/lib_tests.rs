use super::*;
use shared::domain::{PlateState, PopNumber, QrId};

struct BrokenUpdater;

#[async_trait]
impl PlateUpdater for BrokenUpdater {
    async fn update_plates(
        &self,
        _shop_number: ShopNumber,
        _plate: PlateStates,
    ) -> anyhow::Result<ShopPlates> {
        anyhow::bail!("datastore unavailable")
    }
}

fn plate(qr_id: &str, pop_number: i16, state: PlateState) -> PlateStates {
    PlateStates {
        qr_id: QrId(qr_id.into()),
        pop_number: PopNumber(pop_number),
        state,
    }
}

#[tokio::test]
async fn storage_update_returns_all_plates_of_shop() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    update_plates(&storage, ShopNumber(7), plate("Q1", 3, PlateState::On))
        .await
        .expect("first");
    let outcome = update_plates(&storage, ShopNumber(7), plate("Q2", 1, PlateState::Off))
        .await
        .expect("second");

    assert_eq!(outcome.shop_number, ShopNumber(7));
    assert_eq!(outcome.plates.len(), 2);
    assert_eq!(outcome.plates[0].qr_id, QrId("Q2".into()));
    assert_eq!(outcome.plates[1].state, PlateState::On);
}

#[tokio::test]
async fn repeated_update_is_applied_each_time() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let first = update_plates(&storage, ShopNumber(1), plate("Q1", 3, PlateState::On))
        .await
        .expect("first");
    let second = update_plates(&storage, ShopNumber(1), plate("Q1", 3, PlateState::On))
        .await
        .expect("second");

    assert_eq!(second.plates.len(), 1);
    assert!(second.plates[0].updated_at >= first.plates[0].updated_at);
}

#[tokio::test]
async fn updater_failure_maps_to_internal_error() {
    let err = update_plates(&BrokenUpdater, ShopNumber(1), plate("Q1", 1, PlateState::Off))
        .await
        .expect_err("should fail");
    assert_eq!(err.code, ErrorCode::Internal);
    assert!(err.message.contains("datastore unavailable"));
}
