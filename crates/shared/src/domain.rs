use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! number_newtype {
    ($name:ident, $inner:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub $inner);
    };
}

number_newtype!(ShopNumber, i64);
number_newtype!(PopNumber, i16);

/// Identifier printed on a physical display tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QrId(pub String);

impl QrId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("plate state must be 0 or 1, got {0}")]
pub struct InvalidPlateState(pub i8);

/// Binary display state. Travels on the wire as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum PlateState {
    Off,
    On,
}

impl TryFrom<i8> for PlateState {
    type Error = InvalidPlateState;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            other => Err(InvalidPlateState(other)),
        }
    }
}

impl From<PlateState> for i8 {
    fn from(value: PlateState) -> Self {
        match value {
            PlateState::Off => 0,
            PlateState::On => 1,
        }
    }
}

/// A single state change for one tag, as handed to the update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateStates {
    pub qr_id: QrId,
    pub pop_number: PopNumber,
    pub state: PlateState,
}
