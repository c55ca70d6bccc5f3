use crate::{
    domain::{PlateState, PlateStates, PopNumber, QrId, ShopNumber},
    error::CommandError,
    protocol::PlateRequestBody,
};

pub const MISSING_QR_ID: &str = "Missing qrId";
pub const MISSING_SHOP_NUMBER: &str = "Missing shopNumber";
pub const MISSING_HOSTNAME: &str = "Missing hostname";
pub const MISSING_POP_NUMBER: &str = "Missing popNumber";
pub const MISSING_STATE: &str = "Missing state";

/// A fully validated display-state update. Only constructible through
/// [`UpdateStateCommand::from_json`] or `TryFrom<PlateRequestBody>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStateCommand {
    qr_id: QrId,
    shop_number: ShopNumber,
    hostname: String,
    pop_number: PopNumber,
    state: PlateState,
}

impl UpdateStateCommand {
    pub fn from_json(raw: &[u8]) -> Result<Self, CommandError> {
        let body: PlateRequestBody = serde_json::from_slice(raw)?;
        Self::try_from(body)
    }

    pub fn qr_id(&self) -> &QrId {
        &self.qr_id
    }

    pub fn shop_number(&self) -> ShopNumber {
        self.shop_number
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn pop_number(&self) -> PopNumber {
        self.pop_number
    }

    pub fn state(&self) -> PlateState {
        self.state
    }

    /// Splits the command into the arguments of the update operation.
    pub fn into_update(self) -> (ShopNumber, PlateStates) {
        (
            self.shop_number,
            PlateStates {
                qr_id: self.qr_id,
                pop_number: self.pop_number,
                state: self.state,
            },
        )
    }
}

impl TryFrom<PlateRequestBody> for UpdateStateCommand {
    type Error = CommandError;

    fn try_from(body: PlateRequestBody) -> Result<Self, Self::Error> {
        let mut violations = Vec::with_capacity(5);

        let qr_id = body.qr_id.filter(|v| !v.is_empty());
        if qr_id.is_none() {
            violations.push(MISSING_QR_ID.to_string());
        }
        if body.shop_number.is_none() {
            violations.push(MISSING_SHOP_NUMBER.to_string());
        }
        let hostname = body.hostname.filter(|v| !v.is_empty());
        if hostname.is_none() {
            violations.push(MISSING_HOSTNAME.to_string());
        }
        if body.pop_number.is_none() {
            violations.push(MISSING_POP_NUMBER.to_string());
        }
        let state = body.state.and_then(|v| PlateState::try_from(v).ok());
        if state.is_none() {
            violations.push(MISSING_STATE.to_string());
        }

        let (Some(qr_id), Some(shop_number), Some(hostname), Some(pop_number), Some(state)) =
            (qr_id, body.shop_number, hostname, body.pop_number, state)
        else {
            return Err(CommandError::Invalid(violations));
        };

        Ok(Self {
            qr_id: QrId(qr_id),
            shop_number: ShopNumber(shop_number),
            hostname,
            pop_number: PopNumber(pop_number),
            state,
        })
    }
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
