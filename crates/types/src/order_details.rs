use serde::{Deserialize, Serialize};

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub decay_start_time: u64,
    pub decay_end_time: u64,
    pub exclusive_filler: String,
    pub exclusivity_override_bps: u64,
    pub reactor: String,
    pub swapper: String,
    pub nonce: String,
    pub deadline: u64,
    pub additional_validation_contract: String,
    pub additional_validation_data: String,
}

impl OrderDetails {
    /// Length of the decay window in seconds.
    pub fn decay_duration(&self) -> u64 {
        self.decay_end_time.saturating_sub(self.decay_start_time)
    }

    pub fn has_exclusive_filler(&self) -> bool {
        !self.exclusive_filler.eq_ignore_ascii_case(ZERO_ADDRESS)
    }
}
