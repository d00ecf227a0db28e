use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::AccountId;
use crate::engine::errors::LotteryError;

/// Конфигурация лотереи, задаётся один раз при деплое.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LotteryConfig {
    /// Владелец (manager): единственный, кто может вызвать pick_winner.
    pub owner: AccountId,

    /// Вход принимается только при оплате строго больше этой суммы.
    #[serde(default = "LotteryConfig::default_min_entry")]
    pub min_entry: Amount,
}

impl LotteryConfig {
    /// Минимум по умолчанию: 0.01 токена.
    pub fn default_min_entry() -> Amount {
        Amount::from_cents(1)
    }

    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            min_entry: Self::default_min_entry(),
        }
    }

    pub fn with_min_entry(mut self, min_entry: Amount) -> Self {
        self.min_entry = min_entry;
        self
    }

    /// При `min_entry == Amount::MAX` войти невозможно вообще.
    pub fn validate(&self) -> Result<(), LotteryError> {
        if self.min_entry == Amount::MAX {
            return Err(LotteryError::InvalidConfig(
                "LotteryConfig: min_entry = u64::MAX, no payment can exceed it".into(),
            ));
        }
        Ok(())
    }

    /// Прочитать конфиг из JSON, например `{"owner": 1, "min_entry": 10000000}`.
    pub fn from_json(s: &str) -> Result<Self, LotteryError> {
        let cfg: LotteryConfig = serde_json::from_str(s)
            .map_err(|e| LotteryError::InvalidConfig(format!("LotteryConfig: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
