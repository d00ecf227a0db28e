use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::{AccountId, RoundId};
use crate::engine::errors::LotteryError;

/// Куда уходит выигрыш. Реализуется хостом (цепочка, симулятор, тестовый банк).
pub trait PayoutSink {
    fn transfer(&mut self, to: AccountId, amount: Amount) -> Result<(), LotteryError>;
}

/// Итог успешного pick_winner.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerPayout {
    /// Раунд, который был закрыт этой выплатой.
    pub round_id: RoundId,
    pub winner: AccountId,
    /// Позиция победителя в списке участников.
    pub winner_index: usize,
    pub amount: Amount,
}
