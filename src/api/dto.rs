use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::{AccountId, RoundId};
use crate::engine::payout::WinnerPayout;

/// DTO текущего раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundViewDto {
    pub round_id: RoundId,
    pub manager: AccountId,
    /// Участники в порядке входа.
    pub players: Vec<AccountId>,
    pub pot: Amount,
    pub min_entry: Amount,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Вход принят, возвращаем раунд после входа.
    Entered(RoundViewDto),

    /// Победитель выбран; `round` — уже новый, пустой раунд.
    WinnerPicked {
        payout: WinnerPayout,
        round: RoundViewDto,
    },
}
