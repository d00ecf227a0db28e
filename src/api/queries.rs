use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::AccountId;
use crate::engine::LotteryLedger;

use super::dto::RoundViewDto;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// `getPlayersList()`.
    GetPlayersList,

    /// `manager()` — кто владелец.
    GetManager,

    /// Сколько удерживает контракт.
    GetPot,

    /// Весь раунд одним DTO.
    GetRound,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Players(Vec<AccountId>),
    Manager(AccountId),
    Pot(Amount),
    Round(RoundViewDto),
}

/// Сформировать DTO раунда из леджера.
pub fn build_round_view(ledger: &LotteryLedger) -> RoundViewDto {
    RoundViewDto {
        round_id: ledger.round_id(),
        manager: ledger.owner(),
        players: ledger.round().players(),
        pot: ledger.pot(),
        min_entry: ledger.min_entry(),
    }
}

/// Ответить на запрос по снимку леджера.
pub fn answer_query(ledger: &LotteryLedger, caller: AccountId, query: &Query) -> QueryResponse {
    match query {
        Query::GetPlayersList => QueryResponse::Players(ledger.list_players(caller)),
        Query::GetManager => QueryResponse::Manager(ledger.owner()),
        Query::GetPot => QueryResponse::Pot(ledger.pot()),
        Query::GetRound => QueryResponse::Round(build_round_view(ledger)),
    }
}
