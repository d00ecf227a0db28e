//! Ядро лотереи: вход в раунд, список игроков, выбор победителя.
//!
//! Высокоуровневый объект: `LotteryLedger`
//! Основные операции:
//!   - `enter` – войти в раунд с оплатой больше минимума
//!   - `list_players` – участники в порядке входа
//!   - `pick_winner` – выплатить банк случайному участнику и сбросить раунд

pub mod errors;
pub mod history;
pub mod ledger;
pub mod payout;

pub use errors::LotteryError;
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use ledger::LotteryLedger;
pub use payout::{PayoutSink, WinnerPayout};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртка над `rand`).
pub trait RandomSource {
    /// Индекс в `[0, len)`. Вызывается только с `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}
