use crate::domain::amount::Amount;
use crate::domain::AccountId;

use thiserror::Error;

/// Ошибки лотереи. Любая ошибка означает: состояние раунда не изменилось.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LotteryError {
    #[error("Оплата {paid} должна быть строго больше минимума {minimum}")]
    InsufficientPayment { paid: Amount, minimum: Amount },

    #[error("Аккаунт {caller} не владелец лотереи")]
    Unauthorized { caller: AccountId },

    #[error("В раунде нет участников, некого выбирать")]
    EmptyRound,

    #[error("Банк раунда переполнен")]
    PotOverflow,

    #[error("Выплата победителю {winner} не прошла: {reason}")]
    PayoutFailed { winner: AccountId, reason: String },

    #[error("У аккаунта {account} недостаточно средств: есть {available}, нужно {required}")]
    InsufficientFunds {
        account: AccountId,
        available: Amount,
        required: Amount,
    },

    #[error("Операция не принимает оплату (приложено {0})")]
    NotPayable(Amount),

    #[error("Блокировка леджера отравлена паникой в другом потоке")]
    LockPoisoned,

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),
}
