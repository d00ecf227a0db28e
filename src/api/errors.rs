use serde::{Deserialize, Serialize};

use crate::domain::amount::{Amount, AmountParseError};
use crate::domain::AccountId;
use crate::engine::LotteryError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Оплата не больше минимума.
    InsufficientPayment { paid: Amount, minimum: Amount },

    /// Не владелец пытается выбрать победителя.
    Unauthorized(AccountId),

    /// Выбирать не из кого.
    EmptyRound,

    /// У вызывающего не хватает денег на приложенную оплату.
    InsufficientFunds(String),

    /// Неправильные входные данные (битая сумма, оплата в non-payable методе).
    BadRequest(String),

    /// Всё остальное: выплата, блокировка, конфиг.
    Internal(String),
}

impl From<LotteryError> for ApiError {
    fn from(err: LotteryError) -> Self {
        match err {
            LotteryError::InsufficientPayment { paid, minimum } => {
                ApiError::InsufficientPayment { paid, minimum }
            }
            LotteryError::Unauthorized { caller } => ApiError::Unauthorized(caller),
            LotteryError::EmptyRound => ApiError::EmptyRound,
            e @ LotteryError::InsufficientFunds { .. } => ApiError::InsufficientFunds(e.to_string()),
            e @ LotteryError::NotPayable(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AmountParseError> for ApiError {
    fn from(err: AmountParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
