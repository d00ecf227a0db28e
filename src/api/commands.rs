use serde::{Deserialize, Serialize};

/// Команда верхнего уровня (меняет состояние).
///
/// Вызывающий аккаунт и приложенная оплата приходят от хоста
/// (см. `LotteryApp::execute`), а не из самой команды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// `enter()` — payable, оплата строго больше минимума.
    Enter,

    /// `pickWinner()` — только владелец, оплату не принимает.
    PickWinner,
}
