//! Главный модуль приложения Lottery на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем его с командами и запросами из `api`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LotteryOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera. Не нужны.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LotteryMessage {}

/// Запросы к сервису (read-only).
pub type LotteryQuery = Query;

/// Ответы на запросы.
pub type LotteryResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct LotteryAbi;

impl ContractAbi for LotteryAbi {
    type Operation = LotteryOperation;
    type Response = ();
}

impl ServiceAbi for LotteryAbi {
    type Query = LotteryQuery;
    type QueryResponse = LotteryResponse;
}

/// Состояние, которое хранит приложение: один раунд с владельцем.
pub type Storage = engine::LotteryLedger;
