//! Внешний API лотереи.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (enter, pickWinner);
//! - запросы (queries.rs) — только чтение (getPlayersList, manager, баланс);
//! - DTO (dto.rs) — удобные структуры для клиента;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - app.rs — вызов "как транзакция": вызывающий + приложенная оплата.

pub mod app;
pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use app::*;
pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
