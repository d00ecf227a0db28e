//! Доменная модель лотереи: суммы, аккаунты, раунд, конфиг.

pub mod amount;
pub mod config;
pub mod round;

/// Идентификатор внешнего аккаунта (адрес вызывающего).
pub type AccountId = u64;

/// Номер раунда, начинается с 1.
pub type RoundId = u64;

pub use amount::*;
pub use config::*;
pub use round::*;
