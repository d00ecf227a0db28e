//! Инфраструктурный слой вокруг леджера:
//! - RNG-реализации (rand на native, sha2-HashRng везде);
//! - модель внешних балансов (симулятор хоста);
//! - потокобезопасная обёртка над леджером.

pub mod bank;
pub mod rng;
pub mod rng_seed;
pub mod shared;

pub use bank::InMemoryBank;
pub use rng::*;
pub use rng_seed::{HashRng, RngSeed};
pub use shared::SharedLedger;
