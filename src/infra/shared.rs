use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::amount::Amount;
use crate::domain::AccountId;
use crate::engine::errors::LotteryError;
use crate::engine::ledger::LotteryLedger;
use crate::engine::payout::{PayoutSink, WinnerPayout};
use crate::engine::RandomSource;

/// Леджер под одной блокировкой: каждая операция — одна критическая секция,
/// поэтому выплата и сброс раунда не видны по отдельности.
#[derive(Clone, Debug)]
pub struct SharedLedger {
    inner: Arc<Mutex<LotteryLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: LotteryLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, LotteryLedger>, LotteryError> {
        self.inner.lock().map_err(|_| LotteryError::LockPoisoned)
    }

    pub fn enter(&self, caller: AccountId, amount: Amount) -> Result<(), LotteryError> {
        self.lock()?.enter(caller, amount)
    }

    pub fn list_players(&self, caller: AccountId) -> Result<Vec<AccountId>, LotteryError> {
        Ok(self.lock()?.list_players(caller))
    }

    pub fn pick_winner<R, P>(
        &self,
        caller: AccountId,
        rng: &mut R,
        payout: &mut P,
    ) -> Result<WinnerPayout, LotteryError>
    where
        R: RandomSource + ?Sized,
        P: PayoutSink + ?Sized,
    {
        self.lock()?.pick_winner(caller, rng, payout)
    }

    /// Копия состояния, снятая под блокировкой.
    pub fn snapshot(&self) -> Result<LotteryLedger, LotteryError> {
        Ok(self.lock()?.clone())
    }
}
