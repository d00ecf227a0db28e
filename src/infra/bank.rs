use std::collections::{HashMap, HashSet};

use crate::domain::amount::Amount;
use crate::domain::AccountId;
use crate::engine::errors::LotteryError;
use crate::engine::payout::PayoutSink;

/// Простая in-memory модель внешних балансов для тестов и локального запуска.
///
/// На реальной цепочке балансы ведёт хост; здесь это играет роль
/// локального симулятора: пополнить, списать при входе, зачислить выигрыш.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBank {
    balances: HashMap<AccountId, Amount>,
    /// Аккаунты, которые отказываются принимать переводы.
    frozen: HashSet<AccountId>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Банк, где у каждого из `accounts` лежит `each`.
    pub fn with_accounts(accounts: impl IntoIterator<Item = AccountId>, each: Amount) -> Self {
        let mut bank = Self::new();
        for a in accounts {
            bank.deposit(a, each);
        }
        bank
    }

    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    pub fn deposit(&mut self, account: AccountId, amount: Amount) {
        *self.balances.entry(account).or_insert(Amount::ZERO) += amount;
    }

    /// Списать сумму. Баланс не уходит в минус.
    pub fn withdraw(&mut self, account: AccountId, amount: Amount) -> Result<(), LotteryError> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(LotteryError::InsufficientFunds {
                account,
                available,
                required: amount,
            });
        }
        self.balances.insert(account, available - amount);
        Ok(())
    }

    pub fn freeze(&mut self, account: AccountId) {
        self.frozen.insert(account);
    }

    pub fn unfreeze(&mut self, account: AccountId) {
        self.frozen.remove(&account);
    }

    /// Сумма всех балансов (для проверки сохранения денег в тестах).
    pub fn total(&self) -> Amount {
        self.balances
            .values()
            .fold(Amount::ZERO, |acc, &v| acc + v)
    }
}

impl PayoutSink for InMemoryBank {
    fn transfer(&mut self, to: AccountId, amount: Amount) -> Result<(), LotteryError> {
        if self.frozen.contains(&to) {
            return Err(LotteryError::PayoutFailed {
                winner: to,
                reason: "получатель заморожен".into(),
            });
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| LotteryError::PayoutFailed {
                winner: to,
                reason: "переполнение баланса получателя".into(),
            })?;
        self.balances.insert(to, credited);
        Ok(())
    }
}
