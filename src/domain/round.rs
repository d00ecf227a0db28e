use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::{AccountId, RoundId};

/// Одна ставка-вход в текущем раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub account: AccountId,
    pub amount: Amount,
}

/// Состояние одного раунда лотереи.
///
/// Инвариант: `pot` всегда равен сумме `amount` по всем `entries`.
/// Порядок `entries` = порядок входа, повторы одного аккаунта допустимы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub id: RoundId,
    pub entries: Vec<Entry>,
    pub pot: Amount,
}

impl Round {
    /// Открыть пустой раунд.
    pub fn open(id: RoundId) -> Self {
        Self {
            id,
            entries: Vec::new(),
            pot: Amount::ZERO,
        }
    }

    /// Участники в порядке входа.
    pub fn players(&self) -> Vec<AccountId> {
        self.entries.iter().map(|e| e.account).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Проверка инварианта банка (для тестов и отладки).
    pub fn is_consistent(&self) -> bool {
        let sum = self
            .entries
            .iter()
            .try_fold(Amount::ZERO, |acc, e| acc.checked_add(e.amount));
        sum == Some(self.pot)
    }
}
