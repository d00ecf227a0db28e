use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::{AccountId, RoundId};
use crate::engine::payout::WinnerPayout;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Новый раунд открыт. `previous` = выплата, закрывшая предыдущий раунд.
    RoundOpened {
        round_id: RoundId,
        previous: Option<WinnerPayout>,
    },

    /// Игрок вошёл в раунд.
    PlayerEntered {
        account: AccountId,
        amount: Amount,
        pot_after: Amount,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Журнал текущего раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn last(&self) -> Option<&RoundEventKind> {
        self.events.last().map(|e| &e.kind)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
