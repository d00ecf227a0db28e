// src/engine/ledger.rs

use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::config::LotteryConfig;
use crate::domain::round::{Entry, Round};
use crate::domain::{AccountId, RoundId};
use crate::engine::errors::LotteryError;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::payout::{PayoutSink, WinnerPayout};
use crate::engine::RandomSource;

/// Леджер лотереи: владелец, текущий раунд и журнал раунда.
///
/// Все операции либо полностью применяются, либо возвращают ошибку
/// и не трогают состояние. Синхронизация между потоками — снаружи
/// (см. `infra::SharedLedger`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LotteryLedger {
    config: LotteryConfig,
    round: Round,
    history: RoundHistory,
}

impl LotteryLedger {
    /// Деплой: владелец фиксируется навсегда, раунд №1 открыт и пуст.
    pub fn new(config: LotteryConfig) -> Result<Self, LotteryError> {
        config.validate()?;

        let round = Round::open(1);
        let mut history = RoundHistory::new();
        history.push(RoundEventKind::RoundOpened {
            round_id: round.id,
            previous: None,
        });

        Ok(Self {
            config,
            round,
            history,
        })
    }

    /// Войти в раунд. Оплата должна быть строго больше `min_entry`.
    pub fn enter(&mut self, caller: AccountId, amount: Amount) -> Result<(), LotteryError> {
        let minimum = self.config.min_entry;
        if amount <= minimum {
            return Err(LotteryError::InsufficientPayment {
                paid: amount,
                minimum,
            });
        }

        let pot_after = self
            .round
            .pot
            .checked_add(amount)
            .ok_or(LotteryError::PotOverflow)?;

        self.round.entries.push(Entry {
            account: caller,
            amount,
        });
        self.round.pot = pot_after;

        self.history.push(RoundEventKind::PlayerEntered {
            account: caller,
            amount,
            pot_after,
        });

        Ok(())
    }

    /// Список участников в порядке входа. Читать может кто угодно.
    pub fn list_players(&self, _caller: AccountId) -> Vec<AccountId> {
        self.round.players()
    }

    /// Выбрать победителя, выплатить ему весь банк и открыть новый раунд.
    ///
    /// Порядок важен: сначала все проверки и перевод, и только потом
    /// сброс раунда. Если `payout` вернул ошибку — раунд остаётся как был.
    pub fn pick_winner<R, P>(
        &mut self,
        caller: AccountId,
        rng: &mut R,
        payout: &mut P,
    ) -> Result<WinnerPayout, LotteryError>
    where
        R: RandomSource + ?Sized,
        P: PayoutSink + ?Sized,
    {
        if caller != self.config.owner {
            return Err(LotteryError::Unauthorized { caller });
        }

        let len = self.round.len();
        if len == 0 {
            return Err(LotteryError::EmptyRound);
        }

        // Кривой RandomSource не должен ронять леджер.
        let winner_index = rng.pick_index(len) % len;
        let winner = self.round.entries[winner_index].account;
        let amount = self.round.pot;

        payout
            .transfer(winner, amount)
            .map_err(|e| match e {
                LotteryError::PayoutFailed { .. } => e,
                other => LotteryError::PayoutFailed {
                    winner,
                    reason: other.to_string(),
                },
            })?;

        let result = WinnerPayout {
            round_id: self.round.id,
            winner,
            winner_index,
            amount,
        };

        self.round = Round::open(self.round.id + 1);
        self.history = RoundHistory::new();
        self.history.push(RoundEventKind::RoundOpened {
            round_id: self.round.id,
            previous: Some(result.clone()),
        });

        Ok(result)
    }

    /// Владелец (в исходном контракте — `manager`).
    pub fn owner(&self) -> AccountId {
        self.config.owner
    }

    /// Сколько денег сейчас удерживает лотерея.
    pub fn pot(&self) -> Amount {
        self.round.pot
    }

    pub fn round_id(&self) -> RoundId {
        self.round.id
    }

    pub fn min_entry(&self) -> Amount {
        self.config.min_entry
    }

    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }
}
