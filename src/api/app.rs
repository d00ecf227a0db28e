// src/api/app.rs

use crate::domain::amount::Amount;
use crate::domain::config::LotteryConfig;
use crate::domain::AccountId;
use crate::engine::{LotteryError, LotteryLedger, RandomSource};
use crate::infra::{InMemoryBank, SharedLedger};

use super::commands::Command;
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{answer_query, build_round_view, Query, QueryResponse};

/// Интерфейс вызова "как на цепочке": хост даёт вызывающего и приложенную
/// оплату, приложение списывает её с баланса, зовёт леджер и отдаёт DTO.
///
/// Балансы и RNG здесь локальные (симулятор), леджер — общий хэндл,
/// его можно раздать читателям через `ledger()`.
pub struct LotteryApp<R: RandomSource> {
    ledger: SharedLedger,
    bank: InMemoryBank,
    rng: R,
}

impl<R: RandomSource> LotteryApp<R> {
    /// Задеплоить лотерею с данным конфигом.
    pub fn deploy(config: LotteryConfig, bank: InMemoryBank, rng: R) -> Result<Self, ApiError> {
        let ledger = LotteryLedger::new(config)?;
        Ok(Self {
            ledger: SharedLedger::new(ledger),
            bank,
            rng,
        })
    }

    /// Выполнить команду от имени `caller` с приложенной оплатой `attached`.
    pub fn execute(
        &mut self,
        caller: AccountId,
        attached: Amount,
        command: Command,
    ) -> Result<CommandResponse, ApiError> {
        match command {
            Command::Enter => {
                self.bank.withdraw(caller, attached)?;

                if let Err(e) = self.ledger.enter(caller, attached) {
                    // Вход отклонён: деньги возвращаются вызывающему.
                    self.bank.deposit(caller, attached);
                    return Err(e.into());
                }

                let snapshot = self.ledger.snapshot()?;
                Ok(CommandResponse::Entered(build_round_view(&snapshot)))
            }

            Command::PickWinner => {
                if !attached.is_zero() {
                    return Err(LotteryError::NotPayable(attached).into());
                }

                let payout = self
                    .ledger
                    .pick_winner(caller, &mut self.rng, &mut self.bank)?;

                let snapshot = self.ledger.snapshot()?;
                Ok(CommandResponse::WinnerPicked {
                    payout,
                    round: build_round_view(&snapshot),
                })
            }
        }
    }

    /// То же, что `execute`, но оплата в десятичной записи ("0.02").
    pub fn execute_with_value(
        &mut self,
        caller: AccountId,
        value: &str,
        command: Command,
    ) -> Result<CommandResponse, ApiError> {
        let attached = Amount::parse_tokens(value)?;
        self.execute(caller, attached, command)
    }

    pub fn query(&self, caller: AccountId, query: &Query) -> Result<QueryResponse, ApiError> {
        let snapshot = self.ledger.snapshot()?;
        Ok(answer_query(&snapshot, caller, query))
    }

    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    pub fn bank(&self) -> &InMemoryBank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut InMemoryBank {
        &mut self.bank
    }
}
