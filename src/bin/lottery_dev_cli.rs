// src/bin/lottery_dev_cli.rs
//
// Прогон типичного сценария лотереи на локальном симуляторе:
// деплой → вход → ещё трое → слишком маленький вход → чужой pickWinner → pickWinner владельца.
//
// Использование:
//   lottery_dev_cli [seed] [config.json]

use std::env;
use std::fs;

use lottery_engine::api::{Command, CommandResponse, LotteryApp, Query, QueryResponse};
use lottery_engine::domain::amount::Amount;
use lottery_engine::domain::config::LotteryConfig;
use lottery_engine::domain::AccountId;
use lottery_engine::infra::{InMemoryBank, RngSeed};

const OWNER: AccountId = 0;
const STARTING_BALANCE_TOKENS: u64 = 100;

fn main() {
    let args: Vec<String> = env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);

    let config = match args.get(2) {
        Some(path) => {
            let raw = match fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("Не удалось прочитать {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            match LotteryConfig::from_json(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Некорректный конфиг: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => LotteryConfig::new(OWNER),
    };

    println!("=== LOTTERY DEV CLI ===");
    println!("seed = {}, manager = {}, min_entry = {}\n", seed, config.owner, config.min_entry);

    let accounts: Vec<AccountId> = (0..5).collect();
    let bank = InMemoryBank::with_accounts(accounts.clone(), Amount::from_tokens(STARTING_BALANCE_TOKENS));
    let rng = RngSeed::from_u64(seed).derive(1).to_hash_rng();

    let mut app = match LotteryApp::deploy(config.clone(), bank, rng) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Деплой не удался: {:?}", e);
            std::process::exit(1);
        }
    };

    // 1. Три игрока по 0.02.
    for &acc in &accounts[1..4] {
        match app.execute_with_value(acc, "0.02", Command::Enter) {
            Ok(CommandResponse::Entered(view)) => {
                println!("[enter] аккаунт {} вошёл, банк = {}", acc, view.pot);
            }
            Ok(other) => println!("[enter] неожиданный ответ: {:?}", other),
            Err(e) => eprintln!("[enter] аккаунт {}: ошибка {:?}", acc, e),
        }
    }

    // 2. Вход ровно на минимум должен быть отклонён.
    match app.execute(accounts[4], config.min_entry, Command::Enter) {
        Ok(_) => eprintln!("[enter] вход на минимум неожиданно принят"),
        Err(e) => println!("[enter] аккаунт {} отклонён: {:?}", accounts[4], e),
    }

    print_players(&app);

    // 3. Не владелец пытается выбрать победителя.
    match app.execute(accounts[1], Amount::ZERO, Command::PickWinner) {
        Ok(_) => eprintln!("[pick] не владелец неожиданно выбрал победителя"),
        Err(e) => println!("[pick] аккаунт {} отклонён: {:?}", accounts[1], e),
    }

    // 4. Владелец выбирает победителя.
    match app.execute(config.owner, Amount::ZERO, Command::PickWinner) {
        Ok(CommandResponse::WinnerPicked { payout, round }) => {
            println!(
                "[pick] раунд {}: победитель {} (позиция {}), выплата {}",
                payout.round_id, payout.winner, payout.winner_index, payout.amount
            );
            println!(
                "[pick] баланс победителя теперь {}",
                app.bank().balance_of(payout.winner)
            );
            match serde_json::to_string_pretty(&round) {
                Ok(json) => println!("\nНовый раунд:\n{}", json),
                Err(e) => eprintln!("Не удалось сериализовать раунд: {}", e),
            }
        }
        Ok(other) => println!("[pick] неожиданный ответ: {:?}", other),
        Err(e) => eprintln!("[pick] ошибка {:?}", e),
    }

    print_players(&app);

    match app.query(OWNER, &Query::GetPot) {
        Ok(QueryResponse::Pot(pot)) => println!("Баланс контракта: {}", pot),
        Ok(other) => println!("Неожиданный ответ: {:?}", other),
        Err(e) => eprintln!("Ошибка запроса: {:?}", e),
    }
}

fn print_players<R: lottery_engine::engine::RandomSource>(app: &LotteryApp<R>) {
    match app.query(OWNER, &Query::GetPlayersList) {
        Ok(QueryResponse::Players(players)) => {
            println!("Игроки ({}): {:?}", players.len(), players);
        }
        Ok(other) => println!("Неожиданный ответ: {:?}", other),
        Err(e) => eprintln!("Ошибка запроса: {:?}", e),
    }
}
