// tests/domain_test.rs

use lottery_engine::domain::{
    amount::{Amount, AmountParseError},
    config::LotteryConfig,
    round::{Entry, Round},
};
use lottery_engine::engine::{LotteryError, LotteryLedger};

// ----------------------
// LotteryConfig
// ----------------------

#[test]
fn config_defaults_to_one_cent_minimum() {
    let cfg = LotteryConfig::new(7);
    assert_eq!(cfg.owner, 7);
    assert_eq!(cfg.min_entry, Amount::from_cents(1));
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_from_json_with_and_without_min_entry() {
    let cfg = LotteryConfig::from_json(r#"{ "owner": 3 }"#).unwrap();
    assert_eq!(cfg, LotteryConfig::new(3));

    let cfg = LotteryConfig::from_json(r#"{ "owner": 3, "min_entry": 5 }"#).unwrap();
    assert_eq!(cfg.min_entry, Amount(5));
}

#[test]
fn config_from_bad_json_is_invalid() {
    let err = LotteryConfig::from_json(r#"{ "min_entry": 5 }"#).unwrap_err();
    assert!(matches!(err, LotteryError::InvalidConfig(_)));
}

#[test]
fn unreachable_minimum_is_rejected() {
    let cfg = LotteryConfig::new(1).with_min_entry(Amount::MAX);

    assert!(matches!(cfg.validate(), Err(LotteryError::InvalidConfig(_))));
    assert!(matches!(
        LotteryLedger::new(cfg),
        Err(LotteryError::InvalidConfig(_))
    ));
}

// ----------------------
// Round
// ----------------------

#[test]
fn open_round_is_empty_and_consistent() {
    let round = Round::open(1);

    assert!(round.is_empty());
    assert_eq!(round.len(), 0);
    assert_eq!(round.pot, Amount::ZERO);
    assert!(round.is_consistent());
}

#[test]
fn round_consistency_detects_pot_mismatch() {
    let mut round = Round::open(1);
    round.entries.push(Entry {
        account: 1,
        amount: Amount::from_cents(2),
    });
    assert!(!round.is_consistent());

    round.pot = Amount::from_cents(2);
    assert!(round.is_consistent());
    assert_eq!(round.players(), vec![1]);
}

// ----------------------
// Amount
// ----------------------

#[test]
fn amount_arithmetic_saturates() {
    assert_eq!(Amount::MAX + Amount(1), Amount::MAX);
    assert_eq!(Amount(1) - Amount(5), Amount::ZERO);
    assert_eq!(Amount::MAX.checked_add(Amount(1)), None);
    assert_eq!("0.02".parse::<Amount>().unwrap(), Amount::from_cents(2));
}

#[test]
fn amount_parses_web3_style_values() {
    assert_eq!(Amount::parse_tokens("0.02").unwrap(), Amount::from_cents(2));
    assert_eq!(Amount::parse_tokens("1").unwrap(), Amount::UNIT);
    assert_eq!(Amount::parse_tokens(".5").unwrap(), Amount(500_000_000));
    assert_eq!(Amount::parse_tokens("3.").unwrap(), Amount::from_tokens(3));
}

#[test]
fn amount_rejects_bad_input() {
    assert_eq!(Amount::parse_tokens(""), Err(AmountParseError::Empty));
    assert_eq!(Amount::parse_tokens("."), Err(AmountParseError::Empty));
    assert_eq!(
        Amount::parse_tokens("0.0000000001"),
        Err(AmountParseError::TooManyDecimals)
    );
    assert_eq!(
        Amount::parse_tokens("1,5"),
        Err(AmountParseError::InvalidDigit(','))
    );
    assert_eq!(
        Amount::parse_tokens("99999999999999999999"),
        Err(AmountParseError::Overflow)
    );
}

#[test]
fn amount_display_trims_trailing_zeros() {
    assert_eq!(Amount::from_cents(2).to_string(), "0.02");
    assert_eq!(Amount::from_tokens(5).to_string(), "5");
    assert_eq!(Amount(1).to_string(), "0.000000001");
}
