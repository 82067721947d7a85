//! Loyalty card seed-data helpers.

use chrono::Utc;
use rand::Rng;

use tajicart_core::CardNumber;

/// Mint a demo card number in the program format: `TAJI`, the last eight
/// digits of the current timestamp, and four random digits.
#[must_use]
pub fn demo_card_number() -> CardNumber {
    let timestamp = Utc::now().timestamp_millis().to_string();
    let tail: String = timestamp
        .chars()
        .rev()
        .take(8)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let random: u16 = rand::rng().random_range(0..10000);
    CardNumber::new(format!("{}{tail}{random:04}", CardNumber::PREFIX))
}

/// Print a freshly minted demo card number.
pub fn mint() {
    println!("{}", demo_card_number());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_card_number_format() {
        let card = demo_card_number();
        assert!(card.has_program_prefix());
        assert_eq!(card.as_str().len(), "TAJI".len() + 12);
        assert!(card.as_str()["TAJI".len()..].chars().all(|c| c.is_ascii_digit()));
    }
}
