// Interchange format - pipe-delimited card lines from external generators

use serde::{Deserialize, Serialize};

use crate::generator::GeneratedCard;
use crate::luhn;
use crate::network::NetworkRules;

/// Field count of a well-formed line: `number|month|year|cvv`.
const LINE_FIELDS: usize = 4;

/// Outcome of parsing an interchange blob. Malformed lines are dropped
/// silently but counted so callers can surface the loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub cards: Vec<GeneratedCard>,
    pub dropped: usize,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.dropped == 0
    }
}

/// Parse `number|month|year|cvv` lines back into card records.
///
/// Empty lines are skipped; non-empty lines without exactly 4 fields are
/// dropped and counted. Sequence numbers follow the 1-based source line
/// position. Imported numbers are re-classified and re-checked against the
/// Luhn relation so the records stay fully populated.
pub fn parse_batch(text: &str, rules: &NetworkRules) -> ImportReport {
    let mut cards = Vec::new();
    let mut dropped = 0;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != LINE_FIELDS {
            dropped += 1;
            continue;
        }

        let card_number = parts[0].to_string();
        cards.push(GeneratedCard {
            sequence_number: idx + 1,
            network: rules.classify(&card_number),
            luhn_valid: luhn::is_valid(&card_number),
            card_number,
            expiry_month: parts[1].to_string(),
            expiry_year: parts[2].to_string(),
            cvv: parts[3].to_string(),
        });
    }

    ImportReport { cards, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::CardGenerator;
    use crate::network::CardNetwork;
    use crate::pattern::{BinPattern, DEFAULT_BIN};
    use chrono::TimeZone;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_well_formed_lines() {
        let rules = NetworkRules::standard();
        let text = "4111111111111111|04|2028|123\n5555555555554444|11|2029|007\n";
        let report = parse_batch(text, &rules);

        assert!(report.is_clean());
        assert_eq!(report.cards.len(), 2);

        let first = &report.cards[0];
        assert_eq!(first.sequence_number, 1);
        assert_eq!(first.card_number, "4111111111111111");
        assert_eq!(first.expiry_month, "04");
        assert_eq!(first.expiry_year, "2028");
        assert_eq!(first.cvv, "123");
        assert_eq!(first.network, CardNetwork::Visa);
        assert!(first.luhn_valid);

        assert_eq!(report.cards[1].network, CardNetwork::Mastercard);
    }

    #[test]
    fn test_malformed_lines_dropped_and_counted() {
        let rules = NetworkRules::standard();
        let text = "4111111111111111|04|2028|123\n\
                    not-a-card\n\
                    4111111111111111|04|2028\n\
                    4111111111111111|04|2028|123|extra\n\
                    5555555555554444|11|2029|007\n";
        let report = parse_batch(text, &rules);

        assert_eq!(report.cards.len(), 2);
        assert_eq!(report.dropped, 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_empty_lines_skipped_without_counting() {
        let rules = NetworkRules::standard();
        let text = "\n\n4111111111111111|04|2028|123\n\n";
        let report = parse_batch(text, &rules);

        assert_eq!(report.cards.len(), 1);
        assert_eq!(report.dropped, 0);
    }

    #[test]
    fn test_sequence_follows_source_line_position() {
        let rules = NetworkRules::standard();
        let text = "garbage\n4111111111111111|04|2028|123\n";
        let report = parse_batch(text, &rules);

        // The malformed first line still occupies position 1.
        assert_eq!(report.cards[0].sequence_number, 2);
    }

    #[test]
    fn test_round_trip_with_generated_batch() {
        let generator = CardGenerator::with_defaults();
        let now = Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let pattern = BinPattern::parse(DEFAULT_BIN).unwrap();
        let batch = generator.generate_at(&pattern, 10, true, now, &mut rng);

        let text: String = batch
            .cards
            .iter()
            .map(|c| c.canonical_line() + "\n")
            .collect();
        let report = parse_batch(&text, &NetworkRules::standard());

        assert!(report.is_clean());
        assert_eq!(report.cards.len(), batch.cards.len());
        for (parsed, original) in report.cards.iter().zip(&batch.cards) {
            assert_eq!(parsed.card_number, original.card_number);
            assert_eq!(parsed.expiry_month, original.expiry_month);
            assert_eq!(parsed.expiry_year, original.expiry_year);
            assert_eq!(parsed.cvv, original.cvv);
            assert_eq!(parsed.network, original.network);
            assert_eq!(parsed.luhn_valid, original.luhn_valid);
        }
    }
}
