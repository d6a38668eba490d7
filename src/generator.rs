// 🎲 Batch Card Generator - composes expansion, Luhn, classification, expiry

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::expiry::{future_month_year, security_code, DEFAULT_CVV_LENGTH};
use crate::luhn;
use crate::network::{CardNetwork, NetworkRules};
use crate::pattern::BinPattern;

/// Records produced per batch when the caller does not say otherwise.
pub const DEFAULT_COUNT: usize = 10;

/// Attempt cap = requested count x this multiplier.
pub const DEFAULT_ATTEMPT_MULTIPLIER: usize = 10;

// ============================================================================
// RECORD
// ============================================================================

/// One generated card. Immutable once built; a new generation request
/// replaces the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCard {
    /// 1-based position within the batch.
    pub sequence_number: usize,
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub network: CardNetwork,
    pub luhn_valid: bool,
}

impl GeneratedCard {
    /// Pipe-delimited interchange form: `number|month|year|cvv`.
    pub fn canonical_line(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.card_number, self.expiry_month, self.expiry_year, self.cvv
        )
    }
}

// ============================================================================
// BATCH
// ============================================================================

/// Result of one generation run. May hold fewer cards than requested when
/// the attempt cap ran out before enough unique numbers turned up - that is
/// a reportable shortfall, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub cards: Vec<GeneratedCard>,
    pub requested: usize,
    pub attempts: usize,
}

impl Batch {
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.cards.len())
    }

    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }

    /// Per-network card counts, sorted by label.
    pub fn network_summary(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.network.label()).or_insert(0) += 1;
        }
        counts
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Explicit generator configuration - no module-level defaults or hidden
/// environment reads.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub default_count: usize,
    pub cvv_length: usize,
    pub attempt_multiplier: usize,
    pub rules: NetworkRules,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            default_count: DEFAULT_COUNT,
            cvv_length: DEFAULT_CVV_LENGTH,
            attempt_multiplier: DEFAULT_ATTEMPT_MULTIPLIER,
            rules: NetworkRules::standard(),
        }
    }
}

// ============================================================================
// GENERATOR
// ============================================================================

pub struct CardGenerator {
    config: GeneratorConfig,
}

impl CardGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        CardGenerator { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate up to `count` unique cards from `pattern`, stamped against
    /// the current clock. See [`CardGenerator::generate_at`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        pattern: &BinPattern,
        count: usize,
        validate: bool,
        rng: &mut R,
    ) -> Batch {
        self.generate_at(pattern, count, validate, Utc::now(), rng)
    }

    /// Generate up to `count` unique cards from `pattern`.
    ///
    /// With `validate` on, the final position gets the computed Luhn check
    /// digit, so every record is valid by construction. Off, the final
    /// position is expanded like any other and records carry
    /// `luhn_valid = false`.
    ///
    /// Duplicates are discarded and retried. The loop stops once `count`
    /// cards are collected or `count * attempt_multiplier` attempts are
    /// spent; exhaustion returns the partial batch.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        pattern: &BinPattern,
        count: usize,
        validate: bool,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Batch {
        let mut cards = Vec::with_capacity(count);
        let mut seen: HashSet<String> = HashSet::new();
        let max_attempts = count.saturating_mul(self.config.attempt_multiplier);
        let mut attempts = 0;

        while cards.len() < count && attempts < max_attempts {
            attempts += 1;

            let card_number = if validate {
                let mut number = pattern.expand_partial(rng);
                let check = luhn::check_digit(&number);
                number.push((b'0' + check as u8) as char);
                number
            } else {
                pattern.expand_full(rng)
            };

            if seen.contains(&card_number) {
                continue;
            }
            seen.insert(card_number.clone());

            let (expiry_month, expiry_year) = future_month_year(now, rng);
            let cvv = security_code(rng, self.config.cvv_length);
            let network = self.config.rules.classify(&card_number);
            let luhn_valid = validate && luhn::is_valid(&card_number);

            cards.push(GeneratedCard {
                sequence_number: cards.len() + 1,
                card_number,
                expiry_month,
                expiry_year,
                cvv,
                network,
                luhn_valid,
            });
        }

        Batch {
            cards,
            requested: count,
            attempts,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
