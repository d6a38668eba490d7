// 🏷️ Card Network Classifier - ordered prefix rules, first match wins

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// NETWORK
// ============================================================================

/// Payment network inferred from the leading digits of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    Jcb,
    DinersClub,
    Maestro,
    UnionPay,
    Unknown,
}

impl CardNetwork {
    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::AmericanExpress => "American Express",
            CardNetwork::Discover => "Discover",
            CardNetwork::Jcb => "JCB",
            CardNetwork::DinersClub => "Diners Club",
            CardNetwork::Maestro => "Maestro",
            CardNetwork::UnionPay => "UnionPay",
            CardNetwork::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// MATCHERS
// ============================================================================

/// Leading-digit matcher for one classification rule.
#[derive(Debug, Clone)]
pub enum PrefixMatcher {
    /// Single literal prefix.
    Prefix(&'static str),

    /// Any prefix out of a fixed alternation.
    AnyOf(&'static [&'static str]),

    /// Numeric range over the first `digits` leading digits, inclusive.
    Range { digits: usize, lo: u32, hi: u32 },
}

impl PrefixMatcher {
    pub fn matches(&self, card_number: &str) -> bool {
        match self {
            PrefixMatcher::Prefix(prefix) => card_number.starts_with(prefix),
            PrefixMatcher::AnyOf(prefixes) => {
                prefixes.iter().any(|p| card_number.starts_with(p))
            }
            PrefixMatcher::Range { digits, lo, hi } => card_number
                .get(..*digits)
                .and_then(|lead| lead.parse::<u32>().ok())
                .is_some_and(|value| (*lo..=*hi).contains(&value)),
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

#[derive(Debug, Clone)]
pub struct NetworkRule {
    pub matcher: PrefixMatcher,
    pub network: CardNetwork,
}

/// Ordered rule list. Rules are evaluated top to bottom and the first match
/// wins, so list position is the only tie-breaker between rules sharing a
/// leading digit. This is a best-effort taxonomy, not an issuer registry.
#[derive(Debug, Clone)]
pub struct NetworkRules {
    rules: Vec<NetworkRule>,
}

impl NetworkRules {
    /// The standard rule list. Order is load-bearing: JCB's `35` is checked
    /// before the Diners Club family also rooted at `3`, and Discover's `6`
    /// prefixes before Maestro's.
    pub fn standard() -> Self {
        use CardNetwork::*;
        use PrefixMatcher::*;

        NetworkRules {
            rules: vec![
                NetworkRule { matcher: Prefix("4"), network: Visa },
                NetworkRule { matcher: Range { digits: 2, lo: 51, hi: 55 }, network: Mastercard },
                NetworkRule { matcher: AnyOf(&["34", "37"]), network: AmericanExpress },
                NetworkRule { matcher: AnyOf(&["6011", "65"]), network: Discover },
                NetworkRule { matcher: Prefix("35"), network: Jcb },
                NetworkRule {
                    matcher: AnyOf(&["300", "301", "302", "303", "304", "305", "36", "38"]),
                    network: DinersClub,
                },
                NetworkRule {
                    matcher: AnyOf(&["50", "56", "57", "58", "6304", "6390", "67"]),
                    network: Maestro,
                },
                NetworkRule { matcher: Prefix("62"), network: UnionPay },
            ],
        }
    }

    pub fn from_rules(rules: Vec<NetworkRule>) -> Self {
        NetworkRules { rules }
    }

    /// First matching rule wins; no match yields `Unknown`.
    pub fn classify(&self, card_number: &str) -> CardNetwork {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(card_number))
            .map(|rule| rule.network)
            .unwrap_or(CardNetwork::Unknown)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for NetworkRules {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================
