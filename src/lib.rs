// Cardforge - BIN-pattern test card generator
// Core library: Luhn checksum, template expansion, network classification,
// batch generation, pipe-delimited interchange parsing

pub mod expiry;
pub mod generator;
pub mod interchange;
pub mod luhn;
pub mod network;
pub mod pattern;

// Re-export commonly used types
pub use expiry::{future_month_year, security_code, DEFAULT_CVV_LENGTH, MAX_MONTHS_AHEAD};
pub use generator::{
    Batch, CardGenerator, GeneratedCard, GeneratorConfig, DEFAULT_ATTEMPT_MULTIPLIER,
    DEFAULT_COUNT,
};
pub use interchange::{parse_batch, ImportReport};
pub use luhn::{check_digit, is_valid};
pub use network::{CardNetwork, NetworkRule, NetworkRules, PrefixMatcher};
pub use pattern::{BinPattern, DEFAULT_BIN, MAX_PATTERN_LEN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
