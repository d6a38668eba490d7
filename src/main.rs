use anyhow::{Context, Result};
use std::env;

use cardforge::{BinPattern, CardGenerator, GeneratorConfig, DEFAULT_BIN};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let validate = !args.iter().any(|a| a == "--no-luhn");
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let raw_bin = positional.first().map(|s| s.as_str()).unwrap_or(DEFAULT_BIN);
    let pattern = BinPattern::sanitize(raw_bin)?;

    let config = GeneratorConfig::default();
    let count = match positional.get(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid count: {raw:?}"))?,
        None => config.default_count,
    };

    let generator = CardGenerator::new(config);
    let batch = generator.generate(&pattern, count, validate, &mut rand::rng());

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    println!(
        "🎲 Generating {} cards from BIN: {} (Luhn: {})",
        count,
        pattern,
        if validate { "ON" } else { "OFF" }
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for card in &batch.cards {
        println!(
            "{:>3}. {}  [{}]",
            card.sequence_number,
            card.canonical_line(),
            card.network
        );
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Networks:");
    for (network, n) in batch.network_summary() {
        println!("   {network}: {n}");
    }

    if batch.shortfall() > 0 {
        eprintln!(
            "⚠️  Only {} of {} unique cards found within {} attempts",
            batch.cards.len(),
            batch.requested,
            batch.attempts
        );
    } else {
        println!(
            "✅ Generated {} cards in {} attempts",
            batch.cards.len(),
            batch.attempts
        );
    }

    Ok(())
}

fn print_usage() {
    println!("cardforge {} - BIN-pattern test card generator", cardforge::VERSION);
    println!();
    println!("Usage: cardforge [BIN] [COUNT] [--no-luhn] [--json]");
    println!();
    println!("  BIN        template like {DEFAULT_BIN} (x = random digit; default shown)");
    println!("  COUNT      cards to generate (default 10)");
    println!("  --no-luhn  fast mode, skip check digit computation");
    println!("  --json     emit the batch as JSON");
}
