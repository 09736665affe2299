use mt19937_clone::{clone_from_rng, clone_from_source, compare_streams, Mt19937};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const DEFAULT_LIMIT: usize = 100_000;

fn parse_arg<T>(arg: Option<String>, name: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
{
    match arg {
        Some(value) => value
            .parse()
            .map_err(|_| format!("invalid {}: '{}'", name, value)),
        None => Ok(default),
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let seed: u32 = parse_arg(args.next(), "seed", 0)?;
    let limit: usize = parse_arg(args.next(), "limit", DEFAULT_LIMIT)?;

    let mut rng = Mt19937::new(seed);
    let mut rng_clone = clone_from_source(|| rng.temper());
    let comparison = compare_streams(|| rng.temper(), || rng_clone.temper(), limit);
    println!("=== MT19937 clone ===");
    println!("{}", comparison);

    let mut std_rng = StdRng::seed_from_u64(seed.into());
    let mut std_rng_clone = clone_from_rng(&mut std_rng);
    println!("\n=== rand::rngs::StdRng ===");
    println!(
        "{}",
        compare_streams(|| std_rng.next_u32(), || std_rng_clone.temper(), limit)
    );

    if !comparison.is_match() {
        return Err("MT19937 clone diverged from its source".to_string());
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        eprintln!("usage: mt19937-clone [seed] [limit]");
        std::process::exit(1);
    }
}
