use anyhow::Result;
use clap::Parser;

use breedfetch::contexts::CachingBreedFetcher;
use breedfetch::data::{BreedFetcher, FetchError};
use breedfetch::registries::DogApiBreedFetcher;

#[derive(Parser)]
#[command(name = "breedfetch")]
#[command(about = "Look up dog sub breeds, fetching each breed from the source at most once", long_about = None)]
struct Cli {
    #[arg(help = "Breed names to look up", required = true)]
    breeds: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Override the breed API base URL")]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The --base-url flag wins over the DOG_API_BASE_URL environment variable.
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("DOG_API_BASE_URL").ok());
    let fetcher = CachingBreedFetcher::new(DogApiBreedFetcher::new(base_url));

    let mut failed = 0usize;
    for breed in &cli.breeds {
        match fetcher.sub_breeds(breed) {
            Ok(sub_breeds) => {
                if sub_breeds.is_empty() {
                    println!("{}: no sub breeds", breed);
                } else {
                    println!("{}: {}", breed, sub_breeds.join(", "));
                }
            }
            Err(FetchError::BreedNotFound(_)) => {
                failed += 1;
                eprintln!("✗ Breed '{}' not found", breed);
            }
            Err(e) => {
                failed += 1;
                eprintln!("✗ Failed to look up '{}': {}", breed, e);
            }
        }
    }

    if cli.verbose {
        println!("Calls made to the breed source: {}", fetcher.calls_made());
    }

    if failed > 0 {
        anyhow::bail!("{} lookup(s) failed", failed);
    }

    Ok(())
}
