//! Dither an image file to black and white.
//!
//! ```text
//! cargo run --example dither_image --features image -- in.jpg out.png
//! ```
//!
//! Set `RUST_LOG=fsdither=debug` to see the engine's log output.

use fsdither::DitherImage;
use std::{env, time::Instant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <input> <output.png>", args[0]);
        std::process::exit(2);
    }

    let input = image::open(&args[1])?;
    println!(
        "Loaded {} ({}x{})",
        args[1],
        input.width(),
        input.height()
    );

    let start = Instant::now();
    let dithered = input.floyd_steinberg()?;
    println!("Dithered in {:?}", start.elapsed());

    dithered.save(&args[2])?;
    println!("Saved {}", args[2]);

    Ok(())
}
