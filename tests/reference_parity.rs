//! Compare the two-row engine against a straightforward full-raster
//! Floyd–Steinberg that keeps the error of every pixel.

use fsdither::{dither, floor_div};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Full-raster Floyd–Steinberg with floored shares. Shares that would leave
/// the raster are dropped.
fn reference(source: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut values: Vec<i32> = source.iter().map(|&v| v as i32).collect();
    let mut result = vec![0; source.len()];

    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let old = values[index];
            let new = if old < 128 { 0 } else { 255 };
            result[index] = new as u8;

            let error = old - new;
            let share = |weight: i32| (error * weight).div_euclid(16);

            if x + 1 < width {
                values[index + 1] += share(7);
            }
            if y + 1 < height {
                let below = index + width;
                if x > 0 {
                    values[below - 1] += share(3);
                }
                values[below] += share(5);
                if x + 1 < width {
                    values[below + 1] += share(1);
                }
            }
        }
    }

    result
}

/// Same as [`reference()`] but with Rust's truncating division.
fn truncating_reference(source: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut values: Vec<i32> = source.iter().map(|&v| v as i32).collect();
    let mut result = vec![0; source.len()];

    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let old = values[index];
            let new = if old < 128 { 0 } else { 255 };
            result[index] = new as u8;

            let error = old - new;
            if x + 1 < width {
                values[index + 1] += error * 7 / 16;
            }
            if y + 1 < height {
                let below = index + width;
                if x > 0 {
                    values[below - 1] += error * 3 / 16;
                }
                values[below] += error * 5 / 16;
                if x + 1 < width {
                    values[below + 1] += error / 16;
                }
            }
        }
    }

    result
}

#[test]
fn test_matches_reference_random() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..500 {
        let width = rng.random_range(1..=32);
        let height = rng.random_range(1..=32);
        let source: Vec<u8> =
            (0..width * height).map(|_| rng.random::<u8>()).collect();

        assert_eq!(
            dither(&source, width, height).unwrap(),
            reference(&source, width, height),
            "{width}x{height} raster {source:?}"
        );
    }
}

#[test]
fn test_matches_reference_gradients() {
    let shapes: [(usize, usize); 5] =
        [(1, 1), (1, 64), (64, 1), (33, 17), (256, 8)];

    for (width, height) in shapes {
        let source: Vec<u8> = (0..width * height)
            .map(|i| ((i % width) * 255 / (width.max(2) - 1)) as u8)
            .collect();

        assert_eq!(
            dither(&source, width, height).unwrap(),
            reference(&source, width, height),
            "{width}x{height}"
        );
    }
}

#[test]
fn test_matches_reference_flat() {
    for level in [0u8, 1, 64, 127, 128, 129, 191, 254, 255] {
        let source = vec![level; 40 * 30];

        assert_eq!(
            dither(&source, 40, 30).unwrap(),
            reference(&source, 40, 30),
            "level {level}"
        );
    }
}

#[test]
fn test_diverges_from_truncating_division() {
    // Rounding direction is observable in the output.
    let source = [130, 182];

    assert_eq!(floor_div(-875, 16), -55);
    assert_eq!(-875 / 16, -54);

    assert_eq!(dither(&source, 2, 1).unwrap(), reference(&source, 2, 1));
    assert_ne!(
        dither(&source, 2, 1).unwrap(),
        truncating_reference(&source, 2, 1)
    );
}
