#[cfg(feature = "rayon")]
mod rayon_tests {
    use fsdither::*;
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    fn random_rasters(seed: u64, count: usize) -> Vec<GrayRaster> {
        let mut rng = SmallRng::seed_from_u64(seed);

        (0..count)
            .map(|_| {
                let width = rng.random_range(1..=64);
                let height = rng.random_range(1..=64);
                let pixels =
                    (0..width * height).map(|_| rng.random::<u8>()).collect();
                GrayRaster::new(pixels, width, height).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_rayon_matches_sequential() {
        let sources = random_rasters(42, 64);

        let sequential: Vec<GrayRaster> =
            sources.iter().map(GrayRaster::dithered).collect();

        let mut parallel = sources;
        dither_all(&mut parallel);

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_rayon_deterministic_results() {
        let mut first = random_rasters(123, 32);
        let mut second = first.clone();

        dither_all(&mut first);
        dither_all(&mut second);

        assert_eq!(
            first, second,
            "Results should be deterministic for identical input"
        );
    }

    #[test]
    fn test_rayon_large_batch() {
        let mut rasters: Vec<GrayRaster> = (0..256)
            .map(|i| GrayRaster::new(vec![i as u8; 32 * 16], 32, 16).unwrap())
            .collect();

        dither_all(&mut rasters);

        for raster in &rasters {
            assert_eq!((raster.width(), raster.height()), (32, 16));
            assert!(raster.pixels().iter().all(|&v| v == BLACK || v == WHITE));
        }
        // Flat black and flat white stay flat.
        assert!(rasters[0].pixels().iter().all(|&v| v == BLACK));
        assert!(rasters[255].pixels().iter().all(|&v| v == WHITE));
    }

    #[test]
    fn test_rayon_empty_batch() {
        let mut rasters: Vec<GrayRaster> = Vec::new();
        dither_all(&mut rasters);
        assert!(rasters.is_empty());
    }
}
