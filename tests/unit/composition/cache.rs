//! Tests for resample memoization including hit/miss tracking and key identity

#[cfg(test)]
mod tests {
    use crate::solid_asset;
    use sheetmix::composition::cache::{ResampleCache, ResampleKey, resample};
    use sheetmix::layout::Dimensions;

    // Verifies new cache starts empty with 0 hits and 0 misses
    // Verified by initializing cache with non-zero counts
    #[test]
    fn test_cache_new() {
        let cache = ResampleCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats.hits, 0);
        assert_eq!(cache.stats.misses, 0);
    }

    // Tests cache miss on first access and hit on second
    // Verified by removing hit counter increment logic
    #[test]
    fn test_cache_miss_then_hit() {
        let mut cache = ResampleCache::new();
        let asset = solid_asset("common", [200, 10, 10], 10);
        let target = Dimensions::new(7, 5);

        let first = cache.get_or_resample(&asset, target).clone();
        assert_eq!(cache.stats.misses, 1);
        assert_eq!(cache.stats.hits, 0);

        let second = cache.get_or_resample(&asset, target).clone();
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(first, second);
        assert_eq!(first.dimensions(), (7, 5));
        assert_eq!(cache.len(), 1);
    }

    // Tests cached output equals a fresh resample
    // Verified by caching the unscaled source bitmap
    #[test]
    fn test_cached_matches_uncached() {
        let mut cache = ResampleCache::new();
        let asset = solid_asset("legendary", [0, 0, 255], 30);
        let target = Dimensions::square(13);

        let fresh = resample(&asset, target);
        assert_eq!(cache.get_or_resample(&asset, target), &fresh);
    }

    // Tests distinct targets and assets get distinct keys
    // Verified by ignoring the target size in the key
    #[test]
    fn test_key_identity() {
        let common = solid_asset("common", [1, 1, 1], 10);
        let special = solid_asset("special", [1, 1, 1], 10);

        let key = ResampleKey::new(&common, Dimensions::square(5));
        assert_eq!(key, ResampleKey::new(&common, Dimensions::square(5)));
        assert_ne!(key, ResampleKey::new(&common, Dimensions::square(6)));
        assert_ne!(key, ResampleKey::new(&special, Dimensions::square(5)));

        let mut cache = ResampleCache::new();
        cache.get_or_resample(&common, Dimensions::square(5));
        cache.get_or_resample(&common, Dimensions::square(6));
        cache.get_or_resample(&special, Dimensions::square(5));
        assert_eq!(cache.stats.misses, 3);
        assert_eq!(cache.len(), 3);
    }

    // Tests assets sharing a label but not pixels get separate resamples
    // Verified by keying the cache on the asset label
    #[test]
    fn test_same_label_distinct_assets() {
        let red = solid_asset("x", [255, 0, 0], 10);
        let blue = solid_asset("x", [0, 0, 255], 10);
        let target = Dimensions::square(4);

        assert_ne!(ResampleKey::new(&red, target), ResampleKey::new(&blue, target));
        assert_eq!(
            ResampleKey::new(&red, target),
            ResampleKey::new(&red.clone(), target)
        );

        let mut cache = ResampleCache::new();
        assert_eq!(cache.get_or_resample(&red, target).get_pixel(1, 1).0, [255, 0, 0]);
        assert_eq!(cache.get_or_resample(&blue, target).get_pixel(1, 1).0, [0, 0, 255]);
        assert_eq!(cache.stats.misses, 2);
    }
}
