//! Tests for PNG loading, format checks and cell size normalization

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use sheetmix::MixerError;
    use sheetmix::io::assets::{AssetLoader, AssetPaths};
    use sheetmix::layout::Dimensions;
    use sheetmix::sampling::{Rarity, Variant};
    use std::path::{Path, PathBuf};

    fn write_png(dir: &Path, name: &str, side: u32, color: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(side, side, Rgb(color))
            .save(&path)
            .unwrap();
        path
    }

    // Tests a correctly sized PNG loads unchanged
    // Verified by resizing every image regardless of size
    #[test]
    fn test_load_exact_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "common.png", 8, [10, 20, 30]);

        let asset = AssetLoader::new(Dimensions::square(8))
            .load(&path, "common")
            .unwrap();

        assert_eq!(asset.label(), "common");
        assert_eq!(asset.dimensions(), Dimensions::square(8));
        assert_eq!(asset.image().get_pixel(3, 3).0, [10, 20, 30]);
    }

    // Tests mismatched images are stretched to the cell size
    // Verified by preserving aspect ratio during resize
    #[test]
    fn test_mismatched_size_resized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbImage::from_pixel(30, 10, Rgb([200, 0, 0]))
            .save(&path)
            .unwrap();

        let asset = AssetLoader::new(Dimensions::square(12))
            .load(&path, "wide")
            .unwrap();

        assert_eq!(asset.dimensions(), Dimensions::square(12));
        let [r, g, b] = asset.image().get_pixel(6, 6).0;
        assert!(r > 190 && g < 10 && b < 10);
    }

    // Tests strict mode rejects mismatched images with both sizes
    // Verified by resizing in strict mode
    #[test]
    fn test_strict_size_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "small.png", 4, [0, 0, 0]);

        let result = AssetLoader::new(Dimensions::square(8))
            .strict(true)
            .load(&path, "small");

        assert!(matches!(
            result,
            Err(MixerError::AssetSizeMismatch {
                expected: (8, 8),
                actual: (4, 4),
                ..
            })
        ));
    }

    // Tests non-PNG content is rejected by its detected format
    // Verified by trusting the file extension
    #[test]
    fn test_non_png_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legendary.bmp");
        RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();

        let result = AssetLoader::new(Dimensions::square(8)).load(&path, "legendary");

        match result {
            Err(MixerError::UnsupportedFormat { format, .. }) => assert_eq!(format, "Bmp"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    // Tests missing and corrupt files map to distinct errors
    // Verified by reporting decode failures as file system errors
    #[test]
    fn test_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(Dimensions::square(8));

        let missing = loader.load(&dir.path().join("absent.png"), "absent");
        assert!(matches!(missing, Err(MixerError::FileSystem { .. })));

        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"not really a png").unwrap();
        assert!(matches!(
            loader.load(&corrupt, "corrupt"),
            Err(MixerError::ImageLoad { .. })
        ));
    }

    // Tests the five paths load into the matching slots of the set
    // Verified by swapping the normal and special paths
    #[test]
    fn test_load_set_labels() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AssetPaths {
            common: write_png(dir.path(), "c.png", 6, [255, 0, 0]),
            uncommon: write_png(dir.path(), "u.png", 6, [0, 255, 0]),
            legendary: write_png(dir.path(), "l.png", 6, [0, 0, 255]),
            normal: write_png(dir.path(), "n.png", 6, [0, 0, 0]),
            special: write_png(dir.path(), "s.png", 6, [255, 255, 0]),
        };

        let set = AssetLoader::new(Dimensions::square(6))
            .load_set(&paths)
            .unwrap();

        assert_eq!(set.rarity(Rarity::Legendary).label(), "legendary");
        assert_eq!(set.rarity(Rarity::Legendary).image().get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(set.variant(Variant::Special).label(), "special");
        assert_eq!(set.variant(Variant::Special).image().get_pixel(0, 0).0, [255, 255, 0]);
        assert_eq!(set.variant(Variant::Normal).image().get_pixel(0, 0).0, [0, 0, 0]);
    }
}
