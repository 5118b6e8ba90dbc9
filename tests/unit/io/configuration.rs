//! Tests for configuration defaults, JSON persistence and request building

#[cfg(test)]
mod tests {
    use sheetmix::MixerError;
    use sheetmix::io::configuration::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_CELL_SIZE, DEFAULT_CONFIG_FILE,
        DEFAULT_IMAGES_PER_ROW, DEFAULT_OUTPUT, MixerConfig, PAGE_SUFFIX,
    };
    use sheetmix::layout::Dimensions;
    use sheetmix::sampling::{DrawRule, Rarity, Variant};

    // Tests canvas defaults match DIN A4 at 300 DPI
    // Verified by changing canvas width
    #[test]
    fn test_a4_defaults() {
        assert_eq!(DEFAULT_CANVAS_WIDTH, 2480);
        assert_eq!(DEFAULT_CANVAS_HEIGHT, 3508);
        assert_eq!(DEFAULT_CELL_SIZE, 500);
        assert_eq!(DEFAULT_IMAGES_PER_ROW, 6);
    }

    // Tests output names are filesystem-safe PNG names
    // Verified by adding special character to the suffix
    #[test]
    fn test_output_names() {
        assert!(DEFAULT_OUTPUT.ends_with(".png"));
        assert!(DEFAULT_CONFIG_FILE.ends_with(".json"));
        assert!(PAGE_SUFFIX.starts_with('_'));
        for ch in PAGE_SUFFIX.chars() {
            assert!(ch.is_alphanumeric() || ch == '_');
        }
    }

    // Tests save then load returns the same configuration
    // Verified by skipping a field during serialization
    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mixer.json");

        let config = MixerConfig {
            a_common: 60.0,
            b_special: 15.0,
            total_images: Some(120),
            duplex: true,
            max_pages: Some(3),
            ..MixerConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(MixerConfig::load(&path).unwrap(), config);
    }

    // Tests missing keys fall back to defaults and integers parse as weights
    // Verified by removing serde default attribute
    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "a_common": 60, "b_special": 20 }"#).unwrap();

        let config = MixerConfig::load(&path).unwrap();
        assert!((config.a_common - 60.0).abs() < f64::EPSILON);
        assert!((config.b_special - 20.0).abs() < f64::EPSILON);
        assert!((config.a_uncommon - 25.0).abs() < f64::EPSILON);
        assert_eq!(config.canvas_width, DEFAULT_CANVAS_WIDTH);
        assert!(!config.duplex);
    }

    // Tests malformed and missing files produce distinct errors
    // Verified by mapping parse errors to FileSystem
    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();

        assert!(matches!(
            MixerConfig::load(&broken),
            Err(MixerError::ConfigFormat { .. })
        ));
        assert!(matches!(
            MixerConfig::load(&dir.path().join("absent.json")),
            Err(MixerError::FileSystem { .. })
        ));
    }

    // Tests the typed request carries every configured value
    // Verified by swapping B-type weights
    #[test]
    fn test_request_from_config() {
        let config = MixerConfig {
            b_normal: 80.0,
            b_special: 20.0,
            canvas_width: 1200,
            images_per_row: 4,
            duplex: true,
            ..MixerConfig::default()
        };
        let request = config.request();

        assert_eq!(request.canvas, Dimensions::new(1200, DEFAULT_CANVAS_HEIGHT));
        assert_eq!(request.cell, Dimensions::square(DEFAULT_CELL_SIZE));
        assert_eq!(request.columns, 4);
        assert!(request.duplex);
        assert_eq!(request.variant_weights.rule(), DrawRule::Bernoulli);
        assert_eq!(
            request.variant_weights.entries(),
            &[(Variant::Special, 20.0), (Variant::Normal, 80.0)]
        );
        assert_eq!(request.rarity_weights, Rarity::weights(70.0, 25.0, 5.0));
    }
}
