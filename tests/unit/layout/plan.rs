//! Tests for layout planning including scale derivation and degenerate inputs

#[cfg(test)]
mod tests {
    use sheetmix::MixerError;
    use sheetmix::layout::plan::{Dimensions, LayoutPlan, plan};

    // Tests the A4 reference layout from 500px cells at 6 per row
    // Verified by fitting height independently of width
    #[test]
    fn test_a4_reference_layout() {
        let layout = plan(2480, 3508, 500, 500, 6).unwrap();

        assert_eq!(layout.cell(), Dimensions::square(413));
        assert_eq!(layout.columns(), 6);
        assert_eq!(layout.rows(), 8);
        assert_eq!(layout.slots_per_page(), 48);
        assert_eq!(layout.canvas(), Dimensions::new(2480, 3508));

        let factor = layout.scale_factor(Dimensions::square(500));
        assert!((factor - 2480.0 / 3000.0).abs() < 1e-12);
    }

    // Tests that non-square cells scale height by the width-derived factor
    // Verified by computing a separate height scale factor
    #[test]
    fn test_uniform_scaling_for_rectangular_cells() {
        // factor = 600 / (3 * 100) = 2.0
        let layout = plan(600, 1000, 100, 150, 3).unwrap();

        assert_eq!(layout.cell(), Dimensions::new(200, 300));
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.slots_per_page(), 9);
    }

    // Tests slot count invariant across a range of inputs
    // Verified by using ceiling division for rows
    #[test]
    fn test_slots_equal_columns_times_rows() {
        for (canvas_w, canvas_h, cell, columns) in [
            (2480, 3508, 500, 6),
            (1000, 1000, 100, 7),
            (800, 333, 50, 4),
            (3508, 2480, 500, 9),
        ] {
            let layout = plan(canvas_w, canvas_h, cell, cell, columns).unwrap();
            let height = layout.cell().height;

            assert!(height > 0);
            assert_eq!(
                layout.slots_per_page(),
                columns as usize * (canvas_h / height) as usize
            );
        }
    }

    // Tests that floor is exact where float rounding could drift
    // Verified by replacing integer arithmetic with f64 multiplication
    #[test]
    fn test_exact_integer_scaling() {
        let layout = plan(2400, 3000, 500, 500, 6).unwrap();
        assert_eq!(layout.cell(), Dimensions::square(400));
        assert_eq!(layout.rows(), 7);
    }

    // Tests zero columns is rejected
    // Verified by removing the columns guard
    #[test]
    fn test_zero_columns_rejected() {
        let result = plan(2480, 3508, 500, 500, 0);
        assert!(matches!(
            result,
            Err(MixerError::InvalidConfiguration {
                parameter: "images_per_row",
                ..
            })
        ));
    }

    // Tests zero canvas and cell dimensions are rejected
    // Verified by removing the dimension guards
    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            plan(0, 3508, 500, 500, 6),
            Err(MixerError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            plan(2480, 0, 500, 500, 6),
            Err(MixerError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            plan(2480, 3508, 0, 500, 6),
            Err(MixerError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            plan(2480, 3508, 500, 0, 6),
            Err(MixerError::InvalidConfiguration { .. })
        ));
    }

    // Tests extreme aspect ratio flooring cell height to zero
    // Verified by dividing canvas height by the zero cell height
    #[test]
    fn test_zero_scaled_height_rejected() {
        // factor = 100 / (10 * 1000) = 0.01, height 50 * 0.01 floors to 0
        let result = plan(100, 100, 1000, 50, 10);
        assert!(matches!(
            result,
            Err(MixerError::InvalidConfiguration {
                parameter: "cell_size",
                ..
            })
        ));
    }

    // Tests canvas shorter than one scaled cell
    // Verified by accepting plans with zero rows
    #[test]
    fn test_canvas_shorter_than_cell_rejected() {
        let result = plan(600, 100, 100, 100, 3);
        assert!(matches!(
            result,
            Err(MixerError::InvalidConfiguration {
                parameter: "canvas_height",
                ..
            })
        ));
    }

    // Tests row-major slot origins and the capacity bound
    // Verified by swapping row and column in the origin calculation
    #[test]
    fn test_slot_origin_row_major() {
        let layout =
            LayoutPlan::compute(Dimensions::new(60, 40), Dimensions::square(10), 3).unwrap();

        assert_eq!(layout.slot_origin(0), Some((0, 0)));
        assert_eq!(layout.slot_origin(2), Some((40, 0)));
        assert_eq!(layout.slot_origin(3), Some((0, 20)));
        assert_eq!(layout.slot_origin(5), Some((40, 20)));
        assert_eq!(layout.slot_origin(6), None);
    }
}
