use proptest::prelude::*;
use railpix::algorithms::connectivity::enforce_4connectivity;
use railpix::{
    expand_band, generate_quarter_circle, rasterize_bezier, rasterize_line, Cell, CurveSpec,
    Tangent, Vec2,
};

fn tangent_strategy() -> impl Strategy<Value = Tangent> {
    prop_oneof![
        4 => (-20.0f64..20.0).prop_map(Tangent::Slope),
        1 => Just(Tangent::Vertical),
    ]
}

fn point_strategy() -> impl Strategy<Value = Vec2> {
    (-300.0f64..300.0, -300.0f64..300.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn spec_strategy() -> impl Strategy<Value = CurveSpec> {
    (
        point_strategy(),
        point_strategy(),
        tangent_strategy(),
        tangent_strategy(),
        0.5f64..8.0,
        0.25f64..4.0,
    )
        .prop_map(|(a, b, t0, t1, curvature, density)| {
            CurveSpec::bezier(a, b, t0, t1)
                .with_curvature(curvature)
                .with_samples_per_unit(density)
        })
}

fn assert_four_connected(cells: &[Cell]) {
    for w in cells.windows(2) {
        assert!(
            w[0].is_four_adjacent(w[1]),
            "not 4-adjacent: {:?} -> {:?}",
            w[0],
            w[1]
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn enforcer_output_is_four_connected(raw in prop::collection::vec((-50i32..50, -50i32..50), 0..40)) {
        let waypoints: Vec<Cell> = raw.into_iter().map(Cell::from).collect();
        let out = enforce_4connectivity(&waypoints);
        prop_assert_eq!(out.is_empty(), waypoints.is_empty());
        assert_four_connected(&out);
        if let (Some(first), Some(last)) = (waypoints.first(), waypoints.last()) {
            prop_assert_eq!(out[0], *first);
            prop_assert_eq!(out[out.len() - 1], *last);
        }
    }

    #[test]
    fn bezier_paths_are_four_connected_and_deterministic(spec in spec_strategy()) {
        let a = rasterize_bezier(&spec).unwrap();
        let b = rasterize_bezier(&spec).unwrap();
        assert_four_connected(a.path.cells());
        prop_assert_eq!(a.path.first(), spec.start.to_cell());
        prop_assert_eq!(&a.path, &b.path);
        prop_assert_eq!(&a.samples, &b.samples);
    }

    #[test]
    fn line_paths_connect_endpoints(a in point_strategy(), b in point_strategy()) {
        let path = rasterize_line(a, b, 1.0).unwrap();
        assert_four_connected(path.cells());
        prop_assert_eq!(path.first(), a.to_cell());
        prop_assert_eq!(path.last(), b.to_cell());
    }

    #[test]
    fn width_one_band_is_identity(spec in spec_strategy()) {
        let r = rasterize_bezier(&spec).unwrap();
        prop_assert_eq!(expand_band(&r.path, 1).unwrap(), r.path.to_cell_set());
    }

    #[test]
    fn wider_bands_cover_narrower(spec in spec_strategy(), w in 1u32..8) {
        let r = rasterize_bezier(&spec).unwrap();
        let narrow = expand_band(&r.path, w).unwrap();
        let wide = expand_band(&r.path, w + 2).unwrap();
        for c in &narrow {
            prop_assert!(wide.contains(c));
        }
    }

    #[test]
    fn quarter_circle_is_symmetric(r in 0i64..400) {
        let q = generate_quarter_circle(r).unwrap();
        for c in &q.boundary {
            prop_assert!(q.boundary.contains(&c.transposed()));
        }
        let total: u32 = q.segments.iter().sum();
        prop_assert_eq!(total as usize, 2 * q.octant.len());
        let run_total: u32 = q.runs.iter().sum();
        prop_assert_eq!(run_total as usize, q.octant.len());
        let reversed: Vec<u32> = q.segments.iter().rev().copied().collect();
        prop_assert_eq!(&reversed, &q.segments);
    }
}
