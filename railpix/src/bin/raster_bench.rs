use railpix::{expand_band, rasterize_bezier, CurveSpec, Tangent, Vec2};
use std::time::Instant;

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let mut curves = 2000usize;
    let mut span = 400.0f64;
    let mut width = 3u32;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--curves=") {
            if let Ok(v) = val.parse() {
                curves = v;
            }
        } else if let Some(val) = a.strip_prefix("--span=") {
            if let Ok(v) = val.parse() {
                span = v;
            }
        } else if let Some(val) = a.strip_prefix("--width=") {
            if let Ok(v) = val.parse() {
                width = v;
            }
        } else if let Some(val) = a.strip_prefix("--assert-ms=") {
            if let Ok(v) = val.parse() {
                assert_ms = Some(v);
            }
        }
    }

    // Simple LCG keeps runs reproducible
    let mut seed: u64 = 0x5EED_CAFE_F00D_D00D;
    let mut rnd = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((seed >> 11) as f64) / ((1u64 << 53) as f64)
    };

    let mut times_ms: Vec<f64> = Vec::with_capacity(curves);
    let mut total_cells = 0usize;
    let start_all = Instant::now();
    for _ in 0..curves {
        let spec = CurveSpec::bezier(
            Vec2::new(rnd() * span, rnd() * span),
            Vec2::new(rnd() * span, rnd() * span),
            Tangent::Slope((rnd() - 0.5) * 8.0),
            Tangent::Slope((rnd() - 0.5) * 8.0),
        );
        let t0 = Instant::now();
        let cells = rasterize_bezier(&spec).and_then(|r| expand_band(&r.path, width));
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
        match cells {
            Ok(c) => total_cells += c.len(),
            Err(e) => eprintln!("curve rejected: {}", e),
        }
    }
    let total_ms = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let p50 = percentile(&times_ms, 0.50);
    let p95 = percentile(&times_ms, 0.95);
    println!(
        "curves={} span={} width={} cells={} total={:.2}ms p50={:.4}ms p95={:.4}ms",
        curves, span, width, total_cells, total_ms, p50, p95
    );
    if let Some(limit) = assert_ms {
        if p95 > limit {
            eprintln!("p95 {:.4}ms exceeds limit {:.4}ms", p95, limit);
            std::process::exit(1);
        }
    }
}
