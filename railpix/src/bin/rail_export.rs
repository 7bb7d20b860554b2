use railpix::export::write_coordinates;
use railpix::{design_track, generate_quarter_circle, request_from_json};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn usage() -> &'static str {
    "usage: rail_export --request=track.json [--elevation=<y>] [--out=coords.txt]\n       rail_export --circle=<radius> [--elevation=<y>] [--out=coords.txt]\n\n--elevation overrides the request's own elevation; circles default to 0"
}

fn run(args: &[String]) -> Result<(), String> {
    let mut request: Option<String> = None;
    let mut circle: Option<i64> = None;
    let mut out: Option<String> = None;
    let mut elevation: Option<i32> = None;
    for a in args {
        if let Some(val) = a.strip_prefix("--request=") {
            request = Some(val.to_string());
        } else if let Some(val) = a.strip_prefix("--circle=") {
            circle = Some(val.parse().map_err(|_| format!("bad radius '{}'", val))?);
        } else if let Some(val) = a.strip_prefix("--out=") {
            out = Some(val.to_string());
        } else if let Some(val) = a.strip_prefix("--elevation=") {
            elevation = Some(val.parse().map_err(|_| format!("bad elevation '{}'", val))?);
        } else {
            return Err(format!("unknown argument '{}'\n{}", a, usage()));
        }
    }

    let (cells, elevation) = match (request, circle) {
        (Some(path), None) => {
            let text = fs::read_to_string(&path).map_err(|e| format!("{}: {}", path, e))?;
            let req = request_from_json(&text).map_err(|e| e.to_string())?;
            let design = design_track(&req).map_err(|e| e.to_string())?;
            log::info!(
                "{}: {} segment(s), {} cells",
                path,
                design.segments.len(),
                design.cells.len()
            );
            (design.cells, elevation.unwrap_or(design.elevation))
        }
        (None, Some(r)) => {
            let q = generate_quarter_circle(r).map_err(|e| e.to_string())?;
            eprintln!("{}", q.summary());
            (q.boundary, elevation.unwrap_or(0))
        }
        _ => return Err(usage().to_string()),
    };

    let written = match out {
        Some(path) => {
            let f = File::create(&path).map_err(|e| format!("{}: {}", path, e))?;
            write_coordinates(BufWriter::new(f), &cells, elevation)
        }
        None => write_coordinates(io::stdout().lock(), &cells, elevation),
    };
    written.map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{}", msg);
            ExitCode::FAILURE
        }
    }
}
