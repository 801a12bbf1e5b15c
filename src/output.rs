// src/output.rs
use crate::error::WalkResult;
use crate::path::Path;
use serde::Serialize;
use std::path::Path as FsPath;
use tracing::info;

#[derive(Serialize)]
struct PointRecord {
    time: usize,
    value: f64,
}

/// Write `time,value` rows, one per grid point, with a header line.
pub fn write_path_to_csv<P: AsRef<FsPath>>(filename: P, path: &Path) -> WalkResult<()> {
    let filename = filename.as_ref();
    let mut writer = csv::Writer::from_path(filename)?;
    for (time, value) in path.points() {
        writer.serialize(PointRecord { time, value })?;
    }
    writer.flush()?;
    info!(file = %filename.display(), points = path.len(), "wrote path csv");
    Ok(())
}

/// Write `key,value` rows without a header.
pub fn write_summary_to_csv<P: AsRef<FsPath>>(filename: P, summary_data: &[(&str, String)]) -> WalkResult<()> {
    let filename = filename.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(filename)?;
    for (key, value) in summary_data {
        writer.write_record([*key, value.as_str()])?;
    }
    writer.flush()?;
    info!(file = %filename.display(), rows = summary_data.len(), "wrote summary csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wiener_walk_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_path_csv_layout() {
        let file = temp_file("path.csv");
        let path = Path::from_increments(0.0, &[0.5, -0.25]);

        write_path_to_csv(&file, &path).unwrap();
        let text = std::fs::read_to_string(&file).unwrap();
        std::fs::remove_file(&file).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["time,value", "0,0.0", "1,0.5", "2,0.25"]);
    }

    #[test]
    fn test_summary_csv_has_no_header() {
        let file = temp_file("summary.csv");
        let rows = [("dt", "0.1".to_string()), ("steps", "3".to_string())];

        write_summary_to_csv(&file, &rows).unwrap();
        let text = std::fs::read_to_string(&file).unwrap();
        std::fs::remove_file(&file).ok();

        assert_eq!(text, "dt,0.1\nsteps,3\n");
    }
}
