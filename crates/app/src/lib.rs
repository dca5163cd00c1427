pub mod app_loop;
pub mod record_file;
pub mod seed;
pub mod theme;

pub const APP_NAME: &str = "FingerMaze";

/// Meters of descent shown per depth level.
pub const METERS_PER_DEPTH: u32 = 10;

/// Format a depth as the descent distance it represents, e.g. `70m`.
pub fn format_depth_meters(depth: u32) -> String {
    format!("{}m", depth * METERS_PER_DEPTH)
}

/// Format an elapsed duration as `m:ss`.
pub fn format_elapsed(elapsed_ms: f64) -> String {
    let total_seconds = (elapsed_ms / 1000.0).floor().max(0.0) as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_formats_as_meters() {
        assert_eq!(format_depth_meters(1), "10m");
        assert_eq!(format_depth_meters(7), "70m");
        assert_eq!(format_depth_meters(0), "0m");
    }

    #[test]
    fn elapsed_formats_as_minutes_and_seconds() {
        assert_eq!(format_elapsed(0.0), "0:00");
        assert_eq!(format_elapsed(999.0), "0:00");
        assert_eq!(format_elapsed(61_000.0), "1:01");
        assert_eq!(format_elapsed(754_321.0), "12:34");
        assert_eq!(format_elapsed(-5.0), "0:00");
    }
}
