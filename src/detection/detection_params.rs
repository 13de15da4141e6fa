use opencv::core::Size;

use crate::config::Config;

/// Arguments forwarded to the multi-scale cascade scan.
///
/// Defaults are the `OpenCV` defaults for `detectMultiScale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    /// Image pyramid step between scans, > 1.
    pub scale_factor: f64,
    /// Neighbor rectangles required to keep a candidate.
    pub min_neighbors: i32,
    /// Smallest face size considered; `0x0` means no limit.
    pub min_size: Size,
    /// Largest face size considered; `0x0` means no limit.
    pub max_size: Size,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 3,
            min_size: Size::new(0, 0),
            max_size: Size::new(0, 0),
        }
    }
}

impl DetectionParams {
    /// Reads `[Detection] scale_factor`, `min_neighbors`, `min_size`,
    /// `max_size`. Out-of-range values keep the default.
    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        let defaults = Self::default();
        let scale_factor = cfg.get_parsed_or("Detection", "scale_factor", defaults.scale_factor);
        let min_neighbors = cfg.get_parsed_or("Detection", "min_neighbors", defaults.min_neighbors);

        Self {
            scale_factor: if scale_factor > 1.0 {
                scale_factor
            } else {
                defaults.scale_factor
            },
            min_neighbors: min_neighbors.max(0),
            min_size: size_from_config(cfg, "min_size").unwrap_or(defaults.min_size),
            max_size: size_from_config(cfg, "max_size").unwrap_or(defaults.max_size),
        }
    }
}

fn size_from_config(cfg: &Config, key: &str) -> Option<Size> {
    match cfg.get_list::<i32>("Detection", key)?.as_slice() {
        [w, h] if *w >= 0 && *h >= 0 => Some(Size::new(*w, *h)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gives_opencv_defaults() {
        assert_eq!(DetectionParams::from_config(&Config::empty()), DetectionParams::default());
    }

    #[test]
    fn reads_overrides_and_rejects_bad_values() {
        let cfg = Config::parse(
            "[Detection]\nscale_factor = 0.9\nmin_neighbors = 6\nmin_size = 24,24\nmax_size = -1,5\n",
        );
        let p = DetectionParams::from_config(&cfg);
        assert!((p.scale_factor - 1.1).abs() < f64::EPSILON);
        assert_eq!(p.min_neighbors, 6);
        assert_eq!(p.min_size, Size::new(24, 24));
        assert_eq!(p.max_size, Size::new(0, 0));
    }
}
