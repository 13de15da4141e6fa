use std::path::Path;

use opencv::{
    core::{Mat, Rect, Vector},
    objdetect::CascadeClassifier,
    prelude::*,
};

use super::{
    detection_error::DetectionError, detection_params::DetectionParams,
    face_detector::FaceDetector,
};

/// Haar/LBP cascade classifier loaded from an XML definition.
pub struct CascadeDetector {
    classifier: CascadeClassifier,
}

impl CascadeDetector {
    /// Loads the cascade at `path`.
    ///
    /// # Errors
    /// `DetectionError::ClassifierLoad` if the file is missing or is not a
    /// cascade definition.
    pub fn load(path: &Path) -> Result<Self, DetectionError> {
        let load_err = |reason: &str| DetectionError::ClassifierLoad {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let path_str = path.to_str().ok_or_else(|| load_err("path is not UTF-8"))?;
        if !path.is_file() {
            return Err(load_err("file not found"));
        }

        let classifier =
            CascadeClassifier::new(path_str).map_err(|e| load_err(&e.to_string()))?;
        if classifier.empty().map_err(|e| load_err(&e.to_string()))? {
            return Err(load_err("not a cascade definition"));
        }

        Ok(Self { classifier })
    }
}

impl FaceDetector for CascadeDetector {
    fn detect(
        &mut self,
        gray: &Mat,
        params: &DetectionParams,
        faces: &mut Vector<Rect>,
    ) -> opencv::Result<()> {
        self.classifier.detect_multi_scale(
            gray,
            faces,
            params.scale_factor,
            params.min_neighbors,
            0,
            params.min_size,
            params.max_size,
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn missing_file_is_a_load_error() {
        let path = Path::new("no/such/lbpcascade_frontalface.xml");
        match CascadeDetector::load(path) {
            Err(DetectionError::ClassifierLoad { path: p, reason }) => {
                assert_eq!(p, path);
                assert_eq!(reason, "file not found");
            }
            Ok(_) => panic!("load should fail"),
        }
    }

    #[test]
    fn non_cascade_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("facecap-bogus-{}.xml", std::process::id()));
        std::fs::write(&path, "<opencv_storage></opencv_storage>").unwrap();
        let result = CascadeDetector::load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(DetectionError::ClassifierLoad { .. })));
    }
}
