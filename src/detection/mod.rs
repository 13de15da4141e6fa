//! Face detection pipeline: grayscale preprocessing, cascade detection and
//! annotation of the captured frame.
pub mod annotation;
pub mod cascade_detector;
pub mod detection_error;
pub mod detection_params;
pub mod face_detector;
pub mod preprocess;

pub use annotation::AnnotationStyle;
pub use cascade_detector::CascadeDetector;
pub use detection_error::DetectionError;
pub use detection_params::DetectionParams;
pub use face_detector::FaceDetector;
pub use preprocess::Preprocessor;
