//! Comparison and report models for the most recent result.

mod comparison;
mod report;
mod visuals;

pub use comparison::{
    ComparisonSlider, ComparisonView, OverlaySource, LAYERS_UNAVAILABLE_WARNING,
    REFERENCE_UNAVAILABLE_WARNING,
};
pub use report::ScanReport;
pub use visuals::{DecodedImage, ImageRef, LayerKind, VisualLayers};
