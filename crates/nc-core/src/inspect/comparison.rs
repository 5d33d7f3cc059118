use serde::{Deserialize, Serialize};

use super::visuals::{ImageRef, LayerKind, VisualLayers};

pub const LAYERS_UNAVAILABLE_WARNING: &str =
    "Forensic layers are unavailable; showing the original image only.";
pub const REFERENCE_UNAVAILABLE_WARNING: &str =
    "Reference note is unavailable; showing the original image only.";

/// Horizontal before/after slider over a container of fixed width.
///
/// The overlay covers `[0, position]`; the handle is centred on `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSlider {
    width: f64,
    handle_width: f64,
    position: f64,
}

impl ComparisonSlider {
    /// Starts centred.
    pub fn new(width: f64, handle_width: f64) -> Self {
        let width = width.max(0.0);
        Self {
            width,
            handle_width: handle_width.max(0.0),
            position: width / 2.0,
        }
    }

    /// Move to `x`, clamped into `[0, width]`.
    pub fn slide_to(&mut self, x: f64) {
        self.position = if x.is_nan() { 0.0 } else { x.clamp(0.0, self.width) };
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn overlay_width(&self) -> f64 {
        self.position
    }

    pub fn handle_left(&self) -> f64 {
        self.position - self.handle_width / 2.0
    }

    /// Share of the container covered by the overlay, 0..=1.
    pub fn ratio(&self) -> f64 {
        if self.width == 0.0 {
            0.0
        } else {
            self.position / self.width
        }
    }
}

/// What to lay over the original image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "layer")]
pub enum OverlaySource {
    Reference,
    Layer(LayerKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub original: ImageRef,
    pub overlay: ImageRef,
    /// `None` when the requested overlay was unavailable and the original is
    /// shown on both sides.
    pub overlay_source: Option<OverlaySource>,
    pub warning: Option<String>,
    pub slider: ComparisonSlider,
}

impl ComparisonView {
    /// Pick the overlay, falling back to the original with a warning.
    pub fn build(
        original: ImageRef,
        requested: OverlaySource,
        layers: Option<&VisualLayers>,
        reference: Option<&ImageRef>,
        slider: ComparisonSlider,
    ) -> Self {
        let (overlay, warning) = match requested {
            OverlaySource::Reference => match reference {
                Some(image) => (Some(image.clone()), None),
                None => (None, Some(REFERENCE_UNAVAILABLE_WARNING)),
            },
            OverlaySource::Layer(kind) => match layers.and_then(|l| l.get(kind)) {
                Some(image) => (Some(image.clone()), None),
                None => (None, Some(LAYERS_UNAVAILABLE_WARNING)),
            },
        };

        match overlay {
            Some(overlay) => Self {
                original,
                overlay,
                overlay_source: Some(requested),
                warning: None,
                slider,
            },
            None => Self {
                overlay: original.clone(),
                original,
                overlay_source: None,
                warning: warning.map(str::to_string),
                slider,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(tag: &str) -> ImageRef {
        ImageRef(format!("data:image/jpeg;base64,{tag}"))
    }

    #[test]
    fn slider_starts_centred_and_clamps() {
        let mut slider = ComparisonSlider::new(400.0, 40.0);
        assert_eq!(slider.position(), 200.0);
        assert_eq!(slider.handle_left(), 180.0);

        slider.slide_to(-15.0);
        assert_eq!(slider.overlay_width(), 0.0);

        slider.slide_to(900.0);
        assert_eq!(slider.overlay_width(), 400.0);
        assert_eq!(slider.ratio(), 1.0);

        slider.slide_to(f64::NAN);
        assert_eq!(slider.position(), 0.0);
    }

    #[test]
    fn zero_width_slider_has_zero_ratio() {
        let slider = ComparisonSlider::new(0.0, 10.0);
        assert_eq!(slider.ratio(), 0.0);
    }

    #[test]
    fn uses_requested_layer_when_present() {
        let layers = VisualLayers {
            heatmap: Some(img("HEAT")),
            ..Default::default()
        };
        let view = ComparisonView::build(
            img("ORIG"),
            OverlaySource::Layer(LayerKind::Heatmap),
            Some(&layers),
            None,
            ComparisonSlider::new(100.0, 10.0),
        );
        assert_eq!(view.overlay, img("HEAT"));
        assert_eq!(view.overlay_source, Some(OverlaySource::Layer(LayerKind::Heatmap)));
        assert!(view.warning.is_none());
    }

    #[test]
    fn missing_layers_degrade_to_original_with_warning() {
        let view = ComparisonView::build(
            img("ORIG"),
            OverlaySource::Layer(LayerKind::Edges),
            None,
            None,
            ComparisonSlider::new(100.0, 10.0),
        );
        assert_eq!(view.overlay, img("ORIG"));
        assert_eq!(view.overlay_source, None);
        assert_eq!(view.warning.as_deref(), Some(LAYERS_UNAVAILABLE_WARNING));
    }

    #[test]
    fn reference_overlay_falls_back_when_missing() {
        let view = ComparisonView::build(
            img("ORIG"),
            OverlaySource::Reference,
            None,
            None,
            ComparisonSlider::new(100.0, 10.0),
        );
        assert_eq!(view.warning.as_deref(), Some(REFERENCE_UNAVAILABLE_WARNING));

        let view = ComparisonView::build(
            img("ORIG"),
            OverlaySource::Reference,
            None,
            Some(&img("REF")),
            ComparisonSlider::new(100.0, 10.0),
        );
        assert_eq!(view.overlay, img("REF"));
    }
}
