use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// An embeddable image reference, normally a `data:<mime>;base64,...` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

/// Bytes decoded from a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageRef {
    pub fn data_uri(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime_type};base64,{}", STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode a base64 `data:` URI. Plain URLs yield `None`.
    pub fn decode(&self) -> Option<DecodedImage> {
        let rest = self.0.strip_prefix("data:")?;
        let (meta, payload) = rest.split_once(',')?;
        let mime_type = meta.strip_suffix(";base64")?;
        let bytes = STANDARD.decode(payload.trim()).ok()?;
        Some(DecodedImage {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Edges,
    Heatmap,
    Noise,
    Contrast,
}

impl LayerKind {
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Edges,
        LayerKind::Heatmap,
        LayerKind::Noise,
        LayerKind::Contrast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Edges => "edges",
            LayerKind::Heatmap => "heatmap",
            LayerKind::Noise => "noise",
            LayerKind::Contrast => "contrast",
        }
    }
}

impl std::str::FromStr for LayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown layer `{s}`"))
    }
}

/// Server-derived forensic overlays for one scanned image.
///
/// 服务端生成的取证叠加图层。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualLayers {
    #[serde(default)]
    pub edges: Option<ImageRef>,
    #[serde(default)]
    pub heatmap: Option<ImageRef>,
    #[serde(default)]
    pub noise: Option<ImageRef>,
    #[serde(default)]
    pub contrast: Option<ImageRef>,
}

impl VisualLayers {
    pub fn get(&self, kind: LayerKind) -> Option<&ImageRef> {
        match kind {
            LayerKind::Edges => self.edges.as_ref(),
            LayerKind::Heatmap => self.heatmap.as_ref(),
            LayerKind::Noise => self.noise.as_ref(),
            LayerKind::Contrast => self.contrast.as_ref(),
        }
    }

    pub fn available(&self) -> Vec<LayerKind> {
        LayerKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.available().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_decodes_back_to_bytes() {
        let image = ImageRef::data_uri("image/jpeg", &[0xff, 0xd8, 0xff]);
        assert!(image.as_str().starts_with("data:image/jpeg;base64,"));

        let decoded = image.decode().unwrap();
        assert_eq!(decoded.mime_type, "image/jpeg");
        assert_eq!(decoded.bytes, vec![0xff, 0xd8, 0xff]);
    }

    #[test]
    fn non_data_uri_does_not_decode() {
        assert!(ImageRef("https://example.test/a.jpg".into()).decode().is_none());
        assert!(ImageRef("data:image/png,rawpayload".into()).decode().is_none());
    }

    #[test]
    fn available_lists_present_layers_in_order() {
        let layers = VisualLayers {
            noise: Some(ImageRef("data:image/jpeg;base64,AA==".into())),
            edges: Some(ImageRef("data:image/jpeg;base64,AA==".into())),
            ..Default::default()
        };
        assert_eq!(layers.available(), vec![LayerKind::Edges, LayerKind::Noise]);
        assert!(VisualLayers::default().is_empty());
    }

    #[test]
    fn layer_kind_parses_case_insensitively() {
        assert_eq!("Heatmap".parse::<LayerKind>(), Ok(LayerKind::Heatmap));
        assert!("xray".parse::<LayerKind>().is_err());
    }
}
