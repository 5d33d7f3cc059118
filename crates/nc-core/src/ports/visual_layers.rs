use async_trait::async_trait;

use crate::inspect::VisualLayers;
use crate::ports::errors::TransportError;

#[async_trait]
pub trait VisualLayersPort: Send + Sync {
    /// Forensic overlays for an image the server already holds, addressed by
    /// the filename it returned from classification.
    async fn analyze_visuals(&self, server_filename: &str) -> Result<VisualLayers, TransportError>;
}
