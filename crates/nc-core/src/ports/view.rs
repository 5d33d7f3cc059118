use crate::view::ViewEvent;

/// Rendering surface. Called synchronously; implementations must not block.
pub trait ScanViewPort: Send + Sync {
    fn render(&self, event: ViewEvent);
}
