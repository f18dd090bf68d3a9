//! Viewport capability injected into the engine.
//!
//! The engine never reads ambient global state; the host hands it a provider
//! that reports the current content box. `StaticViewport` backs headless
//! hosts and unit tests.

use std::sync::{Arc, Mutex};

use crate::geometry::PageExtent;

/// Source of the page's current content box.
pub trait ViewportProvider {
    /// Sample the content box. Called fresh on every layout pass.
    fn extent(&self) -> PageExtent;
}

/// Provider backed by a settable extent.
///
/// Cloning shares the underlying extent, so a host can keep one handle for
/// updates while the engine owns the other.
#[derive(Debug, Clone, Default)]
pub struct StaticViewport {
    extent: Arc<Mutex<PageExtent>>,
}

impl StaticViewport {
    pub fn new(extent: PageExtent) -> Self {
        Self {
            extent: Arc::new(Mutex::new(extent)),
        }
    }

    pub fn set_extent(&self, extent: PageExtent) {
        *self.extent.lock().expect("viewport mutex poisoned") = extent;
    }
}

impl ViewportProvider for StaticViewport {
    fn extent(&self) -> PageExtent {
        *self.extent.lock().expect("viewport mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_viewport_reports_latest_extent() {
        let viewport = StaticViewport::new(PageExtent::new(800.0, 600.0));
        assert_eq!(viewport.extent(), PageExtent::new(800.0, 600.0));

        viewport.set_extent(PageExtent::new(1024.0, 768.0));
        assert_eq!(viewport.extent(), PageExtent::new(1024.0, 768.0));
    }

    #[test]
    fn clones_share_the_extent() {
        let viewport = StaticViewport::new(PageExtent::new(100.0, 100.0));
        let handle = viewport.clone();
        handle.set_extent(PageExtent::new(300.0, 200.0));
        assert_eq!(viewport.extent(), PageExtent::new(300.0, 200.0));
    }
}
