//! Windows-flavoured button.

use crate::Button;
use tracing::debug;

pub struct WindowsButton;

impl WindowsButton {
    pub fn new() -> Self {
        debug!("Creating Windows button");
        Self
    }
}

impl Button for WindowsButton {
    fn label(&self) -> &'static str {
        "Windows button rendered."
    }
}

impl Default for WindowsButton {
    fn default() -> Self {
        Self::new()
    }
}
