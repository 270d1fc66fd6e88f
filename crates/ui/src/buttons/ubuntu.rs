//! Ubuntu-flavoured button.

use crate::Button;
use tracing::debug;

pub struct UbuntuButton;

impl UbuntuButton {
    pub fn new() -> Self {
        debug!("Creating Ubuntu button");
        Self
    }
}

impl Button for UbuntuButton {
    fn label(&self) -> &'static str {
        "Ubuntu button rendered."
    }
}

impl Default for UbuntuButton {
    fn default() -> Self {
        Self::new()
    }
}
