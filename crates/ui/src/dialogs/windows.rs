//! Windows dialog.
//! Always builds a `WindowsButton`.

use crate::buttons::WindowsButton;
use crate::{Button, Dialog, Platform};
use tracing::{debug, trace};

pub struct WindowsDialog;

impl WindowsDialog {
    pub fn new() -> Self {
        debug!("Initializing Windows dialog");
        Self
    }
}

impl Dialog for WindowsDialog {
    fn create_button(&self) -> Box<dyn Button> {
        trace!("Windows dialog creating button");
        Box::new(WindowsButton::new())
    }

    fn name(&self) -> &'static str {
        Platform::Windows.name()
    }
}

impl Default for WindowsDialog {
    fn default() -> Self {
        Self::new()
    }
}
