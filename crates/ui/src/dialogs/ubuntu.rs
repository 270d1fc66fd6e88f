//! Ubuntu dialog.
//! Always builds an `UbuntuButton`.

use crate::buttons::UbuntuButton;
use crate::{Button, Dialog, Platform};
use tracing::{debug, trace};

pub struct UbuntuDialog;

impl UbuntuDialog {
    pub fn new() -> Self {
        debug!("Initializing Ubuntu dialog");
        Self
    }
}

impl Dialog for UbuntuDialog {
    fn create_button(&self) -> Box<dyn Button> {
        trace!("Ubuntu dialog creating button");
        Box::new(UbuntuButton::new())
    }

    fn name(&self) -> &'static str {
        Platform::Ubuntu.name()
    }
}

impl Default for UbuntuDialog {
    fn default() -> Self {
        Self::new()
    }
}
