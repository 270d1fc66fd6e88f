//! Dialog and button layer
//! Provides a unified interface for platform-flavoured dialogs and the buttons they create

use std::io::{self, Write};
use thiserror::Error;
use tracing::trace;

pub use platform::Platform;

pub mod buttons;
pub mod dialogs;

/// UI-specific errors
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;

/// Core button trait - implemented by platform-specific widgets
pub trait Button: Send + Sync {
    /// Fixed line identifying the concrete button
    fn label(&self) -> &'static str;

    /// Render the button into an arbitrary writer
    fn render_to(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.label())?;
        Ok(())
    }

    /// Render the button to standard output
    fn render(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render_to(&mut handle)?;
        handle.flush()?;
        Ok(())
    }
}

/// Core dialog trait - each variant decides which button it builds
pub trait Dialog: Send + Sync {
    /// Build a new button owned by the caller
    fn create_button(&self) -> Box<dyn Button>;

    /// Display name of the dialog's family, used for logging
    fn name(&self) -> &'static str;
}

/// Factory function to create the dialog for a platform family
pub fn create_dialog(platform: Platform) -> Box<dyn Dialog> {
    match platform {
        Platform::Windows => Box::new(dialogs::windows::WindowsDialog::new()),
        Platform::Ubuntu => Box::new(dialogs::ubuntu::UbuntuDialog::new()),
    }
}

/// Build a button from `dialog` and render it to standard output.
///
/// Knows nothing about concrete dialogs; new variants need no change here.
pub fn client_logic(dialog: &dyn Dialog) -> Result<()> {
    trace!("client logic running against {} dialog", dialog.name());
    let button = dialog.create_button();
    button.render()
}

/// Same as [`client_logic`], writing into `out` instead of standard output.
pub fn client_logic_to(dialog: &dyn Dialog, out: &mut dyn Write) -> Result<()> {
    trace!("client logic running against {} dialog", dialog.name());
    let button = dialog.create_button();
    button.render_to(out)
}
