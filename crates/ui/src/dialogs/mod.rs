/// Platform-specific dialog implementations

pub mod ubuntu;
pub mod windows;

pub use ubuntu::UbuntuDialog;
pub use windows::WindowsDialog;
