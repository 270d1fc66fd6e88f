/// Platform-specific button implementations

pub mod ubuntu;
pub mod windows;

pub use ubuntu::UbuntuButton;
pub use windows::WindowsButton;
