// Platform naming crate. Do NOT put OS checks here: the families are labels, not detection.

use std::fmt;

/// Illustrative platform families a dialog can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Ubuntu,
}

impl Platform {
    /// Every known family, in the order the demo drives them.
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Ubuntu];

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Ubuntu => "Ubuntu",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
