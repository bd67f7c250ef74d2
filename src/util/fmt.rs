use std::fmt::{self, Debug, Formatter};

/// Debug-formats as the contained string, without quotes. Used to print placeholder slots in
/// collection layouts.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
