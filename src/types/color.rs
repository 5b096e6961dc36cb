use std::fmt;

/// A colour as entered by the user, e.g. `#7c3aed` or `rebeccapurple`.
///
/// The value is never parsed; drawing surfaces receive it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(raw: impl Into<String>) -> Self {
        Color(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color(String::from(value))
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
