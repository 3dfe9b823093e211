use std::fmt;

/// The root-finding methods provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Bisection,
    FixedPoint,
    Newton,
}

impl Method {
    /// Human-readable method name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Method::Bisection => "Bisection",
            Method::FixedPoint => "Fixed Point",
            Method::Newton => "Newton's",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
