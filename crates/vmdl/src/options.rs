/// Decoding options.
///
/// The encoder has nothing to configure: indentation is always four spaces
/// per nesting level.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Reject unrecognized lines and inconsistent indentation instead of
    /// silently resolving them.
    pub strict: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
