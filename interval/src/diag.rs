use log::warn;

///
/// A named diagnostic category for non-fatal warnings
///
/// Messages are forwarded to the `log` facade with the category name as the
/// log target, so hosts can filter or redirect them per component. The
/// category is an explicitly constructed handle that gets passed to whatever
/// emits through it, rather than a process-wide singleton.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Diagnostics {
    /// The log target messages from this category are tagged with
    target: String
}

impl Diagnostics {
    ///
    /// Creates a new diagnostic category with the specified target name
    ///
    pub fn new(target: &str) -> Diagnostics {
        Diagnostics { target: String::from(target) }
    }

    /// The target name for this category
    pub fn target(&self) -> &str {
        &self.target
    }

    ///
    /// Emits a warning-level message through this category
    ///
    pub fn warning(&self, message: &str) {
        warn!(target: self.target.as_str(), "{}", message);
    }
}
