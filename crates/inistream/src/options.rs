/// Configuration for the block arena owned by every document.
///
/// # Examples
///
/// ```rust
/// use inistream::{ArenaOptions, Document};
///
/// let doc = Document::with_options(ArenaOptions {
///     block_size: 4096,
///     ..Default::default()
/// });
/// assert!(doc.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaOptions {
    /// Size in bytes of the first block. Later blocks at least double.
    ///
    /// # Default
    ///
    /// `1024`
    pub block_size: usize,

    /// Upper bound on the bytes the arena may reserve in total.
    ///
    /// Requests beyond the limit fail with
    /// [`Error::AllocationFailure`](crate::Error::AllocationFailure), which
    /// makes exhaustion reproducible without exhausting the host.
    ///
    /// # Default
    ///
    /// `None` (unbounded)
    pub byte_limit: Option<usize>,
}

impl Default for ArenaOptions {
    fn default() -> Self {
        Self {
            block_size: 1024,
            byte_limit: None,
        }
    }
}

/// Configuration for the file driver.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Size of the fixed staging buffer moved between the file and the
    /// stream engine on each call.
    ///
    /// # Default
    ///
    /// `256`
    pub buffer_size: usize,

    /// Prefix of the sections synthesized in place of malformed headers.
    /// A counter starting at zero is appended.
    ///
    /// # Default
    ///
    /// `"ParseFailed_"`
    pub placeholder_prefix: alloc::borrow::Cow<'static, str>,

    /// Options for the arena of documents created while reading.
    pub arena: ArenaOptions,
}

#[cfg(feature = "std")]
impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            buffer_size: 256,
            placeholder_prefix: "ParseFailed_".into(),
            arena: ArenaOptions::default(),
        }
    }
}
