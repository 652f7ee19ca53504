//! Rendering surface collaborator.
//!
//! Components never reach for a global document. They receive a surface and
//! mutate it through this small API: look nodes up, create and append
//! decorative nodes, and flip named markers (CSS classes) or inline styles.
//! The browser implementation lives in the `prowheels` crate; tests and
//! headless callers use [`crate::memory::MemorySurface`].

/// DOM-like page a component attaches to.
///
/// Mutations are best-effort: a browser rejecting one style write is not
/// something a component can recover from, so mutators return nothing.
pub trait RenderingSurface {
    /// Handle to one element. Cheap to clone; equality is node identity.
    type Node: Clone + PartialEq;

    /// Element with the given `id` attribute.
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching a CSS selector list, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First element matching a CSS selector list.
    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// The page body, the root that page-wide markers live on.
    fn body(&self) -> Option<Self::Node>;

    /// Create a detached element with the given tag and space-separated classes.
    fn create(&mut self, tag: &str, classes: &str) -> Option<Self::Node>;

    /// Append `child` as the last child of `parent`.
    fn append(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Detached deep copy of `node`.
    fn clone_deep(&mut self, node: &Self::Node) -> Option<Self::Node>;

    /// Element children of `node`, in order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Add (`on`) or remove a marker class.
    fn set_marker(&mut self, node: &Self::Node, marker: &str, on: bool);

    fn has_marker(&self, node: &Self::Node, marker: &str) -> bool;

    /// Replace the text content of `node`.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Set one inline style property.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
}

/// Look up a required mount by id.
///
/// # Errors
///
/// Returns [`crate::SiteError::MissingMount`] naming `id` when it is absent.
pub fn require_by_id<S: RenderingSurface>(surface: &S, id: &str) -> Result<S::Node, crate::SiteError> {
    surface
        .by_id(id)
        .ok_or_else(|| crate::SiteError::MissingMount(id.to_owned()))
}

/// The page body as a required mount.
///
/// # Errors
///
/// Returns [`crate::SiteError::MissingMount`] when the page has no body.
pub fn require_body<S: RenderingSurface>(surface: &S) -> Result<S::Node, crate::SiteError> {
    surface
        .body()
        .ok_or_else(|| crate::SiteError::MissingMount("body".to_owned()))
}
