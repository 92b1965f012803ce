/// Marks an entity as hosting children placed by layout rules.
///
/// A `UiContainer` plus a [`FlexLayout`](crate::layout::FlexLayout) or
/// [`GridLayout`](crate::layout::GridLayout) on the same entity selects the
/// algorithm for its children. Anchored and docked children are placed by
/// any `UiContainer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiContainer {
    pub id: String,
    /// Consumed by renderers; layout ignores it.
    pub clip_children: bool,
}

impl UiContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), clip_children: false }
    }

    pub fn clip_children(mut self, clip: bool) -> Self {
        self.clip_children = clip;
        self
    }
}
