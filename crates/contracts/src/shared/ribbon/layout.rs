//! Toolbar layout: which actions are shown and where dividers go.
//!
//! Hidden entries are dropped first. Every later decision, including
//! "is this the last entry", is made against the remaining visible set,
//! so a hidden tail never leaves a dangling divider behind.

/// What the layout needs to know about a toolbar entry
pub trait ToolbarEntry {
    fn key(&self) -> &str;
    fn is_hidden(&self) -> bool;
    fn show_divider_after(&self) -> bool;
}

/// One rendered position in a toolbar
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarSlot<T> {
    Action(T),
    Divider { after: String },
}

/// Render identity of a slot.
///
/// Actions and dividers live in separate namespaces, so no action key can
/// collide with a divider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Action(String),
    DividerAfter(String),
}

impl<T: ToolbarEntry> ToolbarSlot<T> {
    /// Stable identity for keyed rendering
    pub fn render_key(&self) -> SlotKey {
        match self {
            ToolbarSlot::Action(entry) => SlotKey::Action(entry.key().to_string()),
            ToolbarSlot::Divider { after } => SlotKey::DividerAfter(after.clone()),
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, ToolbarSlot::Divider { .. })
    }
}

/// Entries with `hidden == false`, in their original order
pub fn visible_entries<T: ToolbarEntry>(entries: &[T]) -> Vec<&T> {
    entries.iter().filter(|e| !e.is_hidden()).collect()
}

/// Lays out a toolbar.
///
/// A divider follows visible entry `i` only if it asks for one and is not
/// the last visible entry.
pub fn toolbar_layout<T: ToolbarEntry + Clone>(entries: &[T]) -> Vec<ToolbarSlot<T>> {
    let visible = visible_entries(entries);
    let last = visible.len().saturating_sub(1);

    let mut slots = Vec::with_capacity(visible.len() * 2);
    for (index, entry) in visible.into_iter().enumerate() {
        slots.push(ToolbarSlot::Action(entry.clone()));
        if entry.show_divider_after() && index != last {
            slots.push(ToolbarSlot::Divider {
                after: entry.key().to_string(),
            });
        }
    }
    slots
}
