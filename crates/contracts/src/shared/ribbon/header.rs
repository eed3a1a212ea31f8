/// Label of the back affordance shown in detail views
pub const BACK_LABEL: &str = "Back";

/// What the ribbon shows above its body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Single back button; tabs are suppressed
    Back,
    Tabs,
    Empty,
}

impl HeaderMode {
    /// Detail view wins over everything; otherwise tabs render when enabled
    /// and there is at least one.
    pub fn resolve(is_detail_view: bool, show_tabs: bool, tab_count: usize) -> Self {
        if is_detail_view {
            HeaderMode::Back
        } else if show_tabs && tab_count > 0 {
            HeaderMode::Tabs
        } else {
            HeaderMode::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_view_hides_tabs() {
        assert_eq!(HeaderMode::resolve(true, true, 3), HeaderMode::Back);
        assert_eq!(HeaderMode::resolve(true, false, 0), HeaderMode::Back);
    }

    #[test]
    fn test_tabs_when_enabled() {
        assert_eq!(HeaderMode::resolve(false, true, 1), HeaderMode::Tabs);
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(HeaderMode::resolve(false, true, 0), HeaderMode::Empty);
        assert_eq!(HeaderMode::resolve(false, false, 2), HeaderMode::Empty);
    }
}
