//! Ribbon tab descriptors and the tab set that always starts with "home".

use serde::{Deserialize, Serialize};

use super::error::RibbonError;

/// Value reserved for the mandatory first tab
pub const HOME_TAB_VALUE: &str = "home";

/// `data-testid` used when a tab does not set its own
pub fn default_tab_test_id(value: &str) -> String {
    format!("ribbon-{}-tab-btn", value)
}

/// One ribbon tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl TabDescriptor {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            test_id: None,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn is_home(&self) -> bool {
        self.value == HOME_TAB_VALUE
    }

    /// Explicit test id, or `ribbon-<value>-tab-btn`
    pub fn resolved_test_id(&self) -> String {
        self.test_id
            .clone()
            .unwrap_or_else(|| default_tab_test_id(&self.value))
    }
}

/// Ordered, non-empty set of ribbon tabs.
///
/// The home tab is created together with the set and stays at index 0.
/// Further tabs are appended in insertion order; a second "home" or a
/// repeated value is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabDescriptor>,
}

impl TabSet {
    pub fn new(home_label: impl Into<String>) -> Self {
        Self {
            tabs: vec![TabDescriptor::new(HOME_TAB_VALUE, home_label)],
        }
    }

    /// Starts a set from a prepared home tab (custom test id, disabled, ...)
    pub fn from_home(home: TabDescriptor) -> Result<Self, RibbonError> {
        if !home.is_home() {
            return Err(RibbonError::NotHomeTab(home.value));
        }
        Ok(Self { tabs: vec![home] })
    }

    pub fn push(&mut self, tab: TabDescriptor) -> Result<(), RibbonError> {
        if tab.is_home() {
            return Err(RibbonError::ReservedTabValue);
        }
        if self.contains(&tab.value) {
            return Err(RibbonError::DuplicateTabValue(tab.value));
        }
        self.tabs.push(tab);
        Ok(())
    }

    pub fn with_tab(mut self, tab: TabDescriptor) -> Result<Self, RibbonError> {
        self.push(tab)?;
        Ok(self)
    }

    pub fn home(&self) -> &TabDescriptor {
        &self.tabs[0]
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn contains(&self, value: &str) -> bool {
        self.tabs.iter().any(|t| t.value == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabDescriptor> {
        self.tabs.iter()
    }

    pub fn into_vec(self) -> Vec<TabDescriptor> {
        self.tabs
    }
}

impl<'a> IntoIterator for &'a TabSet {
    type Item = &'a TabDescriptor;
    type IntoIter = std::slice::Iter<'a, TabDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_has_only_home() {
        let set = TabSet::new("Home");
        assert_eq!(set.tabs().len(), 1);
        assert_eq!(set.home().value, HOME_TAB_VALUE);
        assert_eq!(set.home().label, "Home");
    }

    #[test]
    fn test_home_stays_first() {
        let set = TabSet::new("Home")
            .with_tab(TabDescriptor::new("view", "View"))
            .and_then(|s| s.with_tab(TabDescriptor::new("data", "Data")))
            .unwrap();
        let values: Vec<&str> = set.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["home", "view", "data"]);
    }

    #[test]
    fn test_second_home_rejected() {
        let mut set = TabSet::new("Home");
        let err = set.push(TabDescriptor::new("home", "Another")).unwrap_err();
        assert_eq!(err, RibbonError::ReservedTabValue);
        assert_eq!(set.tabs().len(), 1);
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let mut set = TabSet::new("Home");
        set.push(TabDescriptor::new("view", "View")).unwrap();
        let err = set.push(TabDescriptor::new("view", "View again")).unwrap_err();
        assert_eq!(err, RibbonError::DuplicateTabValue("view".to_string()));
        assert_eq!(set.tabs().len(), 2);
    }

    #[test]
    fn test_from_home_keeps_descriptor() {
        let home = TabDescriptor::new(HOME_TAB_VALUE, "Start").with_test_id("start-tab");
        let set = TabSet::from_home(home.clone()).unwrap();
        assert_eq!(set.home(), &home);
        assert_eq!(set.tabs().len(), 1);
    }

    #[test]
    fn test_from_home_rejects_other_values() {
        let err = TabSet::from_home(TabDescriptor::new("view", "View")).unwrap_err();
        assert_eq!(err, RibbonError::NotHomeTab("view".to_string()));
    }

    #[test]
    fn test_resolved_test_id() {
        let tab = TabDescriptor::new("insert", "Insert");
        assert_eq!(tab.resolved_test_id(), "ribbon-insert-tab-btn");

        let tab = tab.with_test_id("custom-id");
        assert_eq!(tab.resolved_test_id(), "custom-id");
    }

    #[test]
    fn test_deserialize_defaults() {
        let source = r#"
            value = "view"
            label = "View"
        "#;
        let tab: TabDescriptor = toml::from_str(source).unwrap();
        assert!(!tab.disabled);
        assert_eq!(tab.test_id, None);
    }
}
