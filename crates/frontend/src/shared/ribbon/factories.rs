//! Pre-filled descriptors for the actions and tabs most pages need.
//!
//! Optional parameters go through [`ActionOptions`] / [`TabOptions`]; every
//! field defaults to "off" (`false` / `None`), so `Default::default()` gives
//! a plain, enabled, visible entry with no divider and the label doubling as
//! tooltip and accessible name.

use contracts::enums::ActionAppearance;
use contracts::shared::ribbon::{RibbonError, TabDescriptor, TabSet, HOME_TAB_VALUE};

use super::action::{ActionDescriptor, ActionHandler};

pub const SAVE_ACTION_KEY: &str = "save";
pub const SETTINGS_ACTION_KEY: &str = "settings";
pub const ABOUT_ACTION_KEY: &str = "about";

pub const INSERT_TAB_VALUE: &str = "insert";
pub const FORMAT_TAB_VALUE: &str = "format";
pub const DATA_TAB_VALUE: &str = "data";
pub const VIEW_TAB_VALUE: &str = "view";

/// Optional action fields
#[derive(Debug, Clone, Default)]
pub struct ActionOptions {
    pub disabled: bool,
    pub tooltip: Option<String>,
    pub appearance: Option<ActionAppearance>,
    pub aria_label: Option<String>,
    pub show_divider_after: bool,
    pub hidden: bool,
    pub test_id: Option<String>,
}

/// Optional tab fields
#[derive(Debug, Clone, Default)]
pub struct TabOptions {
    pub disabled: bool,
    pub test_id: Option<String>,
}

pub fn create_toolbar_action(
    key: impl Into<String>,
    icon: &'static str,
    label: impl Into<String>,
    handler: ActionHandler,
    options: ActionOptions,
) -> ActionDescriptor {
    let ActionOptions {
        disabled,
        tooltip,
        appearance,
        aria_label,
        show_divider_after,
        hidden,
        test_id,
    } = options;

    ActionDescriptor {
        disabled,
        tooltip,
        appearance,
        aria_label,
        show_divider_after,
        hidden,
        test_id,
        ..ActionDescriptor::new(key, icon, label, handler)
    }
}

pub fn create_save_action(
    label: impl Into<String>,
    handler: ActionHandler,
    options: ActionOptions,
) -> ActionDescriptor {
    create_toolbar_action(SAVE_ACTION_KEY, "save", label, handler, options)
}

pub fn create_settings_action(
    label: impl Into<String>,
    handler: ActionHandler,
    options: ActionOptions,
) -> ActionDescriptor {
    create_toolbar_action(SETTINGS_ACTION_KEY, "settings", label, handler, options)
}

pub fn create_about_action(
    label: impl Into<String>,
    handler: ActionHandler,
    options: ActionOptions,
) -> ActionDescriptor {
    create_toolbar_action(ABOUT_ACTION_KEY, "info", label, handler, options)
}

pub fn create_tab(
    value: impl Into<String>,
    label: impl Into<String>,
    options: TabOptions,
) -> TabDescriptor {
    TabDescriptor {
        disabled: options.disabled,
        test_id: options.test_id,
        ..TabDescriptor::new(value, label)
    }
}

/// Home tab with options; only [`TabSet`] decides where it goes
pub fn create_home_tab(label: impl Into<String>, options: TabOptions) -> TabDescriptor {
    create_tab(HOME_TAB_VALUE, label, options)
}

pub fn create_insert_tab(label: impl Into<String>) -> TabDescriptor {
    create_tab(INSERT_TAB_VALUE, label, TabOptions::default())
}

pub fn create_format_tab(label: impl Into<String>) -> TabDescriptor {
    create_tab(FORMAT_TAB_VALUE, label, TabOptions::default())
}

pub fn create_data_tab(label: impl Into<String>) -> TabDescriptor {
    create_tab(DATA_TAB_VALUE, label, TabOptions::default())
}

pub fn create_view_tab(label: impl Into<String>) -> TabDescriptor {
    create_tab(VIEW_TAB_VALUE, label, TabOptions::default())
}

/// Builds a ribbon tab set: home first, then `additional` in order.
///
/// A tab the set refuses (a second "home", a repeated value) is skipped
/// with a warning.
pub fn create_ribbon_tabs(
    home_label: impl Into<String>,
    additional: impl IntoIterator<Item = TabDescriptor>,
) -> TabSet {
    append_tabs(TabSet::new(home_label), additional)
}

/// Same as [`create_ribbon_tabs`], starting from a home tab built with
/// [`create_home_tab`]. Fails if `home` does not carry the "home" value.
pub fn create_ribbon_tabs_with_home(
    home: TabDescriptor,
    additional: impl IntoIterator<Item = TabDescriptor>,
) -> Result<TabSet, RibbonError> {
    Ok(append_tabs(TabSet::from_home(home)?, additional))
}

fn append_tabs(mut tabs: TabSet, additional: impl IntoIterator<Item = TabDescriptor>) -> TabSet {
    for tab in additional {
        let value = tab.value.clone();
        if let Err(err) = tabs.push(tab) {
            log::warn!("Skipping ribbon tab \"{}\": {}", value, err);
        }
    }
    tabs
}
