pub mod error;
pub mod header;
pub mod layout;
pub mod tab;

pub use error::RibbonError;
pub use header::{HeaderMode, BACK_LABEL};
pub use layout::{toolbar_layout, visible_entries, SlotKey, ToolbarEntry, ToolbarSlot};
pub use tab::{default_tab_test_id, TabDescriptor, TabSet, HOME_TAB_VALUE};
