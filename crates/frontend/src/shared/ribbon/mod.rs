//! Ribbon toolkit: action descriptors, toolbar, tabs and the container that
//! stacks them.

pub mod action;
pub mod action_button;
pub mod container;
pub mod factories;
pub mod toolbar;

pub use action::{
    dispatch, run_isolated, ActionDescriptor, ActionError, ActionHandler, ActionOutcome,
};
pub use action_button::ActionButton;
pub use container::{NavigationContext, Ribbon};
pub use factories::*;
pub use toolbar::RibbonToolbar;
