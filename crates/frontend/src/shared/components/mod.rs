pub mod empty_state;

pub use empty_state::EmptyState;
