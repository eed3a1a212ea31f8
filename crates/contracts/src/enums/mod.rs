pub mod action_appearance;

pub use action_appearance::{ActionAppearance, AppearancePolicy, ResolvedAppearance};
