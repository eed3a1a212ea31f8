use contracts::enums::{ActionAppearance, AppearancePolicy};
use contracts::shared::ribbon::{toolbar_layout, ToolbarSlot};
use leptos::prelude::*;

use super::action::ActionDescriptor;
use super::action_button::ActionButton;
use crate::shared::config::Config;

/// Appearance a toolbar gives `action` under `policy`
pub fn toolbar_appearance(policy: AppearancePolicy, action: &ActionDescriptor) -> ActionAppearance {
    policy.toolbar_appearance(action.appearance).appearance
}

/// Logs when `policy` overrides the requested appearance; returns whether it did.
///
/// Called once when a toolbar slot mounts, not on every re-render.
pub fn warn_if_downgraded(policy: AppearancePolicy, action: &ActionDescriptor) -> bool {
    let resolved = policy.toolbar_appearance(action.appearance);
    if resolved.downgraded {
        log::warn!(
            "Toolbar action \"{}\" requested {} appearance; rendering {}",
            action.key,
            ActionAppearance::Primary,
            resolved.appearance
        );
    }
    resolved.downgraded
}

/// Horizontal toolbar built from action descriptors.
///
/// Hidden actions are skipped, dividers follow the layout rules in
/// `contracts::shared::ribbon::layout`. Buttons are keyed by action key, so
/// a descriptor that changes (e.g. becomes disabled) updates in place.
#[component]
pub fn RibbonToolbar(
    #[prop(into)] actions: Signal<Vec<ActionDescriptor>>,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let policy = use_context::<Config>()
        .map(|c| c.toolbar.appearance_policy)
        .unwrap_or_default();

    view! {
        <div
            role="toolbar"
            class=move || format!("ribbon-toolbar {}", class.get().unwrap_or_default())
            aria-label=move || aria_label.get()
        >
            <For
                each=move || actions.with(|list| toolbar_layout(list))
                key=|slot| slot.render_key()
                children=move |slot| match slot {
                    ToolbarSlot::Action(initial) => {
                        warn_if_downgraded(policy, &initial);
                        let key = initial.key.clone();
                        let current = Signal::derive(move || {
                            actions
                                .with(|list| list.iter().find(|a| a.key == key).cloned())
                                .unwrap_or_else(|| initial.clone())
                        });
                        let appearance = Signal::derive(move || {
                            current.with(|a| toolbar_appearance(policy, a))
                        });
                        view! { <ActionButton action=current appearance=appearance /> }.into_any()
                    }
                    ToolbarSlot::Divider { .. } => view! {
                        <div class="ribbon-toolbar__divider" role="separator" aria-orientation="vertical"></div>
                    }
                        .into_any(),
                }
            />
        </div>
    }
}
