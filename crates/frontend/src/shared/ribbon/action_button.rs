use contracts::enums::ActionAppearance;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::*;

use super::action::{dispatch, ActionDescriptor};
use crate::shared::icons::icon;

pub(crate) fn button_appearance(appearance: ActionAppearance) -> ButtonAppearance {
    match appearance {
        ActionAppearance::Primary => ButtonAppearance::Primary,
        ActionAppearance::Subtle => ButtonAppearance::Subtle,
        ActionAppearance::Transparent => ButtonAppearance::Transparent,
    }
}

/// Renders one action as an icon button with tooltip and accessible name.
///
/// Clicks are swallowed (`preventDefault` + `stopPropagation`) before the
/// handler is queued; handler errors are logged and never reach the tree.
#[component]
pub fn ActionButton(
    #[prop(into)] action: Signal<ActionDescriptor>,
    /// Overrides the descriptor's appearance; unset on both means subtle
    #[prop(optional, into)]
    appearance: MaybeProp<ActionAppearance>,
    /// Render the label next to the glyph
    #[prop(optional)]
    show_label: bool,
) -> impl IntoView {
    let resolved_appearance = Signal::derive(move || {
        let requested = appearance.get().or_else(|| action.with(|a| a.appearance));
        button_appearance(requested.unwrap_or_default())
    });
    let disabled = Signal::derive(move || action.with(|a| a.disabled));

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        if let Some((label, handler)) = action.with_untracked(|a| a.activation()) {
            dispatch(label, handler);
        }
    };

    view! {
        <Button
            class="ribbon-action"
            appearance=resolved_appearance
            disabled=disabled
            on_click=on_click
            attr:title=move || action.with(|a| a.tooltip_text().to_string())
            attr:aria-label=move || action.with(|a| a.accessible_name().to_string())
            attr:data-testid=move || action.with(|a| a.test_id.clone())
        >
            {move || icon(action.with(|a| a.icon))}
            {show_label.then(|| view! {
                <span class="ribbon-action__label">{move || action.with(|a| a.label.clone())}</span>
            })}
        </Button>
    }
}
