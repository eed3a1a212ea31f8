use contracts::enums::ActionAppearance;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::ribbon::{ActionButton, ActionDescriptor};

/// EmptyState component - placeholder for views with nothing to show yet
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,

    #[prop(optional, into)] description: MaybeProp<String>,

    /// Glyph name; "inbox" by default
    #[prop(optional)]
    glyph: Option<&'static str>,

    /// Call to action, primary unless the descriptor says otherwise
    #[prop(optional)]
    action: Option<ActionDescriptor>,

    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let action = action.map(|action| {
        let appearance = action.appearance.unwrap_or(ActionAppearance::Primary);
        view! {
            <div class="empty-state__actions">
                <ActionButton action=action appearance=appearance show_label=true />
            </div>
        }
    });

    view! {
        <div class="empty-state" role="status">
            <div class="empty-state__icon">{icon(glyph.unwrap_or("inbox"))}</div>
            <h2 class="empty-state__title">{title}</h2>
            {move || description.get().map(|d| view! {
                <p class="empty-state__description">{d}</p>
            })}
            {action}
            {children.map(|children| children())}
        </div>
    }
}
