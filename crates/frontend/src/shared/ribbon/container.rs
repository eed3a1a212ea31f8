use contracts::shared::ribbon::{HeaderMode, TabDescriptor, TabSet, BACK_LABEL, HOME_TAB_VALUE};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Navigation state of the hosting view.
///
/// Pass it to [`Ribbon`] directly or provide it through context.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    pub is_detail_view: Signal<bool>,
    pub go_back: Callback<()>,
}

impl NavigationContext {
    pub fn new(is_detail_view: impl Into<Signal<bool>>, go_back: Callback<()>) -> Self {
        Self {
            is_detail_view: is_detail_view.into(),
            go_back,
        }
    }

    pub fn back(&self) {
        self.go_back.run(());
    }
}

/// Owned render data for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub value: String,
    pub label: String,
    pub test_id: String,
    pub disabled: bool,
}

pub fn tab_views(tabs: &[TabDescriptor]) -> Vec<TabView> {
    tabs.iter()
        .map(|tab| TabView {
            value: tab.value.clone(),
            label: tab.label.clone(),
            test_id: tab.resolved_test_id(),
            disabled: tab.disabled,
        })
        .collect()
}

/// Selection signal of the tab list.
///
/// An external signal is used as is, after `default_selected` (when given)
/// is written into it; otherwise a new signal starts at `default_selected`
/// or "home".
pub fn initial_selection(
    selected: Option<RwSignal<String>>,
    default_selected: Option<String>,
) -> RwSignal<String> {
    match (selected, default_selected) {
        (Some(selected), Some(value)) => {
            selected.set(value);
            selected
        }
        (Some(selected), None) => selected,
        (None, value) => RwSignal::new(value.unwrap_or_else(|| HOME_TAB_VALUE.to_string())),
    }
}

/// Header mode for the current navigation state
pub fn header_mode(
    navigation: Option<NavigationContext>,
    show_tabs: bool,
    tab_count: usize,
) -> HeaderMode {
    let is_detail_view = navigation
        .map(|nav| nav.is_detail_view.get())
        .unwrap_or(false);
    HeaderMode::resolve(is_detail_view, show_tabs, tab_count)
}

/// Ribbon: tabs (or a back button in detail views) above caller content.
///
/// Selection belongs to the tab list; pass `selected` to observe or drive
/// it from outside.
#[component]
pub fn Ribbon(
    /// Built by `create_ribbon_tabs`, so "home" is always first
    #[prop(optional)]
    tabs: Option<TabSet>,
    /// Initially selected tab; "home" when omitted. Also written into
    /// `selected` when both are given.
    #[prop(optional, into)]
    default_selected: Option<String>,
    #[prop(default = true)] show_tabs: bool,
    /// Falls back to a `NavigationContext` from context
    #[prop(optional)]
    navigation: Option<NavigationContext>,
    #[prop(optional)] selected: Option<RwSignal<String>>,
    children: Children,
) -> impl IntoView {
    let navigation = navigation.or_else(use_context::<NavigationContext>);
    let selected = initial_selection(selected, default_selected);

    let tabs = tabs.map(|set| tab_views(set.tabs())).unwrap_or_default();
    let tab_count = tabs.len();
    let tabs = StoredValue::new(tabs);

    view! {
        <div class="ribbon">
            <div class="ribbon__header">
                {move || match (header_mode(navigation, show_tabs, tab_count), navigation) {
                    (HeaderMode::Back, Some(nav)) => view! { <BackButton navigation=nav /> }.into_any(),
                    (HeaderMode::Tabs, _) => {
                        view! {
                            <TabList selected_value=selected>
                                {tabs
                                    .get_value()
                                    .into_iter()
                                    .map(|tab| {
                                        let TabView { value, label, test_id, disabled } = tab;
                                        view! {
                                            <Tab
                                                value=value
                                                attr:data-testid=test_id
                                                attr:disabled=disabled
                                                attr:aria-disabled=disabled.to_string()
                                            >
                                                {label}
                                            </Tab>
                                        }
                                    })
                                    .collect_view()}
                            </TabList>
                        }
                            .into_any()
                    }
                    _ => view! {}.into_any(),
                }}
            </div>
            <div class="ribbon__body">{children()}</div>
        </div>
    }
}

#[component]
fn BackButton(navigation: NavigationContext) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        navigation.back();
    };

    view! {
        <Button
            class="ribbon__back"
            appearance=ButtonAppearance::Subtle
            on_click=on_click
            attr:aria-label=BACK_LABEL
            attr:data-testid="ribbon-back-btn"
        >
            {icon("arrow-left")}
            " "
            {BACK_LABEL}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ribbon::factories::{create_ribbon_tabs, create_view_tab};

    #[test]
    fn test_tab_views_keep_order_and_test_ids() {
        let tabs = create_ribbon_tabs(
            "Home",
            vec![
                create_view_tab("View"),
                TabDescriptor::new("review", "Review")
                    .with_disabled(true)
                    .with_test_id("review-tab"),
            ],
        );
        let views = tab_views(tabs.tabs());

        assert_eq!(
            views,
            vec![
                TabView {
                    value: "home".to_string(),
                    label: "Home".to_string(),
                    test_id: "ribbon-home-tab-btn".to_string(),
                    disabled: false,
                },
                TabView {
                    value: "view".to_string(),
                    label: "View".to_string(),
                    test_id: "ribbon-view-tab-btn".to_string(),
                    disabled: false,
                },
                TabView {
                    value: "review".to_string(),
                    label: "Review".to_string(),
                    test_id: "review-tab".to_string(),
                    disabled: true,
                },
            ]
        );
    }

    #[test]
    fn test_selection_defaults_to_home() {
        Owner::new().with(|| {
            let selected = initial_selection(None, None);
            assert_eq!(selected.get_untracked(), HOME_TAB_VALUE);
        });
    }

    #[test]
    fn test_default_selected_seeds_signal() {
        Owner::new().with(|| {
            let selected = initial_selection(None, Some("view".to_string()));
            assert_eq!(selected.get_untracked(), "view");

            let external = RwSignal::new("home".to_string());
            let selected = initial_selection(Some(external), Some("data".to_string()));
            assert_eq!(external.get_untracked(), "data");
            assert_eq!(selected.get_untracked(), "data");

            let external = RwSignal::new("view".to_string());
            initial_selection(Some(external), None);
            assert_eq!(external.get_untracked(), "view");
        });
    }

    #[test]
    fn test_back_invokes_go_back() {
        Owner::new().with(|| {
            let detail = RwSignal::new(true);
            let nav = NavigationContext::new(detail, Callback::new(move |_| detail.set(false)));

            nav.back();

            assert!(!detail.get_untracked());
        });
    }

    #[test]
    fn test_detail_view_header_hides_tabs() {
        Owner::new().with(|| {
            let detail = RwSignal::new(true);
            let nav = NavigationContext::new(detail, Callback::new(move |_| detail.set(false)));

            assert_eq!(header_mode(Some(nav), true, 3), HeaderMode::Back);
            nav.back();
            assert_eq!(header_mode(Some(nav), true, 3), HeaderMode::Tabs);
            assert_eq!(header_mode(None, true, 0), HeaderMode::Empty);
        });
    }
}
