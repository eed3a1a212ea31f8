//! Demo workload page: an item editor with a ribbon on top.

use contracts::enums::AppearancePolicy;
use contracts::shared::ribbon::HOME_TAB_VALUE;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::shared::components::EmptyState;
use crate::shared::config::Config;
use crate::shared::ribbon::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let tabs = create_ribbon_tabs(
        config.ribbon.home_label.clone(),
        std::iter::once(create_view_tab("View")).chain(config.ribbon.tabs.iter().cloned()),
    );
    let show_tabs = config.ribbon.show_tabs;
    let policy = config.toolbar.appearance_policy;
    provide_context(config);

    let selected_tab = RwSignal::new(HOME_TAB_VALUE.to_string());
    let is_detail_view = RwSignal::new(false);
    let items = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);
    let status = RwSignal::new(None::<String>);

    provide_context(NavigationContext::new(
        is_detail_view,
        Callback::new(move |_| is_detail_view.set(false)),
    ));

    let add_item = ActionHandler::from_fn(move || {
        items.update(|list| {
            let n = list.len() + 1;
            list.push(format!("Item {}", n));
        })
    });

    let actions = {
        let add_item = add_item.clone();
        Signal::derive(move || match selected_tab.get().as_str() {
            HOME_TAB_VALUE => home_actions(items, saving, status, is_detail_view, add_item.clone()),
            VIEW_TAB_VALUE => view_actions(items, is_detail_view),
            _ => Vec::new(),
        })
    };

    let content = move || {
        if is_detail_view.get() {
            view! { <DetailsPanel policy=policy items=items /> }.into_any()
        } else if items.with(|list| list.is_empty()) {
            let add_first = create_toolbar_action(
                "add-first",
                "plus",
                "Add item",
                add_item.clone(),
                ActionOptions::default(),
            );
            view! {
                <EmptyState
                    title="No items yet"
                    description="Items you add will show up here."
                    glyph="folder-open"
                    action=add_first
                />
            }
                .into_any()
        } else {
            view! {
                <ul class="workload-items">
                    {items.get().into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            }
                .into_any()
        }
    };

    view! {
        <ConfigProvider>
            <div class="workload">
                <Ribbon tabs=tabs show_tabs=show_tabs selected=selected_tab>
                    <RibbonToolbar actions=actions aria_label="Item actions" />
                </Ribbon>
                <main class="workload__content">
                    {move || status.get().map(|s| view! { <div class="workload__status">{s}</div> })}
                    {content}
                </main>
            </div>
        </ConfigProvider>
    }
}

fn home_actions(
    items: RwSignal<Vec<String>>,
    saving: RwSignal<bool>,
    status: RwSignal<Option<String>>,
    is_detail_view: RwSignal<bool>,
    add_item: ActionHandler,
) -> Vec<ActionDescriptor> {
    let save = create_save_action(
        "Save",
        ActionHandler::new_async(move || async move {
            let count = items.with_untracked(|list| list.len());
            saving.set(true);
            TimeoutFuture::new(600).await;
            saving.set(false);
            status.set(Some(format!("Saved {} item(s)", count)));
            Ok(())
        }),
        ActionOptions {
            disabled: saving.get() || items.with(|list| list.is_empty()),
            show_divider_after: true,
            ..Default::default()
        },
    );

    let add = create_toolbar_action(
        "add",
        "plus",
        "Add item",
        add_item,
        ActionOptions {
            show_divider_after: true,
            ..Default::default()
        },
    );

    let settings = create_settings_action(
        "Settings",
        ActionHandler::from_fn(move || is_detail_view.set(true)),
        ActionOptions::default(),
    );

    let about = create_about_action(
        "About",
        ActionHandler::from_fn(move || {
            status.set(Some(format!("Ribbon toolkit {}", env!("CARGO_PKG_VERSION"))))
        }),
        ActionOptions::default(),
    );

    vec![save, add, settings, about]
}

fn view_actions(
    items: RwSignal<Vec<String>>,
    is_detail_view: RwSignal<bool>,
) -> Vec<ActionDescriptor> {
    let clear = create_toolbar_action(
        "clear",
        "trash",
        "Clear items",
        ActionHandler::from_fn(move || items.set(Vec::new())),
        ActionOptions {
            hidden: items.with(|list| list.is_empty()),
            show_divider_after: true,
            ..Default::default()
        },
    );

    let details = create_toolbar_action(
        "details",
        "eye",
        "Details",
        ActionHandler::from_fn(move || is_detail_view.set(true)),
        ActionOptions {
            tooltip: Some("Open the details view".to_string()),
            ..Default::default()
        },
    );

    vec![clear, details]
}

#[component]
fn DetailsPanel(policy: AppearancePolicy, items: RwSignal<Vec<String>>) -> impl IntoView {
    let policy = match policy {
        AppearancePolicy::Advisory => "advisory",
        AppearancePolicy::Strict => "strict",
    };

    view! {
        <section class="workload__details">
            <h2>"Details"</h2>
            <dl>
                <dt>"Items"</dt>
                <dd>{move || items.with(|list| list.len())}</dd>
                <dt>"Toolbar appearance policy"</dt>
                <dd>{policy}</dd>
            </dl>
        </section>
    }
}
