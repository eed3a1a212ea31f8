//! Action descriptors and the boundary that keeps a failing handler from
//! taking the toolbar down with it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::enums::ActionAppearance;
use contracts::shared::ribbon::ToolbarEntry;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure reported by an action handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Failed(String),

    #[error("promise rejected: {0}")]
    Rejected(String),
}

impl ActionError {
    pub fn failed(message: impl Into<String>) -> Self {
        ActionError::Failed(message.into())
    }
}

impl From<JsValue> for ActionError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        ActionError::Rejected(message)
    }
}

impl From<anyhow::Error> for ActionError {
    fn from(err: anyhow::Error) -> Self {
        ActionError::Failed(format!("{:#}", err))
    }
}

pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), ActionError>>>>;

/// Zero-argument operation behind a button.
///
/// Cloning is cheap. The closure must be `Send + Sync` because thaw stores
/// click callbacks that way; the future it returns runs on the UI thread.
#[derive(Clone)]
pub struct ActionHandler(Arc<dyn Fn() -> ActionFuture + Send + Sync>);

impl ActionHandler {
    /// Synchronous handler
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Self(Arc::new(move || -> ActionFuture { Box::pin(std::future::ready(f())) }))
    }

    /// Handler that cannot fail
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::new(move || {
            f();
            Ok(())
        })
    }

    pub fn new_async<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + 'static,
    {
        Self(Arc::new(move || -> ActionFuture { Box::pin(f()) }))
    }

    /// Handler backed by a host API that returns a JS promise
    pub fn from_promise<F>(f: F) -> Self
    where
        F: Fn() -> js_sys::Promise + Send + Sync + 'static,
    {
        Self::new_async(move || {
            let promise = f();
            async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(ActionError::from)
            }
        })
    }

    pub fn noop() -> Self {
        Self::new(|| Ok(()))
    }

    pub fn invoke(&self) -> ActionFuture {
        (self.0)()
    }
}

impl std::fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ActionHandler(..)")
    }
}

/// How an isolated action run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The error was logged and swallowed
    Failed(ActionError),
}

/// Runs `handler` and awaits it.
///
/// Errors never escape: they are logged with the action label and returned
/// as [`ActionOutcome::Failed`].
pub async fn run_isolated(label: &str, handler: &ActionHandler) -> ActionOutcome {
    match handler.invoke().await {
        Ok(()) => ActionOutcome::Completed,
        Err(err) => {
            log::error!("Action \"{}\" failed: {}", label, err);
            ActionOutcome::Failed(err)
        }
    }
}

/// Queues an isolated run on the UI task queue
pub fn dispatch(label: String, handler: ActionHandler) {
    leptos::task::spawn_local(async move {
        let _ = run_isolated(&label, &handler).await;
    });
}

/// One toolbar button, described declaratively
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub key: String,
    /// Glyph name, see `shared::icons::icon`
    pub icon: &'static str,
    pub label: String,
    pub handler: ActionHandler,
    pub disabled: bool,
    pub tooltip: Option<String>,
    pub appearance: Option<ActionAppearance>,
    pub aria_label: Option<String>,
    pub show_divider_after: bool,
    pub hidden: bool,
    pub test_id: Option<String>,
}

impl ActionDescriptor {
    pub fn new(
        key: impl Into<String>,
        icon: &'static str,
        label: impl Into<String>,
        handler: ActionHandler,
    ) -> Self {
        Self {
            key: key.into(),
            icon,
            label: label.into(),
            handler,
            disabled: false,
            tooltip: None,
            appearance: None,
            aria_label: None,
            show_divider_after: false,
            hidden: false,
            test_id: None,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_appearance(mut self, appearance: ActionAppearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn with_divider_after(mut self, show: bool) -> Self {
        self.show_divider_after = show;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// `aria_label`, falling back to `label`
    pub fn accessible_name(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.label)
    }

    /// `tooltip`, falling back to `label`
    pub fn tooltip_text(&self) -> &str {
        self.tooltip.as_deref().unwrap_or(&self.label)
    }

    /// Label and handler to run on a click; `None` while disabled
    pub fn activation(&self) -> Option<(String, ActionHandler)> {
        if self.disabled {
            return None;
        }
        Some((self.label.clone(), self.handler.clone()))
    }
}

impl ToolbarEntry for ActionDescriptor {
    fn key(&self) -> &str {
        &self.key
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn show_divider_after(&self) -> bool {
        self.show_divider_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ribbon::{toolbar_layout, SlotKey};
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn action(key: &str, label: &str) -> ActionDescriptor {
        ActionDescriptor::new(key, "save", label, ActionHandler::noop())
    }

    #[test]
    fn test_label_is_default_tooltip_and_name() {
        let a = action("save", "Save");
        assert_eq!(a.tooltip_text(), "Save");
        assert_eq!(a.accessible_name(), "Save");
    }

    #[test]
    fn test_tooltip_override_keeps_label_as_name() {
        let a = action("save", "L").with_tooltip("T");
        assert_eq!(a.tooltip_text(), "T");
        assert_eq!(a.accessible_name(), "L");
    }

    #[test]
    fn test_aria_label_override() {
        let a = action("save", "Save").with_aria_label("Save item");
        assert_eq!(a.accessible_name(), "Save item");
        assert_eq!(a.tooltip_text(), "Save");
    }

    #[test]
    fn test_disabled_action_does_not_activate() {
        assert!(action("save", "Save").with_disabled(true).activation().is_none());
    }

    #[test]
    fn test_enabled_activation_runs_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let a = ActionDescriptor::new(
            "count",
            "plus",
            "Count",
            ActionHandler::from_fn(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let (label, handler) = a.activation().unwrap();
        assert_eq!(label, "Count");
        assert_eq!(block_on(run_isolated(&label, &handler)), ActionOutcome::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_isolated_completes() {
        let outcome = block_on(run_isolated("Save", &ActionHandler::noop()));
        assert_eq!(outcome, ActionOutcome::Completed);
    }

    #[test]
    fn test_sync_failure_is_caught() {
        let handler = ActionHandler::new(|| Err(ActionError::failed("disk full")));
        let outcome = block_on(run_isolated("Save", &handler));
        assert_eq!(
            outcome,
            ActionOutcome::Failed(ActionError::Failed("disk full".to_string()))
        );
    }

    #[test]
    fn test_async_failure_is_caught() {
        let handler = ActionHandler::new_async(|| async {
            Err(ActionError::Rejected("network".to_string()))
        });
        let outcome = block_on(run_isolated("Sync", &handler));
        assert!(matches!(outcome, ActionOutcome::Failed(ActionError::Rejected(_))));
    }

    #[test]
    fn test_handler_runs_again_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handler = ActionHandler::new_async(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(ActionError::failed("first call fails"))
                } else {
                    Ok(())
                }
            }
        });

        assert!(matches!(
            block_on(run_isolated("Retry", &handler)),
            ActionOutcome::Failed(_)
        ));
        assert_eq!(
            block_on(run_isolated("Retry", &handler)),
            ActionOutcome::Completed
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_anyhow_error_converts() {
        let err: ActionError = anyhow::anyhow!("boom").into();
        assert_eq!(err, ActionError::Failed("boom".to_string()));
    }

    #[test]
    fn test_descriptors_lay_out_by_visibility() {
        let actions = vec![
            action("a", "A").with_divider_after(true),
            action("b", "B").with_hidden(true),
            action("c", "C"),
        ];
        let keys: Vec<SlotKey> = toolbar_layout(&actions)
            .iter()
            .map(|s| s.render_key())
            .collect();
        assert_eq!(
            keys,
            vec![
                SlotKey::Action("a".to_string()),
                SlotKey::DividerAfter("a".to_string()),
                SlotKey::Action("c".to_string()),
            ]
        );
    }
}
