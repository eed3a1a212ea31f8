use serde::{Deserialize, Serialize};

/// Visual weight of an action button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionAppearance {
    /// Call-to-action; meant for empty states and dialogs, not toolbars
    Primary,
    #[default]
    Subtle,
    Transparent,
}

impl ActionAppearance {
    /// Code used in configuration and CSS modifiers
    pub fn code(&self) -> &'static str {
        match self {
            ActionAppearance::Primary => "primary",
            ActionAppearance::Subtle => "subtle",
            ActionAppearance::Transparent => "transparent",
        }
    }

    pub fn all() -> Vec<ActionAppearance> {
        vec![
            ActionAppearance::Primary,
            ActionAppearance::Subtle,
            ActionAppearance::Transparent,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "primary" => Some(ActionAppearance::Primary),
            "subtle" => Some(ActionAppearance::Subtle),
            "transparent" => Some(ActionAppearance::Transparent),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionAppearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// How strictly toolbars apply the "subtle buttons only" convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearancePolicy {
    /// Render whatever the descriptor asks for
    #[default]
    Advisory,
    /// Primary is downgraded to subtle inside toolbars
    Strict,
}

/// Result of applying a policy to a requested appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAppearance {
    pub appearance: ActionAppearance,
    /// Set when the policy replaced the requested value
    pub downgraded: bool,
}

impl AppearancePolicy {
    /// Appearance of a button rendered inside a toolbar.
    ///
    /// An unset appearance always becomes `Subtle`.
    pub fn toolbar_appearance(&self, requested: Option<ActionAppearance>) -> ResolvedAppearance {
        match (self, requested) {
            (AppearancePolicy::Strict, Some(ActionAppearance::Primary)) => ResolvedAppearance {
                appearance: ActionAppearance::Subtle,
                downgraded: true,
            },
            (_, requested) => ResolvedAppearance {
                appearance: requested.unwrap_or_default(),
                downgraded: false,
            },
        }
    }
}
