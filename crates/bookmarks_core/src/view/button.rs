//! Bookmark button view-model.

use crate::model::ids::ContentId;
use serde::{Deserialize, Serialize};

/// Label overrides for the bookmark button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    pub label: String,
    pub bookmarked_label: String,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            label: "Bookmark".to_string(),
            bookmarked_label: "Bookmarked".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonIcon {
    Filled,
    Empty,
}

impl ButtonIcon {
    /// Glyph the default template shows for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Filled => "\u{2605}",
            Self::Empty => "\u{2606}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    Bookmarked,
    Default,
}

impl ButtonState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bookmarked => "bookmarked",
            Self::Default => "default",
        }
    }
}

/// Data a template needs to render one bookmark button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub label: String,
    pub icon: ButtonIcon,
    pub css_state: ButtonState,
    pub content_id: ContentId,
}

/// Maps membership state to the button view-model.
pub fn button_view(content_id: ContentId, bookmarked: bool, options: &ButtonOptions) -> ButtonView {
    if bookmarked {
        ButtonView {
            label: options.bookmarked_label.clone(),
            icon: ButtonIcon::Filled,
            css_state: ButtonState::Bookmarked,
            content_id,
        }
    } else {
        ButtonView {
            label: options.label.clone(),
            icon: ButtonIcon::Empty,
            css_state: ButtonState::Default,
            content_id,
        }
    }
}
