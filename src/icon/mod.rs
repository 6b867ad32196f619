//! Companion glyph element, reduced to its accessibility contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconRole {
    Img,
    Presentation,
}

/// Attributes a host applies to one glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAccessibility {
    pub role: IconRole,
    pub aria_label: Option<String>,
    pub aria_hidden: bool,
}

/// One rating glyph. An empty label makes it decorative.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatingIcon {
    label: String,
}

impl RatingIcon {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    #[must_use]
    pub fn is_decorative(&self) -> bool {
        self.label.is_empty()
    }

    #[must_use]
    pub fn accessibility(&self) -> IconAccessibility {
        if self.is_decorative() {
            IconAccessibility {
                role: IconRole::Presentation,
                aria_label: None,
                aria_hidden: true,
            }
        } else {
            IconAccessibility {
                role: IconRole::Img,
                aria_label: Some(self.label.clone()),
                aria_hidden: false,
            }
        }
    }
}
