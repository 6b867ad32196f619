use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingClass {
    Rating,
    Readonly,
    Disabled,
}

impl RatingClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Readonly => "rating--readonly",
            Self::Disabled => "rating--disabled",
        }
    }
}

/// Attributes of the interactive region exposed as an ARIA slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAccessibility {
    pub role: String,
    pub aria_label: String,
    pub aria_disabled: bool,
    pub aria_readonly: bool,
    pub aria_valuenow: f64,
    pub aria_valuemin: f64,
    pub aria_valuemax: f64,
    pub tabindex: i32,
    pub classes: Vec<RatingClass>,
}

impl BaseAccessibility {
    #[must_use]
    pub fn new(label: &str, value: f64, max: u32, readonly: bool, disabled: bool) -> Self {
        let mut classes = vec![RatingClass::Rating];
        if readonly {
            classes.push(RatingClass::Readonly);
        }
        if disabled {
            classes.push(RatingClass::Disabled);
        }
        Self {
            role: "slider".to_owned(),
            aria_label: label.to_owned(),
            aria_disabled: disabled,
            aria_readonly: readonly,
            aria_valuenow: value,
            aria_valuemin: 0.0,
            aria_valuemax: f64::from(max),
            tabindex: if disabled { -1 } else { 0 },
            classes,
        }
    }

    /// Space-separated class attribute.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        self.classes
            .iter()
            .map(|class| class.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Attribute name/value pairs in DOM string form.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("role", self.role.clone()),
            ("aria-label", self.aria_label.clone()),
            ("aria-disabled", self.aria_disabled.to_string()),
            ("aria-readonly", self.aria_readonly.to_string()),
            ("aria-valuenow", self.aria_valuenow.to_string()),
            ("aria-valuemin", self.aria_valuemin.to_string()),
            ("aria-valuemax", self.aria_valuemax.to_string()),
            ("tabindex", self.tabindex.to_string()),
            ("class", self.class_attribute()),
        ]
    }
}
