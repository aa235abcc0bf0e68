//! Star rating selection state.
//!
//! DESIGN
//! ======
//! `RatingState` is the whole behaviour of the rating widget with the DOM left
//! out: the committed rating, the hover preview, and which units are lit.
//! Both the Leptos component and the imperative page binding render from it,
//! so the invariants below hold however the widget is mounted.
//!
//! - `0 <= rating <= max_stars` at all times.
//! - Outside a hover preview, the number of active units equals `rating`.
//! - A readonly state never changes after construction.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::lenient::{self, Rounding};

/// Name of the DOM event dispatched on the container after a commit.
pub const RATING_CHANGED_EVENT: &str = "ratingChanged";

/// Glyph rendered for each unit.
pub const STAR_GLYPH: &str = "\u{2605}";

pub const DEFAULT_MAX_STARS: u32 = 5;

/// Presentation size of the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl StarSize {
    /// Size named by an options member; anything unrecognised is medium.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value.as_str().map(str::to_ascii_lowercase).as_deref() {
            Some("small") => Self::Small,
            Some("large") => Self::Large,
            _ => Self::Medium,
        }
    }

    /// CSS modifier class applied next to `star-rating`.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Construction options, deserializable from a page script's options object.
///
/// Deserializing never fails on a member's value: fractional counts are
/// rounded, and `null` or mistyped members take their default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRatingOptions", rename_all = "camelCase")]
pub struct RatingOptions {
    pub max_stars: u32,
    pub initial_rating: u32,
    pub readonly: bool,
    pub size: StarSize,
    /// Name of a form field that mirrors every committed rating.
    pub input: Option<String>,
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            max_stars: DEFAULT_MAX_STARS,
            initial_rating: 0,
            readonly: false,
            size: StarSize::Medium,
            input: None,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawRatingOptions {
    max_stars: Value,
    initial_rating: Value,
    readonly: Value,
    size: Value,
    input: Value,
}

impl From<RawRatingOptions> for RatingOptions {
    fn from(raw: RawRatingOptions) -> Self {
        Self {
            max_stars: lenient::count_or(&raw.max_stars, DEFAULT_MAX_STARS, Rounding::Down),
            // A fractional rating lights the partly covered unit too.
            initial_rating: lenient::count_or(&raw.initial_rating, 0, Rounding::Up),
            readonly: lenient::truthy(&raw.readonly),
            size: StarSize::from_value(&raw.size),
            input: lenient::string(&raw.input),
        }
    }
}

/// Payload of the `ratingChanged` notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChanged {
    pub rating: u32,
}

/// One rendered unit of the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarUnit {
    /// 1-based position, also written to `data-rating`.
    pub position: u32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingState {
    max_stars: u32,
    rating: u32,
    highlighted: u32,
    readonly: bool,
    size: StarSize,
}

impl RatingState {
    /// Build the state for `options`.
    ///
    /// `max_stars` is raised to at least 1 and `initial_rating` is clamped into
    /// `[0, max_stars]`.
    #[must_use]
    pub fn new(options: &RatingOptions) -> Self {
        let max_stars = options.max_stars.max(1);
        let rating = options.initial_rating.min(max_stars);
        Self {
            max_stars,
            rating,
            highlighted: rating,
            readonly: options.readonly,
            size: options.size,
        }
    }

    #[must_use]
    pub fn max_stars(&self) -> u32 {
        self.max_stars
    }

    #[must_use]
    pub fn rating(&self) -> u32 {
        self.rating
    }

    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    #[must_use]
    pub fn size(&self) -> StarSize {
        self.size
    }

    /// Class list for the container, e.g. `star-rating medium`, with
    /// `readonly` appended for a display-only widget.
    #[must_use]
    pub fn container_class(&self) -> String {
        let mut class = format!("star-rating {}", self.size.class_name());
        if self.readonly {
            class.push_str(" readonly");
        }
        class
    }

    /// Number of units currently lit.
    #[must_use]
    pub fn highlighted(&self) -> u32 {
        self.highlighted
    }

    /// Light the first `n` units. Presentation only; `rating` is untouched.
    pub fn highlight(&mut self, n: u32) {
        self.highlighted = n.min(self.max_stars);
    }

    /// Pointer entered the unit at `position`. Ignored when readonly.
    pub fn preview(&mut self, position: u32) {
        if self.readonly {
            return;
        }
        self.highlight(position);
    }

    /// Pointer left the widget: fall back to the committed rating.
    pub fn leave(&mut self) {
        if self.readonly {
            return;
        }
        self.highlighted = self.rating;
    }

    /// Commit `n` as the rating.
    ///
    /// Returns the notification to publish, or `None` when readonly. Values
    /// above `max_stars` are clamped.
    pub fn set_rating(&mut self, n: u32) -> Option<RatingChanged> {
        if self.readonly {
            return None;
        }
        self.rating = n.min(self.max_stars);
        self.highlighted = self.rating;
        Some(RatingChanged { rating: self.rating })
    }

    /// Whether the unit at 0-based `index` is lit.
    #[must_use]
    pub fn is_active(&self, index: u32) -> bool {
        index < self.highlighted
    }

    /// Units in display order.
    pub fn units(&self) -> impl Iterator<Item = StarUnit> + '_ {
        (1..=self.max_stars).map(|position| StarUnit {
            position,
            active: self.is_active(position - 1),
        })
    }

    /// Count of lit units, as a renderer would see them.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.units().filter(|unit| unit.active).count()
    }
}

impl Default for RatingState {
    fn default() -> Self {
        Self::new(&RatingOptions::default())
    }
}
