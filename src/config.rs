//! View configuration.
//!
//! The caller builds a [`ViewConfiguration`] from the page controls on
//! every change and passes it to the view functions. Nothing keeps it
//! between calls; a changed control means a new value.

use serde::{Deserialize, Serialize};

use crate::attendance::MetricMode;
use crate::filter::KeywordFilter;

/// Pixels per hour in the attendance graph.
pub const DEFAULT_PX_PER_HOUR: f64 = 60.0;

/// What the layout does with a slot that ends before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeSpanPolicy {
    /// Keep the negative height and carry it into the following offsets.
    #[default]
    PassThrough,
    /// Fail with [`ViewError::NegativeSpan`](crate::error::ViewError::NegativeSpan).
    Reject,
}

/// Geometry options for the slot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Vertical scale.
    pub px_per_hour: f64,
    /// Handling of reversed time ranges.
    pub negative_spans: NegativeSpanPolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            px_per_hour: DEFAULT_PX_PER_HOUR,
            negative_spans: NegativeSpanPolicy::default(),
        }
    }
}

impl LayoutOptions {
    /// Sets the vertical scale.
    pub fn with_px_per_hour(mut self, px_per_hour: f64) -> Self {
        self.px_per_hour = px_per_hour;
        self
    }

    /// Sets the reversed-range policy.
    pub fn with_negative_spans(mut self, policy: NegativeSpanPolicy) -> Self {
        self.negative_spans = policy;
        self
    }
}

/// Current state of a view's controls.
///
/// # Example
/// ```
/// use rehearsal_views::attendance::MetricMode;
/// use rehearsal_views::config::ViewConfiguration;
///
/// let config = ViewConfiguration::new()
///     .with_keyword("act1 -cut")
///     .with_selected_scene(2)
///     .with_metric(MetricMode::ByLines);
/// assert!(config.filter().matches("act1 sc2"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfiguration {
    /// Scene name filter text.
    pub keyword: String,
    /// Scene whose appearances drive the ordering. `None` = natural order.
    pub selected_scene: Option<usize>,
    /// Attendance metric.
    pub metric: MetricMode,
    /// Appearance table shows actors instead of characters.
    pub by_actor: bool,
    /// Slot layout options.
    pub layout: LayoutOptions,
}

impl ViewConfiguration {
    /// Configuration with every control at its initial value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Selects a scene.
    pub fn with_selected_scene(mut self, scene: usize) -> Self {
        self.selected_scene = Some(scene);
        self
    }

    /// Clears the scene selection.
    pub fn without_selection(mut self) -> Self {
        self.selected_scene = None;
        self
    }

    /// Sets the metric.
    pub fn with_metric(mut self, metric: MetricMode) -> Self {
        self.metric = metric;
        self
    }

    /// Shows actors instead of characters.
    pub fn with_by_actor(mut self, by_actor: bool) -> Self {
        self.by_actor = by_actor;
        self
    }

    /// Sets the layout options.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Compiles the keyword.
    pub fn filter(&self) -> KeywordFilter {
        KeywordFilter::compile(&self.keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ViewConfiguration::new();
        assert_eq!(c.keyword, "");
        assert_eq!(c.selected_scene, None);
        assert_eq!(c.metric, MetricMode::ByCharacters);
        assert!(!c.by_actor);
        assert_eq!(c.layout.px_per_hour, DEFAULT_PX_PER_HOUR);
        assert_eq!(c.layout.negative_spans, NegativeSpanPolicy::PassThrough);
        assert!(c.filter().is_empty());
    }

    #[test]
    fn test_builder() {
        let c = ViewConfiguration::new()
            .with_keyword("a -b")
            .with_selected_scene(1)
            .with_metric(MetricMode::ByActors)
            .with_by_actor(true)
            .with_layout(LayoutOptions::default().with_px_per_hour(90.0));
        assert_eq!(c.selected_scene, Some(1));
        assert_eq!(c.without_selection().selected_scene, None);
    }

    #[test]
    fn test_partial_json() {
        let c: ViewConfiguration =
            serde_json::from_str(r#"{"keyword": "act2", "metric": "by_lines"}"#).unwrap();
        assert_eq!(c.keyword, "act2");
        assert_eq!(c.metric, MetricMode::ByLines);
        assert_eq!(c.layout, LayoutOptions::default());

        let c: ViewConfiguration =
            serde_json::from_str(r#"{"layout": {"negative_spans": "reject"}}"#).unwrap();
        assert_eq!(c.layout.negative_spans, NegativeSpanPolicy::Reject);
        assert_eq!(c.layout.px_per_hour, DEFAULT_PX_PER_HOUR);
    }
}
