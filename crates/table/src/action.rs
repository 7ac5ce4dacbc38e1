//! Row and bulk action descriptors
//!
//! An action is configuration the caller hands to the engine: a label, an
//! optional icon/variant for rendering, and an optional per-row visibility
//! predicate. The engine evaluates visibility; invocation is the caller's
//! side of the contract.

use gridkit_core::Entity;
use std::fmt;
use std::sync::Arc;

/// Visual weight of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    /// Neutral styling
    #[default]
    Default,
    /// Emphasized styling
    Primary,
    /// Destructive styling
    Danger,
}

/// Declarative description of one row action
#[derive(Clone)]
pub struct RowAction {
    /// Button label
    pub label: String,
    /// Optional icon name
    pub icon: Option<String>,
    /// Visual variant
    pub variant: ActionVariant,
    condition: Option<Arc<dyn Fn(&Entity) -> bool + Send + Sync>>,
}

impl fmt::Debug for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .field("conditional", &self.condition.is_some())
            .finish()
    }
}

impl RowAction {
    /// Create an always-visible action
    pub fn new(label: impl Into<String>) -> Self {
        RowAction {
            label: label.into(),
            icon: None,
            variant: ActionVariant::Default,
            condition: None,
        }
    }

    /// Builder: icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder: visual variant
    pub fn with_variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Builder: restrict visibility to rows satisfying `condition`
    pub fn visible_when(mut self, condition: impl Fn(&Entity) -> bool + Send + Sync + 'static) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Whether this action shows for `row`
    ///
    /// Actions without a condition always show.
    pub fn is_visible(&self, row: &Entity) -> bool {
        match &self.condition {
            Some(cond) => cond(row),
            None => true,
        }
    }
}
