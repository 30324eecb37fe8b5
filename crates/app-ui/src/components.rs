//! UI component library
//!
//! Components are defined as Rust structs with serializable properties
//! that the frontend renders. Carousel-facing components are pure
//! projections of controller state: they are rebuilt from
//! [`IndicatorState`] and the current [`Card`] on every change and hold
//! no state of their own.

use app_core::{Card, IndicatorState};
use serde::{Deserialize, Serialize};

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Label on every card's action button
pub const CARD_ACTION_LABEL: &str = "Click here";

/// Hint shown under the page indicator
pub const SWIPE_HINT: &str = "\u{2190} Swipe right or left \u{2192}";

// =============================================================================
// Card View
// =============================================================================

/// Props for a single card view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardProps {
    /// Symbolic icon reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Card title
    pub title: String,
    /// Card description
    pub description: String,
    /// Label on the action button
    pub action_label: String,
    /// Handler invoked when the action button is tapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_action: Option<EventHandler>,
}

impl CardProps {
    /// Build props for a card
    pub fn from_card(card: &Card) -> Self {
        CardProps {
            icon: card.icon.clone(),
            title: card.title.clone(),
            description: card.description.clone(),
            action_label: CARD_ACTION_LABEL.to_string(),
            on_action: None,
        }
    }

    /// Set the action handler
    pub fn with_action(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_action = Some(handler.into());
        self
    }
}

// =============================================================================
// Page Indicator
// =============================================================================

/// Props for the page indicator dots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageIndicatorProps {
    /// Number of pages
    pub page_count: usize,
    /// Highlighted page; `None` when the deck is empty
    pub current_page: Option<usize>,
    /// Hidden entirely when there is nothing to page through
    pub hidden: bool,
}

impl PageIndicatorProps {
    /// Build props from the carousel's indicator projection
    pub fn from_state(state: &IndicatorState) -> Self {
        PageIndicatorProps {
            page_count: state.page_count,
            current_page: state.page_position,
            hidden: state.page_count == 0,
        }
    }
}

// =============================================================================
// Prior/Next Arrows
// =============================================================================

/// Which side of the carousel an arrow control sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowSide {
    /// Prior (left) control
    Prior,
    /// Next (right) control
    Next,
}

impl ArrowSide {
    /// Glyph rendered for this side
    pub fn glyph(&self) -> &'static str {
        match self {
            ArrowSide::Prior => "\u{2039}",
            ArrowSide::Next => "\u{203a}",
        }
    }
}

/// Props for a prior/next arrow button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavArrowProps {
    /// Which side this arrow sits on
    pub side: ArrowSide,
    /// Glyph to render
    pub glyph: String,
    /// Hidden when the move in this direction is disabled
    pub hidden: bool,
}

impl NavArrowProps {
    /// Build props for one arrow from the indicator projection
    pub fn from_state(side: ArrowSide, state: &IndicatorState) -> Self {
        let enabled = match side {
            ArrowSide::Prior => state.prior_enabled,
            ArrowSide::Next => state.next_enabled,
        };
        NavArrowProps {
            side,
            glyph: side.glyph().to_string(),
            hidden: !enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::cards::default_deck;

    #[test]
    fn test_card_props_from_card() {
        let deck = default_deck();
        let props = CardProps::from_card(&deck[1]).with_action("activate-card");

        assert_eq!(props.icon.as_deref(), Some("lungs.fill"));
        assert_eq!(props.title, "DIFFICULT INTERACTION");
        assert_eq!(props.action_label, CARD_ACTION_LABEL);
        assert_eq!(props.on_action.as_deref(), Some("activate-card"));
    }

    #[test]
    fn test_page_indicator_from_state() {
        let props = PageIndicatorProps::from_state(&IndicatorState::project(Some(2), 4));
        assert_eq!(props.page_count, 4);
        assert_eq!(props.current_page, Some(2));
        assert!(!props.hidden);

        let empty = PageIndicatorProps::from_state(&IndicatorState::project(None, 0));
        assert!(empty.hidden);
        assert_eq!(empty.current_page, None);
    }

    #[test]
    fn test_arrows_hide_at_boundaries() {
        let at_start = IndicatorState::project(Some(0), 4);
        assert!(NavArrowProps::from_state(ArrowSide::Prior, &at_start).hidden);
        assert!(!NavArrowProps::from_state(ArrowSide::Next, &at_start).hidden);

        let at_end = IndicatorState::project(Some(3), 4);
        assert!(!NavArrowProps::from_state(ArrowSide::Prior, &at_end).hidden);
        assert!(NavArrowProps::from_state(ArrowSide::Next, &at_end).hidden);

        let single = IndicatorState::project(Some(0), 1);
        assert!(NavArrowProps::from_state(ArrowSide::Prior, &single).hidden);
        assert!(NavArrowProps::from_state(ArrowSide::Next, &single).hidden);
    }

    #[test]
    fn test_arrow_glyphs() {
        assert_eq!(ArrowSide::Prior.glyph(), "‹");
        assert_eq!(ArrowSide::Next.glyph(), "›");
    }

    #[test]
    fn test_card_props_serialization_skips_absent_fields() {
        let card = Card {
            id: None,
            title: "T".to_string(),
            description: "D".to_string(),
            icon: None,
            category: None,
        };
        let json = serde_json::to_string(&CardProps::from_card(&card)).unwrap();
        assert!(!json.contains("icon"));
        assert!(!json.contains("on_action"));
    }
}
