//! Application screens
//!
//! Glue between the carousel controller, the component props, and
//! navigation. The home screen translates raw input (swipes, arrow taps)
//! into carousel commands and pushes a detail screen when a card with a
//! known category is activated.

use std::sync::Arc;

use app_core::{
    Card, CarouselController, CarouselEvent, DetailContent, DetailTopic, MoveOutcome,
};
use serde::{Deserialize, Serialize};

use crate::components::{ArrowSide, CardProps, NavArrowProps, PageIndicatorProps, SWIPE_HINT};
use crate::navigation::{NavigationAnimation, NavigationState, Route};

// =============================================================================
// Gesture/Command Adapter
// =============================================================================

/// Direction of a recognized swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moved left
    Left,
    /// Finger moved right
    Right,
}

/// Commands the home screen can send to the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselCommand {
    /// Move to the next card
    Advance,
    /// Move to the prior card
    Retreat,
    /// Move directly to an index (indicator tap)
    JumpTo(usize),
}

impl CarouselCommand {
    /// Map a swipe to a directional command
    ///
    /// Swiping left reveals the next card; swiping right the prior one.
    pub fn from_swipe(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => CarouselCommand::Advance,
            SwipeDirection::Right => CarouselCommand::Retreat,
        }
    }
}

// =============================================================================
// Home Screen
// =============================================================================

/// Rendered state of the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    /// Screen title
    pub title: String,
    /// Props for the visible card; `None` when the deck is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardProps>,
    /// Page indicator dots
    pub page_indicator: PageIndicatorProps,
    /// Prior (left) arrow
    pub prior_arrow: NavArrowProps,
    /// Next (right) arrow
    pub next_arrow: NavArrowProps,
    /// Swipe hint label
    pub swipe_hint: String,
}

/// The home carousel screen
///
/// Owns its navigation state and holds a handle to the carousel
/// controller constructed for this screen; both are torn down with it.
pub struct HomeScreen {
    /// Carousel behind this screen
    carousel: Arc<CarouselController>,
    /// Navigation state for this screen hierarchy
    pub navigation: NavigationState,
}

impl HomeScreen {
    /// Create the home screen around a carousel controller
    pub fn new(carousel: Arc<CarouselController>) -> Self {
        HomeScreen {
            carousel,
            navigation: NavigationState::new(),
        }
    }

    /// The carousel behind this screen
    pub fn carousel(&self) -> &Arc<CarouselController> {
        &self.carousel
    }

    /// Dispatch a command to the carousel and resolve once it settles
    pub async fn handle_command(&self, command: CarouselCommand) -> MoveOutcome {
        match command {
            CarouselCommand::Advance => self.carousel.advance().await,
            CarouselCommand::Retreat => self.carousel.retreat().await,
            CarouselCommand::JumpTo(index) => self.carousel.jump_to(index).await,
        }
    }

    /// Translate a swipe into a command and dispatch it
    pub async fn handle_swipe(&self, direction: SwipeDirection) -> MoveOutcome {
        self.handle_command(CarouselCommand::from_swipe(direction)).await
    }

    /// Activate the visible card and push its detail screen
    ///
    /// Returns the pushed route, or `None` when the deck is empty or the
    /// card has no known category.
    pub async fn activate(&mut self) -> Option<Route> {
        let card = self.carousel.activate_current().await?;
        self.push_detail(&card)
    }

    /// React to a carousel event from the broadcast channel
    ///
    /// Only `CardActivated` affects navigation; index changes and loads
    /// are reflected through the indicator projection instead.
    pub fn handle_event(&mut self, event: &CarouselEvent) -> Option<Route> {
        match event {
            CarouselEvent::CardActivated(card) => self.push_detail(card),
            _ => None,
        }
    }

    /// Build the current view
    pub async fn view(&self) -> HomeView {
        let indicators = self.carousel.indicator_state();
        let card = self
            .carousel
            .current_card()
            .await
            .map(|card| CardProps::from_card(&card).with_action("activate-current"));

        HomeView {
            title: Route::Home.title().to_string(),
            card,
            page_indicator: PageIndicatorProps::from_state(&indicators),
            prior_arrow: NavArrowProps::from_state(ArrowSide::Prior, &indicators),
            next_arrow: NavArrowProps::from_state(ArrowSide::Next, &indicators),
            swipe_hint: SWIPE_HINT.to_string(),
        }
    }

    fn push_detail(&mut self, card: &Card) -> Option<Route> {
        let topic = card.category.as_deref().and_then(DetailTopic::from_tag)?;
        let route = Route::Detail { topic };
        self.navigation
            .navigate_with_animation(route, NavigationAnimation::Push);
        Some(route)
    }
}

// =============================================================================
// Detail Screen
// =============================================================================

/// Rendered state of a detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    /// Screen title
    pub title: String,
    /// Body text
    pub body: String,
}

/// A pushed detail screen for one topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailScreen {
    /// Topic this screen presents
    pub topic: DetailTopic,
}

impl DetailScreen {
    /// Create a detail screen for a topic
    pub fn new(topic: DetailTopic) -> Self {
        DetailScreen { topic }
    }

    /// Create a detail screen from a route, if it is a detail route
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Detail { topic } => Some(DetailScreen::new(*topic)),
            _ => None,
        }
    }

    /// Build the view
    pub fn view(&self) -> DetailView {
        let DetailContent { title, body } = DetailContent::for_topic(self.topic);
        DetailView { title, body }
    }
}
