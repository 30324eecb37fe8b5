//! Card carousel controller
//!
//! This module owns the ordered deck of cards shown on the home screen,
//! tracks which card is visible, and mediates every position change through
//! a single gated code path so the page indicator and prior/next controls
//! can never desynchronize from the visible card.
//!
//! The controller is reactive: indicator state is published through a
//! `watch` channel and discrete events (index changes, card activations)
//! through a `broadcast` channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch, RwLock};

use crate::cards::Card;

/// Duration of the animated slide between cards (matches the 0.35s
/// slide of the shipped design).
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(350);

/// Buffer size for the carousel event channel
const EVENT_BUFFER: usize = 16;

// =============================================================================
// Configuration
// =============================================================================

/// Carousel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// How long an animated move between indices takes
    pub transition: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            transition: DEFAULT_TRANSITION,
        }
    }
}

// =============================================================================
// Indicator Sync
// =============================================================================

/// Derived state for the page indicator and prior/next controls
///
/// This is a pure projection of `(current index, deck size)`. It is
/// recomputed on every load and every completed move and carries no
/// independent state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct IndicatorState {
    /// Whether the prior (left) control is enabled
    pub prior_enabled: bool,
    /// Whether the next (right) control is enabled
    pub next_enabled: bool,
    /// Position for the page indicator; `None` when the deck is empty
    pub page_position: Option<usize>,
    /// Total number of pages
    pub page_count: usize,
}

impl IndicatorState {
    /// Project indicator state from the current index and deck size
    ///
    /// Always defined: an empty deck disables both directions and has no
    /// page position.
    pub fn project(index: Option<usize>, count: usize) -> Self {
        match index {
            Some(i) if count > 0 => IndicatorState {
                prior_enabled: i > 0,
                next_enabled: i + 1 < count,
                page_position: Some(i),
                page_count: count,
            },
            _ => IndicatorState {
                prior_enabled: false,
                next_enabled: false,
                page_position: None,
                page_count: count,
            },
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Events broadcast by the carousel
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// A new deck was loaded and the position reset
    Loaded {
        /// Number of cards in the new deck
        total: usize,
    },
    /// A move completed and the visible card changed
    IndexChanged {
        /// Index before the move
        previous: usize,
        /// Index after the move
        current: usize,
        /// Number of cards in the deck
        total: usize,
    },
    /// The action element of the visible card was triggered
    CardActivated(Card),
}

// =============================================================================
// Move Outcomes
// =============================================================================

/// Why a move command was not carried out
///
/// Rejections are expected UI races (double taps, swipes at a boundary),
/// not errors, so they are reported as plain outcomes rather than `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The deck is empty; there is nothing to move between
    Empty,
    /// A transition is already in flight; the command was dropped
    Busy,
    /// Already at the first card
    AtStart,
    /// Already at the last card
    AtEnd,
    /// The requested index does not exist
    OutOfBounds(usize),
    /// The requested index is already current
    NoChange,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::Empty => write!(f, "deck is empty"),
            MoveRejection::Busy => write!(f, "transition in flight"),
            MoveRejection::AtStart => write!(f, "at first card"),
            MoveRejection::AtEnd => write!(f, "at last card"),
            MoveRejection::OutOfBounds(i) => write!(f, "index {} out of bounds", i),
            MoveRejection::NoChange => write!(f, "already at requested index"),
        }
    }
}

/// Result of a move command once it has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move ran to completion and the index changed
    Completed {
        /// Index before the move
        previous: usize,
        /// Index after the move
        current: usize,
    },
    /// The command was dropped without starting a transition
    Rejected(MoveRejection),
    /// The transition was cancelled by a `load` before it completed
    Cancelled,
}

impl MoveOutcome {
    /// Whether the move completed and changed the index
    pub fn is_completed(&self) -> bool {
        matches!(self, MoveOutcome::Completed { .. })
    }

    /// The rejection reason, if the command was rejected
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}

// =============================================================================
// Transition Sequencing
// =============================================================================

/// Direction of an animated move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices (slide left)
    Forward,
    /// Toward lower indices (slide right)
    Backward,
}

impl Direction {
    /// Direction used to animate a move from one index to another
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// A single accepted move, from acceptance to completion or cancellation
///
/// The epoch pins the transition to the deck it started on: a `load`
/// bumps the epoch, so a ticket that wakes to a different epoch discards
/// its pending index without emitting anything.
#[derive(Debug, Clone, Copy)]
struct TransitionTicket {
    epoch: u64,
    from: usize,
    to: usize,
    direction: Direction,
}

/// Requested kind of move, resolved to a target index under the state lock
#[derive(Debug, Clone, Copy)]
enum MoveRequest {
    Forward,
    Backward,
    Jump(usize),
}

// =============================================================================
// Carousel State
// =============================================================================

/// State owned by the controller
#[derive(Debug, Default)]
struct CarouselState {
    /// Ordered deck, fixed for the lifetime of one load
    cards: Vec<Card>,
    /// Visible index; meaningful only while `cards` is non-empty
    current: usize,
    /// True while an animated move is in flight
    transitioning: bool,
    /// Bumped by every load; cancels in-flight transitions
    epoch: u64,
}

impl CarouselState {
    fn index(&self) -> Option<usize> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }
}

// =============================================================================
// Carousel Controller
// =============================================================================

/// Single source of truth for which card is visible
///
/// All position changes go through the gated move path: commands that
/// arrive while a transition is in flight are dropped, not queued, so the
/// visible card always matches the settled index and animations never
/// back up behind rapid input.
///
/// # Example
///
/// ```no_run
/// use app_core::carousel::CarouselController;
/// use app_core::cards;
///
/// #[tokio::main]
/// async fn main() {
///     let carousel = CarouselController::new();
///     carousel.load(cards::default_deck()).await;
///
///     let outcome = carousel.advance().await;
///     assert!(outcome.is_completed());
///     assert_eq!(carousel.current_index().await, Some(1));
/// }
/// ```
pub struct CarouselController {
    /// Internal state
    state: Arc<RwLock<CarouselState>>,
    /// Configuration
    config: CarouselConfig,
    /// Indicator state sender
    indicators_tx: watch::Sender<IndicatorState>,
    /// Event broadcaster
    events_tx: broadcast::Sender<CarouselEvent>,
}

impl CarouselController {
    /// Create a controller with the default transition duration
    pub fn new() -> Self {
        Self::with_config(CarouselConfig::default())
    }

    /// Create a controller with an explicit configuration
    pub fn with_config(config: CarouselConfig) -> Self {
        let (indicators_tx, _) = watch::channel(IndicatorState::project(None, 0));
        let (events_tx, _) = broadcast::channel(EVENT_BUFFER);

        CarouselController {
            state: Arc::new(RwLock::new(CarouselState::default())),
            config,
            indicators_tx,
            events_tx,
        }
    }

    /// Replace the deck and reset the position
    ///
    /// Accepts any deck length, including zero and one. Cancels an
    /// in-flight transition (its completion never fires), resets the
    /// index to 0, and resyncs indicators immediately without animation.
    pub async fn load(&self, cards: Vec<Card>) {
        let mut state = self.state.write().await;
        state.cards = cards;
        state.current = 0;
        state.transitioning = false;
        state.epoch += 1;
        let total = state.cards.len();
        let index = state.index();
        drop(state);

        tracing::debug!(total, "carousel deck loaded");

        let _ = self.indicators_tx.send(IndicatorState::project(index, total));
        let _ = self.events_tx.send(CarouselEvent::Loaded { total });
    }

    /// Move to the next card
    ///
    /// Rejected at the last index, on an empty deck, or while a
    /// transition is in flight. Resolves once the transition settles.
    pub async fn advance(&self) -> MoveOutcome {
        self.perform(MoveRequest::Forward).await
    }

    /// Move to the prior card
    ///
    /// Symmetric to [`advance`](Self::advance); rejected at index 0.
    pub async fn retreat(&self) -> MoveOutcome {
        self.perform(MoveRequest::Backward).await
    }

    /// Move directly to an index, possibly skipping several positions
    ///
    /// Rejected when the index is out of bounds, equal to the current
    /// index, or while a transition is in flight. The animation direction
    /// is forward exactly when the target is past the current index.
    pub async fn jump_to(&self, index: usize) -> MoveOutcome {
        self.perform(MoveRequest::Jump(index)).await
    }

    /// Trigger the visible card's action
    ///
    /// Emits [`CarouselEvent::CardActivated`] with the card at the
    /// settled index. Activation is a content action independent of
    /// position, so it is honored even mid-transition. Returns `None`
    /// (and emits nothing) on an empty deck.
    pub async fn activate_current(&self) -> Option<Card> {
        let state = self.state.read().await;
        let card = state.index().and_then(|i| state.cards.get(i)).cloned()?;
        drop(state);

        tracing::debug!(title = %card.title, "card activated");
        let _ = self.events_tx.send(CarouselEvent::CardActivated(card.clone()));
        Some(card)
    }

    /// The settled index, or `None` when the deck is empty
    pub async fn current_index(&self) -> Option<usize> {
        self.state.read().await.index()
    }

    /// The card at the settled index
    pub async fn current_card(&self) -> Option<Card> {
        let state = self.state.read().await;
        state.index().and_then(|i| state.cards.get(i)).cloned()
    }

    /// Number of cards in the deck
    pub async fn card_count(&self) -> usize {
        self.state.read().await.cards.len()
    }

    /// Whether an animated move is in flight
    pub async fn is_transitioning(&self) -> bool {
        self.state.read().await.transitioning
    }

    /// Current indicator projection
    pub fn indicator_state(&self) -> IndicatorState {
        self.indicators_tx.borrow().clone()
    }

    /// Subscribe to indicator state changes
    pub fn subscribe_indicators(&self) -> watch::Receiver<IndicatorState> {
        self.indicators_tx.subscribe()
    }

    /// Subscribe to carousel events
    pub fn subscribe_events(&self) -> broadcast::Receiver<CarouselEvent> {
        self.events_tx.subscribe()
    }

    /// Gated move path shared by advance, retreat and jump
    async fn perform(&self, request: MoveRequest) -> MoveOutcome {
        let ticket = {
            let mut state = self.state.write().await;

            if state.cards.is_empty() {
                return MoveOutcome::Rejected(MoveRejection::Empty);
            }
            if state.transitioning {
                tracing::trace!("move dropped: transition in flight");
                return MoveOutcome::Rejected(MoveRejection::Busy);
            }

            let current = state.current;
            let last = state.cards.len() - 1;
            let target = match request {
                MoveRequest::Forward => {
                    if current >= last {
                        return MoveOutcome::Rejected(MoveRejection::AtEnd);
                    }
                    current + 1
                }
                MoveRequest::Backward => {
                    if current == 0 {
                        return MoveOutcome::Rejected(MoveRejection::AtStart);
                    }
                    current - 1
                }
                MoveRequest::Jump(index) => {
                    if index > last {
                        return MoveOutcome::Rejected(MoveRejection::OutOfBounds(index));
                    }
                    if index == current {
                        return MoveOutcome::Rejected(MoveRejection::NoChange);
                    }
                    index
                }
            };

            state.transitioning = true;
            TransitionTicket {
                epoch: state.epoch,
                from: current,
                to: target,
                direction: Direction::between(current, target),
            }
        };

        tracing::trace!(
            from = ticket.from,
            to = ticket.to,
            direction = ?ticket.direction,
            "transition started"
        );

        // The animated move: fixed duration, no timeout, cancellable only
        // by a load that bumps the epoch while we sleep.
        tokio::time::sleep(self.config.transition).await;

        let mut state = self.state.write().await;
        if state.epoch != ticket.epoch {
            tracing::debug!(from = ticket.from, to = ticket.to, "transition cancelled by load");
            return MoveOutcome::Cancelled;
        }

        state.current = ticket.to;
        state.transitioning = false;
        let total = state.cards.len();
        drop(state);

        let _ = self
            .indicators_tx
            .send(IndicatorState::project(Some(ticket.to), total));
        let _ = self.events_tx.send(CarouselEvent::IndexChanged {
            previous: ticket.from,
            current: ticket.to,
            total,
        });

        MoveOutcome::Completed {
            previous: ticket.from,
            current: ticket.to,
        }
    }
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new()
    }
}
