//! End-to-end carousel flow tests
//!
//! Drives the full path a user takes: decode a deck, browse it with
//! swipes and jumps, activate a card, and land on its detail content.

use std::sync::Arc;
use std::time::Duration;

use app_core::carousel::{CarouselConfig, CarouselController, CarouselEvent, MoveOutcome};
use app_core::cards;
use app_core::DetailTopic;
use app_ui::navigation::Router;
use app_ui::screens::{DetailScreen, HomeScreen, SwipeDirection};
use app_ui::Route;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}

fn fast_carousel() -> Arc<CarouselController> {
    Arc::new(CarouselController::with_config(CarouselConfig {
        transition: Duration::from_millis(10),
    }))
}

const DECK_JSON: &str = r#"[
    {
        "id": "music-podcasts",
        "title": "MUSIC/PODCASTS",
        "description": "Help users feel understood and empathized with",
        "imageSystemName": "headphones",
        "type": "music_podcasts"
    },
    {
        "id": "breathing",
        "title": "DIFFICULT INTERACTION",
        "description": "A short, guided breathing exercise",
        "imageSystemName": "lungs.fill",
        "type": "breathing"
    },
    {
        "id": "loss",
        "title": "COPING WITH LOSS",
        "description": "A reflection exercise to process emotions",
        "imageSystemName": "heart.fill",
        "type": "loss"
    },
    {
        "id": "affirmations",
        "title": "AFFIRMATIONS",
        "description": "For busy, on-the-go workers",
        "imageSystemName": "quote.bubble.fill",
        "type": "affirmations"
    }
]"#;

/// Browse a freshly decoded deck from the first card to a detail screen.
#[tokio::test]
async fn test_browse_and_activate_flow() {
    init_tracing();

    let deck = cards::decode_deck(DECK_JSON).unwrap();
    let carousel = fast_carousel();
    let mut screen = HomeScreen::new(Arc::clone(&carousel));
    let mut events = carousel.subscribe_events();

    carousel.load(deck).await;
    assert!(matches!(
        events.try_recv(),
        Ok(CarouselEvent::Loaded { total: 4 })
    ));

    // Freshly loaded: first card visible, only the next control enabled.
    let view = screen.view().await;
    assert_eq!(view.card.as_ref().unwrap().title, "MUSIC/PODCASTS");
    assert!(view.prior_arrow.hidden);
    assert!(!view.next_arrow.hidden);

    // Swipe left to the second card.
    assert_eq!(
        screen.handle_swipe(SwipeDirection::Left).await,
        MoveOutcome::Completed {
            previous: 0,
            current: 1
        }
    );
    assert_eq!(
        events.try_recv().unwrap(),
        CarouselEvent::IndexChanged {
            previous: 0,
            current: 1,
            total: 4
        }
    );

    // Jump straight to the last card.
    assert!(carousel.jump_to(3).await.is_completed());
    assert_eq!(
        events.try_recv().unwrap(),
        CarouselEvent::IndexChanged {
            previous: 1,
            current: 3,
            total: 4
        }
    );
    let view = screen.view().await;
    assert!(view.next_arrow.hidden);
    assert_eq!(view.page_indicator.current_page, Some(3));

    // Activate the visible card and follow it to detail content.
    let route = screen.activate().await.unwrap();
    assert_eq!(
        route,
        Route::Detail {
            topic: DetailTopic::Affirmations
        }
    );
    match events.try_recv().unwrap() {
        CarouselEvent::CardActivated(card) => {
            assert_eq!(card.id.as_deref(), Some("affirmations"));
        }
        other => panic!("expected activation event, got {:?}", other),
    }

    let detail = DetailScreen::for_route(&route).unwrap().view();
    assert_eq!(detail.title, "Daily Affirmations");
    assert!(detail.body.contains("I am doing my best, and that is enough"));

    // The pushed route survives a path round trip.
    let router = Router::new();
    assert_eq!(router.match_path(&route.to_path()), route);

    // Back returns to the carousel.
    assert!(screen.navigation.go_back());
    assert_eq!(*screen.navigation.current_route(), Route::Home);
}

/// A load that arrives mid-transition cancels the move without an event
/// and snaps to the new deck.
#[tokio::test]
async fn test_reload_mid_transition_snaps_to_new_deck() {
    init_tracing();

    let carousel = Arc::new(CarouselController::with_config(CarouselConfig {
        transition: Duration::from_millis(100),
    }));
    carousel.load(cards::default_deck()).await;
    let mut events = carousel.subscribe_events();

    let mover = {
        let carousel = Arc::clone(&carousel);
        tokio::spawn(async move { carousel.advance().await })
    };
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(carousel.is_transitioning().await);

    let short_deck = cards::decode_deck(
        r#"[
            {"title": "ONE", "description": "first"},
            {"title": "TWO", "description": "second"}
        ]"#,
    )
    .unwrap();
    carousel.load(short_deck).await;

    assert_eq!(mover.await.unwrap(), MoveOutcome::Cancelled);
    assert_eq!(carousel.current_index().await, Some(0));
    assert_eq!(carousel.card_count().await, 2);
    assert!(!carousel.is_transitioning().await);

    // Only the load announcement made it out.
    assert!(matches!(
        events.try_recv(),
        Ok(CarouselEvent::Loaded { total: 2 })
    ));
    assert!(events.try_recv().is_err());
}

/// Rapid input during a transition never queues extra moves.
#[tokio::test]
async fn test_rapid_swipes_settle_on_adjacent_card() {
    init_tracing();

    let carousel = fast_carousel();
    let screen = HomeScreen::new(Arc::clone(&carousel));
    carousel.load(cards::default_deck()).await;

    let (a, b, c) = tokio::join!(
        screen.handle_swipe(SwipeDirection::Left),
        screen.handle_swipe(SwipeDirection::Left),
        screen.handle_swipe(SwipeDirection::Left)
    );
    let completed = [a, b, c].iter().filter(|o| o.is_completed()).count();
    assert_eq!(completed, 1);
    assert_eq!(carousel.current_index().await, Some(1));
}
