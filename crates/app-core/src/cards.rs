//! Card model and deck decoding
//!
//! Cards are short topic summaries supplied to the carousel as an ordered
//! deck. Decks arrive as JSON descriptors (or from the built-in default
//! deck) and are validated here, before the carousel ever sees them: the
//! controller treats every card it receives as already valid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A single topic card
///
/// Immutable once loaded. The optional `category` tag routes activation
/// events to detail content; cards without a tag are browsable but have
/// no detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Opaque identifier, unique within a deck when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Symbolic reference to an icon resource
    #[serde(
        default,
        rename = "imageSystemName",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon: Option<String>,
    /// Category tag used to route activation to detail content
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Deck decoding and validation errors
#[derive(Debug, Error)]
pub enum DeckError {
    /// The descriptor was not valid JSON for a card list
    #[error("invalid deck descriptor: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required display field was present but empty
    #[error("card {index} has an empty {field}")]
    EmptyField {
        /// Position of the offending card in the deck
        index: usize,
        /// Name of the empty field
        field: &'static str,
    },

    /// Two cards in the same deck share an identifier
    #[error("duplicate card id: {0}")]
    DuplicateId(String),
}

/// Decode and validate a JSON deck descriptor
///
/// The descriptor is a JSON array of card objects:
///
/// ```json
/// [{ "id": "breathing", "title": "DIFFICULT INTERACTION",
///    "description": "...", "imageSystemName": "lungs.fill",
///    "type": "breathing" }]
/// ```
///
/// Title and description are required and must be non-empty; ids must be
/// unique when present. An empty array is a valid (empty) deck.
pub fn decode_deck(json: &str) -> Result<Vec<Card>, DeckError> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    validate_deck(&cards)?;
    tracing::debug!(total = cards.len(), "deck decoded");
    Ok(cards)
}

/// Validate an already-decoded deck
pub fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    let mut seen = HashSet::new();
    for (index, card) in cards.iter().enumerate() {
        if card.title.trim().is_empty() {
            return Err(DeckError::EmptyField {
                index,
                field: "title",
            });
        }
        if card.description.trim().is_empty() {
            return Err(DeckError::EmptyField {
                index,
                field: "description",
            });
        }
        if let Some(id) = &card.id {
            if !seen.insert(id.clone()) {
                return Err(DeckError::DuplicateId(id.clone()));
            }
        }
    }
    Ok(())
}

/// The built-in deck shown when no external descriptor is supplied
///
/// Four wellness topics for healthcare workers, in browse order.
pub fn default_deck() -> Vec<Card> {
    vec![
        Card {
            id: Some("music-podcasts".to_string()),
            title: "MUSIC/PODCASTS".to_string(),
            description: "Help users feel understood and empathized with".to_string(),
            icon: Some("headphones".to_string()),
            category: Some("music_podcasts".to_string()),
        },
        Card {
            id: Some("breathing".to_string()),
            title: "DIFFICULT INTERACTION".to_string(),
            description: "A short, guided breathing exercise to help calm the nervous \
                          system after being yelled at or facing a challenging \
                          patient/family interaction"
                .to_string(),
            icon: Some("lungs.fill".to_string()),
            category: Some("breathing".to_string()),
        },
        Card {
            id: Some("loss".to_string()),
            title: "COPING WITH LOSS".to_string(),
            description: "A reflection exercise to process emotions after a patient \
                          passes away, helping users acknowledge their grief without \
                          suppressing it"
                .to_string(),
            icon: Some("heart.fill".to_string()),
            category: Some("loss".to_string()),
        },
        Card {
            id: Some("affirmations".to_string()),
            title: "AFFIRMATIONS".to_string(),
            description: "For busy, on-the-go workers".to_string(),
            icon: Some("quote.bubble.fill".to_string()),
            category: Some("affirmations".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_deck() {
        let json = r#"[
            {
                "id": "breathing",
                "title": "DIFFICULT INTERACTION",
                "description": "A short, guided breathing exercise",
                "imageSystemName": "lungs.fill",
                "type": "breathing"
            },
            {
                "title": "AFFIRMATIONS",
                "description": "For busy, on-the-go workers"
            }
        ]"#;

        let deck = decode_deck(json).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].id.as_deref(), Some("breathing"));
        assert_eq!(deck[0].icon.as_deref(), Some("lungs.fill"));
        assert_eq!(deck[0].category.as_deref(), Some("breathing"));
        // Optional fields absent
        assert_eq!(deck[1].id, None);
        assert_eq!(deck[1].icon, None);
        assert_eq!(deck[1].category, None);
    }

    #[test]
    fn test_decode_empty_deck() {
        assert!(decode_deck("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(matches!(decode_deck("not json"), Err(DeckError::Parse(_))));
        // Missing required field
        assert!(matches!(
            decode_deck(r#"[{"title": "X"}]"#),
            Err(DeckError::Parse(_))
        ));
    }

    #[test]
    fn test_decode_rejects_empty_title() {
        let json = r#"[{"title": "  ", "description": "ok"}]"#;
        assert!(matches!(
            decode_deck(json),
            Err(DeckError::EmptyField {
                index: 0,
                field: "title"
            })
        ));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "title": "One", "description": "d"},
            {"id": "a", "title": "Two", "description": "d"}
        ]"#;
        match decode_deck(json) {
            Err(DeckError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_deck_shape() {
        let deck = default_deck();
        assert_eq!(deck.len(), 4);
        assert!(validate_deck(&deck).is_ok());
        // Every built-in card routes somewhere and has an icon.
        for card in &deck {
            assert!(card.category.is_some());
            assert!(card.icon.is_some());
        }
        assert_eq!(deck[0].title, "MUSIC/PODCASTS");
        assert_eq!(deck[3].category.as_deref(), Some("affirmations"));
    }

    #[test]
    fn test_card_round_trips_through_json() {
        let card = default_deck().remove(1);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("imageSystemName"));
        assert!(json.contains("\"type\""));
        let parsed: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, parsed);
    }
}
