//! Detail content lookup
//!
//! Maps a card's category tag to the static detail content shown when the
//! card is activated. Unknown or missing tags resolve to nothing and the
//! host simply pushes no detail screen.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Wellness topics with detail content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailTopic {
    /// Curated playlists and podcasts
    MusicPodcasts,
    /// Guided breathing exercise
    Breathing,
    /// Coping with the loss of a patient
    Loss,
    /// Daily affirmations
    Affirmations,
}

impl DetailTopic {
    /// All topics in presentation order
    pub fn all() -> [DetailTopic; 4] {
        [
            DetailTopic::MusicPodcasts,
            DetailTopic::Breathing,
            DetailTopic::Loss,
            DetailTopic::Affirmations,
        ]
    }

    /// Resolve a category tag to a topic
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "music_podcasts" => Some(DetailTopic::MusicPodcasts),
            "breathing" => Some(DetailTopic::Breathing),
            "loss" => Some(DetailTopic::Loss),
            "affirmations" => Some(DetailTopic::Affirmations),
            _ => None,
        }
    }

    /// The category tag for this topic
    pub fn tag(&self) -> &'static str {
        match self {
            DetailTopic::MusicPodcasts => "music_podcasts",
            DetailTopic::Breathing => "breathing",
            DetailTopic::Loss => "loss",
            DetailTopic::Affirmations => "affirmations",
        }
    }

    /// Screen title for this topic
    pub fn title(&self) -> &'static str {
        match self {
            DetailTopic::MusicPodcasts => "Music & Podcasts",
            DetailTopic::Breathing => "Breathing Exercise",
            DetailTopic::Loss => "Coping with Loss",
            DetailTopic::Affirmations => "Daily Affirmations",
        }
    }

    /// Body text for this topic
    pub fn body(&self) -> &'static str {
        match self {
            DetailTopic::MusicPodcasts => {
                "Recommended Playlists:\n\
                 1. Calming Classical\n\
                 2. Nature Sounds\n\
                 3. Meditation Music\n\
                 \n\
                 Recommended Podcasts:\n\
                 1. Mindfulness in Medicine\n\
                 2. Healthcare Worker Wellness\n\
                 3. Stress Relief for Caregivers"
            }
            DetailTopic::Breathing => {
                "Follow this simple breathing exercise:\n\
                 \n\
                 1. Find a quiet place to sit or stand\n\
                 2. Close your eyes (if comfortable)\n\
                 3. Breathe in slowly through your nose for 4 counts\n\
                 4. Hold for 4 counts\n\
                 5. Exhale slowly through your mouth for 6 counts\n\
                 6. Repeat 5-10 times\n\
                 \n\
                 Remember: Your well-being matters. Take this moment for yourself."
            }
            DetailTopic::Loss => {
                "It's normal to feel grief after losing a patient. Here are some ways to cope:\n\
                 \n\
                 1. Acknowledge your feelings\n\
                 2. Share with trusted colleagues\n\
                 3. Write down your thoughts\n\
                 4. Remember it's okay to take breaks\n\
                 5. Consider joining a support group\n\
                 \n\
                 If you need professional support, please reach out to our counseling services."
            }
            DetailTopic::Affirmations => {
                "Daily Affirmations:\n\
                 \n\
                 1. I am making a difference in people's lives\n\
                 2. I am strong and capable\n\
                 3. I choose to be present in this moment\n\
                 4. My work has meaning and purpose\n\
                 5. I deserve rest and self-care\n\
                 6. I am doing my best, and that is enough\n\
                 \n\
                 Take a moment to breathe and repeat these to yourself."
            }
        }
    }
}

/// Resolved detail content for an activated card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailContent {
    /// Screen title
    pub title: String,
    /// Body text
    pub body: String,
}

impl DetailContent {
    /// Content for a topic
    pub fn for_topic(topic: DetailTopic) -> Self {
        DetailContent {
            title: topic.title().to_string(),
            body: topic.body().to_string(),
        }
    }
}

/// Resolve the detail content for a card via its category tag
pub fn lookup(card: &Card) -> Option<DetailContent> {
    let topic = card.category.as_deref().and_then(DetailTopic::from_tag)?;
    Some(DetailContent::for_topic(topic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::default_deck;

    #[test]
    fn test_tag_round_trip() {
        for topic in DetailTopic::all() {
            assert_eq!(DetailTopic::from_tag(topic.tag()), Some(topic));
        }
        assert_eq!(DetailTopic::from_tag("unknown"), None);
    }

    #[test]
    fn test_every_default_card_has_content() {
        for card in default_deck() {
            let content = lookup(&card).expect("default cards all route to content");
            assert!(!content.title.is_empty());
            assert!(!content.body.is_empty());
        }
    }

    #[test]
    fn test_lookup_without_category() {
        let card = Card {
            id: None,
            title: "Untagged".to_string(),
            description: "No detail screen".to_string(),
            icon: None,
            category: None,
        };
        assert_eq!(lookup(&card), None);
    }

    #[test]
    fn test_breathing_content() {
        let content = DetailContent::for_topic(DetailTopic::Breathing);
        assert_eq!(content.title, "Breathing Exercise");
        assert!(content.body.contains("Breathe in slowly through your nose"));
    }

    #[test]
    fn test_topic_serialization() {
        let json = serde_json::to_string(&DetailTopic::MusicPodcasts).unwrap();
        assert_eq!(json, "\"music_podcasts\"");
        let parsed: DetailTopic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DetailTopic::MusicPodcasts);
    }
}
