//! Sample decks used by the development server and tests.

use fd_review::Flashcard;

/// A deck definition: id, name and ordered cards
#[derive(Debug, Clone)]
pub struct SampleDeck {
    pub id: &'static str,
    pub name: &'static str,
    pub cards: Vec<Flashcard>,
}

fn cards(pairs: &[(&str, &str)]) -> Vec<Flashcard> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (front, back))| Flashcard::new((i + 1).to_string(), *front, *back))
        .collect()
}

/// Get sample decks for the dashboard
pub fn sample_decks() -> Vec<SampleDeck> {
    vec![
        SampleDeck {
            id: "1",
            name: "Spanish Basics",
            cards: cards(&[
                ("Hello", "Hola"),
                ("Goodbye", "Adiós"),
                ("Thank you", "Gracias"),
                ("Please", "Por favor"),
                ("Yes", "Sí"),
                ("No", "No"),
                ("Good morning", "Buenos días"),
                ("Good night", "Buenas noches"),
            ]),
        },
        SampleDeck {
            id: "2",
            name: "French Vocabulary",
            cards: cards(&[
                ("Cat", "Chat"),
                ("Dog", "Chien"),
                ("House", "Maison"),
                ("Water", "Eau"),
                ("Book", "Livre"),
            ]),
        },
        SampleDeck {
            id: "3",
            name: "Japanese Kanji",
            cards: cards(&[
                ("日", "Sun, day"),
                ("月", "Moon, month"),
                ("山", "Mountain"),
                ("川", "River"),
            ]),
        },
        SampleDeck {
            id: "4",
            name: "German Grammar",
            cards: cards(&[
                ("Definite article, masculine nominative", "der"),
                ("Definite article, feminine nominative", "die"),
                ("Definite article, neuter nominative", "das"),
            ]),
        },
    ]
}
