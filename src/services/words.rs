/// Supplies the candidate secret words for a round.
///
/// Implementations are read-only; the session never mutates the list.
pub trait WordSource: Send + Sync {
    fn words(&self) -> &[String];
}

#[derive(Debug, Clone)]
pub struct StaticWords {
    words: Vec<String>,
}

const BUILTIN_WORDS: &[&str] = &[
    "Pizza",
    "Playa",
    "Guitarra",
    "Hospital",
    "Avión",
    "Biblioteca",
    "Elefante",
    "Volcán",
    "Cine",
    "Fútbol",
    "Chocolate",
    "Castillo",
    "Submarino",
    "Museo",
    "Circo",
    "Pirata",
    "Dentista",
    "Supermercado",
    "Astronauta",
    "Montaña",
];

impl StaticWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticWords {
    fn default() -> Self {
        Self::new(BUILTIN_WORDS.iter().copied())
    }
}

impl WordSource for StaticWords {
    fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_list_is_usable() {
        let words = StaticWords::default();
        assert!(!words.words().is_empty());
        assert!(words.words().iter().all(|w| !w.trim().is_empty()));
    }
}
