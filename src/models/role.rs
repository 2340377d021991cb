use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "word")]
pub enum Role {
    SecretWord(String), // 共有の秘密の単語
    Impostor,           // 単語を知らない一人
}

impl Role {
    pub fn is_impostor(&self) -> bool {
        matches!(self, Role::Impostor)
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Role::SecretWord(word) => Some(word),
            Role::Impostor => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::SecretWord(word) => write!(f, "{}", word),
            Role::Impostor => write!(f, "IMPOSTOR"),
        }
    }
}
