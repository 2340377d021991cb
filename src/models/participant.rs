use serde::{Deserialize, Serialize};

use super::role::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub role: Role,
    pub revealed: bool,
}

impl Participant {
    pub fn new(name: String, role: Role) -> Self {
        Self {
            name,
            role,
            revealed: false,
        }
    }
}
