use std::fmt;

use serde::{Deserialize, Serialize};

/// The two dashboards an actor can be routed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

/// Identity of the current actor as supplied by the session provider.
///
/// Appointment filtering only ever looks at `name`; `avatar` is carried for
/// the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: String,
}

impl SessionUser {
    pub fn patient(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: Role::Patient,
            avatar: String::new(),
        }
    }

    pub fn doctor(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: Role::Doctor,
            avatar: String::new(),
        }
    }

    pub fn is_doctor(&self) -> bool {
        self.role == Role::Doctor
    }
}
