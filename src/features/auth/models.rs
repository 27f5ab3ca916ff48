use serde::{Deserialize, Serialize};

/// Role attached to every account; gates which pages and actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
    /// Principal lecturer; reviews pending reports.
    Prl,
    /// Program leader.
    Pl,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
            Role::Prl => "Principal Lecturer",
            Role::Pl => "Program Leader",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Lecturer => write!(f, "lecturer"),
            Role::Prl => write!(f, "prl"),
            Role::Pl => write!(f, "pl"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "lecturer" => Ok(Role::Lecturer),
            "prl" => Ok(Role::Prl),
            "pl" => Ok(Role::Pl),
            other => Err(format!(
                "unknown role '{}' (expected student, lecturer, prl or pl)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(with = "crate::shared::serde_helpers::lenient_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The authenticated identity plus its bearer credential, held client-side.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
}
