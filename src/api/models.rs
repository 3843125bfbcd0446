use serde::{Deserialize, Serialize};

/// A person record as the backend returns it. All nine fields are always
/// present on the wire; the optional ones default to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned identifier, absent until the record is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub nom: String,
    pub prenom: String,
    pub age: u32,
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub poste: String,
    #[serde(default)]
    pub departement: String,
    #[serde(rename = "dateEmbauche", default)]
    pub date_embauche: String,
}

/// Validated request body for create and update. Updates are full
/// replacements, so every field is sent every time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonPayload {
    pub name: String,
    pub nom: String,
    pub prenom: String,
    pub age: u32,
    pub email: String,
    pub telephone: String,
    pub poste: String,
    pub departement: String,
    #[serde(rename = "dateEmbauche")]
    pub date_embauche: String,
}

/// Response of `GET /persons/count`
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCount {
    pub count: u64,
}

/// Result of a delete. The backend may answer with a JSON body; when it
/// answers with no content the client synthesizes a successful outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteOutcome {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

fn default_success() -> bool {
    true
}

impl DeleteOutcome {
    pub(crate) fn synthesized() -> Self {
        Self {
            success: true,
            message: "Person deleted successfully".to_string(),
        }
    }
}

/// Result of the connectivity check
#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub persons_found: usize,
    pub message: String,
}
