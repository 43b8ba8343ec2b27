pub mod collections;
pub mod prepare;
pub mod schema;
pub mod slug;

use serde::{Deserialize, Serialize};

/// Which write a document is being prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Create,
    Update,
}
