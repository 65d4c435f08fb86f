use chrono::SecondsFormat;
use serde_json::{Value, json};
use vestibule_core::{User, UserSerializer};

/// Flat JSON view of a user: `{ "id", "email", "created_at" }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonUserSerializer;

impl UserSerializer for JsonUserSerializer {
    fn serialize(&self, user: &User) -> Value {
        json!({
            "id": user.id().get(),
            "email": user.email().as_str(),
            "created_at": user.created_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}
