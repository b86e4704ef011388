pub mod game_token;
pub mod validated_json;

pub use game_token::GameToken;
pub use validated_json::ValidatedJson;
