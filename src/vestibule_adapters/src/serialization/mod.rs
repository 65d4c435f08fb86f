pub mod user_serializer;

pub use user_serializer::JsonUserSerializer;
