pub mod challenge_service;
mod random;
pub mod tag_service;

pub use challenge_service::ChallengeGenerator;
pub use tag_service::KeyedTagger;
