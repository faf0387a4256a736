mod hashmap_preference_store;
mod hashmap_session_store;
mod hashmap_user_repository;
mod hashmap_verification_code_store;

pub use hashmap_preference_store::HashMapPreferenceStore;
pub use hashmap_session_store::HashMapSessionStore;
pub use hashmap_user_repository::HashMapUserRepository;
pub use hashmap_verification_code_store::HashMapVerificationCodeStore;
