//! 메모리 기반 자격 증명 저장소

pub mod memory_store;

pub use memory_store::InMemoryCredentialStore;
