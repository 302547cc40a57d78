//! MongoDB 기반 자격 증명 저장소

pub mod mongo_store;

pub use mongo_store::MongoCredentialStore;
