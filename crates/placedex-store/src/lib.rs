//! Persistence stage for Placedex.
//!
//! Reads the compressed index written by the collect stage, normalizes
//! operating-hours text into structured time slots, attaches geohashes, and
//! writes batched documents to the Firestore-style document store.

pub mod credentials;
pub mod error;
pub mod firestore;
pub mod geohash;
pub mod hours;
pub mod index_file;
pub mod prepare;

pub use credentials::ServiceAccountKey;
pub use error::StoreError;
pub use firestore::FirestoreClient;
pub use index_file::{read_index, write_index};
pub use prepare::normalize_entry;
