//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Payload types and the signed message aliases built on them
//! - `client.rs`: Sub-client that builds, signs and dispatches the relayer calls
//!
//! All messages share one envelope, [`SignedMessage`](crate::message::SignedMessage);
//! a derived message adds fields by flattening its parent's payload into its own.

pub mod audit;
pub mod metagraph;
pub mod registration;
pub mod result;
pub mod storage;

pub use metagraph::{RelayerContext, RelayerMessage};
pub use result::ResultModel;
