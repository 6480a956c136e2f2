//! Dead-entity removal strategies for cull.
//!
//! Every strategy removes all entities whose `alive` flag is false from a
//! [`World`](cull_core::World), in place. They differ in traversal order,
//! allocation behavior, and whether survivors keep their relative order:
//!
//! | Strategy | Module | Order kept | Extra allocation |
//! |----------|--------|------------|------------------|
//! | [`Strategy::Erase`] | [`erase`] | yes | none |
//! | [`Strategy::EraseReverse`] | [`erase`] | yes | none |
//! | [`Strategy::EraseReverseIndex`] | [`erase`] | yes | none |
//! | [`Strategy::CopyFor`] | [`copy`] | yes | full-length copy |
//! | [`Strategy::CopyIf`] | [`copy`] | yes | full-length copy |
//! | [`Strategy::Swap`] | [`swap`] | **no** | none |
//! | [`Strategy::Remove`] | [`compact`] | yes | none |
//! | [`Strategy::Partition`] | [`compact`] | yes | none |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compact;
pub mod copy;
pub mod erase;
pub mod strategy;
pub mod swap;

pub use strategy::{registry, PruneFn, Registration, Strategy};
