//! Minimal push-based reactive graph.
//!
//! A [`Store`] is a writable source. A [`Derived`] is a pure function of one
//! or two upstream sources that recomputes synchronously, on the same turn,
//! whenever one of its declared sources emits. Nodes are single-threaded
//! (`Rc`/`RefCell`) and never hold a borrow across a callback, so a
//! subscriber may read or even write other nodes while being notified. A
//! write made during a notification supersedes it: observers not yet
//! reached receive only the newer value.

mod derived;
mod store;

pub use derived::Derived;
pub use store::{Callback, Readable, Store, StoreReader, Subscription};
