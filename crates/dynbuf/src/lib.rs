//! Growable fixed-element-width buffers with pluggable growth policies.
//!
//! A [`DynBuffer`] owns one contiguous block of fixed-width numeric slots
//! and grows it on demand, keeping a logical length distinct from the
//! physical capacity. It is the low-level building block for sequence
//! types that want amortized O(1) append without per-push reallocation.
//!
//! # Architecture
//!
//! ```text
//! DynBuffer<T, P>
//! ├── storage: Vec<T>     (allocated to full capacity; sole owner)
//! ├── length: usize       (live prefix; 0 <= length <= capacity)
//! └── policy: P           (pure capacity -> capacity map, strictly increasing)
//! ```
//!
//! Growth replaces the block wholesale: allocate new, copy the live prefix,
//! swap, release the old block. The policy is consulted in a loop until the
//! target index fits; a policy that fails to strictly increase capacity is a
//! configuration bug and surfaces as [`BufferError::PolicyViolation`].
//!
//! # Contract notes
//!
//! - Reads past the logical length return `None` rather than failing.
//! - Writes past the physical capacity grow the buffer rather than failing;
//!   sparse writes advance the length past unwritten gap slots.
//! - Slots at indices `>= length` hold unspecified values. Do not read them
//!   through [`DynBuffer::as_slice`] expecting anything in particular.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod element;
pub mod error;
pub mod policy;

// Public re-exports for the primary API surface.
pub use buffer::DynBuffer;
pub use buffer::{F32Buffer, F64Buffer, I16Buffer, I32Buffer, I64Buffer, I8Buffer};
pub use buffer::{U16Buffer, U32Buffer, U64Buffer, U8Buffer};
pub use element::Element;
pub use error::BufferError;
pub use policy::{Doubling, GrowthPolicy, HalfAgain};
