//! Leading-whitespace hygiene for async byte streams.
//!
//! A formatted extraction stops at the first whitespace boundary and leaves
//! the trailing terminator in the stream; a raw line-read issued right after
//! it would then see an empty remainder. [`skip_whitespaces`] reconciles the
//! two idioms: it consumes leading whitespace and hands the first
//! non-whitespace byte back to the stream for whichever read comes next.
//!
//! Any [`futures::Stream`] of bytes qualifies once wrapped with
//! [`PushBackExt::push_backable`].
#![cfg_attr(not(feature = "std"), no_std)]

mod pushback;
mod skip;

pub use pushback::{PushBack, PushBackExt, PushBackable};
pub use skip::{is_whitespace, skip_whitespaces};
