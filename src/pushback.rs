//! One-slot pushback over any [`Stream`].

use core::pin::Pin;
use core::task::{Context, Poll};

use futures::Stream;
use pin_project_lite::pin_project;

/// A stream that can take back the last extracted item.
pub trait PushBackable {
    type Item;

    /// Returns one item to the stream so the next extraction reproduces it.
    ///
    /// The slot holds a single item; pushing while it is occupied hands the
    /// displaced occupant back to the caller.
    fn push_back(&mut self, v: Self::Item) -> Option<Self::Item>;
}

pin_project! {
    /// Adapter placing a one-item pushback slot in front of a stream.
    pub struct PushBack<S: Stream> {
        #[pin]
        stream: S,
        slot: Option<S::Item>,
    }
}

impl<S: Stream> PushBack<S> {
    pub fn new(stream: S) -> Self {
        Self { stream, slot: None }
    }
}

impl<S: Stream> PushBackable for PushBack<S> {
    type Item = S::Item;
    fn push_back(&mut self, v: S::Item) -> Option<S::Item> {
        self.slot.replace(v)
    }
}

impl<S: Stream> Stream for PushBack<S> {
    type Item = S::Item;
    fn poll_next(self: Pin<&mut Self>, ctx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.project();
        match this.slot.take() {
            Some(v) => Poll::Ready(Some(v)),
            None => this.stream.poll_next(ctx),
        }
    }
}

/// Entry point: wraps any stream with a pushback slot.
pub trait PushBackExt: Stream {
    fn push_backable(self) -> PushBack<Self>
    where
        Self: Sized,
    {
        PushBack::new(self)
    }
}
impl<T: ?Sized> PushBackExt for T where T: Stream {}
