use core::marker;

use futures::{future, Stream, StreamExt};

use crate::pushback::PushBackable;

/// Locale-independent ASCII whitespace: space, tab, line feed, carriage
/// return, form feed, vertical tab.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c | 0x0b)
}

/// Consumes leading whitespace and pushes the first non-whitespace byte back
/// onto the stream so the next read reproduces it.
///
/// Returns as soon as the stream runs out; an exhausted or erroring stream is
/// left exactly as its own extraction left it. Calling this again once it has
/// stopped is a no-op.
pub async fn skip_whitespaces<S>(input: &mut S)
where
    S: Stream<Item = u8> + marker::Unpin + PushBackable<Item = <S as Stream>::Item>,
{
    let non_ws = input
        .filter(|b| future::ready(!is_whitespace(*b)))
        .next()
        .await;
    if let Some(b) = non_ws {
        input.push_back(b);
    }
}
