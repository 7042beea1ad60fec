//! Timed character emission for the streaming endpoint.

use std::time::Duration;

use futures_util::Stream;
use futures_util::stream;

/// Emit the characters of `text` one by one, `interval` apart, then end.
///
/// The first character is ready immediately. The stream is lazy: nothing is timed until it is polled, and dropping it
/// stops emission.
///
/// # Examples
/// ```
/// use futures_util::StreamExt;
/// use showcase_backend::domain::stream_characters;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let chars: String = stream_characters("hi".to_owned(), Duration::ZERO)
///     .collect()
///     .await;
/// assert_eq!(chars, "hi");
/// # }
/// ```
pub fn stream_characters(
    text: String,
    interval: Duration,
) -> impl Stream<Item = char> + Send + 'static {
    let chars: Vec<char> = text.chars().collect();
    stream::unfold((chars.into_iter(), false), move |(mut chars, started)| async move {
        let next = chars.next()?;
        if started {
            tokio::time::sleep(interval).await;
        }
        Some((next, (chars, true)))
    })
}
