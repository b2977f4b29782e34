use async_skipws::{is_whitespace, skip_whitespaces, PushBackExt, PushBackable};
use futures::{stream, Stream, StreamExt};

async fn read_word<S>(input: &mut S) -> String
where
    S: Stream<Item = u8> + Unpin + PushBackable<Item = u8>,
{
    let mut word = String::new();
    while let Some(b) = input.next().await {
        if is_whitespace(b) {
            input.push_back(b);
            break;
        }
        word.push(b.into());
    }
    word
}

async fn read_line<S>(input: &mut S) -> String
where
    S: Stream<Item = u8> + Unpin,
{
    let mut line = String::new();
    while let Some(b) = input.next().await {
        if b == b'\n' {
            break;
        }
        line.push(b.into());
    }
    line
}

fn main() {
    futures_executor::block_on(async {
        let input = "  \n  hello\nworld and more\n";
        let mut strm = stream::iter(input.bytes()).push_backable();

        skip_whitespaces(&mut strm).await;
        let word = read_word(&mut strm).await;

        // the formatted read above left its terminator in the stream;
        // skipping it keeps the line-read from seeing an empty line
        skip_whitespaces(&mut strm).await;
        let line = read_line(&mut strm).await;

        println!("input: {:?}", input);
        println!("word:  {:?}", word);
        println!("line:  {:?}", line);
    });
}
