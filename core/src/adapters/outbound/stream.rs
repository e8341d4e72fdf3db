use futures::{Stream, StreamExt};
use tokio::time::Instant;
use tonic::Status;

/// How a server stream ended, from the point of view of its last message.
#[derive(Debug)]
pub enum Drained<T> {
    /// Closed cleanly after at least one message.
    Complete(T),
    /// Failed or ran out of time after at least one message.
    Interrupted { last: T, status: Status },
    /// Closed cleanly without sending anything.
    Empty,
    /// Failed before the first message.
    Failed(Status),
    /// Ran out of time before the first message.
    TimedOut,
}

/// Reads `stream` to the end and keeps only the most recent message.
pub async fn drain_last<T, S>(mut stream: S, deadline: Instant) -> Drained<T>
where
    S: Stream<Item = Result<T, Status>> + Unpin,
{
    let mut last = None;
    loop {
        match tokio::time::timeout_at(deadline, stream.next()).await {
            Ok(Some(Ok(message))) => last = Some(message),
            Ok(None) => {
                return match last {
                    Some(last) => Drained::Complete(last),
                    None => Drained::Empty,
                };
            }
            Ok(Some(Err(status))) => {
                return match last {
                    Some(last) => Drained::Interrupted { last, status },
                    None => Drained::Failed(status),
                };
            }
            Err(_) => {
                return match last {
                    Some(last) => Drained::Interrupted {
                        last,
                        status: Status::deadline_exceeded("stream deadline reached"),
                    },
                    None => Drained::TimedOut,
                };
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use std::time::Duration;

    fn far() -> Instant {
        Instant::now() + Duration::from_secs(30)
    }

    #[tokio::test]
    async fn clean_close_keeps_last_message() {
        let messages = stream::iter(vec![Ok::<_, Status>("M1"), Ok("M2")]);
        assert!(matches!(drain_last(messages, far()).await, Drained::Complete("M2")));
    }

    #[tokio::test]
    async fn error_after_message_keeps_that_message() {
        let messages = stream::iter(vec![Ok("M1"), Err(Status::unavailable("reset"))]);
        match drain_last(messages, far()).await {
            Drained::Interrupted { last, status } => {
                assert_eq!(last, "M1");
                assert_eq!(status.code(), tonic::Code::Unavailable);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_stream_is_reported() {
        let messages = stream::iter(Vec::<Result<&str, Status>>::new());
        assert!(matches!(drain_last(messages, far()).await, Drained::Empty));
    }

    #[tokio::test]
    async fn error_before_any_message_is_reported() {
        let messages = stream::iter(vec![Err::<&str, _>(Status::not_found("booking"))]);
        match drain_last(messages, far()).await {
            Drained::Failed(status) => assert_eq!(status.code(), tonic::Code::NotFound),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_stream_keeps_what_arrived() {
        let messages = stream::iter(vec![Ok::<_, Status>("M1")]).chain(stream::pending());
        let deadline = Instant::now() + Duration::from_secs(1);
        match drain_last(messages, deadline).await {
            Drained::Interrupted { last, status } => {
                assert_eq!(last, "M1");
                assert_eq!(status.code(), tonic::Code::DeadlineExceeded);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn silent_stream_times_out() {
        let messages = stream::pending::<Result<&str, Status>>();
        let deadline = Instant::now() + Duration::from_secs(1);
        assert!(matches!(drain_last(messages, deadline).await, Drained::TimedOut));
    }
}
