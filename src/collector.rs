use crate::story::DisplayItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Completion {
    /// The wanted number of stories was reached and the fetchers were told to
    /// stop.
    Satisfied,
    /// Every fetcher finished before enough stories turned up.
    Exhausted,
    /// The token was cancelled by someone else before `wanted` was reached.
    Cancelled,
}

#[derive(Debug)]
pub(crate) struct Collected {
    pub(crate) stories: Vec<DisplayItem>,
    pub(crate) completion: Completion,
}

/// Reads stories until `wanted` are in hand, the channel closes or the token
/// is cancelled. Reaching `wanted` cancels the fetchers; nothing is appended
/// once the token has fired, whoever fired it.
pub(crate) async fn collect(
    mut stories_rx: tokio::sync::mpsc::Receiver<DisplayItem>,
    wanted: usize,
    cancel: &tokio_util::sync::CancellationToken,
) -> Collected {
    let mut stories = Vec::with_capacity(wanted);

    if wanted == 0 {
        cancel.cancel();
        return Collected {
            stories,
            completion: Completion::Satisfied,
        };
    }

    loop {
        let story = tokio::select! {
            // Checked first so nothing lands after the token fired.
            biased;
            _ = cancel.cancelled() => {
                stories_rx.close();
                return Collected {
                    stories,
                    completion: Completion::Cancelled,
                };
            }
            story = stories_rx.recv() => story,
        };

        let Some(story) = story else {
            break;
        };

        stories.push(story);
        if stories.len() >= wanted {
            cancel.cancel();
            // Senders blocked on a full channel now fail instead of waiting.
            stories_rx.close();
            return Collected {
                stories,
                completion: Completion::Satisfied,
            };
        }
    }

    Collected {
        stories,
        completion: Completion::Exhausted,
    }
}
