//! Threads and channels.
//!
//! Each piece of data is owned by one thread and changes travel as
//! messages. That goes for output too: tasks send lines into a transcript
//! channel that the calling thread drains.
//!
//! A producer hands greeting records to a consumer over a channel. The
//! channel closes when the producer drops its `Sender`, and a consumer
//! iterating the `Receiver` stops on its own at that point. With capacity
//! 0 every send waits for a matching receive. With capacity `n` the
//! producer may run `n` values ahead.

use crate::error::{LessonError, Result};
use crate::greeting::{vend_salutations, Salutation, Salutations};
use crossbeam::channel::{bounded, select, unbounded, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

pub const DONE: &str = "Done!";

fn iterate_and_print(times: usize, is_formal: bool, out: &Sender<String>) {
    for sal in vend_salutations().iter().take(times) {
        // The transcript reader is gone once the lesson returns; late lines
        // from a leaked thread are dropped.
        let _ = out.send(sal.line(is_formal));
    }
}

fn drain(lines: &Receiver<String>) -> Vec<String> {
    lines.try_iter().collect()
}

// =============================================================================
// Producer / consumer handoff
// =============================================================================

/// Sends every record in order, then closes the channel by dropping `channel`.
pub fn channel_greeter(salutations: Salutations, channel: Sender<Salutation>) -> Result<()> {
    for sal in salutations {
        channel.send(sal)?;
    }
    debug!("greeter finished, closing channel");
    Ok(())
}

pub fn handoff_with(salutations: Salutations, capacity: usize) -> Result<Vec<Salutation>> {
    let (tx, rx) = bounded(capacity);
    let producer = thread::spawn(move || channel_greeter(salutations, tx));

    let received: Vec<Salutation> = rx.iter().collect();

    producer.join().map_err(|_| LessonError::WorkerPanicked)??;
    Ok(received)
}

pub fn handoff(capacity: usize) -> Result<Vec<Salutation>> {
    handoff_with(vend_salutations(), capacity)
}

/// Range over a channel: the loop ends when the greeter closes it.
pub fn channel_with_range() -> Result<Vec<String>> {
    let (tx, rx) = bounded(0);
    let producer = thread::spawn(move || channel_greeter(vend_salutations(), tx));

    let mut names = Vec::new();
    for sal in &rx {
        names.push(sal.name);
    }

    producer.join().map_err(|_| LessonError::WorkerPanicked)??;
    Ok(names)
}

// =============================================================================
// Multiplexed wait
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    Received { name: String, source: u8 },
    Waiting,
}

impl SelectEvent {
    pub fn line(&self) -> String {
        match self {
            SelectEvent::Received { name, source } => format!("{} :{}", name, source),
            SelectEvent::Waiting => "waiting".to_string(),
        }
    }
}

/// Waits on two fed channels at once and returns when either closes.
///
/// Ties between ready channels are broken at random. When neither is ready
/// the `default` arm runs without blocking; back-to-back idle polls are
/// recorded as a single `Waiting`.
pub fn concurrency_select() -> Result<Vec<SelectEvent>> {
    let (tx1, rx1) = bounded(0);
    let (tx2, rx2) = bounded(0);
    // Not joined: once the receivers drop, a still-blocked greeter gets a
    // send error and exits.
    thread::spawn(move || channel_greeter(vend_salutations(), tx1));
    thread::spawn(move || channel_greeter(vend_salutations(), tx2));

    let mut events = Vec::new();
    loop {
        select! {
            recv(rx1) -> msg => match msg {
                Ok(sal) => events.push(SelectEvent::Received { name: sal.name, source: 1 }),
                Err(_) => break,
            },
            recv(rx2) -> msg => match msg {
                Ok(sal) => events.push(SelectEvent::Received { name: sal.name, source: 2 }),
                Err(_) => break,
            },
            default => {
                if events.last() != Some(&SelectEvent::Waiting) {
                    events.push(SelectEvent::Waiting);
                }
                thread::yield_now();
            }
        }
    }
    info!(events = events.len(), "select loop saw a closed channel");
    Ok(events)
}

// =============================================================================
// Joining spawned work
// =============================================================================

/// Fire and forget, then sleep for `settle` and hope the thread is done.
pub fn basic_concurrency(settle: Duration) -> Vec<String> {
    let (out, lines) = unbounded();
    let worker = out.clone();
    thread::spawn(move || iterate_and_print(3, true, &worker));
    iterate_and_print(3, false, &out);
    thread::sleep(settle);
    drain(&lines)
}

/// Joins through a single value on a rendezvous channel.
pub fn channel_concurrency() -> Result<Vec<String>> {
    let (out, lines) = unbounded();
    let (done_tx, done_rx) = bounded(0);
    let worker = out.clone();
    thread::spawn(move || {
        iterate_and_print(3, true, &worker);
        let _ = done_tx.send(true);
    });
    iterate_and_print(3, false, &out);
    done_rx.recv()?;
    Ok(drain(&lines))
}

/// Only one `done` is ever read. The second send has no reader, so the
/// worker never reaches its `Done!` line.
pub fn unbuffered_channel() -> Result<Vec<String>> {
    let (out, lines) = unbounded();
    let (done_tx, done_rx) = bounded(0);
    let worker = out.clone();
    thread::spawn(move || {
        iterate_and_print(3, true, &worker);
        if done_tx.send(true).is_err() {
            return;
        }
        // Blocks until `done_rx` is dropped, then fails.
        match done_tx.send(true) {
            Ok(()) => {
                let _ = worker.send(DONE.to_string());
            }
            Err(_) => debug!("second done signal had no reader"),
        }
    });
    iterate_and_print(3, false, &out);
    done_rx.recv()?;
    Ok(drain(&lines))
}

/// Room for both signals, so the worker runs through to `Done!`.
///
/// Racy on purpose: nothing orders the worker's `Done!` against this
/// function draining the transcript and returning. Sometimes it is there,
/// sometimes not.
pub fn buffered_channel() -> Result<Vec<String>> {
    let (out, lines) = unbounded();
    let (done_tx, done_rx) = bounded(2);
    let worker = out.clone();
    thread::spawn(move || {
        iterate_and_print(3, true, &worker);
        let _ = done_tx.send(true);
        let _ = done_tx.send(true);
        let _ = worker.send(DONE.to_string());
    });
    iterate_and_print(3, false, &out);
    done_rx.recv()?;

    let transcript = drain(&lines);
    debug!(
        done_recorded = transcript.iter().any(|l| l == DONE),
        "buffered channel returned"
    );
    Ok(transcript)
}

/// The same worker with a `settle` pause between its signals, joined
/// explicitly before the transcript is read. `Done!` is always recorded.
pub fn fixed_channel(settle: Duration) -> Result<Vec<String>> {
    let (out, lines) = unbounded();
    let (done_tx, done_rx) = bounded(2);
    let worker = out.clone();
    let handle = thread::spawn(move || {
        iterate_and_print(3, true, &worker);
        let _ = done_tx.send(true);
        thread::sleep(settle);
        let _ = done_tx.send(true);
        let _ = worker.send(DONE.to_string());
    });
    iterate_and_print(3, false, &out);
    done_rx.recv()?;
    handle.join().map_err(|_| LessonError::WorkerPanicked)?;
    Ok(drain(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const NAMES: [&str; 3] = ["Annica", "Mitchel", "Marisol"];

    fn names(items: &[Salutation]) -> Vec<&str> {
        items.iter().map(|s| s.name.as_str()).collect()
    }

    fn greeting_lines(transcript: &[String]) -> usize {
        transcript.iter().filter(|l| l.as_str() != DONE).count()
    }

    #[test]
    fn test_handoff_preserves_order() {
        for capacity in [0, 1, 3, 10] {
            let received = handoff(capacity).unwrap();
            assert_eq!(names(&received), NAMES);
        }
    }

    #[test]
    fn test_channel_with_range_terminates() {
        assert_eq!(channel_with_range().unwrap(), NAMES);
    }

    #[test]
    fn test_greeter_reports_closed_receiver() {
        let (tx, rx) = bounded(0);
        drop(rx);
        let result = channel_greeter(vend_salutations(), tx);
        assert!(matches!(result, Err(LessonError::Disconnected)));
    }

    /// Spawns a producer that announces each send attempt on `attempts`
    /// and counts completed sends in `sent`.
    fn counting_producer(
        capacity: usize,
    ) -> (
        Receiver<Salutation>,
        Receiver<usize>,
        Arc<AtomicUsize>,
        thread::JoinHandle<()>,
    ) {
        let (tx, rx) = bounded(capacity);
        let (attempt_tx, attempt_rx) = unbounded();
        let sent = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&sent);
        let producer = thread::spawn(move || {
            for (i, sal) in vend_salutations().into_iter().enumerate() {
                attempt_tx.send(i).unwrap();
                tx.send(sal).unwrap();
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        (rx, attempt_rx, sent, producer)
    }

    #[test]
    fn test_rendezvous_send_waits_for_each_read() {
        let (rx, attempts, sent, producer) = counting_producer(0);

        for n in 0..3 {
            // The producer is at its nth send and no nth read has happened.
            assert_eq!(attempts.recv().unwrap(), n);
            assert_eq!(sent.load(Ordering::SeqCst), n);

            let sal = rx.recv().unwrap();
            assert_eq!(sal.name, NAMES[n]);
            assert!(sent.load(Ordering::SeqCst) <= n + 1);
        }

        assert!(rx.recv().is_err());
        producer.join().unwrap();
        assert_eq!(sent.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_bounded_producer_runs_ahead() {
        let (rx, attempts, sent, producer) = counting_producer(2);

        // Reaching the third send without any read means two went through.
        for n in 0..3 {
            assert_eq!(attempts.recv().unwrap(), n);
        }
        assert_eq!(sent.load(Ordering::SeqCst), 2);

        let received: Vec<_> = rx.iter().collect();
        producer.join().unwrap();
        assert_eq!(names(&received), NAMES);
        assert_eq!(sent.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_select_drains_one_channel_in_order() {
        let events = concurrency_select().unwrap();
        let from = |source: u8| -> Vec<String> {
            events
                .iter()
                .filter_map(|e| match e {
                    SelectEvent::Received { name, source: s } if *s == source => {
                        Some(name.clone())
                    }
                    _ => None,
                })
                .collect()
        };
        let (one, two) = (from(1), from(2));

        assert!(one.len() == 3 || two.len() == 3);
        for seen in [one, two] {
            assert_eq!(seen, NAMES[..seen.len()]);
        }
        assert!(!events
            .windows(2)
            .any(|w| w[0] == SelectEvent::Waiting && w[1] == SelectEvent::Waiting));
    }

    #[test]
    fn test_select_event_lines() {
        let got = SelectEvent::Received { name: "Annica".into(), source: 2 };
        assert_eq!(got.line(), "Annica :2");
        assert_eq!(SelectEvent::Waiting.line(), "waiting");
    }

    #[test]
    fn test_basic_concurrency_with_settle() {
        let transcript = basic_concurrency(Duration::from_millis(100));
        assert_eq!(transcript.len(), 6);
        assert!(transcript.contains(&"Hello, Annica".to_string()));
        assert!(transcript.contains(&"Howdy, Annica".to_string()));
    }

    #[test]
    fn test_channel_concurrency_joins_worker() {
        let transcript = channel_concurrency().unwrap();
        assert_eq!(transcript.len(), 6);
    }

    #[test]
    fn test_unbuffered_never_reaches_done() {
        let transcript = unbuffered_channel().unwrap();
        assert_eq!(greeting_lines(&transcript), 6);
        assert!(!transcript.iter().any(|l| l == DONE));
    }

    #[test]
    fn test_buffered_may_or_may_not_reach_done() {
        let transcript = buffered_channel().unwrap();
        assert_eq!(greeting_lines(&transcript), 6);
        assert!(transcript.iter().filter(|l| l.as_str() == DONE).count() <= 1);
    }

    #[test]
    fn test_fixed_always_reaches_done() {
        let transcript = fixed_channel(Duration::from_millis(10)).unwrap();
        assert_eq!(greeting_lines(&transcript), 6);
        assert_eq!(transcript.iter().filter(|l| l.as_str() == DONE).count(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_handoff_is_fifo(count in 0usize..40, capacity in 0usize..5) {
            let items: Salutations = (0..count)
                .map(|i| Salutation::new(format!("guest{}", i), "Hi"))
                .collect::<Vec<_>>()
                .into();
            let received = handoff_with(items.clone(), capacity).unwrap();
            prop_assert_eq!(received, items.into_inner());
        }
    }
}
