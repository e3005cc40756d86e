use pmdash::core::ticker::Ticker;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

fn counting_ticker(period_ms: u64) -> (Ticker, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let ticker = Ticker::arm(Duration::from_millis(period_ms), move || {
        c.fetch_add(1, Ordering::SeqCst);
    });
    (ticker, count)
}

#[test]
fn ticks_while_armed() {
    let (mut ticker, count) = counting_ticker(10);
    assert!(ticker.is_armed());
    thread::sleep(Duration::from_millis(120));
    ticker.disarm();
    assert!(count.load(Ordering::SeqCst) >= 1);
}

#[test]
fn disarm_stops_ticking() {
    let (mut ticker, count) = counting_ticker(10);
    thread::sleep(Duration::from_millis(50));
    ticker.disarm();
    assert!(!ticker.is_armed());

    let after = count.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(60));
    assert_eq!(count.load(Ordering::SeqCst), after);

    // second disarm is harmless
    ticker.disarm();
}

#[test]
fn drop_stops_ticking() {
    let count = {
        let (_ticker, count) = counting_ticker(10);
        thread::sleep(Duration::from_millis(30));
        count
    };
    let after = count.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(60));
    assert_eq!(count.load(Ordering::SeqCst), after);
}

#[test]
fn disarm_does_not_wait_for_the_period() {
    let (mut ticker, count) = counting_ticker(60_000);
    let started = std::time::Instant::now();
    ticker.disarm();
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
