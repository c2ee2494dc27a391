//! Dealing diagnostics integration tests.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use bjtable::{Card, Deck, GameSession, GameState, SessionOptions, Suit};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Keeps every record along with the thread that logged it, so tests running
/// in parallel only see their own.
struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((thread::current().id(), record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn warnings_since(mark: usize) -> Vec<String> {
    let id = thread::current().id();
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(thread, level, _)| *thread == id && *level == Level::Warn)
        .map(|(_, _, message)| message.clone())
        .skip(mark)
        .collect()
}

/// Warnings already logged on this thread, e.g. by an earlier test when tests
/// run on a single thread.
fn mark() -> usize {
    warnings_since(0).len()
}

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn empty_deck_logs_a_warning() {
    install();
    let seen = mark();
    let mut session = GameSession::new(SessionOptions::default(), 1);
    session.replace_deck(
        Deck::from_draw_order(&[
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 1),
            card(Suit::Spades, 1),
        ])
        .unwrap(),
    );

    session.take_turn(true);
    assert!(warnings_since(seen).is_empty());

    assert_eq!(session.take_turn(true), GameState::PlayerTurn);
    assert_eq!(
        warnings_since(seen),
        vec!["cannot deal to player: no cards left in the deck".to_string()]
    );
}

#[test]
fn full_hand_logs_a_warning() {
    install();
    let seen = mark();
    let options = SessionOptions::default().with_dealer_stands_on(Some(30));
    let mut session = GameSession::new(options, 1);

    let mut draws = vec![
        card(Suit::Spades, 12),
        card(Suit::Hearts, 0),
        card(Suit::Spades, 11),
        card(Suit::Diamonds, 0),
        card(Suit::Clubs, 0),
        card(Suit::Spades, 0),
    ];
    draws.extend(Suit::ALL.map(|suit| card(suit, 1)));
    draws.extend([Suit::Hearts, Suit::Diamonds, Suit::Clubs].map(|suit| card(suit, 2)));
    draws.push(card(Suit::Hearts, 3));
    session.replace_deck(Deck::from_draw_order(&draws).unwrap());

    session.take_turn(true);
    assert_eq!(session.take_turn(false), GameState::DealerTurn);

    assert!(session.dealer_hand().is_full());
    assert_eq!(session.deck().remaining(), 1);
    assert_eq!(
        warnings_since(seen),
        vec!["cannot deal to dealer: hand cannot hold more cards".to_string()]
    );
}
