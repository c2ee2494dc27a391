//! CLI blackjack example.
//!
//! Set `RUST_LOG=debug` to see round transitions and dealing diagnostics.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Action, Card, GameSession, GameState, Hand, Loader, SceneDirector, SceneKind, SessionOptions,
    Suit, TableView,
};

/// Terminal front end has nothing to load.
struct NoAssets;

impl Loader for NoAssets {
    fn update(&mut self) {}

    fn is_finished(&self) -> bool {
        true
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = SessionOptions::default();
    let mut director = SceneDirector::new(NoAssets, GameSession::new(options, seed));

    while director.update(None) != SceneKind::Game {}

    loop {
        // Deal the opening hands.
        director.update(Some(Action::Hit));

        while director.session().state() == GameState::PlayerTurn {
            print_table(&director.session().view());

            let action = match prompt_line(&format!(
                "Actions: {} {} {}: ",
                colorize("[h]it", "32"),
                colorize("[s]tand", "32"),
                colorize("[q]uit", "90"),
            ))
            .as_str()
            {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            director.update(Some(action));
        }

        print_table(&director.session().view());
        println!("Round complete.");

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {
                director.update(Some(Action::NewGame));
            }
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView<'_>) {
    println!("\nDeck: {} cards remaining", view.cards_remaining());

    let dealer_value = view
        .dealer_total()
        .map_or_else(|| format!("showing {}", view.dealer_visible_total()), |v| v.to_string());
    println!("Dealer: {} (value {dealer_value})", format_hand(view.dealer()));
    println!(
        "Player: {} (value {})",
        format_hand(view.player()),
        view.player_total()
    );
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.is_face_up() {
        return "??".to_string();
    }

    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
