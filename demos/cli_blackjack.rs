//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Decision, Game, NextRound, RoundOutcome, RoundState, Suit, TableView};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twentyone=info".into()),
        )
        .init();

    println!("=== BLACKJACK 21 ===");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            return;
        }

        while game.state() == RoundState::PlayerTurn {
            print_table(&game.view());

            let input = prompt_line("Your move ([h]it / [s]tand / [r]eset): ");
            let Ok(decision) = input.parse::<Decision>() else {
                println!("Unrecognized input, try again.");
                continue;
            };

            let result = match decision {
                Decision::Hit => game.hit().map(|drawn| {
                    println!("\nYou drew {}.", format_card(drawn));
                }),
                Decision::Stand => game.stand(),
                Decision::Reset => {
                    println!("\nRound reset, dealing again.");
                    game.reset()
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if game.state() == RoundState::DealerTurn {
            match game.dealer_play() {
                Ok(drawn) => {
                    for card in drawn {
                        println!("Dealer draws {}.", format_card(card));
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        let view = game.view();
        print_table(&view);
        if let Some(result) = view.outcome {
            let text = match result.outcome {
                RoundOutcome::PlayerWin if result.dealer_bust => "You win: dealer busts!",
                RoundOutcome::PlayerWin if result.player_blackjack => "You win: blackjack!",
                RoundOutcome::PlayerWin => "You win!",
                RoundOutcome::DealerWin if result.player_bust => "You lose: bust.",
                RoundOutcome::DealerWin => "You lose.",
                RoundOutcome::Push => "Push.",
            };
            println!(
                "\n{text} ({} vs {})",
                result.player_score, result.dealer_score
            );
        }

        loop {
            match prompt_line("\nPlay again? (y/n): ").parse::<NextRound>() {
                Ok(NextRound::PlayAgain) => break,
                Ok(NextRound::Quit) => {
                    println!("Thanks for playing!");
                    return;
                }
                Err(_) => println!("Unrecognized input, try again."),
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn print_table(view: &TableView) {
    println!("\nDeck: {} cards remaining", view.cards_remaining);

    let dealer = &view.dealer;
    let mut parts: Vec<String> = dealer
        .visible_cards
        .iter()
        .map(|&card| format_card(card))
        .collect();
    for _ in 0..dealer.hidden_cards {
        parts.push("??".to_string());
    }
    let dealer_score = if dealer.hole_hidden {
        format!("{} + ?", dealer.visible_score)
    } else {
        dealer.visible_score.to_string()
    };
    println!("Dealer: {} (score {dealer_score})", parts.join(" "));

    let player = &view.player;
    let status = if player.busted {
        " BUST"
    } else if player.blackjack {
        " BLACKJACK"
    } else {
        ""
    };
    let cards = player
        .cards
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ");
    println!("You:    {cards} (score {}){status}", player.score);
}

fn format_card(card: Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("♥", "31"),
        Suit::Diamonds => ("♦", "31"),
        Suit::Clubs => ("♣", "32"),
        Suit::Spades => ("♠", "34"),
    };
    format!("{}{}", card.rank, colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
