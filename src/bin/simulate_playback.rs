use rand::rngs::SmallRng;
use rand::SeedableRng;

use damero::automata;
use damero::automaton::{Roster, TokenId};
use damero::routes::generate;
use damero::sim::{Playback, TickEvent};
use damero::Pattern;

const DEFAULT_MAX_TICKS: usize = 10_000;

fn usage() -> ! {
    eprintln!(
        "Usage: simulate_playback [--roster NAME] [--moves N] [--pattern LABEL=GLYPHS]... \
         [--seed S] [--max-ticks T]\n\nAvailable rosters:\n  - {}",
        automata::names().join("\n  - ")
    );
    std::process::exit(2);
}

fn parse_roster(name: &str) -> Roster {
    automata::by_name(name).unwrap_or_else(|| {
        eprintln!(
            "Unknown roster: {name}\n\nAvailable rosters:\n  - {}",
            automata::names().join("\n  - ")
        );
        std::process::exit(2);
    })
}

fn main() {
    env_logger::init();
    let argv: Vec<String> = std::env::args().collect();

    let mut roster_name = "classic".to_string();
    let mut moves: Option<usize> = None;
    let mut given: Vec<(TokenId, String)> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut max_ticks = DEFAULT_MAX_TICKS;

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--roster" => {
                let Some(v) = argv.get(i + 1) else { usage() };
                roster_name = v.clone();
                i += 2;
            }
            "--moves" => {
                let Some(v) = argv.get(i + 1) else { usage() };
                moves = v.parse::<usize>().ok().or_else(|| {
                    eprintln!("invalid --moves {v}");
                    std::process::exit(2);
                });
                i += 2;
            }
            "--pattern" => {
                let Some(v) = argv.get(i + 1) else { usage() };
                let Some((label, glyphs)) = v.split_once('=') else {
                    eprintln!("--pattern expects LABEL=GLYPHS, got {v}");
                    std::process::exit(2);
                };
                let mut chars = label.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    eprintln!("pattern label must be a single character, got {label}");
                    std::process::exit(2);
                };
                given.push((TokenId(ch), glyphs.to_string()));
                i += 2;
            }
            "--seed" => {
                let Some(v) = argv.get(i + 1) else { usage() };
                seed = v.parse::<u64>().ok().or_else(|| {
                    eprintln!("invalid --seed {v}");
                    std::process::exit(2);
                });
                i += 2;
            }
            "--max-ticks" => {
                let Some(v) = argv.get(i + 1) else { usage() };
                max_ticks = v.parse::<usize>().unwrap_or_else(|e| {
                    eprintln!("invalid --max-ticks {v}: {e}");
                    std::process::exit(2);
                });
                i += 2;
            }
            _ => usage(),
        }
    }

    let roster = parse_roster(&roster_name);
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };

    // Resolve one pattern per automaton, autogenerating the missing ones.
    let scrubbed: Vec<(TokenId, String)> = given
        .iter()
        .map(|(id, raw)| (*id, Pattern::scrub(raw)))
        .filter(|(_, s)| !s.is_empty())
        .collect();
    let n = match scrubbed.first() {
        Some((_, s)) => s.len(),
        None => moves.unwrap_or_else(|| {
            eprintln!("need --moves or at least one --pattern");
            std::process::exit(2);
        }),
    };
    let patterns: Vec<Pattern> = roster
        .automata
        .iter()
        .map(
            |automaton| match scrubbed.iter().find(|(id, _)| *id == automaton.id) {
                Some((_, s)) => Pattern::parse(s).expect("scrubbed patterns contain only b/n"),
                None => Pattern::random(n, &mut rng),
            },
        )
        .collect();

    let generated = match generate(&roster, &patterns, &mut rng) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let routes: Vec<_> = generated
        .playable()
        .map(|(id, route)| (id, route.clone()))
        .collect();
    if routes.is_empty() {
        println!("no automaton has a winning route; nothing to play");
        return;
    }

    let mut playback = Playback::new(routes, &mut rng);
    let order: Vec<String> = playback.order().iter().map(|t| t.to_string()).collect();
    println!("turn order: {}", order.join(", "));

    let mut ticks = 0usize;
    while ticks < max_ticks {
        let Some(event) = playback.tick() else { break };
        ticks += 1;
        match event {
            TickEvent::Advanced {
                token,
                from,
                to,
                step,
            } => println!("[{ticks:>4}] {token} moves {from}→{to} (step {step})"),
            TickEvent::Blocked {
                token,
                at,
                desired,
                by,
            } => println!("[{ticks:>4}] {token} at {at} blocked: {desired} held by {by}"),
            TickEvent::Finished { token, at } => {
                println!("[{ticks:>4}] {token} finished at {at}")
            }
            TickEvent::Idle { .. } => {}
        }
    }

    if playback.is_done() {
        println!("playback finished after {ticks} tick(s)");
    } else {
        println!(
            "playback stalled after {ticks} tick(s); automata may be mutually blocked \
             (known scheduling property)"
        );
    }
}
