use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::Path;

use damero::automata;
use damero::automaton::{Roster, TokenId};
use damero::graph::LayeredGraph;
use damero::report::{export_bundle, route_line};
use damero::routes::generate;
use damero::Pattern;

fn usage() -> ! {
    eprintln!(
        "Usage: explore_routes [--roster NAME] [--moves N] [--pattern LABEL=GLYPHS]... \
         [--seed S] [--export DIR] [--force]\n\n\
         Patterns use glyphs b (light) and n (dark); automata without a given\n\
         pattern get a random one of the same length. Available rosters:\n  - {}",
        automata::names().join("\n  - ")
    );
    std::process::exit(2);
}

struct Args {
    roster: Roster,
    moves: Option<usize>,
    given: Vec<(TokenId, String)>,
    seed: Option<u64>,
    export: Option<String>,
    force: bool,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();

    let mut roster_name = "classic".to_string();
    let mut moves: Option<usize> = None;
    let mut given: Vec<(TokenId, String)> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut export: Option<String> = None;
    let mut force = false;

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
                moves = match v.parse::<usize>() {
                    Ok(n) => Some(n),
                    Err(e) => {
                        eprintln!("invalid --moves {v}: {e}");
                        std::process::exit(2);
                    }
                };
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
                seed = match v.parse::<u64>() {
                    Ok(s) => Some(s),
                    Err(e) => {
                        eprintln!("invalid --seed {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--export" => {
                let Some(v) = argv.get(i + 1) else { usage() };
                export = Some(v.clone());
                i += 2;
            }
            "--force" => {
                force = true;
                i += 1;
            }
            _ => usage(),
        }
    }

    let Some(roster) = automata::by_name(&roster_name) else {
        eprintln!(
            "Unknown roster: {roster_name}\n\nAvailable rosters:\n  - {}",
            automata::names().join("\n  - ")
        );
        std::process::exit(2);
    };

    Args {
        roster,
        moves,
        given,
        seed,
        export,
        force,
    }
}

/// Resolve one pattern per roster automaton: scrub the given ones, autogenerate
/// the rest at the common length.
fn resolve_patterns(args: &Args, rng: &mut SmallRng) -> Vec<Pattern> {
    let scrubbed: Vec<(TokenId, String)> = args
        .given
        .iter()
        .map(|(id, raw)| (*id, Pattern::scrub(raw)))
        .filter(|(_, s)| !s.is_empty())
        .collect();

    let n = match scrubbed.first() {
        Some((_, s)) => s.len(),
        None => match args.moves {
            Some(n) => n,
            None => {
                eprintln!("need --moves or at least one --pattern");
                std::process::exit(2);
            }
        },
    };

    args.roster
        .automata
        .iter()
        .map(|automaton| {
            match scrubbed.iter().find(|(id, _)| *id == automaton.id) {
                Some((_, s)) => Pattern::parse(s).expect("scrubbed patterns contain only b/n"),
                None => Pattern::random(n, rng),
            }
        })
        .collect()
}

fn main() {
    env_logger::init();
    let args = parse_args();

    let mut rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };

    let patterns = resolve_patterns(&args, &mut rng);
    let generated = match generate(&args.roster, &patterns, &mut rng) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("Roster: {} (n = {})", generated.roster_name, generated.n);
    for token in &generated.tokens {
        println!(
            "  {} {}→{}  pattern={}",
            token.id, token.start, token.goal, token.pattern
        );
        println!(
            "     routes: total={}, winning={}{}",
            token.outcome.all.len(),
            token.outcome.wins.len(),
            if token.outcome.budget_hit {
                " (budget hit, partial)"
            } else {
                ""
            }
        );
        match &token.chosen {
            Some(route) => println!("     chosen: {}", route_line(route)),
            None => println!("     chosen: none"),
        }

        let dag = LayeredGraph::from_wins(&token.outcome.wins);
        println!(
            "     layered graph: {} nodes, {} edges, {} transitions",
            dag.nodes.len(),
            dag.edges.len(),
            dag.edge_groups().len()
        );
    }

    if let Some(dir) = &args.export {
        match export_bundle(&generated, Path::new(dir), args.force) {
            Ok(manifest) => println!(
                "exported {} token(s) to {dir} (format v{})",
                manifest.tokens.len(),
                manifest.format_version
            ),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
