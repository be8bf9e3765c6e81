use rand::rngs::SmallRng;
use rand::SeedableRng;

use damero::automata;
use damero::graph::LayeredGraph;
use damero::routes::generate;
use damero::sim::Playback;
use damero::Pattern;

/// End-to-end pass over the classic roster with patterns known to admit
/// winners for every automaton (each goal is three king moves away):
/// A follows the light diagonal 1→6→11→16, B the dark lane 4→7→10→13,
/// C crosses 3→6→10→14 with the final-step override.
#[test]
fn classic_roster_smoke() {
    let roster = automata::classic();
    let patterns = vec![
        Pattern::parse("bbb").unwrap(),
        Pattern::parse("nnn").unwrap(),
        Pattern::parse("bnb").unwrap(),
    ];
    let mut rng = SmallRng::seed_from_u64(2024);

    let generated = generate(&roster, &patterns, &mut rng).unwrap();
    assert_eq!(generated.n, 3);
    assert_eq!(generated.tokens.len(), 3);

    for token in &generated.tokens {
        assert!(!token.outcome.budget_hit);
        assert!(!token.outcome.wins.is_empty(), "{} should win", token.id);

        let chosen = token.chosen.as_ref().unwrap();
        assert_eq!(chosen.len(), 4);
        assert_eq!(chosen[0], token.start);
        assert_eq!(*chosen.last().unwrap(), token.goal);
        assert!(token.outcome.wins.contains(chosen));

        let dag = LayeredGraph::from_wins(&token.outcome.wins);
        assert!(dag.nodes.len() >= 4);
        assert_eq!(dag.max_step(), 3);
        // Every winning route starts at the same node, so layer 0 is a
        // single cell; layer 3 is the goal alone.
        assert_eq!(dag.layer(0).count(), 1);
        let goals: Vec<_> = dag.layer(3).collect();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].cell, token.goal);
    }

    // Replay the chosen routes. Completion is not guaranteed (automata can
    // block each other), but the scheduler must never panic and occupancy
    // must stay single.
    let routes: Vec<_> = generated
        .playable()
        .map(|(id, route)| (id, route.clone()))
        .collect();
    assert_eq!(routes.len(), 3);

    let mut playback = Playback::new(routes, &mut rng);
    let mut ticks = 0;
    while ticks < 2_000 {
        if playback.tick().is_none() {
            break;
        }
        ticks += 1;
    }

    if playback.is_done() {
        for token in &generated.tokens {
            let state = playback.state(token.id).unwrap();
            assert!(state.finished);
            assert_eq!(state.current(), token.goal);
            assert_eq!(playback.occupant(token.goal), Some(token.id));
        }
    }
}
