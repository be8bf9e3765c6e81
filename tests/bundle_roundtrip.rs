use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use damero::automata;
use damero::automaton::RouteError;
use damero::report::{export_bundle, load_manifest};
use damero::routes::generate;
use damero::Pattern;

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("damero_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!("failed to create a unique temp dir under {}", base.display());
}

fn patterns(glyphs: &[&str]) -> Vec<Pattern> {
    glyphs.iter().map(|g| Pattern::parse(g).unwrap()).collect()
}

#[test]
fn export_then_load_preserves_the_manifest() {
    let dir = unique_temp_dir("roundtrip");
    let roster = automata::classic();
    let mut rng = SmallRng::seed_from_u64(3);

    let generated = generate(&roster, &patterns(&["nbn", "bnb", "nnb"]), &mut rng).unwrap();
    let exported = export_bundle(&generated, &dir, true).unwrap();
    let loaded = load_manifest(&dir).unwrap();

    assert_eq!(loaded.format_version, exported.format_version);
    assert_eq!(loaded.roster, "classic");
    assert_eq!(loaded.moves, 3);
    assert_eq!(loaded.tokens.len(), 3);

    for (token, manifest) in generated.tokens.iter().zip(&loaded.tokens) {
        assert_eq!(manifest.label, token.id.0);
        assert_eq!(manifest.start, token.start.id());
        assert_eq!(manifest.goal, token.goal.id());
        assert_eq!(manifest.pattern, token.pattern.to_string());
        assert_eq!(manifest.total_routes, token.outcome.all.len());
        assert_eq!(manifest.winning_routes, token.outcome.wins.len());

        let chosen_ids = token
            .chosen
            .as_ref()
            .map(|r| r.iter().map(|c| c.id()).collect::<Vec<u8>>());
        assert_eq!(manifest.chosen, chosen_ids);

        // Route files carry one line per discovered route.
        let all_text = fs::read_to_string(dir.join(&manifest.files.all)).unwrap();
        assert_eq!(all_text.lines().count(), token.outcome.all.len());
        let wins_text = fs::read_to_string(dir.join(&manifest.files.wins)).unwrap();
        assert_eq!(wins_text.lines().count(), token.outcome.wins.len());
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_refuses_an_existing_directory_without_force() {
    let dir = unique_temp_dir("no_force");
    let roster = automata::solo();
    let mut rng = SmallRng::seed_from_u64(5);
    let generated = generate(&roster, &patterns(&["nn"]), &mut rng).unwrap();

    // The temp dir already exists, so the first export must be forced.
    assert!(matches!(
        export_bundle(&generated, &dir, false),
        Err(RouteError::Io { .. })
    ));
    export_bundle(&generated, &dir, true).unwrap();
    export_bundle(&generated, &dir, true).unwrap();

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generation_rejects_mismatched_patterns() {
    let roster = automata::classic();
    let mut rng = SmallRng::seed_from_u64(8);

    // Wrong count.
    assert!(matches!(
        generate(&roster, &patterns(&["nb"]), &mut rng),
        Err(RouteError::InvalidRoster { .. })
    ));

    // Unequal lengths.
    assert!(matches!(
        generate(&roster, &patterns(&["nb", "n", "nb"]), &mut rng),
        Err(RouteError::InvalidRoster { .. })
    ));
}

#[test]
fn generation_rejects_oversized_move_counts() {
    let mut roster = automata::solo();
    roster.limits.max_moves = 2;
    let mut rng = SmallRng::seed_from_u64(8);

    assert!(matches!(
        generate(&roster, &patterns(&["nnn"]), &mut rng),
        Err(RouteError::InvalidRoster { .. })
    ));
    assert!(generate(&roster, &patterns(&["nn"]), &mut rng).is_ok());
}

#[test]
fn generation_carries_absent_winners_through() {
    // One move from cell 1 can never reach cell 16, so no route wins.
    let roster = automata::solo();
    let mut rng = SmallRng::seed_from_u64(11);
    let generated = generate(&roster, &patterns(&["n"]), &mut rng).unwrap();

    assert_eq!(generated.n, 1);
    assert_eq!(generated.tokens.len(), 1);
    assert!(generated.tokens[0].chosen.is_none());
    assert!(generated.tokens[0].outcome.wins.is_empty());
    assert!(!generated.tokens[0].outcome.all.is_empty());
    assert_eq!(generated.playable().count(), 0);
}
