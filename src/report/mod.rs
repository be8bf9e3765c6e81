//! Exportable route bundles.
//!
//! A bundle is a directory holding `manifest.json` (counts, patterns, chosen
//! routes) plus one plain-text file per automaton and result class, one route
//! per line. The text files replace the original download buttons; the
//! manifest makes a bundle self-describing.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::automaton::RouteError;
use crate::routes::Generated;
use crate::search::enumerate::Route;

const FORMAT_VERSION: u32 = 1;
const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesManifest {
    pub format_version: u32,
    pub created_unix_secs: u64,
    pub roster: String,
    /// The common path length `n` (cells per route = `moves + 1`).
    pub moves: usize,
    pub tokens: Vec<TokenManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenManifest {
    pub label: char,
    pub start: u8,
    pub goal: u8,
    pub pattern: String,
    pub total_routes: usize,
    pub winning_routes: usize,
    pub expansions: u64,
    pub budget_hit: bool,
    /// Cell ids of the chosen winning route, absent when no route won.
    pub chosen: Option<Vec<u8>>,
    pub files: TokenFiles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenFiles {
    pub all: String,
    pub wins: String,
}

/// Write a bundle for one generation pass. With `force`, an existing output
/// directory is replaced.
pub fn export_bundle(
    generated: &Generated,
    out_dir: &Path,
    force: bool,
) -> Result<RoutesManifest, RouteError> {
    prepare_output_dir(out_dir, force)?;

    let created_unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut tokens: Vec<TokenManifest> = Vec::with_capacity(generated.tokens.len());
    for token in &generated.tokens {
        let files = TokenFiles {
            all: format!("routes_{}_all.txt", token.id),
            wins: format!("routes_{}_wins.txt", token.id),
        };
        write_routes_file(&out_dir.join(&files.all), &token.outcome.all)?;
        write_routes_file(&out_dir.join(&files.wins), &token.outcome.wins)?;

        tokens.push(TokenManifest {
            label: token.id.0,
            start: token.start.id(),
            goal: token.goal.id(),
            pattern: token.pattern.to_string(),
            total_routes: token.outcome.all.len(),
            winning_routes: token.outcome.wins.len(),
            expansions: token.outcome.expansions,
            budget_hit: token.outcome.budget_hit,
            chosen: token
                .chosen
                .as_ref()
                .map(|route| route.iter().map(|c| c.id()).collect()),
            files,
        });
    }

    let manifest = RoutesManifest {
        format_version: FORMAT_VERSION,
        created_unix_secs,
        roster: generated.roster_name.to_string(),
        moves: generated.n,
        tokens,
    };

    write_manifest(out_dir, &manifest)?;
    Ok(manifest)
}

pub fn load_manifest(bundle_dir: &Path) -> Result<RoutesManifest, RouteError> {
    let path = bundle_dir.join(MANIFEST_FILENAME);
    let f = fs::File::open(&path).map_err(|e| RouteError::Io {
        stage: "bundle_load_manifest_open",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let r = BufReader::new(f);
    let manifest: RoutesManifest = serde_json::from_reader(r).map_err(|e| RouteError::Io {
        stage: "bundle_load_manifest_parse",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    if manifest.format_version != FORMAT_VERSION {
        return Err(RouteError::Io {
            stage: "bundle_load_manifest_version",
            path: path.display().to_string(),
            error: format!(
                "unsupported format_version {} (expected {FORMAT_VERSION})",
                manifest.format_version
            ),
        });
    }

    Ok(manifest)
}

fn prepare_output_dir(out_dir: &Path, force: bool) -> Result<(), RouteError> {
    if out_dir.exists() {
        if !force {
            return Err(RouteError::Io {
                stage: "bundle_export_create_dir",
                path: out_dir.display().to_string(),
                error: "output directory already exists (use force to overwrite)".to_string(),
            });
        }
        fs::remove_dir_all(out_dir).map_err(|e| RouteError::Io {
            stage: "bundle_export_remove_dir",
            path: out_dir.display().to_string(),
            error: e.to_string(),
        })?;
    }

    fs::create_dir_all(out_dir).map_err(|e| RouteError::Io {
        stage: "bundle_export_create_dir",
        path: out_dir.display().to_string(),
        error: e.to_string(),
    })
}

fn write_manifest(out_dir: &Path, manifest: &RoutesManifest) -> Result<(), RouteError> {
    let path = out_dir.join(MANIFEST_FILENAME);
    let f = fs::File::create(&path).map_err(|e| RouteError::Io {
        stage: "bundle_export_manifest_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, manifest).map_err(|e| RouteError::Io {
        stage: "bundle_export_manifest_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| RouteError::Io {
        stage: "bundle_export_manifest_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

fn write_routes_file(path: &Path, routes: &[Route]) -> Result<(), RouteError> {
    let f = fs::File::create(path).map_err(|e| RouteError::Io {
        stage: "bundle_export_routes_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    for route in routes {
        writeln!(w, "{}", route_line(route)).map_err(|e| RouteError::Io {
            stage: "bundle_export_routes_write",
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
    }
    w.flush().map_err(|e| RouteError::Io {
        stage: "bundle_export_routes_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

/// One route as a comma-separated cell id line, e.g. `1,6,11,16`.
pub fn route_line(route: &Route) -> String {
    route
        .iter()
        .map(|c| c.id().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
