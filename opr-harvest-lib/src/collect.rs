//! Collection strategies: the deduplicating two-pass harvest and the naive
//! per-system harvest.

use std::path::{Path, PathBuf};

use opr_harvest_core::{GameSystem, RecordOrigin, RecordSet};
use opr_harvest_forge::ArmyBookSource;

use crate::error::HarvestError;
use crate::expand::{self, compatible_systems};
use crate::fetch;
use crate::index::BookIndex;
use crate::scan;
use crate::writer::{self, WrittenFiles};

pub const DEFAULT_OUTPUT_DIR: &str = "data/opr";

/// How army books are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Index every system's listing first, fetch each book once, then expand
    /// to every compatible system.
    #[default]
    Smart,
    /// Fetch every (system, book) pair independently.
    PerSystem,
}

impl Strategy {
    pub fn spells_stem(&self) -> &'static str {
        match self {
            Self::Smart => "spells_smart",
            Self::PerSystem => "spells",
        }
    }

    pub fn special_rules_stem(&self) -> &'static str {
        match self {
            Self::Smart => "special_rules_smart",
            Self::PerSystem => "special_rules",
        }
    }
}

/// Options for one harvest run.
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Systems to scan, in scan order
    pub systems: Vec<GameSystem>,
    pub strategy: Strategy,
    /// Emit a book's content for every discovery system, ignoring declared
    /// compatibility (smart strategy only)
    pub force_duplicates: bool,
    /// Directory receiving the JSON/CSV files
    pub output_dir: PathBuf,
}

impl HarvestOptions {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            systems: GameSystem::all().to_vec(),
            strategy: Strategy::default(),
            force_duplicates: false,
            output_dir,
        }
    }
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Counters describing one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarvestStats {
    pub systems_scanned: usize,
    pub systems_failed: Vec<GameSystem>,
    /// Listing entries across all systems, duplicates included
    pub listings: usize,
    pub unique_books: usize,
    pub cross_system_books: usize,
    pub books_fetched: usize,
    pub books_failed: usize,
    pub detail_requests: usize,
    /// Listings whose metadata disagreed with the first-seen copy
    pub divergences: usize,
}

impl HarvestStats {
    /// Rough count of requests the smart strategy avoided.
    pub fn requests_saved(&self) -> usize {
        self.cross_system_books * 2
    }
}

/// A book listed under more than one system, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSystemBook {
    pub uid: String,
    pub name: String,
    pub systems: Vec<GameSystem>,
}

/// Everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    pub records: RecordSet,
    pub stats: HarvestStats,
    pub cross_system: Vec<CrossSystemBook>,
}

/// Files written for a harvest.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestOutput {
    pub spells: WrittenFiles,
    pub special_rules: WrittenFiles,
}

/// Run the configured strategy against `source`.
pub fn collect<S: ArmyBookSource + ?Sized>(source: &S, options: &HarvestOptions) -> Harvest {
    match options.strategy {
        Strategy::Smart => collect_smart(source, &options.systems, options.force_duplicates),
        Strategy::PerSystem => collect_per_system(source, &options.systems),
    }
}

/// Two-pass harvest: index all listings, then fetch each unique book once
/// and expand it to every compatible system.
pub fn collect_smart<S: ArmyBookSource + ?Sized>(
    source: &S,
    systems: &[GameSystem],
    force_duplicates: bool,
) -> Harvest {
    let mut stats = HarvestStats::default();

    log::info!("Phase 1: Collecting army metadata...");
    let mut index = BookIndex::new();
    for &system in systems {
        log::info!("  Scanning {}...", system);
        stats.systems_scanned += 1;
        let Some(books) = scan::scan_system(source, system) else {
            stats.systems_failed.push(system);
            continue;
        };
        stats.listings += books.len();
        for book in books {
            index.insert(book);
        }
    }

    stats.unique_books = index.len();
    stats.cross_system_books = index.cross_system_count();
    stats.divergences = index.divergences();
    let cross_system = index
        .cross_system()
        .map(|book| CrossSystemBook {
            uid: book.uid.clone(),
            name: book.name().to_string(),
            systems: book.systems.clone(),
        })
        .collect();

    log::info!("");
    log::info!("Phase 2: Collecting spell and special rules data...");
    let mut records = RecordSet::new();
    for book in index.iter() {
        log::info!(
            " \u{2192} {} ({}) via {}",
            book.name(),
            book.uid,
            book.primary_system()
        );

        stats.detail_requests += 1;
        let Some(detail) = fetch::fetch_book(source, book) else {
            stats.books_failed += 1;
            continue;
        };
        stats.books_fetched += 1;

        log::info!(
            "    {} spells, {} special rules",
            detail.spells.len(),
            detail.special_rules.len()
        );
        log::debug!(
            "    Compatible systems: {:?} (emitting for {})",
            detail.enabled_game_systems,
            system_list(&compatible_systems(
                &book.systems,
                &detail.enabled_game_systems,
                force_duplicates
            )),
        );

        records.extend(expand::expand_book(book, &detail, force_duplicates));
    }

    Harvest {
        records,
        stats,
        cross_system,
    }
}

/// Naive harvest: every system's books are fetched and emitted under that
/// system only, with no deduplication.
pub fn collect_per_system<S: ArmyBookSource + ?Sized>(
    source: &S,
    systems: &[GameSystem],
) -> Harvest {
    let mut stats = HarvestStats::default();
    let mut index = BookIndex::new();
    let mut records = RecordSet::new();

    for &system in systems {
        log::info!("");
        log::info!("Fetching factions for {}...", system);
        stats.systems_scanned += 1;
        let Some(books) = scan::scan_system(source, system) else {
            stats.systems_failed.push(system);
            continue;
        };
        stats.listings += books.len();

        for book in books {
            let name = book.summary.name_or_unknown().to_string();
            let uid = book.summary.uid.clone().unwrap_or_default();
            log::info!(" \u{2192} {} ({})", name, uid);

            let faction = book.summary.name.clone();
            index.insert(book);

            stats.detail_requests += 1;
            let Some(detail) = fetch::fetch_detail(source, &uid, &name, system) else {
                stats.books_failed += 1;
                continue;
            };
            stats.books_fetched += 1;

            log::info!(
                "    {} spells, {} special rules",
                detail.spells.len(),
                detail.special_rules.len()
            );
            let origin = RecordOrigin::faction_only(faction);
            records.extend(expand::expand_for_systems(&origin, &[system], &detail));
        }
    }

    stats.unique_books = index.len();
    stats.cross_system_books = index.cross_system_count();
    stats.divergences = index.divergences();

    Harvest {
        records,
        stats,
        cross_system: Vec::new(),
    }
}

/// Write both record categories under `dir` using the strategy's file names.
/// Existing files are overwritten.
pub fn write_harvest(
    records: &RecordSet,
    strategy: Strategy,
    dir: &Path,
) -> Result<HarvestOutput, HarvestError> {
    let spells = writer::write_category(dir, strategy.spells_stem(), &records.spells)?;
    let special_rules =
        writer::write_category(dir, strategy.special_rules_stem(), &records.special_rules)?;
    Ok(HarvestOutput {
        spells,
        special_rules,
    })
}

fn system_list(systems: &[GameSystem]) -> String {
    if systems.is_empty() {
        return "none".to_string();
    }
    systems
        .iter()
        .map(|s| s.slug())
        .collect::<Vec<_>>()
        .join(", ")
}
