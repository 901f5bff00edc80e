use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use opr_harvest_core::GameSystem;
use opr_harvest_lib::{
    Harvest, HarvestOptions, HarvestOutput, Strategy, WrittenFiles, common_rules, rating_hints,
};

const CROSS_SYSTEM_PREVIEW: usize = 10;
const COMMON_RULES_TOP: usize = 10;
const RATING_HINT_LIMIT: usize = 10;

pub(crate) fn print_banner(options: &HarvestOptions, base_url: &str) {
    let mode = match options.strategy {
        Strategy::Smart if options.force_duplicates => "smart (forced duplicates)",
        Strategy::Smart => "smart",
        Strategy::PerSystem => "per-system",
    };
    log::info!(
        "{} {}",
        "Harvesting".if_supports_color(Stdout, |t| t.bold()),
        base_url.if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  Mode: {}", mode);
    log::info!("  Systems: {}", join_systems(&options.systems));
    log::info!("  Output: {}", options.output_dir.display());
    log::info!("");
}

pub(crate) fn print_summary(
    harvest: &Harvest,
    output: &HarvestOutput,
    options: &HarvestOptions,
    verbose: bool,
) {
    let stats = &harvest.stats;

    log::info!(
        "{}",
        "Harvest complete".if_supports_color(Stdout, |t| t.bold())
    );
    if stats.systems_failed.is_empty() {
        log::info!("  Game systems scanned: {}", stats.systems_scanned);
    } else {
        log::info!(
            "  Game systems scanned: {} ({} failed: {})",
            stats.systems_scanned,
            stats.systems_failed.len(),
            join_systems(&stats.systems_failed),
        );
    }
    log::info!("  Listing entries: {}", stats.listings);
    log::info!("  Unique army books: {}", stats.unique_books);

    if options.strategy == Strategy::Smart {
        log::info!("  Cross-system army books: {}", stats.cross_system_books);
        log::info!(
            "  Detail requests: {} (~{} saved by deduplication)",
            stats.detail_requests,
            stats.requests_saved(),
        );
    } else {
        log::info!("  Detail requests: {}", stats.detail_requests);
    }
    if stats.books_failed > 0 {
        log::info!(
            "  Army books fetched: {} ({} failed)",
            stats.books_fetched,
            stats.books_failed.if_supports_color(Stdout, |t| t.red()),
        );
    } else {
        log::info!("  Army books fetched: {}", stats.books_fetched);
    }
    if stats.divergences > 0 {
        log::info!(
            "  Listings with conflicting names: {} (first seen kept)",
            stats.divergences
        );
    }

    log::info!("");
    print_files("Spells", &output.spells);
    print_files("Special rules", &output.special_rules);

    if verbose && !harvest.cross_system.is_empty() {
        log::info!("");
        log::info!(
            "{}",
            "Cross-system army books:".if_supports_color(Stdout, |t| t.bold())
        );
        for book in harvest.cross_system.iter().take(CROSS_SYSTEM_PREVIEW) {
            let systems: Vec<_> = book.systems.iter().map(|s| s.display_name()).collect();
            log::info!(
                "  {} ({}): {}",
                book.name,
                book.uid.if_supports_color(Stdout, |t| t.dimmed()),
                systems.join(", "),
            );
        }
        if harvest.cross_system.len() > CROSS_SYSTEM_PREVIEW {
            log::info!(
                "  ... and {} more",
                harvest.cross_system.len() - CROSS_SYSTEM_PREVIEW
            );
        }
    }

    match options.strategy {
        Strategy::Smart => print_rating_hints(harvest),
        Strategy::PerSystem => print_common_rules(harvest),
    }
}

fn print_files(label: &str, files: &WrittenFiles) {
    log::info!(
        "  {}: {} records",
        label.if_supports_color(Stdout, |t| t.bold()),
        files.records,
    );
    log::info!(
        "    {}",
        files.json.display().if_supports_color(Stdout, |t| t.cyan())
    );
    match &files.csv {
        Some(csv) => log::info!(
            "    {}",
            csv.display().if_supports_color(Stdout, |t| t.cyan())
        ),
        None => log::info!(
            "    {}",
            "(no CSV written, no records)".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
}

fn print_rating_hints(harvest: &Harvest) {
    let hints = rating_hints(&harvest.records.special_rules, RATING_HINT_LIMIT);
    if hints.is_empty() {
        return;
    }
    log::info!("");
    log::info!(
        "{}",
        "Rules that look rated:".if_supports_color(Stdout, |t| t.bold())
    );
    for name in hints {
        log::info!("  {}", name);
    }
}

fn print_common_rules(harvest: &Harvest) {
    let common = common_rules(&harvest.records.special_rules, COMMON_RULES_TOP);
    if common.is_empty() {
        return;
    }
    log::info!("");
    log::info!(
        "{}",
        "Most common special rules:".if_supports_color(Stdout, |t| t.bold())
    );
    for rule in common {
        log::info!(
            "  {}: {} instances across {} factions",
            rule.name,
            rule.count,
            rule.factions
        );
    }
}

fn join_systems(systems: &[GameSystem]) -> String {
    systems
        .iter()
        .map(|s| s.slug())
        .collect::<Vec<_>>()
        .join(", ")
}
