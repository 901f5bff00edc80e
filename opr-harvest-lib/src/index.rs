//! Cross-system deduplication of army book listings.
//!
//! The same army book is often listed under several game systems (e.g. a
//! Grimdark Future book also shows up under Firefight). `BookIndex` folds all
//! listings into one entry per uid, remembering every system the book was
//! seen under, in scan order.

use std::collections::HashMap;

use opr_harvest_core::{ArmyBookSummary, DiscoveredBook, GameSystem};

/// One unique army book and the systems whose listings returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedBook {
    pub uid: String,
    /// First-seen listing entry
    pub summary: ArmyBookSummary,
    /// Discovery systems in scan order, never empty
    pub systems: Vec<GameSystem>,
}

impl IndexedBook {
    /// The system the book was first discovered under; detail is fetched
    /// through it.
    pub fn primary_system(&self) -> GameSystem {
        self.systems[0]
    }

    pub fn is_cross_system(&self) -> bool {
        self.systems.len() > 1
    }

    pub fn name(&self) -> &str {
        self.summary.name_or_unknown()
    }
}

/// Insertion-ordered set of unique army books keyed by uid.
#[derive(Debug, Default)]
pub struct BookIndex {
    books: Vec<IndexedBook>,
    positions: HashMap<String, usize>,
    divergences: usize,
}

impl BookIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from listings, in the order given.
    pub fn from_discovered(books: impl IntoIterator<Item = DiscoveredBook>) -> Self {
        let mut index = Self::new();
        for book in books {
            index.insert(book);
        }
        index
    }

    /// Record one listing entry. Returns `true` when the uid was not indexed
    /// before.
    ///
    /// The first-seen summary is kept. Later copies only contribute their
    /// system; if their name differs, the difference is counted as a
    /// divergence and otherwise dropped. Entries without a uid are ignored.
    pub fn insert(&mut self, book: DiscoveredBook) -> bool {
        let Some(uid) = book.summary.uid.clone() else {
            return false;
        };

        match self.positions.get(&uid) {
            Some(&pos) => {
                let entry = &mut self.books[pos];
                if entry.summary.name != book.summary.name {
                    self.divergences += 1;
                    log::debug!(
                        "Army book {uid} is named {:?} under {} but {:?} under {}; keeping the first",
                        entry.summary.name,
                        entry.primary_system(),
                        book.summary.name,
                        book.system,
                    );
                }
                if !entry.systems.contains(&book.system) {
                    entry.systems.push(book.system);
                }
                false
            }
            None => {
                self.positions.insert(uid.clone(), self.books.len());
                self.books.push(IndexedBook {
                    uid,
                    summary: book.summary,
                    systems: vec![book.system],
                });
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, uid: &str) -> Option<&IndexedBook> {
        self.positions.get(uid).map(|&pos| &self.books[pos])
    }

    /// All unique books in first-discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedBook> {
        self.books.iter()
    }

    /// Books listed under more than one system.
    pub fn cross_system(&self) -> impl Iterator<Item = &IndexedBook> {
        self.books.iter().filter(|b| b.is_cross_system())
    }

    pub fn cross_system_count(&self) -> usize {
        self.cross_system().count()
    }

    /// Number of listings whose name disagreed with the kept summary.
    pub fn divergences(&self) -> usize {
        self.divergences
    }
}
