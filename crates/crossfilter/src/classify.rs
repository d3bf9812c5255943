//! Heuristic block classification.
//!
//! The host renders each section as an unlabeled run of tables; nothing marks
//! which one holds the data rows and which one holds the filter controls.
//! Each candidate is scored from its header text alone, so the scorers are
//! pure functions testable against synthetic fixtures.

use crate::config::{Config, Section};
use crate::grid;
use crate::section;
use dom::Node;

/// A candidate must score strictly above this floor to be selected at all.
const SCORE_FLOOR: i32 = -1;

// Data-block scorer weights. A "Contains" marker is the filter block's
// signature, so it disqualifies a data candidate outright.
const FILTER_MARKER_PENALTY: i32 = -5;
const REL_INDIVIDUAL: i32 = 1;
const REL_CONTACT: i32 = 4;
const REL_RELATIONSHIP_PHRASE: i32 = 1;
const GEN_PERSON: i32 = 3;
const GEN_DETAIL: i32 = 1;
const GEN_CROSS_SECTION: i32 = -3;
const PROF_PERSON: i32 = 2;
const PROF_ORGANIZATION: i32 = 2;
const PROF_TYPE_PHRASE: i32 = 2;

// Filter-block scorer weights.
const FILTER_CONTAINS: i32 = 10;
const FILTER_PERSON: i32 = 2;
const FILTER_SCOPE: i32 = 1;

fn has(headers: &[String], label: &str) -> bool {
    headers.iter().any(|h| h == label)
}

fn joined_contains(headers: &[String], phrase: &str) -> bool {
    let joined = headers.join("|").to_ascii_lowercase();
    joined.contains(&phrase.to_ascii_lowercase())
}

/// Score a block as a data-block candidate for the given section.
pub fn data_score(section: Section, headers: &[String]) -> i32 {
    let mut score = 0;
    if has(headers, "Contains") {
        score += FILTER_MARKER_PENALTY;
    }
    match section {
        Section::Relationships => {
            if has(headers, "Individual") {
                score += REL_INDIVIDUAL;
            }
            if has(headers, "Contact") {
                score += REL_CONTACT;
            }
            if joined_contains(headers, "relationship to individual") {
                score += REL_RELATIONSHIP_PHRASE;
            }
        }
        Section::General => {
            if has(headers, "Person") {
                score += GEN_PERSON;
            }
            for detail in ["Phone", "Mobile Phone", "Address", "City"] {
                if has(headers, detail) {
                    score += GEN_DETAIL;
                }
            }
            // The host has shipped three spellings of this header.
            if has(headers, "E-Mail") || has(headers, "E\u{2011}Mail") || has(headers, "Email") {
                score += GEN_DETAIL;
            }
            // Organization markers mean we are looking at the Professional
            // section's twin; push it away so General never cross-matches.
            if has(headers, "Organization") || joined_contains(headers, "professional type") {
                score += GEN_CROSS_SECTION;
            }
        }
        Section::Professional => {
            if has(headers, "Person") {
                score += PROF_PERSON;
            }
            if has(headers, "Organization") {
                score += PROF_ORGANIZATION;
            }
            if joined_contains(headers, "professional type") {
                score += PROF_TYPE_PHRASE;
            }
        }
    }
    score
}

/// Score a block as a filter-block candidate (section-independent).
pub fn filter_score(headers: &[String]) -> i32 {
    let mut score = 0;
    if headers
        .iter()
        .any(|h| h.to_ascii_lowercase().contains("contains"))
    {
        score += FILTER_CONTAINS;
    }
    if has(headers, "Person") {
        score += FILTER_PERSON;
    }
    if has(headers, "Organization") || joined_contains(headers, "professional type") {
        score += FILTER_SCOPE;
    }
    score
}

/// Argmax over candidates; strict comparison keeps the first block in
/// document order on ties. Best score at or below the floor means no block
/// qualifies.
fn pick<'a>(tables: &[&'a Node], mut score: impl FnMut(&Node) -> i32) -> Option<&'a Node> {
    let mut best: Option<&'a Node> = None;
    let mut best_score = SCORE_FLOOR;
    for &t in tables {
        let s = score(t);
        if s > best_score {
            best = Some(t);
            best_score = s;
        }
    }
    best
}

/// The data block for a section, or `None` when the section is missing or no
/// candidate qualifies.
pub fn data_block<'a>(dom: &'a Node, cfg: &Config, sec: Section) -> Option<&'a Node> {
    let tables = section::tables(dom, cfg.part_id(sec));
    let found = pick(&tables, |t| {
        data_score(sec, &grid::header_texts(t, cfg.header_scan_depth))
    });
    log::trace!(
        target: "crossfilter.classify",
        "data_block {}: {} candidates -> {:?}",
        sec.name(),
        tables.len(),
        found.map(Node::id)
    );
    found
}

/// The filter block for a section. The "Contains" marker sits below the
/// header rows, so this scorer reads header cells from every row.
pub fn filter_block<'a>(dom: &'a Node, cfg: &Config, sec: Section) -> Option<&'a Node> {
    let tables = section::tables(dom, cfg.part_id(sec));
    let found = pick(&tables, |t| filter_score(&grid::all_header_texts(t)));
    log::trace!(
        target: "crossfilter.classify",
        "filter_block {}: {} candidates -> {:?}",
        sec.name(),
        tables.len(),
        found.map(Node::id)
    );
    found
}
