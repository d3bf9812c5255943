//! Immutable engine configuration, built once at startup and passed by
//! reference everywhere. No ambient globals.

/// The three fixed section roles the engine knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Relationships,
    General,
    Professional,
}

impl Section {
    /// The sections a selected name is propagated into.
    pub const TARGETS: [Section; 2] = [Section::General, Section::Professional];

    pub fn name(self) -> &'static str {
        match self {
            Section::Relationships => "relationships",
            Section::General => "general",
            Section::Professional => "professional",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Host page-part identifier carried by each section's boundary anchor.
    pub relationships_part: u32,
    pub general_part: u32,
    pub professional_part: u32,

    /// How many leading rows of a block are scanned for header text.
    pub header_scan_depth: usize,

    /// Quiet period (in host clock ticks) before a structural-change burst
    /// triggers a rebind.
    pub debounce_ticks: u64,
}

impl Config {
    pub fn part_id(&self, section: Section) -> u32 {
        match section {
            Section::Relationships => self.relationships_part,
            Section::General => self.general_part,
            Section::Professional => self.professional_part,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relationships_part: 12618,
            general_part: 12619,
            professional_part: 12620,
            header_scan_depth: 2,
            debounce_ticks: 120,
        }
    }
}
