//! # crossfilter
//!
//! Propagates a person selected in one server-rendered table section
//! ("Relationships") into the filter controls of two others ("General",
//! "Professional"), using only the document structure and the host page's
//! native input/event surface — never a filtering API.
//!
//! The host integrates by:
//! - calling [`CrossFilter::init`] once after the initial render,
//! - forwarding structural churn to [`CrossFilter::on_structure_changed`]
//!   and pumping [`CrossFilter::tick`] from its event loop (debounced rebind),
//! - routing clicks to [`CrossFilter::on_click`] and key presses to
//!   [`CrossFilter::on_key_down`].
//!
//! Every miss (missing section, block, column, row, control) is soft: the
//! operation stops and the next debounced rebind retries naturally.

pub mod bind;
pub mod chips;
pub mod classify;
pub mod columns;
pub mod config;
pub mod controller;
pub mod filter_input;
pub mod grid;
pub mod normalize;
pub mod persist;
pub mod section;
pub mod watch;

use std::collections::HashSet;

use dom::builder::IdAllocator;
use dom::events::{EventSink, Key};
use dom::{Id, Node, collect_text};
use input_state::ControlValueStore;

use crate::chips::ChipRegistry;
use crate::normalize::normalize;
use crate::persist::LAST_PERSON_KEY;
use crate::watch::StructuralWatcher;

pub use crate::config::{Config, Section};
pub use crate::persist::{MemorySessionStore, SessionStore};

/// The host page surfaces the engine reads and writes: the document tree,
/// the control value store, and the native event dispatch.
pub struct Page<'a> {
    pub dom: &'a mut Node,
    pub controls: &'a mut ControlValueStore,
    pub events: &'a mut dyn EventSink,
}

/// The cross-filter engine. Single-threaded and cooperative: every public
/// operation completes synchronously; the only pending work is the debounce
/// deadline inside the watcher.
pub struct CrossFilter<S: SessionStore> {
    cfg: Config,
    store: S,
    bound: HashSet<Id>,
    chips: ChipRegistry,
    watcher: StructuralWatcher,
    ids: IdAllocator,
}

impl<S: SessionStore> CrossFilter<S> {
    pub fn new(cfg: Config, store: S) -> Self {
        let watcher = StructuralWatcher::new(cfg.debounce_ticks);
        Self {
            cfg,
            store,
            bound: HashSet::new(),
            chips: ChipRegistry::default(),
            watcher,
            ids: IdAllocator::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// The injected session store (primarily for inspection in tests).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initial pass: bind the data view and re-assert any persisted filter.
    pub fn init(&mut self, page: &mut Page<'_>) {
        self.refresh(page);
    }

    /// A structural change was observed at `now`; schedules a rebind.
    pub fn on_structure_changed(&mut self, now: u64) {
        self.watcher.notify(now);
    }

    /// Pump from the host event loop. Runs the rebind + reapply pass when a
    /// notification burst has settled; returns whether it ran.
    pub fn tick(&mut self, now: u64, page: &mut Page<'_>) -> bool {
        if !self.watcher.due(now) {
            return false;
        }
        self.refresh(page);
        true
    }

    /// Route a click. Chip clear buttons take precedence over bound data
    /// cells. Returns `true` when the click was consumed (the host must then
    /// stop further propagation).
    pub fn on_click(&mut self, target: Id, page: &mut Page<'_>) -> bool {
        if let Some((section, label)) = self.chips.button_target(page.dom, target) {
            self.clear_chip(page, section, &label);
            return true;
        }

        if !self.bound.contains(&target) {
            return false;
        }

        let name = {
            let Some(cell) = dom::find_node_by_id(page.dom, target) else {
                return true; // bound key survived a re-render; nothing to read
            };
            let mut raw = String::new();
            collect_text(cell, &mut raw);
            normalize(&raw)
        };
        if name.is_empty() {
            return true;
        }

        log::debug!(target: "crossfilter", "selected {name:?}");
        self.store.set(LAST_PERSON_KEY, &name);
        self.apply_to_targets(page, &name);
        true
    }

    /// Route a key press. Escape is the global reset: clears both target
    /// sections, the persisted value, and every chip.
    pub fn on_key_down(&mut self, key: Key, page: &mut Page<'_>) -> bool {
        if key != Key::Escape {
            return false;
        }
        for section in Section::TARGETS {
            controller::clear(page.dom, page.controls, page.events, &self.cfg, section);
        }
        self.store.remove(LAST_PERSON_KEY);
        let removed = self.chips.clear_all(page.dom);
        log::debug!(target: "crossfilter", "global reset; removed {removed} chips");
        true
    }

    fn refresh(&mut self, page: &mut Page<'_>) {
        bind::rebind(page.dom, &self.cfg, &mut self.bound);
        self.reapply(page);
    }

    /// Re-assert the persisted value after a rebind, so a filter set before a
    /// host re-render survives it.
    fn reapply(&mut self, page: &mut Page<'_>) {
        let Some(last) = self.store.get(LAST_PERSON_KEY) else {
            return;
        };
        log::debug!(target: "crossfilter", "reapplying {last:?}");
        self.apply_to_targets(page, &last);
    }

    fn apply_to_targets(&mut self, page: &mut Page<'_>, name: &str) {
        for section in Section::TARGETS {
            let ok = controller::apply(page.dom, page.controls, page.events, &self.cfg, section, name);
            if !ok {
                continue; // no chip for a section the filter did not reach
            }
            if let Some(sec) = section::locate(page.dom, self.cfg.part_id(section)) {
                self.chips
                    .show(page.dom, &mut self.ids, sec.holder, section, name);
            }
        }
    }

    /// Clear one section from its chip. The persisted value is only dropped
    /// when it matches this chip's label, so a stale chip cannot wipe a
    /// different, still-valid selection.
    fn clear_chip(&mut self, page: &mut Page<'_>, section: Section, label: &str) {
        controller::clear(page.dom, page.controls, page.events, &self.cfg, section);
        self.chips.remove(page.dom, section);
        if self.store.get(LAST_PERSON_KEY).as_deref() == Some(label) {
            self.store.remove(LAST_PERSON_KEY);
        }
    }
}
