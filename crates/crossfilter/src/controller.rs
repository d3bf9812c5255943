//! Filter application.
//!
//! The engine has no filtering API; it edits the located control and replays
//! the notification sequence a real keyboard interaction would produce, so
//! the host's own submit-on-Enter listener performs the server-side filter.

use crate::classify;
use crate::config::{Config, Section};
use crate::filter_input::{self, ControlKind, FilterControl};
use crate::normalize::normalize;
use dom::events::{DomEvent, DomEventKind, EventSink, Key};
use dom::{Id, Node, collect_text};
use input_state::{ControlId, ControlValueStore};

pub(crate) fn control_id(id: Id) -> ControlId {
    ControlId::from_raw(id.0 as u64)
}

fn locate(dom: &Node, cfg: &Config, section: Section) -> Option<FilterControl> {
    let data = classify::data_block(dom, cfg, section)?;
    let filter = classify::filter_block(dom, cfg, section)?;
    filter_input::person_filter_control(data, filter)
}

fn emit(events: &mut dyn EventSink, target: Id, kind: DomEventKind) {
    events.dispatch(DomEvent { target, kind });
}

fn press_enter(events: &mut dyn EventSink, target: Id) {
    emit(events, target, DomEventKind::KeyDown(Key::Enter));
    emit(events, target, DomEventKind::KeyUp(Key::Enter));
}

/// Visible option texts of a selector, trimmed, in document order.
fn option_texts(select: &Node) -> Vec<String> {
    let mut out = Vec::new();
    for c in select.children() {
        if c.is_element_named("option") {
            let mut t = String::new();
            collect_text(c, &mut t);
            out.push(t.trim().to_string());
        }
    }
    out
}

/// Apply `value` to the section's person filter.
///
/// Text-like controls: focus, set value, emit input + change, press Enter,
/// blur. Selectors: select the option whose visible text equals the
/// normalized value (case-insensitive) and emit a single change; no matching
/// option leaves the selection untouched and reports failure.
pub fn apply(
    dom: &Node,
    controls: &mut ControlValueStore,
    events: &mut dyn EventSink,
    cfg: &Config,
    section: Section,
    value: &str,
) -> bool {
    let Some(control) = locate(dom, cfg, section) else {
        log::debug!(target: "crossfilter.apply", "no filter control for {}", section.name());
        return false;
    };

    let v = normalize(value);
    let cid = control_id(control.id);
    let ok = match control.kind {
        ControlKind::Select => {
            let Some(select) = dom::find_node_by_id(dom, control.id) else {
                return false;
            };
            let matched = option_texts(select)
                .iter()
                .position(|t| t.eq_ignore_ascii_case(&v));
            if let Some(idx) = matched {
                controls.set_selected(cid, idx);
            }
            emit(events, control.id, DomEventKind::Change);
            matched.is_some()
        }
        ControlKind::Text | ControlKind::TextArea => {
            controls.focus(cid);
            controls.set_value(cid, &v);
            emit(events, control.id, DomEventKind::Input);
            emit(events, control.id, DomEventKind::Change);
            press_enter(events, control.id);
            controls.blur(cid);
            true
        }
    };

    log::debug!(
        target: "crossfilter.apply",
        "apply {:?} to {} -> ok={ok}",
        v,
        section.name()
    );
    ok
}

/// Reset the section's person filter to its empty/default state and replay
/// the same submission sequence. Silently a no-op when no control is found.
pub fn clear(
    dom: &Node,
    controls: &mut ControlValueStore,
    events: &mut dyn EventSink,
    cfg: &Config,
    section: Section,
) {
    let Some(control) = locate(dom, cfg, section) else {
        return;
    };

    let cid = control_id(control.id);
    match control.kind {
        ControlKind::Select => {
            controls.set_selected(cid, 0);
            emit(events, control.id, DomEventKind::Change);
        }
        ControlKind::Text | ControlKind::TextArea => {
            controls.clear_value(cid);
            emit(events, control.id, DomEventKind::Input);
            emit(events, control.id, DomEventKind::Change);
            press_enter(events, control.id);
        }
    }
    log::debug!(target: "crossfilter.apply", "cleared {}", section.name());
}
