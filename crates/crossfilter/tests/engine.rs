//! End-to-end tests driving the engine against a full three-section page
//! fixture, the way the host would: init, routed clicks and keys, structural
//! notifications plus ticks.

use crossfilter::chips::CHIP_CLASS;
use crossfilter::config::Config;
use crossfilter::persist::{LAST_PERSON_KEY, MemorySessionStore, SessionStore};
use crossfilter::{CrossFilter, Page};
use dom::builder::{doc, elem, elem_with, text};
use dom::events::{DomEvent, DomEventKind, Key};
use dom::{Id, Node, collect_text, find_node_by_id, has_class, remove_node_by_id};
use input_state::{ControlId, ControlValueStore};

const REL_HOLDER: Id = Id(100);
const GEN_HOLDER: Id = Id(200);
const PROF_HOLDER: Id = Id(300);

const DOE_CELL: Id = Id(133);
const SMITH_CELL: Id = Id(143);

const GEN_INPUT: Id = Id(223);
const PROF_INPUT: Id = Id(323);

fn th(id: u32, label: &str) -> Node {
    elem(id, "th", vec![text(id + 1, label)])
}

fn td(id: u32, content: &str) -> Node {
    elem(id, "td", vec![text(id + 1, content)])
}

fn tr(id: u32, cells: Vec<Node>) -> Node {
    elem(id, "tr", cells)
}

fn anchor(id: u32, part: u32) -> Node {
    let href = format!("?id={part}&elem=pagepart");
    elem_with(id, "a", vec![("href", Some(href.as_str()))], Vec::new())
}

fn filter_input(id: u32) -> Node {
    elem_with(id, "input", vec![("type", Some("text"))], Vec::new())
}

/// `th` cell of a filter row: the "Contains" marker plus the control.
fn contains_th(id: u32, control: Option<Node>) -> Node {
    let mut children = vec![text(id + 1, "Contains")];
    children.extend(control);
    elem(id, "th", children)
}

fn relationships_section() -> Vec<Node> {
    // Small filter table first, so classification has to skip it.
    let filter = elem(
        110,
        "table",
        vec![
            tr(111, vec![th(112, "Contact")]),
            tr(114, vec![contains_th(115, Some(filter_input(117)))]),
        ],
    );
    let data = elem(
        120,
        "table",
        vec![
            tr(
                121,
                vec![
                    th(122, "Individual"),
                    th(124, "Contact"),
                    th(126, "Relationship to Individual"),
                ],
            ),
            tr(
                130,
                vec![td(131, "Ann Individual"), td(133, "Doe, Jane, "), td(135, "Parent")],
            ),
            tr(
                140,
                vec![td(141, "Ann Individual"), td(143, "Smith, John, "), td(145, "Guardian")],
            ),
        ],
    );
    vec![elem(100, "div", vec![anchor(101, 12618), filter, data])]
}

fn general_section() -> Vec<Node> {
    let filter = elem(
        210,
        "table",
        vec![
            tr(211, vec![th(212, "Person"), th(214, "Phone"), th(216, "City")]),
            tr(
                220,
                vec![
                    contains_th(221, Some(filter_input(223))),
                    contains_th(224, None),
                    contains_th(226, None),
                ],
            ),
        ],
    );
    let data = elem(
        230,
        "table",
        vec![
            tr(231, vec![th(232, "Person"), th(234, "Phone"), th(236, "City")]),
            tr(240, vec![td(241, "Doe, Jane"), td(243, "555-0100"), td(245, "Aurora")]),
        ],
    );
    vec![elem(200, "div", vec![anchor(201, 12619), filter, data])]
}

fn professional_section() -> Vec<Node> {
    let filter = elem(
        310,
        "table",
        vec![
            tr(311, vec![th(312, "Person"), th(314, "Organization")]),
            tr(
                320,
                vec![contains_th(321, Some(filter_input(323))), contains_th(324, None)],
            ),
        ],
    );
    let data = elem(
        330,
        "table",
        vec![
            tr(
                331,
                vec![th(332, "Person"), th(334, "Organization"), th(336, "Professional Type")],
            ),
            tr(340, vec![td(341, "Doe, Jane"), td(343, "Clinic"), td(345, "Physician")]),
        ],
    );
    vec![elem(300, "div", vec![anchor(301, 12620), filter, data])]
}

fn full_page() -> Node {
    let mut children = relationships_section();
    children.extend(general_section());
    children.extend(professional_section());
    doc(children)
}

struct Fixture {
    dom: Node,
    controls: ControlValueStore,
    events: Vec<DomEvent>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dom: full_page(),
            controls: ControlValueStore::new(),
            events: Vec::new(),
        }
    }

    fn page(&mut self) -> Page<'_> {
        Page {
            dom: &mut self.dom,
            controls: &mut self.controls,
            events: &mut self.events,
        }
    }

    fn value(&self, input: Id) -> Option<&str> {
        self.controls.get(ControlId::from_raw(input.0 as u64))
    }

    fn events_for(&self, input: Id) -> Vec<DomEventKind> {
        self.events
            .iter()
            .filter(|e| e.target == input)
            .map(|e| e.kind)
            .collect()
    }
}

fn engine() -> CrossFilter<MemorySessionStore> {
    CrossFilter::new(Config::default(), MemorySessionStore::new())
}

fn section_chip(dom: &Node, holder: Id) -> Option<&Node> {
    find_node_by_id(dom, holder)?
        .children()
        .iter()
        .find(|c| has_class(c, CHIP_CLASS))
}

fn chip_label(dom: &Node, holder: Id) -> Option<String> {
    let chip = section_chip(dom, holder)?;
    let strong = chip.children().iter().find(|c| c.is_element_named("strong"))?;
    let mut out = String::new();
    collect_text(strong, &mut out);
    Some(out)
}

fn chip_button(dom: &Node, holder: Id) -> Option<Id> {
    section_chip(dom, holder)?
        .children()
        .iter()
        .find(|c| c.is_element_named("button"))
        .map(Node::id)
}

#[test]
fn clicking_a_contact_cell_filters_both_target_sections() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());

    assert!(cf.on_click(DOE_CELL, &mut fx.page()));

    // Persisted, normalized.
    assert_eq!(
        cf.store().get(LAST_PERSON_KEY),
        Some("Doe, Jane".to_string())
    );

    // Both person filters carry the value and saw the full submit sequence.
    for input in [GEN_INPUT, PROF_INPUT] {
        assert_eq!(fx.value(input), Some("Doe, Jane"));
        assert_eq!(
            fx.events_for(input),
            vec![
                DomEventKind::Input,
                DomEventKind::Change,
                DomEventKind::KeyDown(Key::Enter),
                DomEventKind::KeyUp(Key::Enter),
            ]
        );
    }

    // One chip per target section, none on Relationships.
    assert_eq!(chip_label(&fx.dom, GEN_HOLDER).as_deref(), Some("Doe, Jane"));
    assert_eq!(chip_label(&fx.dom, PROF_HOLDER).as_deref(), Some("Doe, Jane"));
    assert!(section_chip(&fx.dom, REL_HOLDER).is_none());
}

#[test]
fn clicks_outside_bound_cells_are_not_consumed() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());

    assert!(!cf.on_click(Id(135), &mut fx.page())); // Relationship column
    assert!(!cf.on_click(Id(121), &mut fx.page())); // header row
    assert!(fx.events.is_empty());
    assert_eq!(cf.store().get(LAST_PERSON_KEY), None);
}

#[test]
fn a_later_click_overwrites_the_selection_and_chip_labels() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());

    assert!(cf.on_click(DOE_CELL, &mut fx.page()));
    assert!(cf.on_click(SMITH_CELL, &mut fx.page()));

    assert_eq!(
        cf.store().get(LAST_PERSON_KEY),
        Some("Smith, John".to_string())
    );
    assert_eq!(fx.value(GEN_INPUT), Some("Smith, John"));
    assert_eq!(chip_label(&fx.dom, GEN_HOLDER).as_deref(), Some("Smith, John"));
    assert_eq!(chip_label(&fx.dom, PROF_HOLDER).as_deref(), Some("Smith, John"));
}

#[test]
fn chip_clear_is_scoped_to_its_own_label() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());
    assert!(cf.on_click(DOE_CELL, &mut fx.page()));

    // Matching label: clearing the General chip also drops the persisted value.
    let button = chip_button(&fx.dom, GEN_HOLDER).unwrap();
    assert!(cf.on_click(button, &mut fx.page()));
    assert_eq!(fx.value(GEN_INPUT), Some(""));
    assert!(section_chip(&fx.dom, GEN_HOLDER).is_none());
    assert_eq!(cf.store().get(LAST_PERSON_KEY), None);

    // The Professional chip is untouched.
    assert_eq!(chip_label(&fx.dom, PROF_HOLDER).as_deref(), Some("Doe, Jane"));
}

#[test]
fn a_stale_chip_does_not_wipe_a_newer_selection() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());
    assert!(cf.on_click(SMITH_CELL, &mut fx.page()));

    // The Professional filter control vanishes (host quirk); the next apply
    // cannot reach that section, so its chip keeps the old label.
    remove_node_by_id(&mut fx.dom, PROF_INPUT);
    assert!(cf.on_click(DOE_CELL, &mut fx.page()));

    assert_eq!(chip_label(&fx.dom, GEN_HOLDER).as_deref(), Some("Doe, Jane"));
    assert_eq!(chip_label(&fx.dom, PROF_HOLDER).as_deref(), Some("Smith, John"));
    assert_eq!(cf.store().get(LAST_PERSON_KEY), Some("Doe, Jane".to_string()));

    // Clearing the stale Professional chip must not remove "Doe, Jane".
    let button = chip_button(&fx.dom, PROF_HOLDER).unwrap();
    assert!(cf.on_click(button, &mut fx.page()));
    assert!(section_chip(&fx.dom, PROF_HOLDER).is_none());
    assert_eq!(cf.store().get(LAST_PERSON_KEY), Some("Doe, Jane".to_string()));
}

#[test]
fn escape_clears_filters_persistence_and_all_chips() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());
    assert!(cf.on_click(DOE_CELL, &mut fx.page()));

    assert!(cf.on_key_down(Key::Escape, &mut fx.page()));

    assert_eq!(fx.value(GEN_INPUT), Some(""));
    assert_eq!(fx.value(PROF_INPUT), Some(""));
    assert_eq!(cf.store().get(LAST_PERSON_KEY), None);
    assert!(section_chip(&fx.dom, GEN_HOLDER).is_none());
    assert!(section_chip(&fx.dom, PROF_HOLDER).is_none());

    // Other keys are not the engine's business.
    assert!(!cf.on_key_down(Key::Enter, &mut fx.page()));
}

#[test]
fn escape_works_even_when_only_one_section_has_a_filter() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());

    remove_node_by_id(&mut fx.dom, PROF_INPUT);
    assert!(cf.on_click(DOE_CELL, &mut fx.page()));
    assert!(section_chip(&fx.dom, PROF_HOLDER).is_none());

    assert!(cf.on_key_down(Key::Escape, &mut fx.page()));
    assert_eq!(fx.value(GEN_INPUT), Some(""));
    assert_eq!(cf.store().get(LAST_PERSON_KEY), None);
    assert!(section_chip(&fx.dom, GEN_HOLDER).is_none());
}

#[test]
fn rebinding_twice_attaches_nothing_new() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());

    // A settled (empty) structural burst re-runs the pass over an unchanged
    // view.
    cf.on_structure_changed(0);
    assert!(cf.tick(120, &mut fx.page()));

    assert!(cf.on_click(DOE_CELL, &mut fx.page()));

    // Exactly one submit sequence per target control: no duplicate handlers.
    assert_eq!(
        fx.events_for(GEN_INPUT),
        vec![
            DomEventKind::Input,
            DomEventKind::Change,
            DomEventKind::KeyDown(Key::Enter),
            DomEventKind::KeyUp(Key::Enter),
        ]
    );
}

#[test]
fn a_persisted_value_is_reapplied_on_init_alone() {
    let mut fx = Fixture::new();
    let mut store = MemorySessionStore::new();
    store.set(LAST_PERSON_KEY, "Doe, Jane");
    let mut cf = CrossFilter::new(Config::default(), store);

    cf.init(&mut fx.page());

    assert_eq!(fx.value(GEN_INPUT), Some("Doe, Jane"));
    assert_eq!(fx.value(PROF_INPUT), Some("Doe, Jane"));
    assert_eq!(chip_label(&fx.dom, GEN_HOLDER).as_deref(), Some("Doe, Jane"));
    assert_eq!(chip_label(&fx.dom, PROF_HOLDER).as_deref(), Some("Doe, Jane"));
}

#[test]
fn a_filter_survives_a_host_rerender_of_the_data_view() {
    let mut fx = Fixture::new();
    let mut cf = engine();
    cf.init(&mut fx.page());
    assert!(cf.on_click(DOE_CELL, &mut fx.page()));

    // Host paginates: the Relationships data rows are torn down and rebuilt
    // with fresh nodes, and the injected chips go with them.
    {
        let table = dom::find_node_by_id_mut(&mut fx.dom, Id(120)).unwrap();
        let rows = table.children_mut().unwrap();
        rows.truncate(1); // keep the header
        rows.push(tr(
            150,
            vec![td(151, "Ann Individual"), td(153, "Miller, Ada, "), td(155, "Aunt")],
        ));
    }
    let removed = dom::remove_elements_with_class(&mut fx.dom, CHIP_CLASS);
    assert_eq!(removed, 2);

    // The burst coalesces: nothing runs until the debounce settles.
    cf.on_structure_changed(1000);
    cf.on_structure_changed(1050);
    assert!(!cf.tick(1100, &mut fx.page()));
    assert!(cf.tick(1170, &mut fx.page()));

    // Reapply restored the filter and the chips without user interaction.
    assert_eq!(fx.value(GEN_INPUT), Some("Doe, Jane"));
    assert_eq!(chip_label(&fx.dom, GEN_HOLDER).as_deref(), Some("Doe, Jane"));
    assert_eq!(chip_label(&fx.dom, PROF_HOLDER).as_deref(), Some("Doe, Jane"));

    // And the fresh cell is bound and clickable.
    assert!(cf.on_click(Id(153), &mut fx.page()));
    assert_eq!(
        cf.store().get(LAST_PERSON_KEY),
        Some("Miller, Ada".to_string())
    );
    assert_eq!(fx.value(GEN_INPUT), Some("Miller, Ada"));
}

#[test]
fn an_empty_cell_is_consumed_but_changes_nothing() {
    let mut fx = Fixture::new();
    {
        let table = dom::find_node_by_id_mut(&mut fx.dom, Id(120)).unwrap();
        table.children_mut().unwrap().push(tr(160, vec![td(161, "x"), td(163, " , "), td(165, "y")]));
    }
    let mut cf = engine();
    cf.init(&mut fx.page());

    assert!(cf.on_click(Id(163), &mut fx.page()));
    assert_eq!(cf.store().get(LAST_PERSON_KEY), None);
    assert!(fx.events.is_empty());
    assert!(section_chip(&fx.dom, GEN_HOLDER).is_none());
}
