//! Tests for the pagination controller.

use super::*;
use crate::config::Config;
use crate::html::HtmlSink;
use crate::paginator::PageCountRule;
use crate::record::PersonRecord;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Items { names: Vec<String>, no_results: bool },
    Buttons { count: usize, active: usize },
}

#[derive(Debug, Default)]
struct RecordingSink {
    calls: Vec<Call>,
}

impl RecordingSink {
    fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl<I: Item> RenderSink<I> for RecordingSink {
    fn render_items(&mut self, records: &[&I], no_results: bool) {
        self.calls.push(Call::Items {
            names: records.iter().map(|r| r.filter_value()).collect(),
            no_results,
        });
    }

    fn render_page_buttons(&mut self, count: usize, active: usize) {
        self.calls.push(Call::Buttons { count, active });
    }
}

const NAMES: [(&str, &str); 20] = [
    ("Ethel", "Dean"),
    ("Lorenzo", "Ouellet"),
    ("Ben", "Ng"),
    ("Anna", "Kim"),
    ("Hugo", "Park"),
    ("Mia", "Costa"),
    ("Liam", "Reyes"),
    ("Zoe", "Fischer"),
    ("Omar", "Haddad"),
    ("Ivy", "Chen"),
    ("Noah", "Silva"),
    ("Ruth", "Okafor"),
    ("Felix", "Novak"),
    ("Lena", "Moreau"),
    ("Tariq", "Aziz"),
    ("Anna", "Berg"),
    ("Clara", "Jensen"),
    ("Diego", "Ruiz"),
    ("Yuki", "Sato"),
    ("Piotr", "Wozniak"),
];

fn dataset() -> Vec<PersonRecord> {
    NAMES
        .iter()
        .map(|(first, last)| {
            let email = format!("{}.{}@example.com", first, last).to_lowercase();
            PersonRecord::new(*first, *last, email, "01-01-2020", "avatar.jpg")
        })
        .collect()
}

fn names(range: std::ops::Range<usize>) -> Vec<String> {
    NAMES[range]
        .iter()
        .map(|(first, last)| format!("{} {}", first, last))
        .collect()
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_new_renders_nothing_until_show() {
    let data = dataset();
    let mut sink = RecordingSink::default();
    let pager = PaginationController::new(&data, &mut sink);

    assert_eq!(pager.active_page(), 1);
    assert_eq!(pager.page_count(), 3);
    assert_eq!(pager.search_text(), "");
    drop(pager);
    assert!(sink.calls.is_empty());
}

#[test]
fn test_show_renders_first_page_and_buttons() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());
    pager.show();

    assert_eq!(
        pager.sink_mut().take(),
        [
            Call::Items {
                names: names(0..9),
                no_results: false
            },
            Call::Buttons {
                count: 3,
                active: 1
            },
        ]
    );
}

#[test]
fn test_select_last_page() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());
    pager.show();
    pager.sink_mut().take();

    pager.on_page_selected(3);

    assert_eq!(pager.active_page(), 3);
    assert_eq!(pager.current_page_items().len(), 2);
    assert!(std::ptr::eq(pager.current_page_items()[0], &data[18]));
    assert!(std::ptr::eq(pager.current_page_items()[1], &data[19]));
    assert_eq!(
        pager.sink_mut().take(),
        [
            Call::Items {
                names: names(18..20),
                no_results: false
            },
            Call::Buttons {
                count: 3,
                active: 3
            },
        ]
    );
}

#[test]
fn test_search_narrows_to_single_page() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());
    pager.show();
    pager.on_page_selected(2);
    pager.sink_mut().take();

    pager.on_search_changed("anna");

    assert_eq!(pager.visible().len(), 2);
    assert_eq!(pager.page_count(), 1);
    assert_eq!(pager.active_page(), 1);
    assert_eq!(
        pager.sink_mut().take(),
        [
            Call::Items {
                names: vec!["Anna Kim".to_string(), "Anna Berg".to_string()],
                no_results: false
            },
            Call::Buttons {
                count: 1,
                active: 1
            },
        ]
    );
}

#[test]
fn test_search_without_matches_signals_no_results() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());

    pager.on_search_changed("zzzznomatch");

    assert!(pager.visible().is_empty());
    assert_eq!(pager.page_count(), 1);
    assert_eq!(
        pager.sink_mut().take(),
        [
            Call::Items {
                names: vec![],
                no_results: true
            },
            Call::Buttons {
                count: 1,
                active: 1
            },
        ]
    );

    pager.on_search_changed("");
    assert_eq!(
        pager.sink_mut().take()[0],
        Call::Items {
            names: names(0..9),
            no_results: false
        }
    );
}

#[test]
fn test_search_always_resets_to_first_page() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());

    for text in ["", "a", "e", ""] {
        pager.on_page_selected(3);
        pager.sink_mut().take();
        pager.on_search_changed(text);

        assert_eq!(pager.active_page(), 1, "search {:?}", text);
        let calls = pager.sink_mut().take();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[1], Call::Buttons { active: 1, .. }));
    }
}

#[test]
fn test_page_selection_keeps_search_and_visible_set() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());
    pager.on_search_changed("e");

    let before: Vec<*const PersonRecord> = pager.visible().iter().map(|p| p as *const _).collect();
    pager.on_page_selected(2);
    let after: Vec<*const PersonRecord> = pager.visible().iter().map(|p| p as *const _).collect();

    assert_eq!(pager.search_text(), "e");
    assert_eq!(before, after);
    assert_eq!(pager.active_page(), 2);
}

#[test]
fn test_out_of_range_pages_are_clamped() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());

    pager.on_page_selected(99);
    assert_eq!(pager.active_page(), 3);

    pager.on_page_selected(0);
    assert_eq!(pager.active_page(), 1);
    assert_eq!(
        pager.sink_mut().take().last(),
        Some(&Call::Buttons {
            count: 3,
            active: 1
        })
    );
}

#[test]
fn test_submit_reapplies_current_search() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());
    pager.on_search_changed("o");
    pager.on_page_selected(2);
    pager.sink_mut().take();

    pager.on_search_submitted();

    assert_eq!(pager.search_text(), "o");
    assert_eq!(pager.active_page(), 1);
    assert_eq!(pager.sink_mut().take().len(), 2);
}

#[test]
fn test_handle_events() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());

    pager.handle(Event::from_page_label("2").unwrap());
    assert_eq!(pager.active_page(), 2);

    pager.handle(Event::SearchChanged("ANNA".into()));
    assert_eq!(pager.visible().len(), 2);
    assert_eq!(pager.search_field().value(), "ANNA");

    pager.handle(Event::SearchSubmitted);
    assert_eq!(pager.visible().len(), 2);
}

#[test]
fn test_update_with_messages() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());

    assert!(pager.update(&(Box::new(PageSelectedMsg(3)) as Msg)));
    assert_eq!(pager.active_page(), 3);

    assert!(pager.update(&(Box::new(SearchChangedMsg("kim".into())) as Msg)));
    assert_eq!(pager.visible().len(), 1);
    assert_eq!(pager.active_page(), 1);

    assert!(pager.update(&(Box::new(SearchSubmittedMsg) as Msg)));
    assert!(!pager.update(&(Box::new(42u32) as Msg)));
}

#[test]
fn test_typing_filters_on_every_keystroke() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());

    for c in "ann".chars() {
        assert!(pager.update(&key(KeyCode::Char(c))));
    }
    assert_eq!(pager.search_text(), "ann");
    assert_eq!(pager.visible().len(), 2);
    // Three keystrokes, each re-rendering items and buttons.
    assert_eq!(pager.sink_mut().take().len(), 6);

    assert!(pager.update(&key(KeyCode::Backspace)));
    assert_eq!(pager.search_text(), "an");

    assert!(pager.update(&key(KeyCode::Esc)));
    assert_eq!(pager.search_text(), "");
    assert_eq!(pager.visible().len(), data.len());
}

#[test]
fn test_page_keys_stop_at_edges() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());

    assert!(pager.update(&key(KeyCode::PageUp)));
    assert_eq!(pager.active_page(), 1);
    assert!(pager.sink_mut().take().is_empty());

    for _ in 0..5 {
        pager.update(&key(KeyCode::PageDown));
    }
    assert_eq!(pager.active_page(), 3);
    // Only the two real page changes were rendered.
    assert_eq!(pager.sink_mut().take().len(), 4);

    assert!(pager.update(&key(KeyCode::PageUp)));
    assert_eq!(pager.active_page(), 2);
}

#[test]
fn test_unbound_keys_are_not_handled() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, RecordingSink::default());
    assert!(!pager.update(&key(KeyCode::F(5))));
    assert!(pager.sink_mut().take().is_empty());
}

#[test]
fn test_legacy_page_count_rule() {
    let data = dataset();
    let config = Config::new().with_page_count_rule(PageCountRule::FloorPlusOne);
    let mut pager = PaginationController::with_config(&data[..18], RecordingSink::default(), config);
    pager.show();
    assert_eq!(pager.page_count(), 3);

    pager.sink_mut().take();
    pager.on_page_selected(3);
    assert_eq!(
        pager.sink_mut().take(),
        [
            Call::Items {
                names: vec![],
                no_results: false
            },
            Call::Buttons {
                count: 3,
                active: 3
            },
        ]
    );
}

#[test]
fn test_empty_dataset() {
    let data: Vec<PersonRecord> = Vec::new();
    let mut pager = PaginationController::new(&data, RecordingSink::default());
    pager.show();

    assert_eq!(pager.page_count(), 1);
    assert_eq!(
        pager.sink_mut().take(),
        [
            Call::Items {
                names: vec![],
                no_results: true
            },
            Call::Buttons {
                count: 1,
                active: 1
            },
        ]
    );
}

#[test]
fn test_generic_items() {
    struct Course(&'static str);

    impl Item for Course {
        fn filter_value(&self) -> String {
            self.0.to_string()
        }
    }

    let courses: Vec<Course> = (0..10).map(|_| Course("Data Structures")).collect();
    let mut pager = PaginationController::new(&courses, RecordingSink::default());
    pager.on_search_changed("struct");
    assert_eq!(pager.page_count(), 2);
    pager.on_page_selected(2);
    assert_eq!(pager.current_page_items().len(), 1);
}

#[test]
fn test_html_session() {
    let data = dataset();
    let mut pager = PaginationController::new(&data, HtmlSink::new());
    pager.show();

    let sink = pager.sink();
    assert_eq!(sink.student_list().matches("student-item").count(), 9);
    assert_eq!(sink.link_list().matches("<button").count(), 3);
    assert_eq!(sink.error_label(), "");

    pager.handle(Event::from_page_label("3").unwrap());
    let sink = pager.sink();
    assert_eq!(sink.student_list().matches("student-item").count(), 2);
    assert!(sink
        .link_list()
        .contains("<button type=\"button\" class=\"active\">3</button>"));
    assert_eq!(sink.link_list().matches("class=\"active\"").count(), 1);

    pager.handle(Event::SearchChanged("zzzznomatch".into()));
    let sink = pager.into_sink();
    assert_eq!(sink.student_list(), "");
    assert_eq!(sink.error_label(), "No Results Found!");
    assert_eq!(
        sink.link_list(),
        "<li><button type=\"button\" class=\"active\">1</button></li>"
    );
}

#[test]
fn test_configured_strings_reach_the_sink() {
    let data = dataset();
    let config = Config::new()
        .with_no_results_message("Nobody here.")
        .with_search_placeholder("Find a student");
    let mut pager = PaginationController::with_config(&data, HtmlSink::new(), config);

    pager.on_search_changed("zzzznomatch");
    assert_eq!(pager.sink().error_label(), "Nobody here.");
    assert!(pager
        .sink()
        .search_bar()
        .contains("placeholder=\"Find a student\""));
}

#[test]
fn test_new_keeps_the_sink_strings() {
    let data = dataset();
    let sink = HtmlSink::with_config(&Config::new().with_no_results_message("Empty."));
    let mut pager = PaginationController::new(&data, sink);

    pager.on_search_changed("zzzznomatch");
    assert_eq!(pager.sink().error_label(), "Empty.");
}

#[test]
fn test_configure_through_borrowed_sink() {
    let data = dataset();
    let mut sink = HtmlSink::new();
    {
        let config = Config::new().with_no_results_message("Nobody here.");
        let mut pager = PaginationController::with_config(&data, &mut sink, config);
        pager.on_search_changed("zzzznomatch");
    }
    assert_eq!(sink.error_label(), "Nobody here.");
}
