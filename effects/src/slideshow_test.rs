use super::*;
use crate::memory::{ManualScheduler, MemorySurface, NodeId};

// =============================================================
// Helpers
// =============================================================

type Controller = SlideshowController<MemorySurface, ManualScheduler>;

struct Page {
    surface: MemorySurface,
    clock: ManualScheduler,
    caption: NodeId,
}

fn page() -> Page {
    let surface = MemorySurface::new();
    surface.add_to_body("div", Some("slides"), "");
    surface.add_to_body("div", Some("dots"), "");
    let caption = surface.add_to_body("p", Some("hero-text-placeholder"), "");
    Page { surface, clock: ManualScheduler::new(), caption }
}

fn config_with(captions: &[&str]) -> SlideshowConfig {
    SlideshowConfig {
        slides: captions
            .iter()
            .map(|c| Slide::new(format!("{}.jpg", c.to_lowercase()), *c))
            .collect(),
        ..SlideshowConfig::default()
    }
}

fn start(page: &Page, captions: &[&str]) -> Controller {
    SlideshowController::initialize(page.surface.clone(), page.clock.clone(), &config_with(captions))
        .expect("slideshow should initialize")
}

fn run(page: &Page, controller: &mut Controller, elapsed_ms: u64) {
    page.clock.run_for(elapsed_ms, |_| controller.tick());
}

fn active_nodes(surface: &MemorySurface, nodes: &[NodeId]) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| surface.has_marker(node, ACTIVE_MARKER))
        .map(|(i, _)| i)
        .collect()
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn initialize_builds_one_display_and_selector_per_slide() {
    let page = page();
    let controller = start(&page, &["A", "B", "C"]);
    let slides_root = page.surface.by_id("slides").expect("slides");
    let dots_root = page.surface.by_id("dots").expect("dots");

    assert_eq!(page.surface.children(&slides_root), controller.displays().to_vec());
    assert_eq!(page.surface.children(&dots_root), controller.selectors().to_vec());
    assert_eq!(controller.len(), 3);

    let first = controller.displays()[0];
    assert!(page.surface.has_marker(&first, "slide"));
    assert_eq!(page.surface.style(first, "background-image").as_deref(), Some("url(a.jpg)"));

    let labels: Vec<_> = controller
        .selectors()
        .iter()
        .map(|node| page.surface.attribute(*node, "aria-label").unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["Go to slide 1", "Go to slide 2", "Go to slide 3"]);
}

#[test]
fn initialize_shows_first_slide_and_starts_one_timer() {
    let page = page();
    let controller = start(&page, &["A", "B", "C"]);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(page.surface.text(page.caption), "A");
    assert_eq!(active_nodes(&page.surface, controller.selectors()), vec![0]);
    assert_eq!(active_nodes(&page.surface, controller.displays()), vec![0]);
    assert!(controller.timer().is_some());
    assert_eq!(page.clock.active_count(), 1);
}

#[test]
fn initialize_with_default_config_uses_hero_slides() {
    let page = page();
    let controller =
        SlideshowController::initialize(page.surface.clone(), page.clock.clone(), &SlideshowConfig::default())
            .expect("slideshow");
    assert_eq!(controller.len(), crate::assets::HERO_SLIDES.len());
    assert_eq!(controller.current_slide().image, "daftruck.jpg");
}

#[test]
fn initialize_without_mounts_reports_missing_mount() {
    for missing in ["slides", "dots", "hero-text-placeholder"] {
        let surface = MemorySurface::new();
        for id in ["slides", "dots", "hero-text-placeholder"] {
            if id != missing {
                surface.add_to_body("div", Some(id), "");
            }
        }
        let before = surface.node_count();
        let result = SlideshowController::initialize(surface.clone(), ManualScheduler::new(), &config_with(&["A"]));
        match result {
            Err(SiteError::MissingMount(id)) => assert_eq!(id, missing),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("initialize should fail without `{missing}`"),
        }
        assert_eq!(surface.node_count(), before, "no nodes created when a mount is missing");
    }
}

#[test]
fn initialize_rejects_empty_slides() {
    let page = page();
    let result = SlideshowController::initialize(page.surface.clone(), page.clock.clone(), &config_with(&[]));
    assert!(matches!(result, Err(SiteError::EmptySlideshow)));
    assert_eq!(page.clock.started_count(), 0);
}

// =============================================================
// show / tick
// =============================================================

#[test]
fn show_marks_exactly_one_pair_active() {
    let page = page();
    let mut controller = start(&page, &["A", "B", "C", "D"]);
    for index in [2, 0, 3, 3, 1] {
        controller.show(index);
        assert_eq!(active_nodes(&page.surface, controller.displays()), vec![index]);
        assert_eq!(active_nodes(&page.surface, controller.selectors()), vec![index]);
        assert_eq!(controller.current_index(), index);
    }
    assert_eq!(page.surface.text(page.caption), "B");
}

#[test]
fn show_out_of_range_changes_nothing() {
    let page = page();
    let mut controller = start(&page, &["A", "B"]);
    controller.show(1);
    controller.show(7);
    assert_eq!(controller.current_index(), 1);
    assert_eq!(page.surface.text(page.caption), "B");
}

#[test]
fn tick_wraps_around() {
    let page = page();
    let mut controller = start(&page, &["A", "B", "C"]);
    let mut seen = Vec::new();
    for _ in 0..7 {
        controller.tick();
        seen.push(controller.current_index());
    }
    assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
}

#[test]
fn single_slide_ticks_in_place() {
    let page = page();
    let mut controller = start(&page, &["Only"]);
    controller.tick();
    controller.tick();
    assert_eq!(controller.current_index(), 0);
    assert_eq!(page.surface.text(page.caption), "Only");
}

#[test]
fn three_ticks_return_to_first_slide() {
    let page = page();
    let mut controller = start(&page, &["A", "B", "C"]);
    controller.show(0);
    assert_eq!(page.surface.text(page.caption), "A");
    for _ in 0..3 {
        controller.tick();
    }
    assert_eq!(page.surface.text(page.caption), "A");
    assert_eq!(active_nodes(&page.surface, controller.selectors()), vec![0]);
}

// =============================================================
// Autoplay timing
// =============================================================

#[test]
fn autoplay_advances_every_interval() {
    let page = page();
    let mut controller = start(&page, &["A", "B", "C"]);
    run(&page, &mut controller, 4999);
    assert_eq!(controller.current_index(), 0);
    run(&page, &mut controller, 1);
    assert_eq!(controller.current_index(), 1);
    run(&page, &mut controller, 10_000);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn go_to_restarts_countdown() {
    let page = page();
    let mut controller = start(&page, &["A", "B", "C", "D"]);
    run(&page, &mut controller, 4000);
    controller.go_to(2);
    assert_eq!(controller.current_index(), 2);

    // The tick first scheduled for 5000ms must not fire.
    run(&page, &mut controller, 4999);
    assert_eq!(controller.current_index(), 2);

    run(&page, &mut controller, 1);
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn go_to_keeps_exactly_one_timer() {
    let page = page();
    let mut controller = start(&page, &["A", "B", "C"]);
    let first = controller.timer();
    controller.go_to(1);
    controller.go_to(2);
    controller.go_to(0);
    assert_eq!(page.clock.active_count(), 1);
    assert_eq!(page.clock.started_count(), 4);
    assert_ne!(controller.timer(), first);
}

#[test]
fn go_to_out_of_range_keeps_schedule() {
    let page = page();
    let mut controller = start(&page, &["A", "B"]);
    let timer = controller.timer();
    controller.go_to(5);
    assert_eq!(controller.timer(), timer);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn stop_autoplay_cancels_timer() {
    let page = page();
    let mut controller = start(&page, &["A", "B"]);
    controller.stop_autoplay();
    assert!(controller.timer().is_none());
    run(&page, &mut controller, 20_000);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn custom_interval_is_used() {
    let page = page();
    let config = SlideshowConfig { interval_ms: 1000, ..config_with(&["A", "B", "C"]) };
    let mut controller =
        SlideshowController::initialize(page.surface.clone(), page.clock.clone(), &config).expect("slideshow");
    run(&page, &mut controller, 2000);
    assert_eq!(controller.current_index(), 2);
}
