//! Page boot: build every component against the live document and wire events.
//!
//! The theme is applied first so the page never renders in the wrong
//! scheme. Every other component mounts independently: a failure is logged
//! (`info` for an absent optional mount, `warn` otherwise) and the next
//! component still runs.
//!
//! Components live in `Rc<RefCell<_>>` shared with their event closures.
//! Closures borrow with `try_borrow_mut`, so an unexpected re-entrant event
//! is dropped rather than panicking. The slideshow interval holds only a
//! `Weak` back to its controller; the controller owns the interval.

use std::cell::RefCell;
use std::rc::Rc;

use effects::SiteError;
use effects::config::{CursorConfig, RevealConfig, ScrollConfig, SlideshowConfig, ThemeConfig};
use effects::cursor::PointerFollower;
use effects::logo_strip::LogoStrip;
use effects::reveal::RevealObserver;
use effects::scroll::ScrollWatchers;
use effects::slideshow::SlideshowController;
use effects::surface::RenderingSurface;
use effects::theme::ThemeManager;
use js_sys::{Array, Function};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config_source::{CONFIG_ELEMENT_ID, parse_inline_config};
use crate::dom::DomSurface;
use crate::storage::{LocalStore, prefers_dark};
use crate::timers::IntervalScheduler;

type Slideshow = SlideshowController<DomSurface, IntervalScheduler>;

/// Run [`run`] now, or on `DOMContentLoaded` while the document is still parsing.
pub fn when_ready() {
    let Some(window) = web_sys::window() else {
        log::warn!("boot: no window, nothing to do");
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("boot: no document, nothing to do");
        return;
    };
    if document.ready_state() != "loading" {
        run(&window, &document);
        return;
    }
    let target = document.clone();
    let callback = Closure::once_into_js(move |_: Event| run(&window, &document));
    if let Err(err) = target.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::warn!("boot: cannot wait for DOMContentLoaded: {err:?}");
    }
}

fn run(window: &Window, document: &Document) {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let config = parse_inline_config(raw.as_deref());
    log::set_max_level(config.console_level().to_level_filter());

    let surface = DomSurface::new(document.clone());
    report("theme", mount_theme(window, &surface, &config.theme));
    report("slideshow", mount_slideshow(&surface, &config.slideshow));
    mount_scroll(window, &surface, &config.scroll);
    report("reveal", mount_reveal(&surface, &config.reveal));
    report("cursor", mount_cursor(window, &surface, &config.cursor));
    report(
        "logo strip",
        LogoStrip::initialize(&mut surface.clone(), &config.logo_strip).map(|copies| {
            log::debug!("boot: logo strip doubled with {copies} copies");
        }),
    );
}

fn report(component: &str, result: Result<(), SiteError>) {
    match result {
        Ok(()) => log::debug!("boot: {component} ready"),
        Err(err) if err.is_missing_mount() => log::info!("boot: {component} skipped: {err}"),
        Err(err) => log::warn!("boot: {component} degraded: {err}"),
    }
}

// =============================================================
// Event plumbing
// =============================================================

/// Borrow a shared component for one event. `None` when it is already borrowed.
fn with_mut<T, R>(cell: &RefCell<T>, f: impl FnOnce(&mut T) -> R) -> Option<R> {
    match cell.try_borrow_mut() {
        Ok(mut guard) => Some(f(&mut guard)),
        Err(_) => {
            log::debug!("boot: re-entrant event dropped");
            None
        }
    }
}

/// Attach a listener for the page's lifetime.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("boot: cannot listen for {event}: {err:?}");
    }
    closure.forget();
}

/// Like [`listen`], but tells the browser the handler never cancels the event.
fn listen_passive(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("boot: cannot listen for {event}: {err:?}");
    }
    closure.forget();
}

// =============================================================
// Components
// =============================================================

fn mount_theme(window: &Window, surface: &DomSurface, config: &ThemeConfig) -> Result<(), SiteError> {
    let store = LocalStore::open(window);
    if !store.is_persistent() {
        log::debug!("theme: choice will not survive a reload");
    }
    let manager = ThemeManager::initialize(surface.clone(), store, config, prefers_dark(window))?;
    let button = manager.toggle_button().clone();
    let manager = Rc::new(RefCell::new(manager));
    listen(button.as_ref(), "click", move |_| {
        if let Some(now) = with_mut(&manager, ThemeManager::toggle) {
            log::debug!("theme: switched to {}", now.as_str());
        }
    });
    Ok(())
}

fn mount_slideshow(surface: &DomSurface, config: &SlideshowConfig) -> Result<(), SiteError> {
    let slot: Rc<RefCell<Option<Slideshow>>> = Rc::new(RefCell::new(None));
    let weak = Rc::downgrade(&slot);
    let scheduler = IntervalScheduler::new(move || {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        with_mut(&slot, |controller| {
            if let Some(controller) = controller.as_mut() {
                controller.tick();
            }
        });
    });

    let controller = SlideshowController::initialize(surface.clone(), scheduler, config)?;
    for (index, selector) in controller.selectors().iter().enumerate() {
        let slot = Rc::clone(&slot);
        listen(selector.as_ref(), "click", move |_| {
            with_mut(&slot, |controller| {
                if let Some(controller) = controller.as_mut() {
                    controller.go_to(index);
                }
            });
        });
    }
    *slot.borrow_mut() = Some(controller);
    Ok(())
}

fn mount_scroll(window: &Window, surface: &DomSurface, config: &ScrollConfig) {
    let watchers = ScrollWatchers::initialize(surface.clone(), config);
    if let Some(button) = watchers.back_to_top_button() {
        let window = window.clone();
        listen(button.as_ref(), "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }

    let watchers = Rc::new(RefCell::new(watchers));
    project_scroll(window, &watchers);
    let on_scroll = {
        let window = window.clone();
        move |_| project_scroll(&window, &watchers)
    };
    listen_passive(window.as_ref(), "scroll", on_scroll);
}

fn project_scroll(window: &Window, watchers: &RefCell<ScrollWatchers<DomSurface>>) {
    let offset = window.scroll_y().unwrap_or_default();
    // Without a viewport height the button stays hidden.
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(f64::INFINITY);
    with_mut(watchers, |watchers| watchers.on_scroll(offset, viewport));
}

fn mount_reveal(surface: &DomSurface, config: &RevealConfig) -> Result<(), SiteError> {
    let slot: Rc<RefCell<Option<RevealObserver<DomSurface>>>> = Rc::new(RefCell::new(None));
    let watcher = create_intersection_watcher(&slot, config.threshold);
    let observer = RevealObserver::initialize(surface.clone(), config, watcher.is_some())?;
    if let Some(watcher) = &watcher {
        for target in observer.pending() {
            watcher.observe(target);
        }
    }
    log::debug!("reveal: watching {} targets", observer.len());
    *slot.borrow_mut() = Some(observer);
    Ok(())
}

/// `None` when the browser has no `IntersectionObserver`.
fn create_intersection_watcher(
    slot: &Rc<RefCell<Option<RevealObserver<DomSurface>>>>,
    threshold: f64,
) -> Option<IntersectionObserver> {
    let slot = Rc::clone(slot);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, watcher: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let revealed = with_mut(&slot, |observer| {
                    observer.as_mut().is_some_and(|observer| {
                        observer.on_visibility(&target, entry.intersection_ratio(), entry.is_intersecting())
                    })
                });
                if revealed == Some(true) {
                    watcher.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&threshold.into());
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(watcher) => {
            callback.forget();
            Some(watcher)
        }
        Err(err) => {
            log::debug!("reveal: IntersectionObserver unavailable: {err:?}");
            None
        }
    }
}

fn mount_cursor(window: &Window, surface: &DomSurface, config: &CursorConfig) -> Result<(), SiteError> {
    if !config.enabled {
        log::info!("cursor: disabled by config");
        return Ok(());
    }
    let follower = Rc::new(RefCell::new(PointerFollower::initialize(surface.clone(), config)?));

    let frame = {
        let follower = Rc::clone(&follower);
        Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            with_mut(&follower, PointerFollower::on_frame);
        })
    };
    let frame_fn: Function = frame.as_ref().unchecked_ref::<Function>().clone();
    frame.forget();

    let on_move = {
        let follower = Rc::clone(&follower);
        let window = window.clone();
        move |event: Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
            let needs_frame = with_mut(&follower, |follower| follower.on_pointer_move(x, y));
            if needs_frame != Some(true) {
                return;
            }
            if let Err(err) = window.request_animation_frame(&frame_fn) {
                log::debug!("cursor: requestAnimationFrame failed: {err:?}");
                with_mut(&follower, PointerFollower::on_frame);
            }
        }
    };
    listen(window.as_ref(), "mousemove", on_move);

    for target in surface.query_all(&config.interactive_selector) {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let follower = Rc::clone(&follower);
            listen(target.as_ref(), event, move |_| {
                with_mut(&follower, |follower| follower.set_hover(hovering));
            });
        }
    }
    Ok(())
}
