//! Integration tests: header and progress indicator driven by one observer
//!
//! Run with:
//! ```bash
//! cargo test -p edible-vibe-core --test header_scroll_flow
//! ```

use edible_vibe_core::{
    HeaderChrome, HeaderState, MenuEvent, MenuState, NavItem, ScrollObserver, ScrollPosition,
    ScrollPublisher, ScrollSource,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Viewport stand-in: a 3000px document in a 1000px window
#[derive(Clone, Default)]
struct Viewport {
    publisher: Arc<Mutex<Option<ScrollPublisher>>>,
}

impl Viewport {
    fn scroll_to(&self, offset: f64) {
        if let Some(publisher) = self.publisher.lock().as_ref() {
            publisher.publish(ScrollPosition::new(offset, 2000.0));
        }
    }

    fn listening(&self) -> bool {
        self.publisher.lock().is_some()
    }
}

impl ScrollSource for Viewport {
    fn sample(&self) -> ScrollPosition {
        ScrollPosition::new(0.0, 2000.0)
    }

    fn attach(&self, publisher: ScrollPublisher) {
        *self.publisher.lock() = Some(publisher);
    }

    fn detach(&self) {
        *self.publisher.lock() = None;
    }
}

#[test]
fn test_scroll_sequence_drives_header_chrome() {
    let viewport = Viewport::default();
    let observer = ScrollObserver::new(viewport.clone());

    let header = Arc::new(Mutex::new(HeaderState::new()));
    let chromes = Arc::new(Mutex::new(Vec::new()));

    let state = Arc::clone(&header);
    let log = Arc::clone(&chromes);
    let _sub = observer.subscribe_with(move |pos| {
        let mut header = state.lock();
        header.on_scroll(pos.offset);
        log.lock().push(header.chrome);
    });

    for offset in [50.0, 120.0, 0.0] {
        viewport.scroll_to(offset);
    }

    // First entry is the initial measurement taken on attach
    assert_eq!(
        *chromes.lock(),
        vec![
            HeaderChrome::Transparent,
            HeaderChrome::Opaque,
            HeaderChrome::Opaque,
            HeaderChrome::Transparent
        ]
    );
}

#[test]
fn test_progress_and_header_share_observer() {
    let viewport = Viewport::default();
    let observer = ScrollObserver::new(viewport.clone());

    let progress = Arc::new(Mutex::new(0.0));
    let sink = Arc::clone(&progress);
    let progress_sub = observer.subscribe_with(move |pos| *sink.lock() = pos.progress());
    let header_sub = observer.subscribe();

    viewport.scroll_to(500.0);
    assert_eq!(*progress.lock(), 0.25);
    assert_eq!(
        HeaderChrome::for_offset(header_sub.current_offset()),
        HeaderChrome::Opaque
    );

    // Elastic overscroll past the bottom stays full
    viewport.scroll_to(2150.0);
    assert_eq!(*progress.lock(), 1.0);

    drop(progress_sub);
    assert!(viewport.listening());
    drop(header_sub);
    assert!(!viewport.listening());
}

#[test]
fn test_menu_and_scroll_are_independent() {
    let viewport = Viewport::default();
    let observer = ScrollObserver::new(viewport.clone());
    let sub = observer.subscribe();
    let mut header = HeaderState::new();

    header.handle(MenuEvent::Toggle);
    viewport.scroll_to(80.0);
    header.on_scroll(sub.current_offset());
    assert_eq!(header.menu, MenuState::Open);
    assert_eq!(header.chrome, HeaderChrome::Opaque);

    let nav = header.handle(MenuEvent::Select(NavItem::Contact));
    assert_eq!(nav.map(|r| r.to_string()), Some("/contact".to_string()));
    assert_eq!(header.menu, MenuState::Closed);
    assert_eq!(header.chrome, HeaderChrome::Opaque);
}
