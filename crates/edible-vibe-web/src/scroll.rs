//! Browser scroll source and scroll hooks

use edible_vibe_core::{
    HeaderState, ScrollObserver, ScrollPosition, ScrollPublisher, ScrollSource,
};
use leptos::ev;
use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use leptos::prelude::*;
use parking_lot::Mutex;

/// `window` scroll events as a [`ScrollSource`]
#[derive(Default)]
pub struct WindowScrollSource {
    handles: Mutex<Vec<WindowListenerHandle>>,
}

/// Read the current viewport measurement from the DOM
fn measure() -> ScrollPosition {
    let window = window();
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);

    ScrollPosition::new(offset, document_height - viewport)
}

impl ScrollSource for WindowScrollSource {
    fn sample(&self) -> ScrollPosition {
        measure()
    }

    fn attach(&self, publisher: ScrollPublisher) {
        let scroll_publisher = publisher.clone();
        let on_scroll = window_event_listener(ev::scroll, move |_| {
            scroll_publisher.publish(measure());
        });
        // Resizing changes the scrollable height without a scroll event
        let on_resize = window_event_listener(ev::resize, move |_| {
            publisher.publish(measure());
        });

        let mut handles = self.handles.lock();
        for previous in handles.drain(..) {
            previous.remove();
        }
        handles.push(on_scroll);
        handles.push(on_resize);
    }

    fn detach(&self) {
        for handle in self.handles.lock().drain(..) {
            handle.remove();
        }
    }
}

/// Provide the shared scroll observer to the component tree
pub fn provide_scroll_observer() -> ScrollObserver {
    let observer = ScrollObserver::new(WindowScrollSource::default());
    provide_context(observer.clone());
    observer
}

/// Subscribe the calling component to scroll updates
///
/// The subscription is released when the component is cleaned up; the
/// window listener goes away with the last one.
pub fn use_scroll_position() -> ReadSignal<ScrollPosition> {
    let observer = expect_context::<ScrollObserver>();
    let (position, set_position) = signal(observer.current());

    let subscription = observer.subscribe_with(move |pos| set_position.set(pos));
    set_position.set(subscription.current());

    on_cleanup(move || drop(subscription));

    position
}

/// Header state whose chrome follows the scroll position
///
/// Menu events are applied by the caller through [`HeaderState::handle`].
pub fn use_header_state() -> RwSignal<HeaderState> {
    let observer = expect_context::<ScrollObserver>();
    let header = RwSignal::new(HeaderState::new());

    let subscription =
        observer.subscribe_with(move |pos| header.update(|state| state.on_scroll(pos.offset)));
    header.update(|state| state.on_scroll(subscription.current_offset()));

    on_cleanup(move || drop(subscription));

    header
}
