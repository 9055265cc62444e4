//! Window keyboard listeners
//!
//! Registered on mount; dropping the guard removes them again.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, Window};

/// Keeps a keydown/keyup listener pair attached to the window
pub struct KeyboardListener {
    window: Window,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    keyup: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyboardListener {
    /// Attach both listeners.
    ///
    /// `on_down` returns true when the key is handled; its default action is
    /// then prevented.
    pub fn attach<D, U>(window: &Window, mut on_down: D, mut on_up: U) -> Option<Self>
    where
        D: FnMut(&str) -> bool + 'static,
        U: FnMut(&str) + 'static,
    {
        let keydown = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if on_down(&event.key()) {
                event.prevent_default();
            }
        });
        let keyup = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            on_up(&event.key());
        });

        if let Err(e) =
            window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
        {
            log::error!("Failed to add keydown listener: {:?}", e);
            return None;
        }
        if let Err(e) =
            window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())
        {
            log::error!("Failed to add keyup listener: {:?}", e);
            let _ = window
                .remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
            return None;
        }

        log::info!("Keyboard listeners attached");
        Some(Self {
            window: window.clone(),
            keydown,
            keyup,
        })
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "keydown",
            self.keydown.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref());
        log::info!("Keyboard listeners removed");
    }
}
