//! Display collaborator seam
//!
//! The controller reports mode changes, status messages and selected places
//! through [`DisplaySink`]. [`ChannelDisplay`] forwards everything as
//! [`DisplayEvent`]s over a channel so a UI thread, a terminal loop or a test
//! can consume them.

use crate::{
    controller::status::StatusMessage,
    core::config::Mode,
    layers::anchor::SelectCallback,
    poi::{
        formatter::{DisplayPayload, PlaceFormatter},
        place::Poi,
    },
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;

pub trait DisplaySink {
    /// The active mode changed; show or hide mode-specific controls.
    fn mode_changed(&mut self, mode: Mode);

    fn show_status(&mut self, status: &StatusMessage);

    fn clear_status(&mut self);

    /// Open the info panel for a place.
    fn show_place(&mut self, payload: &DisplayPayload);

    fn close_place(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    ModeChanged(Mode),
    Status(StatusMessage),
    StatusCleared,
    ShowPlace(DisplayPayload),
    PlaceClosed,
}

/// Display sink that forwards every call as a [`DisplayEvent`].
#[derive(Debug, Clone)]
pub struct ChannelDisplay {
    tx: Sender<DisplayEvent>,
}

impl ChannelDisplay {
    pub fn new(tx: Sender<DisplayEvent>) -> Self {
        Self { tx }
    }

    /// Create a display together with the receiving end of its channel.
    pub fn channel() -> (Self, Receiver<DisplayEvent>) {
        let (tx, rx) = unbounded();
        (Self::new(tx), rx)
    }

    /// Selection callback that formats the chosen POI and sends it as
    /// [`DisplayEvent::ShowPlace`].
    pub fn select_callback(&self) -> SelectCallback {
        let tx = self.tx.clone();
        Arc::new(move |poi: &Poi| {
            if tx
                .send(DisplayEvent::ShowPlace(PlaceFormatter::format(poi)))
                .is_err()
            {
                log::debug!("display channel closed; dropping selection of {}", poi.name);
            }
        })
    }

    fn send(&self, event: DisplayEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("display channel closed");
        }
    }
}

impl DisplaySink for ChannelDisplay {
    fn mode_changed(&mut self, mode: Mode) {
        self.send(DisplayEvent::ModeChanged(mode));
    }

    fn show_status(&mut self, status: &StatusMessage) {
        self.send(DisplayEvent::Status(status.clone()));
    }

    fn clear_status(&mut self) {
        self.send(DisplayEvent::StatusCleared);
    }

    fn show_place(&mut self, payload: &DisplayPayload) {
        self.send(DisplayEvent::ShowPlace(payload.clone()));
    }

    fn close_place(&mut self) {
        self.send(DisplayEvent::PlaceClosed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_forwarded_in_order() {
        let (mut display, rx) = ChannelDisplay::channel();
        display.mode_changed(Mode::Dynamic);
        display.clear_status();
        display.close_place();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                DisplayEvent::ModeChanged(Mode::Dynamic),
                DisplayEvent::StatusCleared,
                DisplayEvent::PlaceClosed
            ]
        );
    }

    #[test]
    fn test_select_callback_formats_poi() {
        let (display, rx) = ChannelDisplay::channel();
        let callback = display.select_callback();
        callback(&Poi::new("Park", 0.0, 0.0));

        match rx.try_recv().unwrap() {
            DisplayEvent::ShowPlace(payload) => {
                assert_eq!(payload.title, "Park");
                assert!(payload.body_html.starts_with("No description available."));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_closed_channel_is_tolerated() {
        let (mut display, rx) = ChannelDisplay::channel();
        drop(rx);
        display.mode_changed(Mode::Static);
        display.select_callback()(&Poi::new("Park", 0.0, 0.0));
    }
}
