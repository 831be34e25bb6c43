pub mod display;

pub use display::{ChannelDisplay, DisplayEvent, DisplaySink};
