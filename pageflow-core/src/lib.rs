//! Platform-free core of the page interaction layer: wheel classification,
//! the section navigator, fragment sync and the slide carousel.
//!
//! Controllers talk to the outside world only through the [`host::View`] and
//! [`host::Scheduler`] traits, so everything here runs under plain `cargo test`.

pub mod carousel;
pub mod classify;
pub mod config;
pub mod host;
pub mod input;
pub mod navigator;
pub mod sections;
pub mod site;

#[cfg(test)]
mod testing;

pub use carousel::{Carousel, Hover, PauseSource};
pub use classify::{classify, DeltaMode, DeviceClass};
pub use config::{CarouselConfig, NavConfig, SwipeConfig, WheelConfig};
pub use host::{Delay, Scheduler, ScrollMode, Timer, View};
pub use input::{Direction, Handling, Key, WheelInput};
pub use navigator::{Navigator, Phase};
pub use sections::SectionList;
pub use site::Site;
