//! Sticky tab selector widget.
//!
//! A pill-shaped, gesture-draggable indicator that snaps between a fixed
//! number of label positions, stretches elastically when dragged past its
//! travel bounds, and renders a dynamically deformed rounded-capsule
//! outline every frame.
//!
//! The crate has two cores wired together by [`StickyTab`]:
//!
//! - [`TabDragState`] — the interaction state machine: converts pointer
//!   deltas into a live offset, decides when the indicator is sticked to a
//!   snap position versus elastically stretching, picks the destination
//!   snap point from release velocity, and survives re-entrant drags
//!   without corrupting the committed position.
//! - [`TabShape`] — the shape generator: a pure function from the
//!   deformation signal (and a vertical perturbation) to a closed vector
//!   outline.
//!
//! Nothing here renders or reads a clock; the embedding layer feeds
//! pointer events and frame timestamps in and paints the returned
//! [`TabFrame`] out.

mod config;
mod drag;
mod placeholder;
mod shape;
mod snap;
mod widget;

pub use config::*;
pub use drag::*;
pub use placeholder::*;
pub use shape::*;
pub use snap::*;
pub use widget::*;

pub use stickytab_animation as animation;
pub use stickytab_graphics as graphics;
