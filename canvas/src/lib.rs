//! Live-DOM direct-manipulation engine for slide fragments.
//!
//! The deck hands this crate one [`slide::Slide`] at a time. The engine
//! parses the fragment into a mount tree, makes a subset of its nodes
//! selectable, draggable, and editable in place, and serializes the mutated
//! tree back to markup after every committed interaction. The tree itself is
//! the model — there is no retained scene graph; every interaction
//! re-derives what it needs from the live nodes. The host wires platform
//! input events to [`engine::Engine`] and applies the returned
//! [`engine::Action`]s (persisting markup, focusing the text editor,
//! repainting chrome).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Mount lifecycle, gesture handling, mutation sink |
//! | [`dom`] | Arena fragment DOM: parse, mutate, serialize |
//! | [`style`] | Inline style declarations and positioning keywords |
//! | [`select`] | Selection and editability resolution |
//! | [`input`] | Input event types and the drag state machine |
//! | [`overlay`] | Selection overlay frames from host geometry |
//! | [`geom`] | Points, rectangles, and the host geometry source |
//! | [`slide`] | The slide wire type shared with the deck service |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod dom;
pub mod engine;
pub mod geom;
pub mod input;
pub mod overlay;
pub mod select;
pub mod slide;
pub mod style;
