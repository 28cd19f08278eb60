//! Document collaborator: in-memory page, events and advisory probes

mod document;
mod event;
mod probe;

pub use document::{Document, Element, Section};
pub use event::{Key, PageEvent};
pub use probe::{FsProbe, PageProbe};

#[cfg(test)]
pub use probe::MockPageProbe;
