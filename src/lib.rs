//! `richspan` - inline rich-text segment model.
//!
//! A [`Container`] holds a flat run of styled text [`Segment`]s. The crate's
//! core is [`Container::apply_format`]: given a host-reported [`Selection`]
//! and a [`Format`] command, it introduces segment boundaries exactly at the
//! selection edges (splitting at most the two boundary segments) and then
//! mutates the style tags of every segment covered by the selection. All
//! other segments keep their prior formatting untouched.
//!
//! Rendering tags into visual style and producing selections are the host's
//! business; this crate only decides which symbolic tags end up on which
//! segment.
//!
//! # Examples
//!
//! ```
//! use richspan::{Container, Format, Rgba, Segment, Selection, TagSet};
//!
//! let mut container = Container::from_segments(vec![Segment::plain("HelloWorld")]);
//! let selection = Selection::range(0, 2, 0, 7);
//! container
//!     .apply_format(&selection, &Format::Foreground(Rgba::RED))
//!     .unwrap();
//!
//! assert_eq!(container.len(), 3);
//! assert_eq!(container.get(1).unwrap().text(), "lloWo");
//! assert_eq!(container.get(0).unwrap().tags(), TagSet::EMPTY);
//! ```

#![allow(clippy::module_name_repetitions)] // StyleTag, StyleFlags etc. read better qualified
#![allow(clippy::missing_errors_doc)] // Error conditions documented on the Error enum
#![allow(clippy::cast_possible_truncation)] // Intentional u8 casts in color math
#![allow(clippy::cast_sign_loss)] // Intentional in color math
#![allow(clippy::cast_precision_loss)] // Intentional in color math

pub mod color;
pub mod error;
pub mod event;
pub mod format;
pub mod restyle;
pub mod segment;
pub mod selection;
pub mod style;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use format::{Format, FormatValue};
pub use segment::{Container, Segment, SplitOrientation, SplitOutcome};
pub use selection::{Anchor, NodeRef, Selection};
pub use style::{StyleFlags, StyleTag, TagKind, TagSet, Weight};
