//! # agg-stroke
//!
//! Stroke outline generation in the style of Anti-Grain Geometry (AGG) 2.6.
//!
//! Turns a centre-line path made of straight segments into the outline of a
//! stroke of given width, ready to be filled with the non-zero winding rule:
//!
//! - Butt, square and round line caps
//! - Miter, clipped miter, round and bevel line joins
//! - Bevel, miter, jag and round inner joins
//! - Path shortening from the end
//! - Open paths stroked as one contour, closed paths as two contours of
//!   opposite orientation
//!
//! ## Architecture
//!
//! Vertices flow through a pull pipeline:
//!
//! 1. **Vertex Source**: `PathStorage` or any `VertexSource` producer
//! 2. **Adaptor**: `ConvAdaptorVcgen` splits the source into sub-paths
//! 3. **Generator**: `VcgenStroke` buffers each sub-path in a
//!    `VertexSequence` and walks it, asking `MathStroke` for caps and joins
//! 4. **Consumer**: pulls `(x, y, cmd)` triples until `PATH_CMD_STOP`

// Foundation types & math
pub mod basics;
pub mod error;
pub mod math;

// Geometry primitives
pub mod math_stroke;
pub mod path_storage;
pub mod shorten_path;
pub mod stroke_style;
pub mod vertex_sequence;

// Generators & converters
pub mod conv_adaptor_vcgen;
pub mod conv_stroke;
pub mod vcgen_stroke;

pub use basics::{Real, VertexSource};
pub use conv_stroke::ConvStroke;
pub use error::{Result, StrokeError};
pub use math_stroke::{InnerJoin, LineCap, LineJoin, MathStroke};
pub use path_storage::PathStorage;
pub use stroke_style::StrokeStyle;
pub use vcgen_stroke::VcgenStroke;
