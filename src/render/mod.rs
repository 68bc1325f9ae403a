mod canvas;
mod layout;
mod recording;

pub use canvas::{LabelCanvas, TextMeasure, TextPaint};
pub use layout::{DrawLabel, LabelGeometry, LayoutLabel};
pub use recording::{DrawCommand, RecordingCanvas};
