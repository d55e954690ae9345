pub mod annotate;
pub mod detect;
pub mod report;

pub use detect::{detect_slots, DetectParams, ParamOverrides, SizeBounds, SlotCandidate};
