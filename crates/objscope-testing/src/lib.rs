//! Test support for the objscope workspace.
//!
//! Provides sample value graphs covering the shapes the engine must
//! handle, plus assertion helpers for inspecting them.

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_member_labels, member_labels};
pub use fixtures::{
    SAMPLE_JSON, Opaque, opaque, raising_property, sample_graph, self_referential, small_graph,
    write_sample,
};
