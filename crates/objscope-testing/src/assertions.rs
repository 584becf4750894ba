//! Assertion helpers over value graphs.

use anyhow::Result;

use objscope_types::ObjRef;

/// Member labels of `value` in enumeration order.
pub fn member_labels(value: &ObjRef) -> Result<Vec<String>> {
    let members = value
        .members()
        .map_err(|error| anyhow::anyhow!(error.to_string()))?;
    Ok(members.into_iter().map(|member| member.key.label()).collect())
}

/// Asserts that `value` exposes exactly `expected` member names, in
/// order.
pub fn assert_member_labels(value: &ObjRef, expected: &[&str]) -> Result<()> {
    let labels = member_labels(value)?;
    if labels != expected {
        anyhow::bail!("Expected members {:?}, got {:?}", expected, labels);
    }
    Ok(())
}
