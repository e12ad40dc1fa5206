/// How a numeric member declared by a profile relates to the reported value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
    /// Larger is better, the device must report at least the declared value.
    Max,
    /// Smaller is better, the device must report at most the declared value.
    Min,
    /// A `[min, max]` pair, the first element is a `Min`, the second a `Max`.
    Range,
    /// Identification values and anything without an ordering.
    Exact,
}

const RANGES: &[&str] = &["pointSizeRange", "lineWidthRange", "viewportBoundsRange"];

const EXACT: &[&str] = &[
    "apiVersion",
    "driverVersion",
    "vendorID",
    "deviceID",
    "deviceType",
    "deviceNodeMask",
    "pipelineCacheUUID",
    "deviceUUID",
    "driverUUID",
    "deviceLUID",
    "driverID",
    "subgroupSize",
    "pointClippingBehavior",
    "denormBehaviorIndependence",
    "roundingModeIndependence",
    "timestampPeriod",
];

const MAX_OVERRIDES: &[&str] = &[
    "minMemoryMapAlignment",
    "discreteQueuePriorities",
    "sparseAddressSpaceSize",
];

const MIN_OVERRIDES: &[&str] = &["bufferImageGranularity", "nonCoherentAtomSize"];

fn rule(member: &str) -> Option<LimitKind> {
    if RANGES.contains(&member) {
        return Some(LimitKind::Range);
    }
    if EXACT.contains(&member) {
        return Some(LimitKind::Exact);
    }
    if MAX_OVERRIDES.contains(&member) {
        return Some(LimitKind::Max);
    }
    if MIN_OVERRIDES.contains(&member) {
        return Some(LimitKind::Min);
    }

    if member.starts_with("min")
        || member.ends_with("Alignment")
        || member.ends_with("AlignmentBytes")
        || member.ends_with("Granularity")
    {
        Some(LimitKind::Min)
    } else if member.starts_with("max")
        || member.ends_with("Bits")
        || member.ends_with("Count")
        || member.ends_with("Difference")
    {
        Some(LimitKind::Max)
    } else {
        None
    }
}

/// Classifies a nested member, e.g. `minImageTransferGranularity.width`. The
/// innermost name with a rule decides.
pub fn classify_nested<'a>(members: impl DoubleEndedIterator<Item = &'a str>) -> LimitKind {
    members
        .rev()
        .find_map(rule)
        .unwrap_or(LimitKind::Exact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify(member: &str) -> LimitKind {
        classify_nested(std::iter::once(member))
    }

    #[test]
    fn classifies_core_limits() {
        assert_eq!(classify("maxImageDimension1D"), LimitKind::Max);
        assert_eq!(classify("maxComputeWorkGroupCount"), LimitKind::Max);
        assert_eq!(classify("subPixelPrecisionBits"), LimitKind::Max);
        assert_eq!(classify("maxTimelineSemaphoreValueDifference"), LimitKind::Max);
        assert_eq!(classify("minTexelOffset"), LimitKind::Min);
        assert_eq!(classify("minUniformBufferOffsetAlignment"), LimitKind::Min);
        assert_eq!(classify("pointSizeGranularity"), LimitKind::Min);
        assert_eq!(classify("optimalBufferCopyRowPitchAlignment"), LimitKind::Min);
        assert_eq!(classify("bufferImageGranularity"), LimitKind::Min);
        assert_eq!(classify("pointSizeRange"), LimitKind::Range);
        assert_eq!(classify("sparseAddressSpaceSize"), LimitKind::Max);
        assert_eq!(classify("subgroupSize"), LimitKind::Exact);
    }

    #[test]
    fn overrides_win_over_prefixes() {
        assert_eq!(classify("minMemoryMapAlignment"), LimitKind::Max);
        assert_eq!(classify("discreteQueuePriorities"), LimitKind::Max);
        assert_eq!(classify("residencyStandard2DBlockShape"), LimitKind::Exact);
    }

    #[test]
    fn nested_members_inherit_from_the_enclosing_limit() {
        assert_eq!(
            classify_nested(["minImageTransferGranularity", "width"].into_iter()),
            LimitKind::Min
        );
        assert_eq!(
            classify_nested(["limits", "maxViewportDimensions"].into_iter()),
            LimitKind::Max
        );
        assert_eq!(classify_nested(["limits", "subgroupSize"].into_iter()), LimitKind::Exact);
        assert_eq!(classify_nested(std::iter::empty()), LimitKind::Exact);
    }
}
