//! Vulkan flag-bit and enumerant names as they appear in profiles.

use ash::vk;

const SAMPLE_COUNT_BITS: &[(&str, u64)] = &[
    ("VK_SAMPLE_COUNT_1_BIT", vk::SampleCountFlags::TYPE_1.as_raw() as u64),
    ("VK_SAMPLE_COUNT_2_BIT", vk::SampleCountFlags::TYPE_2.as_raw() as u64),
    ("VK_SAMPLE_COUNT_4_BIT", vk::SampleCountFlags::TYPE_4.as_raw() as u64),
    ("VK_SAMPLE_COUNT_8_BIT", vk::SampleCountFlags::TYPE_8.as_raw() as u64),
    ("VK_SAMPLE_COUNT_16_BIT", vk::SampleCountFlags::TYPE_16.as_raw() as u64),
    ("VK_SAMPLE_COUNT_32_BIT", vk::SampleCountFlags::TYPE_32.as_raw() as u64),
    ("VK_SAMPLE_COUNT_64_BIT", vk::SampleCountFlags::TYPE_64.as_raw() as u64),
];

const SHADER_STAGE_BITS: &[(&str, u64)] = &[
    ("VK_SHADER_STAGE_VERTEX_BIT", vk::ShaderStageFlags::VERTEX.as_raw() as u64),
    (
        "VK_SHADER_STAGE_TESSELLATION_CONTROL_BIT",
        vk::ShaderStageFlags::TESSELLATION_CONTROL.as_raw() as u64,
    ),
    (
        "VK_SHADER_STAGE_TESSELLATION_EVALUATION_BIT",
        vk::ShaderStageFlags::TESSELLATION_EVALUATION.as_raw() as u64,
    ),
    ("VK_SHADER_STAGE_GEOMETRY_BIT", vk::ShaderStageFlags::GEOMETRY.as_raw() as u64),
    ("VK_SHADER_STAGE_FRAGMENT_BIT", vk::ShaderStageFlags::FRAGMENT.as_raw() as u64),
    ("VK_SHADER_STAGE_COMPUTE_BIT", vk::ShaderStageFlags::COMPUTE.as_raw() as u64),
    ("VK_SHADER_STAGE_ALL_GRAPHICS", vk::ShaderStageFlags::ALL_GRAPHICS.as_raw() as u64),
    ("VK_SHADER_STAGE_ALL", vk::ShaderStageFlags::ALL.as_raw() as u64),
    ("VK_SHADER_STAGE_RAYGEN_BIT_KHR", vk::ShaderStageFlags::RAYGEN_KHR.as_raw() as u64),
    ("VK_SHADER_STAGE_ANY_HIT_BIT_KHR", vk::ShaderStageFlags::ANY_HIT_KHR.as_raw() as u64),
    ("VK_SHADER_STAGE_CLOSEST_HIT_BIT_KHR", vk::ShaderStageFlags::CLOSEST_HIT_KHR.as_raw() as u64),
    ("VK_SHADER_STAGE_MISS_BIT_KHR", vk::ShaderStageFlags::MISS_KHR.as_raw() as u64),
    (
        "VK_SHADER_STAGE_INTERSECTION_BIT_KHR",
        vk::ShaderStageFlags::INTERSECTION_KHR.as_raw() as u64,
    ),
    ("VK_SHADER_STAGE_CALLABLE_BIT_KHR", vk::ShaderStageFlags::CALLABLE_KHR.as_raw() as u64),
    ("VK_SHADER_STAGE_RAYGEN_BIT_NV", vk::ShaderStageFlags::RAYGEN_NV.as_raw() as u64),
    ("VK_SHADER_STAGE_ANY_HIT_BIT_NV", vk::ShaderStageFlags::ANY_HIT_NV.as_raw() as u64),
    ("VK_SHADER_STAGE_CLOSEST_HIT_BIT_NV", vk::ShaderStageFlags::CLOSEST_HIT_NV.as_raw() as u64),
    ("VK_SHADER_STAGE_MISS_BIT_NV", vk::ShaderStageFlags::MISS_NV.as_raw() as u64),
    ("VK_SHADER_STAGE_INTERSECTION_BIT_NV", vk::ShaderStageFlags::INTERSECTION_NV.as_raw() as u64),
    ("VK_SHADER_STAGE_CALLABLE_BIT_NV", vk::ShaderStageFlags::CALLABLE_NV.as_raw() as u64),
    ("VK_SHADER_STAGE_TASK_BIT_EXT", vk::ShaderStageFlags::TASK_EXT.as_raw() as u64),
    ("VK_SHADER_STAGE_MESH_BIT_EXT", vk::ShaderStageFlags::MESH_EXT.as_raw() as u64),
    ("VK_SHADER_STAGE_TASK_BIT_NV", vk::ShaderStageFlags::TASK_NV.as_raw() as u64),
    ("VK_SHADER_STAGE_MESH_BIT_NV", vk::ShaderStageFlags::MESH_NV.as_raw() as u64),
    (
        "VK_SHADER_STAGE_SUBPASS_SHADING_BIT_HUAWEI",
        vk::ShaderStageFlags::SUBPASS_SHADING_HUAWEI.as_raw() as u64,
    ),
    (
        "VK_SHADER_STAGE_CLUSTER_CULLING_BIT_HUAWEI",
        vk::ShaderStageFlags::CLUSTER_CULLING_HUAWEI.as_raw() as u64,
    ),
];

const SUBGROUP_FEATURE_BITS: &[(&str, u64)] = &[
    ("VK_SUBGROUP_FEATURE_BASIC_BIT", vk::SubgroupFeatureFlags::BASIC.as_raw() as u64),
    ("VK_SUBGROUP_FEATURE_VOTE_BIT", vk::SubgroupFeatureFlags::VOTE.as_raw() as u64),
    (
        "VK_SUBGROUP_FEATURE_ARITHMETIC_BIT",
        vk::SubgroupFeatureFlags::ARITHMETIC.as_raw() as u64,
    ),
    ("VK_SUBGROUP_FEATURE_BALLOT_BIT", vk::SubgroupFeatureFlags::BALLOT.as_raw() as u64),
    ("VK_SUBGROUP_FEATURE_SHUFFLE_BIT", vk::SubgroupFeatureFlags::SHUFFLE.as_raw() as u64),
    (
        "VK_SUBGROUP_FEATURE_SHUFFLE_RELATIVE_BIT",
        vk::SubgroupFeatureFlags::SHUFFLE_RELATIVE.as_raw() as u64,
    ),
    ("VK_SUBGROUP_FEATURE_CLUSTERED_BIT", vk::SubgroupFeatureFlags::CLUSTERED.as_raw() as u64),
    ("VK_SUBGROUP_FEATURE_QUAD_BIT", vk::SubgroupFeatureFlags::QUAD.as_raw() as u64),
    (
        "VK_SUBGROUP_FEATURE_PARTITIONED_BIT_NV",
        vk::SubgroupFeatureFlags::PARTITIONED_NV.as_raw() as u64,
    ),
    ("VK_SUBGROUP_FEATURE_ROTATE_BIT_KHR", vk::SubgroupFeatureFlags::ROTATE_KHR.as_raw() as u64),
    (
        "VK_SUBGROUP_FEATURE_ROTATE_CLUSTERED_BIT_KHR",
        vk::SubgroupFeatureFlags::ROTATE_CLUSTERED_KHR.as_raw() as u64,
    ),
];

const RESOLVE_MODE_BITS: &[(&str, u64)] = &[
    ("VK_RESOLVE_MODE_NONE", vk::ResolveModeFlags::NONE.as_raw() as u64),
    ("VK_RESOLVE_MODE_SAMPLE_ZERO_BIT", vk::ResolveModeFlags::SAMPLE_ZERO.as_raw() as u64),
    ("VK_RESOLVE_MODE_AVERAGE_BIT", vk::ResolveModeFlags::AVERAGE.as_raw() as u64),
    ("VK_RESOLVE_MODE_MIN_BIT", vk::ResolveModeFlags::MIN.as_raw() as u64),
    ("VK_RESOLVE_MODE_MAX_BIT", vk::ResolveModeFlags::MAX.as_raw() as u64),
    (
        "VK_RESOLVE_MODE_EXTERNAL_FORMAT_DOWNSAMPLE_ANDROID",
        vk::ResolveModeFlags::EXTERNAL_FORMAT_DOWNSAMPLE_ANDROID.as_raw() as u64,
    ),
];

const QUEUE_BITS: &[(&str, u64)] = &[
    ("VK_QUEUE_GRAPHICS_BIT", vk::QueueFlags::GRAPHICS.as_raw() as u64),
    ("VK_QUEUE_COMPUTE_BIT", vk::QueueFlags::COMPUTE.as_raw() as u64),
    ("VK_QUEUE_TRANSFER_BIT", vk::QueueFlags::TRANSFER.as_raw() as u64),
    ("VK_QUEUE_SPARSE_BINDING_BIT", vk::QueueFlags::SPARSE_BINDING.as_raw() as u64),
    ("VK_QUEUE_PROTECTED_BIT", vk::QueueFlags::PROTECTED.as_raw() as u64),
    ("VK_QUEUE_VIDEO_DECODE_BIT_KHR", vk::QueueFlags::VIDEO_DECODE_KHR.as_raw() as u64),
    ("VK_QUEUE_VIDEO_ENCODE_BIT_KHR", vk::QueueFlags::VIDEO_ENCODE_KHR.as_raw() as u64),
    ("VK_QUEUE_OPTICAL_FLOW_BIT_NV", vk::QueueFlags::OPTICAL_FLOW_NV.as_raw() as u64),
];

const FORMAT_FEATURE_BITS: &[(&str, u64)] = &[
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_BIT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_STORAGE_IMAGE_BIT",
        vk::FormatFeatureFlags::STORAGE_IMAGE.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_STORAGE_IMAGE_ATOMIC_BIT",
        vk::FormatFeatureFlags::STORAGE_IMAGE_ATOMIC.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_UNIFORM_TEXEL_BUFFER_BIT",
        vk::FormatFeatureFlags::UNIFORM_TEXEL_BUFFER.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_STORAGE_TEXEL_BUFFER_BIT",
        vk::FormatFeatureFlags::STORAGE_TEXEL_BUFFER.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_STORAGE_TEXEL_BUFFER_ATOMIC_BIT",
        vk::FormatFeatureFlags::STORAGE_TEXEL_BUFFER_ATOMIC.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_VERTEX_BUFFER_BIT",
        vk::FormatFeatureFlags::VERTEX_BUFFER.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_COLOR_ATTACHMENT_BIT",
        vk::FormatFeatureFlags::COLOR_ATTACHMENT.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_COLOR_ATTACHMENT_BLEND_BIT",
        vk::FormatFeatureFlags::COLOR_ATTACHMENT_BLEND.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_DEPTH_STENCIL_ATTACHMENT_BIT",
        vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT.as_raw() as u64,
    ),
    ("VK_FORMAT_FEATURE_BLIT_SRC_BIT", vk::FormatFeatureFlags::BLIT_SRC.as_raw() as u64),
    ("VK_FORMAT_FEATURE_BLIT_DST_BIT", vk::FormatFeatureFlags::BLIT_DST.as_raw() as u64),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_LINEAR_BIT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_LINEAR.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_TRANSFER_SRC_BIT",
        vk::FormatFeatureFlags::TRANSFER_SRC.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_TRANSFER_DST_BIT",
        vk::FormatFeatureFlags::TRANSFER_DST.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_MIDPOINT_CHROMA_SAMPLES_BIT",
        vk::FormatFeatureFlags::MIDPOINT_CHROMA_SAMPLES.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_MINMAX_BIT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_MINMAX.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_DISJOINT_BIT",
        vk::FormatFeatureFlags::DISJOINT.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_COSITED_CHROMA_SAMPLES_BIT",
        vk::FormatFeatureFlags::COSITED_CHROMA_SAMPLES.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER_BIT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_SEPARATE_RECONSTRUCTION_FILTER_BIT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_YCBCR_CONVERSION_SEPARATE_RECONSTRUCTION_FILTER.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_BIT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_FORCEABLE_BIT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_FORCEABLE.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_CUBIC_BIT_IMG",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_CUBIC_IMG.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_CUBIC_BIT_EXT",
        vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_CUBIC_EXT.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_VIDEO_DECODE_OUTPUT_BIT_KHR",
        vk::FormatFeatureFlags::VIDEO_DECODE_OUTPUT_KHR.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_VIDEO_DECODE_DPB_BIT_KHR",
        vk::FormatFeatureFlags::VIDEO_DECODE_DPB_KHR.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_ACCELERATION_STRUCTURE_VERTEX_BUFFER_BIT_KHR",
        vk::FormatFeatureFlags::ACCELERATION_STRUCTURE_VERTEX_BUFFER_KHR.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_FRAGMENT_DENSITY_MAP_BIT_EXT",
        vk::FormatFeatureFlags::FRAGMENT_DENSITY_MAP_EXT.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_FRAGMENT_SHADING_RATE_ATTACHMENT_BIT_KHR",
        vk::FormatFeatureFlags::FRAGMENT_SHADING_RATE_ATTACHMENT_KHR.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_VIDEO_ENCODE_INPUT_BIT_KHR",
        vk::FormatFeatureFlags::VIDEO_ENCODE_INPUT_KHR.as_raw() as u64,
    ),
    (
        "VK_FORMAT_FEATURE_VIDEO_ENCODE_DPB_BIT_KHR",
        vk::FormatFeatureFlags::VIDEO_ENCODE_DPB_KHR.as_raw() as u64,
    ),
];

const FORMAT_FEATURE_2_BITS: &[(&str, u64)] = &[
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_STORAGE_IMAGE_BIT",
        vk::FormatFeatureFlags2::STORAGE_IMAGE.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_STORAGE_IMAGE_ATOMIC_BIT",
        vk::FormatFeatureFlags2::STORAGE_IMAGE_ATOMIC.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_UNIFORM_TEXEL_BUFFER_BIT",
        vk::FormatFeatureFlags2::UNIFORM_TEXEL_BUFFER.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_STORAGE_TEXEL_BUFFER_BIT",
        vk::FormatFeatureFlags2::STORAGE_TEXEL_BUFFER.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_STORAGE_TEXEL_BUFFER_ATOMIC_BIT",
        vk::FormatFeatureFlags2::STORAGE_TEXEL_BUFFER_ATOMIC.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_VERTEX_BUFFER_BIT",
        vk::FormatFeatureFlags2::VERTEX_BUFFER.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_COLOR_ATTACHMENT_BIT",
        vk::FormatFeatureFlags2::COLOR_ATTACHMENT.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_COLOR_ATTACHMENT_BLEND_BIT",
        vk::FormatFeatureFlags2::COLOR_ATTACHMENT_BLEND.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_DEPTH_STENCIL_ATTACHMENT_BIT",
        vk::FormatFeatureFlags2::DEPTH_STENCIL_ATTACHMENT.as_raw(),
    ),
    ("VK_FORMAT_FEATURE_2_BLIT_SRC_BIT", vk::FormatFeatureFlags2::BLIT_SRC.as_raw()),
    ("VK_FORMAT_FEATURE_2_BLIT_DST_BIT", vk::FormatFeatureFlags2::BLIT_DST.as_raw()),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_FILTER_LINEAR_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_FILTER_LINEAR.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_TRANSFER_SRC_BIT",
        vk::FormatFeatureFlags2::TRANSFER_SRC.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_TRANSFER_DST_BIT",
        vk::FormatFeatureFlags2::TRANSFER_DST.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_FILTER_MINMAX_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_FILTER_MINMAX.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_STORAGE_READ_WITHOUT_FORMAT_BIT",
        vk::FormatFeatureFlags2::STORAGE_READ_WITHOUT_FORMAT.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_STORAGE_WRITE_WITHOUT_FORMAT_BIT",
        vk::FormatFeatureFlags2::STORAGE_WRITE_WITHOUT_FORMAT.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_DEPTH_COMPARISON_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_DEPTH_COMPARISON.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_FILTER_CUBIC_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_FILTER_CUBIC.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_MIDPOINT_CHROMA_SAMPLES_BIT",
        vk::FormatFeatureFlags2::MIDPOINT_CHROMA_SAMPLES.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_YCBCR_CONVERSION_SEPARATE_RECONSTRUCTION_FILTER_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_YCBCR_CONVERSION_SEPARATE_RECONSTRUCTION_FILTER.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_FORCEABLE_BIT",
        vk::FormatFeatureFlags2::SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_FORCEABLE.as_raw(),
    ),
    ("VK_FORMAT_FEATURE_2_DISJOINT_BIT", vk::FormatFeatureFlags2::DISJOINT.as_raw()),
    (
        "VK_FORMAT_FEATURE_2_COSITED_CHROMA_SAMPLES_BIT",
        vk::FormatFeatureFlags2::COSITED_CHROMA_SAMPLES.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_VIDEO_DECODE_OUTPUT_BIT_KHR",
        vk::FormatFeatureFlags2::VIDEO_DECODE_OUTPUT_KHR.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_VIDEO_DECODE_DPB_BIT_KHR",
        vk::FormatFeatureFlags2::VIDEO_DECODE_DPB_KHR.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_ACCELERATION_STRUCTURE_VERTEX_BUFFER_BIT_KHR",
        vk::FormatFeatureFlags2::ACCELERATION_STRUCTURE_VERTEX_BUFFER_KHR.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_FRAGMENT_DENSITY_MAP_BIT_EXT",
        vk::FormatFeatureFlags2::FRAGMENT_DENSITY_MAP_EXT.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_FRAGMENT_SHADING_RATE_ATTACHMENT_BIT_KHR",
        vk::FormatFeatureFlags2::FRAGMENT_SHADING_RATE_ATTACHMENT_KHR.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_VIDEO_ENCODE_INPUT_BIT_KHR",
        vk::FormatFeatureFlags2::VIDEO_ENCODE_INPUT_KHR.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_VIDEO_ENCODE_DPB_BIT_KHR",
        vk::FormatFeatureFlags2::VIDEO_ENCODE_DPB_KHR.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_HOST_IMAGE_TRANSFER_BIT_EXT",
        vk::FormatFeatureFlags2::HOST_IMAGE_TRANSFER_EXT.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_LINEAR_COLOR_ATTACHMENT_BIT_NV",
        vk::FormatFeatureFlags2::LINEAR_COLOR_ATTACHMENT_NV.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_WEIGHT_IMAGE_BIT_QCOM",
        vk::FormatFeatureFlags2::WEIGHT_IMAGE_QCOM.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_WEIGHT_SAMPLED_IMAGE_BIT_QCOM",
        vk::FormatFeatureFlags2::WEIGHT_SAMPLED_IMAGE_QCOM.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_BLOCK_MATCHING_BIT_QCOM",
        vk::FormatFeatureFlags2::BLOCK_MATCHING_QCOM.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_BOX_FILTER_SAMPLED_BIT_QCOM",
        vk::FormatFeatureFlags2::BOX_FILTER_SAMPLED_QCOM.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_OPTICAL_FLOW_IMAGE_BIT_NV",
        vk::FormatFeatureFlags2::OPTICAL_FLOW_IMAGE_NV.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_OPTICAL_FLOW_VECTOR_BIT_NV",
        vk::FormatFeatureFlags2::OPTICAL_FLOW_VECTOR_NV.as_raw(),
    ),
    (
        "VK_FORMAT_FEATURE_2_OPTICAL_FLOW_COST_BIT_NV",
        vk::FormatFeatureFlags2::OPTICAL_FLOW_COST_NV.as_raw(),
    ),
];

const FLAG_TABLES: &[&[(&str, u64)]] = &[
    SAMPLE_COUNT_BITS,
    SHADER_STAGE_BITS,
    SUBGROUP_FEATURE_BITS,
    RESOLVE_MODE_BITS,
    QUEUE_BITS,
    FORMAT_FEATURE_BITS,
    FORMAT_FEATURE_2_BITS,
];

/// Raw bit value of a flag name such as `VK_SAMPLE_COUNT_4_BIT`.
///
/// Extension-suffixed aliases of promoted bits (`..._BIT_KHR`) resolve to the
/// core bit.
pub fn flag_bit(name: &str) -> Option<u64> {
    let lookup = |name: &str| {
        FLAG_TABLES
            .iter()
            .flat_map(|table| table.iter())
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, bits)| *bits)
    };

    lookup(name).or_else(|| lookup(strip_vendor_suffix(name)?))
}

/// OR of all the named bits, `Err` carries the first unknown name.
pub fn flag_mask<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<u64, &'a str> {
    names
        .into_iter()
        .try_fold(0, |mask, name| flag_bit(name).map(|bit| mask | bit).ok_or(name))
}

const ENUMERANTS: &[(&str, i64)] = &[
    (
        "VK_PHYSICAL_DEVICE_TYPE_OTHER",
        vk::PhysicalDeviceType::OTHER.as_raw() as i64,
    ),
    (
        "VK_PHYSICAL_DEVICE_TYPE_INTEGRATED_GPU",
        vk::PhysicalDeviceType::INTEGRATED_GPU.as_raw() as i64,
    ),
    (
        "VK_PHYSICAL_DEVICE_TYPE_DISCRETE_GPU",
        vk::PhysicalDeviceType::DISCRETE_GPU.as_raw() as i64,
    ),
    (
        "VK_PHYSICAL_DEVICE_TYPE_VIRTUAL_GPU",
        vk::PhysicalDeviceType::VIRTUAL_GPU.as_raw() as i64,
    ),
    (
        "VK_PHYSICAL_DEVICE_TYPE_CPU",
        vk::PhysicalDeviceType::CPU.as_raw() as i64,
    ),
    (
        "VK_POINT_CLIPPING_BEHAVIOR_ALL_CLIP_PLANES",
        vk::PointClippingBehavior::ALL_CLIP_PLANES.as_raw() as i64,
    ),
    (
        "VK_POINT_CLIPPING_BEHAVIOR_USER_CLIP_PLANES_ONLY",
        vk::PointClippingBehavior::USER_CLIP_PLANES_ONLY.as_raw() as i64,
    ),
    (
        "VK_SHADER_FLOAT_CONTROLS_INDEPENDENCE_32_BIT_ONLY",
        vk::ShaderFloatControlsIndependence::TYPE_32_ONLY.as_raw() as i64,
    ),
    (
        "VK_SHADER_FLOAT_CONTROLS_INDEPENDENCE_ALL",
        vk::ShaderFloatControlsIndependence::ALL.as_raw() as i64,
    ),
    (
        "VK_SHADER_FLOAT_CONTROLS_INDEPENDENCE_NONE",
        vk::ShaderFloatControlsIndependence::NONE.as_raw() as i64,
    ),
];

/// Raw value of an enumerant name such as `VK_PHYSICAL_DEVICE_TYPE_CPU`.
pub fn enumerant(name: &str) -> Option<i64> {
    let lookup = |name: &str| {
        ENUMERANTS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
    };

    lookup(name).or_else(|| lookup(strip_vendor_suffix(name)?))
}

const VENDOR_SUFFIXES: &[&str] = &["_KHR", "_EXT"];

fn strip_vendor_suffix(name: &str) -> Option<&str> {
    VENDOR_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_flag_bits_across_tables() {
        assert_eq!(flag_bit("VK_SAMPLE_COUNT_4_BIT"), Some(4));
        assert_eq!(flag_bit("VK_QUEUE_COMPUTE_BIT"), Some(2));
        assert_eq!(flag_bit("VK_FORMAT_FEATURE_SAMPLED_IMAGE_BIT"), Some(1));
        assert_eq!(flag_bit("VK_RESOLVE_MODE_SAMPLE_ZERO_BIT_KHR"), Some(1));
        assert_eq!(flag_bit("VK_SAMPLE_COUNT_3_BIT"), None);
    }

    #[test]
    fn masks_combine_or_name_the_unknown_bit() {
        assert_eq!(
            flag_mask(["VK_SAMPLE_COUNT_1_BIT", "VK_SAMPLE_COUNT_8_BIT"]),
            Ok(9)
        );
        assert_eq!(flag_mask(Vec::<&str>::new()), Ok(0));
        assert_eq!(
            flag_mask(["VK_SAMPLE_COUNT_1_BIT", "VK_BOGUS_BIT"]),
            Err("VK_BOGUS_BIT")
        );
    }

    /// Single bits that ash can name but the table cannot.
    fn unnamed_bits(
        table: &[(&str, u64)],
        width: u32,
        debug: impl Fn(u64) -> String,
    ) -> Vec<String> {
        let mask = table.iter().fold(0, |mask, (_, bits)| mask | bits);
        (0..width)
            .map(|shift| 1u64 << shift)
            .filter(|bit| mask & bit == 0)
            .map(debug)
            // ash prints bits it has no name for in binary
            .filter(|name| !name.starts_with('1'))
            .collect()
    }

    #[test]
    fn tables_cover_every_named_bit() {
        let none = Vec::<String>::new();
        assert_eq!(
            unnamed_bits(SAMPLE_COUNT_BITS, 32, |bit| {
                format!("{:?}", vk::SampleCountFlags::from_raw(bit as u32))
            }),
            none
        );
        assert_eq!(
            unnamed_bits(SHADER_STAGE_BITS, 32, |bit| {
                format!("{:?}", vk::ShaderStageFlags::from_raw(bit as u32))
            }),
            none
        );
        assert_eq!(
            unnamed_bits(SUBGROUP_FEATURE_BITS, 32, |bit| {
                format!("{:?}", vk::SubgroupFeatureFlags::from_raw(bit as u32))
            }),
            none
        );
        assert_eq!(
            unnamed_bits(RESOLVE_MODE_BITS, 32, |bit| {
                format!("{:?}", vk::ResolveModeFlags::from_raw(bit as u32))
            }),
            none
        );
        assert_eq!(
            unnamed_bits(QUEUE_BITS, 32, |bit| {
                format!("{:?}", vk::QueueFlags::from_raw(bit as u32))
            }),
            none
        );
        assert_eq!(
            unnamed_bits(FORMAT_FEATURE_BITS, 32, |bit| {
                format!("{:?}", vk::FormatFeatureFlags::from_raw(bit as u32))
            }),
            none
        );
        assert_eq!(
            unnamed_bits(FORMAT_FEATURE_2_BITS, 64, |bit| {
                format!("{:?}", vk::FormatFeatureFlags2::from_raw(bit))
            }),
            none
        );
    }

    #[test]
    fn every_queue_flag_resolves() {
        assert_eq!(
            flag_mask([
                "VK_QUEUE_GRAPHICS_BIT",
                "VK_QUEUE_COMPUTE_BIT",
                "VK_QUEUE_TRANSFER_BIT",
                "VK_QUEUE_SPARSE_BINDING_BIT",
                "VK_QUEUE_PROTECTED_BIT",
                "VK_QUEUE_VIDEO_DECODE_BIT_KHR",
                "VK_QUEUE_VIDEO_ENCODE_BIT_KHR",
                "VK_QUEUE_OPTICAL_FLOW_BIT_NV",
            ]),
            Ok(0x17F)
        );
    }

    #[test]
    fn resolves_extension_and_aggregate_bits() {
        assert_eq!(flag_bit("VK_SHADER_STAGE_ALL"), Some(0x7FFF_FFFF));
        assert_eq!(flag_bit("VK_SHADER_STAGE_MESH_BIT_EXT"), Some(0x80));
        assert_eq!(flag_bit("VK_SHADER_STAGE_MESH_BIT_NV"), Some(0x80));
        assert_eq!(flag_bit("VK_SHADER_STAGE_RAYGEN_BIT_KHR"), Some(0x100));
        assert_eq!(flag_bit("VK_SUBGROUP_FEATURE_PARTITIONED_BIT_NV"), Some(0x100));
        assert_eq!(
            flag_bit("VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER_BIT_KHR"),
            Some(0x4_0000)
        );
        assert_eq!(flag_bit("VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_CUBIC_BIT_EXT"), Some(0x2000));
        assert_eq!(flag_bit("VK_FORMAT_FEATURE_FRAGMENT_DENSITY_MAP_BIT_EXT"), Some(0x100_0000));
        assert_eq!(flag_bit("VK_FORMAT_FEATURE_2_DISJOINT_BIT_KHR"), Some(0x40_0000));
        assert_eq!(
            flag_bit("VK_FORMAT_FEATURE_2_HOST_IMAGE_TRANSFER_BIT_EXT"),
            Some(0x4000_0000_0000)
        );
    }

    #[test]
    fn resolves_enumerants() {
        assert_eq!(enumerant("VK_PHYSICAL_DEVICE_TYPE_CPU"), Some(4));
        assert_eq!(enumerant("VK_POINT_CLIPPING_BEHAVIOR_ALL_CLIP_PLANES_KHR"), Some(0));
        assert_eq!(enumerant("VK_PHYSICAL_DEVICE_TYPE_TOASTER"), None);
    }
}
