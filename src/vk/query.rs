use crate::capability::{text_field, FieldValue, IntoFieldValue};
use crate::reflect;
use crate::vk::registry::{FeatureStruct, CORE_FEATURES};
use ash::vk;
use indexmap::IndexMap;
use std::ffi::c_void;
use std::mem::size_of;

fn bool_members(names: &[&str], values: &[vk::Bool32]) -> FieldValue {
    FieldValue::Struct(
        names
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value.into_field_value()))
            .collect(),
    )
}

fn limits(limits: &vk::PhysicalDeviceLimits) -> FieldValue {
    reflect!(limits, {
        "maxImageDimension1D" => max_image_dimension1_d,
        "maxImageDimension2D" => max_image_dimension2_d,
        "maxImageDimension3D" => max_image_dimension3_d,
        "maxImageDimensionCube" => max_image_dimension_cube,
        "maxImageArrayLayers" => max_image_array_layers,
        "maxTexelBufferElements" => max_texel_buffer_elements,
        "maxUniformBufferRange" => max_uniform_buffer_range,
        "maxStorageBufferRange" => max_storage_buffer_range,
        "maxPushConstantsSize" => max_push_constants_size,
        "maxMemoryAllocationCount" => max_memory_allocation_count,
        "maxSamplerAllocationCount" => max_sampler_allocation_count,
        "bufferImageGranularity" => buffer_image_granularity,
        "sparseAddressSpaceSize" => sparse_address_space_size,
        "maxBoundDescriptorSets" => max_bound_descriptor_sets,
        "maxPerStageDescriptorSamplers" => max_per_stage_descriptor_samplers,
        "maxPerStageDescriptorUniformBuffers" => max_per_stage_descriptor_uniform_buffers,
        "maxPerStageDescriptorStorageBuffers" => max_per_stage_descriptor_storage_buffers,
        "maxPerStageDescriptorSampledImages" => max_per_stage_descriptor_sampled_images,
        "maxPerStageDescriptorStorageImages" => max_per_stage_descriptor_storage_images,
        "maxPerStageDescriptorInputAttachments" => max_per_stage_descriptor_input_attachments,
        "maxPerStageResources" => max_per_stage_resources,
        "maxDescriptorSetSamplers" => max_descriptor_set_samplers,
        "maxDescriptorSetUniformBuffers" => max_descriptor_set_uniform_buffers,
        "maxDescriptorSetUniformBuffersDynamic" => max_descriptor_set_uniform_buffers_dynamic,
        "maxDescriptorSetStorageBuffers" => max_descriptor_set_storage_buffers,
        "maxDescriptorSetStorageBuffersDynamic" => max_descriptor_set_storage_buffers_dynamic,
        "maxDescriptorSetSampledImages" => max_descriptor_set_sampled_images,
        "maxDescriptorSetStorageImages" => max_descriptor_set_storage_images,
        "maxDescriptorSetInputAttachments" => max_descriptor_set_input_attachments,
        "maxVertexInputAttributes" => max_vertex_input_attributes,
        "maxVertexInputBindings" => max_vertex_input_bindings,
        "maxVertexInputAttributeOffset" => max_vertex_input_attribute_offset,
        "maxVertexInputBindingStride" => max_vertex_input_binding_stride,
        "maxVertexOutputComponents" => max_vertex_output_components,
        "maxTessellationGenerationLevel" => max_tessellation_generation_level,
        "maxTessellationPatchSize" => max_tessellation_patch_size,
        "maxTessellationControlPerVertexInputComponents" => max_tessellation_control_per_vertex_input_components,
        "maxTessellationControlPerVertexOutputComponents" => max_tessellation_control_per_vertex_output_components,
        "maxTessellationControlPerPatchOutputComponents" => max_tessellation_control_per_patch_output_components,
        "maxTessellationControlTotalOutputComponents" => max_tessellation_control_total_output_components,
        "maxTessellationEvaluationInputComponents" => max_tessellation_evaluation_input_components,
        "maxTessellationEvaluationOutputComponents" => max_tessellation_evaluation_output_components,
        "maxGeometryShaderInvocations" => max_geometry_shader_invocations,
        "maxGeometryInputComponents" => max_geometry_input_components,
        "maxGeometryOutputComponents" => max_geometry_output_components,
        "maxGeometryOutputVertices" => max_geometry_output_vertices,
        "maxGeometryTotalOutputComponents" => max_geometry_total_output_components,
        "maxFragmentInputComponents" => max_fragment_input_components,
        "maxFragmentOutputAttachments" => max_fragment_output_attachments,
        "maxFragmentDualSrcAttachments" => max_fragment_dual_src_attachments,
        "maxFragmentCombinedOutputResources" => max_fragment_combined_output_resources,
        "maxComputeSharedMemorySize" => max_compute_shared_memory_size,
        "maxComputeWorkGroupCount" => max_compute_work_group_count,
        "maxComputeWorkGroupInvocations" => max_compute_work_group_invocations,
        "maxComputeWorkGroupSize" => max_compute_work_group_size,
        "subPixelPrecisionBits" => sub_pixel_precision_bits,
        "subTexelPrecisionBits" => sub_texel_precision_bits,
        "mipmapPrecisionBits" => mipmap_precision_bits,
        "maxDrawIndexedIndexValue" => max_draw_indexed_index_value,
        "maxDrawIndirectCount" => max_draw_indirect_count,
        "maxSamplerLodBias" => max_sampler_lod_bias,
        "maxSamplerAnisotropy" => max_sampler_anisotropy,
        "maxViewports" => max_viewports,
        "maxViewportDimensions" => max_viewport_dimensions,
        "viewportBoundsRange" => viewport_bounds_range,
        "viewportSubPixelBits" => viewport_sub_pixel_bits,
        "minMemoryMapAlignment" => min_memory_map_alignment,
        "minTexelBufferOffsetAlignment" => min_texel_buffer_offset_alignment,
        "minUniformBufferOffsetAlignment" => min_uniform_buffer_offset_alignment,
        "minStorageBufferOffsetAlignment" => min_storage_buffer_offset_alignment,
        "minTexelOffset" => min_texel_offset,
        "maxTexelOffset" => max_texel_offset,
        "minTexelGatherOffset" => min_texel_gather_offset,
        "maxTexelGatherOffset" => max_texel_gather_offset,
        "minInterpolationOffset" => min_interpolation_offset,
        "maxInterpolationOffset" => max_interpolation_offset,
        "subPixelInterpolationOffsetBits" => sub_pixel_interpolation_offset_bits,
        "maxFramebufferWidth" => max_framebuffer_width,
        "maxFramebufferHeight" => max_framebuffer_height,
        "maxFramebufferLayers" => max_framebuffer_layers,
        "framebufferColorSampleCounts" => framebuffer_color_sample_counts,
        "framebufferDepthSampleCounts" => framebuffer_depth_sample_counts,
        "framebufferStencilSampleCounts" => framebuffer_stencil_sample_counts,
        "framebufferNoAttachmentsSampleCounts" => framebuffer_no_attachments_sample_counts,
        "maxColorAttachments" => max_color_attachments,
        "sampledImageColorSampleCounts" => sampled_image_color_sample_counts,
        "sampledImageIntegerSampleCounts" => sampled_image_integer_sample_counts,
        "sampledImageDepthSampleCounts" => sampled_image_depth_sample_counts,
        "sampledImageStencilSampleCounts" => sampled_image_stencil_sample_counts,
        "storageImageSampleCounts" => storage_image_sample_counts,
        "maxSampleMaskWords" => max_sample_mask_words,
        "timestampComputeAndGraphics" => timestamp_compute_and_graphics,
        "timestampPeriod" => timestamp_period,
        "maxClipDistances" => max_clip_distances,
        "maxCullDistances" => max_cull_distances,
        "maxCombinedClipAndCullDistances" => max_combined_clip_and_cull_distances,
        "discreteQueuePriorities" => discrete_queue_priorities,
        "pointSizeRange" => point_size_range,
        "lineWidthRange" => line_width_range,
        "pointSizeGranularity" => point_size_granularity,
        "lineWidthGranularity" => line_width_granularity,
        "strictLines" => strict_lines,
        "standardSampleLocations" => standard_sample_locations,
        "optimalBufferCopyOffsetAlignment" => optimal_buffer_copy_offset_alignment,
        "optimalBufferCopyRowPitchAlignment" => optimal_buffer_copy_row_pitch_alignment,
        "nonCoherentAtomSize" => non_coherent_atom_size,
    })
}

/// `VkPhysicalDeviceProperties` keyed like the profile JSON.
pub fn core_properties(properties: &vk::PhysicalDeviceProperties) -> FieldValue {
    let sparse = reflect!(properties.sparse_properties, {
        "residencyStandard2DBlockShape" => residency_standard2_d_block_shape,
        "residencyStandard2DMultisampleBlockShape" => residency_standard2_d_multisample_block_shape,
        "residencyStandard3DBlockShape" => residency_standard3_d_block_shape,
        "residencyAlignedMipSize" => residency_aligned_mip_size,
        "residencyNonResidentStrict" => residency_non_resident_strict,
    });

    let mut fields = IndexMap::new();
    fields.insert("apiVersion".to_string(), properties.api_version.into_field_value());
    fields.insert("driverVersion".to_string(), properties.driver_version.into_field_value());
    fields.insert("vendorID".to_string(), properties.vendor_id.into_field_value());
    fields.insert("deviceID".to_string(), properties.device_id.into_field_value());
    fields.insert("deviceType".to_string(), properties.device_type.into_field_value());
    fields.insert("deviceName".to_string(), text_field(&properties.device_name));
    fields.insert(
        "pipelineCacheUUID".to_string(),
        properties.pipeline_cache_uuid.into_field_value(),
    );
    fields.insert("limits".to_string(), limits(&properties.limits));
    fields.insert("sparseProperties".to_string(), sparse);
    FieldValue::Struct(fields)
}

/// `VkPhysicalDeviceFeatures` is a plain array of `VkBool32`.
pub fn core_features(features: &vk::PhysicalDeviceFeatures) -> FieldValue {
    let values = unsafe {
        std::slice::from_raw_parts(
            (features as *const vk::PhysicalDeviceFeatures).cast::<vk::Bool32>(),
            CORE_FEATURES.len(),
        )
    };
    bool_members(CORE_FEATURES, values)
}

/// Queries one registered features struct through `vkGetPhysicalDeviceFeatures2`.
///
/// The struct is laid out in a zeroed, 8-byte aligned buffer: the
/// `sType`/`pNext` header followed by its `VkBool32` members.
pub unsafe fn features(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
    entry: &FeatureStruct,
) -> FieldValue {
    let header = size_of::<vk::BaseOutStructure>();
    let bytes = header + entry.members.len() * size_of::<vk::Bool32>();
    let mut buffer = vec![0u64; bytes.div_ceil(size_of::<u64>())];

    let base = buffer.as_mut_ptr().cast::<vk::BaseOutStructure>();
    (*base).s_type = entry.s_type;
    (*base).p_next = std::ptr::null_mut();

    let mut features2 = vk::PhysicalDeviceFeatures2::default();
    features2.p_next = buffer.as_mut_ptr().cast::<c_void>();
    instance.get_physical_device_features2(physical_device, &mut features2);

    let values = std::slice::from_raw_parts(
        buffer.as_ptr().cast::<u8>().add(header).cast::<vk::Bool32>(),
        entry.members.len(),
    );
    bool_members(entry.members, values)
}

fn format_features(
    linear: impl IntoFieldValue,
    optimal: impl IntoFieldValue,
    buffer: impl IntoFieldValue,
) -> FieldValue {
    let mut fields = IndexMap::new();
    fields.insert("linearTilingFeatures".to_string(), linear.into_field_value());
    fields.insert("optimalTilingFeatures".to_string(), optimal.into_field_value());
    fields.insert("bufferFeatures".to_string(), buffer.into_field_value());
    FieldValue::Struct(fields)
}

pub unsafe fn format_properties(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
    format: vk::Format,
) -> FieldValue {
    let properties = instance.get_physical_device_format_properties(physical_device, format);
    format_features(
        properties.linear_tiling_features,
        properties.optimal_tiling_features,
        properties.buffer_features,
    )
}

pub unsafe fn format_properties3(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
    format: vk::Format,
) -> FieldValue {
    let mut properties3 = vk::FormatProperties3::default();
    {
        let mut properties2 = vk::FormatProperties2::default().push_next(&mut properties3);
        instance.get_physical_device_format_properties2(physical_device, format, &mut properties2);
    }
    format_features(
        properties3.linear_tiling_features,
        properties3.optimal_tiling_features,
        properties3.buffer_features,
    )
}

/// Every queue family the device reports, as an array of `VkQueueFamilyProperties`.
pub fn queue_families(families: &[vk::QueueFamilyProperties]) -> FieldValue {
    FieldValue::Array(
        families
            .iter()
            .map(|family| {
                reflect!(family, {
                    "queueFlags" => queue_flags,
                    "queueCount" => queue_count,
                    "timestampValidBits" => timestamp_valid_bits,
                    "minImageTransferGranularity" => min_image_transfer_granularity,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::FieldPath;
    use pretty_assertions::assert_eq;

    #[test]
    fn core_features_follow_declaration_order() {
        let features = vk::PhysicalDeviceFeatures {
            robust_buffer_access: vk::TRUE,
            wide_lines: vk::TRUE,
            inherited_queries: vk::TRUE,
            ..Default::default()
        };
        let value = core_features(&features);
        let member = |name: &str| value.lookup(&FieldPath::root().field(name)).cloned();

        assert_eq!(member("robustBufferAccess"), Some(FieldValue::Unsigned(1)));
        assert_eq!(member("wideLines"), Some(FieldValue::Unsigned(1)));
        assert_eq!(member("largePoints"), Some(FieldValue::Unsigned(0)));
        assert_eq!(member("inheritedQueries"), Some(FieldValue::Unsigned(1)));
    }

    #[test]
    fn core_properties_expose_nested_limits() {
        let mut properties = vk::PhysicalDeviceProperties {
            api_version: vk::make_api_version(0, 1, 3, 0),
            device_type: vk::PhysicalDeviceType::CPU,
            ..Default::default()
        };
        properties.limits.max_image_dimension1_d = 102;
        properties.limits.max_image_dimension2_d = 103;
        properties.limits.point_size_range = [1.0, 64.0];
        properties.limits.framebuffer_color_sample_counts =
            vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;

        let value = core_properties(&properties);
        let limits = FieldPath::root().field("limits");
        assert_eq!(
            value.lookup(&limits.field("maxImageDimension1D")),
            Some(&FieldValue::Unsigned(102))
        );
        assert_eq!(
            value.lookup(&limits.field("maxImageDimension2D")),
            Some(&FieldValue::Unsigned(103))
        );
        assert_eq!(
            value.lookup(&limits.field("pointSizeRange").index(1)),
            Some(&FieldValue::Float(64.0))
        );
        assert_eq!(
            value.lookup(&limits.field("framebufferColorSampleCounts")),
            Some(&FieldValue::Unsigned(5))
        );
        assert_eq!(
            value.lookup(&FieldPath::root().field("deviceType")),
            Some(&FieldValue::Signed(4))
        );
    }

    #[test]
    fn queue_families_keep_device_order() {
        let families = [
            vk::QueueFamilyProperties {
                queue_flags: vk::QueueFlags::TRANSFER,
                queue_count: 1,
                ..Default::default()
            },
            vk::QueueFamilyProperties {
                queue_flags: vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE,
                queue_count: 4,
                min_image_transfer_granularity: vk::Extent3D {
                    width: 1,
                    height: 1,
                    depth: 1,
                },
                ..Default::default()
            },
        ];
        let value = queue_families(&families);

        assert_eq!(
            value.lookup(&FieldPath::root().index(1).field("queueCount")),
            Some(&FieldValue::Unsigned(4))
        );
        assert_eq!(
            value.lookup(
                &FieldPath::root()
                    .index(1)
                    .field("minImageTransferGranularity")
                    .field("depth")
            ),
            Some(&FieldValue::Unsigned(1))
        );
    }
}
