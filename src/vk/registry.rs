//! Capability structs this tool knows how to query.
//!
//! Feature structs are read by layout: after `sType`/`pNext` they are a packed
//! run of `VkBool32` members, so a member-name list is enough to reflect them.
//! Property structs hold mixed types and are reflected member by member.

use crate::capability::FieldValue;
use crate::profile::ApiVersion;
use crate::reflect;
use ash::vk;
use indexmap::IndexMap;

/// What a device must expose for a struct to be queryable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Version(u32, u32),
    Extension(&'static str),
    VersionOrExtension(u32, u32, &'static str),
}

impl Requirement {
    /// `Err` names what is missing. Only major and minor of `version` count.
    pub fn check(
        self,
        version: ApiVersion,
        extensions: &IndexMap<String, u32>,
    ) -> Result<(), String> {
        match self {
            Requirement::Version(major, minor) if version.at_least(major, minor) => Ok(()),
            Requirement::Version(major, minor) => {
                Err(format!("requires Vulkan {}.{}, device reports {}", major, minor, version))
            }
            Requirement::Extension(extension) if extensions.contains_key(extension) => Ok(()),
            Requirement::Extension(extension) => Err(format!("requires {}", extension)),
            Requirement::VersionOrExtension(major, minor, extension)
                if version.at_least(major, minor) || extensions.contains_key(extension) =>
            {
                Ok(())
            }
            Requirement::VersionOrExtension(major, minor, extension) => Err(format!(
                "requires Vulkan {}.{} or {}, device reports {}",
                major, minor, extension, version
            )),
        }
    }
}

pub struct FeatureStruct {
    pub name: &'static str,
    pub s_type: vk::StructureType,
    pub requires: Requirement,
    pub members: &'static [&'static str],
}

pub struct PropertyStruct {
    pub name: &'static str,
    pub requires: Requirement,
    pub read: unsafe fn(&ash::Instance, vk::PhysicalDevice) -> FieldValue,
}

pub const CORE_FEATURES: &[&str] = &[
    "robustBufferAccess",
    "fullDrawIndexUint32",
    "imageCubeArray",
    "independentBlend",
    "geometryShader",
    "tessellationShader",
    "sampleRateShading",
    "dualSrcBlend",
    "logicOp",
    "multiDrawIndirect",
    "drawIndirectFirstInstance",
    "depthClamp",
    "depthBiasClamp",
    "fillModeNonSolid",
    "depthBounds",
    "wideLines",
    "largePoints",
    "alphaToOne",
    "multiViewport",
    "samplerAnisotropy",
    "textureCompressionETC2",
    "textureCompressionASTC_LDR",
    "textureCompressionBC",
    "occlusionQueryPrecise",
    "pipelineStatisticsQuery",
    "vertexPipelineStoresAndAtomics",
    "fragmentStoresAndAtomics",
    "shaderTessellationAndGeometryPointSize",
    "shaderImageGatherExtended",
    "shaderStorageImageExtendedFormats",
    "shaderStorageImageMultisample",
    "shaderStorageImageReadWithoutFormat",
    "shaderStorageImageWriteWithoutFormat",
    "shaderUniformBufferArrayDynamicIndexing",
    "shaderSampledImageArrayDynamicIndexing",
    "shaderStorageBufferArrayDynamicIndexing",
    "shaderStorageImageArrayDynamicIndexing",
    "shaderClipDistance",
    "shaderCullDistance",
    "shaderFloat64",
    "shaderInt64",
    "shaderInt16",
    "shaderResourceResidency",
    "shaderResourceMinLod",
    "sparseBinding",
    "sparseResidencyBuffer",
    "sparseResidencyImage2D",
    "sparseResidencyImage3D",
    "sparseResidency2Samples",
    "sparseResidency4Samples",
    "sparseResidency8Samples",
    "sparseResidency16Samples",
    "sparseResidencyAliased",
    "variableMultisampleRate",
    "inheritedQueries",
];

const DESCRIPTOR_INDEXING_FEATURES: &[&str] = &[
    "shaderInputAttachmentArrayDynamicIndexing",
    "shaderUniformTexelBufferArrayDynamicIndexing",
    "shaderStorageTexelBufferArrayDynamicIndexing",
    "shaderUniformBufferArrayNonUniformIndexing",
    "shaderSampledImageArrayNonUniformIndexing",
    "shaderStorageBufferArrayNonUniformIndexing",
    "shaderStorageImageArrayNonUniformIndexing",
    "shaderInputAttachmentArrayNonUniformIndexing",
    "shaderUniformTexelBufferArrayNonUniformIndexing",
    "shaderStorageTexelBufferArrayNonUniformIndexing",
    "descriptorBindingUniformBufferUpdateAfterBind",
    "descriptorBindingSampledImageUpdateAfterBind",
    "descriptorBindingStorageImageUpdateAfterBind",
    "descriptorBindingStorageBufferUpdateAfterBind",
    "descriptorBindingUniformTexelBufferUpdateAfterBind",
    "descriptorBindingStorageTexelBufferUpdateAfterBind",
    "descriptorBindingUpdateUnusedWhilePending",
    "descriptorBindingPartiallyBound",
    "descriptorBindingVariableDescriptorCount",
    "runtimeDescriptorArray",
];

pub static FEATURE_STRUCTS: &[FeatureStruct] = &[
    FeatureStruct {
        name: "VkPhysicalDeviceVulkan11Features",
        s_type: vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        requires: Requirement::Version(1, 2),
        members: &[
            "storageBuffer16BitAccess",
            "uniformAndStorageBuffer16BitAccess",
            "storagePushConstant16",
            "storageInputOutput16",
            "multiview",
            "multiviewGeometryShader",
            "multiviewTessellationShader",
            "variablePointersStorageBuffer",
            "variablePointers",
            "protectedMemory",
            "samplerYcbcrConversion",
            "shaderDrawParameters",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceVulkan12Features",
        s_type: vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        requires: Requirement::Version(1, 2),
        members: &[
            "samplerMirrorClampToEdge",
            "drawIndirectCount",
            "storageBuffer8BitAccess",
            "uniformAndStorageBuffer8BitAccess",
            "storagePushConstant8",
            "shaderBufferInt64Atomics",
            "shaderSharedInt64Atomics",
            "shaderFloat16",
            "shaderInt8",
            "descriptorIndexing",
            "shaderInputAttachmentArrayDynamicIndexing",
            "shaderUniformTexelBufferArrayDynamicIndexing",
            "shaderStorageTexelBufferArrayDynamicIndexing",
            "shaderUniformBufferArrayNonUniformIndexing",
            "shaderSampledImageArrayNonUniformIndexing",
            "shaderStorageBufferArrayNonUniformIndexing",
            "shaderStorageImageArrayNonUniformIndexing",
            "shaderInputAttachmentArrayNonUniformIndexing",
            "shaderUniformTexelBufferArrayNonUniformIndexing",
            "shaderStorageTexelBufferArrayNonUniformIndexing",
            "descriptorBindingUniformBufferUpdateAfterBind",
            "descriptorBindingSampledImageUpdateAfterBind",
            "descriptorBindingStorageImageUpdateAfterBind",
            "descriptorBindingStorageBufferUpdateAfterBind",
            "descriptorBindingUniformTexelBufferUpdateAfterBind",
            "descriptorBindingStorageTexelBufferUpdateAfterBind",
            "descriptorBindingUpdateUnusedWhilePending",
            "descriptorBindingPartiallyBound",
            "descriptorBindingVariableDescriptorCount",
            "runtimeDescriptorArray",
            "samplerFilterMinmax",
            "scalarBlockLayout",
            "imagelessFramebuffer",
            "uniformBufferStandardLayout",
            "shaderSubgroupExtendedTypes",
            "separateDepthStencilLayouts",
            "hostQueryReset",
            "timelineSemaphore",
            "bufferDeviceAddress",
            "bufferDeviceAddressCaptureReplay",
            "bufferDeviceAddressMultiDevice",
            "vulkanMemoryModel",
            "vulkanMemoryModelDeviceScope",
            "vulkanMemoryModelAvailabilityVisibilityChains",
            "shaderOutputViewportIndex",
            "shaderOutputLayer",
            "subgroupBroadcastDynamicId",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceVulkan13Features",
        s_type: vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
        requires: Requirement::Version(1, 3),
        members: &[
            "robustImageAccess",
            "inlineUniformBlock",
            "descriptorBindingInlineUniformBlockUpdateAfterBind",
            "pipelineCreationCacheControl",
            "privateData",
            "shaderDemoteToHelperInvocation",
            "shaderTerminateInvocation",
            "subgroupSizeControl",
            "computeFullSubgroups",
            "synchronization2",
            "textureCompressionASTC_HDR",
            "shaderZeroInitializeWorkgroupMemory",
            "dynamicRendering",
            "shaderIntegerDotProduct",
            "maintenance4",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceMultiviewFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_MULTIVIEW_FEATURES,
        requires: Requirement::VersionOrExtension(1, 1, "VK_KHR_multiview"),
        members: &[
            "multiview",
            "multiviewGeometryShader",
            "multiviewTessellationShader",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDevice16BitStorageFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_16BIT_STORAGE_FEATURES,
        requires: Requirement::VersionOrExtension(1, 1, "VK_KHR_16bit_storage"),
        members: &[
            "storageBuffer16BitAccess",
            "uniformAndStorageBuffer16BitAccess",
            "storagePushConstant16",
            "storageInputOutput16",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceVariablePointersFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_VARIABLE_POINTERS_FEATURES,
        requires: Requirement::VersionOrExtension(1, 1, "VK_KHR_variable_pointers"),
        members: &["variablePointersStorageBuffer", "variablePointers"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceProtectedMemoryFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_PROTECTED_MEMORY_FEATURES,
        requires: Requirement::Version(1, 1),
        members: &["protectedMemory"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceSamplerYcbcrConversionFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES,
        requires: Requirement::VersionOrExtension(1, 1, "VK_KHR_sampler_ycbcr_conversion"),
        members: &["samplerYcbcrConversion"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceShaderDrawParametersFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SHADER_DRAW_PARAMETERS_FEATURES,
        requires: Requirement::VersionOrExtension(1, 1, "VK_KHR_shader_draw_parameters"),
        members: &["shaderDrawParameters"],
    },
    FeatureStruct {
        name: "VkPhysicalDevice8BitStorageFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_8BIT_STORAGE_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_KHR_8bit_storage"),
        members: &[
            "storageBuffer8BitAccess",
            "uniformAndStorageBuffer8BitAccess",
            "storagePushConstant8",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceShaderAtomicInt64Features",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SHADER_ATOMIC_INT64_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_KHR_shader_atomic_int64"),
        members: &["shaderBufferInt64Atomics", "shaderSharedInt64Atomics"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceShaderFloat16Int8Features",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SHADER_FLOAT16_INT8_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_KHR_shader_float16_int8"),
        members: &["shaderFloat16", "shaderInt8"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceDescriptorIndexingFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_DESCRIPTOR_INDEXING_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_EXT_descriptor_indexing"),
        members: DESCRIPTOR_INDEXING_FEATURES,
    },
    FeatureStruct {
        name: "VkPhysicalDeviceScalarBlockLayoutFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_EXT_scalar_block_layout"),
        members: &["scalarBlockLayout"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceImagelessFramebufferFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_IMAGELESS_FRAMEBUFFER_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_KHR_imageless_framebuffer"),
        members: &["imagelessFramebuffer"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceUniformBufferStandardLayoutFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_UNIFORM_BUFFER_STANDARD_LAYOUT_FEATURES,
        requires: Requirement::VersionOrExtension(
            1,
            2,
            "VK_KHR_uniform_buffer_standard_layout",
        ),
        members: &["uniformBufferStandardLayout"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceShaderSubgroupExtendedTypesFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SHADER_SUBGROUP_EXTENDED_TYPES_FEATURES,
        requires: Requirement::VersionOrExtension(
            1,
            2,
            "VK_KHR_shader_subgroup_extended_types",
        ),
        members: &["shaderSubgroupExtendedTypes"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceSeparateDepthStencilLayoutsFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SEPARATE_DEPTH_STENCIL_LAYOUTS_FEATURES,
        requires: Requirement::VersionOrExtension(
            1,
            2,
            "VK_KHR_separate_depth_stencil_layouts",
        ),
        members: &["separateDepthStencilLayouts"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceHostQueryResetFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_HOST_QUERY_RESET_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_EXT_host_query_reset"),
        members: &["hostQueryReset"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceTimelineSemaphoreFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_KHR_timeline_semaphore"),
        members: &["timelineSemaphore"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceBufferDeviceAddressFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_BUFFER_DEVICE_ADDRESS_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_KHR_buffer_device_address"),
        members: &[
            "bufferDeviceAddress",
            "bufferDeviceAddressCaptureReplay",
            "bufferDeviceAddressMultiDevice",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceVulkanMemoryModelFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_VULKAN_MEMORY_MODEL_FEATURES,
        requires: Requirement::VersionOrExtension(1, 2, "VK_KHR_vulkan_memory_model"),
        members: &[
            "vulkanMemoryModel",
            "vulkanMemoryModelDeviceScope",
            "vulkanMemoryModelAvailabilityVisibilityChains",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceImageRobustnessFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_EXT_image_robustness"),
        members: &["robustImageAccess"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceInlineUniformBlockFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_INLINE_UNIFORM_BLOCK_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_EXT_inline_uniform_block"),
        members: &[
            "inlineUniformBlock",
            "descriptorBindingInlineUniformBlockUpdateAfterBind",
        ],
    },
    FeatureStruct {
        name: "VkPhysicalDevicePipelineCreationCacheControlFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_PIPELINE_CREATION_CACHE_CONTROL_FEATURES,
        requires: Requirement::VersionOrExtension(
            1,
            3,
            "VK_EXT_pipeline_creation_cache_control",
        ),
        members: &["pipelineCreationCacheControl"],
    },
    FeatureStruct {
        name: "VkPhysicalDevicePrivateDataFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_PRIVATE_DATA_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_EXT_private_data"),
        members: &["privateData"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceShaderDemoteToHelperInvocationFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SHADER_DEMOTE_TO_HELPER_INVOCATION_FEATURES,
        requires: Requirement::VersionOrExtension(
            1,
            3,
            "VK_EXT_shader_demote_to_helper_invocation",
        ),
        members: &["shaderDemoteToHelperInvocation"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceShaderTerminateInvocationFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SHADER_TERMINATE_INVOCATION_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_KHR_shader_terminate_invocation"),
        members: &["shaderTerminateInvocation"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceSubgroupSizeControlFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SUBGROUP_SIZE_CONTROL_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_EXT_subgroup_size_control"),
        members: &["subgroupSizeControl", "computeFullSubgroups"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceSynchronization2Features",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_KHR_synchronization2"),
        members: &["synchronization2"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceTextureCompressionASTCHDRFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_TEXTURE_COMPRESSION_ASTC_HDR_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_EXT_texture_compression_astc_hdr"),
        members: &["textureCompressionASTC_HDR"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceZeroInitializeWorkgroupMemoryFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_ZERO_INITIALIZE_WORKGROUP_MEMORY_FEATURES,
        requires: Requirement::VersionOrExtension(
            1,
            3,
            "VK_KHR_zero_initialize_workgroup_memory",
        ),
        members: &["shaderZeroInitializeWorkgroupMemory"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceDynamicRenderingFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_DYNAMIC_RENDERING_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_KHR_dynamic_rendering"),
        members: &["dynamicRendering"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceShaderIntegerDotProductFeatures",
        s_type: vk::StructureType::PHYSICAL_DEVICE_SHADER_INTEGER_DOT_PRODUCT_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_KHR_shader_integer_dot_product"),
        members: &["shaderIntegerDotProduct"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceMaintenance4Features",
        s_type: vk::StructureType::PHYSICAL_DEVICE_MAINTENANCE_4_FEATURES,
        requires: Requirement::VersionOrExtension(1, 3, "VK_KHR_maintenance4"),
        members: &["maintenance4"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceRobustness2FeaturesEXT",
        s_type: vk::StructureType::PHYSICAL_DEVICE_ROBUSTNESS_2_FEATURES_EXT,
        requires: Requirement::Extension("VK_EXT_robustness2"),
        members: &["robustBufferAccess2", "robustImageAccess2", "nullDescriptor"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceCustomBorderColorFeaturesEXT",
        s_type: vk::StructureType::PHYSICAL_DEVICE_CUSTOM_BORDER_COLOR_FEATURES_EXT,
        requires: Requirement::Extension("VK_EXT_custom_border_color"),
        members: &["customBorderColors", "customBorderColorWithoutFormat"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceExtendedDynamicStateFeaturesEXT",
        s_type: vk::StructureType::PHYSICAL_DEVICE_EXTENDED_DYNAMIC_STATE_FEATURES_EXT,
        requires: Requirement::Extension("VK_EXT_extended_dynamic_state"),
        members: &["extendedDynamicState"],
    },
    FeatureStruct {
        name: "VkPhysicalDeviceTransformFeedbackFeaturesEXT",
        s_type: vk::StructureType::PHYSICAL_DEVICE_TRANSFORM_FEEDBACK_FEATURES_EXT,
        requires: Requirement::Extension("VK_EXT_transform_feedback"),
        members: &["transformFeedback", "geometryStreams"],
    },
];

/// Declares a [`PropertyStruct`] whose ash type is chained alone onto
/// `VkPhysicalDeviceProperties2`.
macro_rules! property_struct {
    ($name:literal, $ty:ident, $requires:expr, { $($member:literal => $field:ident),* $(,)? }) => {
        PropertyStruct {
            name: $name,
            requires: $requires,
            read: {
                unsafe fn read(
                    instance: &ash::Instance,
                    physical_device: vk::PhysicalDevice,
                ) -> FieldValue {
                    let mut properties = vk::$ty::default();
                    {
                        let mut properties2 =
                            vk::PhysicalDeviceProperties2::default().push_next(&mut properties);
                        instance.get_physical_device_properties2(physical_device, &mut properties2);
                    }
                    reflect!(properties, { $($member => $field),* })
                }
                read
            },
        }
    };
}

pub static PROPERTY_STRUCTS: &[PropertyStruct] = &[
    property_struct!(
        "VkPhysicalDeviceVulkan11Properties",
        PhysicalDeviceVulkan11Properties,
        Requirement::Version(1, 2),
        {
            "deviceUUID" => device_uuid,
            "driverUUID" => driver_uuid,
            "deviceLUID" => device_luid,
            "deviceNodeMask" => device_node_mask,
            "deviceLUIDValid" => device_luid_valid,
            "subgroupSize" => subgroup_size,
            "subgroupSupportedStages" => subgroup_supported_stages,
            "subgroupSupportedOperations" => subgroup_supported_operations,
            "subgroupQuadOperationsInAllStages" => subgroup_quad_operations_in_all_stages,
            "pointClippingBehavior" => point_clipping_behavior,
            "maxMultiviewViewCount" => max_multiview_view_count,
            "maxMultiviewInstanceIndex" => max_multiview_instance_index,
            "protectedNoFault" => protected_no_fault,
            "maxPerSetDescriptors" => max_per_set_descriptors,
            "maxMemoryAllocationSize" => max_memory_allocation_size,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceVulkan12Properties",
        PhysicalDeviceVulkan12Properties,
        Requirement::Version(1, 2),
        {
            "driverID" => driver_id,
            "denormBehaviorIndependence" => denorm_behavior_independence,
            "roundingModeIndependence" => rounding_mode_independence,
            "shaderSignedZeroInfNanPreserveFloat16" => shader_signed_zero_inf_nan_preserve_float16,
            "shaderSignedZeroInfNanPreserveFloat32" => shader_signed_zero_inf_nan_preserve_float32,
            "shaderSignedZeroInfNanPreserveFloat64" => shader_signed_zero_inf_nan_preserve_float64,
            "shaderDenormPreserveFloat16" => shader_denorm_preserve_float16,
            "shaderDenormPreserveFloat32" => shader_denorm_preserve_float32,
            "shaderDenormPreserveFloat64" => shader_denorm_preserve_float64,
            "shaderDenormFlushToZeroFloat16" => shader_denorm_flush_to_zero_float16,
            "shaderDenormFlushToZeroFloat32" => shader_denorm_flush_to_zero_float32,
            "shaderDenormFlushToZeroFloat64" => shader_denorm_flush_to_zero_float64,
            "shaderRoundingModeRTEFloat16" => shader_rounding_mode_rte_float16,
            "shaderRoundingModeRTEFloat32" => shader_rounding_mode_rte_float32,
            "shaderRoundingModeRTEFloat64" => shader_rounding_mode_rte_float64,
            "shaderRoundingModeRTZFloat16" => shader_rounding_mode_rtz_float16,
            "shaderRoundingModeRTZFloat32" => shader_rounding_mode_rtz_float32,
            "shaderRoundingModeRTZFloat64" => shader_rounding_mode_rtz_float64,
            "maxUpdateAfterBindDescriptorsInAllPools" => max_update_after_bind_descriptors_in_all_pools,
            "robustBufferAccessUpdateAfterBind" => robust_buffer_access_update_after_bind,
            "quadDivergentImplicitLod" => quad_divergent_implicit_lod,
            "maxPerStageUpdateAfterBindResources" => max_per_stage_update_after_bind_resources,
            "supportedDepthResolveModes" => supported_depth_resolve_modes,
            "supportedStencilResolveModes" => supported_stencil_resolve_modes,
            "independentResolveNone" => independent_resolve_none,
            "independentResolve" => independent_resolve,
            "filterMinmaxSingleComponentFormats" => filter_minmax_single_component_formats,
            "filterMinmaxImageComponentMapping" => filter_minmax_image_component_mapping,
            "maxTimelineSemaphoreValueDifference" => max_timeline_semaphore_value_difference,
            "framebufferIntegerColorSampleCounts" => framebuffer_integer_color_sample_counts,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceVulkan13Properties",
        PhysicalDeviceVulkan13Properties,
        Requirement::Version(1, 3),
        {
            "minSubgroupSize" => min_subgroup_size,
            "maxSubgroupSize" => max_subgroup_size,
            "maxComputeWorkgroupSubgroups" => max_compute_workgroup_subgroups,
            "requiredSubgroupSizeStages" => required_subgroup_size_stages,
            "maxInlineUniformBlockSize" => max_inline_uniform_block_size,
            "maxPerStageDescriptorInlineUniformBlocks" => max_per_stage_descriptor_inline_uniform_blocks,
            "maxDescriptorSetInlineUniformBlocks" => max_descriptor_set_inline_uniform_blocks,
            "maxInlineUniformTotalSize" => max_inline_uniform_total_size,
            "storageTexelBufferOffsetAlignmentBytes" => storage_texel_buffer_offset_alignment_bytes,
            "storageTexelBufferOffsetSingleTexelAlignment" => storage_texel_buffer_offset_single_texel_alignment,
            "uniformTexelBufferOffsetAlignmentBytes" => uniform_texel_buffer_offset_alignment_bytes,
            "uniformTexelBufferOffsetSingleTexelAlignment" => uniform_texel_buffer_offset_single_texel_alignment,
            "maxBufferSize" => max_buffer_size,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceSubgroupProperties",
        PhysicalDeviceSubgroupProperties,
        Requirement::Version(1, 1),
        {
            "subgroupSize" => subgroup_size,
            "supportedStages" => supported_stages,
            "supportedOperations" => supported_operations,
            "quadOperationsInAllStages" => quad_operations_in_all_stages,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceMaintenance3Properties",
        PhysicalDeviceMaintenance3Properties,
        Requirement::VersionOrExtension(1, 1, "VK_KHR_maintenance3"),
        {
            "maxPerSetDescriptors" => max_per_set_descriptors,
            "maxMemoryAllocationSize" => max_memory_allocation_size,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceMultiviewProperties",
        PhysicalDeviceMultiviewProperties,
        Requirement::VersionOrExtension(1, 1, "VK_KHR_multiview"),
        {
            "maxMultiviewViewCount" => max_multiview_view_count,
            "maxMultiviewInstanceIndex" => max_multiview_instance_index,
        }
    ),
    property_struct!(
        "VkPhysicalDevicePointClippingProperties",
        PhysicalDevicePointClippingProperties,
        Requirement::VersionOrExtension(1, 1, "VK_KHR_maintenance2"),
        {
            "pointClippingBehavior" => point_clipping_behavior,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceProtectedMemoryProperties",
        PhysicalDeviceProtectedMemoryProperties,
        Requirement::Version(1, 1),
        {
            "protectedNoFault" => protected_no_fault,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceDepthStencilResolveProperties",
        PhysicalDeviceDepthStencilResolveProperties,
        Requirement::VersionOrExtension(1, 2, "VK_KHR_depth_stencil_resolve"),
        {
            "supportedDepthResolveModes" => supported_depth_resolve_modes,
            "supportedStencilResolveModes" => supported_stencil_resolve_modes,
            "independentResolveNone" => independent_resolve_none,
            "independentResolve" => independent_resolve,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceDescriptorIndexingProperties",
        PhysicalDeviceDescriptorIndexingProperties,
        Requirement::VersionOrExtension(1, 2, "VK_EXT_descriptor_indexing"),
        {
            "maxUpdateAfterBindDescriptorsInAllPools" => max_update_after_bind_descriptors_in_all_pools,
            "shaderUniformBufferArrayNonUniformIndexingNative" => shader_uniform_buffer_array_non_uniform_indexing_native,
            "shaderSampledImageArrayNonUniformIndexingNative" => shader_sampled_image_array_non_uniform_indexing_native,
            "shaderStorageBufferArrayNonUniformIndexingNative" => shader_storage_buffer_array_non_uniform_indexing_native,
            "shaderStorageImageArrayNonUniformIndexingNative" => shader_storage_image_array_non_uniform_indexing_native,
            "shaderInputAttachmentArrayNonUniformIndexingNative" => shader_input_attachment_array_non_uniform_indexing_native,
            "robustBufferAccessUpdateAfterBind" => robust_buffer_access_update_after_bind,
            "quadDivergentImplicitLod" => quad_divergent_implicit_lod,
            "maxPerStageDescriptorUpdateAfterBindSamplers" => max_per_stage_descriptor_update_after_bind_samplers,
            "maxPerStageDescriptorUpdateAfterBindUniformBuffers" => max_per_stage_descriptor_update_after_bind_uniform_buffers,
            "maxPerStageDescriptorUpdateAfterBindStorageBuffers" => max_per_stage_descriptor_update_after_bind_storage_buffers,
            "maxPerStageDescriptorUpdateAfterBindSampledImages" => max_per_stage_descriptor_update_after_bind_sampled_images,
            "maxPerStageDescriptorUpdateAfterBindStorageImages" => max_per_stage_descriptor_update_after_bind_storage_images,
            "maxPerStageDescriptorUpdateAfterBindInputAttachments" => max_per_stage_descriptor_update_after_bind_input_attachments,
            "maxPerStageUpdateAfterBindResources" => max_per_stage_update_after_bind_resources,
            "maxDescriptorSetUpdateAfterBindSamplers" => max_descriptor_set_update_after_bind_samplers,
            "maxDescriptorSetUpdateAfterBindUniformBuffers" => max_descriptor_set_update_after_bind_uniform_buffers,
            "maxDescriptorSetUpdateAfterBindUniformBuffersDynamic" => max_descriptor_set_update_after_bind_uniform_buffers_dynamic,
            "maxDescriptorSetUpdateAfterBindStorageBuffers" => max_descriptor_set_update_after_bind_storage_buffers,
            "maxDescriptorSetUpdateAfterBindStorageBuffersDynamic" => max_descriptor_set_update_after_bind_storage_buffers_dynamic,
            "maxDescriptorSetUpdateAfterBindSampledImages" => max_descriptor_set_update_after_bind_sampled_images,
            "maxDescriptorSetUpdateAfterBindStorageImages" => max_descriptor_set_update_after_bind_storage_images,
            "maxDescriptorSetUpdateAfterBindInputAttachments" => max_descriptor_set_update_after_bind_input_attachments,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceFloatControlsProperties",
        PhysicalDeviceFloatControlsProperties,
        Requirement::VersionOrExtension(1, 2, "VK_KHR_shader_float_controls"),
        {
            "denormBehaviorIndependence" => denorm_behavior_independence,
            "roundingModeIndependence" => rounding_mode_independence,
            "shaderSignedZeroInfNanPreserveFloat16" => shader_signed_zero_inf_nan_preserve_float16,
            "shaderSignedZeroInfNanPreserveFloat32" => shader_signed_zero_inf_nan_preserve_float32,
            "shaderSignedZeroInfNanPreserveFloat64" => shader_signed_zero_inf_nan_preserve_float64,
            "shaderDenormPreserveFloat16" => shader_denorm_preserve_float16,
            "shaderDenormPreserveFloat32" => shader_denorm_preserve_float32,
            "shaderDenormPreserveFloat64" => shader_denorm_preserve_float64,
            "shaderDenormFlushToZeroFloat16" => shader_denorm_flush_to_zero_float16,
            "shaderDenormFlushToZeroFloat32" => shader_denorm_flush_to_zero_float32,
            "shaderDenormFlushToZeroFloat64" => shader_denorm_flush_to_zero_float64,
            "shaderRoundingModeRTEFloat16" => shader_rounding_mode_rte_float16,
            "shaderRoundingModeRTEFloat32" => shader_rounding_mode_rte_float32,
            "shaderRoundingModeRTEFloat64" => shader_rounding_mode_rte_float64,
            "shaderRoundingModeRTZFloat16" => shader_rounding_mode_rtz_float16,
            "shaderRoundingModeRTZFloat32" => shader_rounding_mode_rtz_float32,
            "shaderRoundingModeRTZFloat64" => shader_rounding_mode_rtz_float64,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceSamplerFilterMinmaxProperties",
        PhysicalDeviceSamplerFilterMinmaxProperties,
        Requirement::VersionOrExtension(1, 2, "VK_EXT_sampler_filter_minmax"),
        {
            "filterMinmaxSingleComponentFormats" => filter_minmax_single_component_formats,
            "filterMinmaxImageComponentMapping" => filter_minmax_image_component_mapping,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceTimelineSemaphoreProperties",
        PhysicalDeviceTimelineSemaphoreProperties,
        Requirement::VersionOrExtension(1, 2, "VK_KHR_timeline_semaphore"),
        {
            "maxTimelineSemaphoreValueDifference" => max_timeline_semaphore_value_difference,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceInlineUniformBlockProperties",
        PhysicalDeviceInlineUniformBlockProperties,
        Requirement::VersionOrExtension(1, 3, "VK_EXT_inline_uniform_block"),
        {
            "maxInlineUniformBlockSize" => max_inline_uniform_block_size,
            "maxPerStageDescriptorInlineUniformBlocks" => max_per_stage_descriptor_inline_uniform_blocks,
            "maxPerStageDescriptorUpdateAfterBindInlineUniformBlocks" => max_per_stage_descriptor_update_after_bind_inline_uniform_blocks,
            "maxDescriptorSetInlineUniformBlocks" => max_descriptor_set_inline_uniform_blocks,
            "maxDescriptorSetUpdateAfterBindInlineUniformBlocks" => max_descriptor_set_update_after_bind_inline_uniform_blocks,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceSubgroupSizeControlProperties",
        PhysicalDeviceSubgroupSizeControlProperties,
        Requirement::VersionOrExtension(1, 3, "VK_EXT_subgroup_size_control"),
        {
            "minSubgroupSize" => min_subgroup_size,
            "maxSubgroupSize" => max_subgroup_size,
            "maxComputeWorkgroupSubgroups" => max_compute_workgroup_subgroups,
            "requiredSubgroupSizeStages" => required_subgroup_size_stages,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceTexelBufferAlignmentProperties",
        PhysicalDeviceTexelBufferAlignmentProperties,
        Requirement::VersionOrExtension(1, 3, "VK_EXT_texel_buffer_alignment"),
        {
            "storageTexelBufferOffsetAlignmentBytes" => storage_texel_buffer_offset_alignment_bytes,
            "storageTexelBufferOffsetSingleTexelAlignment" => storage_texel_buffer_offset_single_texel_alignment,
            "uniformTexelBufferOffsetAlignmentBytes" => uniform_texel_buffer_offset_alignment_bytes,
            "uniformTexelBufferOffsetSingleTexelAlignment" => uniform_texel_buffer_offset_single_texel_alignment,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceMaintenance4Properties",
        PhysicalDeviceMaintenance4Properties,
        Requirement::VersionOrExtension(1, 3, "VK_KHR_maintenance4"),
        {
            "maxBufferSize" => max_buffer_size,
        }
    ),
    property_struct!(
        "VkPhysicalDevicePushDescriptorPropertiesKHR",
        PhysicalDevicePushDescriptorPropertiesKHR,
        Requirement::Extension("VK_KHR_push_descriptor"),
        {
            "maxPushDescriptors" => max_push_descriptors,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceRobustness2PropertiesEXT",
        PhysicalDeviceRobustness2PropertiesEXT,
        Requirement::Extension("VK_EXT_robustness2"),
        {
            "robustStorageBufferAccessSizeAlignment" => robust_storage_buffer_access_size_alignment,
            "robustUniformBufferAccessSizeAlignment" => robust_uniform_buffer_access_size_alignment,
        }
    ),
    property_struct!(
        "VkPhysicalDeviceCustomBorderColorPropertiesEXT",
        PhysicalDeviceCustomBorderColorPropertiesEXT,
        Requirement::Extension("VK_EXT_custom_border_color"),
        {
            "maxCustomBorderColorSamplers" => max_custom_border_color_samplers,
        }
    ),
];

/// Profiles may name a promoted struct by its extension alias, e.g.
/// `VkPhysicalDeviceMultiviewFeaturesKHR`.
fn find<'a, T>(table: &'a [T], name: &str, key: impl Fn(&T) -> &str) -> Option<&'a T> {
    table
        .iter()
        .find(|entry| key(*entry) == name)
        .or_else(|| {
            let core = name
                .strip_suffix("KHR")
                .or_else(|| name.strip_suffix("EXT"))?;
            table.iter().find(|entry| key(*entry) == core)
        })
}

pub fn find_features(name: &str) -> Option<&'static FeatureStruct> {
    find(FEATURE_STRUCTS, name, |entry| entry.name)
}

pub fn find_properties(name: &str) -> Option<&'static PropertyStruct> {
    find(PROPERTY_STRUCTS, name, |entry| entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::mem::size_of;

    fn extensions(names: &[&str]) -> IndexMap<String, u32> {
        names.iter().map(|name| (name.to_string(), 1)).collect()
    }

    #[test]
    fn version_requirements_ignore_patch_level() {
        let none = extensions(&[]);
        assert_eq!(
            Requirement::Version(1, 2).check(ApiVersion::new(1, 2, 0), &none),
            Ok(())
        );
        assert_eq!(
            Requirement::Version(1, 3).check(ApiVersion::new(1, 2, 999), &none),
            Err("requires Vulkan 1.3, device reports 1.2.999".to_string())
        );
        assert_eq!(
            Requirement::Version(1, 1).check(ApiVersion::new(1, 3, 0), &none),
            Ok(())
        );
    }

    #[test]
    fn extension_requirements_need_the_extension() {
        let version = ApiVersion::new(1, 3, 204);
        let requirement = Requirement::Extension("VK_EXT_robustness2");
        assert_eq!(
            requirement.check(version, &extensions(&["VK_EXT_robustness2"])),
            Ok(())
        );
        assert_eq!(
            requirement.check(version, &extensions(&["VK_KHR_maintenance4"])),
            Err("requires VK_EXT_robustness2".to_string())
        );
    }

    #[test]
    fn version_or_extension_accepts_either() {
        let requirement = Requirement::VersionOrExtension(1, 3, "VK_KHR_maintenance4");
        let with = extensions(&["VK_KHR_maintenance4"]);
        let without = extensions(&[]);

        assert_eq!(requirement.check(ApiVersion::new(1, 3, 0), &without), Ok(()));
        assert_eq!(requirement.check(ApiVersion::new(1, 2, 0), &with), Ok(()));
        assert_eq!(
            requirement.check(ApiVersion::new(1, 2, 198), &without),
            Err("requires Vulkan 1.3 or VK_KHR_maintenance4, device reports 1.2.198".to_string())
        );
    }

    #[test]
    fn core_feature_names_cover_the_struct() {
        assert_eq!(
            CORE_FEATURES.len() * size_of::<vk::Bool32>(),
            size_of::<vk::PhysicalDeviceFeatures>()
        );
    }

    #[test]
    fn feature_layouts_match_ash() {
        let header = size_of::<vk::BaseOutStructure>();
        let layout = |name: &str| {
            let entry = find_features(name).unwrap();
            header + entry.members.len() * size_of::<vk::Bool32>()
        };

        assert_eq!(
            layout("VkPhysicalDeviceVulkan11Features"),
            size_of::<vk::PhysicalDeviceVulkan11Features>()
        );
        assert_eq!(
            layout("VkPhysicalDeviceVulkan12Features"),
            size_of::<vk::PhysicalDeviceVulkan12Features>() - 4
        );
        assert_eq!(
            layout("VkPhysicalDeviceVulkan13Features"),
            size_of::<vk::PhysicalDeviceVulkan13Features>() - 4
        );
        assert_eq!(
            layout("VkPhysicalDeviceDescriptorIndexingFeatures"),
            size_of::<vk::PhysicalDeviceDescriptorIndexingFeatures>()
        );
    }

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for name in FEATURE_STRUCTS
            .iter()
            .map(|entry| entry.name)
            .chain(PROPERTY_STRUCTS.iter().map(|entry| entry.name))
        {
            assert!(seen.insert(name), "{} registered twice", name);
        }
    }

    #[test]
    fn extension_aliases_resolve_to_core_structs() {
        assert_eq!(
            find_features("VkPhysicalDeviceMultiviewFeaturesKHR").map(|entry| entry.name),
            Some("VkPhysicalDeviceMultiviewFeatures")
        );
        assert_eq!(
            find_properties("VkPhysicalDeviceMaintenance3PropertiesKHR").map(|entry| entry.name),
            Some("VkPhysicalDeviceMaintenance3Properties")
        );
        assert_eq!(
            find_features("VkPhysicalDeviceRobustness2FeaturesEXT").map(|entry| entry.name),
            Some("VkPhysicalDeviceRobustness2FeaturesEXT")
        );
        assert!(find_features("VkPhysicalDeviceToasterFeatures").is_none());
    }
}
