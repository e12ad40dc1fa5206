use crate::profile::ApiVersion;
use crate::vk::debug_messenger::DebugMessenger;
use crate::vk::layer::{LayerSettings, SettingsTransport, PROFILES_LAYER};
use anyhow::Context;
use ash::{vk, Entry};
use build_info::BuildInfo;
use log::{debug, info, warn};
use std::ffi::{c_char, CStr, CString};

const VK_EXT_LAYER_SETTINGS: &CStr =
    unsafe { CStr::from_bytes_with_nul_unchecked(b"VK_EXT_layer_settings\0") };
const VK_KHR_PORTABILITY_ENUMERATION: &CStr =
    unsafe { CStr::from_bytes_with_nul_unchecked(b"VK_KHR_portability_enumeration\0") };

#[derive(Clone, Copy, Debug, Default)]
pub struct InstanceCompatibilities {
    pub debug_utils_ext: bool,
    pub validation_layer: bool,
    pub layer_settings_ext: bool,
    pub portability_enumeration: bool,
}

pub struct InstanceRequest<'a> {
    pub settings: &'a LayerSettings,
    pub transport: SettingsTransport,
    pub api_version: ApiVersion,
    pub validation: bool,
}

unsafe fn get_instance_extensions(
    entry: &Entry,
    layer: Option<&CStr>,
) -> anyhow::Result<Vec<String>> {
    let extension_properties = entry
        .enumerate_instance_extension_properties(layer)
        .context("Failed to enumerate instance extension properties")?;
    let extensions = extension_properties
        .iter()
        .map(|ext| {
            let ext_name = CStr::from_ptr(ext.extension_name.as_ptr());
            ext_name.to_string_lossy().into_owned()
        })
        .collect();
    Ok(extensions)
}

pub unsafe fn get_instance_layers(entry: &Entry) -> anyhow::Result<Vec<String>> {
    let layer_properties = entry
        .enumerate_instance_layer_properties()
        .context("Failed to enumerate instance layer properties")?;
    let layers = layer_properties
        .iter()
        .map(|layer| {
            let layer_name = CStr::from_ptr(layer.layer_name.as_ptr());
            layer_name.to_string_lossy().into_owned()
        })
        .collect();
    Ok(layers)
}

unsafe fn get_required_instance_layers(
    available: &Vec<String>,
    request: &InstanceRequest,
    compatibilities: &mut InstanceCompatibilities,
) -> anyhow::Result<Vec<*const c_char>> {
    let profiles_layer = PROFILES_LAYER.to_string_lossy();
    if !available.iter().any(|layer| *layer == profiles_layer) {
        anyhow::bail!(
            "{} is not available, check that VK_LAYER_PATH points at its manifest",
            profiles_layer
        );
    }

    let mut required = vec![];
    if request.validation {
        // Validation sits above the Profiles layer so it sees the simulated device.
        required.extend(DebugMessenger::get_required_instance_layers(
            available,
            compatibilities,
        )?);
    }
    required.push(PROFILES_LAYER.as_ptr());
    Ok(required)
}

unsafe fn get_required_instance_extensions(
    entry: &Entry,
    request: &InstanceRequest,
    compatibilities: &mut InstanceCompatibilities,
) -> anyhow::Result<Vec<*const c_char>> {
    let extensions = get_instance_extensions(entry, None)?;
    debug!("Available instance extensions: {:?}", extensions);
    let layer_extensions = get_instance_extensions(entry, Some(PROFILES_LAYER))?;
    debug!("Profiles layer instance extensions: {:?}", layer_extensions);

    let mut required = vec![];
    if request.validation {
        required.extend(DebugMessenger::get_required_instance_extensions(
            &extensions,
            compatibilities,
        )?);
    }

    if extensions.contains(&"VK_KHR_portability_enumeration".to_string()) {
        required.push(VK_KHR_PORTABILITY_ENUMERATION.as_ptr());
        compatibilities.portability_enumeration = true;
    }

    if request.transport == SettingsTransport::LayerSettingsExt {
        let name = VK_EXT_LAYER_SETTINGS.to_string_lossy().into_owned();
        if layer_extensions.contains(&name) || extensions.contains(&name) {
            required.push(VK_EXT_LAYER_SETTINGS.as_ptr());
            compatibilities.layer_settings_ext = true;
        } else {
            warn!("{} is not available, falling back to environment settings", name);
        }
    }

    Ok(required)
}

/// Creates an instance with the Profiles layer enabled and configured.
pub unsafe fn new_instance(
    entry: &Entry,
    request: &InstanceRequest,
    bi: &BuildInfo,
) -> anyhow::Result<(ash::Instance, InstanceCompatibilities)> {
    let app_name = CString::new(bi.crate_info.name.clone())?;
    let app_version = &bi.crate_info.version;
    let app_version = vk::make_api_version(
        0,
        app_version.major as u32,
        app_version.minor as u32,
        app_version.patch as u32,
    );
    let engine_name = CString::new("NoEngine")?;
    let engine_version = vk::make_api_version(0, 1, 0, 0);
    let api_version = request.api_version.max(ApiVersion::V1_1);

    let app_info = vk::ApplicationInfo::default()
        .application_name(&app_name)
        .application_version(app_version)
        .engine_name(&engine_name)
        .engine_version(engine_version)
        .api_version(api_version.to_vk());

    let mut compatibilities = InstanceCompatibilities::default();
    let layers = get_instance_layers(entry)?;
    debug!("Available instance layers: {:?}", layers);
    let instance_layers = get_required_instance_layers(&layers, request, &mut compatibilities)?;
    let instance_extensions =
        get_required_instance_extensions(entry, request, &mut compatibilities)?;

    let flags = if compatibilities.portability_enumeration {
        vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR
    } else {
        vk::InstanceCreateFlags::empty()
    };

    let layer_settings = if compatibilities.layer_settings_ext {
        Some(request.settings.to_layer_settings()?)
    } else {
        request.settings.apply_environment();
        None
    };
    let mut layer_settings_info = layer_settings
        .as_ref()
        .map(|values| vk::LayerSettingsCreateInfoEXT::default().settings(values.settings()));

    let mut create_info = vk::InstanceCreateInfo::default()
        .application_info(&app_info)
        .enabled_extension_names(&instance_extensions)
        .enabled_layer_names(&instance_layers)
        .flags(flags);
    if let Some(info) = layer_settings_info.as_mut() {
        create_info = create_info.push_next(info);
    }

    info!(
        "Creating instance for profile {} (API {})",
        request.settings.profile_name, api_version
    );
    let instance = entry
        .create_instance(&create_info, None)
        .context("Failed to create Vulkan instance")?;

    Ok((instance, compatibilities))
}
