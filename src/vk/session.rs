use crate::capability::formats::format_by_name;
use crate::capability::{FieldValue, IntoFieldValue};
use crate::check::{DeviceCapabilities, Reported};
use crate::config::CheckConfig;
use crate::expect::Source;
use crate::profile::{ApiVersion, ResolvedProfile};
use crate::vk::debug_messenger::DebugMessenger;
use crate::vk::instance::{new_instance, InstanceRequest};
use crate::vk::layer::{apply_layer_path, LayerSettings};
use crate::vk::query;
use crate::vk::registry::{find_features, find_properties, Requirement};
use anyhow::Context;
use ash::{vk, Entry};
use build_info::BuildInfo;
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::ffi::CStr;

const VK_KHR_FORMAT_FEATURE_FLAGS_2: &str = "VK_KHR_format_feature_flags2";

/// An instance with the Profiles layer active and the physical device it
/// simulates.
pub struct Session {
    entry: Entry,
    instance: ash::Instance,
    debug_messenger: Option<DebugMessenger>,
    physical_device: vk::PhysicalDevice,
    properties: vk::PhysicalDeviceProperties,
    device_extensions: IndexMap<String, u32>,
}

impl Session {
    pub unsafe fn new(
        config: &CheckConfig,
        profile: &ResolvedProfile,
        bi: &BuildInfo,
    ) -> anyhow::Result<Self> {
        if let Some(path) = &config.layer_path {
            apply_layer_path(path);
        }

        let entry = Entry::load().context("Failed to load the Vulkan loader")?;
        let settings = LayerSettings {
            profile_file: config.profile_file.clone(),
            profile_name: config.profile_name.clone(),
            simulate: config.simulate.clone(),
        };
        let request = InstanceRequest {
            settings: &settings,
            transport: config.transport,
            api_version: profile.api_version,
            validation: config.validation,
        };
        let (instance, compatibilities) = new_instance(&entry, &request, bi)?;

        // From here on the instance is owned by the session, so a failed
        // device selection still tears it down.
        let mut session = Self {
            entry,
            instance,
            debug_messenger: None,
            physical_device: vk::PhysicalDevice::null(),
            properties: vk::PhysicalDeviceProperties::default(),
            device_extensions: IndexMap::new(),
        };

        if config.validation && DebugMessenger::available(&compatibilities) {
            session.debug_messenger = Some(DebugMessenger::new(&session.entry, &session.instance)?);
        }

        session.select_device(config.device_index)?;
        Ok(session)
    }

    unsafe fn select_device(&mut self, index: Option<usize>) -> anyhow::Result<()> {
        let devices = self
            .instance
            .enumerate_physical_devices()
            .context("Failed to enumerate physical devices")?;
        debug!("Found {} physical device(s)", devices.len());

        let physical_device = match index {
            Some(index) => *devices.get(index).ok_or_else(|| {
                anyhow::anyhow!(
                    "Physical device {} requested but only {} found",
                    index,
                    devices.len()
                )
            })?,
            None => {
                if devices.len() > 1 {
                    warn!("{} physical devices found, using the first", devices.len());
                }
                *devices
                    .first()
                    .ok_or_else(|| anyhow::anyhow!("No physical device found"))?
            }
        };

        let properties = self.instance.get_physical_device_properties(physical_device);
        let extensions = self
            .instance
            .enumerate_device_extension_properties(physical_device)
            .context("Failed to enumerate device extension properties")?;
        self.device_extensions = extensions
            .iter()
            .map(|ext| {
                let ext_name = CStr::from_ptr(ext.extension_name.as_ptr());
                (ext_name.to_string_lossy().into_owned(), ext.spec_version)
            })
            .collect();

        info!(
            "Using {} (API {}, {} device extensions)",
            CStr::from_ptr(properties.device_name.as_ptr()).to_string_lossy(),
            ApiVersion::from_vk(properties.api_version),
            self.device_extensions.len()
        );

        self.physical_device = physical_device;
        self.properties = properties;
        Ok(())
    }

    pub fn device_api_version(&self) -> ApiVersion {
        ApiVersion::from_vk(self.properties.api_version)
    }

    fn satisfies(&self, requirement: Requirement) -> Result<(), String> {
        requirement.check(self.device_api_version(), &self.device_extensions)
    }

    fn read_features(&self, name: &str) -> Reported {
        if name == "VkPhysicalDeviceFeatures" {
            let features = unsafe {
                self.instance
                    .get_physical_device_features(self.physical_device)
            };
            return Reported::Value(query::core_features(&features));
        }

        let Some(entry) = find_features(name) else {
            return Reported::Unavailable(format!("{} is not a known features struct", name));
        };
        match self.satisfies(entry.requires) {
            Ok(()) => Reported::Value(unsafe {
                query::features(&self.instance, self.physical_device, entry)
            }),
            Err(reason) => Reported::Unavailable(reason),
        }
    }

    fn read_properties(&self, name: &str) -> Reported {
        if name == "VkPhysicalDeviceProperties" {
            return Reported::Value(query::core_properties(&self.properties));
        }

        let Some(entry) = find_properties(name) else {
            return Reported::Unavailable(format!("{} is not a known properties struct", name));
        };
        match self.satisfies(entry.requires) {
            Ok(()) => Reported::Value(unsafe { (entry.read)(&self.instance, self.physical_device) }),
            Err(reason) => Reported::Unavailable(reason),
        }
    }

    fn read_format(&self, format_name: &str, name: &str) -> Reported {
        let Some(format) = format_by_name(format_name) else {
            return Reported::Unavailable(format!("{} is not a known format", format_name));
        };

        match name {
            "VkFormatProperties" => Reported::Value(unsafe {
                query::format_properties(&self.instance, self.physical_device, format)
            }),
            "VkFormatProperties3" | "VkFormatProperties3KHR" => {
                match self.satisfies(Requirement::VersionOrExtension(
                    1,
                    3,
                    VK_KHR_FORMAT_FEATURE_FLAGS_2,
                )) {
                    Ok(()) => Reported::Value(unsafe {
                        query::format_properties3(&self.instance, self.physical_device, format)
                    }),
                    Err(reason) => Reported::Unavailable(reason),
                }
            }
            other => Reported::Unavailable(format!("{} is not a known format struct", other)),
        }
    }

    fn read_queue_families(&self, name: &str) -> Reported {
        if name != "VkQueueFamilyProperties" {
            return Reported::Unavailable(format!("{} is not a known queue family struct", name));
        }
        let families = unsafe {
            self.instance
                .get_physical_device_queue_family_properties(self.physical_device)
        };
        Reported::Value(query::queue_families(&families))
    }
}

fn single_member(name: &str, value: impl IntoFieldValue) -> FieldValue {
    let mut fields = IndexMap::new();
    fields.insert(name.to_string(), value.into_field_value());
    FieldValue::Struct(fields)
}

impl DeviceCapabilities for Session {
    fn read(&mut self, source: &Source) -> Reported {
        match source {
            Source::ApiVersion => {
                Reported::Value(single_member("apiVersion", self.properties.api_version))
            }
            Source::Extension { name } => match self.device_extensions.get(name) {
                Some(spec_version) => Reported::Value(single_member("specVersion", *spec_version)),
                None => Reported::Missing(format!("{} is not supported by the device", name)),
            },
            Source::Features { name } => self.read_features(name),
            Source::Properties { name } => self.read_properties(name),
            Source::Format { format, name } => self.read_format(format, name),
            Source::QueueFamily { name, .. } => self.read_queue_families(name),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        unsafe {
            if let Some(messenger) = self.debug_messenger.as_mut() {
                messenger.destroy(&self.entry, &self.instance);
            }
            self.instance.destroy_instance(None);
        }
        debug!("Instance destroyed");
    }
}
