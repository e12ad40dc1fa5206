//! Reported capability values.
//!
//! Every queried Vulkan struct is reflected into a [`FieldValue`] tree keyed by
//! the Vulkan member names, so that expectations derived from a profile can
//! address reported values by the same paths the JSON uses.

pub mod formats;
pub mod limits;
pub mod names;

use ash::vk;
use indexmap::IndexMap;
use serde::Serialize;
use std::ffi::c_char;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    Array(Vec<FieldValue>),
    Struct(IndexMap<String, FieldValue>),
}

impl FieldValue {
    pub fn lookup(&self, path: &FieldPath) -> Option<&FieldValue> {
        path.segments()
            .iter()
            .try_fold(self, |value, segment| match (value, segment) {
                (FieldValue::Struct(fields), Segment::Field(name)) => fields.get(name),
                (FieldValue::Array(items), Segment::Index(index)) => items.get(*index),
                _ => None,
            })
    }

    pub fn as_bits(&self) -> Option<u64> {
        match self {
            FieldValue::Unsigned(value) => Some(*value),
            FieldValue::Signed(value) => u64::try_from(*value).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unsigned(value) => write!(f, "{}", value),
            FieldValue::Signed(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Text(value) => write!(f, "{:?}", value),
            FieldValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            FieldValue::Struct(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Field(String),
    Index(usize),
}

/// Path of a member inside a reflected struct, e.g. `limits.maxComputeWorkGroupCount[1]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn field(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Field(name.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Member names from the outermost in, array indices skipped.
    pub fn field_names(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.iter().filter_map(|segment| match segment {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Field(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Conversion of a Vulkan struct member into a [`FieldValue`].
pub trait IntoFieldValue {
    fn into_field_value(self) -> FieldValue;
}

macro_rules! unsigned_field {
    ($($ty:ty),*) => {
        $(impl IntoFieldValue for $ty {
            fn into_field_value(self) -> FieldValue {
                FieldValue::Unsigned(self as u64)
            }
        })*
    };
}

macro_rules! signed_field {
    ($($ty:ty),*) => {
        $(impl IntoFieldValue for $ty {
            fn into_field_value(self) -> FieldValue {
                FieldValue::Signed(self as i64)
            }
        })*
    };
}

macro_rules! flags_field {
    ($($ty:ty),*) => {
        $(impl IntoFieldValue for $ty {
            fn into_field_value(self) -> FieldValue {
                FieldValue::Unsigned(self.as_raw() as u64)
            }
        })*
    };
}

macro_rules! enum_field {
    ($($ty:ty),*) => {
        $(impl IntoFieldValue for $ty {
            fn into_field_value(self) -> FieldValue {
                FieldValue::Signed(self.as_raw() as i64)
            }
        })*
    };
}

unsigned_field!(u8, u32, u64, usize);
signed_field!(i32);
flags_field!(
    vk::SampleCountFlags,
    vk::ShaderStageFlags,
    vk::SubgroupFeatureFlags,
    vk::ResolveModeFlags,
    vk::QueueFlags,
    vk::FormatFeatureFlags,
    vk::FormatFeatureFlags2
);
enum_field!(
    vk::PhysicalDeviceType,
    vk::PointClippingBehavior,
    vk::ShaderFloatControlsIndependence,
    vk::DriverId
);

impl IntoFieldValue for f32 {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Float(self as f64)
    }
}

impl<T: IntoFieldValue + Copy, const N: usize> IntoFieldValue for [T; N] {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Array(self.iter().map(|item| item.into_field_value()).collect())
    }
}

impl IntoFieldValue for vk::Extent3D {
    fn into_field_value(self) -> FieldValue {
        let mut fields = IndexMap::new();
        fields.insert("width".to_string(), self.width.into_field_value());
        fields.insert("height".to_string(), self.height.into_field_value());
        fields.insert("depth".to_string(), self.depth.into_field_value());
        FieldValue::Struct(fields)
    }
}

/// Reads a fixed-size, NUL-terminated Vulkan name array.
pub fn text_field(raw: &[c_char]) -> FieldValue {
    let bytes: Vec<u8> = raw
        .iter()
        .take_while(|c| **c != 0)
        .map(|c| *c as u8)
        .collect();
    FieldValue::Text(String::from_utf8_lossy(&bytes).into_owned())
}

/// Builds a [`FieldValue::Struct`] from `"vulkanName" => rust_field` pairs.
#[macro_export]
macro_rules! reflect {
    ($source:expr, { $($name:literal => $field:ident),* $(,)? }) => {{
        #[allow(unused_imports)]
        use $crate::capability::IntoFieldValue as _;
        let mut fields = ::indexmap::IndexMap::new();
        $(fields.insert($name.to_string(), $source.$field.into_field_value());)*
        $crate::capability::FieldValue::Struct(fields)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_walks_fields_and_indices() {
        let limits = vk::PhysicalDeviceLimits {
            max_image_dimension1_d: 4096,
            max_compute_work_group_count: [65535, 65534, 65533],
            min_texel_offset: -8,
            point_size_range: [1.0, 64.0],
            ..Default::default()
        };
        let mut root = IndexMap::new();
        root.insert(
            "limits".to_string(),
            reflect!(limits, {
                "maxImageDimension1D" => max_image_dimension1_d,
                "maxComputeWorkGroupCount" => max_compute_work_group_count,
                "minTexelOffset" => min_texel_offset,
                "pointSizeRange" => point_size_range,
            }),
        );
        let root = FieldValue::Struct(root);

        let limits_path = FieldPath::root().field("limits");
        assert_eq!(
            root.lookup(&limits_path.field("maxImageDimension1D")),
            Some(&FieldValue::Unsigned(4096))
        );
        assert_eq!(
            root.lookup(&limits_path.field("maxComputeWorkGroupCount").index(1)),
            Some(&FieldValue::Unsigned(65534))
        );
        assert_eq!(
            root.lookup(&limits_path.field("minTexelOffset")),
            Some(&FieldValue::Signed(-8))
        );
        assert_eq!(
            root.lookup(&limits_path.field("pointSizeRange").index(1)),
            Some(&FieldValue::Float(64.0))
        );
        assert_eq!(root.lookup(&limits_path.field("nope")), None);
        assert_eq!(root.lookup(&limits_path.index(0)), None);
    }

    #[test]
    fn paths_render_like_c_member_access() {
        let path = FieldPath::root()
            .field("limits")
            .field("maxComputeWorkGroupSize")
            .index(2);
        assert_eq!(path.to_string(), "limits.maxComputeWorkGroupSize[2]");
        assert_eq!(
            path.field_names().collect::<Vec<_>>(),
            vec!["limits", "maxComputeWorkGroupSize"]
        );
    }

    #[test]
    fn flags_and_text_reflect_to_raw_values() {
        assert_eq!(
            (vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4).into_field_value(),
            FieldValue::Unsigned(5)
        );
        assert_eq!(
            vk::PhysicalDeviceType::DISCRETE_GPU.into_field_value(),
            FieldValue::Signed(2)
        );

        let mut name = [0 as c_char; 8];
        for (slot, byte) in name.iter_mut().zip(b"llvmpipe") {
            *slot = *byte as c_char;
        }
        name[7] = 0;
        assert_eq!(text_field(&name), FieldValue::Text("llvmpip".to_string()));
    }
}
