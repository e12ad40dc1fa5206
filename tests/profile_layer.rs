use pretty_assertions::assert_eq;
use profcheck::app::App;
use profcheck::capability::FieldPath;
use profcheck::check::CaseStatus;
use profcheck::config::CheckConfig;
use profcheck::expect::{derive, Check, Comparison, Expected, Source};
use profcheck::get_build_info;
use profcheck::profile::{ApiVersion, ProfilesFile};
use profcheck::report::Summary;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("profiles/VP_LUNARG_test_api.json")
}

fn limit_check(table: &[profcheck::expect::Expectation], member: &str) -> Option<Check> {
    let path = FieldPath::root().field("limits").field(member);
    table
        .iter()
        .find(|expectation| {
            expectation.path == path
                && expectation.source
                    == Source::Properties {
                        name: "VkPhysicalDeviceProperties".to_string(),
                    }
        })
        .map(|expectation| expectation.check.clone())
}

#[test]
fn fixture_declares_image_dimension_floors() {
    let profile = ProfilesFile::load(&fixture())
        .unwrap()
        .resolve("VP_LUNARG_test_api")
        .unwrap();
    assert_eq!(profile.api_version, ApiVersion::new(1, 3, 204));

    let table = derive(&profile);
    assert_eq!(
        limit_check(&table, "maxImageDimension1D"),
        Some(Check::Compare {
            comparison: Comparison::AtLeast,
            expected: Expected::Unsigned(102),
        })
    );
    assert_eq!(
        limit_check(&table, "maxImageDimension2D"),
        Some(Check::Compare {
            comparison: Comparison::AtLeast,
            expected: Expected::Unsigned(103),
        })
    );
    // The first alternative wins.
    assert_eq!(
        limit_check(&table, "maxSamplerAnisotropy"),
        Some(Check::Compare {
            comparison: Comparison::AtLeast,
            expected: Expected::Float(16.0),
        })
    );
    assert!(table
        .iter()
        .all(|expectation| !matches!(expectation.check, Check::Unresolvable { .. })));
}

/// Runs the whole harness when a Vulkan loader and the Profiles layer are
/// installed. `VK_LAYER_PATH` is honoured as usual.
#[test]
fn simulated_device_matches_profile() {
    let entry = match unsafe { ash::Entry::load() } {
        Ok(entry) => entry,
        Err(err) => {
            eprintln!("skipping: no Vulkan loader ({})", err);
            return;
        }
    };
    let layers = unsafe { profcheck::vk::get_instance_layers(&entry) }.unwrap_or_default();
    if !layers.iter().any(|layer| layer == "VK_LAYER_KHRONOS_profiles") {
        eprintln!("skipping: VK_LAYER_KHRONOS_profiles is not installed");
        return;
    }
    drop(entry);

    let config = CheckConfig {
        profile_file: fixture(),
        ..CheckConfig::default()
    };
    let run = App::new(config, get_build_info().clone()).run().unwrap();
    let summary = Summary::of(&run.cases);

    let failed: Vec<String> = run
        .cases
        .iter()
        .filter(|case| case.status == CaseStatus::Failed)
        .map(|case| case.source.to_string())
        .collect();
    assert_eq!(failed, Vec::<String>::new());
    assert!(summary.succeeded());
    assert!(summary.checks.passed > 0);
}
