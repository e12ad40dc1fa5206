//! Checks that a Vulkan device, as seen through the Khronos Profiles layer,
//! reports the capabilities a Vulkan profile JSON declares.
//!
//! The profile is flattened into an expectation table ([`expect::derive`]),
//! each expectation is evaluated against the reflected value of the struct it
//! names ([`check::run`]) and the outcomes are summarised ([`report`]).

pub mod app;
pub mod capability;
pub mod check;
pub mod config;
pub mod expect;
pub mod logging;
pub mod profile;
pub mod report;
pub mod vk;

build_info::build_info!(pub fn get_build_info);
