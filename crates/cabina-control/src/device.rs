// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Device capability classification.

use cabina_core::{DeviceProfile, DeviceTier, HostEnvironment};
use std::sync::{Mutex, MutexGuard};

/// Platform signature tokens that identify a handheld device.
pub const MOBILE_TOKENS: [&str; 9] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "mobile",
];

/// Minimum number of logical cores a high-tier device must exceed.
pub const HIGH_TIER_MIN_CORES: usize = 4;

/// Returns `true` if `signature` contains any of [`MOBILE_TOKENS`], ignoring case.
pub fn is_mobile_signature(signature: &str) -> bool {
    let signature = signature.to_lowercase();
    MOBILE_TOKENS.iter().any(|token| signature.contains(token))
}

/// Classifies the host once and remembers the answer.
///
/// The host is probed on the first call to [`classify`](Self::classify); every
/// later call returns the cached profile until
/// [`reset_for_testing`](Self::reset_for_testing) clears it.
pub struct DeviceClassifier {
    probe: Box<dyn HostEnvironment>,
    device_override: Option<DeviceTier>,
    cached: Mutex<Option<DeviceProfile>>,
}

impl DeviceClassifier {
    /// Creates a classifier reading host signals from `probe`.
    pub fn new(probe: Box<dyn HostEnvironment>) -> Self {
        Self {
            probe,
            device_override: None,
            cached: Mutex::new(None),
        }
    }

    /// Forces the resulting tier regardless of what the probe reports.
    pub fn with_override(mut self, tier: Option<DeviceTier>) -> Self {
        self.device_override = tier;
        self
    }

    fn cache(&self) -> MutexGuard<'_, Option<DeviceProfile>> {
        // A poisoned cache still holds a valid profile.
        self.cached.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the device profile, probing the host on first use.
    pub fn classify(&self) -> DeviceProfile {
        let mut cached = self.cache();
        if let Some(profile) = *cached {
            return profile;
        }

        let profile = self.probe_host();
        log::info!(
            "Device classified as {:?} (cores: {}, mobile: {}, advanced GPU API: {})",
            profile.tier,
            profile
                .logical_cores
                .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
            profile.mobile,
            profile.advanced_gpu_api
        );
        *cached = Some(profile);
        profile
    }

    /// Shorthand for `classify().tier`.
    pub fn device_tier(&self) -> DeviceTier {
        self.classify().tier
    }

    /// Forgets the cached profile so the next call probes again.
    pub fn reset_for_testing(&self) {
        *self.cache() = None;
    }

    fn probe_host(&self) -> DeviceProfile {
        let logical_cores = self.probe.logical_cores();
        let mobile = is_mobile_signature(&self.probe.platform_signature());
        let advanced_gpu_api = self.probe.advanced_gpu_api_available();

        let enough_cores = logical_cores.is_some_and(|c| c > HIGH_TIER_MIN_CORES);
        let probed = if enough_cores && (!mobile || advanced_gpu_api) {
            DeviceTier::High
        } else {
            DeviceTier::Standard
        };

        let tier = match self.device_override {
            Some(forced) => {
                if forced != probed {
                    log::info!("Device tier override: {:?} instead of probed {:?}", forced, probed);
                }
                forced
            }
            None => probed,
        };

        DeviceProfile {
            tier,
            mobile,
            logical_cores,
            advanced_gpu_api,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeHost {
        cores: Option<usize>,
        signature: &'static str,
        advanced_gpu: bool,
        probes: Arc<AtomicUsize>,
    }

    impl FakeHost {
        fn boxed(cores: Option<usize>, signature: &'static str, advanced_gpu: bool) -> Box<Self> {
            Box::new(Self {
                cores,
                signature,
                advanced_gpu,
                probes: Arc::new(AtomicUsize::new(0)),
            })
        }
    }

    impl HostEnvironment for FakeHost {
        fn logical_cores(&self) -> Option<usize> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.cores
        }

        fn platform_signature(&self) -> String {
            self.signature.to_string()
        }

        fn advanced_gpu_api_available(&self) -> bool {
            self.advanced_gpu
        }
    }

    const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
    const PHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";

    #[test]
    fn test_mobile_tokens_case_insensitive() {
        assert!(is_mobile_signature("Mozilla/5.0 (Linux; ANDROID 14)"));
        assert!(is_mobile_signature("Opera Mini/8.0"));
        assert!(is_mobile_signature(PHONE));
        assert!(!is_mobile_signature(DESKTOP));
        assert!(!is_mobile_signature(""));
    }

    #[test]
    fn test_desktop_with_many_cores_is_high() {
        let classifier = DeviceClassifier::new(FakeHost::boxed(Some(8), DESKTOP, false));
        let profile = classifier.classify();
        assert_eq!(profile.tier, DeviceTier::High);
        assert!(!profile.mobile);
    }

    #[test]
    fn test_four_cores_is_standard() {
        let classifier = DeviceClassifier::new(FakeHost::boxed(Some(4), DESKTOP, true));
        assert_eq!(classifier.device_tier(), DeviceTier::Standard);
    }

    #[test]
    fn test_mobile_needs_advanced_gpu() {
        let without = DeviceClassifier::new(FakeHost::boxed(Some(8), PHONE, false));
        assert_eq!(without.device_tier(), DeviceTier::Standard);

        let with = DeviceClassifier::new(FakeHost::boxed(Some(8), PHONE, true));
        let profile = with.classify();
        assert_eq!(profile.tier, DeviceTier::High);
        assert!(profile.mobile);
    }

    #[test]
    fn test_unknown_core_count_is_standard() {
        let classifier = DeviceClassifier::new(FakeHost::boxed(None, DESKTOP, true));
        let profile = classifier.classify();
        assert_eq!(profile.tier, DeviceTier::Standard);
        assert_eq!(profile.logical_cores, None);
    }

    #[test]
    fn test_classification_is_memoized() {
        let host = FakeHost::boxed(Some(8), DESKTOP, false);
        let probes = Arc::clone(&host.probes);
        let classifier = DeviceClassifier::new(host);

        classifier.classify();
        classifier.classify();
        assert_eq!(probes.load(Ordering::SeqCst), 1);

        classifier.reset_for_testing();
        classifier.classify();
        assert_eq!(probes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_override_wins() {
        let classifier = DeviceClassifier::new(FakeHost::boxed(Some(2), PHONE, false))
            .with_override(Some(DeviceTier::High));
        let profile = classifier.classify();
        assert_eq!(profile.tier, DeviceTier::High);
        assert!(profile.mobile);
    }
}
