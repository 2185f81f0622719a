//! Test fixtures for common scenarios.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use amp_tag::{Catalog, CatalogConfig, EncodedAttr, Spec, Tag, TimeTagGenerator, Value};
use amp_tag_registry::DuplicatePolicy;

/// Instance ID used by fixture clocks, so Time-Tags are reproducible
/// apart from the clock reading.
pub const FIXTURE_INSTANCE: u64 = 0x00a1_b2c3_d4e5_f607;

/// Unix seconds all fixture times are anchored to (2025-01-14T16:00:00Z).
pub const FIXTURE_EPOCH_SECS: u64 = 1_736_870_400;

/// A test fixture with a catalog and a deterministic Time-Tag generator.
pub struct TestFixture {
    pub catalog: Catalog,
}

impl TestFixture {
    /// Catalog with the std payload types and a fixed-instance clock.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Catalog with no types registered.
    pub fn empty() -> Self {
        Self::with_config(CatalogConfig {
            register_std: false,
            ..CatalogConfig::default()
        })
    }

    /// Catalog whose registry replaces conflicting registrations.
    pub fn overwriting() -> Self {
        let mut config = CatalogConfig::default();
        config.registry.duplicate_policy = DuplicatePolicy::Overwrite;
        Self::with_config(config)
    }

    fn with_config(config: CatalogConfig) -> Self {
        let clock = TimeTagGenerator::with_instance(FIXTURE_INSTANCE);
        let catalog = match Catalog::with_clock(config, clock) {
            Ok(catalog) => catalog,
            Err(e) => panic!("fixture catalog: {}", e),
        };
        Self { catalog }
    }

    /// Fixed reference time.
    pub fn epoch() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(FIXTURE_EPOCH_SECS)
    }

    /// Spec under a per-test namespace, so fixtures never collide with
    /// the std catalog.
    pub fn scoped_spec(&self, test_name: &str, path: &str) -> Spec {
        Spec::root().with("testkit").with(test_name).with(path)
    }

    /// Encode a value and decode it straight back.
    pub fn roundtrip(&self, value: &dyn Value) -> Box<dyn Value> {
        let attr = self.encode(value);
        match self.catalog.decode_attr(&attr.id, &attr.bytes) {
            Ok(decoded) => decoded,
            Err(e) => panic!("decode {}: {}", value.type_name(), e),
        }
    }

    /// Encode a value, panicking on failure.
    pub fn encode(&self, value: &dyn Value) -> EncodedAttr {
        match self.catalog.encode_attr(value) {
            Ok(attr) => attr,
            Err(e) => panic!("encode {}: {}", value.type_name(), e),
        }
    }

    /// Stamp Time-Tags for each time in order.
    pub fn stamp_sequence(&self, times: &[SystemTime], monotonic: bool) -> Vec<Tag> {
        times
            .iter()
            .map(|t| self.catalog.stamp_at(*t, monotonic))
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Times that hold still for `len` readings.
pub fn stalled_clock(len: usize) -> Vec<SystemTime> {
    vec![TestFixture::epoch(); len]
}

/// Times that run forward for half of `len`, then step back by `rewind`
/// and run forward again.
pub fn rewinding_clock(len: usize, rewind: Duration) -> Vec<SystemTime> {
    let half = len / 2;
    let start = TestFixture::epoch();
    (0..len)
        .map(|i| {
            if i < half {
                start + Duration::from_micros(i as u64)
            } else {
                start - rewind + Duration::from_micros(i as u64)
            }
        })
        .collect()
}

/// Assert a sequence is strictly increasing.
pub fn assert_strictly_increasing(tags: &[Tag]) {
    for (i, pair) in tags.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "tag {} ({}) not after tag {} ({})",
            i + 1,
            pair[1],
            i,
            pair[0]
        );
    }
}
