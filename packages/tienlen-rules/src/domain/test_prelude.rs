use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    rules_test_support::proptest_prelude::proptest_prelude_config()
}
