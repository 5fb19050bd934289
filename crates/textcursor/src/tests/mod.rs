mod property_budget;

/// Iterations for quickcheck properties.
fn quickcheck_tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Quickcheck strings may contain NUL, which ends terminated text early.
fn without_nul(text: &str) -> alloc::string::String {
    text.chars().filter(|&ch| ch != '\0').collect()
}
