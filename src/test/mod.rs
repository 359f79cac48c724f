//! Test-only helpers shared by the inline quickcheck suites.
