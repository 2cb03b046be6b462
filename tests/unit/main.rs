//! Unit test harness mirroring the `src/` layout

mod transform;
