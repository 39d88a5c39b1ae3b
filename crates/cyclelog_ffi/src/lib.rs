//! Flutter bridge crate for CycleLog core.
//!
//! Only `api` is part of the Dart-facing surface; bindings are generated from
//! its `#[frb]`-annotated functions.

pub mod api;
