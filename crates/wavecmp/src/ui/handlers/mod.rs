//! Message handlers, one module per concern
//!
//! Each sub-module provides handler methods on `WavecmpApp`.

pub mod navigation;
pub mod view;
