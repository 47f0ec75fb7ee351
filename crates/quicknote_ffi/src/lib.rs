//! Flutter-facing bridge over `quicknote_core`.

pub mod api;
