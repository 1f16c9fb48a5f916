//! Terminal UI.
//!
//! `App` is the container. It owns the lookup key and composes the
//! [`boundary::RecoveryBoundary`] around the [`info::PokemonInfo`] fetch
//! state machine. Both follow the MVI pattern in [`mvi`].

pub mod app;
pub mod boundary;
pub mod events;
pub mod footer;
pub mod form;
pub mod info;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;
