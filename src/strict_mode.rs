//! Development-only render check.
//!
//! With `double_invoke_render` on, a view is built twice and the two trees are
//! compared. A view that reads outside state or mutates something while
//! rendering shows up as a mismatch. Release builds turn the check off.

use gloo::console::warn;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevCheckMode {
    pub double_invoke_render: bool,
}

impl DevCheckMode {
    pub const ON: Self = Self { double_invoke_render: true };
    pub const OFF: Self = Self { double_invoke_render: false };

    /// On for debug builds, off for release builds.
    pub fn for_build() -> Self {
        Self {
            double_invoke_render: cfg!(debug_assertions),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render is not idempotent: a repeated invocation produced a different tree")]
pub struct NonIdempotentRender;

/// Builds `render`'s tree, twice when the dev check is on.
///
/// The first tree is always the one returned.
pub fn checked_render<R, V>(mode: DevCheckMode, render: R, on_violation: V) -> Html
where
    R: Fn() -> Html,
    V: FnOnce(NonIdempotentRender),
{
    let first = render();
    if mode.double_invoke_render && render() != first {
        on_violation(NonIdempotentRender);
    }
    first
}

#[derive(Properties, PartialEq)]
pub struct StrictModeProps {
    #[prop_or_default]
    pub mode: DevCheckMode,
    pub render: Callback<(), Html>,
}

/// Renders `render` with the dev check applied. Adds no element of its own.
#[function_component(StrictMode)]
pub fn strict_mode(props: &StrictModeProps) -> Html {
    let render = props.render.clone();
    checked_render(props.mode, move || render.emit(()), |violation| {
        warn!(violation.to_string());
    })
}
