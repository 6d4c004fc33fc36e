//! One-shot startup: run the startup hook, find the mount element, attach the
//! render root.

use gloo::console::log;
use thiserror::Error;
use web_sys::{window, Document, Element};
use yew::prelude::*;
use yew::AppHandle;

use crate::app_test::render_app_test;
use crate::config::BootConfig;
use crate::strict_mode::{DevCheckMode, StrictMode};

/// Line written to the console once per bootstrap.
pub const DIAGNOSTIC_LINE: &str = "CityPulse shell loaded: bootstrap starting";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootError {
    #[error("mount element #{id} not found in host document")]
    MountTargetMissing { id: String },

    #[error("host document unavailable: {0}")]
    HostUnavailable(&'static str),
}

#[derive(Properties, PartialEq, Clone, Copy)]
pub struct RootProps {
    #[prop_or_default]
    pub dev_check: DevCheckMode,
}

#[function_component(Root)]
pub fn root(props: &RootProps) -> Html {
    let render: Callback<(), Html> = Callback::from(|_: ()| render_app_test());
    html! { <StrictMode mode={props.dev_check} render={render} /> }
}

/// The page the app is mounted into.
pub trait HostDocument {
    type Mount;
    type Handle;

    fn find_mount(&self, id: &str) -> Option<Self::Mount>;

    /// Binds a render root to `mount` and renders `Root` into it.
    fn attach(&self, mount: Self::Mount, props: RootProps) -> Self::Handle;
}

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn current() -> Result<Self, BootError> {
        let win = window().ok_or(BootError::HostUnavailable("no window"))?;
        let document = win
            .document()
            .ok_or(BootError::HostUnavailable("no document"))?;
        Ok(Self { document })
    }
}

impl HostDocument for BrowserDocument {
    type Mount = Element;
    type Handle = AppHandle<Root>;

    fn find_mount(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attach(&self, mount: Element, props: RootProps) -> AppHandle<Root> {
        yew::Renderer::<Root>::with_root_and_props(mount, props).render()
    }
}

pub struct Bootstrap {
    config: BootConfig,
    on_startup: Box<dyn FnOnce()>,
}

impl Bootstrap {
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            on_startup: Box::new(|| log!(DIAGNOSTIC_LINE)),
        }
    }

    /// Replaces the default console diagnostic.
    pub fn on_startup(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_startup = Box::new(hook);
        self
    }

    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    /// Unmounted -> Mounted. Consumes `self`; there is no way back.
    ///
    /// A missing mount element fails before anything is attached.
    pub fn run<D: HostDocument>(self, document: &D) -> Result<D::Handle, BootError> {
        let Self { config, on_startup } = self;
        on_startup();

        let mount = document
            .find_mount(&config.mount_id)
            .ok_or_else(|| BootError::MountTargetMissing {
                id: config.mount_id.clone(),
            })?;

        Ok(document.attach(
            mount,
            RootProps {
                dev_check: config.dev_check,
            },
        ))
    }
}

/// Mounts the shell into the current page with the build's default config.
pub fn start() -> Result<AppHandle<Root>, BootError> {
    let document = BrowserDocument::current()?;
    Bootstrap::new(BootConfig::default()).run(&document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mount_error_names_the_id() {
        let err = BootError::MountTargetMissing { id: "root".into() };
        assert_eq!(err.to_string(), "mount element #root not found in host document");
    }

    #[test]
    fn bootstrap_keeps_config() {
        let boot = Bootstrap::new(BootConfig::default().with_mount_id("app"));
        assert_eq!(boot.config().mount_id, "app");
    }
}
