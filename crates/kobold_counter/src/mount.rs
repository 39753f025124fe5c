// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finding the container element and rendering the counter into it.
//!
//! The lookup goes through the [`Document`] trait so the mount sequence can be
//! driven by something other than a live `web_sys::Document`.

use std::mem::MaybeUninit;
use std::pin::Pin;

use kobold::dom::Mountable;
use kobold::internal::In;
use kobold::prelude::*;
use log::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::counter::counter;
use crate::{Config, MountError};

/// Source of container elements, looked up by their `id` attribute.
pub trait Document {
    type Container;

    fn element_by_id(&self, id: &str) -> Option<Self::Container>;
}

impl Document for web_sys::Document {
    type Container = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Look up the container named by `config` and hand it to `render`.
///
/// `render` is called at most once, and never if the container is missing.
pub fn try_mount<D, F>(document: &D, config: &Config, render: F) -> Result<(), MountError>
where
    D: Document + ?Sized,
    F: FnOnce(D::Container) -> Result<(), MountError>,
{
    let id = config.root_id();
    let container = document
        .element_by_id(id)
        .ok_or_else(|| MountError::RootNotFound { id: id.into() })?;

    render(container)
}

/// Same as [`try_mount`], but the error is written to the log instead of
/// being returned. There is no retry and no fallback container.
///
/// Returns `true` if the render went through.
pub fn mount<D, F>(document: &D, config: &Config, render: F) -> bool
where
    D: Document + ?Sized,
    F: FnOnce(D::Container) -> Result<(), MountError>,
{
    match try_mount(document, config, render) {
        Ok(()) => {
            debug!("mounted counter into #{}", config.root_id());
            true
        }
        Err(err) => {
            error!("{err}");
            false
        }
    }
}

/// Build the [`counter`] view and append it to `container`.
///
/// The product is built in place into leaked storage, so state hooks keep a
/// stable address for the rest of the page, same as with `kobold::start`.
pub fn render_counter(container: Element) -> Result<(), MountError> {
    let slot = Box::leak(Box::new(MaybeUninit::uninit()));
    let product = In::pinned(Pin::static_mut(slot), |p| counter::__render(counter).build(p));

    container
        .append_child(product.js().unchecked_ref::<Node>())
        .map_err(MountError::append)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use log::Level;

    use super::*;
    use crate::capture;

    /// Page with a fixed set of element ids, containers are just the ids.
    struct Page(&'static [&'static str]);

    impl Document for Page {
        type Container = &'static str;

        fn element_by_id(&self, id: &str) -> Option<&'static str> {
            self.0.iter().copied().find(|el| *el == id)
        }
    }

    fn errors(records: &[(Level, String)]) -> Vec<&str> {
        records
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    #[test]
    fn renders_into_root() {
        capture::install();

        let rendered = Cell::new(None);
        let mounted = mount(&Page(&["header", "root"]), &Config::default(), |el| {
            rendered.set(Some(el));
            Ok(())
        });

        assert!(mounted);
        assert_eq!(rendered.get(), Some("root"));
        assert!(errors(&capture::take()).is_empty());
    }

    #[test]
    fn missing_root_logs_once_and_renders_nothing() {
        capture::install();

        let renders = Cell::new(0);
        let mounted = mount(&Page(&["header"]), &Config::default(), |_| {
            renders.set(renders.get() + 1);
            Ok(())
        });

        assert!(!mounted);
        assert_eq!(renders.get(), 0);
        assert_eq!(
            errors(&capture::take()),
            ["root container not found: #root"]
        );
    }

    #[test]
    fn no_fallback_to_other_elements() {
        let config = Config::default().with_root_id("app");
        let res = try_mount(&Page(&["root"]), &config, |_| {
            panic!("must not render without the configured container")
        });

        assert_eq!(res, Err(MountError::RootNotFound { id: "app".into() }));
    }

    #[test]
    fn render_failure_is_logged() {
        capture::install();

        let mounted = mount(&Page(&["root"]), &Config::default(), |_| {
            Err(MountError::Append("HierarchyRequestError".into()))
        });

        assert!(!mounted);
        assert_eq!(
            errors(&capture::take()),
            ["failed to append counter to container: HierarchyRequestError"]
        );
    }
}
