// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Reasons the counter could not be mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No element with the configured id exists in the document.
    RootNotFound { id: String },
    /// Not running in a page with a `window.document`.
    NoDocument,
    /// The browser threw while appending the rendered view to the container.
    Append(String),
}

impl MountError {
    pub(crate) fn append(err: JsValue) -> Self {
        MountError::Append(format!("{err:?}"))
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::RootNotFound { id } => write!(f, "root container not found: #{id}"),
            MountError::NoDocument => f.write_str("no browser document available"),
            MountError::Append(err) => write!(f, "failed to append counter to container: {err}"),
        }
    }
}

impl error::Error for MountError {}
