// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Kobold Counter
//!
//! _A single counter component, mounted into an existing page element._
//!
//! The component keeps one integer of state, starting at `0`, and renders it as
//! a heading with two buttons that step it up or down:
//!
//! ```text
//! <div>
//!     <h1>Count: 0</h1>
//!     <button>Increment</button>
//!     <button style="margin-left: 5px">Decrement</button>
//! </div>
//! ```
//!
//! ### Starting the app
//!
//! The page needs a container element, `<div id="root"></div>` by default:
//!
//! ```no_run
//! use kobold_counter::Config;
//!
//! fn main() {
//!     kobold_counter::start(Config::default());
//! }
//! ```
//!
//! If the container can't be found a single error is written to the browser
//! console and nothing is rendered.
//!
//! ### Mounting into a different element
//!
//! ```no_run
//! use kobold_counter::Config;
//!
//! kobold_counter::start(Config::default().with_root_id("app"));
//! ```
//!
//! To run the demo with [`trunk`](https://trunkrs.dev/):
//! ```sh
//! cd demos/counter
//! trunk serve
//! ```

use std::cell::Cell;

pub mod console;
pub mod counter;
pub mod mount;

mod config;
mod error;

pub use config::Config;
pub use counter::Step;
pub use error::MountError;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Start the counter app in the current browser page.
///
/// Installs the console logger, looks up [`Config::root_id`] in the document
/// and renders the [`counter`](counter::counter) component into it. Only the
/// first call does anything.
pub fn start(config: Config) {
    if STARTED.get() {
        return;
    }
    STARTED.set(true);

    init_panic_hook();
    console::init(config.log_level());

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("{}", MountError::NoDocument);
        return;
    };

    mount::mount(&document, &config, mount::render_counter);
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
