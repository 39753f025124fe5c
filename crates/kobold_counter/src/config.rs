// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use log::LevelFilter;

/// Settings for [`start`](crate::start) and [`mount`](crate::mount::mount).
///
/// ```
/// use kobold_counter::Config;
/// use log::LevelFilter;
///
/// let config = Config::default()
///     .with_root_id("app")
///     .with_log_level(LevelFilter::Warn);
///
/// assert_eq!(config.root_id(), "app");
/// assert_eq!(config.log_level(), LevelFilter::Warn);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    root_id: Cow<'static, str>,
    log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_id: Cow::Borrowed("root"),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl Config {
    /// Id of the element the counter is mounted into.
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Most verbose level written to the browser console.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Mount into the element with this id instead of `root`.
    pub fn with_root_id<I>(mut self, id: I) -> Self
    where
        I: Into<Cow<'static, str>>,
    {
        self.root_id = id.into();
        self
    }

    /// Set the most verbose level written to the browser console.
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}
