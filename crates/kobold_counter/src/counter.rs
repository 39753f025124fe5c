// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The counter component.
//!
//! State lives in a Kobold [`Hook`], everything else in this module is plain
//! data so the behavior of the buttons can be checked without a browser.

use std::fmt;

use kobold::prelude::*;
use log::debug;

/// Inline style of the decrement button, spacing it from the increment button.
pub const DECREMENT_STYLE: &str = "margin-left: 5px";

/// Static part of the heading, the count is rendered right after it.
pub const HEADING_PREFIX: &str = "Count: ";

/// A single click on one of the counter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

impl Step {
    /// Count after this step is applied to `count`.
    ///
    /// There is no lower or upper bound other than the range of `i64`, at
    /// which the count saturates.
    pub const fn apply(self, count: i64) -> i64 {
        match self {
            Step::Increment => count.saturating_add(1),
            Step::Decrement => count.saturating_sub(1),
        }
    }

    /// Text of the button that issues this step.
    pub const fn label(self) -> &'static str {
        match self {
            Step::Increment => "Increment",
            Step::Decrement => "Decrement",
        }
    }
}

/// Heading text for a given count, displays as `Count: <count>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading(pub i64);

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HEADING_PREFIX}{}", self.0)
    }
}

/// Text the `<h1>` shows while the state holds `count`.
pub const fn heading(count: i64) -> Heading {
    Heading(count)
}

/// Count after a sequence of clicks on a freshly mounted counter.
pub fn replay<I>(steps: I) -> i64
where
    I: IntoIterator<Item = Step>,
{
    steps.into_iter().fold(0, |count, step| step.apply(count))
}

/// Click handler body. `rendered` is the count captured by the render that
/// created the handler, the new state is computed from it rather than from
/// whatever `count` currently holds.
fn click(step: Step, rendered: i64, count: &mut i64) {
    debug!("{} button clicked", step.label());

    *count = step.apply(rendered);
}

#[component]
pub fn counter() -> impl View {
    stateful(0_i64, |count| {
        let rendered = count.get();

        debug!("rendering counter, count: {rendered}");

        view! {
            <div>
                <h1>{ HEADING_PREFIX }{ rendered }</h1>
                <button onclick={count.bind(move |count, _| click(Step::Increment, rendered, count))}>
                    { Step::Increment.label() }
                </button>
                <button style={DECREMENT_STYLE} onclick={count.bind(move |count, _| click(Step::Decrement, rendered, count))}>
                    { Step::Decrement.label() }
                </button>
            </div>
        }
    })
}
