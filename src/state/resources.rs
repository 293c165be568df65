// Resource list projection for the active tech-stack tab.

use crate::config::{Resource, TechStack};

/// Resources configured for `id`, or an empty slice when there are none.
pub fn resources_for<'a>(stacks: &'a [TechStack], id: &str) -> &'a [Resource] {
    stacks
        .iter()
        .find(|stack| stack.name == id)
        .map(|stack| stack.resources.as_slice())
        .unwrap_or(&[])
}
