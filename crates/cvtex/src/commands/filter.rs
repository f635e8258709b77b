//! Filter command - apply one filter from the command line

use anyhow::{Result, bail};
use cvtex_core::format::FilterValue;
use cvtex_core::template::FilterRegistry;

/// Apply filter `name` and print the result
///
/// No value is absent input, one value a string, several a list.
pub fn run(name: &str, values: Vec<String>) -> Result<()> {
    let registry = FilterRegistry::latex();
    if !registry.contains(name) {
        bail!(
            "Unknown filter '{}' (available: {})",
            name,
            registry.names().join(", ")
        );
    }

    let input = match values.len() {
        0 => None,
        1 => values.into_iter().next().map(FilterValue::Scalar),
        _ => Some(FilterValue::List(values)),
    };

    let output = registry.apply(name, input.as_ref(), 1)?;
    println!("{}", output);
    Ok(())
}
