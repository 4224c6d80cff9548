// Host test suites for the spinner crate

#[cfg(test)]
mod animation_tests;
