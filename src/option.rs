use std::fmt::Debug;

pub mod yes_no_option;
pub mod multi_option;

/*
    A closed set of choices that a checkbox list can be built for.
    Variants are their own identity, so they compare by value.
 */
pub trait SelectableOption: Copy + Eq + Debug + 'static {
    /// Every variant, in the order they should be listed.
    fn all() -> Vec<Self>;

    fn display_name(&self) -> String;

    /// The selection a fresh list starts with.
    fn default_selection() -> Option<Self> {
        None
    }
}
