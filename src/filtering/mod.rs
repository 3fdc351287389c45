/*! Filtering utilities

Filtering operates on whole sequences: a [FrequencyFilter] is built from
the filters sequence, then consulted once per subject element.

Filters implement [filter::Filter], the seam for pure detection (2
successive equal inputs -> 2 equal outputs). [filter_elements] wires the
two together for the one-shot case.
! */
mod filter;
mod frequency;

pub use filter::Filter;
pub use frequency::filter_elements;
pub use frequency::FrequencyFilter;
