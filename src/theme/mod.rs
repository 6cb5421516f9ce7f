//! Visual theme: global stylesheet and fixed colors.
//!
//! Theme- and accent-dependent colors come from
//! `Preferences::css_variables()` and are injected next to these styles.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
