//! # Rendering Module
//!
//! Turns packed grayscale data into a standalone HTML canvas document.
//!
//! ## Modules
//!
//! - [`template`]: The fixed document skeleton and its substitution
//!
//! ## Usage Example
//!
//! ```
//! use image2canvas::{pack, render};
//!
//! let packed = pack::pack(&[10, 20, 30, 40]);
//! let html = render::render(2, 2, &packed);
//! assert!(html.contains("var packedGrayscales = [171585320];"));
//! ```

pub mod template;

pub use template::{TEMPLATE, render, render_to};
