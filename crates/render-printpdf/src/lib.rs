//! PDF rendering backend built on `printpdf`.
//!
//! Re-flows text units within the page frame, honors forced page breaks,
//! and places pre-scaled images centered in the frame. Overflowing
//! content advances pages implicitly; the layout engine never sees those
//! advances.

mod renderer;
mod text;

pub use renderer::PdfBackend;
