pub mod pdf;

pub use pdf::generate_pdf;
