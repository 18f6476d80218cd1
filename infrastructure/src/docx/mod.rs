//! `.docx` container adapter

mod writer;

pub use writer::DocxPackageWriter;
