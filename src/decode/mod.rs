pub mod decoder;
pub mod extractor;
pub mod renderer;
pub mod splitter;

pub use decoder::{decode_report, decode_section, ReportDecoder};
pub use extractor::{extract_payloads, extract_tags, Extraction};
pub use renderer::render_blocks;
pub use splitter::{split_sections, SECTION_BREAK};
