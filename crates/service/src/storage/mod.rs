pub mod json_doc_store;
pub mod memory;
