#[cfg(test)]
pub(crate) mod testing;

use crate::bson::{Bson, Document};

pub(crate) const READ_TRACING_EVENT_TARGET: &str = "mongo_read::read";

/// Documents longer than this are truncated when included in tracing events.
pub(crate) const DEFAULT_MAX_DOCUMENT_LENGTH_BYTES: usize = 1000;

pub(crate) trait TracingRepresentation {
    type Representation;

    fn tracing_representation(&self) -> Self::Representation;
}

impl TracingRepresentation for Document {
    type Representation = String;

    fn tracing_representation(&self) -> String {
        let mut ext_json = Bson::Document(self.clone())
            .into_relaxed_extjson()
            .to_string();
        truncate_on_char_boundary(&mut ext_json, DEFAULT_MAX_DOCUMENT_LENGTH_BYTES);
        ext_json
    }
}

impl TracingRepresentation for Option<&Document> {
    type Representation = Option<String>;

    fn tracing_representation(&self) -> Option<String> {
        self.map(|doc| doc.tracing_representation())
    }
}

impl TracingRepresentation for crate::error::Error {
    type Representation = String;

    fn tracing_representation(&self) -> String {
        self.to_string()
    }
}

/// Truncates `s` to at most `max_length` bytes plus a trailing ellipsis, backing up to the
/// nearest char boundary.
pub(crate) fn truncate_on_char_boundary(s: &mut String, max_length: usize) {
    if s.len() <= max_length {
        return;
    }
    let mut end = max_length;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
    s.push_str("...");
}
