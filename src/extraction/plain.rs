/// Decodes UTF-8, dropping byte sequences that are not valid UTF-8.
pub fn extract_plain_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            tracing::debug!("Dropped {} undecodable bytes", chunk.invalid().len());
        }
    }

    text
}
