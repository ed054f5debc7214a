//! Fixed prompt template for instruction-tuning record generation.
//!
//! Every request carries the same two-message prompt: a system message
//! embedding a worked example of the target JSONL record format plus the
//! rules block, and a user message wrapping one chunk's text.

use super::client::Message;

/// Worked example of the target record format, embedded in the system prompt.
pub const JSONL_FORMAT_EXAMPLE: &str = r#"JSONL EXAMPLE:
{"instruction": "Jelaskan kegunaan helm pengaman di tempat kerja!", "context": "Helm pengaman wajib dipakai pada pekerjaan konstruksi dan area dengan risiko benda jatuh.", "response": "Helm pengaman melindungi kepala dari benturan benda jatuh, mencegah cedera fatal saat bekerja di area konstruksi, dan menjadi syarat wajib keselamatan kerja di lokasi berisiko tinggi.", "category": "closed_qa"}
{"instruction": "Apa yang dimaksud dengan alat pelindung diri?", "context": "Alat pelindung diri digunakan pekerja untuk mengurangi risiko kecelakaan kerja.", "response": "Alat pelindung diri adalah perlengkapan yang wajib digunakan pekerja untuk melindungi tubuh dari potensi bahaya di tempat kerja, seperti helm, sarung tangan, masker, dan sepatu pengaman.", "category": "closed_qa"}
{"instruction": "Buat pertanyaan untuk menguji pemahaman tentang rambu keselamatan!", "context": "Sistem atau soal dalam format soal formatif sederhana.", "response": "1. Apa arti warna kuning pada rambu peringatan? 2. Apa yang harus dilakukan saat melihat rambu larangan? 3. Mengapa rambu keselamatan harus dipasang di tempat yang mudah terlihat?", "category": "open_qa"}"#;

/// Rules block appended to the system prompt.
pub const RULES: &str = r#"RULES TO FOLLOW:
- Respond in pure JSONL with no text outside the JSONL!
- Ensure high quality data!
- Remove unnecessary information and invalid characters!
- Respond as long and as detailed as possible!"#;

/// Builds the fixed two-message prompt for one chunk.
pub fn build_messages(chunk_text: &str) -> Vec<Message> {
    vec![
        Message::system(format!(
            "You are assisting a fine-tuning run by generating JSONL records like this \
             {JSONL_FORMAT_EXAMPLE} and {RULES}!"
        )),
        Message::user(format!(
            "Generate JSONL records with instruction, context, response and category fields \
             about a complex topic in Indonesian: {chunk_text}!"
        )),
    ]
}
