//! Grading prompt construction.
//!
//! Builds the natural-language instruction sent to the external model. The format section is
//! load-bearing: the reply parser matches the `AKURASI` / `POIN` / `FEEDBACK` labels this prompt
//! asks for, and the rubric pins the band-to-points mapping.

use crate::types::Question;

/// Builds the grading prompt for one question/answer pair.
///
/// Embeds the question text, the reference context, the user's answer, the required
/// three-line reply format, and the scoring rubric.
pub fn build_grading_prompt(question: &Question, user_answer: &str) -> String {
    format!(
        r#"Kamu adalah penilai jawaban kuis yang adil dan objektif. Evaluasi jawaban siswa berikut:

Pertanyaan: {}

Konteks/Jawaban Ideal: {}

Jawaban Siswa: {}

Berikan evaluasi dalam format berikut:
AKURASI: [excellent/good/fair/poor]
POIN: [0-25]
FEEDBACK: [Penjelasan singkat 1-2 kalimat dalam bahasa Indonesia yang ramah dan konstruktif]

Kriteria penilaan:
- excellent (20-25 poin): Jawaban sangat tepat, lengkap, dan akurat
- good (15-19 poin): Jawaban cukup tepat dengan sebagian besar konsep benar
- fair (8-14 poin): Jawaban kurang tepat, hanya sebagian kecil yang benar
- poor (0-7 poin): Jawaban sangat kurang tepat atau tidak relevan

Berikan penilaian yang objektif dan adil."#,
        question.question, question.context, user_answer
    )
}
