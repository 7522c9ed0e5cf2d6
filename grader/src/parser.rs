//! # Model Reply Parser
//!
//! Turns the raw, semi-structured text the model returns into a typed [`Evaluation`].
//!
//! The model is instructed to emit three labeled lines (`AKURASI`, `POIN`, `FEEDBACK`), but the
//! reply is untrusted free text, so extraction is best-effort: each field is matched by its own
//! case-insensitive pattern and falls back to a documented default on its own. A missing or
//! malformed field never invalidates the other two.
//!
//! Defaults:
//! - accuracy → `fair`
//! - points → `10`
//! - feedback → a generic encouragement line

use crate::types::{AccuracyBand, Evaluation, MAX_POINTS_PER_QUESTION};
use regex::Regex;

/// Points awarded when the reply carries no parseable `POIN` value.
const DEFAULT_POINTS: u32 = 10;

/// Feedback used when the reply carries no `FEEDBACK` section.
const DEFAULT_FEEDBACK: &str = "Jawaban sudah cukup baik, terus belajar ya!";

lazy_static::lazy_static! {
    static ref ACCURACY_RE: Regex =
        Regex::new(r"(?i)AKURASI:\s*(excellent|good|fair|poor)").unwrap();
    static ref POINTS_RE: Regex = Regex::new(r"(?i)POIN:\s*(\d+)").unwrap();
    // Feedback runs to a blank line, the next labeled line, or the end of the reply.
    static ref FEEDBACK_RE: Regex =
        Regex::new(r"(?is)FEEDBACK:\s*(.+?)(?:\n\n|\n[A-Z]+:|$)").unwrap();
}

/// Parses a raw model reply into an [`Evaluation`].
///
/// Never fails: each field falls back to its default independently, so even an
/// empty reply produces a usable evaluation.
pub fn parse_model_reply(reply: &str) -> Evaluation {
    let accuracy = match ACCURACY_RE
        .captures(reply)
        .and_then(|caps| AccuracyBand::parse(&caps[1]))
    {
        Some(band) => band,
        None => {
            tracing::debug!("model reply carried no accuracy label, defaulting to fair");
            AccuracyBand::Fair
        }
    };

    let points = POINTS_RE
        .captures(reply)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .unwrap_or(DEFAULT_POINTS)
        .min(MAX_POINTS_PER_QUESTION);

    let feedback = FEEDBACK_RE
        .captures(reply)
        .map(|caps| caps[1].trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| DEFAULT_FEEDBACK.to_string());

    Evaluation {
        accuracy,
        points,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_reply() {
        let evaluation = parse_model_reply("AKURASI: good\nPOIN: 17\nFEEDBACK: Cukup baik.");
        assert_eq!(
            evaluation,
            Evaluation {
                accuracy: AccuracyBand::Good,
                points: 17,
                feedback: "Cukup baik.".to_string(),
            }
        );
    }

    #[test]
    fn labels_match_case_insensitively() {
        let evaluation =
            parse_model_reply("akurasi: EXCELLENT\npoin: 24\nfeedback: Luar biasa lengkap.");
        assert_eq!(evaluation.accuracy, AccuracyBand::Excellent);
        assert_eq!(evaluation.points, 24);
        assert_eq!(evaluation.feedback, "Luar biasa lengkap.");
    }

    #[test]
    fn missing_accuracy_defaults_without_touching_other_fields() {
        let evaluation = parse_model_reply("POIN: 21\nFEEDBACK: Hampir sempurna.");
        assert_eq!(evaluation.accuracy, AccuracyBand::Fair);
        assert_eq!(evaluation.points, 21);
        assert_eq!(evaluation.feedback, "Hampir sempurna.");
    }

    #[test]
    fn missing_points_defaults_without_touching_other_fields() {
        let evaluation = parse_model_reply("AKURASI: poor\nFEEDBACK: Pelajari lagi materinya.");
        assert_eq!(evaluation.accuracy, AccuracyBand::Poor);
        assert_eq!(evaluation.points, 10);
        assert_eq!(evaluation.feedback, "Pelajari lagi materinya.");
    }

    #[test]
    fn missing_feedback_defaults_without_touching_other_fields() {
        let evaluation = parse_model_reply("AKURASI: good\nPOIN: 16");
        assert_eq!(evaluation.accuracy, AccuracyBand::Good);
        assert_eq!(evaluation.points, 16);
        assert_eq!(evaluation.feedback, DEFAULT_FEEDBACK);
    }

    #[test]
    fn unrecognized_accuracy_token_defaults_to_fair() {
        let evaluation = parse_model_reply("AKURASI: superb\nPOIN: 12\nFEEDBACK: Oke.");
        assert_eq!(evaluation.accuracy, AccuracyBand::Fair);
        assert_eq!(evaluation.points, 12);
    }

    #[test]
    fn feedback_stops_at_blank_line() {
        let evaluation = parse_model_reply(
            "AKURASI: good\nPOIN: 15\nFEEDBACK: Konsep utama sudah benar.\n\nCatatan internal.",
        );
        assert_eq!(evaluation.feedback, "Konsep utama sudah benar.");
    }

    #[test]
    fn feedback_stops_at_next_labeled_line() {
        let evaluation =
            parse_model_reply("FEEDBACK: Penjelasan cukup.\nAKURASI: good\nPOIN: 15");
        assert_eq!(evaluation.feedback, "Penjelasan cukup.");
        assert_eq!(evaluation.accuracy, AccuracyBand::Good);
        assert_eq!(evaluation.points, 15);
    }

    #[test]
    fn feedback_spans_unlabeled_continuation_lines() {
        let evaluation =
            parse_model_reply("AKURASI: fair\nPOIN: 9\nFEEDBACK: Bagian pertama benar,\nnamun definisinya belum lengkap.");
        assert_eq!(
            evaluation.feedback,
            "Bagian pertama benar,\nnamun definisinya belum lengkap."
        );
    }

    #[test]
    fn points_above_the_rubric_ceiling_are_clamped() {
        let evaluation = parse_model_reply("AKURASI: excellent\nPOIN: 99\nFEEDBACK: Mantap.");
        assert_eq!(evaluation.points, MAX_POINTS_PER_QUESTION);
    }

    #[test]
    fn empty_reply_yields_all_defaults() {
        let evaluation = parse_model_reply("");
        assert_eq!(
            evaluation,
            Evaluation {
                accuracy: AccuracyBand::Fair,
                points: 10,
                feedback: DEFAULT_FEEDBACK.to_string(),
            }
        );
    }
}
