//! Interactive terminal quiz client.
//!
//! Walks the embedded question bank one question at a time: prints the question, reads a
//! free-text answer from stdin, grades it through the evaluation job (model-backed with a local
//! overlap fallback), and shows feedback plus the running score. A final report is printed when
//! the last question is answered, after which the quiz offers a restart.

use grader::EvaluationJob;
use grader::question_bank;
use grader::report::QuizReport;
use grader::session::{Advance, QuizSession};
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() {
    common::logger::init_logger(&util::config::log_level(), "logs/quiz.log", false);

    let questions = match question_bank::load_default() {
        Ok(questions) => questions,
        Err(err) => {
            log::error!("could not load the question bank: {err:?}");
            eprintln!("Bank soal tidak dapat dimuat.");
            return;
        }
    };

    let job = EvaluationJob::new();
    let mut session = QuizSession::new(questions);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("=== Kuis AI Interaktif ===");
    println!("Jawab pertanyaan dengan kata-katamu sendiri! AI akan menilai seberapa tepat jawabanmu.");

    loop {
        run_quiz(&job, &mut session, &mut input).await;
        print_report(&session);

        let again = prompt_line(&mut input, "\nMain lagi? (y/n) ");
        if !again.trim().to_lowercase().starts_with('y') {
            break;
        }
        session.reset();
    }
}

/// Runs the per-question loop until the session finishes.
async fn run_quiz(job: &EvaluationJob, session: &mut QuizSession, input: &mut impl BufRead) {
    while let Some(question) = session.current_question().cloned() {
        println!(
            "\nSoal {}/{}: {}",
            session.current_index() + 1,
            session.total_questions(),
            question.question
        );

        let raw = prompt_line(input, "Jawabanmu: ");
        if raw.is_empty() {
            // Input closed; leave the session unfinished.
            log::info!("stdin closed, ending quiz early");
            return;
        }
        let answer = raw.trim();
        if answer.is_empty() {
            println!("Jawaban tidak boleh kosong.");
            continue;
        }

        println!("AI sedang menilai...");
        let evaluation = job.evaluate(answer, &question).await;

        match session.record_evaluation(evaluation) {
            Ok(evaluation) => {
                println!(
                    "[{}] {} poin: {}",
                    evaluation.accuracy.label(),
                    evaluation.points,
                    evaluation.feedback
                );
            }
            Err(err) => {
                log::error!("failed to record evaluation: {err:?}");
                break;
            }
        }
        println!("Skor sementara: {} poin", session.score());

        match session.advance() {
            Ok(Advance::NextQuestion(_)) => {}
            Ok(Advance::Finished) => break,
            Err(err) => {
                log::error!("failed to advance the quiz: {err:?}");
                break;
            }
        }
    }
}

/// Prints the final report for a finished session.
fn print_report(session: &QuizSession) {
    let report = match QuizReport::from_session(session) {
        Ok(report) => report,
        Err(err) => {
            log::warn!("no report for an unfinished session: {err:?}");
            return;
        }
    };

    println!("\n=== Kuis Selesai! ===");
    println!(
        "Skor akhir: {} dari {} poin ({:.0}%)",
        report.total_score, report.max_score, report.percentage
    );
    println!("\nHasil Evaluasi:");
    for (index, result) in report.results.iter().enumerate() {
        println!(
            "Soal {}: [{}] {} poin",
            index + 1,
            result.accuracy.label(),
            result.points
        );
        println!("  {}", result.feedback);
    }

    let average = if report.results.is_empty() {
        0.0
    } else {
        report.total_score as f64 / report.results.len() as f64
    };
    println!("\n{}", closing_message(average));
}

/// Closing line keyed to the average points per question.
fn closing_message(average: f64) -> &'static str {
    if average >= 18.0 {
        "Luar biasa! Kamu sangat pintar!"
    } else if average >= 12.0 {
        "Bagus! Terus tingkatkan lagi ya!"
    } else {
        "Jangan menyerah, terus belajar!"
    }
}

/// Prints `prompt` and reads one line from `input`.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut line = String::new();
    match input.read_line(&mut line) {
        // EOF: treat as an empty answer so the caller can decide what to do.
        Ok(0) | Err(_) => String::new(),
        Ok(_) => line,
    }
}

#[cfg(test)]
mod tests {
    use super::closing_message;

    #[test]
    fn closing_message_thresholds() {
        assert_eq!(closing_message(23.0), "Luar biasa! Kamu sangat pintar!");
        assert_eq!(closing_message(18.0), "Luar biasa! Kamu sangat pintar!");
        assert_eq!(closing_message(12.0), "Bagus! Terus tingkatkan lagi ya!");
        assert_eq!(closing_message(5.0), "Jangan menyerah, terus belajar!");
    }
}
