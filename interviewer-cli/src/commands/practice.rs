//! Practice command: a full interview in the terminal, no server needed

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use interviewer_core::{
    AnswerOutcome, Domain, FinalSummary, InterviewController, MemorySessionStore, Verdict,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::warn;

use super::{build_collaborators, controller_config};
use crate::config::{Backend, ConfigLoader};

/// Typed instead of an answer to end the interview early
pub const EXIT_COMMAND: &str = "/exit";

/// Arguments for the practice command
#[derive(Debug, Args)]
pub struct PracticeArgs {
    /// Interview domain (data-analysis, finance, operations)
    #[arg(short, long)]
    pub domain: String,

    /// Candidate name
    #[arg(long, default_value = "candidate")]
    pub name: String,

    /// Candidate email, used to name the transcript file
    #[arg(long, default_value = "candidate@localhost")]
    pub email: String,

    /// Question and grading backend (overrides config)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,
}

/// Run the practice command
pub async fn run(args: PracticeArgs) -> Result<()> {
    let mut config = ConfigLoader::load()?;
    if let Some(backend) = args.backend {
        config.collaborators.backend = backend;
    }

    let controller = Arc::new(InterviewController::new(
        Arc::new(MemorySessionStore::new()),
        build_collaborators(&config),
        controller_config(&config),
    ));

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    run_interview(&controller, &args, input, &mut output).await?;

    println!("Transcript saved under {}", config.transcripts.dir.display());
    Ok(())
}

/// Drive one interview, reading answers line by line from `input`
///
/// End of input behaves like [`EXIT_COMMAND`].
pub async fn run_interview<R, W>(
    controller: &InterviewController,
    args: &PracticeArgs,
    input: R,
    output: &mut W,
) -> Result<FinalSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let started = controller
        .start_session(&args.name, &args.email, &args.domain)
        .await?;
    let domain = Domain::parse(&args.domain)?;

    writeln!(
        output,
        "Practice interview: {} (type {} to stop)\n",
        domain.label(),
        EXIT_COMMAND
    )?;
    writeln!(
        output,
        "Question {}: {}",
        started.question_number, started.question
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let answer = match lines.next_line().await? {
            Some(line) if line.trim() != EXIT_COMMAND => line,
            _ => {
                let summary = controller.exit_session(&started.session_id).await?;
                print_summary(output, &summary)?;
                return Ok(summary);
            }
        };

        match controller.submit_answer(&started.session_id, &answer).await {
            Ok(AnswerOutcome::Continue(next)) => {
                writeln!(
                    output,
                    "Score {:.2} ({}): {}\n",
                    next.score,
                    verdict_label(next.verdict),
                    next.explanation
                )?;
                writeln!(
                    output,
                    "Question {}: {}",
                    next.question_number, next.next_question
                )?;
            }
            Ok(AnswerOutcome::Finished(summary)) => {
                print_summary(output, &summary)?;
                return Ok(summary);
            }
            Err(e) if e.is_retryable() => {
                warn!(error = %e, "Answer not processed");
                writeln!(output, "Could not process that answer ({}), please try again.", e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "correct",
        Verdict::Wrong => "wrong",
        Verdict::Neutral => "partial",
    }
}

fn print_summary<W: Write>(output: &mut W, summary: &FinalSummary) -> Result<()> {
    let score = &summary.score_summary;
    writeln!(output, "\nInterview finished")?;
    writeln!(
        output,
        "Asked {}, correct {}, wrong {}: {}%",
        score.asked, score.correct, score.wrong, score.final_score_percent
    )?;
    for (i, round) in summary.history.iter().enumerate() {
        writeln!(output, "{:>2}. [{:.2}] {}", i + 1, round.score, round.question)?;
    }
    Ok(())
}
