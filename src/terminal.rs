use std::io::{BufRead, Write};
use anyhow::Result;
use log::debug;

use crate::config::QuizConfig;
use crate::prediction::PredictionService;
use crate::quiz::{Advance, AnswerValue, Choice, Question, QuestionKind, QUESTION_COUNT};
use crate::results::{render_results, share_fallback_text};
use crate::session::{QuizSession, SessionError};

enum Input {
    Back,
    Next,
    Value(AnswerValue),
    Quit,
}

/// Stdin/stdout front end for the quiz: welcome, questions, results, restart.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn welcome(&mut self) -> Result<bool> {
        writeln!(self.output, "\n✨ PersonaSense ✨")?;
        writeln!(self.output, "Discover a Little More About Yourself!\n")?;
        writeln!(
            self.output,
            "Answer {} quick questions about your lifestyle and social habits",
            QUESTION_COUNT
        )?;
        writeln!(self.output, "and find out if you're more Introverted 🌙 or Extroverted 🌞.")?;
        writeln!(self.output, "Takes just 2-3 minutes • No email required\n")?;

        let answer = self.prompt("Press Enter to start (q to quit): ")?;
        Ok(!matches!(answer.as_deref(), None | Some("q") | Some("quit")))
    }

    fn show_question(&mut self, session: &QuizSession) -> Result<()> {
        let collector = session.collector();
        let question = collector.current_question();
        writeln!(
            self.output,
            "\nQuestion {} of {} ({}% Complete)",
            collector.current_index() + 1,
            QUESTION_COUNT,
            collector.progress_percent().round()
        )?;
        writeln!(self.output, "{}  {}", question.emoji, question.title)?;

        match question.kind {
            QuestionKind::NumericEntry => {
                if let Some(current) = collector.answers().number(question.id) {
                    writeln!(self.output, "   current answer: {}", current)?;
                }
                writeln!(self.output, "   enter a whole number")?;
            }
            QuestionKind::BinaryChoice => {
                let options: Vec<&str> = Choice::ALL.iter().map(|c| c.as_str()).collect();
                if let Some(current) = collector.answers().choice(question.id) {
                    writeln!(self.output, "   current answer: {}", current.as_str())?;
                }
                writeln!(self.output, "   {}", options.join(" / "))?;
            }
            QuestionKind::ScaledSlider { min, max, labels } => {
                writeln!(
                    self.output,
                    "   {} = {}  ...  {} = {}",
                    min, labels.low, max, labels.high
                )?;
                if let Some(value) = collector.current_slider_value() {
                    writeln!(self.output, "   current value: {} (Enter keeps it)", value)?;
                }
            }
        }
        Ok(())
    }

    fn parse_input(&mut self, question: &Question, raw: &str) -> Result<Option<Input>> {
        let input = match raw.to_lowercase().as_str() {
            "" => Some(Input::Next),
            "b" | "back" => Some(Input::Back),
            "q" | "quit" => Some(Input::Quit),
            _ => match question.kind {
                QuestionKind::BinaryChoice => Choice::from_str(raw).map(|c| Input::Value(c.into())),
                QuestionKind::NumericEntry => raw.parse::<i32>().ok().map(|n| Input::Value(n.into())),
                QuestionKind::ScaledSlider { min, max, .. } => raw
                    .parse::<i32>()
                    .ok()
                    .filter(|n| (min..=max).contains(n))
                    .map(|n| Input::Value(n.into())),
            },
        };

        if input.is_none() {
            let hint = match question.kind {
                QuestionKind::BinaryChoice => "Please answer Yes or No".to_string(),
                QuestionKind::NumericEntry => "Please enter a whole number".to_string(),
                QuestionKind::ScaledSlider { min, max, .. } => {
                    format!("Please pick a value from {} to {}", min, max)
                }
            };
            writeln!(self.output, "   {}", hint)?;
        }
        Ok(input)
    }

    /// Walks the questions. Returns `false` if the user quit or input ended.
    fn ask_questions(&mut self, session: &mut QuizSession) -> Result<bool> {
        loop {
            self.show_question(session)?;
            let question = session.collector().current_question();
            let next_label = if session.collector().is_last() { "Get Results" } else { "Next" };
            let prompt = format!("> answer, Enter for {}, b for Previous: ", next_label);

            let raw = match self.prompt(&prompt)? {
                Some(raw) => raw,
                None => return Ok(false),
            };

            let input = match self.parse_input(question, &raw)? {
                Some(input) => input,
                None => continue,
            };

            let step = match input {
                Input::Quit => return Ok(false),
                Input::Back => {
                    session.previous()?;
                    continue;
                }
                Input::Value(value) => {
                    session.answer(value)?;
                    session.next()
                }
                Input::Next => session.next(),
            };

            match step {
                Ok(Advance::Submit) => return Ok(true),
                Ok(Advance::Moved(index)) => debug!("Moved to question {}", index),
                Err(SessionError::Unanswered(_)) => {
                    writeln!(self.output, "   Please answer this question first")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Runs welcome → quiz → results until the user quits or input ends.
    pub async fn run(&mut self, service: &dyn PredictionService, config: &QuizConfig) -> Result<()> {
        let mut session = QuizSession::new();

        loop {
            if !self.welcome()? {
                break;
            }
            session.start()?;

            if !self.ask_questions(&mut session)? {
                break;
            }

            writeln!(self.output, "\n⏳ Analyzing your answers...")?;
            let outcome = session.submit(service).await?;
            let label = outcome.result.label;
            write!(self.output, "{}", render_results(outcome))?;

            let mut restart = false;
            loop {
                match self.prompt("\n[s] Share Results  [r] Take Quiz Again  [q] Quit: ")?.as_deref() {
                    Some("s") | Some("share") => {
                        writeln!(self.output, "{}", share_fallback_text(label, config.share_url()))?;
                    }
                    Some("r") | Some("restart") => {
                        restart = true;
                        break;
                    }
                    None | Some("q") | Some("quit") => break,
                    Some(_) => continue,
                }
            }

            if !restart {
                break;
            }
            session.restart();
        }

        writeln!(self.output, "Goodbye! 👋")?;
        Ok(())
    }
}
