use std::io::{BufRead, Write};

use crate::error::{MatchmakerError, Result};
use crate::models::{DiscreteInput, Profile, ScoringModel, WeightedInput};

/// Interactive questionnaire that builds the querying user's profile
///
/// Generic over its input and output so it can be driven from stdin in
/// the binary and from in-memory buffers in tests.
pub struct Questionnaire<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Questionnaire<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask the questions for `model` and build a validated profile with id 0
    pub fn ask_profile(&mut self, model: ScoringModel) -> Result<Profile> {
        match model {
            ScoringModel::Discrete => Profile::from_discrete(0, self.ask_discrete()?),
            ScoringModel::Weighted => Profile::from_weighted(0, self.ask_weighted()?),
        }
    }

    pub fn ask_discrete(&mut self) -> Result<DiscreteInput> {
        Ok(DiscreteInput {
            name: self.ask("Enter your name: ")?,
            political_view: self.ask_code(
                "political_view",
                "Enter your political view (1 for liberal, 2 for moderate, 3 for conservative): ",
            )?,
            children_preference: self.ask_code(
                "children_preference",
                "Enter your preference regarding children (1 for yes, 2 for no, 3 for undecided): ",
            )?,
            monogamy: self.ask_code(
                "monogamy",
                "Enter your view on monogamy (1 for monogamous, 2 for polyamorous): ",
            )?,
            serious_dating: self.ask_code(
                "serious_dating",
                "Enter your preference for serious dating (1 for yes, 2 for no): ",
            )?,
        })
    }

    pub fn ask_weighted(&mut self) -> Result<WeightedInput> {
        let name = self.ask("Enter your name: ")?;
        let political_view = self.ask_code(
            "political_view",
            "Enter your political view (1 very liberal to 5 very conservative): ",
        )?;
        let political_importance = self.ask_importance("political_importance")?;
        let children_preference = self.ask_code(
            "children_preference",
            "Enter your preference regarding children (1 definitely yes to 5 definitely no): ",
        )?;
        let children_importance = self.ask_importance("children_importance")?;
        let monogamy = self.ask_code(
            "monogamy",
            "Enter your view on monogamy (1 monogamous, 2 open, 3 polyamorous): ",
        )?;
        let monogamy_importance = self.ask_importance("monogamy_importance")?;
        let serious_dating = self.ask_code(
            "serious_dating",
            "Enter your preference for serious dating (1 serious, 2 either, 3 casual): ",
        )?;
        let serious_importance = self.ask_importance("serious_importance")?;

        Ok(WeightedInput {
            name,
            political_view,
            political_importance,
            children_preference,
            children_importance,
            monogamy,
            monogamy_importance,
            serious_dating,
            serious_importance,
        })
    }

    fn ask_importance(&mut self, field: &'static str) -> Result<u8> {
        self.ask_code(field, "How important is this to you (0-10)? ")
    }

    fn ask_code(&mut self, field: &'static str, question: &str) -> Result<u8> {
        let answer = self.ask(question)?;
        answer
            .parse()
            .map_err(|_| MatchmakerError::InvalidAnswer { field, value: answer })
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before the questionnaire was complete",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }
}
