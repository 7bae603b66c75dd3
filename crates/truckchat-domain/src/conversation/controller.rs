//! Question sequence for one truck conversation
//!
//! Start -> [consent] -> name -> occupation -> identity -> specs -> finalize.
//! "other" occupation ends the session early with a record that only
//! carries the occupation. Refusing consent ends it with no record at all.

use tracing::{debug, info, warn};
use truckchat_types::{
    ConversationRecord, IdentityMode, Occupation, Result, SpecValues, VehicleIdentity,
};

use crate::conversation::prompter::{MenuOption, Prompter, Tone};
use crate::conversation::session::SessionContext;
use crate::model::{ReferenceEntry, ReferenceTable};
use crate::repository::ReferenceRepository;
use crate::service::{find_model, parse_numeric_answer, resolve, MatchResult};

pub const CONSENT_QUESTION: &str =
    "Before we start, do you agree to us storing your answers and a transcript of this chat?";
pub const NAME_QUESTION: &str = "Let's start.. What is your name?";
pub const OCCUPATION_QUESTION: &str = "What is your occupation?";
pub const TRUCK_NAME_QUESTION: &str = "What is the name of your truck?";
pub const MANUFACTURER_QUESTION: &str = "Who is the manufacturer of your truck?";
pub const MODEL_QUESTION: &str = "What is the model of your truck?";
pub const FLEET_NUMBER_QUESTION: &str = "What is your fleet number?";
pub const YEAR_QUESTION: &str = "What year was your truck made?";
pub const CYLINDERS_QUESTION: &str = "How many cylinders does your truck have?";
pub const HORSEPOWER_QUESTION: &str = "What is the horsepower of the truck?";
pub const WEIGHT_QUESTION: &str = "How much does the truck weigh?";

pub const NOT_A_NUMBER_MESSAGE: &str = "That wasn't a number, please answer the question again";
pub const EARLY_EXIT_MESSAGE: &str = "This is for owners and managers only. Farewell!";
pub const NO_CONSENT_MESSAGE: &str = "No problem, I won't store anything. Goodbye!";
pub const CLOSING_MESSAGE: &str = "Thanks for talking about trucks with me today! Bye for now :)";

const OTHER_MODEL_VALUE: &str = "other";

/// Session shape: consent gate, identity mode and whether the year is asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    pub bot_name: String,
    pub with_consent_gate: bool,
    pub identity_mode: IdentityMode,
    pub collect_year: bool,
}

impl ControllerOptions {
    /// Defaults for a mode. The year question belongs to the single-name flow.
    pub fn new(identity_mode: IdentityMode) -> Self {
        Self {
            bot_name: "Sarah".to_string(),
            with_consent_gate: false,
            identity_mode,
            collect_year: identity_mode == IdentityMode::Single,
        }
    }

    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }

    pub fn with_consent_gate(mut self, enabled: bool) -> Self {
        self.with_consent_gate = enabled;
        self
    }

    pub fn with_collect_year(mut self, enabled: bool) -> Self {
        self.collect_year = enabled;
        self
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::new(IdentityMode::Single)
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Consent refused; nothing stored
    Aborted,
    /// Occupation "other"; record carries the occupation only
    EarlyExit(ConversationRecord),
    Completed(ConversationRecord),
}

impl SessionOutcome {
    pub fn record(&self) -> Option<&ConversationRecord> {
        match self {
            SessionOutcome::Aborted => None,
            SessionOutcome::EarlyExit(record) | SessionOutcome::Completed(record) => Some(record),
        }
    }
}

pub struct ConversationController<P, R> {
    prompter: P,
    references: R,
    options: ControllerOptions,
}

impl<P: Prompter, R: ReferenceRepository> ConversationController<P, R> {
    pub fn new(prompter: P, references: R, options: ControllerOptions) -> Self {
        Self {
            prompter,
            references,
            options,
        }
    }

    /// Run the full question sequence and store the outcome
    pub fn run(&mut self, session: &mut SessionContext<'_>) -> Result<SessionOutcome> {
        let greeting = format!("Hey! I'm {} :) Let's talk trucks.", self.options.bot_name);
        self.prompter.say(&greeting, Tone::Greeting)?;

        if self.options.with_consent_gate {
            let consent = self.ask_multiple(session, CONSENT_QUESTION, &MenuOption::yes_no())?;
            if consent != "yes" {
                self.prompter.say(NO_CONSENT_MESSAGE, Tone::Warning)?;
                info!("consent refused, session aborted");
                return Ok(SessionOutcome::Aborted);
            }
        }

        let username = self.ask(session, NAME_QUESTION)?;
        self.answer(&format!("Hi {}", username))?;

        let choice = self.ask_multiple(session, OCCUPATION_QUESTION, &occupation_options())?;
        let occupation = Occupation::parse(&choice).unwrap_or(Occupation::Other);

        if occupation == Occupation::Other {
            self.prompter.say(EARLY_EXIT_MESSAGE, Tone::Warning)?;
            let record = ConversationRecord::early_exit(session.started(), occupation);
            session.store(&record)?;
            info!(id = %record.id, "session ended at occupation gate");
            return Ok(SessionOutcome::EarlyExit(record));
        }

        let identity = match self.options.identity_mode {
            IdentityMode::Single => self.collect_truck(session)?,
            IdentityMode::ManufacturerModel => self.collect_manufacturer_model(session)?,
        };

        let specs = self.collect_specs(session)?;

        let record = ConversationRecord::completed(session.started(), occupation, identity, specs);
        session.store(&record)?;
        self.prompter.say(CLOSING_MESSAGE, Tone::Greeting)?;
        info!(id = %record.id, "session completed");
        Ok(SessionOutcome::Completed(record))
    }

    /// Ask until the answer parses as a number (digits or English words).
    ///
    /// Every attempt is recorded in the transcript. There is no retry cap.
    pub fn get_numeric_input(
        &mut self,
        session: &mut SessionContext<'_>,
        question: &str,
    ) -> Result<u64> {
        loop {
            let raw = self.ask(session, question)?;
            match parse_numeric_answer(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(question, error = %e, "numeric answer rejected");
                    self.prompter.say(NOT_A_NUMBER_MESSAGE, Tone::Warning)?;
                }
            }
        }
    }

    fn ask(&mut self, session: &mut SessionContext<'_>, question: &str) -> Result<String> {
        let response = self.prompter.query(question)?;
        session.record(question, &response)?;
        Ok(response)
    }

    /// Free-text question that repeats while the answer is blank
    fn ask_non_empty(&mut self, session: &mut SessionContext<'_>, question: &str) -> Result<String> {
        loop {
            let response = self.ask(session, question)?;
            let trimmed = response.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    fn ask_multiple(
        &mut self,
        session: &mut SessionContext<'_>,
        question: &str,
        options: &[MenuOption],
    ) -> Result<String> {
        let response = self.prompter.choose(question, options)?;
        session.record(question, &response)?;
        Ok(response)
    }

    fn answer(&mut self, message: &str) -> Result<()> {
        self.prompter.say(message, Tone::Info)
    }

    fn confirm(&mut self, session: &mut SessionContext<'_>, question: &str) -> Result<bool> {
        let response = self.ask_multiple(session, question, &MenuOption::yes_no())?;
        Ok(response == "yes")
    }

    fn collect_truck(&mut self, session: &mut SessionContext<'_>) -> Result<VehicleIdentity> {
        let table = self.references.load()?;
        let truck_name = self.ask_non_empty(session, TRUCK_NAME_QUESTION)?;

        let accepted = match resolve(&truck_name, &table) {
            MatchResult::Exact(entry) => Some(entry.name().to_string()),
            MatchResult::Candidate { entry, distance } => {
                let question = format!("Is {} the name of your truck?", entry.name());
                debug!(candidate = entry.name(), distance, "asking for confirmation");
                if self.confirm(session, &question)? {
                    Some(entry.name().to_string())
                } else {
                    None
                }
            }
            MatchResult::Unmatched => None,
        };

        match accepted {
            Some(name) => {
                self.answer(&format!(
                    "Thanks! I would like to get to know more about your {}.",
                    name
                ))?;
                Ok(VehicleIdentity::Single { name })
            }
            None => {
                self.add_new_entry(&truck_name, ReferenceEntry::truck(truck_name.as_str()))?;
                Ok(VehicleIdentity::Single { name: truck_name })
            }
        }
    }

    fn collect_manufacturer_model(
        &mut self,
        session: &mut SessionContext<'_>,
    ) -> Result<VehicleIdentity> {
        let table = self.references.load()?;
        let typed = self.ask_non_empty(session, MANUFACTURER_QUESTION)?;

        let confirmed = match resolve(&typed, &table) {
            MatchResult::Exact(entry) => Some(entry.name().to_string()),
            MatchResult::Candidate { entry, distance } => {
                let question = format!("Is {} the manufacturer of your truck?", entry.name());
                debug!(candidate = entry.name(), distance, "asking for confirmation");
                if self.confirm(session, &question)? {
                    Some(entry.name().to_string())
                } else {
                    None
                }
            }
            MatchResult::Unmatched => None,
        };

        let Some(manufacturer) = confirmed else {
            let model = self.ask_non_empty(session, MODEL_QUESTION)?;
            let display = format!("{} {}", typed, model);
            self.add_new_entry(
                &display,
                ReferenceEntry::manufacturer_model(typed.as_str(), model.as_str()),
            )?;
            return Ok(VehicleIdentity::ManufacturerModel {
                manufacturer: typed,
                model,
            });
        };

        let model = self.select_model(session, &table, &manufacturer)?;
        Ok(VehicleIdentity::ManufacturerModel {
            manufacturer,
            model,
        })
    }

    /// Enumerated model menu for a confirmed manufacturer, with an "Other" escape
    fn select_model(
        &mut self,
        session: &mut SessionContext<'_>,
        table: &ReferenceTable,
        manufacturer: &str,
    ) -> Result<String> {
        let models: Vec<String> = table
            .models_of(manufacturer)
            .iter()
            .filter_map(|e| e.model().map(str::to_string))
            .collect();

        let mut options: Vec<MenuOption> = models
            .iter()
            .enumerate()
            .map(|(i, m)| MenuOption::new((i + 1).to_string(), m.as_str(), m.as_str()))
            .collect();
        options.push(MenuOption::new(
            (models.len() + 1).to_string(),
            "Other",
            OTHER_MODEL_VALUE,
        ));

        let question = format!("Which {} model is your truck?", manufacturer);
        let choice = self.ask_multiple(session, &question, &options)?;

        if let Some(model) = models.into_iter().find(|m| *m == choice) {
            self.answer(&format!(
                "Thanks! I would like to get to know more about your {} {}.",
                manufacturer, model
            ))?;
            return Ok(model);
        }

        let typed = self.ask_non_empty(session, MODEL_QUESTION)?;
        if let Some(model) = find_model(table, manufacturer, &typed).and_then(|e| e.model()) {
            let model = model.to_string();
            self.answer(&format!(
                "Thanks! I would like to get to know more about your {} {}.",
                manufacturer, model
            ))?;
            return Ok(model);
        }

        let display = format!("{} {}", manufacturer, typed);
        self.add_new_entry(
            &display,
            ReferenceEntry::manufacturer_model(manufacturer, typed.as_str()),
        )?;
        Ok(typed)
    }

    fn add_new_entry(&mut self, display: &str, entry: ReferenceEntry) -> Result<()> {
        self.answer(&format!("That's a new one! I'll add {} to my database.", display))?;
        self.answer("Next, I would like to get to know more about your truck.")?;
        if let Err(e) = self.references.append(&entry) {
            warn!(error = %e, "failed to append reference entry");
            return Err(e);
        }
        info!(name = entry.name(), model = entry.model(), "reference entry added");
        Ok(())
    }

    fn collect_specs(&mut self, session: &mut SessionContext<'_>) -> Result<SpecValues> {
        let fleet_number = self.get_numeric_input(session, FLEET_NUMBER_QUESTION)?;
        let year = if self.options.collect_year {
            Some(self.get_numeric_input(session, YEAR_QUESTION)?)
        } else {
            None
        };
        let cylinders = self.get_numeric_input(session, CYLINDERS_QUESTION)?;
        let horsepower = self.get_numeric_input(session, HORSEPOWER_QUESTION)?;
        let weight = self.get_numeric_input(session, WEIGHT_QUESTION)?;

        Ok(SpecValues {
            fleet_number: Some(fleet_number),
            year,
            cylinders: Some(cylinders),
            horsepower: Some(horsepower),
            weight: Some(weight),
        })
    }
}

fn occupation_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new("1", "Fleet Owner", Occupation::Owner.as_str()),
        MenuOption::new("2", "Manager", Occupation::Manager.as_str()),
        MenuOption::new("3", "Other", Occupation::Other.as_str()),
    ]
}
